#![allow(non_snake_case)]
#![allow(non_camel_case_types)]

use std::fmt;

//Error handling crate
use anyhow::{Result, Context, anyhow, ensure};

//Serializing/Deserializing crate
use serde::*;

//Logging facade
use log::{debug, info};

//Parallelization
use rayon::prelude::*;

//itertools
use itertools::izip;

//Math
use std::f64::consts::PI;

//Load internal modules
pub mod photon;
pub mod mcrt;
pub mod tallies;
pub mod simulator;
pub mod random;
pub mod analytic;
pub mod input;
pub mod output;
pub mod enums;
pub mod consts;
pub mod structs;
pub mod physics;

pub use crate::enums::*;
pub use crate::consts::*;
pub use crate::structs::*;
pub use crate::random::{RandomSource};
pub use crate::tallies::{MomentAccumulator, ScatteringStatistics};
pub use crate::simulator::{Simulator};
pub use crate::input::{Input, Options, SimulationParameters, ScatterResearch};
pub use crate::output::{IntensityPoint, MomentPoint, EddingtonPoint, ScatterPoint};
pub use crate::physics::{physics_loop};

/// Run a complete single-threaded simulation and return [mu, I/H0, error] for every angular bin.
pub fn simple_mcrt(n_photons: u64, tau_max: f64, n_mu_cells: usize, seed: u64) -> Result<Vec<[f64; 3]>> {

    let mut simulator = Simulator::new(n_photons, tau_max, n_mu_cells, 0)?;
    simulator.run_seeded(seed);

    Ok(output::escape_intensity(&simulator)?.iter().map(|point|
        [
            point.mu,
            point.intensity,
            point.error,
        ]
    ).collect())
}
