use super::*;
use std::str::FromStr;

/// Stage of a photon history.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum PhotonState {
    /// Direction freshly drawn from the Lambertian source at the base.
    EMITTING,
    /// Travelling between scattering events inside the slab.
    IN_FLIGHT,
    /// Photon left through the top of the slab. Terminal.
    ESCAPED,
}

/// Outcome of the boundary test that follows every free flight.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum BoundaryEvent {
    /// Still inside the slab; scattered isotropically.
    SCATTERED,
    /// Crossed the base; reset to the origin and re-emitted.
    REEMITTED,
    /// Crossed the top of the atmosphere.
    ESCAPED,
}

/// Radiation moment selector for depth-resolved output.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Moment {
    /// Mean intensity.
    J,
    /// Flux.
    H,
    /// Radiation pressure.
    K,
}

impl fmt::Display for Moment {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Moment::J => write!(f, "J"),
            Moment::H => write!(f, "H"),
            Moment::K => write!(f, "K"),
        }
    }
}

/// What the binary should do with the input file.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum RunMode {
    /// Single simulation; escape intensity and J, H, K profiles.
    MOMENTS,
    /// Sweep over tau_max; scattering events per photon.
    SCATTER,
}

impl FromStr for RunMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<RunMode> {
        match s {
            "MOMENTS" => Ok(RunMode::MOMENTS),
            "SCATTER" => Ok(RunMode::SCATTER),
            _ => Err(anyhow!("Input error: unknown mode {}. Use one of MOMENTS, SCATTER.", s)),
        }
    }
}

impl fmt::Display for RunMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            RunMode::MOMENTS => write!(f, "Escape intensity and radiation moments"),
            RunMode::SCATTER => write!(f, "Scattering events versus optical depth"),
        }
    }
}
