use super::*;

/// RustMCRT's internal representation of an input file.
#[derive(Deserialize, Clone, Debug)]
pub struct Input {
    pub options: Options,
    pub simulation_parameters: SimulationParameters,
    #[serde(default)]
    pub scatter_research: ScatterResearch,
}

impl Input {
    pub fn new(string: &str) -> Result<Input> {
        toml::from_str(string).context(
            "Could not parse TOML file. Be sure it contains [options] and [simulation_parameters] tables."
        )
    }
}

///This helper function is a workaround to issue #368 in serde
fn one_usize() -> usize {
    1
}

///This helper function is a workaround to issue #368 in serde
fn one_u64() -> u64 {
    1
}

///This helper function is a workaround to issue #368 in serde
fn default_name() -> String {
    "RustMCRT".to_string()
}

///This helper function is a workaround to issue #368 in serde
fn zero_usize() -> usize {
    0
}

/// Run-level options that do not change the physics.
#[derive(Deserialize, Clone, Debug)]
pub struct Options {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default = "one_usize")]
    pub num_threads: usize,
    #[serde(default = "one_u64")]
    pub num_chunks: u64,
    #[serde(default)]
    pub seed: Option<u64>,
}

/// Physical and grid parameters of a single simulation.
#[derive(Deserialize, Clone, Debug)]
pub struct SimulationParameters {
    pub n_photons: u64,
    pub tau_max: f64,
    pub n_mu_cells: usize,
    #[serde(default = "zero_usize")]
    pub n_z_cells: usize,
}

impl SimulationParameters {
    pub fn simulator(&self) -> Result<Simulator> {
        Simulator::new(self.n_photons, self.tau_max, self.n_mu_cells, self.n_z_cells)
    }
}

/// Range of total optical depths swept by the scattering-count research, upper end excluded.
#[derive(Deserialize, Clone, Debug)]
pub struct ScatterResearch {
    pub tau_min: f64,
    pub tau_max: f64,
    pub tau_step: f64,
}

impl Default for ScatterResearch {
    fn default() -> ScatterResearch {
        ScatterResearch {
            tau_min: 2.,
            tau_max: 20.,
            tau_step: 2.,
        }
    }
}

impl ScatterResearch {
    /// Optical depths of the sweep: tau_min, tau_min + step, ... while below tau_max.
    pub fn taus(&self) -> Vec<f64> {
        let num_steps = ((self.tau_max - self.tau_min)/self.tau_step).ceil().max(0.) as usize;
        (0..num_steps)
            .map(|i| self.tau_min + i as f64*self.tau_step)
            .filter(|tau| *tau < self.tau_max)
            .collect()
    }
}

/// Check that an input describes a runnable simulation.
pub fn validate(input: &Input) -> Result<()> {
    let options = &input.options;
    let parameters = &input.simulation_parameters;
    let research = &input.scatter_research;

    //Ensure nonsensical threads/chunks options fail on input
    ensure!(options.num_threads > 0, "Input error: num_threads must be greater than zero.");
    ensure!(options.num_chunks > 0, "Input error: num_chunks must be greater than zero.");

    ensure!(parameters.n_photons > 0, "Input error: n_photons must be greater than zero.");
    ensure!(parameters.tau_max.is_finite() && parameters.tau_max > 0., "Input error: tau_max must be a positive, finite number.");
    ensure!(parameters.n_mu_cells > 0, "Input error: n_mu_cells must be greater than zero.");
    ensure!(parameters.n_photons/options.num_chunks > 0, "Input error: chunk size == 0 - reduce num_chunks or increase n_photons.");

    ensure!(research.tau_min > 0., "Input error: scatter_research.tau_min must be greater than zero.");
    ensure!(research.tau_step > 0., "Input error: scatter_research.tau_step must be greater than zero.");
    ensure!(research.tau_max > research.tau_min, "Input error: scatter_research.tau_max must be greater than tau_min.");

    Ok(())
}

/// Read, parse and validate an input file.
pub fn input(input_file: &str) -> Result<Input> {
    let input_toml = std::fs::read_to_string(input_file)
        .with_context(|| format!("Input error: could not open input file {}.", input_file))?;

    let input = Input::new(&input_toml)?;
    validate(&input)?;

    Ok(input)
}
