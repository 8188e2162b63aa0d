use super::*;
use indicatif::{ProgressBar, ProgressStyle};

fn progress_bar(total_count: u64) -> ProgressBar {
    let bar: ProgressBar = ProgressBar::new(total_count);
    bar.set_style(ProgressStyle::default_bar()
        .template("[{elapsed_precise}][{bar:40.cyan/blue}][{eta_precise}] {percent}%")
        .progress_chars("#>-"));
    bar
}

/// Run one simulation described by `input` with a progress bar and return the finished simulator.
pub fn physics_loop(input: &Input) -> Result<Simulator> {
    let options = &input.options;
    let mut simulator = input.simulation_parameters.simulator()?;
    let seed = options.seed.unwrap_or_else(random::entropy_seed);

    println!("Processing {} photons through tau_max = {}...", simulator.n_photons(), simulator.tau_max());
    println!("Initializing with {} threads, seed {}...", options.num_threads, seed);

    let bar = progress_bar(simulator.n_photons());
    simulator.run_parallel(options.num_threads, options.num_chunks, seed, Some(&bar))?;
    bar.finish();

    println!("Finished!");
    Ok(simulator)
}

/// Mean and spread of scattering events per photon for every tau_max of the sweep.
///
/// Each optical depth gets a fresh simulation with the same photon count and grids; depth
/// tallies are switched off since only the scattering counts are reported.
pub fn scatter_research(input: &Input) -> Result<Vec<output::ScatterPoint>> {
    let options = &input.options;
    let parameters = &input.simulation_parameters;
    let seed = options.seed.unwrap_or_else(random::entropy_seed);
    let taus = input.scatter_research.taus();
    let streams_per_run = options.num_chunks*options.num_threads as u64;

    println!("Scattering research over {} optical depths with {} photons each...", taus.len(), parameters.n_photons);

    let bar = progress_bar(parameters.n_photons*taus.len() as u64);
    let mut points = Vec::with_capacity(taus.len());

    for (index, tau_max) in taus.into_iter().enumerate() {
        let mut simulator = Simulator::new(parameters.n_photons, tau_max, parameters.n_mu_cells, 0)?;

        //Each optical depth draws from its own block of streams
        let run_seed = random::run_seed(seed, index as u64, streams_per_run);
        simulator.run_parallel(options.num_threads, options.num_chunks, run_seed, Some(&bar))?;

        let scattering = simulator.scattering();
        info!("tau_max = {}: {} +/- {} scattering events", tau_max, scattering.mean(), scattering.std_dev());
        points.push(output::ScatterPoint {
            tau_max,
            mean: scattering.mean(),
            std_dev: scattering.std_dev(),
        });
    }
    bar.finish();

    println!("Finished!");
    Ok(points)
}
