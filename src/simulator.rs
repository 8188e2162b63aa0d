use super::*;
use indicatif::ProgressBar;

/// Monte Carlo radiative transfer through a plane-parallel, conservatively and isotropically
/// scattering slab of total optical depth `tau_max`.
///
/// Heights are measured from the base (z = 0) to the top of the atmosphere (z = 1). The depth
/// grid has `n_z_cells` cells of equal optical thickness; `taus[i]` is the optical depth below
/// the top at the center of cell i, so it decreases with i.
pub struct Simulator {
    n_photons: u64,
    tau_max: f64,
    n_mu_cells: usize,
    mu_cell_width: f64,
    n_z_cells: usize,
    z_cell_height: f64,
    taus: Vec<f64>,
    accumulator: MomentAccumulator,
}

impl Simulator {
    pub fn new(n_photons: u64, tau_max: f64, n_mu_cells: usize, n_z_cells: usize) -> Result<Simulator> {
        ensure!(n_photons > 0, "Input error: n_photons must be greater than zero.");
        ensure!(tau_max.is_finite() && tau_max > 0., "Input error: tau_max {} must be a positive, finite number.", tau_max);
        ensure!(n_mu_cells > 0, "Input error: n_mu_cells must be greater than zero.");

        let z_cell_height = if n_z_cells > 0 {1./n_z_cells as f64} else {0.};
        let taus = (0..n_z_cells)
            .map(|i| tau_max*(1. - (i as f64 + 0.5)*z_cell_height))
            .collect();

        Ok(Simulator {
            n_photons,
            tau_max,
            n_mu_cells,
            mu_cell_width: 1./n_mu_cells as f64,
            n_z_cells,
            z_cell_height,
            taus,
            accumulator: MomentAccumulator::new(n_mu_cells, n_z_cells),
        })
    }

    /// Run all histories sequentially on the thread-local generator.
    ///
    /// Calling a run method again accumulates on top of the existing tallies.
    pub fn run(&mut self) {
        self.run_with(&mut rand::thread_rng());
    }

    /// Run all histories sequentially on an injected source.
    pub fn run_with<R: RandomSource>(&mut self, rng: &mut R) {
        info!("Running {} photons through tau_max = {}", self.n_photons, self.tau_max);
        mcrt::photon_histories(self.n_photons, self.tau_max, &mut self.accumulator, rng);
    }

    /// Run all histories sequentially on stream 0 of `seed`.
    pub fn run_seeded(&mut self, seed: u64) {
        self.run_with(&mut random::stream(seed, 0));
    }

    /// Run `count` histories into fresh accumulators, leaving this simulator untouched.
    pub fn simulate_histories<R: RandomSource>(&self, count: u64, rng: &mut R, bar: Option<&ProgressBar>) -> MomentAccumulator {
        let mut accumulator = MomentAccumulator::new(self.n_mu_cells, self.n_z_cells);
        for _ in 0..count {
            let photon = mcrt::single_photon_mcrt(self.tau_max, &mut accumulator, rng);
            accumulator.bin_escape(photon.mu(), photon.number_scattering_events);
            if let Some(bar) = bar {
                bar.inc(1);
            }
        }
        accumulator
    }

    /// Run all histories on `num_threads` workers.
    ///
    /// Histories are processed in `num_chunks` consecutive chunks; the tallies are complete
    /// after every chunk. Within a chunk each worker owns a seeded stream and private
    /// accumulators, which are summed in stream order, so a given seed, thread count and chunk
    /// count always reproduce the same tallies.
    pub fn run_parallel(&mut self, num_threads: usize, num_chunks: u64, seed: u64, bar: Option<&ProgressBar>) -> Result<()> {
        ensure!(num_threads > 0, "Input error: num_threads must be greater than zero.");
        ensure!(num_chunks > 0, "Input error: num_chunks must be greater than zero.");
        ensure!(self.n_photons/num_chunks > 0, "Input error: chunk size == 0 - reduce num_chunks or increase photon count.");

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .build()
            .context("Could not build worker thread pool.")?;

        for (chunk_index, chunk_size) in split_evenly(self.n_photons, num_chunks).into_iter().enumerate() {

            let stream_sizes = split_evenly(chunk_size, num_threads as u64);
            let first_stream = chunk_index as u64*num_threads as u64;

            let stream_tallies: Vec<MomentAccumulator> = if num_threads > 1 {
                let simulator = &*self;
                pool.install(|| {
                    stream_sizes.par_iter().enumerate()
                        .map(|(stream_index, &count)| {
                            let mut rng = random::stream(seed, first_stream + stream_index as u64);
                            simulator.simulate_histories(count, &mut rng, bar)
                        })
                        .collect()
                })
            } else {
                let mut rng = random::stream(seed, first_stream);
                vec![self.simulate_histories(chunk_size, &mut rng, bar)]
            };

            for tallies in stream_tallies.iter() {
                self.accumulator.merge(tallies)?;
            }
            debug!("Chunk {} finished: {} of {} photons", chunk_index, self.accumulator.n_histories, self.n_photons);
        }

        Ok(())
    }

    pub fn n_photons(&self) -> u64 {
        self.n_photons
    }

    pub fn tau_max(&self) -> f64 {
        self.tau_max
    }

    pub fn n_mu_cells(&self) -> usize {
        self.n_mu_cells
    }

    pub fn mu_cell_width(&self) -> f64 {
        self.mu_cell_width
    }

    pub fn n_z_cells(&self) -> usize {
        self.n_z_cells
    }

    /// Height of one depth cell; zero when depth tallying is disabled.
    pub fn z_cell_height(&self) -> f64 {
        self.z_cell_height
    }

    pub fn taus(&self) -> &[f64] {
        &self.taus
    }

    pub fn mu_cells(&self) -> &[u64] {
        &self.accumulator.mu_cells
    }

    pub fn j_boundaries(&self) -> &[f64] {
        &self.accumulator.j_boundaries
    }

    pub fn h_boundaries(&self) -> &[f64] {
        &self.accumulator.h_boundaries
    }

    pub fn k_boundaries(&self) -> &[f64] {
        &self.accumulator.k_boundaries
    }

    pub fn boundaries(&self, moment: Moment) -> &[f64] {
        match moment {
            Moment::J => self.j_boundaries(),
            Moment::H => self.h_boundaries(),
            Moment::K => self.k_boundaries(),
        }
    }

    pub fn accumulator(&self) -> &MomentAccumulator {
        &self.accumulator
    }

    /// Histories completed so far.
    pub fn n_histories(&self) -> u64 {
        self.accumulator.n_histories
    }

    pub fn scattering(&self) -> &ScatteringStatistics {
        &self.accumulator.scattering
    }
}

/// Split `total` into `parts` sizes differing by at most one.
pub fn split_evenly(total: u64, parts: u64) -> Vec<u64> {
    let base = total/parts;
    let remainder = total%parts;
    (0..parts).map(|part| base + if part < remainder {1} else {0}).collect()
}
