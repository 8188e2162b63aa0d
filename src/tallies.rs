use super::*;

/// Running mean and spread of the number of scattering events per history.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScatteringStatistics {
    pub count: u64,
    pub sum: f64,
    pub sum_squares: f64,
}

impl ScatteringStatistics {
    pub fn new() -> ScatteringStatistics {
        ScatteringStatistics::default()
    }

    pub fn add(&mut self, number_scattering_events: usize) {
        let n = number_scattering_events as f64;
        self.count += 1;
        self.sum += n;
        self.sum_squares += n*n;
    }

    pub fn merge(&mut self, other: &ScatteringStatistics) {
        self.count += other.count;
        self.sum += other.sum;
        self.sum_squares += other.sum_squares;
    }

    pub fn mean(&self) -> f64 {
        if self.count == 0 {
            0.
        } else {
            self.sum/self.count as f64
        }
    }

    /// Sample standard deviation; zero for fewer than two histories.
    pub fn std_dev(&self) -> f64 {
        if self.count < 2 {
            return 0.;
        }
        let n = self.count as f64;
        let variance = (self.sum_squares - self.sum*self.sum/n)/(n - 1.);
        variance.max(0.).sqrt()
    }
}

/// Raw accumulators of a run: angular escape histogram and boundary moment sums.
///
/// Sums only ever grow; a partially filled accumulator is a valid, noisier result.
#[derive(Clone, Debug, PartialEq)]
pub struct MomentAccumulator {
    pub mu_cells: Vec<u64>,
    pub j_boundaries: Vec<f64>,
    pub h_boundaries: Vec<f64>,
    pub k_boundaries: Vec<f64>,
    pub n_histories: u64,
    pub scattering: ScatteringStatistics,
    mu_cell_width: f64,
    n_z_cells: usize,
}

impl MomentAccumulator {
    /// Zeroed accumulators. With `n_z_cells == 0` the boundary arrays are empty and
    /// depth-resolved tallying is disabled.
    pub fn new(n_mu_cells: usize, n_z_cells: usize) -> MomentAccumulator {
        let n_boundaries = if n_z_cells > 0 {n_z_cells + 1} else {0};
        MomentAccumulator {
            mu_cells: vec![0; n_mu_cells],
            j_boundaries: vec![0.; n_boundaries],
            h_boundaries: vec![0.; n_boundaries],
            k_boundaries: vec![0.; n_boundaries],
            n_histories: 0,
            scattering: ScatteringStatistics::new(),
            mu_cell_width: 1./n_mu_cells as f64,
            n_z_cells,
        }
    }

    pub fn n_mu_cells(&self) -> usize {
        self.mu_cells.len()
    }

    pub fn n_z_cells(&self) -> usize {
        self.n_z_cells
    }

    /// Path-length estimator for one flight segment from height z0 to z1 with direction
    /// cosine mu. Every boundary index in the clipped range [jMin, jMax) receives 1/|mu|,
    /// mu/|mu| and |mu|.
    pub fn tally_segment(&mut self, z0: f64, z1: f64, mu: f64) {
        if self.n_z_cells == 0 {
            return;
        }
        let n = self.n_z_cells as f64;

        let j0 = (z0*n).floor();
        let j1 = (z1*n).floor();
        let j_min = j0.min(j1).max(0.);
        let j_max = j0.max(j1).min(n + 1.);

        if j_max <= j_min {
            return;
        }

        let abs_mu = mu.abs().max(MIN_ABS_MU);
        let j_tally = 1./abs_mu;
        let h_tally = mu/abs_mu;
        let k_tally = abs_mu;

        for j in (j_min as usize)..(j_max as usize) {
            self.j_boundaries[j] += j_tally;
            self.h_boundaries[j] += h_tally;
            self.k_boundaries[j] += k_tally;
        }
    }

    /// Index of the angular bin for an exit cosine. mu == 1 falls in the last bin.
    pub fn mu_cell_index(&self, mu: f64) -> usize {
        let index = (mu/self.mu_cell_width).floor();
        if index <= 0. {
            0
        } else {
            (index as usize).min(self.mu_cells.len() - 1)
        }
    }

    /// Record a finished history: its exit angle and its number of scatterings.
    pub fn bin_escape(&mut self, mu: f64, number_scattering_events: usize) {
        let index = self.mu_cell_index(mu);
        self.mu_cells[index] += 1;
        self.n_histories += 1;
        self.scattering.add(number_scattering_events);
    }

    /// Sum another accumulator of the same shape into this one.
    pub fn merge(&mut self, other: &MomentAccumulator) -> Result<()> {
        ensure!(self.mu_cells.len() == other.mu_cells.len() && self.n_z_cells == other.n_z_cells,
            "Tally error: cannot merge accumulators of shape ({}, {}) and ({}, {}).",
            self.mu_cells.len(), self.n_z_cells, other.mu_cells.len(), other.n_z_cells);

        for (total, count) in self.mu_cells.iter_mut().zip(&other.mu_cells) {
            *total += count;
        }
        for (total, sum) in self.j_boundaries.iter_mut().zip(&other.j_boundaries) {
            *total += sum;
        }
        for (total, sum) in self.h_boundaries.iter_mut().zip(&other.h_boundaries) {
            *total += sum;
        }
        for (total, sum) in self.k_boundaries.iter_mut().zip(&other.k_boundaries) {
            *total += sum;
        }
        self.n_histories += other.n_histories;
        self.scattering.merge(&other.scattering);

        Ok(())
    }
}
