use super::*;

/// Normalized escape intensity of one angular bin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IntensityPoint {
    /// Bin-center direction cosine.
    pub mu: f64,
    /// Bin-center exit angle in degrees.
    pub theta: f64,
    /// I/H0.
    pub intensity: f64,
    /// Poisson counting error on I/H0; zero for an empty bin.
    pub error: f64,
}

/// Depth-resolved radiation moment at a cell center.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MomentPoint {
    pub tau: f64,
    pub value: f64,
}

/// Numeric Eddington factors at a cell center.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EddingtonPoint {
    pub tau: f64,
    pub h_over_j: f64,
    pub k_over_j: f64,
}

/// Mean and spread of scattering events per photon for one optical depth.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScatterPoint {
    pub tau_max: f64,
    pub mean: f64,
    pub std_dev: f64,
}

fn histories(simulator: &Simulator) -> Result<f64> {
    let n_histories = simulator.n_histories();
    ensure!(n_histories > 0, "Output error: no photon histories have been simulated; run the simulation before normalizing.");
    Ok(n_histories as f64)
}

/// I/H0 = 2*count/(mu_c*dmu*N) for every angular bin, with error (I/H0)/sqrt(count).
pub fn escape_intensity(simulator: &Simulator) -> Result<Vec<IntensityPoint>> {
    let n = histories(simulator)?;
    let width = simulator.mu_cell_width();

    Ok(simulator.mu_cells().iter().enumerate().map(|(i, &count)| {
        let mu = (i as f64 + 0.5)*width;
        let intensity = 2.*count as f64/(mu*width*n);
        let error = if count > 0 {intensity/(count as f64).sqrt()} else {0.};
        IntensityPoint {
            mu,
            theta: mu.acos()*DEGREES,
            intensity,
            error,
        }
    }).collect())
}

/// Cell-centered moment: the mean of the two bounding boundary sums, per history.
pub fn radiation_moment(simulator: &Simulator, moment: Moment) -> Result<Vec<MomentPoint>> {
    let n = histories(simulator)?;
    let boundaries = simulator.boundaries(moment);

    Ok(simulator.taus().iter().zip(boundaries.windows(2)).map(|(&tau, pair)| {
        MomentPoint {
            tau,
            value: 0.5*(pair[0] + pair[1])/n,
        }
    }).collect())
}

/// H/J and K/J per depth cell. Cells without any J tally report zero.
pub fn eddington_factors(simulator: &Simulator) -> Result<Vec<EddingtonPoint>> {
    let j = radiation_moment(simulator, Moment::J)?;
    let h = radiation_moment(simulator, Moment::H)?;
    let k = radiation_moment(simulator, Moment::K)?;

    Ok(izip!(j, h, k).map(|(j, h, k)| {
        let (h_over_j, k_over_j) = if j.value > 0. {(h.value/j.value, k.value/j.value)} else {(0., 0.)};
        EddingtonPoint {
            tau: j.tau,
            h_over_j,
            k_over_j,
        }
    }).collect())
}

/// Print the escape intensity and depth profiles next to the analytic solutions.
pub fn print_summary(simulator: &Simulator, options: &Options) -> Result<()> {
    let scattering = simulator.scattering();

    println!("{} | photons: {} tau_max: {} mu cells: {} z cells: {}", options.name, simulator.n_histories(),
        simulator.tau_max(), simulator.n_mu_cells(), simulator.n_z_cells());
    println!("Scattering events per photon: {:.3} +/- {:.3}", scattering.mean(), scattering.std_dev());
    println!();

    println!("mu, theta, I/H0, error, Milne-Eddington, Chandrasekhar");
    for point in escape_intensity(simulator)? {
        println!("{:.4}, {:.3}, {:.5}, {:.5}, {:.5}, {:.5}", point.mu, point.theta, point.intensity, point.error,
            analytic::milne_eddington(point.mu), analytic::chandrasekhar(point.mu));
    }

    if simulator.n_z_cells() > 0 {
        let j = radiation_moment(simulator, Moment::J)?;
        let h = radiation_moment(simulator, Moment::H)?;
        let k = radiation_moment(simulator, Moment::K)?;
        let factors = eddington_factors(simulator)?;

        println!();
        let moments = [Moment::J, Moment::H, Moment::K];
        println!("tau, {}, {}, {}, {}_eddington, {}_eddington, {}_eddington, H/J, K/J, H/J_eddington, K/J_eddington",
            moments[0], moments[1], moments[2], moments[0], moments[1], moments[2]);
        for (j, h, k, factor) in izip!(&j, &h, &k, &factors) {
            let (h_over_j, k_over_j) = analytic::eddington_factors(j.tau);
            println!("{:.4}, {:.5}, {:.5}, {:.5}, {:.5}, {:.5}, {:.5}, {:.5}, {:.5}, {:.5}, {:.5}", j.tau, j.value, h.value, k.value,
                analytic::eddington_moment(Moment::J, j.tau), analytic::eddington_moment(Moment::H, j.tau),
                analytic::eddington_moment(Moment::K, j.tau), factor.h_over_j, factor.k_over_j, h_over_j, k_over_j);
        }
    }

    Ok(())
}

/// Print the scattering-count sweep.
pub fn print_scatter_research(points: &[ScatterPoint], options: &Options) {
    println!("{} | scattering events per photon", options.name);
    println!("tau_max, mean, std_dev");
    for point in points {
        println!("{:.3}, {:.4}, {:.4}", point.tau_max, point.mean, point.std_dev);
    }
}
