use super::*;

/// Emergent intensity I/H0 of the Milne-Eddington approximation.
pub fn milne_eddington(mu: f64) -> f64 {
    MILNE_EDDINGTON_A*mu + MILNE_EDDINGTON_B
}

/// Emergent intensity I/H0 from the rational fit to Chandrasekhar's exact solution.
pub fn chandrasekhar(mu: f64) -> f64 {
    let correction: f64 = CHANDRASEKHAR_TERMS.iter()
        .map(|(numerator, slope)| numerator/(1. + slope*mu))
        .sum();
    3.*(mu + CHANDRASEKHAR_Q - correction)
}

/// Eddington-approximation moment at optical depth tau, in units of H0.
pub fn eddington_moment(moment: Moment, tau: f64) -> f64 {
    let (a, b) = match moment {
        Moment::J => EDDINGTON_J,
        Moment::H => EDDINGTON_H,
        Moment::K => EDDINGTON_K,
    };
    a*tau + b
}

/// Analytic Eddington factors (H/J, K/J) at optical depth tau.
pub fn eddington_factors(tau: f64) -> (f64, f64) {
    let j = eddington_moment(Moment::J, tau);
    (eddington_moment(Moment::H, tau)/j, eddington_moment(Moment::K, tau)/j)
}
