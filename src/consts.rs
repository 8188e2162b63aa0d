use super::*;

//Angles
/// 2*pi, full azimuthal range.
pub const TWO_PI: f64 = 2.*PI;
/// Radians to degrees.
pub const DEGREES: f64 = 180./PI;

//Estimator
/// Smallest |mu| used by the path-length estimator. Keeps 1/|mu| finite for a photon travelling exactly horizontally.
pub const MIN_ABS_MU: f64 = 1E-10;

//Random streams
/// Golden-ratio increment used to spread per-stream seeds.
pub const STREAM_SEED_INCREMENT: u64 = 0x9E37_79B9_7F4A_7C15;

//Milne-Eddington law, I/H0 = A*mu + B
pub const MILNE_EDDINGTON_A: f64 = 3.;
pub const MILNE_EDDINGTON_B: f64 = 2.;

//Eddington approximation moments in units of H0
/// J(tau) = 3*tau + 2
pub const EDDINGTON_J: (f64, f64) = (3., 2.);
/// H(tau) = 1
pub const EDDINGTON_H: (f64, f64) = (0., 1.);
/// K(tau) = tau + 2/3
pub const EDDINGTON_K: (f64, f64) = (1., 2./3.);

//Rational fit to Chandrasekhar's H-function solution of the Milne problem
pub const CHANDRASEKHAR_Q: f64 = 0.70692;
/// (numerator, denominator slope) pairs of the correction terms.
pub const CHANDRASEKHAR_TERMS: [(f64, f64); 3] = [
    (0.08392, 4.45808),
    (0.03619, 1.59178),
    (0.00946, 1.10319),
];
