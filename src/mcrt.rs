use super::*;

/// Follow one photon history from emission to escape.
///
/// The path-length estimator is applied to every flight segment, whether it ends in a
/// scattering, a re-emission or the escape. The escaped photon is returned so the caller can
/// bin its exit angle.
pub fn single_photon_mcrt<R: RandomSource>(tau_max: f64, accumulator: &mut MomentAccumulator, rng: &mut R) -> photon::Photon {

    let mut photon = photon::Photon::new(tau_max, rng);

    //MCRT loop
    while !photon.escaped() {

        let z0 = photon.z();
        photon::photon_advance(&mut photon, rng);
        let z1 = photon.z();

        //Direction is still the one the segment was flown with
        accumulator.tally_segment(z0, z1, photon.mu());

        photon::boundary_condition(&mut photon, rng);
    }

    photon
}

/// Run `count` complete histories into an accumulator, binning each exit angle.
pub fn photon_histories<R: RandomSource>(count: u64, tau_max: f64, accumulator: &mut MomentAccumulator, rng: &mut R) {
    for _ in 0..count {
        let photon = single_photon_mcrt(tau_max, accumulator, rng);
        let mu = photon.mu();
        accumulator.bin_escape(mu, photon.number_scattering_events);
    }
}
