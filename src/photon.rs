use super::*;

/// Propagation direction of a photon packet.
///
/// `mu` is the cosine of the angle to the local vertical and `phi` the azimuth. The polar
/// angle `theta = acos(mu)` is cached alongside `mu`; the fields are private so the only way
/// to change `mu` is to build a new `Direction`, which recomputes `theta`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Direction {
    mu: f64,
    phi: f64,
    theta: f64,
}

impl Direction {
    pub fn new(mu: f64, phi: f64) -> Direction {
        let mu = mu.clamp(-1., 1.);
        Direction {
            mu,
            phi,
            theta: mu.acos(),
        }
    }

    pub fn mu(&self) -> f64 {
        self.mu
    }

    pub fn phi(&self) -> f64 {
        self.phi
    }

    pub fn theta(&self) -> f64 {
        self.theta
    }

    /// Displacement of a step of geometric length `s` along this direction.
    pub fn displacement(&self, s: f64) -> Vector {
        let sin_theta = self.theta.sin();
        Vector::new(
            s*sin_theta*self.phi.cos(),
            s*sin_theta*self.phi.sin(),
            s*self.mu,
        )
    }
}

/// Photon packet. One is created per history and dropped once its exit angle is binned.
#[derive(Clone, Debug)]
pub struct Photon {
    pub pos: Vector,
    direction: Direction,
    pub tau_max: f64,
    pub state: PhotonState,
    pub number_scattering_events: usize,
}

impl Photon {
    /// Construct a photon at the base of the slab with a Lambertian direction.
    pub fn new<R: RandomSource>(tau_max: f64, rng: &mut R) -> Photon {
        let mut photon = Photon {
            pos: Vector::origin(),
            direction: Direction::new(1., 0.),
            tau_max,
            state: PhotonState::EMITTING,
            number_scattering_events: 0,
        };
        lambertian_emission(&mut photon, rng);
        photon
    }

    /// Photon with a fixed position and direction, for driving single transitions.
    pub fn with_direction(tau_max: f64, pos: Vector, direction: Direction) -> Photon {
        Photon {
            pos,
            direction,
            tau_max,
            state: PhotonState::IN_FLIGHT,
            number_scattering_events: 0,
        }
    }

    pub fn direction(&self) -> &Direction {
        &self.direction
    }

    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    pub fn mu(&self) -> f64 {
        self.direction.mu()
    }

    pub fn theta(&self) -> f64 {
        self.direction.theta()
    }

    /// Height above the base in units of the slab height.
    pub fn z(&self) -> f64 {
        self.pos.z
    }

    pub fn escaped(&self) -> bool {
        self.state == PhotonState::ESCAPED
    }

    /// Exit angle cosine, once the photon has escaped.
    pub fn exit_mu(&self) -> Option<f64> {
        if self.escaped() {
            Some(self.mu())
        } else {
            None
        }
    }
}

/// Draw a direction from the diffuse source at the base: mu = sqrt(r1), phi = 2*pi*r2.
pub fn lambertian_emission<R: RandomSource>(photon: &mut Photon, rng: &mut R) {
    let r1 = rng.uniform();
    let r2 = rng.uniform();
    photon.set_direction(Direction::new(r1.sqrt(), TWO_PI*r2));
    photon.state = PhotonState::EMITTING;
}

/// Draw a new direction uniformly over the sphere: mu = 2*r1 - 1, phi = 2*pi*r2.
pub fn isotropic_scatter<R: RandomSource>(photon: &mut Photon, rng: &mut R) {
    let r1 = rng.uniform();
    let r2 = rng.uniform();
    photon.set_direction(Direction::new(2.*r1 - 1., TWO_PI*r2));
    photon.number_scattering_events += 1;
}

/// Push the photon along its direction by an exponentially distributed optical path and
/// return the geometric distance traveled.
pub fn photon_advance<R: RandomSource>(photon: &mut Photon, rng: &mut R) -> f64 {
    //Unit-mean exponential optical path, converted to slab heights
    let tau = -rng.uniform().ln();
    let s = tau/photon.tau_max;

    let displacement = photon.direction.displacement(s);
    photon.pos.translate(&displacement);
    photon.state = PhotonState::IN_FLIGHT;

    s
}

/// Apply the slab boundaries after a free flight.
///
/// Below the base the photon is moved back to the origin and re-emitted as a fresh diffuse
/// packet. Above the top it escapes and its direction is frozen. Otherwise it scatters.
pub fn boundary_condition<R: RandomSource>(photon: &mut Photon, rng: &mut R) -> BoundaryEvent {
    if photon.pos.z < 0. {
        photon.pos.assign(&Vector::origin());
        lambertian_emission(photon, rng);
        BoundaryEvent::REEMITTED
    } else if photon.pos.z > 1. {
        photon.state = PhotonState::ESCAPED;
        BoundaryEvent::ESCAPED
    } else {
        isotropic_scatter(photon, rng);
        BoundaryEvent::SCATTERED
    }
}
