/// 3D vector. Photon positions are in units of the slab height.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vector {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}
impl Vector {
    pub fn new(x: f64, y: f64, z: f64) -> Vector {
        Vector {
            x,
            y,
            z
        }
    }

    /// The origin, where photons are (re-)emitted.
    pub fn origin() -> Vector {
        Vector::new(0., 0., 0.)
    }

    /// Calculates vector magnitude.
    pub fn magnitude(&self) -> f64 {
        (self.x*self.x + self.y*self.y + self.z*self.z).sqrt()
    }

    /// Assigns vector values from another vector.
    pub fn assign(&mut self, other: &Vector) {
        self.x = other.x;
        self.y = other.y;
        self.z = other.z;
    }

    /// Translate this vector in place by a displacement.
    pub fn translate(&mut self, displacement: &Vector) {
        self.x += displacement.x;
        self.y += displacement.y;
        self.z += displacement.z;
    }
}
