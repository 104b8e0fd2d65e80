use std::ops::Add;

use crate::core::data::spherical::SphericalCoord;

#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Coord3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Coord3 {
    pub const ORIGIN: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    #[must_use]
    pub fn norm(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Polar angle is measured from the +z axis, azimuth from +x towards +y.
    #[must_use]
    pub fn to_spherical(&self) -> SphericalCoord {
        let r = self.norm();
        let theta = (self.x * self.x + self.y * self.y).sqrt().atan2(self.z);
        let phi = self.y.atan2(self.x);

        SphericalCoord { r, theta, phi }
    }
}

impl Add for Coord3 {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }
}
