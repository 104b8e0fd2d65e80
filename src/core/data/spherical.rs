use crate::core::data::coord3::Coord3;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SphericalCoord {
    pub r: f64,
    pub theta: f64,
    pub phi: f64,
}

impl SphericalCoord {
    /// Triplex power map: raises the radius to `power` and scales both angles by it.
    ///
    /// `0^power` follows `f64::powf`, so the origin stays at the origin for any
    /// positive power.
    #[must_use]
    pub fn triplex_power(&self, power: f64) -> Coord3 {
        let radius = self.r.powf(power);
        let theta = self.theta * power;
        let phi = self.phi * power;

        Coord3 {
            x: radius * theta.sin() * phi.cos(),
            y: radius * theta.sin() * phi.sin(),
            z: radius * theta.cos(),
        }
    }
}
