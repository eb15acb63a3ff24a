#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One validated measurement that passed the field-of-view filter.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PointSample {
    /// Azimuth in hundredths of a degree, always in `0..36000`.
    pub angle_key: u16,
    /// Distance to the target in meters.
    pub distance_m: f32,
    /// Return strength of the laser pulse.
    pub intensity: u8,
}

impl PointSample {
    pub fn angle_degree(&self) -> f64 {
        f64::from(self.angle_key) / 100.
    }

    pub fn angle_radian(&self) -> f64 {
        self.angle_degree().to_radians()
    }
}
