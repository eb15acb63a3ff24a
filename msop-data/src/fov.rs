#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

const FULL_TURN_HUNDREDTHS: u32 = 36000;

/// Angular window in degrees outside which measurements are discarded.
///
/// Both bounds are inclusive and are rounded to the nearest hundredth of a
/// degree before comparing, so `100.004` behaves as `100.00`. A window whose start is greater than its end
/// wraps through 0 degrees, e.g. `315..=45` keeps the sector in front of a
/// sensor whose 0 degree mark points forward.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FieldOfView {
    pub start_deg: f64,
    pub end_deg: f64,
}

impl Default for FieldOfView {
    fn default() -> Self {
        FieldOfView {
            start_deg: 0.,
            end_deg: 360.,
        }
    }
}

impl FieldOfView {
    pub fn new(start_deg: f64, end_deg: f64) -> FieldOfView {
        FieldOfView { start_deg, end_deg }
    }

    pub fn start_hundredths(&self) -> u32 {
        to_hundredths(self.start_deg)
    }

    pub fn end_hundredths(&self) -> u32 {
        to_hundredths(self.end_deg)
    }

    pub fn wraps(&self) -> bool {
        self.start_hundredths() > self.end_hundredths()
    }

    /// Tests an angle given in `1 / scale` hundredths of a degree.
    ///
    /// `scale` lets callers keep sub-hundredth precision without going
    /// through floating point.
    pub fn contains_scaled(&self, angle: u32, scale: u32) -> bool {
        let start = self.start_hundredths() * scale;
        let end = self.end_hundredths() * scale;
        if self.wraps() {
            angle >= start || angle <= end
        } else {
            (start..=end).contains(&angle)
        }
    }

    pub fn contains_hundredths(&self, angle: u32) -> bool {
        self.contains_scaled(angle, 1)
    }
}

fn to_hundredths(degree: f64) -> u32 {
    (degree * 100.).round().clamp(0., FULL_TURN_HUNDREDTHS as f64) as u32
}
