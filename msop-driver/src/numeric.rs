use crate::constants::{CHANNELS_PER_BLOCK, FULL_TURN};

/// Sub-steps per hundredth of a degree used while interpolating.
/// One block spans `CHANNELS_PER_BLOCK` increments, so dividing the block
/// delta by it is exact in this unit.
pub(crate) const ANGLE_SUBSTEPS: u32 = CHANNELS_PER_BLOCK as u32;

pub(crate) fn to_u16(a: u8, b: u8) -> u16 {
    ((a as u16) << 8) + (b as u16)
}

/// Angular distance from `azimuth` to `next_azimuth`, corrected across the 0/360 seam.
pub(crate) fn azimuth_delta(azimuth: u16, next_azimuth: u16) -> u32 {
    let delta = i32::from(next_azimuth) - i32::from(azimuth);
    if delta < 0 {
        (delta + FULL_TURN as i32) as u32
    } else {
        delta as u32
    }
}

/// Angle of the `index`-th measurement of a block, in `1 / ANGLE_SUBSTEPS`
/// hundredths of a degree, wrapped into one turn.
pub(crate) fn interpolated_angle(azimuth: u16, delta: u32, index: usize) -> u32 {
    let angle = u32::from(azimuth) * ANGLE_SUBSTEPS + delta * index as u32;
    angle % (FULL_TURN * ANGLE_SUBSTEPS)
}

/// Rounds an interpolated angle to the nearest hundredth of a degree.
pub(crate) fn angle_key(angle: u32) -> u16 {
    let rounded = (angle + ANGLE_SUBSTEPS / 2) / ANGLE_SUBSTEPS;
    (rounded % FULL_TURN) as u16
}

pub(crate) fn millimeter_to_meter(distance_mm: u16) -> f32 {
    f32::from(distance_mm) / 1000.
}
