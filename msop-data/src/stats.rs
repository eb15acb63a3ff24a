#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Snapshot of the per-rotation statistics.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FrameStats {
    /// Rotation frequency derived from the last two frame boundaries.
    pub fps: f64,
    /// Number of distinct angles touched in the last completed rotation.
    pub point_count: usize,
    /// Number of frame boundaries seen so far.
    pub frames: u64,
    /// Number of datagrams dropped because they could not be decoded.
    pub malformed_packets: u64,
}
