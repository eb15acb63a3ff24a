pub mod fov;
pub mod point;
pub mod return_selection;
pub mod stats;

pub use fov::FieldOfView;
pub use point::PointSample;
pub use return_selection::ReturnSelection;
pub use stats::FrameStats;

/// Number of distinct angle keys in one rotation (0.01 degree resolution).
pub const ANGLE_KEY_COUNT: usize = 36000;
