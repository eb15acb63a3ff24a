#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Which echo of a channel is turned into a point.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ReturnSelection {
    /// Only the strongest return is used. A missing strong return drops the channel.
    #[default]
    Strongest,
    /// The strongest return, or the last return when the strongest one is missing.
    StrongestOrLast,
}
