use crate::accumulator::FrameBoundary;
use msop_data::FrameStats;
use std::time::Instant;

/// Derives rotation rate and size from frame boundaries.
#[derive(Debug, Default)]
pub struct ScanStatsTracker {
    last_boundary: Option<Instant>,
    stats: FrameStats,
}

impl ScanStatsTracker {
    pub fn new() -> ScanStatsTracker {
        ScanStatsTracker::default()
    }

    pub fn record_boundary(&mut self, boundary: FrameBoundary, now: Instant) {
        if let Some(previous) = self.last_boundary {
            // a clock that went backwards counts as no time elapsed
            let elapsed = now
                .checked_duration_since(previous)
                .map(|d| d.as_secs_f64())
                .unwrap_or(0.);
            if elapsed > 0. {
                self.stats.fps = 1. / elapsed;
            }
        }
        self.last_boundary = Some(now);
        self.stats.point_count = boundary.point_count;
        self.stats.frames += 1;
    }

    pub fn record_malformed(&mut self) {
        self.stats.malformed_packets += 1;
    }

    pub fn last_boundary(&self) -> Option<Instant> {
        self.last_boundary
    }

    pub fn snapshot(&self) -> FrameStats {
        self.stats
    }
}
