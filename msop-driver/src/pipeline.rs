use crate::accumulator::{PointStore, ScanAccumulator};
use crate::config::DriverConfig;
use crate::decoder::{DecodedPacket, PacketDecoder};
use crate::stats::ScanStatsTracker;
use msop_data::FrameStats;
use std::time::Instant;
use tracing::debug;

/// Decoder, accumulator and statistics run back to back on each datagram.
pub struct ScanPipeline {
    decoder: PacketDecoder,
    accumulator: ScanAccumulator,
    stats: ScanStatsTracker,
    decoded: DecodedPacket,
}

impl ScanPipeline {
    pub fn new(decoder: PacketDecoder) -> ScanPipeline {
        ScanPipeline {
            decoder,
            accumulator: ScanAccumulator::new(),
            stats: ScanStatsTracker::new(),
            decoded: DecodedPacket::default(),
        }
    }

    pub fn from_config(config: &DriverConfig) -> ScanPipeline {
        ScanPipeline::new(PacketDecoder::new(config.fov, config.return_selection))
    }

    /// Processes one datagram and returns the number of frame boundaries it closed.
    ///
    /// Malformed datagrams are counted and dropped.
    pub fn process(&mut self, datagram: &[u8], now: Instant) -> usize {
        self.decoded.clear();
        if let Err(e) = self.decoder.decode_into(datagram, &mut self.decoded) {
            debug!(error = %e, "dropping datagram");
            self.stats.record_malformed();
            return 0;
        }

        let mut n_boundaries = 0;
        for sample in self.decoded.samples.iter() {
            if let Some(boundary) = self.accumulator.push(*sample) {
                self.stats.record_boundary(boundary, now);
                n_boundaries += 1;
                let stats = self.stats.snapshot();
                debug!(
                    point_count = stats.point_count,
                    fps = stats.fps,
                    frames = stats.frames,
                    "frame completed"
                );
            }
        }
        n_boundaries
    }

    pub fn points(&self) -> &PointStore {
        self.accumulator.points()
    }

    pub fn accumulator(&self) -> &ScanAccumulator {
        &self.accumulator
    }

    pub fn stats(&self) -> FrameStats {
        self.stats.snapshot()
    }

    /// Azimuths of the data blocks of the last decoded datagram.
    pub fn last_azimuths(&self) -> &[u16] {
        &self.decoded.azimuths
    }
}
