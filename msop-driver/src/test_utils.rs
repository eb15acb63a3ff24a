use crate::constants::{BLOCK_FLAG_VALID, PACKET_SIZE};
use crate::packet::{block_index, channel_index};

/// Builds synthetic datagrams. Unwritten blocks carry a zero header flag and
/// unwritten channels a zero (missing) distance.
pub(crate) struct PacketBuilder {
    bytes: Vec<u8>,
}

impl PacketBuilder {
    pub(crate) fn new() -> PacketBuilder {
        PacketBuilder {
            bytes: vec![0; PACKET_SIZE],
        }
    }

    pub(crate) fn block(self, block: usize, azimuth: u16) -> PacketBuilder {
        self.invalid_block(block, BLOCK_FLAG_VALID, azimuth)
    }

    pub(crate) fn invalid_block(mut self, block: usize, flag: u16, azimuth: u16) -> PacketBuilder {
        let i = block_index(block);
        self.bytes[i..i + 2].copy_from_slice(&flag.to_be_bytes());
        self.bytes[i + 2..i + 4].copy_from_slice(&azimuth.to_be_bytes());
        self
    }

    pub(crate) fn strong(
        mut self,
        block: usize,
        channel: usize,
        distance_mm: u16,
        intensity: u8,
    ) -> PacketBuilder {
        let i = channel_index(block, channel);
        self.bytes[i..i + 2].copy_from_slice(&distance_mm.to_be_bytes());
        self.bytes[i + 2] = intensity;
        self
    }

    pub(crate) fn last(
        mut self,
        block: usize,
        channel: usize,
        distance_mm: u16,
        intensity: u8,
    ) -> PacketBuilder {
        let i = channel_index(block, channel) + 3;
        self.bytes[i..i + 2].copy_from_slice(&distance_mm.to_be_bytes());
        self.bytes[i + 2] = intensity;
        self
    }

    /// Fills every channel of `block` with the same strong return.
    pub(crate) fn fill(mut self, block: usize, distance_mm: u16, intensity: u8) -> PacketBuilder {
        for channel in 0..16 {
            self = self.strong(block, channel, distance_mm, intensity);
        }
        self
    }

    pub(crate) fn build(self) -> Vec<u8> {
        self.bytes
    }
}
