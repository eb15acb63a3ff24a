use crate::constants::{
    AZIMUTH_PADDING, BLOCKS_PER_PACKET, BLOCK_FLAG_VALID, BLOCK_HEADER_SIZE, BLOCK_SIZE,
    CHANNEL_SIZE, DISTANCE_INVALID, DISTANCE_NONE, FULL_TURN, PACKET_SIZE,
};
use crate::error::MsopError;
use crate::numeric::to_u16;
use msop_data::ReturnSelection;

/// Both echoes reported by one channel of a block.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct ChannelReturn {
    pub(crate) strong_distance: u16,
    pub(crate) strong_intensity: u8,
    pub(crate) last_distance: u16,
    pub(crate) last_intensity: u8,
}

impl ChannelReturn {
    /// Distance (mm) and intensity of the echo picked by `selection`.
    pub(crate) fn select(&self, selection: ReturnSelection) -> Option<(u16, u8)> {
        if !is_distance_sentinel(self.strong_distance) {
            return Some((self.strong_distance, self.strong_intensity));
        }
        match selection {
            ReturnSelection::Strongest => None,
            ReturnSelection::StrongestOrLast if !is_distance_sentinel(self.last_distance) => {
                Some((self.last_distance, self.last_intensity))
            }
            ReturnSelection::StrongestOrLast => None,
        }
    }
}

pub(crate) fn validate_packet_length(packet: &[u8]) -> Result<(), MsopError> {
    if packet.len() < PACKET_SIZE {
        return Err(MsopError::PacketTooShort {
            expected: PACKET_SIZE,
            actual: packet.len(),
        });
    }
    Ok(())
}

pub(crate) fn block_index(block: usize) -> usize {
    block * BLOCK_SIZE
}

pub(crate) fn header_flag(packet: &[u8], block: usize) -> u16 {
    let i = block_index(block);
    to_u16(packet[i], packet[i + 1])
}

pub(crate) fn raw_azimuth(packet: &[u8], block: usize) -> u16 {
    let i = block_index(block);
    to_u16(packet[i + 2], packet[i + 3])
}

/// Azimuth of a block that carries data, `None` for invalid or padding blocks
/// and for azimuths beyond one turn. The packet length must have been validated.
pub(crate) fn block_azimuth(packet: &[u8], block: usize) -> Option<u16> {
    if block >= BLOCKS_PER_PACKET || header_flag(packet, block) != BLOCK_FLAG_VALID {
        return None;
    }
    match raw_azimuth(packet, block) {
        AZIMUTH_PADDING => None,
        azimuth if u32::from(azimuth) >= FULL_TURN => None,
        azimuth => Some(azimuth),
    }
}

pub(crate) fn channel_index(block: usize, channel: usize) -> usize {
    block_index(block) + BLOCK_HEADER_SIZE + channel * CHANNEL_SIZE
}

pub(crate) fn channel_return(packet: &[u8], block: usize, channel: usize) -> ChannelReturn {
    let i = channel_index(block, channel);
    ChannelReturn {
        strong_distance: to_u16(packet[i], packet[i + 1]),
        strong_intensity: packet[i + 2],
        last_distance: to_u16(packet[i + 3], packet[i + 4]),
        last_intensity: packet[i + 5],
    }
}

pub(crate) fn is_distance_sentinel(distance: u16) -> bool {
    distance == DISTANCE_NONE || distance == DISTANCE_INVALID
}
