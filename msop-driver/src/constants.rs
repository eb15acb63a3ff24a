pub(crate) const PACKET_SIZE: usize = 1206;
pub(crate) const BLOCKS_PER_PACKET: usize = 12;
pub(crate) const BLOCK_SIZE: usize = 100;
pub(crate) const BLOCK_HEADER_SIZE: usize = 4;
pub(crate) const CHANNELS_PER_BLOCK: usize = 16;
pub(crate) const CHANNEL_SIZE: usize = 6;
pub(crate) const BLOCK_FLAG_VALID: u16 = 0xFFEE;
pub(crate) const AZIMUTH_PADDING: u16 = 0xFFFF;
pub(crate) const DISTANCE_NONE: u16 = 0x0000;
pub(crate) const DISTANCE_INVALID: u16 = 0xFFFF;
// Angles are in hundredths of a degree
pub(crate) const FULL_TURN: u32 = 36000;
pub(crate) const HALF_TURN: u32 = 18000;
pub(crate) const RECV_BUFFER_SIZE: usize = 2048;
pub(crate) const DEFAULT_MSOP_PORT: u16 = 6699;
