use crate::constants::{BLOCKS_PER_PACKET, CHANNELS_PER_BLOCK};
use crate::error::MsopError;
use crate::numeric::{
    angle_key, azimuth_delta, interpolated_angle, millimeter_to_meter, ANGLE_SUBSTEPS,
};
use crate::packet::{block_azimuth, channel_return, header_flag, validate_packet_length};
use msop_data::{FieldOfView, PointSample, ReturnSelection};
use tracing::trace;

/// Output of one datagram.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DecodedPacket {
    /// Samples in block order, then channel order.
    pub samples: Vec<PointSample>,
    /// Azimuth (hundredths of a degree) of every block that carried data.
    pub azimuths: Vec<u16>,
}

impl DecodedPacket {
    pub fn clear(&mut self) {
        self.samples.clear();
        self.azimuths.clear();
    }
}

/// Turns raw MSOP datagrams into point samples.
#[derive(Clone, Debug, Default)]
pub struct PacketDecoder {
    fov: FieldOfView,
    return_selection: ReturnSelection,
}

impl PacketDecoder {
    pub fn new(fov: FieldOfView, return_selection: ReturnSelection) -> PacketDecoder {
        PacketDecoder {
            fov,
            return_selection,
        }
    }

    pub fn fov(&self) -> &FieldOfView {
        &self.fov
    }

    pub fn return_selection(&self) -> ReturnSelection {
        self.return_selection
    }

    pub fn decode(&self, packet: &[u8]) -> Result<DecodedPacket, MsopError> {
        let mut decoded = DecodedPacket::default();
        self.decode_into(packet, &mut decoded)?;
        Ok(decoded)
    }

    /// Appends the samples of `packet` to `decoded`.
    ///
    /// A packet shorter than the protocol size is rejected as a whole. Blocks
    /// with a bad header flag or a padding azimuth are skipped, and so are
    /// channels without a usable return; neither stops the rest of the packet.
    pub fn decode_into(&self, packet: &[u8], decoded: &mut DecodedPacket) -> Result<(), MsopError> {
        validate_packet_length(packet)?;

        for block in 0..BLOCKS_PER_PACKET {
            let azimuth = match block_azimuth(packet, block) {
                Some(azimuth) => azimuth,
                None => {
                    trace!(block, flag = header_flag(packet, block), "skipping block");
                    continue;
                }
            };
            decoded.azimuths.push(azimuth);

            // Interpolation only looks inside this packet. Without a usable
            // successor every channel is stamped at the block azimuth.
            let delta = block_azimuth(packet, block + 1)
                .map(|next| azimuth_delta(azimuth, next))
                .unwrap_or(0);

            for channel in 0..CHANNELS_PER_BLOCK {
                let angle = interpolated_angle(azimuth, delta, channel);
                if !self.fov.contains_scaled(angle, ANGLE_SUBSTEPS) {
                    continue;
                }
                let ret = channel_return(packet, block, channel);
                let Some((distance_mm, intensity)) = ret.select(self.return_selection) else {
                    continue;
                };
                decoded.samples.push(PointSample {
                    angle_key: angle_key(angle),
                    distance_m: millimeter_to_meter(distance_mm),
                    intensity,
                });
            }
        }
        Ok(())
    }
}
