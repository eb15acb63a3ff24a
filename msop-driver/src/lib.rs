mod accumulator;
mod config;
mod constants;
mod decoder;
mod driver_loop;
mod error;
mod numeric;
mod packet;
mod pipeline;
mod stats;
mod transport;

#[cfg(test)]
mod test_utils;

pub use crate::accumulator::{FrameBoundary, PointStore, ScanAccumulator};
pub use crate::config::DriverConfig;
pub use crate::decoder::{DecodedPacket, PacketDecoder};
pub use crate::driver_loop::run_loop;
pub use crate::error::MsopError;
pub use crate::pipeline::ScanPipeline;
pub use crate::stats::ScanStatsTracker;
pub use crate::transport::{PacketSource, UdpSource};
use crossbeam_channel::Receiver;
use msop_data::FrameStats;

/// Function to launch the MSOP driver on the calling thread.
/// # Arguments
///
/// * `config` - Listen address, field of view and return selection.
/// * `terminator_rx` - Sending `true`, or dropping the sender, stops the driver.
/// * `render` - Called once per iteration with read access to the points and statistics.
///
/// Binding the socket is the only fatal error. Returns the statistics at the
/// time the driver stopped.
pub fn run_driver<F>(
    config: &DriverConfig,
    terminator_rx: &Receiver<bool>,
    render: F,
) -> Result<FrameStats, MsopError>
where
    F: FnMut(&ScanPipeline),
{
    config.validate()?;
    let mut source = UdpSource::bind(config.listen_addr)?;
    let mut pipeline = ScanPipeline::from_config(config);
    run_loop(&mut source, &mut pipeline, terminator_rx, render);
    Ok(pipeline.stats())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::PacketBuilder;
    use crossbeam_channel::bounded;
    use msop_data::FieldOfView;
    use std::net::{SocketAddr, UdpSocket};
    use std::thread::sleep;
    use std::time::{Duration, Instant};

    fn free_local_addr() -> SocketAddr {
        let socket = UdpSocket::bind("127.0.0.1:0").unwrap();
        socket.local_addr().unwrap()
    }

    fn rotation_packets() -> Vec<Vec<u8>> {
        // 12 blocks of 10 degrees per packet, 3 packets per rotation
        (0..3u16)
            .map(|p| {
                (0..12usize).fold(PacketBuilder::new(), |builder, b| {
                    let azimuth = p * 12000 + b as u16 * 1000;
                    builder.block(b, azimuth).fill(b, 2500, 200)
                })
            })
            .map(PacketBuilder::build)
            .collect()
    }

    #[test]
    fn test_run_driver_invalid_fov() {
        let (_tx, rx) = bounded(1);
        let config = DriverConfig {
            fov: FieldOfView::new(0., 400.),
            ..DriverConfig::default()
        };
        assert!(matches!(
            run_driver(&config, &rx, |_| ()),
            Err(MsopError::InvalidFieldOfView { .. })
        ));
    }

    #[test]
    fn test_run_driver_bind_error() {
        let taken = UdpSocket::bind("127.0.0.1:0").unwrap();
        let config = DriverConfig {
            listen_addr: taken.local_addr().unwrap(),
            ..DriverConfig::default()
        };
        let (_tx, rx) = bounded(1);
        assert!(matches!(
            run_driver(&config, &rx, |_| ()),
            Err(MsopError::Bind { .. })
        ));
    }

    #[test]
    fn test_run_driver_rotation() {
        let listen_addr = free_local_addr();
        let config = DriverConfig {
            listen_addr,
            ..DriverConfig::default()
        };
        let (tx, rx) = bounded(10);

        let driver = std::thread::spawn(move || {
            let deadline = Instant::now() + Duration::from_secs(5);
            run_driver(&config, &rx, |pipeline| {
                if pipeline.stats().frames >= 2 || Instant::now() > deadline {
                    tx.send(true).unwrap();
                }
            })
        });

        let sender = UdpSocket::bind("127.0.0.1:0").unwrap();
        let packets = rotation_packets();
        while !driver.is_finished() {
            for packet in packets.iter() {
                sender.send_to(packet, listen_addr).unwrap();
                sleep(Duration::from_millis(2));
            }
        }

        let stats = driver.join().unwrap().unwrap();
        assert!(stats.frames >= 2);
        // a full rotation touches at most 3 * (11 * 16 + 1) keys, fewer if a
        // datagram was dropped on the way
        assert!(stats.point_count > 0);
        assert!(stats.point_count <= 3 * (11 * 16 + 1));
        assert!(stats.fps > 0.);
        assert_eq!(stats.malformed_packets, 0);
    }
}
