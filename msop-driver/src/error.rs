use std::io;
use std::net::SocketAddr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MsopError {
    #[error("Packet must be at least {expected} bytes. Actually {actual} bytes.")]
    PacketTooShort { expected: usize, actual: usize },
    #[error("Field of view bounds must lie in 0..=360 degrees. Observed = {start}..{end}.")]
    InvalidFieldOfView { start: f64, end: f64 },
    #[error("Failed to bind \"{addr}\": {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Io(#[from] io::Error),
}
