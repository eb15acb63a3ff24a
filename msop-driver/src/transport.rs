use crate::constants::RECV_BUFFER_SIZE;
use crate::error::MsopError;
use std::io;
use std::net::{SocketAddr, UdpSocket};
use tracing::info;

/// Non-blocking supplier of raw datagrams.
pub trait PacketSource {
    /// Returns the next datagram, or `None` when nothing is pending.
    fn poll(&mut self) -> Result<Option<&[u8]>, MsopError>;
}

pub struct UdpSource {
    socket: UdpSocket,
    buffer: Vec<u8>,
}

impl UdpSource {
    pub fn bind(addr: SocketAddr) -> Result<UdpSource, MsopError> {
        let socket = UdpSocket::bind(addr).map_err(|source| MsopError::Bind { addr, source })?;
        socket.set_nonblocking(true)?;
        info!(addr = %socket.local_addr()?, "listening for MSOP packets");
        Ok(UdpSource {
            socket,
            buffer: vec![0; RECV_BUFFER_SIZE],
        })
    }

    pub fn local_addr(&self) -> Result<SocketAddr, MsopError> {
        Ok(self.socket.local_addr()?)
    }
}

impl PacketSource for UdpSource {
    fn poll(&mut self) -> Result<Option<&[u8]>, MsopError> {
        match self.socket.recv_from(&mut self.buffer) {
            Ok((n_read, _)) => Ok(Some(&self.buffer[..n_read])),
            Err(e) if e.kind() == io::ErrorKind::WouldBlock => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}
