// crates/transport/src/lib.rs
use std::io;
use std::net::{SocketAddr, ToSocketAddrs};
use std::time::Duration;

use socket2::{Domain, Protocol, SockAddr, Socket, Type};

mod outcome;
mod sockopts;

pub use outcome::{RunSummary, SendOutcome, SendState, send};
pub use sockopts::{SockOpt, parse_sockopts};

use crate::sockopts::apply_sockopts;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AddressFamily {
    V4,
    V6,
}

/// Connectionless, unacknowledged delivery of a single payload.
pub trait Datagram {
    fn send_to(&self, host: &str, port: u16, payload: &[u8]) -> io::Result<usize>;
}

impl<T: Datagram + ?Sized> Datagram for &T {
    fn send_to(&self, host: &str, port: u16, payload: &[u8]) -> io::Result<usize> {
        (**self).send_to(host, port, payload)
    }
}

/// UDP sender that opens a fresh socket for every datagram.
///
/// The socket lives only for the duration of [`Datagram::send_to`] and is
/// closed on every return path.
#[derive(Clone, Debug, Default)]
pub struct UdpTransport {
    timeout: Option<Duration>,
    family: Option<AddressFamily>,
    sockopts: Vec<SockOpt>,
}

impl UdpTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn family(mut self, family: Option<AddressFamily>) -> Self {
        self.family = family;
        self
    }

    pub fn sockopts(mut self, sockopts: Vec<SockOpt>) -> Self {
        self.sockopts = sockopts;
        self
    }

    pub fn resolve(&self, host: &str, port: u16) -> io::Result<SocketAddr> {
        let mut addrs = (host, port).to_socket_addrs()?;
        let found = match self.family {
            Some(AddressFamily::V4) => addrs.find(SocketAddr::is_ipv4),
            Some(AddressFamily::V6) => addrs.find(SocketAddr::is_ipv6),
            None => addrs.next(),
        };
        found.ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::AddrNotAvailable,
                format!("no usable address for {host}:{port}"),
            )
        })
    }
}

impl Datagram for UdpTransport {
    fn send_to(&self, host: &str, port: u16, payload: &[u8]) -> io::Result<usize> {
        let addr = self.resolve(host, port)?;
        let sock = Socket::new(Domain::for_address(addr), Type::DGRAM, Some(Protocol::UDP))?;
        if let Some(dur) = self.timeout {
            sock.set_write_timeout(Some(dur))?;
        }
        apply_sockopts(&sock, &self.sockopts)?;
        let sent = sock.send_to(payload, &SockAddr::from(addr))?;
        tracing::trace!(target: "transport", %addr, bytes = sent, "datagram sent");
        Ok(sent)
    }
}
