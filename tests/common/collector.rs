// tests/common/collector.rs
#![allow(dead_code)]

use std::net::UdpSocket;
use std::time::Duration;

/// Loopback UDP socket standing in for the syslog collector.
pub struct Collector {
    sock: UdpSocket,
}

impl Collector {
    pub fn bind() -> Self {
        let sock = UdpSocket::bind("127.0.0.1:0").unwrap();
        sock.set_read_timeout(Some(Duration::from_secs(5))).unwrap();
        Self { sock }
    }

    pub fn port(&self) -> u16 {
        self.sock.local_addr().unwrap().port()
    }

    pub fn port_arg(&self) -> String {
        self.port().to_string()
    }

    pub fn recv(&self) -> String {
        let mut buf = [0u8; 4096];
        let n = self.sock.recv(&mut buf).unwrap();
        String::from_utf8(buf[..n].to_vec()).unwrap()
    }

    pub fn recv_n(&self, n: usize) -> Vec<String> {
        (0..n).map(|_| self.recv()).collect()
    }

    /// Nothing further arrives within a short window.
    pub fn assert_idle(&self) {
        let mut buf = [0u8; 64];
        self.sock
            .set_read_timeout(Some(Duration::from_millis(200)))
            .unwrap();
        assert!(self.sock.recv(&mut buf).is_err());
    }
}
