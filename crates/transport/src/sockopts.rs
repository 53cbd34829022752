// crates/transport/src/sockopts.rs
use std::io;

use socket2::Socket;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SockOpt {
    SendBuf(usize),
    Broadcast(bool),
    IpTtl(u32),
    IpTos(u32),
    IpHopLimit(u32),
    BindToDevice(String),
}

pub fn parse_sockopts(opts: &[String]) -> Result<Vec<SockOpt>, String> {
    opts.iter().map(|s| parse_sockopt(s)).collect()
}

fn parse_sockopt(s: &str) -> Result<SockOpt, String> {
    if let Some((prefix, rest)) = s.split_once(':') {
        return parse_prefixed_sockopt(prefix, rest);
    }

    let (name, value) = match s.split_once('=') {
        Some((n, v)) => (n.trim(), Some(v.trim())),
        None => (s.trim(), None),
    };
    match name {
        "SO_SNDBUF" => {
            let v = value.ok_or_else(|| "SO_SNDBUF requires a value".to_string())?;
            let size = v
                .parse::<usize>()
                .map_err(|_| "invalid SO_SNDBUF value".to_string())?;
            Ok(SockOpt::SendBuf(size))
        }
        "SO_BROADCAST" => {
            let enabled = value.map(|v| v != "0").unwrap_or(true);
            Ok(SockOpt::Broadcast(enabled))
        }
        "SO_BINDTODEVICE" => {
            let v = value.ok_or_else(|| "SO_BINDTODEVICE requires a value".to_string())?;
            if v.is_empty() {
                return Err("SO_BINDTODEVICE requires a non-empty value".to_string());
            }
            Ok(SockOpt::BindToDevice(v.to_string()))
        }
        _ => Err(format!("unknown socket option: {name}")),
    }
}

fn parse_prefixed_sockopt(prefix: &str, rest: &str) -> Result<SockOpt, String> {
    match prefix.to_ascii_lowercase().as_str() {
        "ip" => {
            let (name, value) = rest
                .split_once('=')
                .ok_or_else(|| "ip option requires a value".to_string())?;
            let val = parse_u32(value)?;
            match name.to_ascii_lowercase().as_str() {
                "ttl" => Ok(SockOpt::IpTtl(val)),
                "tos" => Ok(SockOpt::IpTos(val)),
                "hoplimit" => Ok(SockOpt::IpHopLimit(val)),
                _ => Err(format!("unknown ip socket option: {name}")),
            }
        }
        _ => Err(format!("unknown socket option: {prefix}:{rest}")),
    }
}

fn parse_u32(s: &str) -> Result<u32, String> {
    let s = s.trim();
    if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        u32::from_str_radix(hex, 16).map_err(|_| "invalid numeric value".to_string())
    } else {
        s.parse::<u32>()
            .map_err(|_| "invalid numeric value".to_string())
    }
}

pub(crate) fn apply_sockopts(sock: &Socket, opts: &[SockOpt]) -> io::Result<()> {
    for opt in opts {
        match opt {
            SockOpt::SendBuf(size) => sock.set_send_buffer_size(*size)?,
            SockOpt::Broadcast(on) => sock.set_broadcast(*on)?,
            SockOpt::IpTtl(ttl) => sock.set_ttl(*ttl)?,
            SockOpt::IpTos(tos) => sock.set_tos(*tos)?,
            SockOpt::IpHopLimit(hops) => sock.set_unicast_hops_v6(*hops)?,
            #[cfg(any(target_os = "linux", target_os = "android"))]
            SockOpt::BindToDevice(dev) => sock.bind_device(Some(dev.as_bytes()))?,
            #[cfg(not(any(target_os = "linux", target_os = "android")))]
            SockOpt::BindToDevice(_) => {
                return Err(io::Error::new(
                    io::ErrorKind::Unsupported,
                    "SO_BINDTODEVICE is not supported on this platform",
                ));
            }
        }
    }
    Ok(())
}
