/*!
Host classification for the authority component.

A host region is an IP-literal (`[` IPv6 or IPvFuture `]`), an IPv4 address,
or a registered name. Numeric address values are handled by `std::net`; this
module owns the grammar-level decisions: strict IPv4 octet syntax (no
leading zeros), the IPvFuture production, and the fallback to reg-name.
*/

use crate::chars;
use crate::error::{ErrorKind, Result, ResultExt};
use crate::pct_encoding as pct;
use std::net::{Ipv4Addr, Ipv6Addr};
use std::str::{self, FromStr};

// ------------------------------------------------------------------------------------------------
// Public Types
// ------------------------------------------------------------------------------------------------

///
/// The classification of the host sub-component currently stored in a URL.
///
/// # Example
///
/// ```rust
/// use urlbuf::{HostType, Url};
/// use std::str::FromStr;
///
/// let url = Url::from_str("http://127.0.0.1/").unwrap();
/// assert_eq!(url.host_type(), HostType::Ipv4);
///
/// let url = Url::from_str("http://[::1]/").unwrap();
/// assert_eq!(url.host_type(), HostType::Ipv6);
/// ```
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HostType {
    /// No authority, hence no host.
    None,
    /// A registered name, possibly empty; e.g. `example.com`.
    Name,
    /// An IPv4 address; e.g. `192.0.2.16`.
    Ipv4,
    /// A bracketed IPv6 address; e.g. `[2001:db8::7]`.
    Ipv6,
    /// A bracketed IPvFuture address; e.g. `[v7.fe:d0]`.
    IpvFuture,
}

// ------------------------------------------------------------------------------------------------
// Implementations
// ------------------------------------------------------------------------------------------------

impl Default for HostType {
    fn default() -> Self {
        HostType::None
    }
}

// ------------------------------------------------------------------------------------------------
// Private Functions
// ------------------------------------------------------------------------------------------------

/// `IPv4address` with the RFC 3986 dec-octet rule: four dot-separated
/// decimal octets, each 0-255, no leading zero unless the octet is `0`.
pub(crate) fn parse_ipv4(s: &[u8]) -> Option<Ipv4Addr> {
    let mut octets = [0u8; 4];
    let mut index = 0;
    for part in s.split(|b| *b == b'.') {
        if index == 4 || part.is_empty() || part.len() > 3 {
            return None;
        }
        if part.len() > 1 && part[0] == b'0' {
            return None;
        }
        let mut value: u16 = 0;
        for b in part {
            if !chars::is_digit(*b) {
                return None;
            }
            value = value * 10 + u16::from(b - b'0');
        }
        if value > 255 {
            return None;
        }
        octets[index] = value as u8;
        index += 1;
    }
    if index == 4 {
        Some(Ipv4Addr::from(octets))
    } else {
        None
    }
}

/// `IPvFuture = "v" 1*HEXDIG "." 1*( unreserved / sub-delims / ":" )`
pub(crate) fn is_ipv_future(s: &[u8]) -> bool {
    if s.len() < 4 || !matches!(s[0], b'v' | b'V') {
        return false;
    }
    let dot = match s.iter().position(|b| *b == b'.') {
        Some(dot) => dot,
        None => return false,
    };
    if dot < 2 || !s[1..dot].iter().all(|b| b.is_ascii_hexdigit()) {
        return false;
    }
    let tail = &s[dot + 1..];
    !tail.is_empty() && tail.iter().all(|b| chars::is_in(*b, chars::USERINFO))
}

/// Classifies (and thereby validates) the content of a host region.
pub(crate) fn classify(host: &[u8]) -> Result<HostType> {
    if host.is_empty() {
        // An authority with an empty reg-name, e.g. `file:///etc/hosts`.
        return Ok(HostType::Name);
    }
    if host[0] == b'[' {
        if host.len() < 3 || host[host.len() - 1] != b']' {
            bail!(ErrorKind::InvalidHost(lossy(host)));
        }
        let inner = &host[1..host.len() - 1];
        if matches!(inner[0], b'v' | b'V') {
            if is_ipv_future(inner) {
                return Ok(HostType::IpvFuture);
            }
            bail!(ErrorKind::InvalidHost(lossy(host)));
        }
        let text = match str::from_utf8(inner) {
            Ok(text) => text,
            Err(_) => bail!(ErrorKind::InvalidHost(lossy(host))),
        };
        if Ipv6Addr::from_str(text).is_ok() {
            return Ok(HostType::Ipv6);
        }
        bail!(ErrorKind::InvalidHost(lossy(host)));
    }
    if parse_ipv4(host).is_some() {
        return Ok(HostType::Ipv4);
    }
    pct::validate(host, &pct::REG_NAME).chain_err(|| ErrorKind::InvalidHost(lossy(host)))?;
    Ok(HostType::Name)
}

pub(crate) fn lossy(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

// ------------------------------------------------------------------------------------------------
// Unit Tests
// ------------------------------------------------------------------------------------------------
