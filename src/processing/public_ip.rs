//! IPv4 parsing and public-address classification.

use std::net::Ipv4Addr;

/// Parse the address portion of an interface entry.
///
/// The controller reports addresses either bare ("203.0.113.10") or in CIDR
/// form ("203.0.113.10/30"); placeholders such as "-" or "" parse to `None`.
pub fn parse_interface_ip(raw: &str) -> Option<Ipv4Addr> {
    let address = raw.split('/').next()?;
    address.trim().parse().ok()
}

/// True when the address is externally routable.
///
/// Rejects RFC1918, loopback, link-local, unspecified, broadcast,
/// documentation, multicast, 0.0.0.0/8, 240.0.0.0/4, carrier-grade NAT
/// 100.64.0.0/10 and benchmark 198.18.0.0/15 space.
pub fn is_public_ipv4(ip: Ipv4Addr) -> bool {
    let octets = ip.octets();
    !(ip.is_private()
        || ip.is_loopback()
        || ip.is_link_local()
        || ip.is_unspecified()
        || ip.is_broadcast()
        || ip.is_documentation()
        || ip.is_multicast()
        || octets[0] == 0
        || octets[0] >= 240
        || (octets[0] == 100 && (octets[1] & 0xc0) == 64)
        || (octets[0] == 198 && (octets[1] & 0xfe) == 18))
}
