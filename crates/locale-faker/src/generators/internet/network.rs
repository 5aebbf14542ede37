//! IP address generators and the private/reserved IPv4 tables.

use std::net::Ipv4Addr;

use super::Internet;

/// An IPv4 network in CIDR notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Cidr {
    network: Ipv4Addr,
    prefix: u8,
}

impl Cidr {
    const fn new(a: u8, b: u8, c: u8, d: u8, prefix: u8) -> Self {
        Self {
            network: Ipv4Addr::new(a, b, c, d),
            prefix,
        }
    }

    fn contains(self, addr: Ipv4Addr) -> bool {
        let mask = u32::MAX
            .checked_shl(32 - u32::from(self.prefix))
            .unwrap_or(0);
        u32::from(addr) & mask == u32::from(self.network) & mask
    }
}

/// Private, shared, loopback, link-local and benchmarking networks.
const PRIVATE_NETS: [Cidr; 8] = [
    Cidr::new(10, 0, 0, 0, 8),
    Cidr::new(100, 64, 0, 0, 10),
    Cidr::new(127, 0, 0, 0, 8),
    Cidr::new(169, 254, 0, 0, 16),
    Cidr::new(172, 16, 0, 0, 12),
    Cidr::new(192, 0, 0, 0, 24),
    Cidr::new(192, 168, 0, 0, 16),
    Cidr::new(198, 18, 0, 0, 15),
];

/// "This network", documentation, relay, multicast and future-use ranges.
const RESERVED_NETS: [Cidr; 7] = [
    Cidr::new(0, 0, 0, 0, 8),
    Cidr::new(192, 0, 2, 0, 24),
    Cidr::new(192, 88, 99, 0, 24),
    Cidr::new(198, 51, 100, 0, 24),
    Cidr::new(203, 0, 113, 0, 24),
    Cidr::new(224, 0, 0, 0, 4),
    Cidr::new(240, 0, 0, 0, 4),
];

/// Returns whether `addr` falls in one of the private IPv4 networks.
///
/// The table covers RFC 1918, carrier-grade NAT, loopback, link-local, the
/// IETF protocol block and the benchmarking range.
#[must_use]
pub fn is_private_ipv4(addr: Ipv4Addr) -> bool {
    PRIVATE_NETS.iter().any(|net| net.contains(addr))
}

/// Returns whether `addr` falls in one of the reserved IPv4 networks.
#[must_use]
pub fn is_reserved_ipv4(addr: Ipv4Addr) -> bool {
    RESERVED_NETS.iter().any(|net| net.contains(addr))
}

/// Returns whether `addr` is neither private nor reserved.
///
/// # Example
///
/// ```
/// use std::net::Ipv4Addr;
///
/// use locale_faker::is_public_ipv4;
///
/// assert!(is_public_ipv4(Ipv4Addr::new(8, 8, 8, 8)));
/// assert!(!is_public_ipv4(Ipv4Addr::new(192, 168, 1, 1)));
/// assert!(!is_public_ipv4(Ipv4Addr::new(203, 0, 113, 7)));
/// ```
#[must_use]
pub fn is_public_ipv4(addr: Ipv4Addr) -> bool {
    !is_private_ipv4(addr) && !is_reserved_ipv4(addr)
}

impl Internet<'_> {
    /// Returns an IPv4 address built from four random octets.
    pub fn ip_v4_address(&mut self) -> Ipv4Addr {
        let mut octets = [0_u8; 4];
        for octet in &mut octets {
            *octet = self.faker.random_in_range(0, u8::MAX);
        }
        Ipv4Addr::from(octets)
    }

    /// Returns a random IPv4 address with a `/1` to `/31` prefix.
    pub fn ip_v4_cidr(&mut self) -> String {
        let addr = self.ip_v4_address();
        let prefix = self.faker.random_in_range(1_u8, 31);
        format!("{addr}/{prefix}")
    }

    /// Returns an address from the private table.
    ///
    /// Addresses are drawn until one matches; about one in five does.
    pub fn private_ip_v4_address(&mut self) -> Ipv4Addr {
        loop {
            let addr = self.ip_v4_address();
            if is_private_ipv4(addr) {
                return addr;
            }
        }
    }

    /// Returns an address outside both the private and reserved tables.
    pub fn public_ip_v4_address(&mut self) -> Ipv4Addr {
        loop {
            let addr = self.ip_v4_address();
            if is_public_ipv4(addr) {
                return addr;
            }
        }
    }

    /// Returns eight colon-separated lower-case hextets without zero padding
    /// or `::` compression.
    pub fn ip_v6_address(&mut self) -> String {
        (0..8)
            .map(|_| format!("{:x}", self.faker.random_in_range(0, u16::MAX)))
            .collect::<Vec<_>>()
            .join(":")
    }

    /// Returns a random IPv6 address with a `/1` to `/127` prefix.
    pub fn ip_v6_cidr(&mut self) -> String {
        let addr = self.ip_v6_address();
        let prefix = self.faker.random_in_range(1_u8, 127);
        format!("{addr}/{prefix}")
    }
}
