//! Input validation for candidate addresses and table prefixes.
//!
//! The IPv4 grammar accepted here is deliberately shape-only: four groups of
//! one to three ASCII digits. Octets above 255 pass, and range checks fold
//! them into the 32-bit value with wrapping shifts, so `27.159.256.0` lands
//! on `27.160.0.0`. Callers that want the stricter reading use
//! [`Ipv4Octets::is_strict`].

use regex::Regex;
use std::sync::LazyLock;

// Pre-compiled regex patterns for validation
static IPV4_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]{1,3})\.([0-9]{1,3})\.([0-9]{1,3})\.([0-9]{1,3})$").unwrap()
});

static PREFIX_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]{1,3})\.([0-9]{1,3})$").unwrap());

static IPV6_PREFIX_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9a-fA-F:]+$").unwrap());

/// The four octets of a dotted-quad candidate, as written.
///
/// Values run up to 999 since the grammar does not bound them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ipv4Octets {
    octets: [u16; 4],
    // Either leading group written with a leading zero, e.g. `39.07`
    padded_leading: bool,
}

impl Ipv4Octets {
    /// Parse a dotted quad. Returns `None` unless the text is exactly four
    /// dot-separated groups of one to three ASCII digits.
    pub fn parse(ip: &str) -> Option<Self> {
        let caps = IPV4_REGEX.captures(ip)?;
        let mut octets = [0u16; 4];
        let mut padded_leading = false;
        for (index, (slot, group)) in octets.iter_mut().zip(caps.iter().skip(1)).enumerate() {
            let text = group?.as_str();
            if index < 2 && text.len() > 1 && text.starts_with('0') {
                padded_leading = true;
            }
            *slot = text.parse().ok()?;
        }
        Some(Self {
            octets,
            padded_leading,
        })
    }

    pub fn octets(&self) -> [u16; 4] {
        self.octets
    }

    /// True when every octet fits in a byte.
    pub fn is_strict(&self) -> bool {
        self.octets.iter().all(|&octet| octet <= 255)
    }

    /// The two leading octets, compared against single prefixes.
    pub fn leading(&self) -> [u16; 2] {
        [self.octets[0], self.octets[1]]
    }

    /// True when the leading two groups are written without zero padding,
    /// so their text equals the decimal rendering of their values.
    pub fn has_canonical_leading(&self) -> bool {
        !self.padded_leading
    }

    /// Fold into a 32-bit value with `acc = (acc << 8) + octet`, wrapping.
    pub fn to_u32(&self) -> u32 {
        fold_octets(self.octets)
    }
}

/// Shift-and-add fold over four octets, truncated to 32 bits.
///
/// Oversized octets carry into the octet above instead of being rejected.
pub fn fold_octets(octets: [u16; 4]) -> u32 {
    octets
        .iter()
        .fold(0u32, |acc, &octet| acc.wrapping_shl(8).wrapping_add(u32::from(octet)))
}

/// Parse a two-octet table prefix such as `203.226`.
///
/// Unlike candidate addresses, table prefixes must hold real byte values.
pub fn parse_prefix(prefix: &str) -> Option<[u8; 2]> {
    let caps = PREFIX_REGEX.captures(prefix.trim())?;
    let high = caps.get(1)?.as_str().parse().ok()?;
    let low = caps.get(2)?.as_str().parse().ok()?;
    Some([high, low])
}

/// Check an IPv6 textual prefix: non-empty, hex digits and colons only.
pub fn is_ipv6_prefix(prefix: &str) -> bool {
    IPV6_PREFIX_REGEX.is_match(prefix)
}

/// Any colon routes the input down the IPv6 path.
pub fn looks_like_ipv6(ip: &str) -> bool {
    ip.contains(':')
}
