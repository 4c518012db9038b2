//! Carrier prefix and range tables.
//!
//! A [`CarrierTable`] holds three ordered lists: two-octet IPv4 prefixes,
//! inclusive IPv4 ranges at /16 granularity, and literal IPv6 text prefixes.
//! Every entry marks its block as mobile. The optional carrier tag on an
//! entry is its attribution; untagged entries stay members of the mobile set
//! but resolve to a fallback label. Declared order is match priority.

use std::sync::LazyLock;

use crate::carrier::Carrier;
use crate::error::TableError;
use crate::validation::{self, Ipv4Octets};

const PREFIX_MASK: u32 = 0xFFFF_0000;

/// Built-in two-octet prefixes.
const BUILTIN_PREFIXES: &[(&str, Carrier)] = &[
    ("203.226", Carrier::SkTelecom),
    ("211.234", Carrier::SkTelecom),
    ("211.235", Carrier::SkTelecom),
    ("39.7", Carrier::Kt),
    ("110.70", Carrier::Kt),
    ("118.235", Carrier::Kt),
    ("175.223", Carrier::Kt),
    ("211.246", Carrier::Kt),
    ("61.43", Carrier::LgUplus),
    ("106.101", Carrier::LgUplus),
    ("106.102", Carrier::LgUplus),
    ("117.111", Carrier::LgUplus),
    ("125.188", Carrier::LgUplus),
];

/// Built-in ranges, `start.0.0` through `end.255.255`.
const BUILTIN_RANGES: &[(&str, &str, Carrier)] = &[
    ("27.160", "27.183", Carrier::SkTelecom),
    ("223.32", "223.63", Carrier::SkTelecom),
    ("110.68", "110.71", Carrier::Kt),
    ("175.252", "175.255", Carrier::Kt),
    ("106.96", "106.103", Carrier::LgUplus),
    ("117.110", "117.111", Carrier::LgUplus),
];

const BUILTIN_IPV6_PREFIXES: &[(&str, Carrier)] = &[
    ("2001:2d8:", Carrier::SkTelecom),
    ("2001:e60:", Carrier::Kt),
    ("2001:4430:", Carrier::LgUplus),
];

static BUILTIN: LazyLock<CarrierTable> = LazyLock::new(|| {
    let mut builder = CarrierTable::builder();
    for &(prefix, carrier) in BUILTIN_PREFIXES {
        builder = builder.single_prefix(prefix, carrier);
    }
    for &(start, end, carrier) in BUILTIN_RANGES {
        builder = builder.ipv4_range(start, end, carrier);
    }
    for &(prefix, carrier) in BUILTIN_IPV6_PREFIXES {
        builder = builder.ipv6_prefix(prefix, carrier);
    }
    // Compiled-in data; covered by builtin_table_builds below.
    builder.build().expect("built-in carrier table is valid")
});

/// A two-octet IPv4 prefix held as a `(value, mask)` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ipv4Prefix {
    text: String,
    value: u32,
    carrier: Option<Carrier>,
}

impl Ipv4Prefix {
    fn parse(prefix: &str, carrier: Option<Carrier>) -> Result<Self, TableError> {
        let [high, low] = validation::parse_prefix(prefix)
            .ok_or_else(|| TableError::InvalidPrefix(prefix.to_string()))?;
        Ok(Self {
            text: format!("{high}.{low}"),
            value: (u32::from(high) << 24) | (u32::from(low) << 16),
            carrier,
        })
    }

    /// Compare the candidate's two leading octets against this prefix.
    ///
    /// Only the leading octets take part, so oversized low octets cannot
    /// carry into the comparison. The leading groups must be written exactly
    /// as the prefix is: `39.07.1.1` is not under `39.7`.
    pub fn matches(&self, octets: &Ipv4Octets) -> bool {
        let [high, low] = octets.leading();
        if !octets.has_canonical_leading() || high > 255 || low > 255 {
            return false;
        }
        let candidate = (u32::from(high) << 24) | (u32::from(low) << 16);
        candidate & PREFIX_MASK == self.value
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn carrier(&self) -> Option<Carrier> {
        self.carrier
    }
}

/// An inclusive span of /16 blocks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ipv4Range {
    start: String,
    end: String,
    start_num: u32,
    end_num: u32,
    carrier: Option<Carrier>,
}

impl Ipv4Range {
    fn parse(start: &str, end: &str, carrier: Option<Carrier>) -> Result<Self, TableError> {
        let [sh, sl] = validation::parse_prefix(start)
            .ok_or_else(|| TableError::InvalidPrefix(start.to_string()))?;
        let [eh, el] = validation::parse_prefix(end)
            .ok_or_else(|| TableError::InvalidPrefix(end.to_string()))?;

        let start_num = validation::fold_octets([sh.into(), sl.into(), 0, 0]);
        let end_num = validation::fold_octets([eh.into(), el.into(), 255, 255]);
        let start = format!("{sh}.{sl}");
        let end = format!("{eh}.{el}");

        if start_num > end_num {
            return Err(TableError::InvertedRange { start, end });
        }

        Ok(Self {
            start,
            end,
            start_num,
            end_num,
            carrier,
        })
    }

    /// `start.0.0 <= ip <= end.255.255` over the folded 32-bit value.
    pub fn contains(&self, ip: u32) -> bool {
        self.start_num <= ip && ip <= self.end_num
    }

    pub fn start(&self) -> &str {
        &self.start
    }

    pub fn end(&self) -> &str {
        &self.end
    }

    /// Rendered as `start ~ end`.
    pub fn label(&self) -> String {
        format!("{} ~ {}", self.start, self.end)
    }

    pub fn carrier(&self) -> Option<Carrier> {
        self.carrier
    }
}

/// A literal IPv6 text prefix, stored lowercase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ipv6Prefix {
    prefix: String,
    carrier: Option<Carrier>,
}

impl Ipv6Prefix {
    fn parse(prefix: &str, carrier: Option<Carrier>) -> Result<Self, TableError> {
        let trimmed = prefix.trim();
        if !validation::is_ipv6_prefix(trimmed) {
            return Err(TableError::InvalidIpv6Prefix(prefix.to_string()));
        }
        Ok(Self {
            prefix: trimmed.to_ascii_lowercase(),
            carrier,
        })
    }

    /// `lowered` must already be ASCII-lowercase.
    pub fn matches(&self, lowered: &str) -> bool {
        lowered.starts_with(&self.prefix)
    }

    pub fn as_str(&self) -> &str {
        &self.prefix
    }

    pub fn carrier(&self) -> Option<Carrier> {
        self.carrier
    }
}

/// Immutable prefix and range tables consulted by the classifier.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CarrierTable {
    single_prefixes: Vec<Ipv4Prefix>,
    ipv4_ranges: Vec<Ipv4Range>,
    ipv6_prefixes: Vec<Ipv6Prefix>,
}

impl CarrierTable {
    pub fn builder() -> CarrierTableBuilder {
        CarrierTableBuilder::default()
    }

    /// The compiled-in table, built on first use and shared afterwards.
    pub fn builtin() -> &'static CarrierTable {
        &BUILTIN
    }

    pub fn single_prefixes(&self) -> &[Ipv4Prefix] {
        &self.single_prefixes
    }

    pub fn ipv4_ranges(&self) -> &[Ipv4Range] {
        &self.ipv4_ranges
    }

    pub fn ipv6_prefixes(&self) -> &[Ipv6Prefix] {
        &self.ipv6_prefixes
    }

    /// Total number of entries across all three lists.
    pub fn len(&self) -> usize {
        self.single_prefixes.len() + self.ipv4_ranges.len() + self.ipv6_prefixes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Collects raw entries and validates them all in [`build`](Self::build).
#[derive(Debug, Clone, Default)]
pub struct CarrierTableBuilder {
    single_prefixes: Vec<(String, Option<Carrier>)>,
    ipv4_ranges: Vec<(String, String, Option<Carrier>)>,
    ipv6_prefixes: Vec<(String, Option<Carrier>)>,
}

impl CarrierTableBuilder {
    pub fn single_prefix(
        mut self,
        prefix: impl Into<String>,
        carrier: impl Into<Option<Carrier>>,
    ) -> Self {
        self.single_prefixes.push((prefix.into(), carrier.into()));
        self
    }

    pub fn ipv4_range(
        mut self,
        start: impl Into<String>,
        end: impl Into<String>,
        carrier: impl Into<Option<Carrier>>,
    ) -> Self {
        self.ipv4_ranges
            .push((start.into(), end.into(), carrier.into()));
        self
    }

    pub fn ipv6_prefix(
        mut self,
        prefix: impl Into<String>,
        carrier: impl Into<Option<Carrier>>,
    ) -> Self {
        self.ipv6_prefixes.push((prefix.into(), carrier.into()));
        self
    }

    /// Validate every entry, preserving declared order.
    ///
    /// # Errors
    ///
    /// Returns the first malformed prefix or inverted range encountered.
    pub fn build(self) -> Result<CarrierTable, TableError> {
        let single_prefixes = self
            .single_prefixes
            .iter()
            .map(|(prefix, carrier)| Ipv4Prefix::parse(prefix, *carrier))
            .collect::<Result<Vec<_>, _>>()?;

        let ipv4_ranges = self
            .ipv4_ranges
            .iter()
            .map(|(start, end, carrier)| Ipv4Range::parse(start, end, *carrier))
            .collect::<Result<Vec<_>, _>>()?;

        let ipv6_prefixes = self
            .ipv6_prefixes
            .iter()
            .map(|(prefix, carrier)| Ipv6Prefix::parse(prefix, *carrier))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(CarrierTable {
            single_prefixes,
            ipv4_ranges,
            ipv6_prefixes,
        })
    }
}
