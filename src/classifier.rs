//! Mobile carrier classification over a [`CarrierTable`].
//!
//! The classifier answers two questions about a textual address: is it in a
//! mobile carrier block at all, and if so which carrier. Membership consults
//! every table entry; attribution walks the tagged entries in declared order
//! and falls back to a generic label when none applies.
//!
//! Neither operation fails. Anything that is not a recognizable address is
//! simply not a mobile carrier address.

use std::sync::LazyLock;

use crate::carrier::{CarrierInfo, CarrierName, IpVersion};
use crate::classify_log;
use crate::config::ClassifierConfig;
use crate::error::ConfigError;
use crate::table::CarrierTable;
use crate::validation::{self, Ipv4Octets};

static DEFAULT_CLASSIFIER: LazyLock<Classifier> = LazyLock::new(Classifier::default);

/// Tuning knobs that change how candidate addresses are read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClassifierOptions {
    /// Reject dotted quads with any octet above 255 instead of folding them.
    pub strict_octets: bool,
}

/// Classifies addresses against an injected table.
#[derive(Debug, Clone)]
pub struct Classifier {
    table: CarrierTable,
    options: ClassifierOptions,
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(CarrierTable::builtin().clone())
    }
}

impl Classifier {
    pub fn new(table: CarrierTable) -> Self {
        Self::with_options(table, ClassifierOptions::default())
    }

    pub fn with_options(table: CarrierTable, options: ClassifierOptions) -> Self {
        Self { table, options }
    }

    /// Build from configuration, using the built-in table when none is given.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Table` if the configured table is malformed.
    pub fn from_config(config: &ClassifierConfig) -> Result<Self, ConfigError> {
        let options = ClassifierOptions {
            strict_octets: config.strict_octets,
        };
        let (table, source) = match &config.table {
            Some(table) => (table.build()?, "config"),
            None => (CarrierTable::builtin().clone(), "builtin"),
        };
        classify_log::log_table_loaded(source, &table, options.strict_octets);
        Ok(Self::with_options(table, options))
    }

    pub fn table(&self) -> &CarrierTable {
        &self.table
    }

    pub fn options(&self) -> ClassifierOptions {
        self.options
    }

    /// True if `ip` falls in any mobile carrier prefix or range.
    pub fn is_mobile_carrier_ip(&self, ip: &str) -> bool {
        if validation::looks_like_ipv6(ip) {
            let lowered = ip.to_ascii_lowercase();
            return self
                .table
                .ipv6_prefixes()
                .iter()
                .any(|prefix| prefix.matches(&lowered));
        }

        let Some(octets) = self.parse_ipv4(ip) else {
            classify_log::log_rejected_input(ip);
            return false;
        };

        if self
            .table
            .single_prefixes()
            .iter()
            .any(|prefix| prefix.matches(&octets))
        {
            return true;
        }

        let ip_num = octets.to_u32();
        self.table
            .ipv4_ranges()
            .iter()
            .any(|range| range.contains(ip_num))
    }

    /// Carrier attribution for a mobile address, `None` for anything else.
    pub fn carrier_info(&self, ip: &str) -> Option<CarrierInfo> {
        if !self.is_mobile_carrier_ip(ip) {
            return None;
        }

        let info = if validation::looks_like_ipv6(ip) {
            self.ipv6_info(ip)
        } else {
            // Membership already parsed this successfully.
            let octets = self.parse_ipv4(ip)?;
            self.ipv4_info(&octets)
        };

        if info.carrier.is_fallback() {
            classify_log::log_fallback_label(ip, info.carrier, info.matched.as_deref());
        }
        Some(info)
    }

    fn parse_ipv4(&self, ip: &str) -> Option<Ipv4Octets> {
        Ipv4Octets::parse(ip).filter(|octets| !self.options.strict_octets || octets.is_strict())
    }

    fn ipv6_info(&self, ip: &str) -> CarrierInfo {
        let lowered = ip.to_ascii_lowercase();
        let attributed = self.table.ipv6_prefixes().iter().find_map(|prefix| {
            let carrier = prefix.carrier()?;
            prefix
                .matches(&lowered)
                .then(|| (carrier, prefix.as_str().to_string()))
        });

        match attributed {
            Some((carrier, prefix)) => CarrierInfo {
                is_mobile: true,
                carrier: CarrierName::Known(carrier),
                ip_version: IpVersion::V6,
                matched: Some(prefix),
            },
            None => CarrierInfo {
                is_mobile: true,
                carrier: CarrierName::Ipv6Fallback,
                ip_version: IpVersion::V6,
                matched: None,
            },
        }
    }

    fn ipv4_info(&self, octets: &Ipv4Octets) -> CarrierInfo {
        let prefix_hit = self.table.single_prefixes().iter().find_map(|prefix| {
            let carrier = prefix.carrier()?;
            prefix
                .matches(octets)
                .then(|| (CarrierName::Known(carrier), prefix.as_str().to_string()))
        });

        let ip_num = octets.to_u32();
        let hit = prefix_hit.or_else(|| {
            self.table
                .ipv4_ranges()
                .iter()
                .find(|range| range.contains(ip_num))
                .map(|range| {
                    let name = range
                        .carrier()
                        .map_or(CarrierName::RangeFallback, CarrierName::Known);
                    (name, range.label())
                })
        });

        match hit {
            Some((carrier, matched)) => CarrierInfo {
                is_mobile: true,
                carrier,
                ip_version: IpVersion::V4,
                matched: Some(matched),
            },
            None => CarrierInfo {
                is_mobile: true,
                carrier: CarrierName::Unknown,
                ip_version: IpVersion::V4,
                matched: None,
            },
        }
    }
}

/// Check `ip` against the built-in table.
pub fn is_mobile_carrier_ip(ip: &str) -> bool {
    DEFAULT_CLASSIFIER.is_mobile_carrier_ip(ip)
}

/// Look up `ip` in the built-in table.
pub fn get_mobile_carrier_info(ip: &str) -> Option<CarrierInfo> {
    DEFAULT_CLASSIFIER.carrier_info(ip)
}
