//! Structured logging for classifier events.
//!
//! All events are logged with `target: "classifier"` so they can be filtered
//! separately from the rest of the application.
//!
//! # Example
//!
//! Show fallback attributions only:
//! ```bash
//! RUST_LOG=classifier=warn cargo run
//! ```

use tracing::{debug, info, warn};

use crate::carrier::CarrierName;
use crate::table::CarrierTable;

/// Log the table a classifier was built with.
pub fn log_table_loaded(source: &str, table: &CarrierTable, strict_octets: bool) {
    info!(
        target: "classifier",
        event = "table_loaded",
        source = %source,
        single_prefixes = table.single_prefixes().len(),
        ipv4_ranges = table.ipv4_ranges().len(),
        ipv6_prefixes = table.ipv6_prefixes().len(),
        strict_octets = strict_octets,
        "Carrier table loaded"
    );
}

/// Log input that failed the IPv4 grammar.
pub fn log_rejected_input(ip: &str) {
    debug!(
        target: "classifier",
        event = "rejected_input",
        ip = %ip,
        "Input is not a dotted-quad address"
    );
}

/// Log a mobile address that resolved to a fallback label.
///
/// A steady stream of these means the table has untagged entries.
pub fn log_fallback_label(ip: &str, label: CarrierName, matched: Option<&str>) {
    warn!(
        target: "classifier",
        event = "fallback_label",
        ip = %ip,
        label = %label,
        matched = matched.unwrap_or("-"),
        "Mobile address has no carrier attribution"
    );
}
