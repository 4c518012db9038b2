//! Mobile carrier IP classification
//!
//! Decides whether an IPv4 or IPv6 address belongs to a Korean mobile
//! carrier block and, when it does, which carrier owns it. Lookups run over
//! an immutable in-memory table; see [`Classifier`] for injecting an
//! alternate table and [`is_mobile_carrier_ip`] / [`get_mobile_carrier_info`]
//! for the built-in one.

pub mod carrier;
pub mod classifier;
pub mod config;
pub mod error;
pub mod logging;
pub mod table;
pub mod validation;

pub(crate) mod classify_log;

pub use carrier::{Carrier, CarrierInfo, CarrierName, IpVersion};
pub use classifier::{Classifier, ClassifierOptions, get_mobile_carrier_info, is_mobile_carrier_ip};
pub use config::ClassifierConfig;
pub use error::{ConfigError, TableError};
pub use table::CarrierTable;
