pub mod paths;
pub mod settings;

pub use settings::{ClassifierConfig, PrefixEntry, RangeEntry, TableConfig};
