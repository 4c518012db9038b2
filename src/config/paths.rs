use directories::ProjectDirs;
use std::path::PathBuf;

/// Get the configuration directory path
pub fn config_dir() -> Option<PathBuf> {
    ProjectDirs::from("com", "carrier-ip", "carrier-ip")
        .map(|proj_dirs| proj_dirs.config_dir().to_path_buf())
}

/// Get the path to the carrier table config file
pub fn table_config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("carrier_table.toml"))
}

/// Get the log directory requested through `CARRIER_IP_LOG_DIR`.
///
/// File logging is opt-in: without the variable this returns `None` and
/// nothing is created on disk.
pub fn log_dir() -> Option<PathBuf> {
    let raw = std::env::var("CARRIER_IP_LOG_DIR").ok()?;
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(PathBuf::from(trimmed))
}
