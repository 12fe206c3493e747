// Configuration management module
// Loads and validates the TOML startup parameters handed to the transport

pub mod settings;

#[cfg(test)]
mod tests;

pub use settings::{Config, ConfigError, ServerConfig};

/// Get the configuration directory path
#[inline]
pub fn get_config_dir() -> Result<std::path::PathBuf, ConfigError> {
    Config::config_dir()
}
