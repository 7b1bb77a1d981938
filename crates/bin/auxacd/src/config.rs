//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `auxac.toml` in the working directory. Every field has a
//! default so the file is optional. Environment variables take precedence
//! over file values.

use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Logging settings.
    pub logging: LoggingConfig,
    /// The virtual unit the demo drives.
    pub aircon: AirConConfig,
    /// Parameters for the demo routine's templated actions.
    pub demo: DemoConfig,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

/// Virtual air-conditioner settings.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct AirConConfig {
    /// Name used in log lines.
    pub name: String,
    /// Initial link state; `false` makes every action fail with "not connected".
    pub connected: bool,
}

/// Values handed to the louver-set, power-limitation and test-packet actions.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Encoded frontend louver position.
    pub vlouver_position: u8,
    /// Power limitation level.
    pub power_limit: u8,
    /// Raw bytes for the static test packet.
    pub test_packet: Vec<u8>,
}

impl Config {
    /// Load configuration from `auxac.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("auxac.toml")?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("AUXAC_LOG") {
            self.logging.filter = val;
        }
        if let Ok(val) = std::env::var("RUST_LOG") {
            self.logging.filter = val;
        }
        if let Ok(val) = std::env::var("AUXAC_NAME") {
            self.aircon.name = val;
        }
        if let Ok(val) = std::env::var("AUXAC_CONNECTED")
            && let Ok(connected) = val.parse()
        {
            self.aircon.connected = connected;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.aircon.name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "aircon name must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "auxacd=info,auxac_app=info,auxac_adapter_virtual=info".to_string(),
        }
    }
}

impl Default for AirConConfig {
    fn default() -> Self {
        Self {
            name: "Virtual AC".to_string(),
            connected: true,
        }
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            vlouver_position: 0x04,
            power_limit: 60,
            test_packet: vec![0xBB, 0x00, 0x06, 0x80, 0x00, 0x00, 0x02, 0x00, 0x11, 0x01],
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
