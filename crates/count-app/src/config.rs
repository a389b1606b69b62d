use count_core::count::MAX_DRAWS;
use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::Level;

const DEFAULT_SIMULATION_CARDS: i64 = 52;
const DEFAULT_MAX_CARDS: i64 = 100_000;
const DEFAULT_MAX_DISPLAY: usize = 200;
const DEFAULT_LOG_FILE: &str = "cardcount.log.jsonl";

/// Root application configuration loaded from YAML. Every block defaults.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub simulation: SimulationConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from a YAML file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let path_buf = path.to_path_buf();
        let file = File::open(path).map_err(|source| ConfigError::Read {
            source,
            path: path_buf.clone(),
        })?;
        let reader = BufReader::new(file);
        let mut cfg: AppConfig =
            serde_yaml::from_reader(reader).map_err(|source| ConfigError::Parse {
                source,
                path: path_buf.clone(),
            })?;
        cfg.validate().map_err(|source| ConfigError::Invalid {
            path: path_buf,
            source,
        })?;
        Ok(cfg)
    }

    /// Validate the configuration without performing I/O.
    pub fn validate(&mut self) -> Result<(), ValidationError> {
        self.simulation.validate()?;
        self.logging.normalize();
        self.logging.validate()?;
        Ok(())
    }
}

/// Simulation defaults used by the interactive session.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SimulationConfig {
    #[serde(default = "default_simulation_cards")]
    pub default_cards: i64,
    #[serde(default = "default_max_cards")]
    pub max_cards: i64,
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default = "default_max_display")]
    pub max_display: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            default_cards: DEFAULT_SIMULATION_CARDS,
            max_cards: DEFAULT_MAX_CARDS,
            seed: None,
            max_display: DEFAULT_MAX_DISPLAY,
        }
    }
}

impl SimulationConfig {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.default_cards <= 0 {
            return Err(ValidationError::InvalidField {
                field: "simulation.default_cards".to_string(),
                message: "number of cards must be greater than zero".to_string(),
            });
        }

        if self.max_cards <= 0 || self.max_cards > MAX_DRAWS {
            return Err(ValidationError::InvalidField {
                field: "simulation.max_cards".to_string(),
                message: format!("limit must be between 1 and {MAX_DRAWS}"),
            });
        }

        if self.default_cards > self.max_cards {
            return Err(ValidationError::InvalidField {
                field: "simulation.default_cards".to_string(),
                message: format!("must not exceed simulation.max_cards ({})", self.max_cards),
            });
        }

        if self.max_display == 0 {
            return Err(ValidationError::InvalidField {
                field: "simulation.max_display".to_string(),
                message: "display limit must be at least 1".to_string(),
            });
        }

        Ok(())
    }
}

fn default_simulation_cards() -> i64 {
    DEFAULT_SIMULATION_CARDS
}

fn default_max_cards() -> i64 {
    DEFAULT_MAX_CARDS
}

fn default_max_display() -> usize {
    DEFAULT_MAX_DISPLAY
}

/// Logging configuration defaults to warnings on stderr, no structured file.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct LoggingConfig {
    #[serde(default)]
    pub enable_structured: bool,
    #[serde(default = "default_tracing_level")]
    pub tracing_level: String,
    #[serde(default = "default_log_file")]
    pub file: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enable_structured: false,
            tracing_level: default_tracing_level(),
            file: default_log_file(),
        }
    }
}

impl LoggingConfig {
    fn normalize(&mut self) {
        if self.tracing_level.trim().is_empty() {
            self.tracing_level = default_tracing_level();
        }
    }

    fn validate(&self) -> Result<(), ValidationError> {
        if self.level().is_none() {
            return Err(ValidationError::InvalidField {
                field: "logging.tracing_level".to_string(),
                message: format!("unknown level '{}'", self.tracing_level),
            });
        }

        if self.enable_structured && self.file.trim().is_empty() {
            return Err(ValidationError::InvalidField {
                field: "logging.file".to_string(),
                message: "path must not be empty when structured logging is enabled"
                    .to_string(),
            });
        }

        Ok(())
    }

    pub fn level(&self) -> Option<Level> {
        match self.tracing_level.trim().to_ascii_lowercase().as_str() {
            "trace" => Some(Level::TRACE),
            "debug" => Some(Level::DEBUG),
            "info" => Some(Level::INFO),
            "warn" | "warning" => Some(Level::WARN),
            "error" => Some(Level::ERROR),
            _ => None,
        }
    }

    pub fn file_path(&self) -> PathBuf {
        PathBuf::from(self.file.trim())
    }
}

fn default_tracing_level() -> String {
    "warn".to_string()
}

fn default_log_file() -> String {
    DEFAULT_LOG_FILE.to_string()
}

/// Errors surfaced when loading configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path:?}: {source}")]
    Read {
        #[source]
        source: std::io::Error,
        path: PathBuf,
    },
    #[error("failed to parse config {path:?}: {source}")]
    Parse {
        #[source]
        source: serde_yaml::Error,
        path: PathBuf,
    },
    #[error("invalid configuration in {path:?}: {source}")]
    Invalid {
        path: PathBuf,
        source: ValidationError,
    },
}

/// Validation failures captured with contextual metadata.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("{field}: {message}")]
    InvalidField { field: String, message: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const BASIC_YAML: &str = r#"
simulation:
  default_cards: 104
  seed: 7
logging:
  enable_structured: true
  tracing_level: "debug"
  file: "logs/session.jsonl"
"#;

    #[test]
    fn loads_and_validates_basic_config() {
        let mut cfg: AppConfig = serde_yaml::from_str(BASIC_YAML).expect("parse yaml");
        cfg.validate().expect("validate");

        assert_eq!(cfg.simulation.default_cards, 104);
        assert_eq!(cfg.simulation.seed, Some(7));
        assert_eq!(cfg.simulation.max_display, DEFAULT_MAX_DISPLAY);
        assert_eq!(cfg.simulation.max_cards, DEFAULT_MAX_CARDS);
        assert!(cfg.logging.enable_structured);
        assert_eq!(cfg.logging.level(), Some(Level::DEBUG));
        assert_eq!(cfg.logging.file_path(), PathBuf::from("logs/session.jsonl"));
    }

    #[test]
    fn empty_document_uses_defaults() {
        let mut cfg: AppConfig = serde_yaml::from_str("{}").expect("parse");
        cfg.validate().expect("defaults validate");
        assert_eq!(cfg, AppConfig::default());
        assert_eq!(cfg.logging.level(), Some(Level::WARN));
    }

    #[test]
    fn blank_level_is_normalized() {
        let yaml = BASIC_YAML.replace("\"debug\"", "\"  \"");
        let mut cfg: AppConfig = serde_yaml::from_str(&yaml).expect("parse");
        cfg.validate().expect("valid");
        assert_eq!(cfg.logging.tracing_level, "warn");
    }

    #[test]
    fn rejects_non_positive_default_cards() {
        let yaml = BASIC_YAML.replace("default_cards: 104", "default_cards: 0");
        let mut cfg: AppConfig = serde_yaml::from_str(&yaml).expect("parse");
        let err = cfg.validate().expect_err("should fail");
        assert!(matches!(
            err,
            ValidationError::InvalidField { field, .. } if field == "simulation.default_cards"
        ));
    }

    #[test]
    fn rejects_out_of_range_max_cards() {
        for limit in ["0", "-5", "1000001"] {
            let yaml = BASIC_YAML.replace(
                "default_cards: 104",
                &format!("default_cards: 1\n  max_cards: {limit}"),
            );
            let mut cfg: AppConfig = serde_yaml::from_str(&yaml).expect("parse");
            let err = cfg.validate().expect_err("limit out of range");
            assert!(matches!(
                err,
                ValidationError::InvalidField { field, .. } if field == "simulation.max_cards"
            ));
        }
    }

    #[test]
    fn default_cards_must_fit_under_max_cards() {
        let yaml = BASIC_YAML.replace("default_cards: 104", "default_cards: 104\n  max_cards: 100");
        let mut cfg: AppConfig = serde_yaml::from_str(&yaml).expect("parse");
        let err = cfg.validate().expect_err("default above limit");
        assert!(matches!(
            err,
            ValidationError::InvalidField { field, .. } if field == "simulation.default_cards"
        ));
    }

    #[test]
    fn rejects_unknown_level() {
        let yaml = BASIC_YAML.replace("\"debug\"", "\"chatty\"");
        let mut cfg: AppConfig = serde_yaml::from_str(&yaml).expect("parse");
        let err = cfg.validate().expect_err("unknown level");
        assert!(matches!(
            err,
            ValidationError::InvalidField { field, .. } if field == "logging.tracing_level"
        ));
    }

    #[test]
    fn rejects_empty_structured_log_path() {
        let yaml = BASIC_YAML.replace("\"logs/session.jsonl\"", "\"\"");
        let mut cfg: AppConfig = serde_yaml::from_str(&yaml).expect("parse");
        let err = cfg.validate().expect_err("empty path");
        assert!(matches!(
            err,
            ValidationError::InvalidField { field, .. } if field == "logging.file"
        ));
    }

    #[test]
    fn from_path_reports_file_location() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(b"simulation:\n  max_display: 0\n").expect("write");
        let err = AppConfig::from_path(file.path()).expect_err("invalid config");
        assert!(matches!(err, ConfigError::Invalid { ref path, .. } if path == file.path()));

        let missing = file.path().with_extension("missing");
        let err = AppConfig::from_path(&missing).expect_err("missing file");
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
