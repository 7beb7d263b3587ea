//! Logging config and setup for the binaries

mod init;

pub use init::setup_logging;
use schemars::JsonSchema;
use serde::{Deserialize, Deserializer};
use std::path::PathBuf;
use tracing::Level;
use tracing_appender::rolling::Rotation;
use tracing_subscriber::EnvFilter;

/// Logging related options
#[derive(Debug, Deserialize, JsonSchema)]
#[serde(default)]
pub struct Logging {
    /// The most verbose level that gets logged
    #[serde(deserialize_with = "level_by_name")]
    #[schemars(with = "LevelName")]
    pub level: Level,

    /// Directory for log files. Logs go to stderr when unset
    pub path: Option<PathBuf>,

    /// How often a new log file is started
    pub rotation: LogRotation,
}

impl Default for Logging {
    fn default() -> Self {
        Self {
            level: Level::WARN,
            path: None,
            rotation: LogRotation::default(),
        }
    }
}

impl Logging {
    pub fn env_filter(&self) -> EnvFilter {
        EnvFilter::from_default_env().add_directive(self.level.into())
    }
}

/// Rotation period of log files
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum LogRotation {
    Minutely,
    Hourly,
    Daily,
    #[default]
    Never,
}

impl From<LogRotation> for Rotation {
    fn from(rotation: LogRotation) -> Self {
        match rotation {
            LogRotation::Minutely => Rotation::MINUTELY,
            LogRotation::Hourly => Rotation::HOURLY,
            LogRotation::Daily => Rotation::DAILY,
            LogRotation::Never => Rotation::NEVER,
        }
    }
}

/// Level names as documented in the config schema. Parsing accepts any case
#[derive(JsonSchema)]
#[schemars(rename_all = "lowercase")]
#[allow(dead_code)]
enum LevelName {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

fn level_by_name<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Level, D::Error> {
    String::deserialize(deserializer)?
        .parse()
        .map_err(serde::de::Error::custom)
}
