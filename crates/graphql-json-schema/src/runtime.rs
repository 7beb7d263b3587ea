//! Configuration and setup shared by the binaries

mod collection_models;
mod config;
mod logging;
mod output;
pub mod schema_source;

use std::path::Path;

pub use config::Config;
use figment::{
    Figment,
    providers::{Env, Format, Yaml},
};
pub use logging::setup_logging;

/// Prefix of the environment variables read into the config
const ENV_PREFIX: &str = "GRAPHQL_JSON_SCHEMA_";

/// Separator of nested keys in environment variable names, as in `LOGGING__LEVEL`
const ENV_NESTED_SEPARATOR: &str = "__";

/// Environment variables take precedence over anything joined after them
fn env_figment() -> Figment {
    Figment::new().join(Env::prefixed(ENV_PREFIX).split(ENV_NESTED_SEPARATOR))
}

/// Read the config from environment variables alone
#[allow(clippy::result_large_err)]
pub fn read_config_from_env() -> Result<Config, figment::Error> {
    env_figment().extract()
}

/// Read the config from a YAML file, with environment variables overriding its values
#[allow(clippy::result_large_err)]
pub fn read_config(yaml_path: impl AsRef<Path>) -> Result<Config, figment::Error> {
    env_figment().join(Yaml::file(yaml_path)).extract()
}
