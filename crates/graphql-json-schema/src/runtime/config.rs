use std::path::PathBuf;

use schemars::JsonSchema;
use serde::Deserialize;

use super::{collection_models::CollectionModels, logging::Logging, output::Output};

/// Configuration for a conversion
#[derive(Debug, Default, Deserialize, JsonSchema)]
#[serde(default)]
pub struct Config {
    /// Which object types are referenced by identifier rather than by definition
    pub collection_models: CollectionModels,

    /// Path to a custom scalar map
    pub custom_scalars: Option<PathBuf>,

    /// Copy type and field descriptions from the GraphQL schema
    pub descriptions: bool,

    /// Logging configuration
    pub logging: Logging,

    /// Where and how to write the generated document
    pub output: Output,

    /// The object type to convert. Every object type is converted into a definition when unset
    pub root_type: Option<String>,

    /// Path to the GraphQL schema to convert
    pub schema: Option<PathBuf>,
}
