use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};
use graphql_json_schema::custom_scalar_map::CustomScalarMap;
use graphql_json_schema::errors::LoadError;
use graphql_json_schema::json_schema::{Converter, object_type_names};
use runtime::schema_source;
use tracing::info;

mod runtime;

/// Clap styling
const STYLES: Styles = Styles::styled()
    .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .literal(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
    .placeholder(AnsiColor::Cyan.on_default());

/// Arguments to the converter
#[derive(Debug, clap::Parser)]
#[command(
    styles = STYLES,
    about = "Convert GraphQL object types into JSON Schema documents",
)]
struct Args {
    /// Path to the config file. Settings are read from the environment when omitted
    config: Option<PathBuf>,

    /// Print the object types that can be converted as a root, then exit
    #[arg(long)]
    list_types: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config: runtime::Config = match &args.config {
        Some(config_path) => runtime::read_config(config_path)?,
        None => runtime::read_config_from_env()?,
    };

    // Keep the guard alive so buffered file logs get flushed on exit
    let _guard = runtime::setup_logging(&config)?;

    info!(
        "graphql-json-schema v{} // Licensed under MIT",
        std::env!("CARGO_PKG_VERSION")
    );

    let schema_path = config.schema.as_deref().ok_or(LoadError::NoSchema)?;
    let schema = schema_source::load(schema_path)
        .with_context(|| format!("Failed to load {}", schema_path.display()))?;

    if args.list_types {
        for type_name in object_type_names(&schema) {
            println!("{type_name}");
        }
        return Ok(());
    }

    let custom_scalar_map = config
        .custom_scalars
        .as_ref()
        .map(|custom_scalars_config| CustomScalarMap::try_from(custom_scalars_config))
        .transpose()?;

    let converter = Converter::builder()
        .schema(&schema)
        .classifier(config.collection_models.clone())
        .maybe_custom_scalar_map(custom_scalar_map.as_ref())
        .include_descriptions(config.descriptions)
        .build();

    let document = match &config.root_type {
        Some(root_type) => converter.convert_named(root_type)?,
        None => converter.definitions()?,
    };

    config.output.write(&document)
}
