//! Prints the JSON Schema of the converter's configuration file

// The binary only needs the config types out of the runtime module
#![allow(unused_imports, dead_code)]

mod runtime;

fn main() -> anyhow::Result<()> {
    let schema = schemars::schema_for!(runtime::Config);
    serde_json::to_writer_pretty(std::io::stdout().lock(), &schema)?;
    println!();
    Ok(())
}
