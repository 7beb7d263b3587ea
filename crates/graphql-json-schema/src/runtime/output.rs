use std::path::PathBuf;

use anyhow::Context;
use schemars::JsonSchema;
use serde::Deserialize;

/// Output options for the generated document
#[derive(Debug, Deserialize, JsonSchema)]
#[serde(default)]
pub struct Output {
    /// File to write the document to. The document is printed to stdout when unset
    pub path: Option<PathBuf>,

    /// Pretty-print the document
    pub pretty: bool,
}

impl Default for Output {
    fn default() -> Self {
        Self {
            path: None,
            pretty: true,
        }
    }
}

impl Output {
    pub fn render(&self, document: &schemars::Schema) -> Result<String, serde_json::Error> {
        if self.pretty {
            serde_json::to_string_pretty(document)
        } else {
            serde_json::to_string(document)
        }
    }

    pub fn write(&self, document: &schemars::Schema) -> Result<(), anyhow::Error> {
        let rendered = self
            .render(document)
            .with_context(|| "Failed to serialize document")?;
        match &self.path {
            Some(path) => std::fs::write(path, format!("{rendered}\n"))
                .with_context(|| format!("Failed to write {}", path.display())),
            None => {
                println!("{rendered}");
                Ok(())
            }
        }
    }
}
