use crate::errors::LoadError;
use schemars::Schema;
use serde_json::Value;
use std::{collections::HashMap, path::PathBuf, str::FromStr};
use tracing::debug;

/// JSON Schema keywords accepted in a custom scalar definition
const KNOWN_KEYWORDS: &[&str] = &[
    "$ref",
    "additionalProperties",
    "allOf",
    "anyOf",
    "const",
    "default",
    "description",
    "enum",
    "examples",
    "exclusiveMaximum",
    "exclusiveMinimum",
    "format",
    "items",
    "maxItems",
    "maxLength",
    "maximum",
    "minItems",
    "minLength",
    "minimum",
    "multipleOf",
    "oneOf",
    "pattern",
    "properties",
    "required",
    "title",
    "type",
    "uniqueItems",
];

/// JSON Schemas for custom scalars, keyed by scalar name
#[derive(Debug, Clone, Default)]
pub struct CustomScalarMap(HashMap<String, Schema>);

impl CustomScalarMap {
    pub fn get(&self, scalar_name: &str) -> Option<&Schema> {
        self.0.get(scalar_name)
    }
}

impl FromStr for CustomScalarMap {
    type Err = LoadError;

    fn from_str(contents: &str) -> Result<Self, Self::Err> {
        let entries: serde_json::Map<String, Value> =
            serde_json::from_str(contents).map_err(LoadError::CustomScalarConfig)?;

        entries
            .into_iter()
            .map(|(scalar_name, definition)| {
                if has_invalid_schema(&definition) {
                    return Err(LoadError::CustomScalarJsonSchema(definition));
                }
                match Schema::try_from(definition.clone()) {
                    Ok(schema) => Ok((scalar_name, schema)),
                    Err(_) => Err(LoadError::CustomScalarJsonSchema(definition)),
                }
            })
            .collect::<Result<_, _>>()
            .map(CustomScalarMap)
    }
}

impl TryFrom<&PathBuf> for CustomScalarMap {
    type Error = LoadError;

    fn try_from(path: &PathBuf) -> Result<Self, Self::Error> {
        debug!(path = %path.display(), "Loading custom scalar map");
        std::fs::read_to_string(path)?.parse()
    }
}

// Unrecognised keywords anywhere in the schema make it invalid
fn has_invalid_schema(value: &Value) -> bool {
    match value {
        Value::Bool(_) => false,
        Value::Object(object) => object.iter().any(|(keyword, value)| {
            if !KNOWN_KEYWORDS.contains(&keyword.as_str()) {
                return true;
            }
            match keyword.as_str() {
                "properties" => value
                    .as_object()
                    .is_some_and(|properties| properties.values().any(has_invalid_schema)),
                "items" | "additionalProperties" => has_invalid_schema(value),
                "oneOf" | "anyOf" | "allOf" => value
                    .as_array()
                    .is_some_and(|schemas| schemas.iter().any(has_invalid_schema)),
                _ => false,
            }
        }),
        _ => true,
    }
}
