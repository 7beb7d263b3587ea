use apollo_compiler::schema::ScalarType;
use schemars::{Schema as JSONSchema, json_schema};
use tracing::{debug, warn};

use super::Walker;

/// JSON Schema primitive types of the built-in GraphQL scalars
const SCALAR_TO_JSON: [(&str, &str); 5] = [
    ("Boolean", "boolean"),
    ("Float", "number"),
    ("ID", "string"),
    ("Int", "number"),
    ("String", "string"),
];

/// Look up the JSON Schema primitive type for a built-in scalar
pub(crate) fn primitive_type(scalar_name: &str) -> Option<&'static str> {
    SCALAR_TO_JSON
        .iter()
        .find(|(name, _)| *name == scalar_name)
        .map(|(_, json_type)| *json_type)
}

impl<C> Walker<'_, C> {
    /// Built-in scalars map onto JSON primitives. Anything else is unconstrained unless the
    /// custom scalar map knows about it.
    pub(super) fn scalar(&self, scalar: &ScalarType) -> JSONSchema {
        if let Some(json_type) = primitive_type(scalar.name.as_str()) {
            return json_schema!({ "type": json_type });
        }

        match self.custom_scalar_map {
            Some(custom_scalar_map) => match custom_scalar_map.get(scalar.name.as_str()) {
                Some(custom_scalar_schema) => custom_scalar_schema.clone(),
                None => {
                    warn!(name=?scalar.name, "custom scalar missing from custom_scalar_map");
                    json_schema!({})
                }
            },
            None => {
                debug!(name=?scalar.name, "custom scalar left unconstrained");
                json_schema!({})
            }
        }
    }
}
