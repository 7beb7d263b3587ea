use apollo_compiler::schema::ObjectType;
use graphql_json_schema::classify::CollectionModel;
use schemars::JsonSchema;
use serde::Deserialize;

/// Policy for referencing object types by identifier
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(default)]
pub struct CollectionModels {
    /// Reference object types that declare the identifier field by a string id. When disabled,
    /// every reference to an object type points at its definition
    pub enabled: bool,

    /// Name of the identifier field
    pub id_field: String,
}

impl Default for CollectionModels {
    fn default() -> Self {
        Self {
            enabled: true,
            id_field: "id".to_string(),
        }
    }
}

impl CollectionModel for CollectionModels {
    fn is_collection_model(&self, object: &ObjectType) -> bool {
        self.enabled && object.fields.contains_key(self.id_field.as_str())
    }
}
