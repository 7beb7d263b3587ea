//! JSON Schema generation utilities
//!
//! The types in this module generate JSON schemas for GraphQL types by walking a single object
//! type at a time. Object types referenced along the way are not walked recursively; they are
//! recorded in [`References`] and picked up later by the caller's worklist, so the depth of the
//! walk never depends on the depth of the type graph.

use apollo_compiler::Schema as GraphQLSchema;
use apollo_compiler::collections::IndexMap;
use apollo_compiler::schema::ObjectType;
use schemars::Schema;

use crate::custom_scalar_map::CustomScalarMap;

mod node;
mod object;
mod scalar;

/// Walks GraphQL types, producing the JSON Schema for each
pub(crate) struct Walker<'a, C> {
    /// Policy deciding how references to object types are rendered
    pub(crate) classifier: &'a C,

    /// Custom scalar map for supplementing information from the GraphQL schema
    pub(crate) custom_scalar_map: Option<&'a CustomScalarMap>,

    /// Whether descriptions from the GraphQL schema are copied over
    pub(crate) include_descriptions: bool,

    /// The GraphQL schema being converted
    pub(crate) schema: &'a GraphQLSchema,
}

/// Object types that were referenced during a walk, in discovery order
///
/// The set only ever grows. Together with the definitions computed so far it forms the worklist
/// of a conversion: every reference at an index past the number of finished definitions is
/// still waiting to be walked.
#[derive(Default)]
pub(crate) struct References<'a>(IndexMap<&'a str, &'a ObjectType>);

impl<'a> References<'a> {
    pub(crate) fn seeded(root: &'a ObjectType) -> Self {
        let mut references = Self::default();
        references.insert(root);
        references
    }

    pub(crate) fn insert(&mut self, object: &'a ObjectType) {
        self.0.entry(object.name.as_str()).or_insert(object);
    }

    pub(crate) fn get(&self, index: usize) -> Option<&'a ObjectType> {
        self.0.get_index(index).map(|(_, object)| *object)
    }

    pub(crate) fn len(&self) -> usize {
        self.0.len()
    }
}

/// Modifies a schema to carry a display title, replacing any existing one
fn with_title(mut schema: Schema, title: &str) -> Schema {
    schema.insert("title".to_string(), title.into());
    schema
}

/// Modifies a schema to include an optional description
fn with_desc(mut schema: Schema, description: Option<&str>) -> Schema {
    if let Some(desc) = description {
        schema
            .ensure_object()
            .entry("description")
            .or_insert(desc.into());
    }

    schema
}

#[cfg(test)]
mod tests {
    use super::*;
    use apollo_compiler::validation::Valid;
    use rstest::{fixture, rstest};
    use schemars::json_schema;

    #[fixture]
    fn schema() -> Valid<GraphQLSchema> {
        GraphQLSchema::parse_and_validate(
            "type Query { a: A, b: B } type A { id: ID! } type B { name: String }",
            "schema.graphql",
        )
        .expect("Failed to parse test schema")
    }

    #[rstest]
    fn references_keep_discovery_order_without_duplicates(schema: Valid<GraphQLSchema>) {
        let query = schema.get_object("Query").unwrap();
        let a = schema.get_object("A").unwrap();
        let b = schema.get_object("B").unwrap();

        let mut references = References::seeded(query);
        references.insert(b);
        references.insert(a);
        references.insert(b);
        references.insert(query);

        assert_eq!(references.len(), 3);
        let names: Vec<_> = (0..references.len())
            .filter_map(|index| references.get(index))
            .map(|object| object.name.as_str())
            .collect();
        assert_eq!(names, ["Query", "B", "A"]);
        assert!(references.get(3).is_none());
    }

    #[test]
    fn title_replaces_existing_title() {
        let schema = with_title(json_schema!({"type": "string", "title": "Campaign_id"}), "campaign");

        assert_eq!(schema, json_schema!({"type": "string", "title": "campaign"}));
    }

    #[test]
    fn description_keeps_existing_description() {
        let schema = with_desc(
            json_schema!({"description": "from the custom scalar"}),
            Some("from the schema"),
        );
        assert_eq!(schema, json_schema!({"description": "from the custom scalar"}));

        let schema = with_desc(json_schema!({}), None);
        assert_eq!(schema, json_schema!({}));
    }
}
