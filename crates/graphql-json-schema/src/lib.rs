//! Library for converting GraphQL object types into JSON Schema documents.
//!
//! The output of a conversion describes the same shapes as the GraphQL types: every object type
//! becomes an `object` schema with one property per field (plus a constant `__typename`), fields
//! with non-null types are `required`, and references between object types are rendered either
//! as `$ref`s into a `$defs` section or as opaque identifier strings, as decided by a
//! [`CollectionModel`](classify::CollectionModel) policy.
//!
//! ```
//! use apollo_compiler::Schema;
//! use graphql_json_schema::json_schema::json_schema_from_object_type_default;
//!
//! let schema = Schema::parse_and_validate("type Query { hello: String! }", "schema.graphql")
//!     .unwrap();
//! let query = schema.get_object("Query").unwrap();
//! let document = json_schema_from_object_type_default(&schema, query).unwrap();
//! assert_eq!(document.get("required"), Some(&serde_json::json!(["hello"])));
//! ```

pub mod classify;
pub mod custom_scalar_map;
pub mod errors;
pub mod json_schema;
mod schema_walker;
