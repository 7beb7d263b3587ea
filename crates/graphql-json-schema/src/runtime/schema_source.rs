use std::path::Path;

use apollo_compiler::{Schema, validation::Valid};
use graphql_json_schema::errors::LoadError;

/// Read and validate the GraphQL schema stored at the given path
pub fn load(path: &Path) -> Result<Valid<Schema>, LoadError> {
    tracing::debug!(schema=?path, "Loading schema");
    let sdl = std::fs::read_to_string(path)?;
    Schema::parse_and_validate(sdl, path).map_err(|errors| LoadError::GraphQLSchema(Box::new(errors)))
}
