use apollo_compiler::{Name, Schema, validation::WithErrors};

/// An error while converting GraphQL types into a JSON Schema
#[derive(Debug, thiserror::Error)]
pub enum ConversionError {
    #[error("Unsupported {kind} type `{name}`: only object, union, scalar, enum and list types can be converted")]
    UnsupportedTypeKind { name: Name, kind: &'static str },

    #[error("Type `{0}` is not defined in the schema")]
    UnknownType(Name),

    #[error("Type `{0}` is not an object type")]
    NotAnObjectType(Name),
}

/// An error while loading the inputs of a conversion
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Could not parse GraphQL schema: {0}")]
    GraphQLSchema(Box<WithErrors<Schema>>),

    #[error("Could not open file: {0}")]
    ReadFile(#[from] std::io::Error),

    #[error("Invalid custom scalar config: {0}")]
    CustomScalarConfig(serde_json::Error),

    #[error("Invalid custom scalar schema: {0}")]
    CustomScalarJsonSchema(serde_json::Value),

    #[error("No schema path was configured")]
    NoSchema,
}
