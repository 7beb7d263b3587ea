//! Conversion of GraphQL object types into JSON Schema documents
//!
//! Two entry points are offered:
//!
//! * [`Converter::definitions`] converts every object type of the schema into a `$defs` entry.
//! * [`Converter::convert`] converts a single root object type. The root's shape becomes the
//!   document itself, and every object type reachable from it gets a `$defs` entry.
//!
//! Reachable object types are found with a worklist: walking an object type records the object
//! types it references, and the walk continues with the first recorded type that has no
//! definition yet. Each object type is walked at most once, so cyclic schemas terminate.

use apollo_compiler::collections::IndexMap;
use apollo_compiler::schema::{ExtendedType, ObjectType};
use apollo_compiler::{Name, Schema as GraphQLSchema};
use bon::bon;
use schemars::{Schema as JSONSchema, json_schema};
use serde_json::{Map, Value};
use tracing::debug;

use crate::classify::{CollectionModel, IdField};
use crate::custom_scalar_map::CustomScalarMap;
use crate::errors::ConversionError;
use crate::schema_walker::{References, Walker};

/// Key of the definitions section of a document
pub const DEFINITIONS_KEY: &str = "$defs";

/// Converts the object types of a GraphQL schema into JSON Schema documents
pub struct Converter<'a, C> {
    schema: &'a GraphQLSchema,
    classifier: C,
    custom_scalar_map: Option<&'a CustomScalarMap>,
    include_descriptions: bool,
}

#[bon]
impl<'a, C: CollectionModel> Converter<'a, C> {
    #[builder]
    pub fn new(
        schema: &'a GraphQLSchema,
        classifier: C,
        custom_scalar_map: Option<&'a CustomScalarMap>,
        #[builder(default)] include_descriptions: bool,
    ) -> Self {
        Self {
            schema,
            classifier,
            custom_scalar_map,
            include_descriptions,
        }
    }
}

impl<'a, C: CollectionModel> Converter<'a, C> {
    fn walker<'w>(&'w self) -> Walker<'w, C> {
        Walker {
            classifier: &self.classifier,
            custom_scalar_map: self.custom_scalar_map,
            include_descriptions: self.include_descriptions,
            schema: self.schema,
        }
    }

    /// Convert every object type of the schema, whether or not it is reachable from a root.
    ///
    /// The resulting document only has a `$defs` section.
    pub fn definitions(&self) -> Result<JSONSchema, ConversionError> {
        let walker = self.walker();
        let mut definitions = Map::new();

        for (name, extended_type) in &self.schema.types {
            if let ExtendedType::Object(object) = extended_type {
                debug!(type_name = %name, "Converting object type");
                let mut references = References::seeded(object);
                definitions.insert(
                    name.to_string(),
                    walker.object(&mut references, object)?.into(),
                );
            }
        }

        debug!("Converted {} object types", definitions.len());
        Ok(json_schema!({ "$defs": definitions }))
    }

    /// Convert a root object type along with every object type reachable from it
    pub fn convert(&self, root: &ObjectType) -> Result<JSONSchema, ConversionError> {
        let walker = self.walker();
        let mut references = References::seeded(root);
        let mut definitions: IndexMap<&str, JSONSchema> = IndexMap::default();

        // Definitions are produced in discovery order, so the next reference to walk is always
        // the one right after the last definition
        while let Some(object) = references.get(definitions.len()) {
            debug!(type_name = %object.name, "Converting object type");
            let object_schema = walker.object(&mut references, object)?;
            definitions.insert(object.name.as_str(), object_schema);
        }
        debug!("Converted {} object types", references.len());

        let mut definitions = definitions.into_iter();
        let mut document = definitions
            .next()
            .map(|(_, root_schema)| root_schema)
            .unwrap_or_else(|| json_schema!({}));
        document.insert(
            DEFINITIONS_KEY.to_string(),
            Value::Object(
                definitions
                    .map(|(name, definition)| (name.to_string(), definition.into()))
                    .collect(),
            ),
        );

        Ok(document)
    }

    /// Convert the root object type with the given name
    pub fn convert_named(&self, type_name: &str) -> Result<JSONSchema, ConversionError> {
        match self.schema.types.get(type_name) {
            Some(ExtendedType::Object(object)) => self.convert(object),
            Some(_) => Err(ConversionError::NotAnObjectType(Name::new_unchecked(
                type_name,
            ))),
            None => Err(ConversionError::UnknownType(Name::new_unchecked(type_name))),
        }
    }
}

/// Convert every object type of a schema into a definitions-only document
pub fn defs_from_type_map(
    schema: &GraphQLSchema,
    classifier: impl CollectionModel,
) -> Result<JSONSchema, ConversionError> {
    Converter::builder()
        .schema(schema)
        .classifier(classifier)
        .build()
        .definitions()
}

/// Convert an object type, with every object type reachable from it, into a document
pub fn json_schema_from_object_type(
    schema: &GraphQLSchema,
    object: &ObjectType,
    classifier: impl CollectionModel,
) -> Result<JSONSchema, ConversionError> {
    Converter::builder()
        .schema(schema)
        .classifier(classifier)
        .build()
        .convert(object)
}

/// [`json_schema_from_object_type`] with the default [`IdField`] policy
pub fn json_schema_from_object_type_default(
    schema: &GraphQLSchema,
    object: &ObjectType,
) -> Result<JSONSchema, ConversionError> {
    json_schema_from_object_type(schema, object, IdField::default())
}

/// Names of the object types that can be used as a conversion root
///
/// Introspection types are left out.
pub fn object_type_names(schema: &GraphQLSchema) -> Vec<&str> {
    schema
        .types
        .iter()
        .filter(|(name, extended_type)| {
            matches!(extended_type, ExtendedType::Object(_)) && !name.as_str().starts_with("__")
        })
        .map(|(name, _)| name.as_str())
        .collect()
}
