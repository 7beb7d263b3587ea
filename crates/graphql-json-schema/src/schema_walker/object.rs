use apollo_compiler::{Node, schema::ObjectType};
use schemars::{Schema as JSONSchema, json_schema};
use serde_json::{Map, Value};

use crate::classify::CollectionModel;
use crate::errors::ConversionError;

use super::{References, Walker, with_desc, with_title};

/// Name of the synthetic property identifying the concrete type of an object
pub(crate) const TYPENAME_PROPERTY: &str = "__typename";

impl<'a, C: CollectionModel> Walker<'a, C> {
    /// Convert the fields of an object type into an `object` schema
    ///
    /// A field is required exactly when its own type is non-null. Nullability of list items
    /// has no bearing on it.
    pub(crate) fn object(
        &self,
        references: &mut References<'a>,
        object: &'a ObjectType,
    ) -> Result<JSONSchema, ConversionError> {
        let mut properties = Map::new();
        let mut required = Vec::new();

        for (name, field) in &object.fields {
            let property = with_title(self.r#type(references, &field.ty)?, name.as_str());
            let property = if self.include_descriptions {
                with_desc(property, field.description.as_ref().map(Node::as_str))
            } else {
                property
            };
            properties.insert(name.to_string(), property.into());

            if field.ty.is_non_null() {
                required.push(name.to_string());
            }
        }

        properties.insert(
            TYPENAME_PROPERTY.to_string(),
            json_schema!({
                "const": object.name.as_str(),
                "title": TYPENAME_PROPERTY,
            })
            .into(),
        );

        let object_schema = json_schema!({
            "type": "object",
            "properties": Value::Object(properties),
            "required": required,
        });

        Ok(if self.include_descriptions {
            with_desc(object_schema, object.description.as_ref().map(Node::as_str))
        } else {
            object_schema
        })
    }
}
