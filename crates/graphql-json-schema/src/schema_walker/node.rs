use apollo_compiler::{
    Name, Schema as GraphQLSchema,
    ast::Type,
    schema::{EnumType, ExtendedType, ObjectType, ScalarType, UnionType},
};
use schemars::{Schema as JSONSchema, json_schema};

use crate::classify::CollectionModel;
use crate::errors::ConversionError;

use super::{References, Walker};

/// A node of the GraphQL type graph that has a JSON Schema counterpart
///
/// Non-null is a property of the reference ([`Type::is_non_null`]) rather than a node of its
/// own, so callers that care about nullability check the reference before resolving it.
pub(crate) enum TypeNode<'a> {
    Object(&'a ObjectType),
    Union(&'a UnionType),
    Scalar(&'a ScalarType),
    Enum(&'a EnumType),
    /// A list, holding its item type
    List(&'a Type),
}

impl<'a> TypeNode<'a> {
    pub(crate) fn resolve(
        schema: &'a GraphQLSchema,
        r#type: &'a Type,
    ) -> Result<Self, ConversionError> {
        match r#type {
            Type::List(item) | Type::NonNullList(item) => Ok(TypeNode::List(item)),
            Type::Named(name) | Type::NonNullNamed(name) => Self::named(schema, name),
        }
    }

    pub(crate) fn named(schema: &'a GraphQLSchema, name: &Name) -> Result<Self, ConversionError> {
        match schema.types.get(name) {
            Some(ExtendedType::Object(object)) => Ok(TypeNode::Object(object)),
            Some(ExtendedType::Union(union)) => Ok(TypeNode::Union(union)),
            Some(ExtendedType::Scalar(scalar)) => Ok(TypeNode::Scalar(scalar)),
            Some(ExtendedType::Enum(r#enum)) => Ok(TypeNode::Enum(r#enum)),
            Some(ExtendedType::Interface(_)) => Err(ConversionError::UnsupportedTypeKind {
                name: name.clone(),
                kind: "interface",
            }),
            Some(ExtendedType::InputObject(_)) => Err(ConversionError::UnsupportedTypeKind {
                name: name.clone(),
                kind: "input object",
            }),
            None => Err(ConversionError::UnknownType(name.clone())),
        }
    }
}

impl<'a, C: CollectionModel> Walker<'a, C> {
    /// Resolve a type reference and convert the node it points at
    pub(super) fn r#type(
        &self,
        references: &mut References<'a>,
        r#type: &'a Type,
    ) -> Result<JSONSchema, ConversionError> {
        self.node(references, TypeNode::resolve(self.schema, r#type)?)
    }

    pub(super) fn node(
        &self,
        references: &mut References<'a>,
        node: TypeNode<'a>,
    ) -> Result<JSONSchema, ConversionError> {
        Ok(match node {
            TypeNode::Object(object) => {
                // Both kinds of reference need a definition, only the rendering differs
                references.insert(object);
                if self.classifier.is_collection_model(object) {
                    json_schema!({
                        "type": "string",
                        "title": format!("{}_id", object.name),
                    })
                } else {
                    JSONSchema::new_ref(format!("#/$defs/{}", object.name))
                }
            }

            TypeNode::Union(union) => {
                let members = union
                    .members
                    .iter()
                    .map(|member| {
                        let node = TypeNode::named(self.schema, &member.name)?;
                        self.node(references, node)
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                json_schema!({ "oneOf": members })
            }

            TypeNode::Scalar(scalar) => self.scalar(scalar),

            TypeNode::Enum(r#enum) => json_schema!({
                "type": "string",
                "enum": r#enum.values.values().map(|value| value.value.as_str()).collect::<Vec<_>>(),
                "title": r#enum.name.as_str(),
            }),

            TypeNode::List(item) => {
                // Items that are not marked as non-null may be null in the array
                let items = if item.is_non_null() {
                    self.r#type(references, item)?
                } else {
                    let item_schema = self.r#type(references, item)?;
                    json_schema!({
                        "oneOf": [
                            { "type": "null", "title": "Null" },
                            item_schema,
                        ]
                    })
                };

                json_schema!({
                    "type": "array",
                    "items": items,
                })
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use apollo_compiler::validation::Valid;
    use rstest::{fixture, rstest};
    use serde_json::{Value, json};

    use crate::classify::IdField;
    use crate::custom_scalar_map::CustomScalarMap;

    const TEST_SCHEMA: &str = include_str!("../testdata/schema.graphql");

    fn test_schema() -> Valid<GraphQLSchema> {
        GraphQLSchema::parse(TEST_SCHEMA, "schema.graphql")
            .expect("Failed to parse test schema")
            .validate()
            .expect("Failed to validate test schema")
    }

    #[fixture]
    fn schema() -> Valid<GraphQLSchema> {
        test_schema()
    }

    /// Convert the type of a field, returning the schema along with the discovered references
    fn field_schema<C: CollectionModel>(
        schema: &GraphQLSchema,
        classifier: &C,
        custom_scalar_map: Option<&CustomScalarMap>,
        object: &str,
        field: &str,
    ) -> (Value, Vec<String>) {
        let walker = Walker {
            classifier,
            custom_scalar_map,
            include_descriptions: false,
            schema,
        };
        let mut references = References::default();
        let field_type = &schema
            .get_object(object)
            .unwrap()
            .fields
            .get(field)
            .unwrap()
            .ty;
        let json_schema = walker.r#type(&mut references, field_type).unwrap();
        let names = (0..references.len())
            .filter_map(|index| references.get(index))
            .map(|object| object.name.to_string())
            .collect();
        (json_schema.into(), names)
    }

    #[rstest]
    fn collection_model_reference_is_an_id_string(schema: Valid<GraphQLSchema>) {
        let (json_schema, references) =
            field_schema(&schema, &IdField::default(), None, "Query", "user");

        assert_eq!(json_schema, json!({"type": "string", "title": "User_id"}));
        assert_eq!(references, ["User"]);
    }

    #[rstest]
    fn component_reference_points_at_definitions(schema: Valid<GraphQLSchema>) {
        let (json_schema, references) =
            field_schema(&schema, &IdField::default(), None, "User", "address");

        assert_eq!(json_schema, json!({"$ref": "#/$defs/Address"}));
        assert_eq!(references, ["Address"]);
    }

    #[rstest]
    fn union_members_keep_declaration_order(schema: Valid<GraphQLSchema>) {
        let (json_schema, references) =
            field_schema(&schema, &IdField::default(), None, "Query", "search");

        assert_eq!(
            json_schema,
            json!({
                "type": "array",
                "items": {
                    "oneOf": [
                        {"type": "null", "title": "Null"},
                        {"oneOf": [
                            {"type": "string", "title": "User_id"},
                            {"$ref": "#/$defs/Address"},
                        ]},
                    ]
                }
            })
        );
        assert_eq!(references, ["User", "Address"]);
    }

    #[rstest]
    fn enum_values_are_enumerated(schema: Valid<GraphQLSchema>) {
        let (json_schema, references) =
            field_schema(&schema, &IdField::default(), None, "User", "role");

        assert_eq!(
            json_schema,
            json!({"type": "string", "enum": ["ADMIN", "EDITOR", "VIEWER"], "title": "Role"})
        );
        assert!(references.is_empty());
    }

    #[rstest]
    fn non_null_list_items_have_no_null_branch(schema: Valid<GraphQLSchema>) {
        let (json_schema, _) = field_schema(&schema, &IdField::default(), None, "User", "tags");

        assert_eq!(
            json_schema,
            json!({"type": "array", "items": {"type": "string"}})
        );
    }

    #[rstest]
    fn nested_lists_wrap_each_level(schema: Valid<GraphQLSchema>) {
        let (json_schema, _) = field_schema(&schema, &IdField::default(), None, "User", "matrix");

        assert_eq!(
            json_schema,
            json!({
                "type": "array",
                "items": {
                    "oneOf": [
                        {"type": "null", "title": "Null"},
                        {"type": "array", "items": {"type": "number"}},
                    ]
                }
            })
        );
    }

    #[rstest]
    fn unknown_scalars_are_unconstrained(schema: Valid<GraphQLSchema>) {
        let (json_schema, _) =
            field_schema(&schema, &IdField::default(), None, "User", "created_at");

        assert_eq!(json_schema, json!({}));
    }

    #[rstest]
    fn custom_scalars_use_the_custom_scalar_map(schema: Valid<GraphQLSchema>) {
        let custom_scalar_map: CustomScalarMap =
            r#"{"DateTime": {"type": "string", "format": "date-time"}}"#
                .parse()
                .unwrap();

        let (json_schema, _) = field_schema(
            &schema,
            &IdField::default(),
            Some(&custom_scalar_map),
            "User",
            "created_at",
        );

        assert_eq!(json_schema, json!({"type": "string", "format": "date-time"}));
    }

    #[test]
    #[tracing_test::traced_test]
    fn custom_scalars_missing_from_the_map_are_reported() {
        let schema = test_schema();
        let custom_scalar_map = CustomScalarMap::default();

        let (json_schema, _) = field_schema(
            &schema,
            &IdField::default(),
            Some(&custom_scalar_map),
            "User",
            "created_at",
        );

        assert_eq!(json_schema, json!({}));
        assert!(logs_contain("custom scalar missing from custom_scalar_map"));
    }

    #[rstest]
    fn interfaces_are_unsupported(schema: Valid<GraphQLSchema>) {
        let walker = Walker {
            classifier: &IdField::default(),
            custom_scalar_map: None,
            include_descriptions: false,
            schema: &schema,
        };
        let field_type = &schema
            .get_object("Query")
            .unwrap()
            .fields
            .get("node")
            .unwrap()
            .ty;

        let error = walker
            .r#type(&mut References::default(), field_type)
            .unwrap_err();

        insta::assert_snapshot!(error.to_string(), @"Unsupported interface type `Node`: only object, union, scalar, enum and list types can be converted");
    }

    #[test]
    fn undefined_types_are_reported() {
        let schema = GraphQLSchema::new();
        let result = TypeNode::named(&schema, &Name::new_unchecked("Missing"));

        assert!(matches!(result, Err(ConversionError::UnknownType(name)) if name.as_str() == "Missing"));
    }
}
