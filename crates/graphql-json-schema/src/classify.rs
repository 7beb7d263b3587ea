//! Reference policies for object types
//!
//! Every time the walker meets a field that points at an object type it asks a
//! [`CollectionModel`] policy how the reference should be rendered:
//!
//! * A *collection model* is referenced by its identifier, so the property becomes an opaque
//!   string titled `<TypeName>_id`. This is what keeps cyclic schemas finite.
//! * A *component* is referenced through `#/$defs/<TypeName>`, so its full shape appears in the
//!   definitions of the document.

use apollo_compiler::schema::ObjectType;

/// Decides whether an object type is a collection model or a component
pub trait CollectionModel {
    fn is_collection_model(&self, object: &ObjectType) -> bool;
}

impl<F> CollectionModel for F
where
    F: Fn(&ObjectType) -> bool,
{
    fn is_collection_model(&self, object: &ObjectType) -> bool {
        self(object)
    }
}

/// The default policy: an object type is a collection model when it declares an identifier field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdField(String);

impl IdField {
    pub fn new(field_name: impl Into<String>) -> Self {
        Self(field_name.into())
    }

    pub fn field_name(&self) -> &str {
        &self.0
    }
}

impl Default for IdField {
    fn default() -> Self {
        Self::new("id")
    }
}

impl CollectionModel for IdField {
    fn is_collection_model(&self, object: &ObjectType) -> bool {
        object.fields.contains_key(self.0.as_str())
    }
}
