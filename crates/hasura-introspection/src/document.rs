use serde::Deserialize;

/// The envelope of a GraphQL introspection response (`data` already peeled
/// off by the transport).
#[derive(Debug, Clone, Deserialize)]
pub struct IntrospectionResult {
    #[serde(rename = "__schema")]
    pub schema: SchemaDocument,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaDocument {
    pub query_type: Option<RootType>,
    pub mutation_type: Option<RootType>,
    pub types: Option<Vec<TypeDef>>,
}

/// `query_root` or `mutation_root`.
#[derive(Debug, Clone, Deserialize)]
pub struct RootType {
    pub name: Option<String>,
    pub fields: Option<Vec<FieldDef>>,
}

/// One entry of `__schema.types`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeDef {
    pub kind: TypeKind,
    pub name: Option<String>,
    pub fields: Option<Vec<FieldDef>>,
    pub input_fields: Option<Vec<InputValue>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FieldDef {
    pub name: String,
    #[serde(rename = "type")]
    pub r#type: Option<TypeRef>,
    #[serde(default)]
    pub args: Vec<InputValue>,
}

/// An input field or argument. `default_value` is the GraphQL-encoded
/// default, verbatim; only its presence matters here.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputValue {
    pub name: String,
    #[serde(rename = "type")]
    pub r#type: Option<TypeRef>,
    #[serde(default)]
    pub default_value: Option<String>,
}

/// A type reference as introspection returns it: a chain of `NON_NULL` and
/// `LIST` wrappers around a named type, linked through `ofType`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeRef {
    pub kind: TypeKind,
    pub name: Option<String>,
    pub of_type: Option<Box<TypeRef>>,
}

/// `__TypeKind`. Wrapping kinds are `List` and `NonNull`; everything else is
/// a named leaf as far as unwrapping is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TypeKind {
    Scalar,
    Object,
    Interface,
    Union,
    Enum,
    InputObject,
    List,
    NonNull,
}
