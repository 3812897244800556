mod document;
mod unwrap;

pub use document::{
    FieldDef, InputValue, IntrospectionResult, RootType, SchemaDocument, TypeDef, TypeKind, TypeRef,
};
pub use unwrap::{unwrap, UnwrappedType};

/// The introspection document sent to Hasura. The `ofType` selection is deep
/// enough to resolve `NON_NULL(LIST(NON_NULL(T)))`, the deepest wrapping
/// Hasura produces for scalar columns.
pub const INTROSPECTION_QUERY: &str = r"
    query IntrospectionQuery {
      __schema {
        queryType {
          name
          fields {
            name
            args {
              name
              type {
                kind
                name
                ofType {
                  kind
                  name
                }
              }
            }
            type {
              kind
              name
              ofType {
                kind
                name
              }
            }
          }
        }
        mutationType {
          name
          fields {
            name
            type {
              kind
              name
            }
          }
        }
        types {
          kind
          name
          fields {
            name
            type {
              kind
              name
              ofType {
                kind
                name
                ofType {
                  kind
                  name
                  ofType {
                    kind
                    name
                  }
                }
              }
            }
          }
          inputFields {
            name
            defaultValue
            type {
              kind
              name
              ofType {
                kind
                name
              }
            }
          }
        }
      }
    }
";
