use crate::document::{TypeKind, TypeRef};

/// A flattened type reference: the innermost named type, with one `[]`
/// suffix per list wrapper, and the nullability of the outermost level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnwrappedType {
    pub name: String,
    pub nullable: bool,
}

/// Resolves a wrapped type reference into an [`UnwrappedType`].
///
/// - `NON_NULL` flips the result of the inner level to non-nullable.
/// - `LIST` appends `[]` to the inner name and is itself nullable: the list
///   container can be null even when its elements cannot.
/// - A missing reference resolves to `any`, nullable. Introspection should
///   never omit the type of a field, but a malformed payload must not abort
///   a run over it.
pub fn unwrap(ty: Option<&TypeRef>) -> UnwrappedType {
    let Some(ty) = ty else {
        return UnwrappedType {
            name: "any".to_owned(),
            nullable: true,
        };
    };

    match ty.kind {
        TypeKind::NonNull => {
            let mut inner = unwrap(ty.of_type.as_deref());
            inner.nullable = false;
            inner
        }
        TypeKind::List => {
            let inner = unwrap(ty.of_type.as_deref());
            UnwrappedType {
                name: format!("{}[]", inner.name),
                nullable: true,
            }
        }
        _ => UnwrappedType {
            name: ty.name.clone().unwrap_or_else(|| "any".to_owned()),
            nullable: true,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn type_ref(value: serde_json::Value) -> TypeRef {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn named_type_is_nullable() {
        let ty = type_ref(json!({ "kind": "SCALAR", "name": "String" }));

        assert_eq!(
            unwrap(Some(&ty)),
            UnwrappedType {
                name: "String".to_owned(),
                nullable: true,
            }
        );
    }

    #[test]
    fn non_null_flips_nullability() {
        let ty = type_ref(json!({
            "kind": "NON_NULL",
            "name": null,
            "ofType": { "kind": "SCALAR", "name": "uuid" }
        }));

        assert_eq!(
            unwrap(Some(&ty)),
            UnwrappedType {
                name: "uuid".to_owned(),
                nullable: false,
            }
        );
    }

    #[test]
    fn list_of_non_null_named() {
        let ty = type_ref(json!({
            "kind": "LIST",
            "name": null,
            "ofType": { "kind": "SCALAR", "name": "String" }
        }));

        // The list container is nullable even without an explicit wrapper.
        assert_eq!(
            unwrap(Some(&ty)),
            UnwrappedType {
                name: "String[]".to_owned(),
                nullable: true,
            }
        );
    }

    #[test]
    fn non_null_list_of_non_null() {
        let ty = type_ref(json!({
            "kind": "NON_NULL",
            "name": null,
            "ofType": {
                "kind": "LIST",
                "name": null,
                "ofType": {
                    "kind": "NON_NULL",
                    "name": null,
                    "ofType": { "kind": "SCALAR", "name": "uuid" }
                }
            }
        }));

        assert_eq!(
            unwrap(Some(&ty)),
            UnwrappedType {
                name: "uuid[]".to_owned(),
                nullable: false,
            }
        );
    }

    #[test]
    fn missing_reference_defaults_to_any() {
        assert_eq!(
            unwrap(None),
            UnwrappedType {
                name: "any".to_owned(),
                nullable: true,
            }
        );
    }

    #[test]
    fn named_type_without_a_name_defaults_to_any() {
        let ty = type_ref(json!({ "kind": "SCALAR", "name": null }));

        assert_eq!(unwrap(Some(&ty)).name, "any");
    }
}
