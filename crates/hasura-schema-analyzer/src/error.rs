/// A structurally invalid introspection payload. Fatal: generation aborts
/// before any artifact is produced.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    #[error("the introspection payload has no query root")]
    MissingQueryRoot,
    #[error("the introspection payload has no types list")]
    MissingTypes,
}
