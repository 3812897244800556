use indexmap::IndexMap;

/// The artifact handed to the emitters. Table names are unique, discovered
/// once from the query root; iteration order follows the query root.
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaMetadata {
    pub tables: IndexMap<String, TableMetadata>,
}

/// Everything the generator knows about one table. Built in full by the
/// analyzer, immutable afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct TableMetadata {
    pub name: String,
    /// Selectable scalar/enum columns. Relationship fields are excluded.
    pub fields: Vec<Field>,
    pub insert_input: Option<InputObject>,
    pub update_input: Option<InputObject>,
    pub operations: Operations,
    /// Present iff the `{table}_by_pk` query takes exactly one argument.
    /// Composite keys are not modeled.
    pub primary_key: Option<PrimaryKey>,
}

/// One selectable column. `r#type` is the unwrapped type name, with a `[]`
/// suffix for list columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub r#type: String,
    pub nullable: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputField {
    pub name: String,
    pub r#type: String,
    pub nullable: bool,
    pub has_default: bool,
}

/// An insert or update input shape. `required_fields` is always a subset of
/// `fields`; for insert inputs it is not derivable from the input type alone
/// (see the reconciliation in the analyzer).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputObject {
    pub type_name: String,
    pub fields: Vec<InputField>,
    pub required_fields: Vec<InputField>,
}

/// Which root fields exist for the table. Each flag is tested
/// independently by exact name match; no flag implies another.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Operations {
    pub query: bool,
    pub query_by_pk: bool,
    pub aggregate: bool,
    pub insert: bool,
    pub insert_one: bool,
    pub update: bool,
    pub update_by_pk: bool,
    pub delete: bool,
    pub delete_by_pk: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrimaryKey {
    pub name: String,
    pub r#type: String,
}
