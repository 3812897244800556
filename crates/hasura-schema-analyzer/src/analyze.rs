use crate::{
    error::SchemaError,
    model::{
        Field, InputField, InputObject, Operations, PrimaryKey, SchemaMetadata, TableMetadata,
    },
};
use hasura_introspection::{unwrap, FieldDef, IntrospectionResult, TypeDef, TypeKind};
use hasura_metadata::InsertPermissions;
use indexmap::{IndexMap, IndexSet};
use std::collections::HashMap;

/// Scalars and scalar-like types that can appear in a selection set.
/// Fields of any other type are relationships or aggregates and are
/// excluded from select fields.
const SCALAR_TYPES: &[&str] = &[
    "Int",
    "Float",
    "String",
    "Boolean",
    "ID",
    "uuid",
    "timestamptz",
    "timestamp",
    "date",
    "time",
    "timetz",
    "numeric",
    "bigint",
    "json",
    "jsonb",
    "citext",
];

fn is_scalar_graphql_type(type_name: &str) -> bool {
    SCALAR_TYPES.contains(&type_name)
}

/// Derives [`SchemaMetadata`] from an introspection payload and the insert
/// permissions of the configured role.
///
/// Base table names are discovered from the query root: every field whose
/// name does not end in `_by_pk` or `_aggregate` is assumed to be a table
/// listing query. A discovered table whose object type is missing from the
/// types list is skipped with a warning; schema drift between the query
/// root and the types list must not abort the run.
pub fn analyze(
    introspection: &IntrospectionResult,
    permissions: &HashMap<String, InsertPermissions>,
) -> Result<SchemaMetadata, SchemaError> {
    let schema = &introspection.schema;

    let query_fields: &[FieldDef] = schema
        .query_type
        .as_ref()
        .ok_or(SchemaError::MissingQueryRoot)?
        .fields
        .as_deref()
        .unwrap_or_default();

    let types = schema.types.as_deref().ok_or(SchemaError::MissingTypes)?;

    let mutation_fields: &[FieldDef] = schema
        .mutation_type
        .as_ref()
        .and_then(|root| root.fields.as_deref())
        .unwrap_or_default();

    let table_names: IndexSet<&str> = query_fields
        .iter()
        .map(|field| field.name.as_str())
        .filter(|name| !name.ends_with("_by_pk") && !name.ends_with("_aggregate"))
        .collect();

    tracing::debug!(count = table_names.len(), "discovered tables");

    let mut tables = IndexMap::new();

    for table_name in table_names {
        let Some(table) =
            analyze_table(table_name, types, query_fields, mutation_fields, permissions)
        else {
            continue;
        };

        tables.insert(table_name.to_owned(), table);
    }

    Ok(SchemaMetadata { tables })
}

fn analyze_table(
    table_name: &str,
    types: &[TypeDef],
    query_fields: &[FieldDef],
    mutation_fields: &[FieldDef],
    permissions: &HashMap<String, InsertPermissions>,
) -> Option<TableMetadata> {
    let object_fields = types
        .iter()
        .find(|ty| ty.kind == TypeKind::Object && ty.name.as_deref() == Some(table_name))
        .and_then(|ty| ty.fields.as_deref());

    let Some(object_fields) = object_fields else {
        tracing::warn!(table = table_name, "skipping table: object type not found");
        return None;
    };

    // Nullability of every column as the *object* type declares it, keyed
    // by field name. This is the database's NOT NULL truth; the insert
    // input type is not authoritative, because Hasura relaxes an input
    // field to optional whenever a default can fill it.
    let mut object_field_nullability = HashMap::new();
    let mut fields = Vec::new();

    for field in object_fields {
        let unwrapped = unwrap(field.r#type.as_ref());

        object_field_nullability.insert(field.name.as_str(), unwrapped.nullable);

        let base_type = unwrapped.name.strip_suffix("[]").unwrap_or(&unwrapped.name);
        if !is_scalar_graphql_type(base_type) {
            continue;
        }

        fields.push(Field {
            name: field.name.clone(),
            r#type: unwrapped.name,
            nullable: unwrapped.nullable,
        });
    }

    let insert_input =
        extract_input_object(types, &format!("{table_name}_insert_input")).map(|mut input| {
            let required_by_db: Vec<InputField> = input
                .fields
                .iter()
                .filter(|field| object_field_nullability.get(field.name.as_str()) == Some(&false))
                .cloned()
                .collect();

            input.required_fields = match permissions.get(table_name) {
                // The permitted column list is taken as authoritative and
                // complete: a NOT NULL column the role cannot insert drops
                // out of the required set, on the assumption that a session
                // variable, trigger or default fills it. A column for which
                // that assumption does not hold will fail at insert time.
                Some(permissions) => required_by_db
                    .into_iter()
                    .filter(|field| permissions.columns.contains(&field.name))
                    .collect(),
                None => required_by_db,
            };

            input
        });

    if let Some(input) = &insert_input {
        let required: Vec<&str> = input
            .required_fields
            .iter()
            .map(|field| field.name.as_str())
            .collect();
        tracing::debug!(table = table_name, ?required, "required insert fields");
    }

    let update_input = extract_input_object(types, &format!("{table_name}_set_input"));

    let by_pk = format!("{table_name}_by_pk");
    let has_query = |name: &str| query_fields.iter().any(|field| field.name == name);
    let has_mutation = |name: &str| mutation_fields.iter().any(|field| field.name == name);

    let operations = Operations {
        query: has_query(table_name),
        query_by_pk: has_query(&by_pk),
        aggregate: has_query(&format!("{table_name}_aggregate")),
        insert: has_mutation(&format!("insert_{table_name}")),
        insert_one: has_mutation(&format!("insert_{table_name}_one")),
        update: has_mutation(&format!("update_{table_name}")),
        update_by_pk: has_mutation(&format!("update_{table_name}_by_pk")),
        delete: has_mutation(&format!("delete_{table_name}")),
        delete_by_pk: has_mutation(&format!("delete_{table_name}_by_pk")),
    };

    let primary_key = query_fields
        .iter()
        .find(|field| field.name == by_pk)
        .and_then(|field| match field.args.as_slice() {
            [arg] => Some(PrimaryKey {
                name: arg.name.clone(),
                r#type: unwrap(arg.r#type.as_ref()).name,
            }),
            _ => None,
        });

    Some(TableMetadata {
        name: table_name.to_owned(),
        fields,
        insert_input,
        update_input,
        operations,
        primary_key,
    })
}

fn extract_input_object(types: &[TypeDef], input_name: &str) -> Option<InputObject> {
    let input_fields = types
        .iter()
        .find(|ty| ty.kind == TypeKind::InputObject && ty.name.as_deref() == Some(input_name))?
        .input_fields
        .as_ref()?;

    let fields: Vec<InputField> = input_fields
        .iter()
        .map(|field| {
            let unwrapped = unwrap(field.r#type.as_ref());
            InputField {
                name: field.name.clone(),
                r#type: unwrapped.name,
                nullable: unwrapped.nullable,
                has_default: field.default_value.is_some(),
            }
        })
        .collect();

    // Baseline from the input type alone; the analyzer overrides this for
    // insert inputs with the reconciled set.
    let required_fields = fields
        .iter()
        .filter(|field| !field.nullable && !field.has_default)
        .cloned()
        .collect();

    Some(InputObject {
        type_name: input_name.to_owned(),
        fields,
        required_fields,
    })
}
