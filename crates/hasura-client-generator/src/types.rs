use crate::{
    idents::pascal_case,
    ts::{Interface, Property, StaticType},
    HEADER,
};
use hasura_schema_analyzer::{InputObject, SchemaMetadata, TableMetadata};
use indoc::indoc;

/// Declarations shared by every generated client, matching the options the
/// table client accepts.
const COMMON_TYPES: &str = indoc! {r"
    export interface Filter {
      field: string;
      op: string;
      value: any;
    }

    export interface OrderBy {
      field: string;
      direction: 'asc' | 'desc';
    }

    export interface QueryOptions {
      limit?: number;
      offset?: number;
      filters?: Filter[];
      orderBy?: OrderBy;
      distinctOn?: string[];
    }
"};

/// Renders the type-definition module: per table, one row interface plus an
/// interface per present insert/update input.
pub fn generate_types(metadata: &SchemaMetadata) -> String {
    let mut out = String::from(HEADER);
    out.push_str(COMMON_TYPES);

    for table in metadata.tables.values() {
        out.push('\n');
        write_table_types(&mut out, table);
    }

    out
}

fn write_table_types(out: &mut String, table: &TableMetadata) {
    let type_name = pascal_case(&table.name);

    let mut row = Interface::new(type_name.clone());
    for field in &table.fields {
        let mut property = Property::new(field.name.clone(), ts_type(&field.r#type));
        // A nullable column may be absent from a response row.
        if field.nullable {
            property = property.optional();
        }
        row.push_property(property);
    }
    out.push_str(&row.to_string());

    if let Some(input) = &table.insert_input {
        out.push('\n');
        write_input_types(out, format!("{type_name}InsertInput"), input);
    }

    if let Some(input) = &table.update_input {
        out.push('\n');
        write_input_types(out, format!("{type_name}UpdateInput"), input);
    }
}

fn write_input_types(out: &mut String, type_name: String, input: &InputObject) {
    let mut interface = Interface::new(type_name);

    for field in &input.fields {
        let mut property = Property::new(field.name.clone(), ts_type(&field.r#type));
        // Defaulted columns are as omittable as nullable ones.
        if field.nullable || field.has_default {
            property = property.optional();
        }
        interface.push_property(property);
    }

    out.push_str(&interface.to_string());
}

/// Maps an unwrapped GraphQL type name to its TypeScript counterpart. Every
/// scalar maps to exactly one host type; unknown custom scalars fall back
/// to `any` rather than failing the run.
pub(crate) fn ts_type(graphql_type: &str) -> StaticType {
    let (base, is_list) = match graphql_type.strip_suffix("[]") {
        Some(base) => (base, true),
        None => (graphql_type, false),
    };

    let host_type = match base {
        "Int" | "Float" | "numeric" | "bigint" => "number",
        "String" | "ID" | "uuid" | "timestamptz" | "timestamp" | "date" | "time" | "timetz"
        | "citext" => "string",
        "Boolean" => "boolean",
        // json, jsonb and anything we do not recognize.
        _ => "any",
    };

    let ty = StaticType::ident(host_type);
    if is_list {
        ty.array()
    } else {
        ty
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_mapping() {
        assert_eq!(ts_type("uuid").to_string(), "string");
        assert_eq!(ts_type("bigint").to_string(), "number");
        assert_eq!(ts_type("Boolean").to_string(), "boolean");
        assert_eq!(ts_type("jsonb").to_string(), "any");
        assert_eq!(ts_type("geography").to_string(), "any");
        assert_eq!(ts_type("uuid[]").to_string(), "string[]");
    }
}
