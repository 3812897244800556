use hasura_schema_analyzer::{
    Field, InputField, InputObject, Operations, PrimaryKey, SchemaMetadata, TableMetadata,
};
use indexmap::IndexMap;

fn field(name: &str, r#type: &str, nullable: bool) -> Field {
    Field {
        name: name.to_owned(),
        r#type: r#type.to_owned(),
        nullable,
    }
}

fn input_field(name: &str, r#type: &str, nullable: bool, has_default: bool) -> InputField {
    InputField {
        name: name.to_owned(),
        r#type: r#type.to_owned(),
        nullable,
        has_default,
    }
}

/// Two tables: `user_profiles` with the full complement (inputs, primary
/// key, a restricted required set), and `audit_log` with none of it.
pub fn fixture() -> SchemaMetadata {
    let user_profiles = TableMetadata {
        name: "user_profiles".to_owned(),
        fields: vec![
            field("id", "uuid", false),
            field("name", "String", true),
            field("created_at", "timestamptz", false),
        ],
        insert_input: Some(InputObject {
            type_name: "user_profiles_insert_input".to_owned(),
            fields: vec![
                input_field("id", "uuid", true, false),
                input_field("name", "String", true, false),
                input_field("created_at", "timestamptz", true, true),
                // NOT NULL, but a database default fills it.
                input_field("org_id", "uuid", false, true),
            ],
            required_fields: vec![input_field("id", "uuid", true, false)],
        }),
        update_input: Some(InputObject {
            type_name: "user_profiles_set_input".to_owned(),
            fields: vec![input_field("name", "String", true, false)],
            required_fields: vec![],
        }),
        operations: Operations {
            query: true,
            query_by_pk: true,
            insert: true,
            insert_one: true,
            update_by_pk: true,
            delete_by_pk: true,
            ..Operations::default()
        },
        primary_key: Some(PrimaryKey {
            name: "id".to_owned(),
            r#type: "uuid".to_owned(),
        }),
    };

    let audit_log = TableMetadata {
        name: "audit_log".to_owned(),
        fields: vec![
            field("id", "bigint", false),
            field("payload", "jsonb", true),
        ],
        insert_input: None,
        update_input: None,
        operations: Operations {
            query: true,
            ..Operations::default()
        },
        primary_key: None,
    };

    let mut tables = IndexMap::new();
    tables.insert(user_profiles.name.clone(), user_profiles);
    tables.insert(audit_log.name.clone(), audit_log);

    SchemaMetadata { tables }
}
