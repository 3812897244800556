use serde::Deserialize;
use std::{
    collections::HashMap,
    io,
    path::{Path, PathBuf},
};

#[derive(Debug, thiserror::Error)]
pub enum MetadataError {
    #[error("could not read the Hasura metadata file at `{path}`: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("could not parse the Hasura metadata document: {0}")]
    Parse(#[from] serde_json::Error),
}

/// The columns one role is allowed to insert into one table.
///
/// The columns are permitted, not auto-filled: when a column is NOT NULL
/// without a default, the client has to provide it. Columns the role cannot
/// insert are assumed to be populated by session variables, triggers or
/// database defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsertPermissions {
    pub table: String,
    pub columns: Vec<String>,
}

/// Extracts the insert permissions of `role` from a Hasura metadata
/// document, keyed by table name.
///
/// Both document shapes Hasura exports are accepted: `sources` at the top
/// level, or nested under a `metadata` key. Tables without an insert
/// permission for the role are absent from the result; that is not an
/// error.
pub fn read_insert_permissions(
    document: &str,
    role: &str,
) -> Result<HashMap<String, InsertPermissions>, MetadataError> {
    let document: MetadataDocument = serde_json::from_str(document)?;

    let sources = document
        .metadata
        .and_then(|metadata| metadata.sources)
        .or(document.sources)
        .unwrap_or_default();

    let mut permissions = HashMap::new();

    for source in sources {
        for table in source.tables {
            let Some(name) = table.table.and_then(TableReference::into_name) else {
                continue;
            };

            let Some(entry) = table
                .insert_permissions
                .into_iter()
                .find(|permission| permission.role == role)
            else {
                continue;
            };

            let columns = entry
                .permission
                .map(|permission| permission.columns)
                .unwrap_or_default();

            tracing::debug!(table = name.as_str(), ?columns, "insert permissions");

            permissions.insert(
                name.clone(),
                InsertPermissions {
                    table: name,
                    columns,
                },
            );
        }
    }

    Ok(permissions)
}

/// [`read_insert_permissions`] over a metadata file on disk.
pub fn read_insert_permissions_from_path(
    path: &Path,
    role: &str,
) -> Result<HashMap<String, InsertPermissions>, MetadataError> {
    let document = std::fs::read_to_string(path).map_err(|source| MetadataError::Read {
        path: path.to_owned(),
        source,
    })?;

    read_insert_permissions(&document, role)
}

#[derive(Deserialize)]
struct MetadataDocument {
    sources: Option<Vec<SourceEntry>>,
    metadata: Option<NestedMetadata>,
}

#[derive(Deserialize)]
struct NestedMetadata {
    sources: Option<Vec<SourceEntry>>,
}

#[derive(Deserialize)]
struct SourceEntry {
    #[serde(default)]
    tables: Vec<TableEntry>,
}

#[derive(Deserialize)]
struct TableEntry {
    table: Option<TableReference>,
    #[serde(default)]
    insert_permissions: Vec<InsertPermissionEntry>,
}

/// A table reference is either a bare name or a qualified
/// `{ "schema": ..., "name": ... }` object.
#[derive(Deserialize)]
#[serde(untagged)]
enum TableReference {
    Name(String),
    Qualified { name: String },
}

impl TableReference {
    fn into_name(self) -> Option<String> {
        match self {
            TableReference::Name(name) | TableReference::Qualified { name } => {
                if name.is_empty() {
                    None
                } else {
                    Some(name)
                }
            }
        }
    }
}

#[derive(Deserialize)]
struct InsertPermissionEntry {
    role: String,
    permission: Option<PermissionEntry>,
}

#[derive(Deserialize)]
struct PermissionEntry {
    #[serde(default)]
    columns: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    const DOCUMENT: &str = indoc! {r#"
        {
          "metadata": {
            "sources": [
              {
                "name": "default",
                "tables": [
                  {
                    "table": { "schema": "public", "name": "profiles" },
                    "insert_permissions": [
                      {
                        "role": "server",
                        "permission": { "columns": ["name", "email"] }
                      },
                      {
                        "role": "user",
                        "permission": { "columns": ["name"] }
                      }
                    ]
                  },
                  {
                    "table": "orders",
                    "insert_permissions": [
                      { "role": "user", "permission": { "columns": [] } }
                    ]
                  },
                  {
                    "table": "audit_log"
                  }
                ]
              }
            ]
          }
        }
    "#};

    #[test]
    fn reads_permissions_for_the_configured_role() {
        let permissions = read_insert_permissions(DOCUMENT, "server").unwrap();

        assert_eq!(permissions.len(), 1);
        assert_eq!(
            permissions["profiles"],
            InsertPermissions {
                table: "profiles".to_owned(),
                columns: vec!["name".to_owned(), "email".to_owned()],
            }
        );
    }

    #[test]
    fn tables_without_a_permission_for_the_role_are_absent() {
        let permissions = read_insert_permissions(DOCUMENT, "user").unwrap();

        assert!(permissions.contains_key("profiles"));
        assert!(permissions.contains_key("orders"));
        assert!(!permissions.contains_key("audit_log"));
    }

    #[test]
    fn accepts_top_level_sources() {
        let document = indoc! {r#"
            {
              "sources": [
                {
                  "tables": [
                    {
                      "table": "profiles",
                      "insert_permissions": [
                        { "role": "server", "permission": { "columns": ["id"] } }
                      ]
                    }
                  ]
                }
              ]
            }
        "#};

        let permissions = read_insert_permissions(document, "server").unwrap();

        assert_eq!(permissions["profiles"].columns, vec!["id".to_owned()]);
    }

    #[test]
    fn missing_columns_default_to_empty() {
        let document = indoc! {r#"
            {
              "sources": [
                {
                  "tables": [
                    {
                      "table": "profiles",
                      "insert_permissions": [{ "role": "server", "permission": {} }]
                    }
                  ]
                }
              ]
            }
        "#};

        let permissions = read_insert_permissions(document, "server").unwrap();

        assert!(permissions["profiles"].columns.is_empty());
    }

    #[test]
    fn invalid_json_is_a_parse_error() {
        let err = read_insert_permissions("{ not json", "server").unwrap_err();

        assert!(matches!(err, MetadataError::Parse(_)));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let err =
            read_insert_permissions_from_path(Path::new("/does/not/exist.json"), "server")
                .unwrap_err();

        assert!(matches!(err, MetadataError::Read { .. }));
    }
}
