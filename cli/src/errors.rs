use crate::fetch::FetchError;
use hasura_metadata::MetadataError;
use hasura_schema_analyzer::SchemaError;
use std::{io, path::PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    /// wraps an error from reading or parsing the Hasura metadata document
    #[error(transparent)]
    Metadata(#[from] MetadataError),
    /// wraps a structural error in the introspection payload
    #[error(transparent)]
    Schema(#[from] SchemaError),
    #[error("error during schema introspection: {0}")]
    Introspection(#[from] FetchError),
    #[error("could not write the generated package to `{path}`: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
