//! Single source of truth for what the generated client can do with each
//! table: select fields, insert/update input shapes, required insert
//! fields, primary keys and available operations.

mod analyze;
mod error;
mod model;

pub use analyze::analyze;
pub use error::SchemaError;
pub use model::{
    Field, InputField, InputObject, Operations, PrimaryKey, SchemaMetadata, TableMetadata,
};
