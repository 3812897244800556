//! Turns [`SchemaMetadata`](hasura_schema_analyzer::SchemaMetadata) into
//! TypeScript source text: one module of type definitions and the three
//! client modules (base client, generic table client, per-table registry).
//!
//! The emitters only read analyzed metadata; they never look at the
//! introspection payload, and they can run in either order.

mod client;
mod idents;
mod ts;
mod types;

pub use client::{generate_client, GeneratedFile};
pub use types::generate_types;

const HEADER: &str = "// AUTO-GENERATED FILE\n// DO NOT EDIT MANUALLY\n\n";
