//! Bound record schema and the binder that produces it.

mod bind;
mod format;
mod types;

pub use bind::{bind, split_type_declarations};
pub use format::{format_schema, format_schema_with};
pub use types::{FieldDef, ScalarType, Schema};
