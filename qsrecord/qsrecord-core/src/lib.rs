//! Format-agnostic core types and decoder contracts for `qsrecord`.
//!
//! This crate provides the bound record [`Schema`], the typed [`Value`] /
//! [`DecodedRecord`] representation produced by decoders, and the
//! [`RecordDecoder`] trait implemented by concrete wire formats.

mod decoder;
mod error;
mod record;
mod schema;
mod value;

pub use decoder::RecordDecoder;
pub use error::{DecoderError, ValueTypeError};
pub use record::DecodedRecord;
pub use schema::{
    FieldDef, ScalarType, Schema, bind, format_schema, format_schema_with, split_type_declarations,
};
pub use value::Value;
