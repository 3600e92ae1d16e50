//! Arrow integration layer for `qsrecord`.
//!
//! This crate focuses on two responsibilities:
//! 1. Convert a bound `qsrecord-core` [`Schema`](qsrecord_core::Schema) to an
//!    Arrow `Schema`.
//! 2. Convert decoded [`DecodedRecord`](qsrecord_core::DecodedRecord) rows into
//!    an Arrow `RecordBatch`.
//!
//! # Typical Flow
//! ```rust
//! use qsrecord_arrow::{records_to_record_batch, schema_to_arrow_schema};
//! use qsrecord_core::{DecodedRecord, Schema, Value};
//!
//! let schema = Schema::from_declarations("key,n", "string,int").unwrap();
//! let arrow_schema = schema_to_arrow_schema(&schema);
//! let rows = vec![DecodedRecord::from(vec![Some(Value::text("k1")), Some(Value::Int(7))])];
//! let batch = records_to_record_batch(&arrow_schema, &rows).unwrap();
//! assert_eq!(batch.num_rows(), 1);
//! ```
pub mod arrow_convert;
pub mod error;
pub mod schema_convert;

/// Re-export of [`arrow_convert::records_to_record_batch`].
pub use arrow_convert::records_to_record_batch;
/// Re-export of [`error::ArrowConvertError`].
pub use error::ArrowConvertError;
/// Re-exports from [`schema_convert`].
pub use schema_convert::{scalar_type_to_datatype, schema_to_arrow_schema};
