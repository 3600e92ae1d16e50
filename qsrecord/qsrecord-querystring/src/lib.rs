//! Query-string [`RecordDecoder`] implementation for the qsrecord pipeline.
//!
//! This crate provides [`QueryStringDecoder`], which decodes
//! `<key>\t<name>=<value>&...` text records into [`DecodedRecord`] rows
//! shaped by a bound [`Schema`]. It also exposes the lower-level
//! [`QueryParamMap`] and [`percent_decode_lenient`] helpers for direct use.
//!
//! [`RecordDecoder`]: qsrecord_core::RecordDecoder
//! [`DecodedRecord`]: qsrecord_core::DecodedRecord
//! [`Schema`]: qsrecord_core::Schema

mod coerce;
mod decoder;
mod percent;
mod query_map;

pub use coerce::{coerce_record_key, coerce_value};
pub use decoder::{COLUMNS_PROPERTY, COLUMN_TYPES_PROPERTY, QueryStringDecoder, RECORD_KEY_FIELD};
pub use percent::percent_decode_lenient;
pub use query_map::QueryParamMap;
