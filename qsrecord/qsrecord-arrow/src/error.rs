use arrow::error::ArrowError;
use qsrecord_core::ValueTypeError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ArrowConvertError {
    #[error("Cannot create RecordBatch from empty rows")]
    EmptyRows,
    #[error("row {row} has {actual} values but the schema has {expected} columns")]
    RowWidth {
        row: usize,
        expected: usize,
        actual: usize,
    },
    #[error("value type mismatch in column '{column}': {source}")]
    ValueType {
        column: String,
        #[source]
        source: ValueTypeError,
    },
    #[error("unsupported Arrow data type for column '{column}': {data_type}")]
    UnsupportedDataType { column: String, data_type: String },
    #[error(transparent)]
    Arrow(#[from] ArrowError),
}
