//! Error types for the decoder layer.

/// Error returned by schema binding and [`RecordDecoder`](crate::RecordDecoder)
/// implementations.
#[derive(Debug, thiserror::Error)]
pub enum DecoderError {
    /// Column names and type declarations differ in length.
    #[error("schema mismatch: {names} column names but {types} type declarations")]
    SchemaMismatch { names: usize, types: usize },

    /// No columns were declared.
    #[error("schema must declare at least one column")]
    EmptySchema,

    /// A required table property was not supplied.
    #[error("missing table property '{key}'")]
    MissingProperty { key: String },

    /// The raw record did not contain a tab-separated key and payload.
    #[error("malformed record: expected '<key>\\t<payload>', found {parts} tab-delimited part(s)")]
    MalformedRecord { parts: usize },

    /// A field value could not be parsed as its declared scalar type.
    #[error("cannot coerce field '{field}' value '{raw}' to {scalar_type}: {source}")]
    TypeCoercion {
        field: String,
        scalar_type: &'static str,
        raw: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The requested operation is not implemented by this decoder.
    #[error("{operation} is not supported")]
    NotSupported { operation: &'static str },
}

/// Error returned when a [`Value`](crate::Value) accessor is called on the
/// wrong variant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("expected {expected}, found {actual}")]
pub struct ValueTypeError {
    pub expected: String,
    pub actual: String,
}

impl ValueTypeError {
    pub fn new(expected: impl Into<String>, actual: impl Into<String>) -> Self {
        Self {
            expected: expected.into(),
            actual: actual.into(),
        }
    }
}
