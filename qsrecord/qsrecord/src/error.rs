//! Error types for the record reader.

use qsrecord_arrow::ArrowConvertError;
use qsrecord_core::DecoderError;

/// Errors produced by [`RecordReader`](crate::RecordReader).
#[derive(Debug, thiserror::Error)]
pub enum ReaderError {
    /// I/O error while opening or memory-mapping a file.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// [`RecordReaderBuilder::build`](crate::RecordReaderBuilder::build) was
    /// called without a decoder.
    #[error("no record decoder registered")]
    NoDecoder,

    /// A line could not be decoded and the bad record policy is
    /// [`BadRecordPolicy::Fail`](crate::BadRecordPolicy::Fail).
    #[error("record decode failed at line {line}: {source}")]
    RecordDecodeFailed {
        line: usize,
        #[source]
        source: DecoderError,
    },

    /// Decoded rows could not be assembled into a RecordBatch.
    #[error(transparent)]
    ArrowConvert(#[from] ArrowConvertError),

    /// An error returned by the user-supplied callback.
    #[error(transparent)]
    Callback(Box<dyn std::error::Error + Send + Sync>),
}
