//! Decoder trait implemented by concrete record wire formats.

use crate::{error::DecoderError, record::DecodedRecord, schema::Schema};

/// Decodes raw text records into [`DecodedRecord`]s shaped by a bound [`Schema`].
///
/// Implementations hold no per-record mutable state, so one decoder can be
/// shared across threads. Scratch rows passed to [`decode_into`] are owned by
/// the caller and must not be shared between in-flight calls.
///
/// [`decode_into`]: RecordDecoder::decode_into
pub trait RecordDecoder: Send + Sync {
    /// Return the schema every decoded row conforms to.
    fn schema(&self) -> &Schema;

    /// Decode `raw` into `out`, overwriting every slot.
    ///
    /// On error the contents of `out` are unspecified.
    fn decode_into(&self, raw: &str, out: &mut DecodedRecord) -> Result<(), DecoderError>;

    /// Decode `raw` into a freshly allocated row.
    fn decode(&self, raw: &str) -> Result<DecodedRecord, DecoderError> {
        let mut out = DecodedRecord::with_len(self.schema().len());
        self.decode_into(raw, &mut out)?;
        Ok(out)
    }

    /// Encode a row back to the wire format.
    ///
    /// Decoders are ingest-only unless they override this.
    fn encode(&self, _record: &DecodedRecord) -> Result<String, DecoderError> {
        Err(DecoderError::NotSupported {
            operation: "encoding records",
        })
    }
}
