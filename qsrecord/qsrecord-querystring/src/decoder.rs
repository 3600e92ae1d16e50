use std::collections::HashMap;

use qsrecord_core::{DecodedRecord, DecoderError, RecordDecoder, Schema};

use crate::{
    coerce::{coerce_record_key, coerce_value},
    query_map::QueryParamMap,
};

/// Field name bound to the record's leading tab-delimited key.
pub const RECORD_KEY_FIELD: &str = "key";

/// Table property holding the comma-separated column names.
pub const COLUMNS_PROPERTY: &str = "columns";

/// Table property holding the column type declarations.
pub const COLUMN_TYPES_PROPERTY: &str = "columns.types";

/// Stateless decoder for `<key>\t<query payload>` records.
///
/// Only the first two tab-delimited parts of a record are significant; any
/// further parts are ignored.
#[derive(Debug, Clone)]
pub struct QueryStringDecoder {
    schema: Schema,
}

impl QueryStringDecoder {
    /// Build a decoder over an already validated [`Schema`].
    pub fn new(schema: Schema) -> Self {
        tracing::debug!(columns = schema.len(), "initialized query-string decoder");
        Self { schema }
    }

    /// Build a decoder from comma-separated column names and type declarations.
    pub fn from_declarations(columns: &str, types: &str) -> Result<Self, DecoderError> {
        tracing::debug!(columns, types, "initializing query-string decoder");
        Ok(Self::new(Schema::from_declarations(columns, types)?))
    }

    /// Build a decoder from host table properties
    /// ([`COLUMNS_PROPERTY`] and [`COLUMN_TYPES_PROPERTY`]).
    pub fn from_properties(properties: &HashMap<String, String>) -> Result<Self, DecoderError> {
        let property = |key: &str| {
            properties
                .get(key)
                .ok_or_else(|| DecoderError::MissingProperty {
                    key: key.to_string(),
                })
        };
        Self::from_declarations(property(COLUMNS_PROPERTY)?, property(COLUMN_TYPES_PROPERTY)?)
    }
}

impl RecordDecoder for QueryStringDecoder {
    fn schema(&self) -> &Schema {
        &self.schema
    }

    fn decode_into(&self, raw: &str, out: &mut DecodedRecord) -> Result<(), DecoderError> {
        let mut parts = raw.split('\t');
        let (Some(key), Some(payload)) = (parts.next(), parts.next()) else {
            return Err(DecoderError::MalformedRecord { parts: 1 });
        };
        tracing::trace!(key, payload, "decoding record");

        let mut params = QueryParamMap::parse(payload);
        params.insert_record_key(key);

        out.reset(self.schema.len());
        for (i, field) in self.schema.iter().enumerate() {
            let value = match params.record_key() {
                Some(key) if field.name == RECORD_KEY_FIELD => {
                    Some(coerce_record_key(&field.name, field.scalar_type, key)?)
                }
                _ => params
                    .get(&field.name)
                    .map(|raw| coerce_value(&field.name, field.scalar_type, raw))
                    .transpose()?,
            };
            out.set(i, value);
        }
        Ok(())
    }

    fn encode(&self, _record: &DecodedRecord) -> Result<String, DecoderError> {
        tracing::debug!("rejecting encode request; query-string records are read-only");
        Err(DecoderError::NotSupported {
            operation: "encoding query-string records",
        })
    }
}
