use std::str::FromStr;

use qsrecord_core::{DecoderError, ScalarType, Value};

use crate::percent::percent_decode_lenient;

/// Coerce a raw query value into `scalar_type`.
///
/// Numeric failures are reported as [`DecoderError::TypeCoercion`]. Booleans
/// are `true` only for a case-insensitive `"true"`. Text is percent-decoded,
/// falling back to the raw value when decoding is not possible.
pub fn coerce_value(
    field: &str,
    scalar_type: ScalarType,
    raw: &str,
) -> Result<Value, DecoderError> {
    Ok(match scalar_type {
        ScalarType::Double => Value::Double(parse_number(field, scalar_type, raw.trim(), raw)?),
        ScalarType::Float => Value::Float(parse_number(field, scalar_type, raw.trim(), raw)?),
        ScalarType::BigInt => Value::BigInt(parse_number(field, scalar_type, raw, raw)?),
        ScalarType::Int => Value::Int(parse_number(field, scalar_type, raw, raw)?),
        ScalarType::TinyInt => Value::TinyInt(parse_number(field, scalar_type, raw, raw)?),
        ScalarType::Boolean => Value::Boolean(raw.eq_ignore_ascii_case("true")),
        ScalarType::Text => Value::text(percent_decode_lenient(raw)),
    })
}

/// Coerce the leading record key into `scalar_type`.
///
/// Unlike payload values, a text key is stored verbatim without
/// percent-decoding. Other types coerce as in [`coerce_value`].
pub fn coerce_record_key(
    field: &str,
    scalar_type: ScalarType,
    key: &str,
) -> Result<Value, DecoderError> {
    match scalar_type {
        ScalarType::Text => Ok(Value::text(key)),
        _ => coerce_value(field, scalar_type, key),
    }
}

fn parse_number<N>(
    field: &str,
    scalar_type: ScalarType,
    literal: &str,
    raw: &str,
) -> Result<N, DecoderError>
where
    N: FromStr,
    N::Err: std::error::Error + Send + Sync + 'static,
{
    literal.parse().map_err(|e: N::Err| DecoderError::TypeCoercion {
        field: field.to_string(),
        scalar_type: scalar_type.type_name(),
        raw: raw.to_string(),
        source: Box::new(e),
    })
}
