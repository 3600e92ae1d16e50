//! Conversion from decoded [`DecodedRecord`] rows to Arrow `RecordBatch`.

mod append;
mod builder;

use std::sync::Arc;

use arrow::array::ArrayRef;
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use qsrecord_core::DecodedRecord;

use crate::error::ArrowConvertError;

/// Convert decoded rows to a RecordBatch.
///
/// `schema` is usually produced by
/// [`schema_to_arrow_schema`](crate::schema_to_arrow_schema); column `i` is
/// filled from value `i` of every row, and absent values become nulls.
///
/// Returns an error if `rows` is empty, a row's width differs from the
/// schema, or a value's variant does not match its column's data type.
pub fn records_to_record_batch(
    schema: &Schema,
    rows: &[DecodedRecord],
) -> Result<RecordBatch, ArrowConvertError> {
    if rows.is_empty() {
        return Err(ArrowConvertError::EmptyRows);
    }

    let fields = schema.fields();
    let misshapen = rows
        .iter()
        .enumerate()
        .find(|(_, r)| r.len() != fields.len());
    if let Some((row, record)) = misshapen {
        return Err(ArrowConvertError::RowWidth {
            row,
            expected: fields.len(),
            actual: record.len(),
        });
    }

    let arrays = fields
        .iter()
        .enumerate()
        .map(|(i, field)| build_column(field, i, rows))
        .collect::<Result<Vec<ArrayRef>, _>>()?;

    Ok(RecordBatch::try_new(Arc::new(schema.clone()), arrays)?)
}

fn build_column(
    field: &Field,
    index: usize,
    rows: &[DecodedRecord],
) -> Result<ArrayRef, ArrowConvertError> {
    let dt: &DataType = field.data_type();
    let mut builder = builder::make_builder(dt, rows.len()).ok_or_else(|| {
        ArrowConvertError::UnsupportedDataType {
            column: field.name().clone(),
            data_type: dt.to_string(),
        }
    })?;

    for row in rows {
        append::append_value_to_builder(&mut builder, dt, row.get(index)).map_err(|source| {
            ArrowConvertError::ValueType {
                column: field.name().clone(),
                source,
            }
        })?;
    }
    Ok(builder.finish())
}
