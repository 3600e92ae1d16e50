use arrow::datatypes::{DataType, Field, Schema as ArrowSchema};
use qsrecord_core::{FieldDef, ScalarType, Schema};

/// Converts a bound record schema into an Arrow `Schema`.
///
/// Every column is nullable since any field may be absent from a record.
pub fn schema_to_arrow_schema(schema: &Schema) -> ArrowSchema {
    let arrow_fields: Vec<Field> = schema.iter().map(field_def_to_arrow_field).collect();
    ArrowSchema::new(arrow_fields)
}

fn field_def_to_arrow_field(f: &FieldDef) -> Field {
    Field::new(&f.name, scalar_type_to_datatype(f.scalar_type), true)
}

pub fn scalar_type_to_datatype(scalar_type: ScalarType) -> DataType {
    match scalar_type {
        ScalarType::Double => DataType::Float64,
        ScalarType::BigInt => DataType::Int64,
        ScalarType::Int => DataType::Int32,
        ScalarType::TinyInt => DataType::Int8,
        ScalarType::Float => DataType::Float32,
        ScalarType::Boolean => DataType::Boolean,
        ScalarType::Text => DataType::Utf8,
    }
}
