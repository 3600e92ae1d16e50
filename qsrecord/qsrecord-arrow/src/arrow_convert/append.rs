use arrow::{
    array::{
        ArrayBuilder, BooleanBuilder, Float32Builder, Float64Builder, Int8Builder, Int32Builder,
        Int64Builder, StringBuilder,
    },
    datatypes::DataType,
};
use qsrecord_core::{Value, ValueTypeError};

macro_rules! cast_builder {
    ($b:expr, $T:ty) => {
        $b.as_any_mut()
            .downcast_mut::<$T>()
            .expect(concat!("expected builder type: ", stringify!($T)))
    };
}

/// Append one optional value to a builder created by `make_builder` for `dt`.
pub(super) fn append_value_to_builder(
    builder: &mut Box<dyn ArrayBuilder>,
    dt: &DataType,
    value: Option<&Value>,
) -> Result<(), ValueTypeError> {
    match dt {
        DataType::Boolean => cast_builder!(builder, BooleanBuilder)
            .append_option(value.map(Value::try_bool).transpose()?),
        DataType::Int8 => {
            cast_builder!(builder, Int8Builder).append_option(value.map(Value::try_i8).transpose()?)
        }
        DataType::Int32 => cast_builder!(builder, Int32Builder)
            .append_option(value.map(Value::try_i32).transpose()?),
        DataType::Int64 => cast_builder!(builder, Int64Builder)
            .append_option(value.map(Value::try_i64).transpose()?),
        DataType::Float32 => cast_builder!(builder, Float32Builder)
            .append_option(value.map(Value::try_f32).transpose()?),
        DataType::Float64 => cast_builder!(builder, Float64Builder)
            .append_option(value.map(Value::try_f64).transpose()?),
        DataType::Utf8 => cast_builder!(builder, StringBuilder)
            .append_option(value.map(Value::try_str).transpose()?),
        other => unreachable!("no builder is created for {other:?}"),
    }
    Ok(())
}
