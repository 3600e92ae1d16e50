//! Type-safe scalar representation produced by record decoders.

use std::sync::Arc;

use crate::{error::ValueTypeError, schema::ScalarType};

/// Scalar value produced by record decoders, one variant per [`ScalarType`].
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Double(f64),
    BigInt(i64),
    Int(i32),
    TinyInt(i8),
    Float(f32),
    Boolean(bool),
    Text(Arc<str>),
}

impl Value {
    pub fn text(s: impl AsRef<str>) -> Self {
        Self::Text(Arc::from(s.as_ref()))
    }

    pub fn scalar_type(&self) -> ScalarType {
        match self {
            Value::Double(_) => ScalarType::Double,
            Value::BigInt(_) => ScalarType::BigInt,
            Value::Int(_) => ScalarType::Int,
            Value::TinyInt(_) => ScalarType::TinyInt,
            Value::Float(_) => ScalarType::Float,
            Value::Boolean(_) => ScalarType::Boolean,
            Value::Text(_) => ScalarType::Text,
        }
    }

    pub fn try_f64(&self) -> Result<f64, ValueTypeError> {
        match self {
            Value::Double(v) => Ok(*v),
            _ => Err(self.type_mismatch(ScalarType::Double)),
        }
    }

    pub fn try_i64(&self) -> Result<i64, ValueTypeError> {
        match self {
            Value::BigInt(v) => Ok(*v),
            _ => Err(self.type_mismatch(ScalarType::BigInt)),
        }
    }

    pub fn try_i32(&self) -> Result<i32, ValueTypeError> {
        match self {
            Value::Int(v) => Ok(*v),
            _ => Err(self.type_mismatch(ScalarType::Int)),
        }
    }

    pub fn try_i8(&self) -> Result<i8, ValueTypeError> {
        match self {
            Value::TinyInt(v) => Ok(*v),
            _ => Err(self.type_mismatch(ScalarType::TinyInt)),
        }
    }

    pub fn try_f32(&self) -> Result<f32, ValueTypeError> {
        match self {
            Value::Float(v) => Ok(*v),
            _ => Err(self.type_mismatch(ScalarType::Float)),
        }
    }

    pub fn try_bool(&self) -> Result<bool, ValueTypeError> {
        match self {
            Value::Boolean(v) => Ok(*v),
            _ => Err(self.type_mismatch(ScalarType::Boolean)),
        }
    }

    pub fn try_str(&self) -> Result<&str, ValueTypeError> {
        match self {
            Value::Text(v) => Ok(v.as_ref()),
            _ => Err(self.type_mismatch(ScalarType::Text)),
        }
    }

    pub fn type_mismatch(&self, expected: ScalarType) -> ValueTypeError {
        ValueTypeError::new(expected.type_name(), self.scalar_type().type_name())
    }
}
