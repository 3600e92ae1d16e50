//! Decoded row type.

use std::ops::Deref;

use crate::value::Value;

/// One decoded row: a value (or `None` for an absent field) per schema field,
/// in schema order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DecodedRecord(Vec<Option<Value>>);

impl DecodedRecord {
    /// A row of `len` absent values.
    pub fn with_len(len: usize) -> Self {
        Self(vec![None; len])
    }

    /// Clear every slot and resize to `len`, keeping the allocation.
    pub fn reset(&mut self, len: usize) {
        self.0.clear();
        self.0.resize(len, None);
    }

    pub fn get(&self, index: usize) -> Option<&Value> {
        self.0.get(index).and_then(Option::as_ref)
    }

    /// Store `value` in slot `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not less than the row length.
    pub fn set(&mut self, index: usize, value: Option<Value>) {
        self.0[index] = value;
    }

    pub fn into_values(self) -> Vec<Option<Value>> {
        self.0
    }
}

impl From<Vec<Option<Value>>> for DecodedRecord {
    fn from(values: Vec<Option<Value>>) -> Self {
        Self(values)
    }
}

impl Deref for DecodedRecord {
    type Target = [Option<Value>];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
