use std::{
    fmt::{Display, Formatter, Result},
    ops::Deref,
};

use crate::error::DecoderError;

/// Closed set of scalar column types a record field can be coerced to.
///
/// Variant names mirror [`Value`](crate::Value) for consistency (values ↔ types).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarType {
    Double,
    BigInt,
    Int,
    TinyInt,
    Float,
    Boolean,
    Text,
}

impl ScalarType {
    /// Parse a column type declaration.
    ///
    /// Matching is case-insensitive and ignores surrounding whitespace. Any
    /// declaration outside the closed set (including compound types) is
    /// treated as [`ScalarType::Text`].
    pub fn parse(decl: &str) -> Self {
        let decl = decl.trim();
        [
            Self::Double,
            Self::BigInt,
            Self::Int,
            Self::TinyInt,
            Self::Float,
            Self::Boolean,
        ]
        .into_iter()
        .find(|ty| decl.eq_ignore_ascii_case(ty.type_name()))
        .unwrap_or(Self::Text)
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            ScalarType::Double => "double",
            ScalarType::BigInt => "bigint",
            ScalarType::Int => "int",
            ScalarType::TinyInt => "tinyint",
            ScalarType::Float => "float",
            ScalarType::Boolean => "boolean",
            ScalarType::Text => "string",
        }
    }
}

impl From<&str> for ScalarType {
    fn from(decl: &str) -> Self {
        Self::parse(decl)
    }
}

impl Display for ScalarType {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str(self.type_name())
    }
}

/// A single named, typed column of a [`Schema`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDef {
    pub name: String,
    pub scalar_type: ScalarType,
}

impl FieldDef {
    pub fn new(name: impl Into<String>, scalar_type: ScalarType) -> Self {
        Self {
            name: name.into(),
            scalar_type,
        }
    }
}

/// Ordered, immutable list of [`FieldDef`]s.
///
/// Field order defines the order of values in every
/// [`DecodedRecord`](crate::DecodedRecord) produced against this schema.
/// A schema always has at least one field and its names are lower-cased.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema(Vec<FieldDef>);

impl Schema {
    /// Validate `fields` into a schema.
    ///
    /// Names are trimmed and lower-cased. An empty field list is
    /// [`DecoderError::EmptySchema`].
    pub fn new(fields: Vec<FieldDef>) -> std::result::Result<Self, DecoderError> {
        if fields.is_empty() {
            return Err(DecoderError::EmptySchema);
        }
        let fields = fields
            .into_iter()
            .map(|field| FieldDef::new(field.name.trim().to_lowercase(), field.scalar_type))
            .collect();
        Ok(Self(fields))
    }

    pub fn as_slice(&self) -> &[FieldDef] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldDef> {
        self.0.iter()
    }

    /// Position of the first field named `name`, if any.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.0.iter().position(|f| f.name == name)
    }
}

impl TryFrom<Vec<FieldDef>> for Schema {
    type Error = DecoderError;

    fn try_from(fields: Vec<FieldDef>) -> std::result::Result<Self, Self::Error> {
        Self::new(fields)
    }
}

impl From<Schema> for Vec<FieldDef> {
    fn from(value: Schema) -> Self {
        value.0
    }
}

impl AsRef<[FieldDef]> for Schema {
    fn as_ref(&self) -> &[FieldDef] {
        self.as_slice()
    }
}

impl Deref for Schema {
    type Target = [FieldDef];

    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl Display for Schema {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str(&super::format_schema(self.as_slice()))
    }
}
