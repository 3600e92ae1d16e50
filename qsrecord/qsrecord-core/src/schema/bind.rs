use super::{FieldDef, ScalarType, Schema};
use crate::error::DecoderError;

/// Bind parallel column name / type declaration lists into a [`Schema`].
///
/// Names are trimmed and lower-cased so they can be matched against
/// case-normalized record keys. Unrecognized type declarations bind as
/// [`ScalarType::Text`].
pub fn bind<N, T>(names: &[N], type_decls: &[T]) -> Result<Schema, DecoderError>
where
    N: AsRef<str>,
    T: AsRef<str>,
{
    if names.len() != type_decls.len() {
        return Err(DecoderError::SchemaMismatch {
            names: names.len(),
            types: type_decls.len(),
        });
    }

    let fields = names
        .iter()
        .zip(type_decls)
        .map(|(name, decl)| FieldDef::new(name.as_ref(), ScalarType::parse(decl.as_ref())))
        .collect::<Vec<_>>();

    Schema::new(fields)
}

impl Schema {
    /// Bind a schema from comma-separated column names and type declarations.
    ///
    /// See [`split_type_declarations`] for how the type list is tokenized.
    pub fn from_declarations(columns: &str, types: &str) -> Result<Self, DecoderError> {
        let names: Vec<&str> = if columns.trim().is_empty() {
            Vec::new()
        } else {
            columns.split(',').collect()
        };
        bind(&names, &split_type_declarations(types))
    }
}

/// Split a type declaration list on top-level `,`, `:` or `;`.
///
/// Separators nested inside `<...>` or `(...)` do not split, so
/// `map<string,int>` and `decimal(10,2)` stay single declarations.
/// Empty input yields no declarations.
pub fn split_type_declarations(types: &str) -> Vec<&str> {
    if types.trim().is_empty() {
        return Vec::new();
    }

    let mut decls = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (i, c) in types.char_indices() {
        match c {
            '<' | '(' => depth += 1,
            '>' | ')' => depth = depth.saturating_sub(1),
            ',' | ':' | ';' if depth == 0 => {
                decls.push(&types[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    decls.push(&types[start..]);
    decls
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_keeps_nested_separators() {
        assert_eq!(
            split_type_declarations("int,map<string,int>:decimal(10,2);string"),
            vec!["int", "map<string,int>", "decimal(10,2)", "string"]
        );
    }

    #[test]
    fn split_empty_yields_nothing() {
        assert!(split_type_declarations("  ").is_empty());
    }
}
