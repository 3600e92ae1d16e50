use std::fmt::Write as _;

use super::FieldDef;

/// Format field definitions one per line as `name: type`.
pub fn format_schema(fields: impl AsRef<[FieldDef]>) -> String {
    format_schema_with(fields, |_| None)
}

/// Format field definitions like [`format_schema`], appending
/// ` (<note>)` to each line for which `annotate` returns a note.
pub fn format_schema_with<F>(fields: impl AsRef<[FieldDef]>, annotate: F) -> String
where
    F: Fn(&FieldDef) -> Option<String>,
{
    let mut out = String::new();
    for field in fields.as_ref() {
        // Writing into a String cannot fail.
        let _ = match annotate(field) {
            Some(note) => writeln!(out, "{}: {} ({note})", field.name, field.scalar_type),
            None => writeln!(out, "{}: {}", field.name, field.scalar_type),
        };
    }
    out
}
