use std::borrow::Cow;

use percent_encoding::percent_decode_str;

/// Decode a URL query value: `+` becomes a space and `%XX` escapes are
/// decoded as UTF-8 octets.
///
/// Returns `raw` unchanged when an escape is truncated or not hexadecimal, or
/// when the decoded octets are not valid UTF-8.
pub fn percent_decode_lenient(raw: &str) -> Cow<'_, str> {
    if !raw.contains(['%', '+']) {
        return Cow::Borrowed(raw);
    }
    if !has_well_formed_escapes(raw.as_bytes()) {
        return Cow::Borrowed(raw);
    }

    let spaced = raw.replace('+', " ");
    match percent_decode_str(&spaced).decode_utf8() {
        Ok(decoded) => Cow::Owned(decoded.into_owned()),
        Err(_) => Cow::Borrowed(raw),
    }
}

fn has_well_formed_escapes(bytes: &[u8]) -> bool {
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            match bytes.get(i + 1..i + 3) {
                Some([hi, lo]) if hi.is_ascii_hexdigit() && lo.is_ascii_hexdigit() => i += 3,
                _ => return false,
            }
        } else {
            i += 1;
        }
    }
    true
}
