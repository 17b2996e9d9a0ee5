//! Identity-document normalization.
//!
//! Two schemes are supported: the Chilean RUT, validated against its mod-11
//! check digit (see [`checksum`]), and a generic fallback for any other
//! national document. Invalid input is always reported as a value, never
//! as an error type; the prompt layer re-asks until normalization succeeds.

/// Chilean RUT check-digit computation and formatting.
pub mod checksum;

/// Minimum length accepted for a generic (non-RUT) document.
const GENERIC_MIN_LEN: usize = 5;

/// Heuristic: does the input look like a Chilean RUT?
///
/// True when the trimmed, uppercased text contains a separator (`-` or `.`),
/// or when its last character is a digit or `K` and the non-empty remaining
/// prefix is all digits. Empty input is never a RUT.
pub fn looks_like_rut(text: &str) -> bool {
    let doc = text.trim().to_uppercase();
    if doc.is_empty() {
        return false;
    }

    if doc.contains('-') || doc.contains('.') {
        return true;
    }

    let Some(last) = doc.chars().next_back() else {
        return false;
    };
    if last.is_ascii_digit() || last == 'K' {
        let body = &doc[..doc.len() - last.len_utf8()];
        return !body.is_empty() && body.bytes().all(|b| b.is_ascii_digit());
    }

    false
}

/// Normalizes an identity document, or returns `None` when invalid.
///
/// RUT-looking input is verified and formatted as `body-checkdigit`; any
/// other input is accepted as a generic document — uppercased, with a
/// minimum length of 5 characters. No partially normalized value is ever
/// returned.
pub fn normalize(text: &str) -> Option<String> {
    let doc = text.trim();
    if doc.is_empty() {
        return None;
    }

    if looks_like_rut(doc) {
        return checksum::format(doc);
    }

    let norm = doc.to_uppercase();
    if norm.chars().count() < GENERIC_MIN_LEN {
        return None;
    }
    Some(norm)
}
