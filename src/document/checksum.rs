//! Chilean RUT check-digit scheme.
//!
//! A RUT is a numeric body followed by a single check character. The check
//! character is derived from a weighted sum over the body's digits, walking
//! from least-significant to most-significant with weights cycling through
//! 2, 3, 4, 5, 6, 7.

/// Strips periods, hyphens, and whitespace, and uppercases the rest.
pub fn clean(rut: &str) -> String {
    rut.chars()
        .filter(|c| *c != '.' && *c != '-' && !c.is_whitespace())
        .flat_map(char::to_uppercase)
        .collect()
}

/// Computes the check digit for a numeric body.
///
/// `body` must contain only ASCII digits; callers validate shape first.
/// Remainder 11 maps to `'0'`, 10 maps to `'K'`, anything else to the
/// decimal digit.
pub fn check_digit(body: &str) -> char {
    let mut sum: u32 = 0;
    let mut weight: u32 = 2;

    for digit in body.chars().rev().filter_map(|c| c.to_digit(10)) {
        sum += digit * weight;
        weight += 1;
        if weight > 7 {
            weight = 2;
        }
    }

    match 11 - (sum % 11) {
        11 => '0',
        10 => 'K',
        n => char::from_digit(n, 10).unwrap_or('0'),
    }
}

/// Verifies that the trailing check character matches the computed one.
pub fn is_valid(rut: &str) -> bool {
    let cleaned = clean(rut);
    if cleaned.len() < 2 {
        return false;
    }

    let Some(given) = cleaned.chars().next_back() else {
        return false;
    };
    let body = &cleaned[..cleaned.len() - given.len_utf8()];

    if body.is_empty() || !body.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    if !given.is_ascii_digit() && given != 'K' {
        return false;
    }

    given == check_digit(body)
}

/// Returns the RUT normalized as `body-checkdigit`, or `None` when invalid.
pub fn format(rut: &str) -> Option<String> {
    if !is_valid(rut) {
        return None;
    }

    let cleaned = clean(rut);
    let (body, digit) = cleaned.split_at(cleaned.len() - 1);
    Some(format!("{body}-{digit}"))
}
