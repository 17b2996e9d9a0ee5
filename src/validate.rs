//! Field-level predicates for already-captured prompt input.
//!
//! These are pure string checks with no state; the prompt layer loops on
//! them until the user supplies something acceptable. The core registry
//! assumes its inputs already passed these checks.

/// True when the text is non-empty after trimming.
pub fn non_empty_text(text: &str) -> bool {
    !text.trim().is_empty()
}

/// True when the text is a strictly positive decimal integer.
pub fn positive_integer(value: &str) -> bool {
    !value.is_empty()
        && value.bytes().all(|b| b.is_ascii_digit())
        && value.parse::<u64>().is_ok_and(|n| n > 0)
}

/// True when the text is a calendar date in `dd-mm-yyyy` form.
///
/// Years before 1900 are rejected; February honors the Gregorian leap rule.
pub fn date_dd_mm_yyyy(value: &str) -> bool {
    let parts: Vec<&str> = value.split('-').collect();
    if parts.len() != 3 {
        return false;
    }

    if parts
        .iter()
        .any(|p| p.is_empty() || !p.bytes().all(|b| b.is_ascii_digit()))
    {
        return false;
    }

    let (Ok(day), Ok(month), Ok(year)) = (
        parts[0].parse::<u32>(),
        parts[1].parse::<u32>(),
        parts[2].parse::<u32>(),
    ) else {
        return false;
    };

    if year < 1900 || !(1..=12).contains(&month) || day < 1 {
        return false;
    }

    day <= days_in_month(month, year)
}

fn days_in_month(month: u32, year: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        _ => 28,
    }
}

fn is_leap_year(year: u32) -> bool {
    year % 400 == 0 || (year % 4 == 0 && year % 100 != 0)
}
