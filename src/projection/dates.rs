//! Calendar bucketing on ISO date strings
//!
//! Month and year are read from the literal `YYYY-MM` prefix of a date
//! string. No date-time value is ever constructed, so a row dated
//! `2024-01-31` lands in January 2024 whatever the host's UTC offset.

/// Three-letter month labels, indexed by zero-based month
pub const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Split an ISO date string into `(year, zero-based month)`.
///
/// Only the first two `-`-separated components are inspected. The month
/// component is read from its leading digits, so `2024-01-15T08:00:00Z`
/// parses the same as `2024-01-15`. Returns `None` when either component is
/// missing or not a number, or when the month is outside 1..=12.
pub fn year_month(date: &str) -> Option<(i32, u32)> {
    let mut parts = date.trim().split('-');

    let year_part = parts.next()?;
    if year_part.is_empty() || !year_part.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let year: i32 = year_part.parse().ok()?;

    let month_part = parts.next()?;
    let digits: String = month_part
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    let month: u32 = digits.parse().ok()?;

    if !(1..=12).contains(&month) {
        return None;
    }

    Some((year, month - 1))
}

/// Whether `date` falls in the given year and zero-based month
pub fn in_month(date: &str, year: i32, month0: u32) -> bool {
    year_month(date) == Some((year, month0))
}

/// First day of a month as an ISO string, built by zero-padding
pub fn first_of_month(year: i64, month0: u32) -> String {
    format!("{}-{:02}-01", year, month0 + 1)
}

/// Three-letter label for a zero-based month
pub fn month_label(month0: u32) -> &'static str {
    MONTH_LABELS[(month0 % 12) as usize]
}
