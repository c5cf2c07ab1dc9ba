//! Calendar helpers: day of week, month lengths and short names.

/// Three-letter month names, index 1 = January (index 0 is blank).
pub const MONTH_NAMES: [&str; 13] = [
    "   ", "JAN", "FEB", "MAR", "APR", "MAY", "JUN", "JUL", "AUG", "SEP", "OCT", "NOV", "DEC",
];

/// Three-letter day names, index 0 = Sunday.
pub const DAY_NAMES: [&str; 7] = ["SUN", "MON", "TUE", "WED", "THU", "FRI", "SAT"];

/// Day of week (0 = Sunday) for a date in 2000..=2099.
///
/// January and February count as months 13 and 14 of the previous year.
pub const fn day_of_week(
    month: u8,
    day: u8,
    year: u8,
) -> u8 {
    let mut month = month as u16;
    let mut year = 2000 + year as u16;
    if month < 3 {
        month += 12;
        year -= 1;
    }
    let sum = day as u16 + 2 * month + 6 * (month + 1) / 10 + year + year / 4 - year / 100 + year / 400 + 1;
    (sum % 7) as u8
}

/// Whether a two-digit (2000-based) year is a leap year.
#[inline]
pub const fn is_leap_year(year: u8) -> bool {
    let year = 2000 + year as u16;
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Days in `month` (1-12) of a two-digit year. Out-of-range months read as 31.
pub const fn days_in_month(
    month: u8,
    year: u8,
) -> u8 {
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

/// Short name of a month, blank for anything out of range.
pub fn month_name(month: u8) -> &'static str { MONTH_NAMES.get(month as usize).copied().unwrap_or(MONTH_NAMES[0]) }

/// Short name of a weekday (0 = Sunday), wrapping past Saturday.
pub fn day_name(day_of_week: u8) -> &'static str { DAY_NAMES[(day_of_week % 7) as usize] }
