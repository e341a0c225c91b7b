//! Display helpers for the numeric-string and ISO-8601 fields the mock API
//! returns.

use std::fmt;

use chrono::DateTime;
use chrono::NaiveDate;
use chrono::NaiveDateTime;
use chrono::Utc;
use itertools::Itertools;

/// The naira sign.
pub const NAIRA_SYMBOL: &str = "₦";

/// A naira amount held in kobo (1/100 naira) so that display never has to
/// reason about floating point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct NairaAmount {
    kobo: i128,
}

impl NairaAmount {
    /// Creates an amount directly from kobo.
    pub fn from_kobo(kobo: i128) -> Self {
        Self { kobo }
    }

    /// Rounds a float to the nearest kobo, half away from zero. Returns
    /// `None` for non-finite values and for amounts too large to count in
    /// kobo.
    ///
    /// # Examples
    /// ```
    /// use api::format::NairaAmount;
    /// assert_eq!(NairaAmount::from_float(12.3).unwrap().as_kobo(), 1230);
    /// assert_eq!(NairaAmount::from_float(-0.25).unwrap().as_kobo(), -25);
    /// assert_eq!(NairaAmount::from_float(1e40), None);
    /// ```
    pub fn from_float(value: f64) -> Option<Self> {
        let kobo = (value * 100.0).round();
        // i128::MAX as f64 rounds up to 2^127, which is itself out of range.
        if kobo.is_finite() && kobo.abs() < i128::MAX as f64 {
            Some(Self { kobo: kobo as i128 })
        } else {
            None
        }
    }

    /// Parses a numeric-string. Returns `None` when the string does not
    /// coerce to a finite number or does not fit in kobo.
    pub fn parse(s: &str) -> Option<Self> {
        coerce_number(s).and_then(Self::from_float)
    }

    pub fn as_kobo(&self) -> i128 {
        self.kobo
    }

    /// Formats with the currency sign and thousands separators, e.g.
    /// `₦1,000.00` or `-₦25.50`.
    pub fn to_string_with_symbol(&self) -> String {
        let sign = if self.kobo < 0 { "-" } else { "" };
        let abs = self.kobo.unsigned_abs();
        format!(
            "{}{}{}.{:02}",
            sign,
            NAIRA_SYMBOL,
            group_thousands(&(abs / 100).to_string()),
            abs % 100
        )
    }
}

/// The bare numeric form, e.g. `1000.00`.
impl fmt::Display for NairaAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.kobo < 0 { "-" } else { "" };
        let abs = self.kobo.unsigned_abs();
        write!(f, "{}{}.{:02}", sign, abs / 100, abs % 100)
    }
}

fn group_thousands(digits: &str) -> String {
    digits
        .as_bytes()
        .rchunks(3)
        .rev()
        .map(|chunk| chunk.iter().map(|b| *b as char).collect::<String>())
        .join(",")
}

/// Coerces a numeric-string the way the dashboard always has: surrounding
/// whitespace is ignored, an empty string is zero, `0x`/`0o`/`0b` prefixes
/// are honoured. Anything that does not yield a finite number is `None`.
pub fn coerce_number(s: &str) -> Option<f64> {
    let s = s.trim();
    if s.is_empty() {
        return Some(0.0);
    }

    let radix = match s.get(..2) {
        Some("0x") | Some("0X") => Some(16),
        Some("0o") | Some("0O") => Some(8),
        Some("0b") | Some("0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        return u64::from_str_radix(&s[2..], radix).ok().map(|n| n as f64);
    }

    // Rust accepts "inf" and "nan" spellings that are not numbers here.
    if s.chars().any(|c| c.is_ascii_alphabetic() && c != 'e' && c != 'E') {
        return None;
    }

    s.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Parses an ISO-8601 timestamp. Accepts full RFC 3339, a date-time without
/// offset (taken as UTC) and a bare `YYYY-MM-DD` date.
pub fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Milliseconds since the epoch, for ordering by date.
pub fn timestamp_millis(s: &str) -> Option<f64> {
    parse_timestamp(s).map(|dt| dt.timestamp_millis() as f64)
}

/// Formats a numeric-string as naira. Values that are not numbers are shown
/// exactly as received.
pub fn format_currency(amount: &str) -> String {
    let Some(value) = coerce_number(amount) else {
        return amount.to_string();
    };
    match NairaAmount::from_float(value) {
        Some(naira) => naira.to_string_with_symbol(),
        None => format_whole_naira(value),
    }
}

/// Amounts past the kobo range are far beyond 2^53, so the float is already
/// a whole number and has no kobo to show.
fn format_whole_naira(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    format!(
        "{}{}{}.00",
        sign,
        NAIRA_SYMBOL,
        group_thousands(&value.abs().round().to_string())
    )
}

/// Formats an ISO-8601 timestamp as `January 5, 2025, 3:04:05 PM UTC`.
/// Unparseable input is shown as received.
pub fn format_date(iso: &str) -> String {
    match parse_timestamp(iso) {
        Some(dt) => dt.format("%B %-d, %Y, %-I:%M:%S %p UTC").to_string(),
        None => iso.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("1000", "₦1,000.00")]
    #[case("0", "₦0.00")]
    #[case("", "₦0.00")]
    #[case(" 42 ", "₦42.00")]
    #[case("1234567.891", "₦1,234,567.89")]
    #[case("-2500.5", "-₦2,500.50")]
    #[case("999.999", "₦1,000.00")]
    #[case("0x10", "₦16.00")]
    #[case("1e40", "₦10,000,000,000,000,000,000,000,000,000,000,000,000,000.00")]
    #[case("-1e40", "-₦10,000,000,000,000,000,000,000,000,000,000,000,000,000.00")]
    fn formats_numbers_as_naira(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(format_currency(input), expected);
    }

    #[rstest]
    #[case("abc")]
    #[case("12abc")]
    #[case("Infinity")]
    #[case("NaN")]
    #[case("1,000")]
    fn passes_non_numbers_through(#[case] input: &str) {
        assert_eq!(format_currency(input), input);
    }

    #[test]
    fn coercion_keeps_exponents() {
        assert_eq!(coerce_number("1e3"), Some(1000.0));
        assert_eq!(coerce_number(".5"), Some(0.5));
        assert_eq!(coerce_number("inf"), None);
    }

    #[test]
    fn amounts_past_the_kobo_range_do_not_saturate() {
        assert_eq!(NairaAmount::from_float(1e40), None);
        assert_eq!(NairaAmount::from_float(f64::NAN), None);
        assert!(NairaAmount::from_float(1e30).is_some());
        assert_eq!(NairaAmount::parse("1e40"), None);
    }

    #[test]
    fn bare_display_has_no_symbol() {
        assert_eq!(NairaAmount::from_kobo(-1050).to_string(), "-10.50");
        assert_eq!(NairaAmount::from_kobo(123_456_789).to_string(), "1234567.89");
    }

    #[rstest]
    #[case("2025-01-05T15:04:05Z", "January 5, 2025, 3:04:05 PM UTC")]
    #[case("2024-12-31T23:59:59.000Z", "December 31, 2024, 11:59:59 PM UTC")]
    #[case("2025-03-01T01:00:00+01:00", "March 1, 2025, 12:00:00 AM UTC")]
    #[case("2025-06-01", "June 1, 2025, 12:00:00 AM UTC")]
    #[case("2025-06-01T08:30:00", "June 1, 2025, 8:30:00 AM UTC")]
    fn formats_dates_in_utc(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(format_date(input), expected);
    }

    #[test]
    fn unparseable_dates_pass_through() {
        assert_eq!(format_date("someday"), "someday");
        assert_eq!(timestamp_millis("someday"), None);
    }
}
