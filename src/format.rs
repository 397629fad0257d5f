//! Display helpers shared by the view models: dates, stars, labels.

use chrono::NaiveDate;

fn parse_date_prefix(raw: &str) -> Option<NaiveDate> {
    // Both DATE ("2026-01-05") and TIMESTAMPTZ ("2026-01-05 09:30:00+00") text
    // start with the calendar date.
    let prefix = raw.get(..10)?;
    NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok()
}

/// "2026-01-05" -> "Jan 5, 2026". Unparseable input is returned unchanged.
pub fn long_date(raw: &str) -> String {
    match parse_date_prefix(raw) {
        Some(d) => d.format("%b %-d, %Y").to_string(),
        None => raw.to_string(),
    }
}

/// "2026-01-05" -> "Jan 5", used for chart axes.
pub fn short_date(raw: &str) -> String {
    match parse_date_prefix(raw) {
        Some(d) => d.format("%b %-d").to_string(),
        None => raw.to_string(),
    }
}

/// Five-glyph star rating, e.g. 3 -> "★★★☆☆".
pub fn stars(rating: i32) -> String {
    let filled = rating.clamp(0, 5) as usize;
    let mut out = "★".repeat(filled);
    out.push_str(&"☆".repeat(5 - filled));
    out
}

/// "in_progress" -> "in progress".
pub fn humanize(raw: &str) -> String {
    raw.replace('_', " ")
}

/// Up to two upper-case initials: "Ada Lovelace King" -> "AL".
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|part| part.chars().next())
        .flat_map(char::to_uppercase)
        .take(2)
        .collect()
}

/// Average rating for a stat card: "0" when there is no data, otherwise one
/// decimal place ("4.0").
pub fn rating(value: f64) -> String {
    if value == 0.0 {
        "0".to_string()
    } else {
        format!("{value:.1}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_long_and_short_dates() {
        assert_eq!(long_date("2026-01-05"), "Jan 5, 2026");
        assert_eq!(long_date("2025-11-30 14:02:11.52+00"), "Nov 30, 2025");
        assert_eq!(short_date("2026-03-09"), "Mar 9");
        assert_eq!(long_date("not a date"), "not a date");
        assert_eq!(short_date(""), "");
    }

    #[test]
    fn test_stars() {
        assert_eq!(stars(3), "★★★☆☆");
        assert_eq!(stars(5), "★★★★★");
        assert_eq!(stars(0), "☆☆☆☆☆");
        assert_eq!(stars(9), "★★★★★");
    }

    #[test]
    fn test_initials() {
        assert_eq!(initials("ada lovelace"), "AL");
        assert_eq!(initials("Grace Brewster Hopper"), "GB");
        assert_eq!(initials("Linus"), "L");
        assert_eq!(initials(""), "");
    }

    #[test]
    fn test_rating_display() {
        assert_eq!(rating(0.0), "0");
        assert_eq!(rating(4.0), "4.0");
        assert_eq!(rating(3.7), "3.7");
    }

    #[test]
    fn test_humanize() {
        assert_eq!(humanize("in_progress"), "in progress");
        assert_eq!(humanize("pending"), "pending");
    }
}
