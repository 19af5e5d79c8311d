//! Chronological ordering for `"Mon YY"` production-month labels.
//!
//! The backend reports production months as display labels (`"Jan 24"`),
//! which do not sort correctly as plain strings. Labels are mapped to a
//! `"YYYY-MM"` key first and compared lexicographically.

use std::cmp::Ordering;

/// Month abbreviation → two-digit month number.
const MONTHS: [(&str, &str); 12] = [
    ("Jan", "01"),
    ("Feb", "02"),
    ("Mar", "03"),
    ("Apr", "04"),
    ("May", "05"),
    ("Jun", "06"),
    ("Jul", "07"),
    ("Aug", "08"),
    ("Sep", "09"),
    ("Oct", "10"),
    ("Nov", "11"),
    ("Dec", "12"),
];

/// Sentinel for unrecognised month tokens; sorts before every real month.
const UNKNOWN_MONTH: &str = "00";

fn month_number(token: &str) -> &'static str {
    MONTHS
        .iter()
        .find(|(name, _)| *name == token)
        .map(|(_, num)| *num)
        .unwrap_or(UNKNOWN_MONTH)
}

/// Convert a `"Mon YY"` label into a sortable `"YYYY-MM"` key.
///
/// Anything that is not exactly two single-space separated tokens is returned
/// unchanged, so malformed labels still sort, just not chronologically.
/// Two-digit years are assumed to be 20xx; other year lengths pass through.
pub fn month_sort_key(label: &str) -> String {
    if label.is_empty() {
        return String::new();
    }

    let parts: Vec<&str> = label.split(' ').collect();
    let [month, year] = parts.as_slice() else {
        return label.to_string();
    };

    let year = if year.len() == 2 {
        format!("20{}", year)
    } else {
        year.to_string()
    };

    format!("{}-{}", year, month_number(month))
}

/// Comparator for month labels, for use with `sort_by`.
pub fn sort_by_month(a: &str, b: &str) -> Ordering {
    month_sort_key(a).cmp(&month_sort_key(b))
}

/// Sort a list of month labels chronologically (stable).
pub fn sorted_months<S: AsRef<str>>(labels: &[S]) -> Vec<String> {
    let mut sorted: Vec<String> = labels.iter().map(|l| l.as_ref().to_string()).collect();
    sorted.sort_by(|a, b| sort_by_month(a, b));
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_digit_years() {
        assert_eq!(month_sort_key("Jan 24"), "2024-01");
        assert_eq!(month_sort_key("Dec 99"), "2099-12");
        assert_eq!(month_sort_key("Sep 05"), "2005-09");
    }

    #[test]
    fn empty_label() {
        assert_eq!(month_sort_key(""), "");
    }

    #[test]
    fn four_digit_year_passes_through() {
        assert_eq!(month_sort_key("Mar 2023"), "2023-03");
        assert_eq!(month_sort_key("Mar 123"), "123-03");
    }

    #[test]
    fn malformed_labels_fail_open() {
        assert_eq!(month_sort_key("garbage"), "garbage");
        assert_eq!(month_sort_key("Jan 24 extra"), "Jan 24 extra");
        // Double space yields three tokens
        assert_eq!(month_sort_key("Jan  24"), "Jan  24");
    }

    #[test]
    fn unknown_month_sorts_first() {
        assert_eq!(month_sort_key("Foo 24"), "2024-00");
        assert_eq!(sort_by_month("Foo 24", "Jan 24"), Ordering::Less);
    }

    #[test]
    fn orders_like_calendar_pairs() {
        let labels = ["Jan 24", "Dec 23", "Feb 24", "Nov 23", "Jan 23", "Dec 24"];
        let calendar = |l: &str| {
            let (m, y) = l.split_once(' ').unwrap();
            let month = MONTHS.iter().position(|(name, _)| *name == m).unwrap();
            (y.parse::<u32>().unwrap(), month)
        };

        for a in labels {
            for b in labels {
                assert_eq!(
                    sort_by_month(a, b),
                    calendar(a).cmp(&calendar(b)),
                    "{} vs {}",
                    a,
                    b
                );
            }
        }
    }

    #[test]
    fn sorted_months_is_chronological() {
        let sorted = sorted_months(&["Mar 24", "Jan 25", "Dec 23", "Mar 24"]);
        assert_eq!(sorted, vec!["Dec 23", "Mar 24", "Mar 24", "Jan 25"]);
    }
}
