//! Display formatting for money, volumes and ratios.

/// Insert thousands separators into a non-negative value rendered with
/// `decimals` places: 1234.5 → "1,234.50".
fn grouped(abs: f64, decimals: usize) -> String {
    let fixed = format!("{:.*}", decimals, abs);
    let (int_part, dec_part) = match fixed.split_once('.') {
        Some((i, d)) => (i, Some(d)),
        None => (fixed.as_str(), None),
    };

    let mut with_commas = String::new();
    for (i, c) in int_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            with_commas.push(',');
        }
        with_commas.push(c);
    }
    let with_commas: String = with_commas.chars().rev().collect();

    match dec_part {
        Some(d) => format!("{with_commas}.{d}"),
        None => with_commas,
    }
}

/// Signed value with thousands separators and two decimals: -1234.5 → "-1,234.50".
///
/// Small negatives keep their sign after rounding: -0.001 → "-0.00".
fn signed_grouped(val: f64) -> String {
    let body = grouped(val.abs(), 2);
    if val < 0.0 { format!("-{body}") } else { body }
}

/// Statement money: negatives in parentheses, missing values as zero.
///
/// `-12.5` → `"($12.50)"`, `None` → `"$0.00"`.
pub fn money(val: Option<f64>) -> String {
    let Some(n) = val else {
        return "$0.00".to_string();
    };
    let abs = grouped(n.abs(), 2);
    if n < 0.0 { format!("(${abs})") } else { format!("${abs}") }
}

/// Table dollar cell: `"$1,234.50"`, blank when missing.
pub fn dollar(val: Option<f64>) -> String {
    val.map(|n| format!("${}", signed_grouped(n))).unwrap_or_default()
}

/// Table number cell with separators: `"1,234.50"`, blank when missing.
pub fn number(val: Option<f64>) -> String {
    val.map(signed_grouped).unwrap_or_default()
}

/// Fixed decimals without separators, blank when missing.
pub fn fixed(val: Option<f64>, decimals: usize) -> String {
    val.map(|n| format!("{:.*}", decimals, n)).unwrap_or_default()
}
