//! Display formatting for numbers, money and dates.

use chrono::NaiveDate;

/// Integer part grouped by thousands with a non-breaking space
pub fn format_thousands(n: i64) -> String {
    let s = n.abs().to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push('\u{00a0}');
        }
        result.push(ch);
    }
    if n < 0 {
        result.push('-');
    }
    result.chars().rev().collect()
}

/// Quantity without a trailing `.0` for whole numbers
pub fn format_quantity(value: f64) -> String {
    if value.fract() == 0.0 {
        format_thousands(value as i64)
    } else {
        format!("{}", (value * 100.0).round() / 100.0).replace('.', ",")
    }
}

/// Vietnamese dong, e.g. `1 500 ₫`
pub fn format_vnd(value: f64) -> String {
    format!("{} ₫", format_thousands(value.round() as i64))
}

/// `dd/mm/yyyy`
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Value of an `<input type="date">`, empty when unset
pub fn input_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string()).unwrap_or_default()
}

pub fn parse_input_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(15000), "15\u{00a0}000");
        assert_eq!(format_thousands(-1234567), "-1\u{00a0}234\u{00a0}567");
    }

    #[test]
    fn test_money_quantity_date() {
        assert_eq!(format_vnd(95000.4), "95\u{00a0}000 ₫");
        assert_eq!(format_quantity(45.0), "45");
        assert_eq!(format_quantity(2.5), "2,5");
        let d = NaiveDate::from_ymd_opt(2025, 1, 5).unwrap();
        assert_eq!(format_date(d), "05/01/2025");
    }

    #[test]
    fn test_input_date() {
        let d = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
        assert_eq!(input_date(Some(d)), "2026-03-01");
        assert_eq!(input_date(None), "");
        assert_eq!(parse_input_date("2026-03-01"), Some(d));
        assert_eq!(parse_input_date(""), None);
    }
}
