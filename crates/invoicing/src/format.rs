//! Number formatting used on the rendered page.
//!
//! Deliberately locale-free: a `$` prefix, two fixed decimals, no grouping.

/// `$` followed by the value with two decimals (`$-3.50` for negatives).
pub fn money(value: f64) -> String {
    format!("${value:.2}")
}

/// Value with two decimals followed by `" %"`.
pub fn percent(value: f64) -> String {
    format!("{value:.2} %")
}

/// Plain integer, no thousands separators.
pub fn quantity(value: i64) -> String {
    value.to_string()
}

/// Calendar date as `YYYY-MM-DD`.
pub fn iso_date(date: chrono::NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
