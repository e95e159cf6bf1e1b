// File: crates/growth-core/src/format.rs
// Summary: Display formatting for values (billions USD) and year-over-year growth.

use crate::tooltip::Growth;

/// `$12B` at or above ten billion, `$2.5B` below.
pub fn format_value(value: f64) -> String {
    if value >= 10.0 {
        format!("${}B", value.round() as i64)
    } else {
        format!("${:.1}B", value)
    }
}

/// `+100.0%`, `-12.5%`, or `n/a`.
pub fn format_growth(growth: Growth) -> String {
    match growth {
        Growth::Percent(p) => format!("{:+.1}%", p),
        Growth::NotApplicable => "n/a".to_string(),
    }
}

pub fn format_year(year: usize) -> String { format!("Year {year}") }
