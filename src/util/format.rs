//! Display formatting helpers.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Dollar amount with thousands separators; cents only when non-zero.
#[allow(clippy::cast_possible_truncation)]
pub fn format_price(price: f64) -> String {
    if !price.is_finite() {
        return "$—".to_owned();
    }
    let cents = (price.abs() * 100.0).round() as u64;
    let whole = group_thousands(cents / 100);
    let frac = cents % 100;
    let sign = if price < 0.0 && cents > 0 { "-" } else { "" };
    if frac == 0 { format!("{sign}${whole}") } else { format!("{sign}${whole}.{frac:02}") }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

pub fn availability_label(available: bool) -> &'static str {
    if available { "Available" } else { "Unavailable" }
}

/// Footer line; the year is omitted when the clock is unavailable.
pub fn copyright_line(year: Option<i32>) -> String {
    match year {
        Some(year) => format!("Car Management System © {year}"),
        None => "Car Management System".to_owned(),
    }
}
