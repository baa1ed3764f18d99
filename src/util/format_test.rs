use super::*;

#[test]
fn format_price_groups_thousands() {
    assert_eq!(format_price(25_000.0), "$25,000");
    assert_eq!(format_price(1_234_567.0), "$1,234,567");
    assert_eq!(format_price(999.0), "$999");
    assert_eq!(format_price(0.0), "$0");
}

#[test]
fn format_price_keeps_cents_when_present() {
    assert_eq!(format_price(24_999.99), "$24,999.99");
    assert_eq!(format_price(10.5), "$10.50");
}

#[test]
fn format_price_handles_negative_and_non_finite() {
    assert_eq!(format_price(-1500.0), "-$1,500");
    assert_eq!(format_price(f64::NAN), "$—");
}

#[test]
fn availability_label_matches_badge_text() {
    assert_eq!(availability_label(true), "Available");
    assert_eq!(availability_label(false), "Unavailable");
}

#[test]
fn copyright_line_with_and_without_year() {
    assert_eq!(copyright_line(Some(2026)), "Car Management System © 2026");
    assert_eq!(copyright_line(None), "Car Management System");
}
