use super::*;

#[test]
fn from_values_defaults_when_unset() {
    let cfg = ClientConfig::from_values(None, None, None);
    assert_eq!(cfg, ClientConfig::default());
    assert_eq!(cfg.api_base_url, "http://localhost:5000");
    assert_eq!(cfg.storage_key, "token");
    assert_eq!(cfg.notice_timeout_ms, 3000);
}

#[test]
fn from_values_trims_trailing_slashes() {
    let cfg = ClientConfig::from_values(Some("https://cars.example.test/"), None, None);
    assert_eq!(cfg.api_base_url, "https://cars.example.test");
}

#[test]
fn from_values_ignores_blank_overrides() {
    let cfg = ClientConfig::from_values(Some("  "), Some(" "), Some("soon"));
    assert_eq!(cfg, ClientConfig::default());
}

#[test]
fn from_values_applies_overrides() {
    let cfg = ClientConfig::from_values(Some("http://api:8080"), Some("car_token"), Some("1500"));
    assert_eq!(cfg.api_base_url, "http://api:8080");
    assert_eq!(cfg.storage_key, "car_token");
    assert_eq!(cfg.notice_timeout_ms, 1500);
}

#[test]
fn endpoint_joins_base_and_path() {
    let cfg = ClientConfig::default();
    assert_eq!(cfg.endpoint("/api/cars/3"), "http://localhost:5000/api/cars/3");
}
