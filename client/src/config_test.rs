use super::*;

#[test]
fn new_trims_trailing_slashes_and_whitespace() {
    let config = ApiConfig::new(" https://api.example.com// ");
    assert_eq!(config.base_url(), "https://api.example.com");
    assert_eq!(config.api_root(), "https://api.example.com/api/v1");
}

#[test]
fn default_points_at_local_backend() {
    assert_eq!(ApiConfig::default().api_root(), "http://localhost:8000/api/v1");
}

#[test]
fn choose_base_url_prefers_runtime_value() {
    let chosen = choose_base_url(Some("https://runtime.test".to_owned()), Some("https://compiled.test"));
    assert_eq!(chosen, "https://runtime.test");
}

#[test]
fn choose_base_url_skips_blank_values() {
    assert_eq!(
        choose_base_url(Some("  ".to_owned()), Some("https://compiled.test")),
        "https://compiled.test"
    );
    assert_eq!(choose_base_url(None, Some("")), DEFAULT_API_BASE_URL);
    assert_eq!(choose_base_url(None, None), DEFAULT_API_BASE_URL);
}
