use super::*;

#[test]
fn nav_items_cover_every_route() {
    let hrefs: Vec<&str> = NAV_ITEMS.iter().map(|(_, href)| *href).collect();
    assert_eq!(hrefs, vec!["/", "/schedule", "/posts", "/analytics", "/customizer"]);
}

#[test]
fn is_active_requires_exact_match() {
    assert!(is_active("/posts", "/posts"));
    assert!(!is_active("/posts/3", "/posts"));
    assert!(!is_active("/schedule", "/"));
    assert!(is_active("/", "/"));
}
