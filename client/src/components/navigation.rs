//! Top navigation bar shared by every page.

#[cfg(test)]
#[path = "navigation_test.rs"]
mod navigation_test;

use leptos::prelude::*;
use leptos_router::hooks::use_location;

/// Label/route pairs in display order.
pub const NAV_ITEMS: [(&str, &str); 5] = [
    ("Home", "/"),
    ("Schedule Post", "/schedule"),
    ("My Posts", "/posts"),
    ("Analytics", "/analytics"),
    ("Product Customizer", "/customizer"),
];

/// A link is active only on an exact path match.
pub fn is_active(pathname: &str, href: &str) -> bool {
    pathname == href
}

#[component]
pub fn Navigation() -> impl IntoView {
    let location = use_location();

    view! {
        <nav class="nav">
            <a href="/" class="nav__brand">"SocialScheduler"</a>
            <ul class="nav__links">
                {NAV_ITEMS
                    .into_iter()
                    .map(|(label, href)| {
                        let pathname = location.pathname;
                        view! {
                            <li>
                                <a
                                    href=href
                                    class="nav__link"
                                    class:nav__link--active=move || is_active(&pathname.get(), href)
                                >
                                    {label}
                                </a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </nav>
    }
}
