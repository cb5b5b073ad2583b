//! Landing page with a short pitch and links to each tool.

use leptos::prelude::*;

/// Feature tiles: title, blurb, route.
const FEATURES: [(&str, &str, &str); 4] = [
    ("Schedule Posts", "Plan content across Twitter, LinkedIn, Facebook, and Instagram.", "/schedule"),
    ("Track Posts", "Review scheduled and published posts at a glance.", "/posts"),
    ("Analytics", "See how your posts perform and get AI-powered insights.", "/analytics"),
    ("Customize Products", "Place custom text on products and save your designs.", "/customizer"),
];

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <section class="hero">
                <h1 class="hero__title">"SocialScheduler"</h1>
                <p class="hero__subtitle">
                    "Schedule social media posts with AI-generated hashtags, track performance, and design custom products."
                </p>
                <a href="/schedule" class="btn btn--primary">"Get Started"</a>
            </section>
            <section class="features">
                {FEATURES
                    .into_iter()
                    .map(|(title, blurb, href)| {
                        view! {
                            <a class="feature-card" href=href>
                                <h3 class="feature-card__title">{title}</h3>
                                <p class="feature-card__blurb">{blurb}</p>
                            </a>
                        }
                    })
                    .collect_view()}
            </section>
        </div>
    }
}
