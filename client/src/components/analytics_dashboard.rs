//! Post performance dashboard: counts, charts, and on-demand AI insight.
//!
//! SYSTEM CONTEXT
//! ==============
//! The summary is fetched on mount and again whenever the platform filter
//! changes. The insight is only requested when the user asks for it.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::charts::{BarChart, PieChart};
use crate::components::error_panel::ErrorPanel;
use crate::net::api::ApiClient;
use crate::net::types::{AiInsightResponse, PlatformType, PostSummaryResponse};
use crate::state::analytics::{
    ANALYTICS_FAILED, INSIGHT_FAILED, INSIGHT_QUERY, INSIGHT_USER_ID, PERFORMANCE_TIPS, stat_cards, status_series,
    summary_filter,
};
use crate::state::fetch::{Loadable, load};

#[component]
pub fn AnalyticsDashboard() -> impl IntoView {
    let api = StoredValue::new(expect_context::<ApiClient>());
    let summary = RwSignal::new(Loadable::<PostSummaryResponse>::pending());
    let insight = RwSignal::new(Loadable::<AiInsightResponse>::idle());
    let platform = RwSignal::new(String::new());

    let reload = Callback::new(move |()| {
        let api = api.get_value();
        let filter = summary_filter(&platform.get_untracked());
        leptos::task::spawn_local(async move {
            load(&summary, || api.posts_summary(&filter), ANALYTICS_FAILED).await;
        });
    });
    Effect::new(move || reload.run(()));

    let on_generate_insight = move |_| {
        let api = api.get_value();
        leptos::task::spawn_local(async move {
            load(&insight, || api.ai_insight(INSIGHT_USER_ID, Some(INSIGHT_QUERY)), INSIGHT_FAILED).await;
        });
    };

    view! {
        <section class="analytics">
            <header class="analytics__header">
                <div>
                    <h2>"Analytics Dashboard"</h2>
                    <p class="analytics__subtitle">"Track your social media posting performance and insights"</p>
                </div>
                <label class="analytics__filter">
                    "Platform"
                    <select
                        prop:value=move || platform.get()
                        on:change=move |ev| {
                            platform.set(event_target_value(&ev));
                            reload.run(());
                        }
                    >
                        <option value="">"All platforms"</option>
                        {PlatformType::ALL
                            .into_iter()
                            .map(|p| view! { <option value=p.as_str()>{p.as_str()}</option> })
                            .collect_view()}
                    </select>
                </label>
            </header>

            {move || {
                let state = summary.get();
                if state.loading {
                    return view! {
                        <div class="analytics__loading" aria-busy="true">
                            <div class="skeleton skeleton--stat"></div>
                            <div class="skeleton skeleton--stat"></div>
                            <div class="skeleton skeleton--stat"></div>
                            <div class="skeleton skeleton--chart"></div>
                        </div>
                    }
                        .into_any();
                }
                if let Some(message) = state.error {
                    return view! { <ErrorPanel message=message on_retry=reload/> }.into_any();
                }
                let data = state.data.unwrap_or_default();
                view! {
                    <div class="analytics__stats">
                        {stat_cards(&data)
                            .into_iter()
                            .map(|card| {
                                view! {
                                    <div class=format!("stat-card stat-card--{}", card.accent)>
                                        <p class="stat-card__label">{card.label}</p>
                                        <p class="stat-card__value">{card.value}</p>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                    <div class="analytics__charts">
                        <div class="panel">
                            <h3>"Posts Overview"</h3>
                            <BarChart series=status_series(&data).to_vec()/>
                        </div>
                        <div class="panel">
                            <h3>"Post Status Distribution"</h3>
                            <PieChart series=status_series(&data).to_vec()/>
                        </div>
                    </div>
                }
                    .into_any()
            }}

            <div class="panel insight">
                <div class="insight__header">
                    <h3>"AI Insights"</h3>
                    <button
                        class="btn btn--primary"
                        disabled=move || insight.get().loading
                        on:click=on_generate_insight
                    >
                        {move || if insight.get().loading { "Generating..." } else { "Generate Insight" }}
                    </button>
                </div>
                {move || {
                    let state = insight.get();
                    match (state.data, state.error) {
                        (_, Some(message)) => view! { <p class="insight__error">{message}</p> }.into_any(),
                        (Some(data), None) => view! { <p class="insight__text">{data.insight_text}</p> }.into_any(),
                        (None, None) => view! {
                            <p class="insight__placeholder">
                                "Click \"Generate Insight\" to get AI-powered analysis of your posting performance."
                            </p>
                        }
                            .into_any(),
                    }
                }}
            </div>

            <div class="panel tips">
                <h3>"Performance Tips"</h3>
                <ul class="tips__list">
                    {PERFORMANCE_TIPS.into_iter().map(|tip| view! { <li>{tip}</li> }).collect_view()}
                </ul>
            </div>
        </section>
    }
}
