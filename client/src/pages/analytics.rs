use leptos::prelude::*;

use crate::components::analytics_dashboard::AnalyticsDashboard;

#[component]
pub fn AnalyticsPage() -> impl IntoView {
    view! {
        <div class="page page--wide">
            <AnalyticsDashboard/>
        </div>
    }
}
