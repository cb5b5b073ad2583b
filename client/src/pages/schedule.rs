use leptos::prelude::*;

use crate::components::post_scheduler::PostScheduler;

#[component]
pub fn SchedulePage() -> impl IntoView {
    view! {
        <div class="page page--narrow">
            <PostScheduler/>
        </div>
    }
}
