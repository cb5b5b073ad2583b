use leptos::prelude::*;

use crate::components::post_list::PostList;

#[component]
pub fn PostsPage() -> impl IntoView {
    view! {
        <div class="page">
            <PostList/>
        </div>
    }
}
