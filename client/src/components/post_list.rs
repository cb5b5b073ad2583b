//! Scheduled-post listing with per-item detail expansion.
//!
//! SYSTEM CONTEXT
//! ==============
//! Fetches one fixed page (`limit=20, offset=0`) on mount. Details are fetched
//! lazily when an item is expanded; only one item is expanded at a time, and
//! a detail response arriving after its item was collapsed is dropped.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::error_panel::ErrorPanel;
use crate::net::api::ApiClient;
use crate::net::types::{PostDetailResponse, PostListResponse};
use crate::state::fetch::{Loadable, load, load_if};
use crate::state::posts::{
    POST_DETAIL_FAILED, POSTS_FAILED, POSTS_LIMIT, POSTS_OFFSET, PostCard, detail_rows, post_cards, status_class,
    toggle_detail,
};

#[component]
pub fn PostList() -> impl IntoView {
    let api = StoredValue::new(expect_context::<ApiClient>());
    let posts = RwSignal::new(Loadable::<PostListResponse>::pending());
    let open_detail = RwSignal::new(None::<i64>);
    let detail = RwSignal::new(Loadable::<PostDetailResponse>::idle());

    let reload = Callback::new(move |()| {
        let api = api.get_value();
        leptos::task::spawn_local(async move {
            load(&posts, || api.list_posts(POSTS_LIMIT, POSTS_OFFSET), POSTS_FAILED).await;
        });
    });
    Effect::new(move || reload.run(()));

    let on_toggle = Callback::new(move |post_id: i64| {
        let next = toggle_detail(open_detail.get_untracked(), post_id);
        open_detail.set(next);
        if let Some(post_id) = next {
            let api = api.get_value();
            leptos::task::spawn_local(async move {
                load_if(&detail, || api.get_post(post_id), POST_DETAIL_FAILED, move || {
                    open_detail.get_untracked() == Some(post_id)
                })
                .await;
            });
        }
    });

    view! {
        <section class="post-list">
            <header class="post-list__header">
                <h2>"Scheduled Posts"</h2>
                <p class="post-list__subtitle">"Manage your social media posts"</p>
            </header>
            {move || {
                let state = posts.get();
                if state.loading {
                    return view! {
                        <div class="post-list__loading" aria-busy="true">
                            <div class="skeleton skeleton--card"></div>
                            <div class="skeleton skeleton--card"></div>
                            <div class="skeleton skeleton--card"></div>
                        </div>
                    }
                        .into_any();
                }
                if let Some(message) = state.error {
                    return view! { <ErrorPanel message=message on_retry=reload/> }.into_any();
                }
                let cards = state.data.as_ref().map(post_cards).unwrap_or_default();
                if cards.is_empty() {
                    return view! {
                        <div class="empty-state">
                            <h3>"No posts scheduled"</h3>
                            <p>"Create your first post to get started!"</p>
                        </div>
                    }
                        .into_any();
                }
                view! {
                    <ul class="post-list__items">
                        {cards
                            .into_iter()
                            .map(|card| view! { <PostCardItem card=card open_detail=open_detail detail=detail on_toggle=on_toggle/> })
                            .collect_view()}
                    </ul>
                }
                    .into_any()
            }}
        </section>
    }
}

#[component]
fn PostCardItem(
    card: PostCard,
    open_detail: RwSignal<Option<i64>>,
    detail: RwSignal<Loadable<PostDetailResponse>>,
    on_toggle: Callback<i64>,
) -> impl IntoView {
    let post_id = card.id;
    let is_open = move || open_detail.get() == Some(post_id);

    view! {
        <li class="post-card">
            <div class="post-card__header">
                <div class="post-card__badges">
                    {card
                        .platforms
                        .iter()
                        .map(|platform| {
                            view! {
                                <span class=format!("platform-badge platform-badge--{platform}")>{*platform}</span>
                            }
                        })
                        .collect_view()}
                </div>
                <span class=status_class(card.status)>{card.status.as_str()}</span>
            </div>
            <p class="post-card__content">{card.content_text.clone()}</p>
            {(!card.hashtags.is_empty())
                .then(|| view! { <p class="post-card__hashtags">{card.hashtags.clone()}</p> })}
            <div class="post-card__meta">
                {card
                    .schedule_label
                    .clone()
                    .map(|label| view! { <span class="post-card__schedule">"Scheduled: " {label}</span> })}
                <span class="post-card__created">"Created: " {card.created_label.clone()}</span>
                {card.has_image.then(|| view! { <span class="post-card__image">"Has image"</span> })}
            </div>
            <button class="btn btn--link post-card__toggle" on:click=move |_| on_toggle.run(post_id)>
                {move || if is_open() { "Hide details" } else { "Show details" }}
            </button>
            <Show when=is_open>
                {move || {
                    let state = detail.get();
                    if state.loading {
                        return view! { <p class="post-card__detail-status">"Loading details..."</p> }.into_any();
                    }
                    if let Some(message) = state.error {
                        return view! { <p class="post-card__detail-status post-card__detail-status--error">{message}</p> }
                            .into_any();
                    }
                    match state.data.filter(|d| d.id == post_id) {
                        Some(data) => view! {
                            <dl class="post-card__details">
                                {detail_rows(&data)
                                    .into_iter()
                                    .map(|(label, value)| view! { <dt>{label}</dt><dd>{value}</dd> })
                                    .collect_view()}
                            </dl>
                        }
                            .into_any(),
                        None => ().into_any(),
                    }
                }}
            </Show>
        </li>
    }
}
