//! Post composer: content, image, platforms, schedule, hashtags, tone.
//!
//! SYSTEM CONTEXT
//! ==============
//! Validation runs client-side before anything is sent. The picked image file
//! lives in local (non-`Send`) storage; only its name and preview URL are
//! reactive.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::net::api::{ApiClient, ImageFile};
use crate::net::types::{AIBestTimeResponse, PlatformType, PostTone};
use crate::state::fetch::{Loadable, load};
use crate::state::scheduler::{
    BEST_TIME_FAILED, CONTENT_FIRST, ComposerUi, FormErrors, HASHTAGS_FAILED, POST_FAILED, POST_SCHEDULED, PostForm,
};
use crate::state::submit::{SubmitError, submit};
#[cfg(feature = "hydrate")]
use crate::util::browser::object_url;
use crate::util::browser::{alert, revoke_object_url};

#[component]
pub fn PostScheduler() -> impl IntoView {
    let api = StoredValue::new(expect_context::<ApiClient>());
    let form = RwSignal::new(PostForm::default());
    let ui = RwSignal::new(ComposerUi::default());
    let best_times = RwSignal::new(Loadable::<AIBestTimeResponse>::idle());
    let image_file = StoredValue::new_local(None::<ImageFile>);

    let on_image_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast as _;
            let Some(input) = ev
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
            else {
                return;
            };
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };
            let name = file.name();
            let preview = object_url(&file);
            ui.update(|u| {
                if let Some(old) = u.clear_image() {
                    revoke_object_url(&old);
                }
                u.image_name = Some(name);
                u.image_preview = preview;
            });
            image_file.set_value(Some(file));
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = ev;
        }
    };

    let on_generate = move |_| {
        let Some(req) = form.with_untracked(PostForm::suggestion_request) else {
            alert(CONTENT_FIRST);
            return;
        };
        ui.update(|u| u.generating = true);
        let api = api.get_value();
        leptos::task::spawn_local(async move {
            match api.suggest_hashtags(&req).await {
                Ok(resp) => form.update(|f| f.apply_suggestions(&resp)),
                Err(err) => {
                    leptos::logging::error!("Error generating hashtags: {err}");
                    alert(HASHTAGS_FAILED);
                }
            }
            ui.update(|u| u.generating = false);
        });
    };

    let on_suggest_time = move |_| {
        let req = form.with_untracked(PostForm::best_time_request);
        let api = api.get_value();
        leptos::task::spawn_local(async move {
            load(&best_times, || api.suggest_best_time(&req), BEST_TIME_FAILED).await;
        });
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let validated = form.with_untracked(PostForm::to_request);
        let file = image_file.get_value();
        let api = api.get_value();
        leptos::task::spawn_local(async move {
            let outcome = submit(validated, |req| {
                ui.update(|u| {
                    u.errors = FormErrors::default();
                    u.submitting = true;
                });
                async move { api.submit_post(&req, file.as_ref()).await }
            })
            .await;
            match outcome {
                Ok(body) => {
                    leptos::logging::log!("Post submission response: {body}");
                    alert(POST_SCHEDULED);
                    ui.update(|u| {
                        if let Some(url) = u.clear_image() {
                            revoke_object_url(&url);
                        }
                    });
                    image_file.set_value(None);
                }
                Err(SubmitError::Invalid(errors)) => ui.update(|u| u.errors = errors),
                Err(SubmitError::Api(err)) => {
                    leptos::logging::error!("Error submitting post: {err}");
                    alert(POST_FAILED);
                }
            }
            ui.update(|u| u.submitting = false);
        });
    };

    view! {
        <section class="scheduler panel">
            <header class="scheduler__header">
                <h2>"Schedule Social Media Post"</h2>
                <p class="scheduler__subtitle">"Create and schedule your post across multiple platforms"</p>
            </header>
            <form class="scheduler__form" on:submit=on_submit>
                <label class="field">
                    <span class="field__label">"Post Content"</span>
                    <textarea
                        class="field__input"
                        rows="4"
                        placeholder="What would you like to share?"
                        prop:value=move || form.with(|f| f.content_text.clone())
                        on:input=move |ev| form.update(|f| f.content_text = event_target_value(&ev))
                    ></textarea>
                    {move || ui.with(|u| u.errors.content_text).map(|msg| view! { <p class="field__error">{msg}</p> })}
                </label>

                <label class="field">
                    <span class="field__label">"Image (Optional)"</span>
                    <input class="field__input" type="file" accept="image/*" on:change=on_image_change/>
                    {move || {
                        ui.with(|u| u.image_name.clone())
                            .map(|name| view! { <p class="scheduler__file-name">"Selected: " {name}</p> })
                    }}
                    {move || {
                        ui.with(|u| u.image_preview.clone())
                            .map(|src| view! { <img class="scheduler__preview" src=src alt="Preview"/> })
                    }}
                </label>

                <div class="field">
                    <span class="field__label">"Platforms"</span>
                    <div class="scheduler__platforms">
                        {PlatformType::ALL
                            .into_iter()
                            .map(|platform| {
                                view! {
                                    <button
                                        type="button"
                                        class="platform-toggle"
                                        class:platform-toggle--selected=move || form.with(|f| f.is_selected(platform))
                                        on:click=move |_| form.update(|f| f.toggle_platform(platform))
                                    >
                                        {platform.as_str()}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                    {move || ui.with(|u| u.errors.platforms).map(|msg| view! { <p class="field__error">{msg}</p> })}
                </div>

                <label class="field">
                    <span class="field__label">"Schedule Time (Optional)"</span>
                    <input
                        class="field__input"
                        type="datetime-local"
                        prop:value=move || form.with(|f| f.schedule_time.clone())
                        on:input=move |ev| form.update(|f| f.schedule_time = event_target_value(&ev))
                    />
                    <button type="button" class="btn btn--link" on:click=on_suggest_time>
                        {move || if best_times.get().loading { "Suggesting..." } else { "Suggest Time" }}
                    </button>
                    {move || {
                        let state = best_times.get();
                        if let Some(message) = state.error {
                            return view! { <p class="field__error">{message}</p> }.into_any();
                        }
                        match state.data {
                            Some(resp) => view! {
                                <ul class="scheduler__best-times">
                                    {resp.suggestions.into_iter().map(|s| view! { <li>{s}</li> }).collect_view()}
                                </ul>
                            }
                                .into_any(),
                            None => ().into_any(),
                        }
                    }}
                </label>

                <div class="field">
                    <span class="field__label">"Hashtags"</span>
                    <div class="scheduler__hashtags">
                        <input
                            class="field__input"
                            type="text"
                            placeholder="Enter hashtags separated by commas"
                            prop:value=move || form.with(|f| f.hashtags.clone())
                            on:input=move |ev| form.update(|f| f.hashtags = event_target_value(&ev))
                        />
                        <button
                            type="button"
                            class="btn btn--accent"
                            disabled=move || ui.with(|u| u.generating) || !form.with(PostForm::has_content)
                            on:click=on_generate
                        >
                            {move || if ui.with(|u| u.generating) { "Generating..." } else { "AI Generate" }}
                        </button>
                    </div>
                </div>

                <label class="field">
                    <span class="field__label">"Target Audience (Optional)"</span>
                    <input
                        class="field__input"
                        type="text"
                        placeholder="e.g., Tech enthusiasts, Marketing professionals"
                        prop:value=move || form.with(|f| f.target_audience.clone())
                        on:input=move |ev| form.update(|f| f.target_audience = event_target_value(&ev))
                    />
                </label>

                <label class="field">
                    <span class="field__label">"Call to Action (Optional)"</span>
                    <input
                        class="field__input"
                        type="text"
                        placeholder="e.g., Visit our website, Sign up now"
                        prop:value=move || form.with(|f| f.call_to_action.clone())
                        on:input=move |ev| form.update(|f| f.call_to_action = event_target_value(&ev))
                    />
                </label>

                <label class="field">
                    <span class="field__label">"Content Tone"</span>
                    <select
                        class="field__input"
                        prop:value=move || form.with(|f| f.content_tone.as_str().to_owned())
                        on:change=move |ev| {
                            if let Some(tone) = PostTone::parse(&event_target_value(&ev)) {
                                form.update(|f| f.content_tone = tone);
                            }
                        }
                    >
                        {PostTone::ALL
                            .into_iter()
                            .map(|tone| view! { <option value=tone.as_str()>{tone.label()}</option> })
                            .collect_view()}
                    </select>
                </label>

                <button type="submit" class="btn btn--primary btn--block" disabled=move || ui.with(|u| u.submitting)>
                    {move || if ui.with(|u| u.submitting) { "Scheduling..." } else { "Schedule Post" }}
                </button>
            </form>
        </section>
    }
}
