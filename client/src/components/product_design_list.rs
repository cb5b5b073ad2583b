//! Gallery of saved product designs with scaled previews.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::error_panel::ErrorPanel;
use crate::net::api::ApiClient;
use crate::net::types::{ProductDesignItem, ProductDesignListResponse};
use crate::state::designs::{DESIGN_DETAIL_FAILED, DESIGNS_FAILED, DESIGNS_USER_ID, details_message, preview_style};
use crate::state::fetch::{Loadable, load};
use crate::util::browser::alert;
use crate::util::format::format_date;

#[component]
pub fn ProductDesignList() -> impl IntoView {
    let api = StoredValue::new(expect_context::<ApiClient>());
    let designs = RwSignal::new(Loadable::<ProductDesignListResponse>::pending());

    let reload = Callback::new(move |()| {
        let api = api.get_value();
        leptos::task::spawn_local(async move {
            load(&designs, || api.list_designs(DESIGNS_USER_ID), DESIGNS_FAILED).await;
        });
    });
    Effect::new(move || reload.run(()));

    let on_details = Callback::new(move |design_id: i64| {
        let api = api.get_value();
        leptos::task::spawn_local(async move {
            match api.get_design(design_id).await {
                Ok(design) => alert(&details_message(&design)),
                Err(err) => {
                    leptos::logging::error!("Error fetching design {design_id}: {err}");
                    alert(DESIGN_DETAIL_FAILED);
                }
            }
        });
    });

    view! {
        <section class="design-list">
            <header class="design-list__header">
                <h2>"My Designs"</h2>
                <p class="design-list__subtitle">"View and manage your product customizations"</p>
            </header>
            {move || {
                let state = designs.get();
                if state.loading {
                    return view! {
                        <div class="design-list__loading" aria-busy="true">
                            <div class="skeleton skeleton--row"></div>
                            <div class="skeleton skeleton--row"></div>
                            <div class="skeleton skeleton--row"></div>
                        </div>
                    }
                        .into_any();
                }
                if let Some(message) = state.error {
                    return view! { <ErrorPanel message=message on_retry=reload/> }.into_any();
                }
                let items = state.data.map(|d| d.items).unwrap_or_default();
                if items.is_empty() {
                    return view! {
                        <div class="empty-state">
                            <h3>"No designs created"</h3>
                            <p>"Start customizing products to see your designs here!"</p>
                        </div>
                    }
                        .into_any();
                }
                view! {
                    <div class="design-list__grid">
                        {items
                            .into_iter()
                            .map(|design| view! { <DesignCard design=design on_details=on_details/> })
                            .collect_view()}
                    </div>
                }
                    .into_any()
            }}
        </section>
    }
}

#[component]
fn DesignCard(design: ProductDesignItem, on_details: Callback<i64>) -> impl IntoView {
    let design_id = design.id;
    view! {
        <article class="design-card">
            <div class="design-card__preview">
                <div class="design-card__garment">
                    <span class="design-card__text" style=preview_style(&design)>
                        {design.custom_text.clone()}
                    </span>
                </div>
            </div>
            <div class="design-card__info">
                <h3 class="design-card__title">{format!("\"{}\"", design.custom_text)}</h3>
                <p class="design-card__row">
                    {format!("Color: {}", design.text_color)}
                    <span class="design-card__swatch" style=format!("background-color: {}", design.text_color)></span>
                </p>
                <p class="design-card__row">{format!("Size: {}px", design.text_size)}</p>
                <p class="design-card__row">{format_date(&design.created_at)}</p>
                <button class="btn btn--primary design-card__details" on:click=move |_| on_details.run(design_id)>
                    "View Details"
                </button>
            </div>
        </article>
    }
}
