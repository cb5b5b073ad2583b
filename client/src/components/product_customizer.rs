//! Product customizer: text controls beside the draggable canvas preview.
//!
//! ARCHITECTURE
//! ============
//! `DesignForm` is the source of truth for text, size, and color; an effect
//! pushes it into the imperative `canvas::engine::Engine`. The engine owns
//! drag handling and reports position changes back through `Action`s, which
//! are written into the form so Save always sends the last rendered position.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

#[cfg(feature = "hydrate")]
use std::cell::RefCell;
#[cfg(feature = "hydrate")]
use std::rc::Rc;

#[cfg(feature = "hydrate")]
use canvas::camera::Point;
#[cfg(feature = "hydrate")]
use canvas::engine::{Action, Engine};
#[cfg(feature = "hydrate")]
use canvas::input::Button;
use canvas::consts::{CANVAS_HEIGHT, CANVAS_WIDTH};

use crate::net::api::ApiClient;
use crate::net::types::ImageResponse;
use crate::state::customizer::{
    CustomizerUi, DESIGN_FAILED, DESIGN_SAVED, DesignForm, PRODUCT_IMAGE_FAILED, TEXT_SIZE_MAX, TEXT_SIZE_MIN,
};
use crate::state::fetch::{Loadable, load};
use crate::state::submit::{SubmitError, submit};
use crate::util::browser::alert;

#[cfg(feature = "hydrate")]
fn render_engine(engine: &mut Engine) {
    if let Err(err) = engine.render() {
        leptos::logging::warn!("canvas render failed: {err:?}");
    }
}

#[cfg(feature = "hydrate")]
fn apply_actions(actions: Vec<Action>, engine: &mut Engine, form: RwSignal<DesignForm>, cursor: RwSignal<String>) {
    let mut needs_render = false;
    for action in actions {
        match action {
            Action::PositionChanged { x, y } => form.update(|f| f.set_position(Point::new(x, y))),
            Action::SetCursor(next) => cursor.set(next),
            Action::RenderNeeded => needs_render = true,
        }
    }
    if needs_render {
        render_engine(engine);
    }
}

#[component]
pub fn ProductCustomizer() -> impl IntoView {
    let api = StoredValue::new(expect_context::<ApiClient>());
    let form = RwSignal::new(DesignForm::default());
    let ui = RwSignal::new(CustomizerUi::default());
    let product_image = RwSignal::new(Loadable::<ImageResponse>::pending());
    let cursor = RwSignal::new("default".to_owned());
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();

    Effect::new(move || {
        let api = api.get_value();
        let product_id = form.with_untracked(|f| f.product_id);
        leptos::task::spawn_local(async move {
            load(&product_image, || api.get_product_image(product_id), PRODUCT_IMAGE_FAILED).await;
        });
    });

    #[cfg(feature = "hydrate")]
    let engine = Rc::new(RefCell::new(None::<Engine>));

    #[cfg(feature = "hydrate")]
    {
        let engine = Rc::clone(&engine);
        Effect::new(move || {
            let Some(canvas) = canvas_ref.get() else {
                return;
            };
            if engine.borrow().is_some() {
                return;
            }
            match Engine::new(canvas, form.get_untracked().overlay) {
                Ok(mut instance) => {
                    render_engine(&mut instance);
                    *engine.borrow_mut() = Some(instance);
                }
                Err(err) => leptos::logging::error!("failed to start canvas engine: {err:?}"),
            }
        });
    }

    #[cfg(feature = "hydrate")]
    {
        let engine = Rc::clone(&engine);
        Effect::new(move || {
            let overlay = form.with(|f| f.overlay.clone());
            let Ok(mut slot) = engine.try_borrow_mut() else {
                return;
            };
            if let Some(engine) = slot.as_mut() {
                let actions = vec![
                    engine.set_text(&overlay.text),
                    engine.set_text_size(overlay.size),
                    engine.set_text_color(&overlay.color),
                ];
                apply_actions(actions, engine, form, cursor);
            }
        });
    }

    let on_pointer_down = {
        #[cfg(feature = "hydrate")]
        {
            let engine = Rc::clone(&engine);
            move |ev: leptos::ev::PointerEvent| {
                let point = Point::new(f64::from(ev.client_x()), f64::from(ev.client_y()));
                if let Some(engine) = engine.borrow_mut().as_mut() {
                    let actions = engine.on_pointer_down(point, Button::from_dom(ev.button()));
                    if !actions.is_empty() {
                        ev.prevent_default();
                    }
                    apply_actions(actions, engine, form, cursor);
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_pointer_move = {
        #[cfg(feature = "hydrate")]
        {
            let engine = Rc::clone(&engine);
            move |ev: leptos::ev::PointerEvent| {
                let point = Point::new(f64::from(ev.client_x()), f64::from(ev.client_y()));
                if let Some(engine) = engine.borrow_mut().as_mut() {
                    let actions = engine.on_pointer_move(point);
                    apply_actions(actions, engine, form, cursor);
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_pointer_up = {
        #[cfg(feature = "hydrate")]
        {
            let engine = Rc::clone(&engine);
            move |_ev: leptos::ev::PointerEvent| {
                if let Some(engine) = engine.borrow_mut().as_mut() {
                    let actions = engine.on_pointer_up();
                    apply_actions(actions, engine, form, cursor);
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_pointer_leave = {
        #[cfg(feature = "hydrate")]
        {
            let engine = Rc::clone(&engine);
            move |_ev: leptos::ev::PointerEvent| {
                if let Some(engine) = engine.borrow_mut().as_mut() {
                    let actions = engine.on_pointer_leave();
                    apply_actions(actions, engine, form, cursor);
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let validated = form.with_untracked(DesignForm::to_request);
        let api = api.get_value();
        leptos::task::spawn_local(async move {
            let outcome = submit(validated, |req| {
                ui.update(|u| {
                    u.error = None;
                    u.saving = true;
                });
                async move { api.create_design(&req).await }
            })
            .await;
            match outcome {
                Ok(body) => {
                    leptos::logging::log!("Design saved: {body}");
                    alert(DESIGN_SAVED);
                }
                Err(SubmitError::Invalid(message)) => ui.update(|u| u.error = Some(message)),
                Err(SubmitError::Api(err)) => {
                    leptos::logging::error!("Error saving design: {err}");
                    alert(DESIGN_FAILED);
                }
            }
            ui.update(|u| u.saving = false);
        });
    };

    view! {
        <section class="customizer">
            <header class="customizer__header">
                <h2>"Product Customizer"</h2>
                <p class="customizer__subtitle">"Add custom text to your product and drag it into place"</p>
            </header>
            <div class="customizer__layout">
                <div class="panel customizer__preview">
                    <canvas
                        node_ref=canvas_ref
                        class="customizer__canvas"
                        width=CANVAS_WIDTH.to_string()
                        height=CANVAS_HEIGHT.to_string()
                        style:cursor=move || cursor.get()
                        on:pointerdown=on_pointer_down
                        on:pointermove=on_pointer_move
                        on:pointerup=on_pointer_up
                        on:pointerleave=on_pointer_leave
                    ></canvas>
                    <p class="customizer__hint">"Drag the text to position it on the product"</p>
                    {move || {
                        let state = product_image.get();
                        match (state.data, state.error) {
                            (Some(image), _) => view! {
                                <p class="customizer__reference">"Reference image: " {image.path}</p>
                            }
                                .into_any(),
                            (None, Some(message)) => view! {
                                <p class="customizer__reference customizer__reference--missing">{message}</p>
                            }
                                .into_any(),
                            (None, None) => ().into_any(),
                        }
                    }}
                </div>

                <form class="panel customizer__controls" on:submit=on_save>
                    <label class="field">
                        <span class="field__label">"Custom Text"</span>
                        <input
                            class="field__input"
                            type="text"
                            placeholder="Enter your text"
                            prop:value=move || form.with(|f| f.overlay.text.clone())
                            on:input=move |ev| form.update(|f| f.set_text(&event_target_value(&ev)))
                        />
                        {move || ui.with(|u| u.error).map(|msg| view! { <p class="field__error">{msg}</p> })}
                    </label>

                    <label class="field">
                        <span class="field__label">
                            {move || format!("Text Size: {}px", form.with(|f| f.overlay.size))}
                        </span>
                        <input
                            class="field__range"
                            type="range"
                            min=TEXT_SIZE_MIN.to_string()
                            max=TEXT_SIZE_MAX.to_string()
                            prop:value=move || form.with(|f| f.overlay.size.to_string())
                            on:input=move |ev| {
                                if let Ok(size) = event_target_value(&ev).parse::<f64>() {
                                    form.update(|f| f.set_text_size(size));
                                }
                            }
                        />
                    </label>

                    <label class="field">
                        <span class="field__label">"Text Color"</span>
                        <input
                            class="field__color"
                            type="color"
                            prop:value=move || form.with(|f| f.overlay.color.clone())
                            on:input=move |ev| form.update(|f| f.set_text_color(&event_target_value(&ev)))
                        />
                    </label>

                    <p class="customizer__position">
                        {move || {
                            let (x, y) = form.with(|f| (f.overlay.x, f.overlay.y));
                            format!("Position: ({x:.0}, {y:.0})")
                        }}
                    </p>

                    <button
                        type="submit"
                        class="btn btn--primary btn--block"
                        disabled=move || ui.with(|u| u.saving)
                    >
                        {move || if ui.with(|u| u.saving) { "Saving..." } else { "Save Design" }}
                    </button>
                </form>
            </div>
        </section>
    }
}
