//! Customizer page: the editor above the gallery of saved designs.

use leptos::prelude::*;

use crate::components::product_customizer::ProductCustomizer;
use crate::components::product_design_list::ProductDesignList;

#[component]
pub fn CustomizerPage() -> impl IntoView {
    view! {
        <div class="page page--wide">
            <ProductCustomizer/>
            <ProductDesignList/>
        </div>
    }
}
