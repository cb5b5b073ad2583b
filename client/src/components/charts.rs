//! SVG bar and pie charts for the analytics dashboard.

use leptos::prelude::*;

use crate::util::chart_math::{Series, bar_layout, pie_slices, slice_label};

const BAR_PLOT_WIDTH: f64 = 320.0;
const BAR_PLOT_HEIGHT: f64 = 240.0;
const PIE_SIZE: f64 = 240.0;
const PIE_RADIUS: f64 = 80.0;

/// One bar per series with a legend underneath.
#[component]
pub fn BarChart(series: Vec<Series>) -> impl IntoView {
    let bars = bar_layout(&series, BAR_PLOT_WIDTH, BAR_PLOT_HEIGHT);
    view! {
        <figure class="chart chart--bar">
            <svg
                class="chart__svg"
                viewBox=format!("0 0 {BAR_PLOT_WIDTH} {BAR_PLOT_HEIGHT}")
                role="img"
                aria-label="Posts overview"
            >
                <line
                    class="chart__axis"
                    x1="0"
                    y1=BAR_PLOT_HEIGHT.to_string()
                    x2=BAR_PLOT_WIDTH.to_string()
                    y2=BAR_PLOT_HEIGHT.to_string()
                />
                {bars
                    .into_iter()
                    .map(|bar| {
                        view! {
                            <rect
                                x=format!("{:.2}", bar.x)
                                y=format!("{:.2}", bar.y)
                                width=format!("{:.2}", bar.width)
                                height=format!("{:.2}", bar.height)
                                fill=bar.color
                            >
                                <title>{format!("{}: {}", bar.label, bar.value)}</title>
                            </rect>
                        }
                    })
                    .collect_view()}
            </svg>
            <Legend series=series/>
        </figure>
    }
}

/// Status distribution pie with percentage labels.
#[component]
pub fn PieChart(series: Vec<Series>) -> impl IntoView {
    let center = PIE_SIZE / 2.0;
    let slices = pie_slices(&series, center, center, PIE_RADIUS);
    let labels: Vec<String> = slices.iter().map(|s| slice_label(s.label, s.fraction)).collect();
    let empty = slices.is_empty();
    view! {
        <figure class="chart chart--pie">
            <svg
                class="chart__svg"
                viewBox=format!("0 0 {PIE_SIZE} {PIE_SIZE}")
                role="img"
                aria-label="Post status distribution"
            >
                {empty
                    .then(|| {
                        view! {
                            <circle
                                class="chart__empty"
                                cx=center.to_string()
                                cy=center.to_string()
                                r=PIE_RADIUS.to_string()
                            />
                        }
                    })}
                {slices
                    .into_iter()
                    .zip(labels.clone())
                    .map(|(slice, label)| {
                        view! {
                            <path d=slice.path fill=slice.color>
                                <title>{label}</title>
                            </path>
                        }
                    })
                    .collect_view()}
            </svg>
            <figcaption class="chart__labels">
                {labels
                    .into_iter()
                    .map(|label| view! { <span class="chart__label">{label}</span> })
                    .collect_view()}
            </figcaption>
        </figure>
    }
}

#[component]
fn Legend(series: Vec<Series>) -> impl IntoView {
    view! {
        <ul class="chart__legend">
            {series
                .into_iter()
                .map(|s| {
                    view! {
                        <li class="chart__legend-item">
                            <span class="chart__swatch" style=format!("background-color: {}", s.color)></span>
                            {s.label}
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
}
