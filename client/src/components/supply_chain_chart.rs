//! Forecast vs. actual line chart.
//!
//! Static monthly series drawn as SVG polylines; there is no backend
//! endpoint for this history yet.

#[cfg(test)]
#[path = "supply_chain_chart_test.rs"]
mod supply_chain_chart_test;

use leptos::prelude::*;

pub const MONTHS: [&str; 12] = ["Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec"];

/// Upper bound of the y axis, in thousands of units.
pub const Y_MAX: f64 = 10.0;

const WIDTH: f64 = 600.0;
const HEIGHT: f64 = 240.0;

pub struct Series {
    pub name: &'static str,
    pub class: &'static str,
    pub values: [f64; 12],
}

pub const SERIES: [Series; 3] = [
    Series {
        name: "Demand forecast",
        class: "chart__line--forecast",
        values: [3.8, 4.3, 6.0, 5.2, 7.0, 6.2, 4.5, 7.3, 6.0, 7.0, 8.5, 9.2],
    },
    Series {
        name: "Actual demand",
        class: "chart__line--actual",
        values: [2.8, 3.6, 4.2, 4.8, 5.5, 5.0, 6.8, 8.0, 7.5, 7.8, 6.5, 6.8],
    },
    Series {
        name: "Warehouse optimization",
        class: "chart__line--warehouse",
        values: [1.4, 1.8, 2.3, 2.1, 2.8, 3.0, 3.3, 4.5, 4.2, 4.8, 5.0, 4.5],
    },
];

/// SVG `points` for `values` spread evenly across `width`, with `0` at the
/// bottom edge and `y_max` at the top. Values outside the axis are clamped.
fn polyline_points(values: &[f64], width: f64, height: f64, y_max: f64) -> String {
    let step = match values.len() {
        0 | 1 => 0.0,
        #[allow(clippy::cast_precision_loss)]
        n => width / (n - 1) as f64,
    };
    values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            #[allow(clippy::cast_precision_loss)]
            let x = step * i as f64;
            let y = height - (v.clamp(0.0, y_max) / y_max) * height;
            format!("{x:.1},{y:.1}")
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[component]
pub fn SupplyChainChart() -> impl IntoView {
    let view_box = format!("0 0 {WIDTH} {HEIGHT}");
    view! {
        <section class="panel panel--chart">
            <header class="panel__header">
                <h3>"Demand Forecast vs. Actual and Optimization Effectiveness"</h3>
            </header>
            <svg class="chart" viewBox=view_box preserveAspectRatio="none">
                {SERIES
                    .iter()
                    .map(|s| {
                        view! {
                            <polyline
                                class=format!("chart__line {}", s.class)
                                fill="none"
                                points=polyline_points(&s.values, WIDTH, HEIGHT, Y_MAX)
                            />
                        }
                    })
                    .collect_view()}
            </svg>
            <div class="chart__axis">
                {MONTHS.iter().map(|m| view! { <span>{*m}</span> }).collect_view()}
            </div>
            <ul class="chart__legend">
                {SERIES
                    .iter()
                    .map(|s| view! { <li class=s.class>{s.name}</li> })
                    .collect_view()}
            </ul>
        </section>
    }
}
