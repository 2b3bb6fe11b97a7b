//! Headline operations figures shown above the dashboard panels.

use leptos::prelude::*;

pub struct SummaryCard {
    pub title: &'static str,
    pub value: &'static str,
    pub detail: &'static str,
}

pub const CARDS: [SummaryCard; 4] = [
    SummaryCard { title: "Shipments In Transit", value: "28", detail: "Across all active routes" },
    SummaryCard { title: "Avg Delivery Time", value: "2.5 days", detail: "Rolling 30-day average" },
    SummaryCard { title: "Stock Availability", value: "92%", detail: "Of tracked SKUs in stock" },
    SummaryCard { title: "Delay Risk", value: "Low", detail: "Based on current carrier reports" },
];

#[component]
pub fn SummaryCards() -> impl IntoView {
    view! {
        <div class="summary-cards">
            {CARDS
                .iter()
                .map(|card| {
                    view! {
                        <article class="summary-card">
                            <h4 class="summary-card__title">{card.title}</h4>
                            <p class="summary-card__value">{card.value}</p>
                            <p class="summary-card__detail">{card.detail}</p>
                        </article>
                    }
                })
                .collect_view()}
        </div>
    }
}
