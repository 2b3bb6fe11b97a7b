//! Shipment tracking: orders, delays, ETA, and a look-up by order id.
//!
//! DESIGN
//! ======
//! Each list is its own resource so one slow endpoint never blocks the
//! others. The look-up re-enters "Loading..." on every Fetch, same as every
//! other panel, and stays hidden until the first Fetch.

use leptos::prelude::*;
use supply_dash::RemoteResource;
use serde_json::{Map, Value};
use supply_dash::api::types::{Delay, Eta, Order};

use crate::app::Api;
use crate::components::resource_view::ResourceView;
use crate::state::auth::AuthState;
use crate::util::fetch::activate;
use crate::util::format::extra_fields;

fn order_row(order: &Order) -> impl IntoView + use<> {
    let status = if order.status.is_empty() { "unknown".to_owned() } else { order.status.clone() };
    view! {
        <li class="tracking__row">
            <span class="tracking__id">{order.id.clone()}</span>
            <span class="tracking__status">{status}</span>
        </li>
    }
}

fn detail_list(extra: &Map<String, Value>) -> impl IntoView + use<> {
    let rows = extra_fields(extra)
        .into_iter()
        .map(|(label, value)| {
            view! {
                <dt class="tracking__label">{label}</dt>
                <dd class="tracking__value">{value}</dd>
            }
        })
        .collect_view();
    view! { <dl class="tracking__details">{rows}</dl> }
}

fn delay_row(delay: &Delay) -> impl IntoView + use<> {
    view! {
        <li class="tracking__row">
            <span class="tracking__id">{delay.id.clone()}</span>
            <span class="tracking__reason">{delay.reason.clone()}</span>
        </li>
    }
}

#[component]
pub fn TrackingPanel() -> impl IntoView {
    let api = expect_context::<Api>();
    let auth = expect_context::<RwSignal<AuthState>>();

    let orders = RwSignal::new(RemoteResource::<Vec<Order>>::new());
    let delays = RwSignal::new(RemoteResource::<Vec<Delay>>::new());
    let eta = RwSignal::new(RemoteResource::<Option<Eta>>::new());
    let lookup = RwSignal::new(RemoteResource::<Option<Order>>::new());
    let lookup_id = RwSignal::new(String::new());
    let looked_up = RwSignal::new(false);

    let (a, b, c) = (api.clone(), api.clone(), api.clone());
    activate(orders, auth, async move { a.orders().await });
    activate(delays, auth, async move { b.delays().await });
    activate(eta, auth, async move { c.eta().await });

    let on_fetch = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let id = lookup_id.get().trim().to_owned();
        if id.is_empty() {
            return;
        }
        looked_up.set(true);
        let api = api.clone();
        activate(lookup, auth, async move { api.order(&id).await });
    };

    view! {
        <section class="panel panel--tracking">
            <header class="panel__header">
                <h3>"Live shipments"</h3>
            </header>
            <div class="tracking__grid">
                <div class="tracking__column">
                    <h4 class="panel__subtitle">"Orders"</h4>
                    <ResourceView
                        resource=orders
                        render={|orders: &Vec<Order>| {
                            view! { <ul class="tracking__list">{orders.iter().map(order_row).collect_view()}</ul> }
                        }}
                    />
                </div>
                <div class="tracking__column">
                    <h4 class="panel__subtitle">"Delays"</h4>
                    <ResourceView
                        resource=delays
                        render={|delays: &Vec<Delay>| {
                            view! { <ul class="tracking__list">{delays.iter().map(delay_row).collect_view()}</ul> }
                        }}
                    />
                </div>
                <div class="tracking__column">
                    <h4 class="panel__subtitle">"Estimated arrival"</h4>
                    <ResourceView
                        resource=eta
                        render={|eta: &Option<Eta>| {
                            let text = eta
                                .as_ref()
                                .and_then(|e| e.estimated_time.clone())
                                .unwrap_or_else(|| "—".to_owned());
                            let details = eta.as_ref().map(|e| detail_list(&e.extra));
                            view! {
                                <p class="tracking__eta">{text}</p>
                                {details}
                            }
                        }}
                    />
                </div>
            </div>
            <form class="panel__lookup" on:submit=on_fetch>
                <input
                    class="panel__input"
                    type="text"
                    placeholder="Order ID"
                    prop:value=move || lookup_id.get()
                    on:input=move |ev| lookup_id.set(event_target_value(&ev))
                />
                <button class="panel__action" type="submit">"Fetch"</button>
            </form>
            <Show when=move || looked_up.get()>
                <ResourceView
                    resource=lookup
                    render={|order: &Option<Order>| {
                        let details = order.as_ref().map(|o| detail_list(&o.extra));
                        view! {
                            <ul class="tracking__list">{order.as_ref().map(order_row)}</ul>
                            {details}
                        }
                    }}
                />
            </Show>
        </section>
    }
}
