//! Section navigation and sign-out.

use leptos::prelude::*;

use crate::state::ui::{Section, UiState};

#[component]
pub fn Sidebar(on_logout: Callback<()>) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <nav class="sidebar" class:sidebar--collapsed=move || ui.get().sidebar_collapsed>
            <button
                class="sidebar__toggle"
                title="Toggle sidebar"
                on:click=move |_| ui.update(|u| u.sidebar_collapsed = !u.sidebar_collapsed)
            >
                "☰"
            </button>
            <ul class="sidebar__items">
                {Section::ALL
                    .into_iter()
                    .map(|section| {
                        view! {
                            <li>
                                <button
                                    class="sidebar__item"
                                    class:sidebar__item--active=move || ui.get().section == section
                                    class:sidebar__item--soon=!section.is_available()
                                    on:click=move |_| ui.update(|u| u.section = section)
                                >
                                    {section.label()}
                                </button>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
            <button class="sidebar__logout" on:click=move |_| on_logout.run(())>
                "Log out"
            </button>
        </nav>
    }
}
