//! Page header: top app bar with the navigation drawer.
//!
//! SYSTEM CONTEXT
//! ==============
//! The drawer is presentational scaffolding for future navigation; its
//! entries are static placeholders with no attached behavior.

#[cfg(test)]
#[path = "header_test.rs"]
mod header_test;

use leptos::prelude::*;

use crate::state::ui::UiState;

/// Whether a keydown inside the drawer should dismiss it.
///
/// Tab and Shift are part of moving keyboard focus through the drawer's
/// entries, so they must leave it open.
fn closes_drawer(key: &str) -> bool {
    !matches!(key, "Tab" | "Shift")
}

/// Top app bar with the menu button, brand title, and navigation drawer.
#[component]
pub fn Header() -> impl IntoView {
    let ui = RwSignal::new(UiState::default());

    let on_close = Callback::new(move |_| ui.update(|u| u.drawer_open = false));

    view! {
        <div class="header">
            <div class="header__bar">
                <button
                    class="btn header__menu"
                    title="Open navigation"
                    on:click=move |_| ui.update(|u| u.drawer_open = true)
                >
                    "☰"
                </button>
                <span class="header__brand">"Sprintwro"</span>
            </div>
            <Show when=move || ui.get().drawer_open>
                <NavDrawer on_close=on_close/>
            </Show>
        </div>
    }
}

/// Left-anchored drawer overlay.
///
/// The backdrop dismisses it, and so does any click or keydown inside
/// the content area; `closes_drawer` filters out the keys used for
/// keyboard navigation.
#[component]
fn NavDrawer(on_close: Callback<()>) -> impl IntoView {
    view! {
        <div class="drawer-backdrop" on:click=move |_| on_close.run(())>
            <div
                class="drawer"
                role="presentation"
                tabindex="0"
                on:click=move |_| on_close.run(())
                on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                    if closes_drawer(&ev.key()) {
                        on_close.run(());
                    }
                }
            >
                <ul class="drawer__list">
                    <li class="drawer__item">
                        <span class="drawer__glyph" aria-hidden="true">"📥"</span>
                        <span class="drawer__label">"Nothing to see here!"</span>
                    </li>
                </ul>
                <div class="drawer__divider"></div>
                <ul class="drawer__list">
                    <li class="drawer__item">
                        <span class="drawer__glyph" aria-hidden="true">"✉"</span>
                        <span class="drawer__label">"Neither here!"</span>
                    </li>
                </ul>
            </div>
        </div>
    }
}
