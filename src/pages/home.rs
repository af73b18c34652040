//! Home page: pick a username, then create or join a room.
//!
//! SYSTEM CONTEXT
//! ==============
//! Unauthenticated landing route. Submitting validates locally and
//! acknowledges a well-formed request; actually creating or joining a
//! room is the product server's concern and never happens here.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;

use crate::state::form::{FormErrors, RoomForm, SubmitAction, validate};

/// Success notice for a submit whose freshly computed flags are all
/// clear. A flagged submit gets field highlights and nothing else.
fn submit_notice(errors: FormErrors) -> Option<&'static str> {
    (!errors.any()).then_some("no errors")
}

/// Landing page with the username picker and the create/join room form.
#[component]
pub fn HomePage() -> impl IntoView {
    let form = RwSignal::new(RoomForm::default());
    let errors = RwSignal::new(FormErrors::default());
    let notice = RwSignal::new(None::<&'static str>);

    let on_submit = move |action: SubmitAction| {
        let snapshot = form.get();
        #[cfg(feature = "hydrate")]
        {
            log::debug!("submitted value: {snapshot:?}");
        }
        let fresh = validate(&snapshot, action);
        errors.set(fresh);
        notice.set(submit_notice(fresh));
    };

    let on_random_username = move |_| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            // In-flight lookups are never cancelled; with rapid clicks
            // the response that lands last wins.
            if let Some(name) = crate::net::api::fetch_random_username().await {
                form.update(|f| f.username = Some(name));
            }
        });
    };

    view! {
        <main class="home-page">
            <h2>"Welcome to the best sprint review tool!"</h2>
            <form class="home-form" on:submit=move |ev: leptos::ev::SubmitEvent| ev.prevent_default()>
                <p>"First of all, choose a username: "</p>
                <div class="home-card home-card--username">
                    <label class="home-card__label">
                        "Username"
                        <input
                            class="home-field"
                            class:home-field--error=move || errors.get().username
                            type="text"
                            prop:value=move || form.get().username.unwrap_or_default()
                            on:input=move |ev| {
                                form.update(|f| f.username = Some(event_target_value(&ev)));
                            }
                        />
                    </label>
                    <button
                        class="btn home-card__random"
                        type="button"
                        title="Pick a random username"
                        on:click=on_random_username
                    >
                        "🎲"
                    </button>
                </div>

                <p>"Then, you can either:"</p>
                <div class="home-card home-card--create">
                    <h3>"Create a room"</h3>
                    <label class="home-card__label">
                        "Room name"
                        <input
                            class="home-field"
                            class:home-field--error=move || errors.get().new_room_name
                            type="text"
                            prop:value=move || form.get().new_room_name.unwrap_or_default()
                            on:input=move |ev| {
                                form.update(|f| f.new_room_name = Some(event_target_value(&ev)));
                            }
                        />
                    </label>
                    <button
                        class="btn btn--primary"
                        type="button"
                        on:click=move |_| on_submit(SubmitAction::CreateRoom)
                    >
                        "Submit"
                    </button>
                </div>

                <p class="home-form__separator">" - or - "</p>
                <div class="home-card home-card--join">
                    <h3>"Join an existing room"</h3>
                    <label class="home-card__label">
                        "Room code"
                        <input
                            class="home-field"
                            class:home-field--error=move || errors.get().existing_room_name
                            type="text"
                            prop:value=move || form.get().existing_room_name.unwrap_or_default()
                            on:input=move |ev| {
                                form.update(|f| f.existing_room_name = Some(event_target_value(&ev)));
                            }
                        />
                    </label>
                    <button
                        class="btn btn--secondary"
                        type="button"
                        on:click=move |_| on_submit(SubmitAction::JoinRoom)
                    >
                        "Submit"
                    </button>
                </div>

                <Show when=move || notice.get().is_some()>
                    <p class="home-form__notice">{move || notice.get().unwrap_or_default()}</p>
                </Show>
            </form>
        </main>
    }
}
