//! REST helper for the random-username suggestion.
//!
//! Client-side (hydrate): a real HTTP call via `gloo-net`. Server-side
//! (SSR): a stub returning `None`, since the lookup is only meaningful
//! in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get an `Option` instead of errors or panics. The suggestion
//! is best-effort: a failed, slow, or ill-formed lookup yields `None`
//! and the form keeps its current value, with no loading or error
//! surface of its own.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(any(test, feature = "hydrate"))]
use serde::Deserialize;

/// Public random-user generator queried for username suggestions.
pub const RANDOM_USER_ENDPOINT: &str = "https://random-data-api.com/api/users/random_user";

/// Response shape of the random-user endpoint.
///
/// The endpoint returns a large profile object; only the username is
/// consumed and unknown fields are ignored on deserialization.
#[cfg(any(test, feature = "hydrate"))]
#[derive(Debug, Deserialize)]
struct RandomUser {
    username: String,
}

#[cfg(any(test, feature = "hydrate"))]
fn username_from_body(body: &str) -> Option<String> {
    serde_json::from_str::<RandomUser>(body)
        .ok()
        .map(|user| user.username)
}

/// Fetch a random username suggestion.
///
/// Returns `None` on the server and on any transport, status, or parse
/// failure; the caller simply keeps the current username. Requests are
/// fire-and-forget with no timeout, retry, or cancellation.
pub async fn fetch_random_username() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(RANDOM_USER_ENDPOINT)
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        let body = resp.text().await.ok()?;
        username_from_body(&body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
