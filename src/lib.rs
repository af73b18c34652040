//! # sprintwro
//!
//! Leptos + WASM client for the Sprintwro sprint-review tool.
//!
//! This crate ships the landing surface: the page header with its
//! navigation drawer, and the home screen where a user picks a username
//! and either creates a room or joins an existing one. Rooms themselves
//! (sessions, sync, persistence) live in the product server, which is a
//! separate service; nothing here talks to it.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;

/// WASM entry point: installs the panic hook and console logger, then
/// hydrates the server-rendered document body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(crate::app::App);
}
