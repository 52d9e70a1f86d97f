//! TaskFlow Frontend Entry Point

mod api;
mod app;
mod auth;
mod components;
mod config;
mod context;
mod models;
mod notify;
mod pages;
mod storage;
mod store;
mod tasks;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    wasm_tracing::set_as_global_default();
    mount_to_body(App);
}
