//! Tasks Frontend Entry Point

mod app;
mod commands;
mod components;
mod config;
mod error;
mod experiment;
mod logging;
mod models;
mod query;
mod repository;
mod search;
mod storage;
mod store;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    let config = AppConfig::load();
    logging::init(&config);
    mount_to_body(move || view! { <App config=config /> });
}
