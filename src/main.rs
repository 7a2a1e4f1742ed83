//! To-Do List Frontend Entry Point

mod app;
mod components;
mod config;
mod context;
mod controller;
mod error;
mod models;
mod storage;
mod store;
mod todo;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(AppConfig::default().log_level).ok();
    mount_to_body(App);
}
