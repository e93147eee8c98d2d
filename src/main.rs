#![allow(warnings)]
//! Dotboard Frontend Entry Point

mod models;
mod config;
mod error;
mod validation;
mod capabilities;
mod api;
mod forms;
mod images;
mod board;
mod components;
mod pages;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        web_sys::console::warn_1(&"[APP] Logger already initialised".into());
    }
    mount_to_body(App);
}
