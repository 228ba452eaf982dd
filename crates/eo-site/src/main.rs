//! My English Online Marketing Site

mod app;
mod components;
mod pages;

use leptos::*;

fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    mount_to_body(|| {
        view! {
            <app::App/>
        }
    });
}
