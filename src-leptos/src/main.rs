//! Classroom Admin - Leptos Frontend
//!
//! Browser UI for the teacher assignment and teacher profile screens.
//! Talks to the backend APIs directly with `fetch`.

// Dependencies used in lib.rs submodules, acknowledged here for bin target
use async_trait as _;
use classroom_core as _;
use classroom_types as _;
use leptos_router as _;
use serde as _;
use serde_json as _;
use serde_wasm_bindgen as _;
use wasm_bindgen as _;
use wasm_bindgen_futures as _;
use web_sys as _;

use classroom_leptos::app::App;
use leptos::prelude::*;

fn main() {
    // Initialize panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging (ignore error if already initialized)
    drop(console_log::init_with_level(log::Level::Debug));

    log::info!("Classroom Admin (Leptos) starting...");

    mount_to_body(App);
}
