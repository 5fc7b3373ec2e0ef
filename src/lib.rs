/// Tab to Note - browser extension popup that sends the active tab's URL to a note
/// Built with Rust + WASM + Yew

mod browser;
mod config;
mod error;
mod operations;
mod settings;
mod storage;
mod tab_data;
pub mod ui;

pub use config::{ConfigField, NoteConfig};
pub use error::{SendError, StorageError};

use wasm_bindgen::prelude::*;

// Set up panic hook for better error messages in the browser console
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
}

// Start the Yew app for the popup
#[wasm_bindgen]
pub fn start_popup() {
    yew::Renderer::<ui::popup::App>::new().render();
}
