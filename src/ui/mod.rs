/// Popup UI
pub mod components;
pub mod popup;
pub mod state;
