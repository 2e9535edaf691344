//! Tatar cooking master class: a page-by-page browser game that teaches
//! traditional recipes through drag-and-drop and a visual-novel dialog.
//!
//! Everything outside `web` is plain Rust and runs under `cargo test`.
//! `web` wires it to the DOM and only exists on wasm32.

pub mod console;
pub mod dialog;
pub mod dropzone;
pub mod message;
pub mod navigation;
pub mod progress;
pub mod store;
pub mod time;

#[cfg(target_arch = "wasm32")]
pub mod web;
