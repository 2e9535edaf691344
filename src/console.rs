//! Browser console logging.
//!
//! On wasm32 this goes straight to `console.log` / `console.warn`.
//! Native builds (tests) print warnings to stderr and drop info lines.

const PREFIX: &str = "Tatar Cooking";

/// Informational line, e.g. page start or sound stubs.
pub fn log(msg: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::log_1(&format!("{PREFIX}: {msg}").into());
    #[cfg(not(target_arch = "wasm32"))]
    let _ = msg;
}

/// Recoverable failure that the player never sees.
pub fn warn(msg: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::warn_1(&format!("{PREFIX}: {msg}").into());
    #[cfg(not(target_arch = "wasm32"))]
    eprintln!("{PREFIX}: {msg}");
}
