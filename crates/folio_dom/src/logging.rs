//! Logger installation for native and browser builds.

use log::LevelFilter;

/// Install the platform logger at `level`.
///
/// Native builds log through `env_logger` (`RUST_LOG` still overrides per
/// module); wasm builds log to the browser console and install the panic
/// hook. Calling this twice is harmless: the second install is ignored.
#[cfg(not(target_arch = "wasm32"))]
pub fn init_logging(level: LevelFilter) {
    let _ = env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .try_init();
}

/// Install the browser console logger at `level`.
#[cfg(target_arch = "wasm32")]
pub fn init_logging(level: LevelFilter) {
    console_error_panic_hook::set_once();
    let level = level.to_level().unwrap_or(log::Level::Error);
    if console_log::init_with_level(level).is_err() {
        web_sys::console::log_1(&"Logger already initialized".into());
    }
}
