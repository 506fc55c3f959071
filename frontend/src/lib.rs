mod api;
mod components;
pub mod config;
mod pages;
pub mod router;
mod state;
pub mod utils;

#[cfg(test)]
mod test_support;

/// Browser entry point: installs logging, starts loading the runtime config
/// and mounts the application.
pub fn run() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&format!("logger already initialized: {}", err).into());
    }
    log::info!("starting Checkpoint frontend");

    wasm_bindgen_futures::spawn_local(config::init());
    router::mount_app();
}
