//! Browser side effects used by guards and workflow pages.

pub fn redirect(path: &str) {
    log::info!("navigating to {}", path);
    if let Some(win) = web_sys::window() {
        if let Err(err) = win.location().set_href(path) {
            log::error!("navigation to {} failed: {:?}", path, err);
        }
    }
}

pub fn alert(message: &str) {
    if let Some(win) = web_sys::window() {
        if let Err(err) = win.alert_with_message(message) {
            log::warn!("alert failed: {:?}", err);
        }
    }
}
