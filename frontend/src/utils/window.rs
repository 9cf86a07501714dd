/// Opens the browser's native print dialog.
#[cfg(target_arch = "wasm32")]
pub fn print_page() {
    match web_sys::window() {
        Some(win) => {
            if let Err(err) = win.print() {
                log::error!("print failed: {:?}", err);
            }
        }
        None => log::warn!("print requested without a window"),
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn print_page() {
    log::warn!("print requested without a window");
}

#[cfg(target_arch = "wasm32")]
pub fn scroll_to_top() {
    if let Some(win) = web_sys::window() {
        let options = web_sys::ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        win.scroll_to_with_scroll_to_options(&options);
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn scroll_to_top() {}
