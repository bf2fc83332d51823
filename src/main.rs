#[cfg(target_arch = "wasm32")]
mod carousel_view;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod nav;
#[cfg(target_arch = "wasm32")]
mod page_config;
#[cfg(target_arch = "wasm32")]
mod page_runtime;
#[cfg(target_arch = "wasm32")]
mod reveal;
#[cfg(target_arch = "wasm32")]
mod smooth_scroll;
#[cfg(target_arch = "wasm32")]
mod stats;

#[cfg(target_arch = "wasm32")]
fn main() {
    use gloo::events::EventListener;

    console_error_panic_hook::set_once();
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };
    if document.ready_state() == "loading" {
        EventListener::once(&document, "DOMContentLoaded", |_event| page_runtime::boot()).forget();
    } else {
        page_runtime::boot();
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!("tekrok-site runs in the browser; build it for wasm32-unknown-unknown");
}
