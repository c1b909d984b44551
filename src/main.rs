//! Red/Blue Ball entry point
//!
//! On the web this wires the page load to the cookie store and the DOM.
//! Natively it replays page loads against an in-memory store.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_page {
    use wasm_bindgen::prelude::*;

    use red_blue_ball::choice::seeded_source;
    use red_blue_ball::render::dom;
    use red_blue_ball::store::cookie::BrowserCookies;
    use red_blue_ball::{CookieStore, Store};

    /// Expire every cookie on this page (handy from the devtools console)
    #[wasm_bindgen]
    pub fn clear_all_choices() {
        let mut store = CookieStore::new(BrowserCookies::from_window());
        store.clear_all();
        log::info!("All cookies cleared");
    }

    fn load_page() {
        let mut store = CookieStore::new(BrowserCookies::from_window());
        let mut random = seeded_source(js_sys::Date::now() as u64);

        let load = red_blue_ball::start(&mut store, &mut random);

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            log::warn!("No document to render into");
            return;
        };
        if let Err(e) = dom::apply(&document, &load.updates) {
            log::warn!("Render error: {:?}", e);
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };

        // Module may start before or after the DOM is parsed
        if document.ready_state() == "loading" {
            let closure = Closure::once(move |_event: web_sys::Event| {
                load_page();
            });
            let _ = document.add_event_listener_with_callback(
                "DOMContentLoaded",
                closure.as_ref().unchecked_ref(),
            );
            closure.forget();
        } else {
            load_page();
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_page::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use red_blue_ball::choice::seeded_source;
    use red_blue_ball::{MemoryStore, Store};

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let loads: usize = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(3);
    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default();

    log::info!("Red/Blue Ball (native) replaying {} page loads", loads);
    log::info!("Run with `trunk serve` for the web version");

    let mut store = MemoryStore::new();
    let mut random = seeded_source(seed);

    for visit in 1..=loads {
        let load = red_blue_ball::start(&mut store, &mut random);
        for update in &load.updates {
            log::debug!("visit {}: {:?}", visit, update);
        }
    }

    store.clear_all();
    log::info!("Store cleared, {} entries left", store.len());
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
