#![cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;
use web_sys as web;

mod animator;
mod constants;
mod dom;
mod events;
mod frame;
mod nav;
mod prefs;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("site-behavior starting");

    let document = dom::window_document().ok_or_else(|| JsValue::from_str("no document"))?;
    dom::on_dom_ready(&document, || {
        if let Err(e) = init() {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let store = dom::LocalStore::open();

    events::sidebar::wire_collapse_toggle(&document, store.clone());
    events::sidebar::wire_mobile_toggle(&document);

    let header = events::header::HeaderMenu::find(&document);
    if let Some(menu) = header.as_ref() {
        events::header::wire_header_menu(&document, menu);
    }
    events::links::wire_nav_links(&document, header);
    events::links::wire_active_section(&document);

    events::theme::wire_theme_toggles(&document, store);

    // Decorative parallax; silently absent on pages without the container
    events::pointer::wire_floating_elements(&document);

    Ok(())
}
