use crate::dom::{self, LocalStore};
use crate::prefs::Preference;
use web_sys as web;

const DARK_MODE: &str = "dark-mode";

// header button, sidebar button, legacy button
const TOGGLE_IDS: [&str; 3] = ["headerThemeToggle", "themeToggle", "darkModeToggle"];

fn toggle_theme(body: &web::HtmlElement, store: &LocalStore) {
    let Ok(dark) = body.class_list().toggle(DARK_MODE) else {
        return;
    };
    log::info!("[theme] dark mode {}", if dark { "on" } else { "off" });
    if let Err(e) = Preference::DarkMode.save(store, dark) {
        log::warn!("[theme] could not persist preference: {e:#}");
    }
}

pub fn wire_theme_toggles(document: &web::Document, store: LocalStore) {
    let Some(body) = document.body() else {
        return;
    };
    if Preference::DarkMode.load(&store) {
        _ = body.class_list().add_1(DARK_MODE);
    }

    for id in TOGGLE_IDS {
        let Some(button) = document.get_element_by_id(id) else {
            continue;
        };
        let body = body.clone();
        let store = store.clone();
        dom::add_click_listener(&button, move |_| toggle_theme(&body, &store));
    }
}
