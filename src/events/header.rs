use crate::dom;
use crate::nav;
use web_sys as web;

const MENU_OPEN: &str = "menu-open";

/// Sticky header with its mobile menu button.
#[derive(Clone)]
pub struct HeaderMenu {
    header: web::Element,
    toggle: web::Element,
}

impl HeaderMenu {
    pub fn find(document: &web::Document) -> Option<Self> {
        Some(Self {
            header: dom::query_one(document, ".sticky-header")?,
            toggle: document.get_element_by_id("headerMenuToggle")?,
        })
    }

    pub fn is_open(&self) -> bool {
        self.header.class_list().contains(MENU_OPEN)
    }

    pub fn close(&self) {
        _ = self.header.class_list().remove_1(MENU_OPEN);
        _ = self.toggle.set_attribute("aria-expanded", "false");
    }

    pub fn toggle(&self) {
        let Ok(open) = self.header.class_list().toggle(MENU_OPEN) else {
            return;
        };
        _ = self
            .toggle
            .set_attribute("aria-expanded", if open { "true" } else { "false" });
    }
}

pub fn wire_header_menu(document: &web::Document, menu: &HeaderMenu) {
    let Some(header_nav) = document.get_element_by_id("headerNav") else {
        log::debug!("[header] no #headerNav; menu not wired");
        return;
    };

    let m = menu.clone();
    dom::add_click_listener(&menu.toggle, move |ev| {
        ev.prevent_default();
        ev.stop_propagation();
        m.toggle();
    });

    let m = menu.clone();
    dom::add_listener(document, "click", move |ev| {
        let inside = dom::event_within(&ev, &m.header);
        if nav::header_closes_on_click(dom::viewport_width(), m.is_open(), inside) {
            m.close();
        }
    });

    for link in dom::query_all_in(&header_nav, "a") {
        let m = menu.clone();
        dom::add_click_listener(&link, move |_| {
            if nav::is_mobile_width(dom::viewport_width()) {
                m.close();
            }
        });
    }

    if let Some(window) = web::window() {
        let m = menu.clone();
        dom::add_listener(&window, "resize", move |_| {
            if nav::header_closes_on_resize(dom::viewport_width()) {
                m.close();
            }
        });
    }
    log::info!("[header] mobile menu wired");
}
