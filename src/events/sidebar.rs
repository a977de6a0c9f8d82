use crate::constants::OUTSIDE_CLICK_ARM_DELAY_MS;
use crate::dom::{self, LocalStore};
use crate::nav::OutsideClickWatch;
use crate::prefs::Preference;
use std::rc::Rc;
use web_sys as web;

const COLLAPSED: &str = "collapsed";
const ACTIVE: &str = "active";

/// Desktop collapse toggle, restored from and saved to the store.
pub fn wire_collapse_toggle(document: &web::Document, store: LocalStore) {
    let Some(toggle) = document.get_element_by_id("sidebarToggle") else {
        return;
    };
    let Some(sidebar) = dom::query_one(document, ".sidebar") else {
        log::debug!("[sidebar] #sidebarToggle without .sidebar");
        return;
    };

    if Preference::SidebarCollapsed.load(&store) {
        _ = sidebar.class_list().add_1(COLLAPSED);
    }

    dom::add_click_listener(&toggle, move |_| {
        let Ok(collapsed) = sidebar.class_list().toggle(COLLAPSED) else {
            return;
        };
        if let Err(e) = Preference::SidebarCollapsed.save(&store, collapsed) {
            log::warn!("[sidebar] could not persist state: {e:#}");
        }
    });
    log::info!("[sidebar] collapse toggle wired");
}

/// Mobile slide-in. Once opened, the next click outside both the sidebar and
/// its toggle closes it; the watcher arms after a short delay so the opening
/// click itself is ignored.
pub fn wire_mobile_toggle(document: &web::Document) {
    let Some(toggle) = dom::query_one(document, ".mobile-toggle") else {
        return;
    };
    let sidebar = dom::query_one(document, ".sidebar");
    let watch = Rc::new(OutsideClickWatch::default());

    if let Some(sidebar) = sidebar.clone() {
        let watch = watch.clone();
        let toggle = toggle.clone();
        dom::add_listener(document, "click", move |ev| {
            let inside_sidebar = dom::event_within(&ev, &sidebar);
            let inside_toggle = dom::event_within(&ev, &toggle);
            if watch.on_document_click(inside_sidebar, inside_toggle) {
                _ = sidebar.class_list().remove_1(ACTIVE);
            }
        });
    }

    dom::add_click_listener(&toggle, move |_| {
        let Some(sidebar) = sidebar.as_ref() else {
            return;
        };
        if let Ok(true) = sidebar.class_list().toggle(ACTIVE) {
            let watch = watch.clone();
            dom::set_timeout(OUTSIDE_CLICK_ARM_DELAY_MS, move || watch.arm());
        }
    });
}
