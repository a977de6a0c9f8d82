use super::header::HeaderMenu;
use crate::dom;
use crate::nav::{self, Section};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

const NAV_LINK_SELECTOR: &str = ".sidebar-nav .nav-link, .header-nav .header-nav-link";
const ACTIVE: &str = "active";
const HOME_HREF: &str = "#home";

/// Nav link clicks: collapse menus on mobile, smooth-scroll `#home` to top.
pub fn wire_nav_links(document: &web::Document, header: Option<HeaderMenu>) {
    let sidebar = dom::query_one(document, ".sidebar");
    for link in dom::query_all(document, NAV_LINK_SELECTOR) {
        let sidebar = sidebar.clone();
        let header = header.clone();
        let is_home = link.get_attribute("href").as_deref() == Some(HOME_HREF);
        dom::add_click_listener(&link, move |ev| {
            if nav::is_mobile_width(dom::viewport_width()) {
                if let Some(sidebar) = sidebar.as_ref() {
                    _ = sidebar.class_list().remove_1(ACTIVE);
                }
                if let Some(header) = header.as_ref() {
                    header.close();
                }
            }
            if is_home {
                ev.prevent_default();
                scroll_to_top();
            }
        });
    }
}

fn scroll_to_top() {
    let Some(window) = web::window() else {
        return;
    };
    let opts = web::ScrollToOptions::new();
    opts.set_top(0.0);
    opts.set_behavior(web::ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&opts);
}

fn read_sections(articles: &[web::HtmlElement]) -> Vec<Section> {
    articles
        .iter()
        .map(|a| Section {
            id: a.id(),
            top: a.offset_top() as f64,
            height: a.offset_height() as f64,
        })
        .collect()
}

fn highlight(links: &[web::Element], section_id: &str) {
    let href = nav::section_href(section_id);
    for link in links {
        let cl = link.class_list();
        _ = cl.remove_1(ACTIVE);
        if link.get_attribute("href").as_deref() == Some(href.as_str()) {
            _ = cl.add_1(ACTIVE);
        }
    }
}

/// Highlight the nav link of the section under the scroll position.
pub fn wire_active_section(document: &web::Document) {
    let Some(window) = web::window() else {
        return;
    };
    let articles: Vec<web::HtmlElement> = dom::query_all(document, "article[id]")
        .into_iter()
        .filter_map(|el| el.dyn_into::<web::HtmlElement>().ok())
        .collect();
    let links = dom::query_all(document, NAV_LINK_SELECTOR);
    log::info!(
        "[nav] tracking {} sections for {} links",
        articles.len(),
        links.len()
    );

    let update: Rc<dyn Fn()> = Rc::new(move || update_active_link(&articles, &links));

    for event in ["scroll", "load"] {
        let update = update.clone();
        dom::add_listener(&window, event, move |_| update());
    }
    // wasm can finish instantiating after `load`; highlight now in that case
    if nav::load_already_fired(&document.ready_state()) {
        update();
    }
}

fn update_active_link(articles: &[web::HtmlElement], links: &[web::Element]) {
    let Some(scroll_y) = web::window().and_then(|w| w.scroll_y().ok()) else {
        return;
    };
    // geometry is re-read each time since layout can change
    let sections = read_sections(articles);
    if let Some(id) = nav::active_section(&sections, scroll_y) {
        highlight(links, id);
    }
}
