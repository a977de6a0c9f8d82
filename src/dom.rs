use crate::prefs::PreferenceStore;
use glam::DVec2;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Viewport size in CSS pixels, re-read on every call.
pub fn viewport_size() -> Option<DVec2> {
    let w = web::window()?;
    let width = w.inner_width().ok()?.as_f64()?;
    let height = w.inner_height().ok()?.as_f64()?;
    Some(DVec2::new(width, height))
}

#[inline]
pub fn viewport_width() -> f64 {
    viewport_size().map(|v| v.x).unwrap_or(0.0)
}

fn elements_of(list: Result<web::NodeList, wasm_bindgen::JsValue>) -> Vec<web::Element> {
    let Ok(list) = list else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|n| n.dyn_into::<web::Element>().ok())
        .collect()
}

#[inline]
pub fn query_all(root: &web::Document, selector: &str) -> Vec<web::Element> {
    elements_of(root.query_selector_all(selector))
}

#[inline]
pub fn query_all_in(root: &web::Element, selector: &str) -> Vec<web::Element> {
    elements_of(root.query_selector_all(selector))
}

/// Set the inline `transform` of an HTML or SVG element. Other element
/// kinds get it through the raw `style` attribute.
pub fn set_transform(el: &web::Element, css: &str) {
    let style = if let Some(html) = el.dyn_ref::<web::HtmlElement>() {
        html.style()
    } else if let Some(svg) = el.dyn_ref::<web::SvgElement>() {
        svg.style()
    } else {
        _ = el.set_attribute("style", &format!("transform: {css}"));
        return;
    };
    _ = style.set_property("transform", css);
}

#[inline]
pub fn query_one(root: &web::Document, selector: &str) -> Option<web::Element> {
    root.query_selector(selector).ok().flatten()
}

/// True when the event target is `container` or one of its descendants.
pub fn event_within(ev: &web::Event, container: &web::Element) -> bool {
    ev.target()
        .and_then(|t| t.dyn_into::<web::Node>().ok())
        .map(|node| container.contains(Some(&node)))
        .unwrap_or(false)
}

pub fn add_listener(
    target: &web::EventTarget,
    event: &str,
    mut handler: impl FnMut(web::Event) + 'static,
) {
    let closure = Closure::wrap(Box::new(move |ev: web::Event| handler(ev)) as Box<dyn FnMut(_)>);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

#[inline]
pub fn add_click_listener(element: &web::Element, handler: impl FnMut(web::Event) + 'static) {
    add_listener(element, "click", handler);
}

pub fn set_timeout(delay_ms: i32, callback: impl FnOnce() + 'static) {
    let Some(w) = web::window() else {
        return;
    };
    let cb = Closure::once_into_js(callback);
    if let Err(e) =
        w.set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref(), delay_ms)
    {
        log::warn!("setTimeout failed: {:?}", e);
    }
}

/// Run `callback` once the document has been parsed.
pub fn on_dom_ready(document: &web::Document, callback: impl FnOnce() + 'static) {
    if document.ready_state() != "loading" {
        callback();
        return;
    }
    let cb = Closure::once_into_js(callback);
    _ = document.add_event_listener_with_callback("DOMContentLoaded", cb.unchecked_ref());
}

/// `window.localStorage`, or nothing when the browser denies access.
#[derive(Clone)]
pub struct LocalStore {
    storage: Option<web::Storage>,
}

impl LocalStore {
    pub fn open() -> Self {
        let storage = web::window().and_then(|w| w.local_storage().ok().flatten());
        if storage.is_none() {
            log::warn!("localStorage unavailable; preferences will not persist");
        }
        Self { storage }
    }
}

impl PreferenceStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> anyhow::Result<()> {
        let storage = self
            .storage
            .as_ref()
            .ok_or_else(|| anyhow::anyhow!("no localStorage"))?;
        storage
            .set_item(key, value)
            .map_err(|e| anyhow::anyhow!("setItem({key}) failed: {:?}", e))
    }
}
