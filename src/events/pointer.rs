use crate::animator::{Animator, AnimatorConfig};
use crate::dom;
use crate::frame;
use glam::DVec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

const CONTAINER_ID: &str = "data3dContainer";
const ELEMENT_SELECTOR: &str = ".data-element";

/// Start the floating-element animation when the container and at least one
/// element are present on the page.
pub fn wire_floating_elements(document: &web::Document) {
    if document.get_element_by_id(CONTAINER_ID).is_none() {
        log::debug!("[animator] no #{CONTAINER_ID}; not starting");
        return;
    }
    // every match is kept, SVG included, so element indices stay in
    // document order
    let elements = dom::query_all(document, ELEMENT_SELECTOR);
    if elements.is_empty() {
        log::debug!("[animator] no {ELEMENT_SELECTOR} elements; not starting");
        return;
    }
    let Some(viewport) = dom::viewport_size() else {
        return;
    };

    let raw_speeds: Vec<Option<String>> = elements
        .iter()
        .map(|el| el.get_attribute("data-speed"))
        .collect();
    let animator = Animator::from_speed_attributes(
        AnimatorConfig::default(),
        viewport,
        raw_speeds.iter().map(|s| s.as_deref()),
    );
    log::info!(
        "[animator] tracking {} elements, speeds={:?}",
        elements.len(),
        animator.speeds()
    );
    let animator = Rc::new(RefCell::new(animator));

    wire_mousemove(document, animator.clone());

    let transforms = Vec::with_capacity(elements.len());
    frame::start_loop(Rc::new(RefCell::new(frame::FrameContext {
        animator,
        elements,
        transforms,
    })));
}

fn wire_mousemove(document: &web::Document, animator: Rc<RefCell<Animator>>) {
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let pos = DVec2::new(ev.client_x() as f64, ev.client_y() as f64);
        animator.borrow_mut().on_pointer_move(pos);
    }) as Box<dyn FnMut(_)>);
    _ = document.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
    closure.forget();
}
