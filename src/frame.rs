use crate::animator::{Animator, ElementTransform};
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub animator: Rc<RefCell<Animator>>,
    pub elements: Vec<web::Element>,
    pub transforms: Vec<ElementTransform>,
}

impl FrameContext {
    pub fn frame(&mut self) {
        // Viewport is re-read every frame so resizes need no handler.
        let Some(viewport) = dom::viewport_size() else {
            return;
        };
        self.animator
            .borrow_mut()
            .tick_into(viewport, &mut self.transforms);

        for (el, t) in self.elements.iter().zip(&self.transforms) {
            dom::set_transform(el, &t.to_css());
        }
    }
}

fn request_frame(window: &web::Window, tick: &Closure<dyn FnMut()>) {
    if let Err(e) = window.request_animation_frame(tick.as_ref().unchecked_ref()) {
        log::warn!("requestAnimationFrame failed: {:?}", e);
    }
}

/// Runs `frame` on every animation frame for the rest of the page session.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let (Some(w), Some(cb)) = (web::window(), tick_clone.borrow().as_ref()) {
            request_frame(&w, cb);
        }
    }) as Box<dyn FnMut()>));

    // first cycle runs synchronously, then self-schedules
    frame_ctx.borrow_mut().frame();
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        request_frame(&w, cb);
    }
}
