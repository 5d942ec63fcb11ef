use super::{dispatch, InputWiring};
use crate::dom;
use viewer_core::GestureEvent;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_scroll_handler(w: &InputWiring) {
    let Some(window) = web::window() else {
        return;
    };
    let w = w.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
        let Some(wnd) = web::window() else {
            return;
        };
        // Re-read the live document on every event; nothing is cached here.
        if let Some((offset, document_height, viewport_height)) = dom::scroll_metrics(&wnd) {
            dispatch(
                &w.session,
                GestureEvent::Scroll {
                    offset,
                    document_height,
                    viewport_height,
                },
            );
        }
    }) as Box<dyn FnMut()>);

    // A resize changes the scrollable range without firing `scroll`.
    for kind in ["scroll", "resize"] {
        _ = window.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
