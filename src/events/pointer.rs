use super::{dispatch, InputWiring};
use viewer_core::GestureEvent;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_drag_handlers(w: &InputWiring) {
    wire_pointerdown(w);
    wire_pointermove(w);
    wire_pointerup(w);
}

fn wire_pointerdown(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        if dispatch(
            &w.session,
            GestureEvent::PointerDown {
                x: ev.client_x() as f32,
            },
        ) {
            log::debug!("[mouse] begin drag at x={}", ev.client_x());
        }
        _ = w.canvas.set_pointer_capture(ev.pointer_id());
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointermove(w: &InputWiring) {
    let w = w.clone();

    // Only the horizontal coordinate is forwarded; vertical motion never rotates.
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        dispatch(
            &w.session,
            GestureEvent::PointerMove {
                x: ev.client_x() as f32,
            },
        );
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }

    closure.forget();
}

fn wire_pointerup(w: &InputWiring) {
    let w = w.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
        if dispatch(&w.session, GestureEvent::PointerUp) {
            log::debug!("[mouse] end drag");
        }
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        for kind in ["pointerup", "pointercancel"] {
            _ = wnd.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref());
        }
    }

    closure.forget();
}
