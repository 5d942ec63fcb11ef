use super::{dispatch, InputWiring};
use viewer_core::GestureEvent;
use wasm_bindgen::JsCast;
use web_sys as web;

/// The wheel owns its signal: the listener is non-passive and always cancels
/// the native scroll, so the step counter cannot drift from the page.
pub fn wire_wheel_handler(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::WheelEvent| {
        ev.prevent_default();
        dispatch(
            &w.session,
            GestureEvent::Wheel {
                delta_y: ev.delta_y() as f32,
            },
        );
    }) as Box<dyn FnMut(_)>);

    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(false);
    if let Err(e) = canvas_for_listener.add_event_listener_with_callback_and_add_event_listener_options(
        "wheel",
        closure.as_ref().unchecked_ref(),
        &opts,
    ) {
        log::error!("[gesture] wheel listener error: {:?}", e);
    }
    closure.forget();
}
