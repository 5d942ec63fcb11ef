pub mod pointer;
pub mod scroll;
pub mod wheel;

use std::cell::RefCell;
use std::rc::Rc;
use viewer_core::{GestureEvent, GestureMode, Session};
use web_sys as web;

pub use pointer::wire_drag_handlers;
pub use scroll::wire_scroll_handler;
pub use wheel::wire_wheel_handler;

#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub session: Rc<RefCell<Session>>,
}

/// Register only the listeners of the session's gesture mode.
pub fn wire_input_handlers(w: InputWiring) {
    let mode = w.session.borrow().mode();
    log::info!("[gesture] wiring {:?} input", mode);
    match mode {
        GestureMode::Drag => wire_drag_handlers(&w),
        GestureMode::Wheel => wire_wheel_handler(&w),
        GestureMode::Scroll => wire_scroll_handler(&w),
    }
}

#[inline]
fn dispatch(session: &Rc<RefCell<Session>>, event: GestureEvent) -> bool {
    session.borrow_mut().handle(event)
}
