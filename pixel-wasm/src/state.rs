use std::cell::RefCell;
use std::rc::Rc;

use pixel_core::{PaintBoard, SeededPaletteGenerator};
use web_sys::{Document, Element, Window};

/// Runtime state shared across the DOM callbacks behind an `Rc<RefCell<_>>`.
/// The board is only ever changed through its command methods.
pub struct State {
    pub window: Window,
    pub document: Document,
    pub palette_el: Element,
    pub board_el: Element,
    pub generator: SeededPaletteGenerator,
    pub board: PaintBoard,
}

thread_local! {
    pub static STATE: RefCell<Option<Rc<RefCell<State>>>> = const { RefCell::new(None) };
}

/// Run `f` against the live state, if the app has started.
pub fn with_state<T>(f: impl FnOnce(&mut State) -> T) -> Option<T> {
    STATE.with(|st| {
        let slot = st.borrow();
        let rc = slot.as_ref()?;
        let mut s = rc.borrow_mut();
        Some(f(&mut s))
    })
}
