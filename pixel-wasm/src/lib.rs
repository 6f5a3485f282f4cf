use std::cell::RefCell;
use std::rc::Rc;

use pixel_core::{PaintBoard, PaletteGenerator};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event, HtmlElement, HtmlInputElement, Window};

mod constants;
mod render;
mod state;
mod utils;

use crate::constants::{
    BOARD_ID, CLEAR_BUTTON_ID, COLOR_CLASS, EMPTY_SIZE_ALERT, GENERATE_BUTTON_ID, PALETTE_ID,
    PIXEL_CLASS, SIZE_INPUT_ID,
};
use crate::render::{
    element_index, render_all, render_board, render_cell, render_cells, render_selection,
};
use crate::state::{STATE, State, with_state};
use crate::utils::{LaunchConfig, entropy_seed, init_logging};

fn to_js(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn not_started() -> JsValue {
    JsValue::from_str("pixel board not started")
}

fn find_element(document: &Document, id: &str) -> Result<Element, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("#{id} not found")))
}

/// The generated swatch or pixel an event landed on, if it carries `class`.
fn event_item(e: &Event, class: &str) -> Option<(Element, usize)> {
    let el: Element = e.target()?.dyn_into().ok()?;
    if !el.class_list().contains(class) {
        return None;
    }
    let index = element_index(&el)?;
    Some((el, index))
}

fn select_color_from_event(state: &mut State, e: &Event) -> Result<(), JsValue> {
    let Some((_, index)) = event_item(e, COLOR_CLASS) else {
        return Ok(());
    };
    if let Err(err) = state.board.select_color(index) {
        log::warn!("{err}");
        return Ok(());
    }
    render_selection(state)
}

fn paint_pixel_from_event(state: &mut State, e: &Event) -> Result<(), JsValue> {
    let Some((el, index)) = event_item(e, PIXEL_CLASS) else {
        return Ok(());
    };
    if let Err(err) = state.board.paint_pixel(index) {
        log::warn!("{err}");
        return Ok(());
    }
    render_cell(state, &el, index)
}

fn resize_from_input(state: &mut State) -> Result<(), JsValue> {
    let input: HtmlInputElement = find_element(&state.document, SIZE_INPUT_ID)?.dyn_into()?;
    let text = input.value();
    if text.trim().is_empty() {
        state.window.alert_with_message(EMPTY_SIZE_ALERT)?;
        return Ok(());
    }
    let size = state.board.resize_board_from_input(&text);
    log::info!("board regenerated at {size}x{size}");
    render_board(state)
}

/// Attach `handler` to `event` on `target`. The closure lives for the page.
fn listen(
    state: &Rc<RefCell<State>>,
    target: &Element,
    event: &str,
    handler: fn(&mut State, &Event) -> Result<(), JsValue>,
) -> Result<(), JsValue> {
    let st = state.clone();
    let cb = Closure::<dyn FnMut(Event)>::wrap(Box::new(move |e: Event| {
        let mut s = st.borrow_mut();
        if let Err(err) = handler(&mut s, &e) {
            log::error!("{err:?}");
        }
    }));
    target.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}

fn attach_ui(state: Rc<RefCell<State>>) -> Result<(), JsValue> {
    let (doc, palette_el, board_el) = {
        let s = state.borrow();
        (s.document.clone(), s.palette_el.clone(), s.board_el.clone())
    };

    // Swatches and pixels are rebuilt on every regenerate, so listen on the
    // containers rather than on each element.
    listen(&state, &palette_el, "click", select_color_from_event)?;
    listen(&state, &board_el, "click", paint_pixel_from_event)?;

    if let Some(btn) = doc.get_element_by_id(CLEAR_BUTTON_ID) {
        let btn: HtmlElement = btn.dyn_into()?;
        listen(&state, &btn, "click", |s, _| {
            s.board.clear_board();
            render_cells(s)
        })?;
    }

    if let Some(btn) = doc.get_element_by_id(GENERATE_BUTTON_ID) {
        let btn: HtmlElement = btn.dyn_into()?;
        listen(&state, &btn, "click", |s, _| resize_from_input(s))?;
    }
    Ok(())
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    let window: Window = web_sys::window().ok_or("no window")?;
    let document = window.document().ok_or("no document")?;
    let cfg = window
        .location()
        .search()
        .map(|s| LaunchConfig::from_query(&s))
        .unwrap_or_default();
    init_logging(cfg.log_level);

    let seed = cfg.seed.unwrap_or_else(entropy_seed);
    let mut generator = PaletteGenerator::from_seed(seed);
    let palette = generator.generate().map_err(to_js)?;
    log::info!("palette seeded with {seed}");

    let palette_el = find_element(&document, PALETTE_ID)?;
    let board_el = find_element(&document, BOARD_ID)?;
    let state = Rc::new(RefCell::new(State {
        window,
        document,
        palette_el,
        board_el,
        generator,
        board: PaintBoard::new(palette),
    }));

    STATE.with(|st| st.replace(Some(state.clone())));
    attach_ui(state.clone())?;
    render_all(&state.borrow())?;
    Ok(())
}

/// JSON view of the current board, palette and selection.
#[wasm_bindgen]
pub fn snapshot() -> Result<String, JsValue> {
    with_state(|s| serde_json::to_string(&s.board.snapshot()).map_err(to_js))
        .ok_or_else(not_started)?
}

/// Draw a new palette and reset to the initial board, as a page reload would.
#[wasm_bindgen(js_name = reloadPalette)]
pub fn reload_palette() -> Result<(), JsValue> {
    with_state(|s| {
        let palette = s.generator.generate().map_err(to_js)?;
        s.board = PaintBoard::new(palette);
        render_all(s)
    })
    .ok_or_else(not_started)?
}

/// Returns `false` when the index is rejected.
#[wasm_bindgen(js_name = selectColor)]
pub fn select_color(index: usize) -> Result<bool, JsValue> {
    with_state(|s| match s.board.select_color(index) {
        Ok(()) => render_selection(s).map(|_| true),
        Err(err) => {
            log::warn!("{err}");
            Ok(false)
        }
    })
    .ok_or_else(not_started)?
}

/// Returns `false` when the index is rejected.
#[wasm_bindgen(js_name = paintPixel)]
pub fn paint_pixel(index: usize) -> Result<bool, JsValue> {
    with_state(|s| match s.board.paint_pixel(index) {
        Ok(()) => render_cells(s).map(|_| true),
        Err(err) => {
            log::warn!("{err}");
            Ok(false)
        }
    })
    .ok_or_else(not_started)?
}

/// Returns the clamped size actually used.
#[wasm_bindgen(js_name = resizeBoard)]
pub fn resize_board(requested: f64) -> Result<usize, JsValue> {
    with_state(|s| {
        // NaN saturates to 0 and so clamps to the minimum.
        let size = s.board.resize_board(requested as i64);
        render_board(s).map(|_| size)
    })
    .ok_or_else(not_started)?
}

#[wasm_bindgen(js_name = clearBoard)]
pub fn clear_board() -> Result<(), JsValue> {
    with_state(|s| {
        s.board.clear_board();
        render_cells(s)
    })
    .ok_or_else(not_started)?
}
