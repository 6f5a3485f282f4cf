use pixel_core::Color;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement};

use crate::constants::{COLOR_CLASS, INDEX_ATTR, PIXEL_CLASS, ROW_CLASS, SELECTED_CLASS};
use crate::state::State;

fn set_background(el: &Element, color: Color) -> Result<(), JsValue> {
    let el: &HtmlElement = el
        .dyn_ref()
        .ok_or_else(|| JsValue::from_str("element is not an HtmlElement"))?;
    el.style().set_property("background-color", &color.to_string())
}

fn make_div(document: &Document, class: &str) -> Result<Element, JsValue> {
    let el = document.create_element("div")?;
    el.set_class_name(class);
    Ok(el)
}

/// Rebuild the palette swatches, marking the selected one.
pub fn render_palette(state: &State) -> Result<(), JsValue> {
    state.palette_el.set_inner_html("");
    let selected = state.board.selection();
    for (i, color) in state.board.palette().iter().enumerate() {
        let el = make_div(&state.document, COLOR_CLASS)?;
        el.set_attribute(INDEX_ATTR, &i.to_string())?;
        if i == selected {
            el.class_list().add_1(SELECTED_CLASS)?;
        }
        set_background(&el, color)?;
        state.palette_el.append_child(&el)?;
    }
    Ok(())
}

/// Move the `selected` marker without rebuilding the swatches.
pub fn render_selection(state: &State) -> Result<(), JsValue> {
    let swatches = state.palette_el.children();
    let selected = state.board.selection();
    for i in 0..swatches.length() {
        if let Some(el) = swatches.item(i) {
            el.class_list()
                .toggle_with_force(SELECTED_CLASS, i as usize == selected)?;
        }
    }
    Ok(())
}

/// Rebuild every pixel, one row element per board row.
pub fn render_board(state: &State) -> Result<(), JsValue> {
    state.board_el.set_inner_html("");
    let snap = state.board.snapshot();
    for (r, row) in snap.rows().enumerate() {
        let row_el = make_div(&state.document, ROW_CLASS)?;
        for (c, &color) in row.iter().enumerate() {
            let el = make_div(&state.document, PIXEL_CLASS)?;
            el.set_attribute(INDEX_ATTR, &(r * snap.size + c).to_string())?;
            set_background(&el, color)?;
            row_el.append_child(&el)?;
        }
        state.board_el.append_child(&row_el)?;
    }
    Ok(())
}

/// Refresh a single pixel element from the board.
pub fn render_cell(state: &State, el: &Element, index: usize) -> Result<(), JsValue> {
    match state.board.cell(index) {
        Some(color) => set_background(el, color),
        None => Ok(()),
    }
}

/// Repaint every existing pixel in place; used after clearing.
pub fn render_cells(state: &State) -> Result<(), JsValue> {
    let pixels = state.board_el.get_elements_by_class_name(PIXEL_CLASS);
    for i in 0..pixels.length() {
        if let Some(el) = pixels.item(i)
            && let Some(index) = element_index(&el)
        {
            render_cell(state, &el, index)?;
        }
    }
    Ok(())
}

pub fn render_all(state: &State) -> Result<(), JsValue> {
    render_palette(state)?;
    render_board(state)
}

/// The `data-index` carried by a generated swatch or pixel.
pub fn element_index(el: &Element) -> Option<usize> {
    el.get_attribute(INDEX_ATTR)?.parse().ok()
}
