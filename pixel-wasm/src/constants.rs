/// DOM hooks the host page provides. Ids and classes match the page markup.
pub const PALETTE_ID: &str = "color-palette";
pub const BOARD_ID: &str = "pixel-board";
pub const CLEAR_BUTTON_ID: &str = "clear-board";
pub const SIZE_INPUT_ID: &str = "board-size";
pub const GENERATE_BUTTON_ID: &str = "generate-board";

pub const COLOR_CLASS: &str = "color";
pub const SELECTED_CLASS: &str = "selected";
pub const PIXEL_CLASS: &str = "pixel";
pub const ROW_CLASS: &str = "board-row";
/// Attribute carrying a palette or cell index on generated elements.
pub const INDEX_ATTR: &str = "data-index";

/// Shown when the board size field is submitted empty.
pub const EMPTY_SIZE_ALERT: &str = "Board inválido!";
