/// Board and palette limits shared by the core and the web front end.
/// Smallest board edge accepted; smaller requests clamp up to it.
pub const MIN_BOARD_SIZE: usize = 5;
/// Largest board edge accepted; larger requests clamp down to it.
pub const MAX_BOARD_SIZE: usize = 50;
/// Board edge used on every fresh load.
pub const DEFAULT_BOARD_SIZE: usize = 5;
/// Number of selectable colors, black included.
pub const PALETTE_LEN: usize = 4;
/// Random draws allowed per palette slot before generation gives up.
pub const MAX_COLOR_ATTEMPTS: usize = 64;
