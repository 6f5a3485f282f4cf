//! Painting state machine for the pixel art board: palette generation,
//! color selection, single-cell painting, resizing and clearing.

pub mod board;
pub mod color;
pub mod constants;
pub mod error;
pub mod palette;
pub mod snapshot;

pub use board::{
    PaintBoard, cell_index, cell_position, clamp_board_size, neighbors, parse_board_size,
};
pub use color::Color;
pub use error::{IndexKind, PaintError};
pub use palette::{Palette, PaletteGenerator, SeededPaletteGenerator};
pub use snapshot::BoardSnapshot;
