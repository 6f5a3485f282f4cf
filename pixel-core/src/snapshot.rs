use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::constants::PALETTE_LEN;

/// Read-only view of a [`PaintBoard`](crate::PaintBoard) handed to the
/// renderer. Changing it has no effect on the board it came from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub palette: [Color; PALETTE_LEN],
    /// Index of the selected palette entry.
    pub selected: usize,
    pub size: usize,
    /// Row-major cell colors, `size * size` long.
    pub cells: Vec<Color>,
}

impl BoardSnapshot {
    /// Cells grouped into rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Color]> {
        self.cells.chunks(self.size.max(1))
    }
}
