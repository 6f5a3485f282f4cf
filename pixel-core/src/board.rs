use std::num::IntErrorKind;

use crate::color::Color;
use crate::constants::{DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use crate::error::{IndexKind, PaintError};
use crate::palette::Palette;
use crate::snapshot::BoardSnapshot;

/// Clamp a requested board edge into `[MIN_BOARD_SIZE, MAX_BOARD_SIZE]`.
pub fn clamp_board_size(requested: i64) -> usize {
    requested.clamp(MIN_BOARD_SIZE as i64, MAX_BOARD_SIZE as i64) as usize
}

/// Interpret user-typed board size text. Anything that is not an integer
/// clamps to the minimum; integers too large for `i64` clamp to the maximum.
pub fn parse_board_size(input: &str) -> usize {
    match input.trim().parse::<i64>() {
        Ok(n) => clamp_board_size(n),
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => MAX_BOARD_SIZE,
        Err(_) => MIN_BOARD_SIZE,
    }
}

/// Row-major index of `(row, col)` on a `size`-wide board.
pub fn cell_index(row: usize, col: usize, size: usize) -> Option<usize> {
    (row < size && col < size).then(|| row * size + col)
}

/// Inverse of [`cell_index`].
pub fn cell_position(index: usize, size: usize) -> Option<(usize, usize)> {
    (index < size * size).then(|| (index / size, index % size))
}

/// Indices of the up to eight cells touching `index`, edges and corners
/// included, in row-major order.
pub fn neighbors(index: usize, size: usize) -> Vec<usize> {
    let Some((row, col)) = cell_position(index, size) else {
        return Vec::new();
    };
    let mut out = Vec::with_capacity(8);
    for dr in -1i64..=1 {
        for dc in -1i64..=1 {
            if dr == 0 && dc == 0 {
                continue;
            }
            let (r, c) = (row as i64 + dr, col as i64 + dc);
            if r < 0 || c < 0 {
                continue;
            }
            if let Some(i) = cell_index(r as usize, c as usize, size) {
                out.push(i);
            }
        }
    }
    out
}

/// The painting state machine: palette, selection and the cell grid.
///
/// All mutation goes through [`select_color`](Self::select_color),
/// [`paint_pixel`](Self::paint_pixel), [`resize_board`](Self::resize_board)
/// and [`clear_board`](Self::clear_board). Rejected commands leave every
/// field untouched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PaintBoard {
    palette: Palette,
    selection: usize,
    size: usize,
    cells: Vec<Color>,
}

impl PaintBoard {
    /// Initial state for a fresh load: black selected, default-size white board.
    pub fn new(palette: Palette) -> Self {
        PaintBoard {
            palette,
            selection: 0,
            size: DEFAULT_BOARD_SIZE,
            cells: vec![Color::WHITE; DEFAULT_BOARD_SIZE * DEFAULT_BOARD_SIZE],
        }
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn selection(&self) -> usize {
        self.selection
    }

    pub fn selected_color(&self) -> Color {
        self.palette[self.selection]
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn cells(&self) -> &[Color] {
        &self.cells
    }

    pub fn cell(&self, index: usize) -> Option<Color> {
        self.cells.get(index).copied()
    }

    pub fn cell_at(&self, row: usize, col: usize) -> Option<Color> {
        cell_index(row, col, self.size).and_then(|i| self.cell(i))
    }

    /// True when no cell holds paint.
    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(|&c| c == Color::WHITE)
    }

    pub fn select_color(&mut self, index: usize) -> Result<(), PaintError> {
        if self.palette.get(index).is_none() {
            log::warn!("rejected color selection {index}");
            return Err(PaintError::InvalidIndex {
                kind: IndexKind::Color,
                index,
                len: self.palette.len(),
            });
        }
        self.selection = index;
        Ok(())
    }

    /// Paint exactly one cell with the selected color.
    pub fn paint_pixel(&mut self, index: usize) -> Result<(), PaintError> {
        let color = self.selected_color();
        let len = self.cells.len();
        match self.cells.get_mut(index) {
            Some(cell) => {
                *cell = color;
                Ok(())
            }
            None => {
                log::warn!("rejected paint at cell {index} (board has {len})");
                Err(PaintError::InvalidIndex {
                    kind: IndexKind::Cell,
                    index,
                    len,
                })
            }
        }
    }

    /// Replace the board with a blank one of the clamped size. Returns the
    /// size actually used.
    pub fn resize_board(&mut self, requested: i64) -> usize {
        let size = clamp_board_size(requested);
        if size as i64 != requested {
            log::debug!("board size {requested} clamped to {size}");
        }
        self.size = size;
        self.cells = vec![Color::WHITE; size * size];
        size
    }

    /// [`resize_board`](Self::resize_board) from raw input text.
    pub fn resize_board_from_input(&mut self, input: &str) -> usize {
        let size = parse_board_size(input);
        self.resize_board(size as i64)
    }

    pub fn clear_board(&mut self) {
        self.cells.fill(Color::WHITE);
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            palette: *self.palette.colors(),
            selected: self.selection,
            size: self.size,
            cells: self.cells.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_mapping_round_trips_at_the_corners() {
        assert_eq!(cell_index(0, 0, 5), Some(0));
        assert_eq!(cell_index(0, 4, 5), Some(4));
        assert_eq!(cell_index(1, 0, 5), Some(5));
        assert_eq!(cell_index(4, 4, 5), Some(24));
        assert_eq!(cell_index(5, 0, 5), None);
        assert_eq!(cell_index(0, 5, 5), None);
        assert_eq!(cell_position(24, 5), Some((4, 4)));
        assert_eq!(cell_position(25, 5), None);
    }

    #[test]
    fn neighbors_of_interior_edge_and_corner() {
        assert_eq!(neighbors(6, 5), vec![0, 1, 2, 5, 7, 10, 11, 12]);
        assert_eq!(neighbors(0, 5), vec![1, 5, 6]);
        assert_eq!(neighbors(4, 5), vec![3, 8, 9]);
        assert_eq!(neighbors(24, 5), vec![18, 19, 23]);
        assert_eq!(neighbors(10, 5), vec![5, 6, 11, 15, 16]);
        assert!(neighbors(25, 5).is_empty());
    }

    #[test]
    fn parse_board_size_falls_back_to_minimum() {
        assert_eq!(parse_board_size("10"), 10);
        assert_eq!(parse_board_size(" 12 "), 12);
        assert_eq!(parse_board_size(""), MIN_BOARD_SIZE);
        assert_eq!(parse_board_size("abc"), MIN_BOARD_SIZE);
        assert_eq!(parse_board_size("7.5"), MIN_BOARD_SIZE);
        assert_eq!(parse_board_size("-3"), MIN_BOARD_SIZE);
        assert_eq!(parse_board_size("0"), MIN_BOARD_SIZE);
        assert_eq!(parse_board_size("99999999999999999999999"), MAX_BOARD_SIZE);
        assert_eq!(parse_board_size("-99999999999999999999999"), MIN_BOARD_SIZE);
    }

    #[test]
    fn clamp_extremes() {
        assert_eq!(clamp_board_size(i64::MIN), MIN_BOARD_SIZE);
        assert_eq!(clamp_board_size(i64::MAX), MAX_BOARD_SIZE);
    }
}
