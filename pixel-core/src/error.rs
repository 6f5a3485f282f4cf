use std::fmt;

use thiserror::Error;

/// Which index space a rejected index belonged to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IndexKind {
    Color,
    Cell,
}

impl fmt::Display for IndexKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndexKind::Color => write!(f, "color"),
            IndexKind::Cell => write!(f, "cell"),
        }
    }
}

/// Rejections raised by the painting core. None of them leave partial effects.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PaintError {
    #[error("{kind} index {index} out of range 0..{len}")]
    InvalidIndex {
        kind: IndexKind,
        index: usize,
        len: usize,
    },
    #[error("no distinct palette color found after {attempts} attempts")]
    ConfigurationExhausted { attempts: usize },
    #[error("invalid palette: {0}")]
    InvalidPalette(&'static str),
    #[error("invalid color literal `{0}`")]
    InvalidColor(String),
}
