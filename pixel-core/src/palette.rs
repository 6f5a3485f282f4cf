use std::ops::Index;

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::constants::{MAX_COLOR_ATTEMPTS, PALETTE_LEN};
use crate::error::PaintError;

/// The ordered set of selectable colors.
///
/// Slot 0 is always black. The remaining slots are distinct from each other,
/// from black and from white. The order never changes once built.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "[Color; PALETTE_LEN]", into = "[Color; PALETTE_LEN]")]
pub struct Palette([Color; PALETTE_LEN]);

impl Palette {
    /// Validate an arbitrary color array against the palette rules.
    pub fn try_from_colors(colors: [Color; PALETTE_LEN]) -> Result<Self, PaintError> {
        if colors[0] != Color::BLACK {
            return Err(PaintError::InvalidPalette("first entry must be black"));
        }
        for (i, c) in colors.iter().enumerate().skip(1) {
            if c.is_reserved() {
                return Err(PaintError::InvalidPalette(
                    "entries after the first may not be black or white",
                ));
            }
            if colors[1..i].contains(c) {
                return Err(PaintError::InvalidPalette("entries must be distinct"));
            }
        }
        Ok(Palette(colors))
    }

    pub fn colors(&self) -> &[Color; PALETTE_LEN] {
        &self.0
    }

    pub fn get(&self, index: usize) -> Option<Color> {
        self.0.get(index).copied()
    }

    pub fn len(&self) -> usize {
        PALETTE_LEN
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn iter(&self) -> impl Iterator<Item = Color> + '_ {
        self.0.iter().copied()
    }
}

impl Index<usize> for Palette {
    type Output = Color;

    fn index(&self, index: usize) -> &Color {
        &self.0[index]
    }
}

impl TryFrom<[Color; PALETTE_LEN]> for Palette {
    type Error = PaintError;

    fn try_from(colors: [Color; PALETTE_LEN]) -> Result<Self, Self::Error> {
        Palette::try_from_colors(colors)
    }
}

impl From<Palette> for [Color; PALETTE_LEN] {
    fn from(p: Palette) -> Self {
        p.0
    }
}

/// Builds palettes from an injected random source.
pub struct PaletteGenerator<R: RngCore> {
    rng: R,
}

/// Generator over the standard seedable RNG, as used by the web front end.
pub type SeededPaletteGenerator = PaletteGenerator<StdRng>;

impl SeededPaletteGenerator {
    /// Deterministic generator; the same seed always yields the same palettes.
    pub fn from_seed(seed: u64) -> Self {
        PaletteGenerator::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: RngCore> PaletteGenerator<R> {
    pub fn new(rng: R) -> Self {
        PaletteGenerator { rng }
    }

    /// Produce a fresh palette: black first, then three random colors drawn
    /// over the whole 24-bit RGB space.
    pub fn generate(&mut self) -> Result<Palette, PaintError> {
        let mut colors = [Color::BLACK; PALETTE_LEN];
        for slot in 1..PALETTE_LEN {
            colors[slot] = self.draw_distinct(&colors[..slot])?;
        }
        let palette = Palette::try_from_colors(colors)?;
        log::debug!(
            "generated palette [{}]",
            palette
                .iter()
                .map(|c| c.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        );
        Ok(palette)
    }

    fn draw_distinct(&mut self, taken: &[Color]) -> Result<Color, PaintError> {
        for _ in 0..MAX_COLOR_ATTEMPTS {
            let c = Color::from_u24(self.rng.random_range(0..=0xff_ffff));
            if !c.is_reserved() && !taken.contains(&c) {
                return Ok(c);
            }
        }
        Err(PaintError::ConfigurationExhausted {
            attempts: MAX_COLOR_ATTEMPTS,
        })
    }
}
