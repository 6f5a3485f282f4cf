use std::collections::HashSet;

use pixel_core::{Color, PaletteGenerator};

#[test]
fn test_palette_shape() {
    let mut generator = PaletteGenerator::from_seed(7);
    for _ in 0..200 {
        let palette = generator.generate().unwrap();
        assert_eq!(palette.len(), 4);
        assert_eq!(palette[0], Color::BLACK);
        let distinct: HashSet<Color> = palette.iter().collect();
        assert_eq!(distinct.len(), 4);
        assert!(palette.iter().all(|c| c != Color::WHITE));
    }
}

#[test]
fn test_consecutive_palettes_differ() {
    let mut generator = PaletteGenerator::from_seed(2024);
    let mut previous = generator.generate().unwrap();
    for _ in 0..100 {
        let current = generator.generate().unwrap();
        assert_ne!(current, previous);
        previous = current;
    }
}

#[test]
fn test_reloads_with_fresh_seeds_differ() {
    let palettes: Vec<_> = (0..20u64)
        .map(|seed| PaletteGenerator::from_seed(seed).generate().unwrap())
        .collect();
    for pair in palettes.windows(2) {
        assert_ne!(pair[0], pair[1]);
    }
}

#[test]
fn test_same_seed_same_palette() {
    let a = PaletteGenerator::from_seed(99).generate().unwrap();
    let b = PaletteGenerator::from_seed(99).generate().unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_order_is_stable() {
    let palette = PaletteGenerator::from_seed(3).generate().unwrap();
    let first: Vec<Color> = palette.iter().collect();
    let second: Vec<Color> = palette.iter().collect();
    assert_eq!(first, second);
    assert_eq!(palette.colors().to_vec(), first);
}
