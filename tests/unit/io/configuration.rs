//! Tests for generation constants and defaults

#[cfg(test)]
mod tests {
    use pipetile::io::configuration::{
        DECIDED_ENTROPY_GLYPH, DEFAULT_HEIGHT, DEFAULT_PATTERN_COUNT, DEFAULT_WIDTH,
        ENTROPY_RADIX, MAX_GRID_DIMENSION, UNCONSTRAINED_ENTROPY_GLYPH,
        UNDECIDED_GLYPH,
    };
    use pipetile::spatial::tiles::Palette;

    // Tests default board size and pattern count
    // Verified by changing constant values
    #[test]
    fn test_default_values() {
        assert_eq!(DEFAULT_WIDTH, 10);
        assert_eq!(DEFAULT_HEIGHT, 10);
        assert_eq!(DEFAULT_PATTERN_COUNT, 1);
    }

    // Tests defaults fit under the dimension limit
    // Verified by lowering the limit below the defaults
    #[test]
    fn test_defaults_within_limit() {
        assert!(DEFAULT_WIDTH <= MAX_GRID_DIMENSION);
        assert!(DEFAULT_HEIGHT <= MAX_GRID_DIMENSION);
    }

    // Tests placeholder glyphs never collide with palette glyphs
    // Verified by using a space as the undecided glyph
    #[test]
    fn test_placeholders_distinct_from_palettes() {
        for palette in [Palette::double_line(), Palette::light_line()] {
            assert_eq!(palette.position_of(UNDECIDED_GLYPH), None);
        }
        assert_ne!(DECIDED_ENTROPY_GLYPH, UNCONSTRAINED_ENTROPY_GLYPH);
    }

    // Tests a full palette count fits one entropy digit
    // Verified by switching to decimal radix
    #[test]
    fn test_entropy_radix_fits_palette() {
        let palette_size = u32::try_from(Palette::double_line().len()).unwrap_or(u32::MAX);
        assert!(palette_size < ENTROPY_RADIX);
    }
}
