//! Tests for ASCII preview rendering

#[cfg(test)]
mod tests {
    use spritewalk::io::ascii::{class_glyph, grid_to_ascii};
    use spritewalk::spatial::Grid;
    use spritewalk::spatial::cell::CellClass;
    use spritewalk::spatial::grid::Position;
    use std::collections::HashSet;

    // Tests each class renders distinctly
    // Verified by sharing a glyph between classes
    #[test]
    fn test_each_class_has_a_distinct_glyph() {
        let glyphs: HashSet<char> = CellClass::ALL.into_iter().map(class_glyph).collect();
        assert_eq!(glyphs.len(), CellClass::ALL.len());
    }

    #[test]
    fn test_glyph_assignments_are_stable() {
        assert_eq!(class_glyph(CellClass::Empty), ' ');
        assert_eq!(class_glyph(CellClass::Filled), '.');
        assert_eq!(class_glyph(CellClass::Border), 'x');
        assert_eq!(class_glyph(CellClass::Secondary), 'o');
        assert_eq!(class_glyph(CellClass::Tertiary), '*');
    }

    // Tests rows render as newline-terminated lines
    // Verified by dropping the final newline
    #[test]
    fn test_grid_renders_row_per_line() {
        let mut grid = Grid::new(2, 3);
        grid.set_class(Position::new(0, 0), CellClass::Filled);
        grid.set_class(Position::new(0, 1), CellClass::Border);
        grid.set_class(Position::new(1, 2), CellClass::Secondary);

        assert_eq!(grid_to_ascii(&grid), ".x \n  o\n");
    }

    #[test]
    fn test_ascii_dimensions_track_the_grid() {
        let grid = Grid::new(4, 7);
        let text = grid_to_ascii(&grid);

        assert_eq!(text.lines().count(), 4);
        assert!(text.lines().all(|line| line.len() == 7));
    }
}
