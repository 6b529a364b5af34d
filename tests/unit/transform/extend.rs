//! Tests for growing grids with centered padding

#[cfg(test)]
mod tests {
    use spritewalk::spatial::Grid;
    use spritewalk::spatial::cell::CellClass;
    use spritewalk::spatial::grid::Position;
    use spritewalk::transform::extend::extend;

    // Tests content lands at half the growth offset
    // Verified by anchoring content at the origin
    #[test]
    fn test_extend_centers_the_original_content() {
        let grid = Grid::filled_with(2, 2, CellClass::Filled);
        let extended = extend(&grid, 2);

        assert_eq!(extended.rows(), 4);
        assert_eq!(extended.cols(), 4);
        assert_eq!(extended.class_at(Position::new(0, 0)), Some(CellClass::Empty));
        assert_eq!(extended.class_at(Position::new(1, 1)), Some(CellClass::Filled));
        assert_eq!(extended.class_at(Position::new(2, 2)), Some(CellClass::Filled));
        assert_eq!(extended.class_at(Position::new(3, 3)), Some(CellClass::Empty));
    }

    #[test]
    fn test_odd_growth_floors_the_offset() {
        let grid = Grid::filled_with(1, 1, CellClass::Filled);
        let extended = extend(&grid, 3);

        assert_eq!(extended.rows(), 4);
        assert_eq!(
            extended.class_at(Position::new(1, 1)),
            Some(CellClass::Filled),
            "a growth of three should offset content by one"
        );
    }

    #[test]
    fn test_zero_growth_is_the_identity() {
        let mut grid = Grid::new(3, 3);
        grid.set_class(Position::new(1, 2), CellClass::Secondary);

        assert_eq!(extend(&grid, 0), grid);
    }

    // Tests padding starts empty
    // Verified by copying edge cells outward
    #[test]
    fn test_padding_cells_start_empty() {
        let grid = Grid::filled_with(2, 2, CellClass::Border);
        let extended = extend(&grid, 4);

        let tally = extended.tally();
        assert_eq!(tally.border, 4, "original cells should survive unchanged");
        assert_eq!(tally.empty, 32, "all new cells should be empty");
    }
}
