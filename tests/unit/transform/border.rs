//! Tests for outlining filled regions with border cells

#[cfg(test)]
mod tests {
    use spritewalk::spatial::Grid;
    use spritewalk::spatial::cell::CellClass;
    use spritewalk::spatial::grid::{Direction, Position};
    use spritewalk::transform::border::add_borders;

    // Tests bordering pads before marking
    // Verified by marking without headroom
    #[test]
    fn test_bordering_grows_the_grid_by_two() {
        let grid = Grid::filled_with(3, 3, CellClass::Filled);
        let bordered = add_borders(&grid);

        assert_eq!(bordered.rows(), 5);
        assert_eq!(bordered.cols(), 5);
    }

    // Tests an isolated cell gains a four-cell outline
    // Verified by outlining diagonals too
    #[test]
    fn test_single_cell_gets_a_cross_outline() {
        let grid = Grid::filled_with(1, 1, CellClass::Filled);
        let bordered = add_borders(&grid);

        assert_eq!(bordered.class_at(Position::new(1, 1)), Some(CellClass::Filled));
        assert_eq!(bordered.class_at(Position::new(0, 1)), Some(CellClass::Border));
        assert_eq!(bordered.class_at(Position::new(2, 1)), Some(CellClass::Border));
        assert_eq!(bordered.class_at(Position::new(1, 0)), Some(CellClass::Border));
        assert_eq!(bordered.class_at(Position::new(1, 2)), Some(CellClass::Border));
        assert_eq!(
            bordered.class_at(Position::new(0, 0)),
            Some(CellClass::Empty),
            "diagonal neighbors should stay empty"
        );
    }

    #[test]
    fn test_filled_cells_are_never_overwritten() {
        let grid = Grid::filled_with(2, 2, CellClass::Filled);
        let bordered = add_borders(&grid);

        assert_eq!(bordered.tally().filled, 4, "the filled block should survive intact");
    }

    // Tests non-filled neighbors convert, whatever their class
    // Verified by converting empty neighbors only
    #[test]
    fn test_secondary_neighbors_convert_to_border() {
        let mut grid = Grid::new(1, 2);
        grid.set_class(Position::new(0, 0), CellClass::Filled);
        grid.set_class(Position::new(0, 1), CellClass::Secondary);

        let bordered = add_borders(&grid);

        assert_eq!(
            bordered.class_at(Position::new(1, 2)),
            Some(CellClass::Border),
            "a secondary neighbor of a filled cell should become border"
        );
    }

    // Tests the outline seals every filled cell
    // Verified by skipping one direction
    #[test]
    fn test_no_filled_cell_touches_empty_after_bordering() {
        let mut grid = Grid::new(4, 4);
        grid.set_class(Position::new(0, 0), CellClass::Filled);
        grid.set_class(Position::new(1, 1), CellClass::Filled);
        grid.set_class(Position::new(1, 2), CellClass::Filled);
        grid.set_class(Position::new(3, 3), CellClass::Filled);

        let bordered = add_borders(&grid);

        for (position, cell) in bordered.iter() {
            if cell.class != CellClass::Filled {
                continue;
            }
            for direction in Direction::ALL {
                let Some(neighbor) = direction.step(position) else {
                    continue;
                };
                if let Some(class) = bordered.class_at(neighbor) {
                    assert_ne!(
                        class,
                        CellClass::Empty,
                        "filled cell {position:?} still touches empty at {neighbor:?}"
                    );
                }
            }
        }
    }
}
