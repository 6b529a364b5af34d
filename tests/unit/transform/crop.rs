//! Tests for cropping grids to their occupied bounding box

#[cfg(test)]
mod tests {
    use spritewalk::GenerationError;
    use spritewalk::spatial::Grid;
    use spritewalk::spatial::cell::CellClass;
    use spritewalk::spatial::grid::Position;
    use spritewalk::transform::crop::crop;

    // Tests the box tightens to occupied cells
    // Verified by keeping one empty margin row
    #[test]
    fn test_crop_shrinks_to_the_bounding_box() {
        let mut grid = Grid::new(5, 5);
        grid.set_class(Position::new(1, 1), CellClass::Filled);
        grid.set_class(Position::new(3, 2), CellClass::Filled);

        let cropped = crop(&grid).expect("Failed to crop");

        assert_eq!(cropped.rows(), 3);
        assert_eq!(cropped.cols(), 2);
        assert_eq!(cropped.class_at(Position::new(0, 0)), Some(CellClass::Filled));
        assert_eq!(cropped.class_at(Position::new(2, 1)), Some(CellClass::Filled));
    }

    // Tests cropping an already-tight grid changes nothing
    // Verified by trimming one extra row
    #[test]
    fn test_crop_is_idempotent() {
        let mut grid = Grid::new(6, 6);
        grid.set_class(Position::new(2, 2), CellClass::Filled);
        grid.set_class(Position::new(4, 4), CellClass::Secondary);

        let once = crop(&grid).expect("Failed to crop");
        let twice = crop(&once).expect("Failed to crop again");

        assert_eq!(once, twice, "cropping a tight grid should be the identity");
    }

    // Tests every non-empty class anchors the box
    // Verified by anchoring on Filled cells only
    #[test]
    fn test_all_non_empty_classes_anchor_the_box() {
        let mut grid = Grid::new(5, 5);
        grid.set_class(Position::new(2, 2), CellClass::Filled);
        grid.set_class(Position::new(0, 4), CellClass::Border);
        grid.set_class(Position::new(4, 0), CellClass::Tertiary);

        let cropped = crop(&grid).expect("Failed to crop");

        assert_eq!(cropped.rows(), 5, "the border and tertiary cells should hold the box open");
        assert_eq!(cropped.cols(), 5);
    }

    #[test]
    fn test_crop_preserves_depth() {
        let mut grid = Grid::new(4, 4);
        grid.set_class(Position::new(1, 1), CellClass::Filled);
        if let Some(cell) = grid.get_mut(Position::new(1, 1)) {
            cell.depth = 9;
        }

        let cropped = crop(&grid).expect("Failed to crop");

        assert!(
            cropped.get(Position::new(0, 0)).is_some_and(|cell| cell.depth == 9),
            "depth should travel with the cell"
        );
    }

    // Tests the all-empty grid fails fast
    // Verified by returning a zero-sized grid
    #[test]
    fn test_crop_rejects_an_all_empty_grid() {
        let grid = Grid::new(3, 3);
        let result = crop(&grid);

        assert!(matches!(
            result,
            Err(GenerationError::EmptyGridOperation { operation: "crop" })
        ));
    }
}
