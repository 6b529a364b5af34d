//! Tests for acceptance policies over finished grids

#[cfg(test)]
mod tests {
    use spritewalk::generator::ValidatorPolicy;
    use spritewalk::generator::validator::RatioBound;
    use spritewalk::spatial::Grid;
    use spritewalk::spatial::cell::CellClass;
    use spritewalk::spatial::grid::Position;

    const QUARTER: ValidatorPolicy = ValidatorPolicy {
        secondary: Some(RatioBound {
            min_fraction: 0.0,
            max_fraction: 0.25,
        }),
        max_dims: None,
    };

    fn grid_with(filled: usize, secondary: usize) -> Grid {
        let mut grid = Grid::new(1, filled + secondary);
        for col in 0..filled {
            grid.set_class(Position::new(0, col), CellClass::Filled);
        }
        for col in filled..filled + secondary {
            grid.set_class(Position::new(0, col), CellClass::Secondary);
        }
        grid
    }

    #[test]
    fn test_accept_all_accepts_anything() {
        assert!(ValidatorPolicy::ACCEPT_ALL.accept(&Grid::new(1, 1)));
        assert!(ValidatorPolicy::ACCEPT_ALL.accept(&grid_with(100, 100)));
    }

    // Tests a grid with no interior is rejected
    // Verified by accepting zero secondary cells
    #[test]
    fn test_zero_secondary_is_rejected() {
        let grid = grid_with(20, 0);
        assert!(
            !QUARTER.accept(&grid),
            "a bounded policy should reject grids that enclosed nothing"
        );
    }

    // Tests the ratio bound is inclusive
    // Verified by rejecting the exact quarter
    #[test]
    fn test_ratio_upper_bound_is_inclusive() {
        assert!(QUARTER.accept(&grid_with(20, 5)), "a quarter exactly should pass");
        assert!(!QUARTER.accept(&grid_with(20, 6)), "past a quarter should fail");
    }

    #[test]
    fn test_unbounded_ratio_only_requires_presence() {
        let policy = ValidatorPolicy {
            secondary: Some(RatioBound {
                min_fraction: 0.0,
                max_fraction: f64::INFINITY,
            }),
            max_dims: None,
        };

        assert!(policy.accept(&grid_with(1, 100)));
        assert!(!policy.accept(&grid_with(100, 0)));
    }

    // Tests oversized grids are rejected
    // Verified by comparing against the wrong axis
    #[test]
    fn test_dimension_cap_rejects_oversized_grids() {
        let policy = ValidatorPolicy {
            secondary: None,
            max_dims: Some((2, 5)),
        };

        assert!(policy.accept(&Grid::new(2, 5)), "the cap itself should pass");
        assert!(!policy.accept(&Grid::new(3, 5)), "one extra row should fail");
        assert!(!policy.accept(&Grid::new(2, 6)), "one extra column should fail");
    }

    #[test]
    fn test_acceptance_is_deterministic() {
        let grid = grid_with(20, 5);
        let first = QUARTER.accept(&grid);
        let second = QUARTER.accept(&grid);

        assert_eq!(first, second, "repeat verdicts on one grid should agree");
    }
}
