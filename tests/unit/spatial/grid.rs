//! Tests for the grid, cell states and neighbour arithmetic

#[cfg(test)]
mod tests {
    use pipetile::AlgorithmError;
    use pipetile::algorithm::bitset::TileBitset;
    use pipetile::io::configuration::MAX_GRID_DIMENSION;
    use pipetile::spatial::grid::{Cell, Entropy, Grid, Position, Superposition};
    use pipetile::spatial::tiles::{Direction, Sides, TileVariant};

    fn blank() -> TileVariant {
        TileVariant::new(' ', Sides::new(0, 0, 0, 0))
    }

    fn set_of(capacity: usize, tiles: &[usize]) -> TileBitset {
        let mut set = TileBitset::new(capacity);
        for &tile in tiles {
            set.insert(tile);
        }
        set
    }

    // Tests a new grid has the requested shape with every cell undecided
    // Verified by swapping rows and columns in the constructor
    #[test]
    fn test_new_grid_shape() {
        let Ok(grid) = Grid::new(4, 3) else {
            unreachable!("4x3 is a valid grid");
        };
        assert_eq!(grid.width(), 4);
        assert_eq!(grid.height(), 3);
        assert_eq!(grid.dimensions(), (3, 4));
        assert_eq!(grid.len(), 12);
        assert!(!grid.is_empty());
        assert_eq!(grid.decided_count(), 0);
        assert!(!grid.is_complete());

        for (_, cell) in grid.iter() {
            assert!(!cell.is_decided());
            assert_eq!(cell.entropy(), Some(Entropy::Unconstrained));
        }
    }

    // Tests zero-area and oversize grids are rejected
    // Verified by removing the zero check
    #[test]
    fn test_invalid_dimensions_rejected() {
        assert!(matches!(
            Grid::new(0, 5),
            Err(AlgorithmError::InvalidParameter {
                parameter: "width",
                ..
            })
        ));
        assert!(matches!(
            Grid::new(5, 0),
            Err(AlgorithmError::InvalidParameter {
                parameter: "height",
                ..
            })
        ));
        assert!(Grid::new(MAX_GRID_DIMENSION + 1, 1).is_err());
    }

    // Tests neighbours inside bounds and None past every edge
    // Verified by dropping the column bound check
    #[test]
    fn test_neighbor_bounds() {
        let Ok(grid) = Grid::new(3, 2) else {
            unreachable!("3x2 is a valid grid");
        };
        let corner = Position::new(0, 0);
        assert_eq!(grid.neighbor(corner, Direction::Up), None);
        assert_eq!(grid.neighbor(corner, Direction::Left), None);
        assert_eq!(
            grid.neighbor(corner, Direction::Right),
            Some(Position::new(0, 1))
        );
        assert_eq!(
            grid.neighbor(corner, Direction::Down),
            Some(Position::new(1, 0))
        );

        let far = Position::new(1, 2);
        assert_eq!(grid.neighbor(far, Direction::Right), None);
        assert_eq!(grid.neighbor(far, Direction::Down), None);
        assert_eq!(grid.neighbor(far, Direction::Up), Some(Position::new(0, 2)));
        assert_eq!(grid.neighbor(far, Direction::Left), Some(Position::new(1, 1)));
        assert!(grid.neighbor_cell(far, Direction::Right).is_none());
    }

    // Tests positions come back in row-major order
    // Verified by iterating columns in the outer loop
    #[test]
    fn test_positions_row_major() {
        let Ok(grid) = Grid::new(2, 2) else {
            unreachable!("2x2 is a valid grid");
        };
        let positions: Vec<Position> = grid.positions().collect();
        assert_eq!(
            positions,
            vec![
                Position::new(0, 0),
                Position::new(0, 1),
                Position::new(1, 0),
                Position::new(1, 1),
            ]
        );
        let iterated: Vec<Position> = grid.iter().map(|(p, _)| p).collect();
        assert_eq!(iterated, positions);
        assert!(Position::new(0, 5) < Position::new(1, 0));
    }

    // Tests a cell can be decided exactly once
    // Verified by allowing a decided cell to be overwritten
    #[test]
    fn test_decide_exactly_once() {
        let Ok(mut grid) = Grid::new(2, 1) else {
            unreachable!("2x1 is a valid grid");
        };
        let position = Position::new(0, 1);

        assert!(grid.decide(position, 0, blank()).is_ok());
        assert_eq!(grid.get(position).and_then(Cell::variant_index), Some(0));
        assert_eq!(grid.get(position).and_then(Cell::variant), Some(&blank()));
        assert_eq!(grid.get(position).and_then(Cell::entropy), None);
        assert_eq!(grid.decided_count(), 1);

        let second = grid.decide(position, 0, blank());
        assert!(matches!(second, Err(AlgorithmError::Computation { .. })));

        let outside = grid.decide(Position::new(3, 3), 0, blank());
        assert!(matches!(
            outside,
            Err(AlgorithmError::InvalidParameter {
                parameter: "position",
                ..
            })
        ));

        assert!(grid.decide(Position::new(0, 0), 0, blank()).is_ok());
        assert!(grid.is_complete());
    }

    // Tests constrain leaves decided cells untouched
    // Verified by removing the decided filter in constrain
    #[test]
    fn test_constrain_skips_decided_cells() {
        let Ok(mut grid) = Grid::new(2, 1) else {
            unreachable!("2x1 is a valid grid");
        };
        let decided = Position::new(0, 0);
        let open = Position::new(0, 1);
        assert!(grid.decide(decided, 0, blank()).is_ok());

        let superposition = Superposition::from_constraints([
            Some(TileBitset::all(3)),
            None,
            None,
            None,
        ]);
        grid.constrain(decided, superposition.clone());
        grid.constrain(open, superposition);

        assert!(grid.get(decided).is_some_and(Cell::is_decided));
        assert_eq!(
            grid.get(open).and_then(Cell::entropy),
            Some(Entropy::Options(3))
        );
    }

    // Tests the allowed set is the intersection of present directional sets
    // Verified by using union instead of intersection
    #[test]
    fn test_superposition_intersection() {
        let superposition = Superposition::from_constraints([
            Some(set_of(5, &[0, 1, 2])),
            None,
            Some(set_of(5, &[1, 2, 3])),
            Some(TileBitset::all(5)),
        ]);
        assert_eq!(superposition.allowed().to_vec(), vec![1, 2]);
        assert_eq!(superposition.entropy(), Entropy::Options(2));
        assert!(superposition.constraint(Direction::Right).is_none());
        assert_eq!(
            superposition.constraint(Direction::Up).map(TileBitset::to_vec),
            Some(vec![0, 1, 2])
        );
        assert!(!superposition.is_contradiction());
    }

    // Tests an empty directional set empties the allowed set
    // Verified by skipping empty sets during intersection
    #[test]
    fn test_empty_directional_set_is_contradiction() {
        let superposition = Superposition::from_constraints([
            Some(TileBitset::all(4)),
            Some(TileBitset::new(4)),
            Some(TileBitset::all(4)),
            Some(TileBitset::all(4)),
        ]);
        assert!(superposition.allowed().is_empty());
        assert_eq!(superposition.entropy(), Entropy::Options(0));
        assert!(superposition.is_contradiction());
    }

    // Tests no directional information is unconstrained, not zero options
    // Verified by reporting the allowed count for unconstrained cells
    #[test]
    fn test_unconstrained_distinct_from_contradiction() {
        let superposition = Superposition::from_constraints([None, None, None, None]);
        assert_eq!(superposition.entropy(), Entropy::Unconstrained);
        assert!(!superposition.is_contradiction());
        assert_eq!(Superposition::default(), superposition);

        assert!(Entropy::Options(0) < Entropy::Options(1));
        assert!(Entropy::Options(usize::MAX) < Entropy::Unconstrained);
        assert_eq!(Entropy::Options(4).options(), Some(4));
        assert_eq!(Entropy::Unconstrained.options(), None);
    }

    // Tests rows group cells top to bottom
    // Verified by iterating columns instead of rows
    #[test]
    fn test_rows_iteration() {
        let Ok(mut grid) = Grid::new(3, 2) else {
            unreachable!("3x2 is a valid grid");
        };
        assert!(grid.decide(Position::new(1, 0), 0, blank()).is_ok());

        let rows: Vec<Vec<bool>> = grid
            .rows()
            .map(|row| row.into_iter().map(Cell::is_decided).collect())
            .collect();
        assert_eq!(
            rows,
            vec![vec![false, false, false], vec![true, false, false]]
        );
    }
}
