use gol_perceptron::{Automaton, DefaultBackend, Error, Grid};

fn automaton() -> Automaton<DefaultBackend> {
    Automaton::default()
}

#[test]
fn all_dead_grid_stays_dead() {
    let engine = automaton();
    for (rows, cols) in [(1, 1), (1, 5), (2, 2), (3, 7), (8, 8)] {
        let grid = Grid::zeros(rows, cols).unwrap();
        let next = engine.step(&grid).unwrap();
        assert_eq!(next, grid, "{rows}x{cols}");
    }
}

#[test]
fn single_cell_neighbors_on_3x3_torus() {
    let grid = Grid::from_live_cells(3, 3, &[(0, 0)]).unwrap();
    let counts = automaton().neighbor_count(&grid).unwrap();

    assert_eq!(counts.get(0, 0), Some(0));
    for row in 0..3 {
        for col in 0..3 {
            if (row, col) != (0, 0) {
                assert_eq!(counts.get(row, col), Some(1), "cell ({row}, {col})");
            }
        }
    }
}

#[test]
fn reference_pattern_neighbor_counts() {
    let counts = automaton()
        .neighbor_count(&Grid::reference_pattern())
        .unwrap();

    let expected: Vec<Vec<u8>> = vec![
        vec![1, 2, 3, 2, 1, 0, 0, 0],
        vec![2, 2, 3, 1, 1, 0, 0, 0],
        vec![2, 3, 5, 3, 1, 0, 0, 0],
        vec![1, 2, 1, 1, 0, 0, 0, 0],
        vec![0, 1, 1, 1, 0, 0, 0, 0],
        vec![0; 8],
        vec![0; 8],
        vec![0; 8],
    ];
    assert_eq!(counts.to_rows(), expected);
}

#[test]
fn reference_pattern_first_generation() {
    let engine = automaton();
    let grid = Grid::reference_pattern();
    let counts = engine.neighbor_count(&grid).unwrap();
    let next = engine.step(&grid).unwrap();

    assert_eq!(
        next.live_cells(),
        vec![(0, 2), (1, 1), (1, 2), (2, 1), (2, 3)]
    );

    // Cell-by-cell agreement with the birth/survival rule
    for row in 0..8 {
        for col in 0..8 {
            let count = counts.get(row, col).unwrap();
            let alive = grid.get(row, col).unwrap() == 1;
            let expected = u8::from(count == 3 || (count == 2 && alive));
            assert_eq!(next.get(row, col), Some(expected), "cell ({row}, {col})");
        }
    }
}

#[test]
fn isolated_cell_dies() {
    let grid = Grid::from_live_cells(5, 5, &[(2, 2)]).unwrap();
    let next = automaton().step(&grid).unwrap();
    assert_eq!(next.live_count(), 0);
    assert_eq!(next, Grid::zeros(5, 5).unwrap());
}

#[test]
fn blinker_has_period_two() {
    let engine = automaton();
    let horizontal = Grid::from_live_cells(5, 5, &[(2, 1), (2, 2), (2, 3)]).unwrap();
    let vertical = Grid::from_live_cells(5, 5, &[(1, 2), (2, 2), (3, 2)]).unwrap();

    let once = engine.step(&horizontal).unwrap();
    assert_eq!(once, vertical);
    assert_eq!(engine.step(&once).unwrap(), horizontal);
}

#[test]
fn glider_wraps_around_torus() {
    let engine = automaton();
    let glider = Grid::from_live_cells(8, 8, &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)]).unwrap();

    // One diagonal cell every four generations
    let shifted = engine.run(&glider, 4).unwrap();
    assert_eq!(
        shifted.live_cells(),
        vec![(1, 2), (2, 3), (3, 1), (3, 2), (3, 3)]
    );

    // Eight shifts bring it back to where it started
    assert_eq!(engine.run(&glider, 32).unwrap(), glider);
}

#[test]
fn block_crossing_the_corner_is_still_life() {
    // A 2x2 block split across all four corners only forms through wraparound
    let block = Grid::from_live_cells(6, 6, &[(0, 0), (0, 5), (5, 0), (5, 5)]).unwrap();
    assert_eq!(automaton().step(&block).unwrap(), block);
}

#[test]
fn invalid_grids_are_rejected() {
    assert!(matches!(Grid::zeros(0, 3), Err(Error::InvalidDimensions(_))));
    assert!(matches!(Grid::zeros(3, 0), Err(Error::InvalidDimensions(_))));
    assert!(matches!(
        Grid::new(2, 2, vec![0, 1, 1, 3]),
        Err(Error::InvalidDimensions(_))
    ));
    assert!(matches!(
        Grid::new(2, 2, vec![0, 1, 1]),
        Err(Error::InvalidDimensions(_))
    ));
}
