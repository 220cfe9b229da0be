use ttt_atlas::{Board, StateAtlas, StateId, CANONICAL_EDGE_COUNT, FULL_EDGE_COUNT};

#[test]
fn verify_graph_totals_and_summary() {
    let atlas = StateAtlas::build().unwrap();
    let summary = atlas.summary();

    assert_eq!(summary.full.states, 5478);
    assert_eq!(summary.full.edges, FULL_EDGE_COUNT);
    assert_eq!(summary.full.terminal_states, 958);
    assert_eq!(summary.canonical.states, 765);
    assert_eq!(summary.canonical.edges, CANONICAL_EDGE_COUNT);
    assert_eq!(summary.canonical.terminal_states, 138);
}

#[test]
fn verify_empty_board_out_degrees() {
    // The empty board is id 0 in both spaces. Its full-space successors
    // appear in cell-scan discovery order (placing X earlier in the grid
    // yields a larger enumeration index), and its nine openings collapse
    // to the corner, edge-center, and center classes canonically.
    const FULL_TARGETS: [usize; 9] = [2023, 730, 265, 96, 35, 13, 5, 2, 1];
    const CANONICAL_TARGETS: [usize; 3] = [1, 2, 25];

    let atlas = StateAtlas::build().unwrap();
    assert_eq!(atlas.full_boards()[0], Board::new());
    assert_eq!(atlas.canonical_boards()[0], Board::new());

    let full: Vec<usize> = atlas
        .full_graph()
        .targets(StateId::new(0))
        .iter()
        .map(|id| id.index())
        .collect();
    assert_eq!(full, FULL_TARGETS);

    let canonical: Vec<usize> = atlas
        .canonical_graph()
        .targets(StateId::new(0))
        .iter()
        .map(|id| id.index())
        .collect();
    assert_eq!(canonical, CANONICAL_TARGETS);

    // The three opening classes, in first-discovery order.
    assert_eq!(atlas.canonical_boards()[1].encode(), "........X");
    assert_eq!(atlas.canonical_boards()[2].encode(), ".......X.");
    assert_eq!(atlas.canonical_boards()[25].encode(), "....X....");
}

#[test]
fn verify_terminal_states_have_no_edges() {
    let atlas = StateAtlas::build().unwrap();

    for (boards, graph) in [
        (atlas.full_boards(), atlas.full_graph()),
        (atlas.canonical_boards(), atlas.canonical_graph()),
    ] {
        for (id, board) in boards.iter().enumerate() {
            let targets = graph.targets(StateId::new(id));
            if board.is_terminal() {
                assert!(targets.is_empty(), "terminal {} has edges", board.encode());
            } else {
                // Every empty cell of a legal non-terminal board accepts
                // the mover's mark, so at least one edge must exist.
                assert!(!targets.is_empty(), "open {} has no edges", board.encode());
            }
        }
    }
}

#[test]
fn verify_diagonal_win_scenario() {
    // X holds the main diagonal with seven cells filled: a win for X, not
    // a draw, and a dead end in both graphs.
    let scenario = Board::from_string("XXOOXO..X").unwrap();
    assert!(scenario.is_valid());
    assert_eq!(scenario.winner(), Some(ttt_atlas::Player::X));

    let atlas = StateAtlas::build().unwrap();

    let full_id = atlas
        .full_boards()
        .iter()
        .position(|b| *b == scenario)
        .expect("scenario board is legal");
    assert_eq!(full_id, 3210);
    assert!(atlas.full_graph().targets(StateId::new(full_id)).is_empty());

    let canonical_id = atlas
        .canonical_boards()
        .iter()
        .position(|b| scenario.variants().contains(b))
        .expect("scenario class has a representative");
    assert_eq!(canonical_id, 301);
    assert!(atlas
        .canonical_graph()
        .targets(StateId::new(canonical_id))
        .is_empty());
}

#[test]
fn verify_edges_are_single_mark_extensions() {
    let atlas = StateAtlas::build().unwrap();

    // Full space: the target must be the source plus exactly one mark by
    // the source's mover.
    for (source, board) in atlas.full_boards().iter().enumerate() {
        let mark = board.to_move().to_cell();
        for target in atlas.full_graph().targets(StateId::new(source)) {
            let target_board = atlas.full_boards()[target.index()];
            let reachable = board
                .empty_positions()
                .iter()
                .any(|&pos| board.make_move(pos).unwrap() == target_board);
            assert!(
                reachable,
                "{} -> {} is not one {mark:?} placement",
                board.encode(),
                target_board.encode()
            );
        }
    }

    // Canonical space: some orbit variant of the target must be one mark
    // away from the source.
    for (source, board) in atlas.canonical_boards().iter().enumerate() {
        for target in atlas.canonical_graph().targets(StateId::new(source)) {
            let target_board = atlas.canonical_boards()[target.index()];
            let reachable = board.empty_positions().iter().any(|&pos| {
                let candidate = board.make_move(pos).unwrap();
                target_board.variants().contains(&candidate)
            });
            assert!(
                reachable,
                "{} -> {} is not one placement up to symmetry",
                board.encode(),
                target_board.encode()
            );
        }
    }
}

#[test]
fn verify_targets_are_duplicate_free() {
    let atlas = StateAtlas::build().unwrap();

    for graph in [atlas.full_graph(), atlas.canonical_graph()] {
        for (_, targets) in graph.iter() {
            let distinct: std::collections::HashSet<_> = targets.iter().collect();
            assert_eq!(distinct.len(), targets.len());
        }
    }
}

#[test]
fn verify_independent_builds_are_byte_identical() {
    let first = StateAtlas::build().unwrap();
    let second = StateAtlas::build().unwrap();
    assert_eq!(first, second);

    let first_json = serde_json::to_string(&first).unwrap();
    let second_json = serde_json::to_string(&second).unwrap();
    assert_eq!(first_json, second_json);
}
