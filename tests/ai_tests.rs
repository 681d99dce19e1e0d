use battleship_solo::{AiEngine, AiMode, Board, Orientation, Ship, ShotResult, GRID_SIZE};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn board_with(ships: &[((usize, usize), Orientation, usize)]) -> Board {
    let mut board = Board::new();
    for &(anchor, orientation, len) in ships {
        board.place(Ship::new(anchor, orientation, len).unwrap()).unwrap();
    }
    board
}

/// Fire at `coord` and let the engine hear about it, like the session does.
fn fire(ai: &mut AiEngine, board: &mut Board, coord: (usize, usize)) -> ShotResult {
    let result = board.shoot(coord.0, coord.1);
    ai.process_result(coord, result, board);
    result
}

#[test]
fn test_searching_picks_untouched_cells() {
    let mut rng = SmallRng::seed_from_u64(5);
    let mut board = board_with(&[((0, 0), Orientation::Horizontal, 1)]);
    let mut ai = AiEngine::new();
    for _ in 0..30 {
        let coord = ai.choose_shot(&mut rng, &board).unwrap();
        assert!(board.is_untouched(coord));
        board.shoot(coord.0, coord.1);
    }
}

#[test]
fn test_no_moves_left_returns_none() {
    let mut rng = SmallRng::seed_from_u64(5);
    let mut board = Board::new();
    for x in 0..GRID_SIZE {
        for y in 0..GRID_SIZE {
            board.shoot(x, y);
        }
    }
    let mut ai = AiEngine::new();
    assert_eq!(ai.choose_shot(&mut rng, &board), None);
}

#[test]
fn test_single_hit_probes_plus_x_first() {
    let mut rng = SmallRng::seed_from_u64(9);
    let mut board = board_with(&[((4, 4), Orientation::Horizontal, 3)]);
    let mut ai = AiEngine::new();
    assert_eq!(fire(&mut ai, &mut board, (4, 4)), ShotResult::Hit);
    assert!(ai.is_targeting());
    assert_eq!(ai.cluster(), &[(4, 4)]);
    assert_eq!(ai.frontier(), vec![(5, 4), (3, 4), (4, 5), (4, 3)]);
    assert_eq!(ai.choose_shot(&mut rng, &board), Some((5, 4)));
}

#[test]
fn test_resolved_neighbours_are_skipped_and_pruned() {
    let mut rng = SmallRng::seed_from_u64(9);
    let mut board = board_with(&[((4, 4), Orientation::Vertical, 2)]);
    let mut ai = AiEngine::new();
    assert_eq!(board.shoot(5, 4), ShotResult::Miss);

    fire(&mut ai, &mut board, (4, 4));
    assert_eq!(ai.frontier(), vec![(3, 4), (4, 5), (4, 3)]);

    // resolved behind the engine's back: dropped lazily on the next choice
    assert_eq!(board.shoot(3, 4), ShotResult::Miss);
    assert_eq!(ai.choose_shot(&mut rng, &board), Some((4, 5)));
    assert_eq!(fire(&mut ai, &mut board, (4, 5)), ShotResult::Sunk);
    assert_eq!(ai.state(), &AiMode::Searching);
    assert!(ai.frontier().is_empty());
    assert!(ai.cluster().is_empty());
}

#[test]
fn test_line_extends_past_both_ends_without_gap() {
    let mut board = board_with(&[((3, 2), Orientation::Vertical, 4)]);
    let mut ai = AiEngine::new();
    fire(&mut ai, &mut board, (3, 3));
    assert_eq!(ai.frontier(), vec![(4, 3), (2, 3), (3, 4), (3, 2)]);
    fire(&mut ai, &mut board, (3, 5));
    assert_eq!(ai.cluster(), &[(3, 3), (3, 5)]);
    // (3, 2) is already queued, (3, 6) joins the back; (3, 4) is not added again
    assert_eq!(ai.frontier(), vec![(4, 3), (2, 3), (3, 4), (3, 2), (3, 6)]);
}

#[test]
fn test_horizontal_line_extends_left_then_right() {
    let mut rng = SmallRng::seed_from_u64(1);
    let mut board = board_with(&[((2, 7), Orientation::Horizontal, 4)]);
    let mut ai = AiEngine::new();
    fire(&mut ai, &mut board, (3, 7));
    // +x first
    let next = ai.choose_shot(&mut rng, &board).unwrap();
    assert_eq!(next, (4, 7));
    fire(&mut ai, &mut board, next);
    assert_eq!(ai.frontier(), vec![(2, 7), (3, 8), (3, 6), (5, 7)]);
}

#[test]
fn test_exhausted_frontier_falls_back_to_search() {
    let mut rng = SmallRng::seed_from_u64(2);
    let mut board = board_with(&[((0, 0), Orientation::Vertical, 2)]);
    let mut ai = AiEngine::new();
    fire(&mut ai, &mut board, (0, 0));
    assert_eq!(ai.frontier(), vec![(1, 0), (0, 1)]);
    board.shoot(1, 0);
    board.shoot(0, 1);

    let coord = ai.choose_shot(&mut rng, &board).unwrap();
    assert!(!ai.is_targeting());
    assert!(board.is_untouched(coord));
}

#[test]
fn test_miss_and_repeat_change_nothing() {
    let mut board = board_with(&[((6, 6), Orientation::Horizontal, 2)]);
    let mut ai = AiEngine::new();
    fire(&mut ai, &mut board, (6, 6));
    let state = ai.state().clone();
    fire(&mut ai, &mut board, (6, 5));
    ai.process_result((6, 6), ShotResult::Repeat, &board);
    assert_eq!(ai.state(), &state);
    ai.reset();
    assert_eq!(ai.state(), &AiMode::Searching);
}
