//! Integration test: board invariants under random play
//!
//! Plays seeded random games on every built-in level and checks the
//! invariants that must hold after each jump.

use pegsol::board::{Board, Cell, Move, Position};
use pegsol::levels::LevelCatalog;
use pegsol::GameSession;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const GAMES_PER_LEVEL: u64 = 25;

fn assert_destinations_are_legal(board: &Board) {
    for from in Position::all() {
        for to in board.legal_destinations(from) {
            assert!(board.cell(from).has_peg(), "{} has no peg", from);
            assert_eq!(board.cell(to), Cell::Empty, "{} is not an empty hole", to);
            let mv = Move::between(from, to).expect("destination two cells away");
            assert!(board.cell(mv.over).has_peg(), "nothing to jump at {}", mv.over);
            assert!(board.is_legal(&mv));
        }
    }
}

#[test]
fn test_random_playouts_keep_invariants() {
    let catalog = LevelCatalog::builtin().unwrap();

    for level in catalog.iter() {
        for seed in 0..GAMES_PER_LEVEL {
            let mut rng = ChaCha8Rng::seed_from_u64(seed * 31 + level.id() as u64);
            let initial = Board::initialize(level);
            let mut board = initial.clone();

            assert_eq!(board.hole_count(), level.hole_count());
            assert_eq!(board.peg_count(), level.hole_count() - 1);
            assert_eq!(board.cell(level.start()), Cell::Empty);

            let mut jumps = 0;
            while let Some(&mv) = board.legal_moves().choose(&mut rng) {
                assert_destinations_are_legal(&board);

                let before = board.peg_count();
                let after = board.apply(mv).unwrap();
                jumps += 1;

                assert_eq!(after, before - 1);
                assert_eq!(after, board.peg_count());
                assert!(board.same_shape(&initial));
                assert_eq!(board.cell(mv.from), Cell::Empty);
                assert_eq!(board.cell(mv.over), Cell::Empty);
                assert_eq!(board.cell(mv.to), Cell::Occupied);
            }

            assert!(board.is_terminal());
            assert!(!board.any_legal_move_exists() || board.peg_count() <= 1);
            assert_eq!(board.peg_count() + jumps, initial.peg_count());
        }
    }
}

#[test]
fn test_random_sessions_end_with_a_result() {
    let catalog = LevelCatalog::builtin().unwrap();

    for level in catalog.iter() {
        let mut rng = ChaCha8Rng::seed_from_u64(level.id() as u64);
        let mut session = GameSession::new(level);

        while !session.is_over() {
            let moves = session.board().legal_moves();
            let mv = *moves.choose(&mut rng).expect("a running game has a move");
            session.apply(mv).unwrap();
        }

        let result = session.result().unwrap();
        assert_eq!(result.pegs_left, session.peg_count());
        assert_eq!(session.moves().len(), session.starting_pegs() - result.pegs_left);
        assert!(session.legal_destinations(Position::new(3, 3)).is_empty());
    }
}

#[test]
fn test_rejected_moves_leave_board_untouched() {
    let catalog = LevelCatalog::builtin().unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(7);

    for level in catalog.iter() {
        let mut board = Board::initialize(level);
        for _ in 0..5 {
            let Some(&mv) = board.legal_moves().choose(&mut rng) else {
                break;
            };
            board.apply(mv).unwrap();

            // The same jump again is now illegal
            let snapshot = board.clone();
            assert!(board.apply(mv).is_err());
            assert_eq!(board, snapshot);
        }
    }
}
