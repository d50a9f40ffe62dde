//! Integration test: full game sessions
//!
//! Tests the flow from level start through jumps to the final rating.

use pegsol::levels::{Level, LevelDef};
use pegsol::{GameSession, LevelCatalog, LevelError, PegError, Position, RatingTier};

const TWO_PEG_ROW: LevelDef = LevelDef {
    name: "Two Pegs",
    layout: &[
        "..ooo..", ".......", ".......", ".......", ".......", ".......", ".......",
    ],
    start: (0, 2),
};

const STUCK_PAIR: LevelDef = LevelDef {
    name: "Stuck Pair",
    layout: &[
        "ooooo..", ".......", ".......", ".......", ".......", ".......", ".......",
    ],
    start: (0, 2),
};

const TWO_HOLES: LevelDef = LevelDef {
    name: "Two Holes",
    layout: &[
        "oo.....", ".......", ".......", ".......", ".......", ".......", ".......",
    ],
    start: (0, 0),
};

const L_SHAPE: LevelDef = LevelDef {
    name: "L Shape",
    layout: &[
        "oo.....", "o......", ".......", ".......", ".......", ".......", ".......",
    ],
    start: (0, 0),
};

#[test]
fn test_levels_that_start_finished_are_rejected() {
    // A single peg, and two pegs that cannot jump each other
    for def in [&TWO_HOLES, &L_SHAPE] {
        assert_eq!(
            Level::parse(3, def).unwrap_err(),
            LevelError::NoOpeningMove { level: 3 },
            "{}",
            def.name
        );
    }

    let err = LevelCatalog::from_defs(&[TWO_PEG_ROW, L_SHAPE]).unwrap_err();
    assert_eq!(err, LevelError::NoOpeningMove { level: 2 });
}

#[test]
fn test_every_session_starts_playable() {
    let catalog = LevelCatalog::builtin().unwrap();
    for level in catalog.iter() {
        let session = GameSession::new(level);
        assert!(!session.is_over());
        assert!(!session.board().is_terminal(), "{}", level.name());
    }
}

#[test]
fn test_english_cross_opening() {
    let catalog = LevelCatalog::builtin().unwrap();
    let mut session = GameSession::start(&catalog, 1).unwrap();
    assert_eq!(session.peg_count(), 32);
    assert_eq!(session.starting_pegs(), 32);

    let pegs = session
        .play(Position::new(3, 1), Position::new(3, 3))
        .unwrap();
    assert_eq!(pegs, 31);
    assert!(!session.is_over());
    assert!(session.board().cell(Position::new(3, 3)).has_peg());
    assert!(!session.board().cell(Position::new(3, 2)).has_peg());
    assert!(!session.board().cell(Position::new(3, 1)).has_peg());
}

#[test]
fn test_single_jump_to_genius() {
    let level = Level::parse(1, &TWO_PEG_ROW).unwrap();
    let mut session = GameSession::new(&level);
    assert_eq!(session.peg_count(), 2);
    assert!(!session.is_over());

    session
        .play(Position::new(0, 4), Position::new(0, 2))
        .unwrap();

    let result = session.result().unwrap();
    assert_eq!(result.pegs_left, 1);
    assert_eq!(result.score, 200);
    assert_eq!(result.tier, RatingTier::Genius);
    assert!(result.is_good());
}

#[test]
fn test_stuck_game_ends_with_pegs_left() {
    // Pegs at columns 0, 1, 3 and 4 with column 2 open
    let level = Level::parse(1, &STUCK_PAIR).unwrap();
    let mut session = GameSession::new(&level);
    assert_eq!(session.peg_count(), 4);

    session
        .play(Position::new(0, 0), Position::new(0, 2))
        .unwrap();
    assert!(!session.is_over());

    // Pegs now at columns 2, 3 and 4
    session
        .play(Position::new(0, 4), Position::new(0, 2))
        .unwrap_err();
    session
        .play(Position::new(0, 2), Position::new(0, 0))
        .unwrap_err();

    // Only column 3 can still jump, leaving two pegs apart
    session
        .play(Position::new(0, 3), Position::new(0, 1))
        .unwrap();

    let result = session.result().unwrap();
    assert_eq!(result.pegs_left, 2);
    assert_eq!(result.tier, RatingTier::Intelligent);
    assert_eq!(result.score, 175);
}

#[test]
fn test_moves_after_game_over_are_rejected() {
    let level = Level::parse(1, &TWO_PEG_ROW).unwrap();
    let mut session = GameSession::new(&level);
    session
        .play(Position::new(0, 4), Position::new(0, 2))
        .unwrap();

    assert_eq!(
        session.play(Position::new(0, 2), Position::new(0, 4)),
        Err(PegError::GameOver)
    );
    assert!(session.legal_destinations(Position::new(0, 2)).is_empty());
}

#[test]
fn test_restart_lays_the_level_out_again() {
    let catalog = LevelCatalog::builtin().unwrap();
    let mut session = GameSession::start(&catalog, 1).unwrap();
    session
        .play(Position::new(1, 3), Position::new(3, 3))
        .unwrap();
    assert_eq!(session.moves().len(), 1);

    session.restart();
    assert_eq!(session.peg_count(), 32);
    assert!(session.moves().is_empty());
    assert!(!session.board().cell(Position::new(3, 3)).has_peg());
}

#[test]
fn test_unknown_level_rejected() {
    let catalog = LevelCatalog::builtin().unwrap();
    assert_eq!(
        GameSession::start(&catalog, 0).unwrap_err(),
        PegError::LevelNotFound(0)
    );
    let past_end = catalog.level_count() + 1;
    assert_eq!(
        GameSession::start(&catalog, past_end).unwrap_err(),
        PegError::LevelNotFound(past_end)
    );
}

#[test]
fn test_illegal_jump_is_reported() {
    let catalog = LevelCatalog::builtin().unwrap();
    let mut session = GameSession::start(&catalog, 1).unwrap();

    // Destination occupied
    let err = session
        .play(Position::new(2, 3), Position::new(4, 3))
        .unwrap_err();
    assert!(matches!(err, PegError::IllegalMove { .. }));

    // Not two cells apart
    let err = session
        .play(Position::new(3, 1), Position::new(3, 4))
        .unwrap_err();
    assert!(matches!(err, PegError::IllegalMove { .. }));
    assert_eq!(session.peg_count(), 32);
}
