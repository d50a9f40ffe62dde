// Board geometry
pub const BOARD_SIZE: usize = 7;

// Game timing constants
pub const TICK_INTERVAL_MS: u64 = 50;
/// Delay between starting a jump and committing it to the board.
pub const MOVE_ANIMATION_MS: u64 = 300;

// End-game suspense kicks in once this few pegs remain (and more than one)
pub const SUSPENSE_MAX_PEGS: usize = 5;

// Scoring constants
/// Scores at or above this are a "good" finish (cunning or better).
pub const GOOD_SCORE_THRESHOLD: u32 = 150;
/// Points for finishing with 1, 2, 3, 4 and 5 pegs.
pub const SCORE_TABLE: [u32; 5] = [200, 175, 150, 120, 100];
/// Points lost per peg beyond the score table. Small enough that the
/// score still falls at every peg count a 7×7 board can end with.
pub const SCORE_STEP_PER_PEG: u32 = 2;
/// A finish with this many pegs or fewer counts as a win in the stats.
pub const WIN_MAX_PEGS: usize = 3;

// Persistence constants
pub const DATA_DIR_NAME: &str = ".pegsol";
pub const STATS_FILE_NAME: &str = "stats.json";
pub const LOG_FILE_NAME: &str = "pegsol.log";
/// Environment variable holding the tracing filter (e.g. `debug`).
pub const LOG_ENV_VAR: &str = "PEGSOL_LOG";
