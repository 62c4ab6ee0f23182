//! Match-3 battle minigame, played for the duration of one mission session.

pub mod logic;
pub mod types;

pub use logic::{
    apply_clear, evaluate_swap, find_matches, resolve_pending, select, ResolutionOutcome,
    SelectOutcome, SwapEvaluation,
};
pub use types::{MatchGame, MatchPhase, MatchResult, BOARD_COLS, BOARD_ROWS, TOKEN_TYPE_COUNT};
