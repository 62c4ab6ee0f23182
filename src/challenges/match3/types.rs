//! Match-3 mission minigame data structures.
//!
//! A 7x6 board of typed tokens, a move budget, and a score target. Unlike
//! the merge grid, every cell is always occupied; empty cells exist only
//! transiently inside a resolution step.

use rand::Rng;

/// Board height in rows. Row 0 is the top; tokens fall toward higher rows.
pub const BOARD_ROWS: usize = 7;

/// Board width in columns.
pub const BOARD_COLS: usize = 6;

/// Number of distinct token types.
pub const TOKEN_TYPE_COUNT: u8 = 5;

/// Session phases. `Resolving` doubles as the busy flag: selection input is
/// ignored for the whole resolution window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchPhase {
    /// Board generated, waiting for the player to start.
    AwaitingStart,
    /// Accepting selections.
    Interactive,
    /// A tentative swap is being evaluated/cleared; input is blocked.
    Resolving,
    /// Terminal. The result is reported exactly once.
    Concluded,
}

/// Final session result, reported upward once on conclusion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchResult {
    /// True iff the score target was reached (takes priority over running
    /// out of moves in the same step).
    pub success: bool,
    pub final_score: u64,
}

/// One bounded match-3 playthrough.
#[derive(Debug, Clone)]
pub struct MatchGame {
    /// Token types, indexed `board[row][col]`.
    pub board: Vec<Vec<u8>>,
    /// Pending first selection awaiting a second tap.
    pub selected: Option<(usize, usize)>,
    /// The tentatively swapped pair, set while resolving.
    pub pending_swap: Option<((usize, usize), (usize, usize))>,
    /// Cells marked for removal between the evaluate and clear phases,
    /// exposed so presentation can animate them.
    pub matched_cells: Vec<(usize, usize)>,
    pub score: u64,
    pub moves_left: u32,
    pub target_score: u64,
    pub phase: MatchPhase,
    /// Set once when the session concludes.
    pub game_result: Option<MatchResult>,
}

impl MatchGame {
    /// Create a session with a freshly randomized board.
    ///
    /// Every cell gets an independent uniform token; there is no guarantee
    /// the board is free of pre-existing runs or has a playable move.
    pub fn new<R: Rng>(target_score: u64, moves: u32, rng: &mut R) -> Self {
        let board = (0..BOARD_ROWS)
            .map(|_| {
                (0..BOARD_COLS)
                    .map(|_| rng.gen_range(0..TOKEN_TYPE_COUNT))
                    .collect()
            })
            .collect();
        Self {
            board,
            selected: None,
            pending_swap: None,
            matched_cells: Vec::new(),
            score: 0,
            moves_left: moves,
            target_score,
            phase: MatchPhase::AwaitingStart,
            game_result: None,
        }
    }

    /// Leave the start screen and begin accepting selections.
    pub fn begin(&mut self) {
        if self.phase == MatchPhase::AwaitingStart {
            self.phase = MatchPhase::Interactive;
        }
    }

    /// True while a resolution is in flight and input must be blocked.
    pub fn is_busy(&self) -> bool {
        self.phase == MatchPhase::Resolving
    }

    pub fn is_concluded(&self) -> bool {
        self.phase == MatchPhase::Concluded
    }
}
