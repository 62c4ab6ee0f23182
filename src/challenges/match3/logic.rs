//! Match-3 game logic: selection, swap evaluation, clearing, gravity, and
//! session termination.
//!
//! Resolution runs in two explicit synchronous phases so the caller can pace
//! its own animation between them: [`evaluate_swap`] (match or revert) and
//! [`apply_clear`] (score, clear, gravity, refill, terminal check). There are
//! no timers in the engine itself. A resolution scans the board exactly once;
//! the post-gravity board is not re-scanned for newly formed runs.

use super::types::{
    MatchGame, MatchPhase, MatchResult, BOARD_COLS, BOARD_ROWS, TOKEN_TYPE_COUNT,
};
use crate::core::balance::MATCH_SCORE_PER_CELL;
use rand::Rng;

/// Observable result of a selection tap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    /// First selection recorded.
    Selected,
    /// Same cell tapped again; selection cleared.
    Deselected,
    /// Non-adjacent second tap; the pending selection moved here.
    Replaced,
    /// Adjacent pair: tokens tentatively swapped, resolution started.
    SwapStaged,
    /// Input arrived outside the interactive phase or out of bounds.
    Ignored,
}

/// Result of the first resolution phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwapEvaluation {
    /// The swap formed at least one run; one move was consumed and the
    /// matched cells are marked on the game.
    Matched(usize),
    /// No run formed; the swap was reverted and no move was consumed.
    Reverted,
}

/// Result of the second resolution phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionOutcome {
    /// Session continues; the board is refilled and interactive again.
    Continue,
    /// Terminal state reached; the result is also stored on the game.
    Concluded(MatchResult),
}

/// Handle a tap on board cell (row, col).
///
/// Only processed while the session is interactive; taps during resolution
/// or after conclusion are ignored (the phase is the busy flag). A second
/// tap on the same cell toggles the selection off; a non-adjacent second tap
/// replaces the selection; a Manhattan-distance-1 second tap performs the
/// tentative swap and moves the session into the resolving phase.
pub fn select(game: &mut MatchGame, row: usize, col: usize) -> SelectOutcome {
    if game.phase != MatchPhase::Interactive || row >= BOARD_ROWS || col >= BOARD_COLS {
        return SelectOutcome::Ignored;
    }

    let (sel_row, sel_col) = match game.selected {
        None => {
            game.selected = Some((row, col));
            return SelectOutcome::Selected;
        }
        Some(cell) => cell,
    };

    if (sel_row, sel_col) == (row, col) {
        game.selected = None;
        return SelectOutcome::Deselected;
    }

    let adjacent = sel_row.abs_diff(row) + sel_col.abs_diff(col) == 1;
    if !adjacent {
        game.selected = Some((row, col));
        return SelectOutcome::Replaced;
    }

    // Tentative swap; evaluate_swap decides whether it sticks.
    swap_cells(&mut game.board, (sel_row, sel_col), (row, col));
    game.pending_swap = Some(((sel_row, sel_col), (row, col)));
    game.selected = None;
    game.phase = MatchPhase::Resolving;
    SelectOutcome::SwapStaged
}

/// First resolution phase: scan the whole board for runs.
///
/// On a match, one move is consumed and the matched cell set is recorded on
/// the game for presentation. On no match, both tokens return to their
/// original positions bit-for-bit and the session is interactive again.
pub fn evaluate_swap(game: &mut MatchGame) -> SwapEvaluation {
    let Some((a, b)) = game.pending_swap else {
        return SwapEvaluation::Reverted;
    };
    if game.phase != MatchPhase::Resolving {
        return SwapEvaluation::Reverted;
    }

    let matches = find_matches(&game.board);
    if matches.is_empty() {
        swap_cells(&mut game.board, a, b);
        game.pending_swap = None;
        game.phase = MatchPhase::Interactive;
        return SwapEvaluation::Reverted;
    }

    game.moves_left = game.moves_left.saturating_sub(1);
    let count = matches.len();
    game.matched_cells = matches;
    SwapEvaluation::Matched(count)
}

/// Second resolution phase: award score, clear the matched cells, apply
/// gravity, refill the vacated tops, and evaluate termination.
///
/// Valid only after [`evaluate_swap`] returned `Matched`; otherwise returns
/// `Continue` without touching the board.
pub fn apply_clear<R: Rng>(game: &mut MatchGame, rng: &mut R) -> ResolutionOutcome {
    if game.phase != MatchPhase::Resolving || game.matched_cells.is_empty() {
        return ResolutionOutcome::Continue;
    }

    game.score += game.matched_cells.len() as u64 * MATCH_SCORE_PER_CELL;

    // Clear to a hole marker, then drop each column's survivors to the
    // bottom and refill the vacated top cells with fresh random tokens.
    const HOLE: u8 = u8::MAX;
    for &(row, col) in &game.matched_cells {
        game.board[row][col] = HOLE;
    }
    for col in 0..BOARD_COLS {
        let mut write_row = BOARD_ROWS;
        for row in (0..BOARD_ROWS).rev() {
            if game.board[row][col] != HOLE {
                write_row -= 1;
                game.board[write_row][col] = game.board[row][col];
            }
        }
        for row in 0..write_row {
            game.board[row][col] = rng.gen_range(0..TOKEN_TYPE_COUNT);
        }
    }

    game.matched_cells.clear();
    game.pending_swap = None;

    // Terminal check. Reaching the target wins even if the last move was
    // just spent.
    if game.score >= game.target_score {
        conclude(game, true)
    } else if game.moves_left == 0 {
        conclude(game, false)
    } else {
        game.phase = MatchPhase::Interactive;
        ResolutionOutcome::Continue
    }
}

/// Drive both resolution phases back to back, for callers that do not pace
/// an animation between them.
pub fn resolve_pending<R: Rng>(game: &mut MatchGame, rng: &mut R) -> ResolutionOutcome {
    match evaluate_swap(game) {
        SwapEvaluation::Reverted => ResolutionOutcome::Continue,
        SwapEvaluation::Matched(_) => apply_clear(game, rng),
    }
}

/// All cells belonging to a horizontal or vertical run of three or more
/// identical tokens. A cell in both a row run and a column run appears once.
/// Returned sorted by (row, col).
pub fn find_matches(board: &[Vec<u8>]) -> Vec<(usize, usize)> {
    let mut matched = vec![[false; BOARD_COLS]; BOARD_ROWS];

    for row in 0..BOARD_ROWS {
        for col in 0..BOARD_COLS.saturating_sub(2) {
            let token = board[row][col];
            if board[row][col + 1] == token && board[row][col + 2] == token {
                matched[row][col] = true;
                matched[row][col + 1] = true;
                matched[row][col + 2] = true;
            }
        }
    }
    for col in 0..BOARD_COLS {
        for row in 0..BOARD_ROWS.saturating_sub(2) {
            let token = board[row][col];
            if board[row + 1][col] == token && board[row + 2][col] == token {
                matched[row][col] = true;
                matched[row + 1][col] = true;
                matched[row + 2][col] = true;
            }
        }
    }

    let mut cells = Vec::new();
    for (row, flags) in matched.iter().enumerate() {
        for (col, &hit) in flags.iter().enumerate() {
            if hit {
                cells.push((row, col));
            }
        }
    }
    cells
}

fn swap_cells(board: &mut [Vec<u8>], a: (usize, usize), b: (usize, usize)) {
    let tmp = board[a.0][a.1];
    board[a.0][a.1] = board[b.0][b.1];
    board[b.0][b.1] = tmp;
}

fn conclude(game: &mut MatchGame, success: bool) -> ResolutionOutcome {
    let result = MatchResult {
        success,
        final_score: game.score,
    };
    game.phase = MatchPhase::Concluded;
    game.game_result = Some(result);
    ResolutionOutcome::Concluded(result)
}
