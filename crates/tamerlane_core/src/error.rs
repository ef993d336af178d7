//! Error types surfaced by the game controller.
//!
//! All variants are deterministic caller errors, never transient faults.
//! A board that lacks exactly one king for a side at the moment check
//! detection runs is a malformed-position precondition and panics instead
//! (see `Board::king_pos`).

use crate::types::{Move, Pos};
use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChessError {
    /// A coordinate outside the board was supplied. This is a caller
    /// contract violation, not a game rule.
    #[error("position {0} is off the board")]
    InvalidPosition(Pos),

    /// `make_move` was invoked on an empty origin square.
    #[error("no piece at {0}")]
    NoPieceAtOrigin(Pos),

    /// The move is not in the legal set for its origin, or the piece does
    /// not belong to the side to move. The game state is left unchanged.
    #[error("illegal move {0}")]
    IllegalMove(Move),
}

pub type ChessResult<T> = Result<T, ChessError>;
