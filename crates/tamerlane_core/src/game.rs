use crate::board::Board;
use crate::error::{ChessError, ChessResult};
use crate::movegen;
use crate::types::*;

/// The game controller: current board plus side to move.
///
/// The sole mutator is `make_move`, which commits atomically: a rejected
/// move leaves the state untouched. Queries never mutate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Game {
    board: Board,
    side_to_move: Color,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Fresh game with the variant starting layout, White to move.
    pub fn new() -> Self {
        Self {
            board: Board::start(),
            side_to_move: Color::White,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    pub fn set_side_to_move(&mut self, color: Color) {
        self.side_to_move = color;
    }

    /// Replace the board wholesale (scenario loading). Side to move resets
    /// to White.
    pub fn set_board(&mut self, board: Board) {
        self.board = board;
        self.side_to_move = Color::White;
    }

    /// Legal moves for the piece at `from`, regardless of whose turn it is.
    /// Empty square yields an empty set; only an off-board coordinate is an
    /// error.
    pub fn valid_moves(&self, from: Pos) -> ChessResult<Vec<Move>> {
        if !from.in_bounds() {
            return Err(ChessError::InvalidPosition(from));
        }
        Ok(movegen::valid_moves(&self.board, from))
    }

    /// Validate and commit `mv`: the origin must hold a piece of the side
    /// to move and `mv` must be in that piece's legal set. On success the
    /// board mutates and the turn flips; on any error nothing changes.
    pub fn make_move(&mut self, mv: Move) -> ChessResult<()> {
        if !mv.from.in_bounds() {
            return Err(ChessError::InvalidPosition(mv.from));
        }
        if !mv.to.in_bounds() {
            return Err(ChessError::InvalidPosition(mv.to));
        }
        let piece = self
            .board
            .piece_at(mv.from)
            .ok_or(ChessError::NoPieceAtOrigin(mv.from))?;
        if piece.color != self.side_to_move {
            return Err(ChessError::IllegalMove(mv));
        }
        if !movegen::valid_moves(&self.board, mv.from).contains(&mv) {
            return Err(ChessError::IllegalMove(mv));
        }
        self.board.apply_move(mv);
        self.side_to_move = self.side_to_move.other();
        Ok(())
    }

    pub fn in_check(&self, color: Color) -> bool {
        movegen::in_check(&self.board, color)
    }

    /// In check with no legal move for any piece of `color`.
    pub fn in_checkmate(&self, color: Color) -> bool {
        self.in_check(color) && !self.has_legal_move(color)
    }

    /// Not in check, but no piece of `color` has a legal move.
    pub fn in_stalemate(&self, color: Color) -> bool {
        !self.in_check(color) && !self.has_legal_move(color)
    }

    fn has_legal_move(&self, color: Color) -> bool {
        self.board
            .pieces_of(color)
            .any(|(from, _)| !movegen::valid_moves(&self.board, from).is_empty())
    }
}
