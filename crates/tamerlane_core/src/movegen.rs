//! Candidate-move generation, check detection, and the legality filter.
//!
//! `candidate_moves` encodes only the raw movement patterns; `valid_moves`
//! simulates every candidate on a scratch board and keeps those that leave
//! the mover's own king out of check. Pins and forced responses to check
//! both fall out of that one mechanism.

use crate::board::Board;
use crate::types::*;

const KING_DELTAS: [(i8, i8); 8] = [
    (1, 1),
    (1, 0),
    (1, -1),
    (0, 1),
    (0, -1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];

const KNIGHT_DELTAS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (-1, 2),
    (-2, 1),
    (1, -2),
    (2, -1),
    (-1, -2),
    (-2, -1),
];

const CAMEL_DELTAS: [(i8, i8); 8] = [
    (1, 3),
    (3, 1),
    (-1, 3),
    (-3, 1),
    (1, -3),
    (3, -1),
    (-1, -3),
    (-3, -1),
];

const ELEPHANT_DELTAS: [(i8, i8); 4] = [(2, 2), (2, -2), (-2, 2), (-2, -2)];

const ROOK_DIRS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

const DIAGONAL_DIRS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// Kinds a pawn may promote to on the far rank.
pub const PROMOTION_KINDS: [PieceKind; 5] = [
    PieceKind::Rook,
    PieceKind::Picket,
    PieceKind::Camel,
    PieceKind::Elephant,
    PieceKind::Knight,
];

/// Raw movement-pattern destinations for the piece at `from`, ignoring any
/// notion of check. Empty for an empty square. Friendly-occupied
/// destinations are never generated; a capture of the enemy king is
/// generated like any other capture.
pub fn candidate_moves(board: &Board, from: Pos) -> Vec<Move> {
    let piece = match board.piece_at(from) {
        Some(piece) => piece,
        None => return Vec::new(),
    };
    let mut out = Vec::new();
    match piece.kind {
        PieceKind::Pawn => gen_pawn(board, from, piece.color, &mut out),
        PieceKind::Knight => gen_leaper(board, from, piece.color, &KNIGHT_DELTAS, &mut out),
        PieceKind::Camel => gen_leaper(board, from, piece.color, &CAMEL_DELTAS, &mut out),
        PieceKind::Elephant => gen_leaper(board, from, piece.color, &ELEPHANT_DELTAS, &mut out),
        PieceKind::King => gen_leaper(board, from, piece.color, &KING_DELTAS, &mut out),
        PieceKind::Rook => gen_slider(board, from, piece.color, &ROOK_DIRS, &mut out),
        PieceKind::Picket => gen_picket(board, from, piece.color, &mut out),
    }
    out
}

/// Does any piece of `by` have a candidate move landing on `target`?
///
/// Reuses the ordinary generator: a pawn's forward push is only generated
/// onto an empty square, so it never counts as an attack on an occupant.
pub fn is_attacked(board: &Board, target: Pos, by: Color) -> bool {
    board
        .pieces_of(by)
        .any(|(from, _)| candidate_moves(board, from).iter().any(|mv| mv.to == target))
}

/// Is `color`'s king attacked on the board exactly as given?
///
/// Panics if `color` has no king (malformed position).
pub fn in_check(board: &Board, color: Color) -> bool {
    is_attacked(board, board.king_pos(color), color.other())
}

/// The legal subset of `candidate_moves(board, from)`: each candidate is
/// played on a cloned board and kept only if the mover's own king is not
/// in check afterwards. Works for either color regardless of whose turn a
/// surrounding game thinks it is.
pub fn valid_moves(board: &Board, from: Pos) -> Vec<Move> {
    let piece = match board.piece_at(from) {
        Some(piece) => piece,
        None => return Vec::new(),
    };
    candidate_moves(board, from)
        .into_iter()
        .filter(|&mv| {
            let mut scratch = board.clone();
            scratch.apply_move(mv);
            !in_check(&scratch, piece.color)
        })
        .collect()
}

fn gen_leaper(board: &Board, from: Pos, color: Color, deltas: &[(i8, i8)], out: &mut Vec<Move>) {
    for &(dr, df) in deltas {
        if let Some(to) = from.offset(dr, df) {
            match board.piece_at(to) {
                None => out.push(Move::new(from, to)),
                Some(piece) if piece.color != color => out.push(Move::new(from, to)),
                _ => {}
            }
        }
    }
}

fn gen_slider(board: &Board, from: Pos, color: Color, dirs: &[(i8, i8)], out: &mut Vec<Move>) {
    for &(dr, df) in dirs {
        let mut cur = from;
        while let Some(to) = cur.offset(dr, df) {
            match board.piece_at(to) {
                None => out.push(Move::new(from, to)),
                Some(piece) if piece.color != color => {
                    out.push(Move::new(from, to));
                    break;
                }
                _ => break,
            }
            cur = to;
        }
    }
}

/// Picket: diagonal rider that leaps the adjacent diagonal square no matter
/// what stands on it, lands two or more squares out, and is blocked
/// normally from the landing square onward.
fn gen_picket(board: &Board, from: Pos, color: Color, out: &mut Vec<Move>) {
    for &(dr, df) in &DIAGONAL_DIRS {
        let leapt = match from.offset(dr, df) {
            Some(pos) => pos,
            None => continue,
        };
        let mut cur = leapt;
        while let Some(to) = cur.offset(dr, df) {
            match board.piece_at(to) {
                None => out.push(Move::new(from, to)),
                Some(piece) if piece.color != color => {
                    out.push(Move::new(from, to));
                    break;
                }
                _ => break,
            }
            cur = to;
        }
    }
}

fn gen_pawn(board: &Board, from: Pos, color: Color, out: &mut Vec<Move>) {
    let (dir, promo_rank): (i8, u8) = match color {
        Color::White => (1, RANKS),
        Color::Black => (-1, 1),
    };

    let push = |to: Pos, out: &mut Vec<Move>| {
        if to.rank == promo_rank {
            for kind in PROMOTION_KINDS {
                out.push(Move::promotion(from, to, kind));
            }
        } else {
            out.push(Move::new(from, to));
        }
    };

    // Forward advance, blocked by any occupant.
    if let Some(to) = from.offset(dir, 0)
        && board.piece_at(to).is_none()
    {
        push(to, out);
    }

    // Diagonal captures only.
    for df in [-1, 1] {
        if let Some(to) = from.offset(dir, df)
            && let Some(target) = board.piece_at(to)
            && target.color != color
        {
            push(to, out);
        }
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
