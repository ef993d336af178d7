//! Controller semantics: turn enforcement, atomic commit-or-reject, the
//! error taxonomy, and mate/stalemate classification.

use tamerlane_core::{
    Board, ChessError, Color, Game, Move, Piece, PieceKind, Pos,
};

#[test]
fn test_new_game() {
    let game = Game::new();
    assert_eq!(game.side_to_move(), Color::White);
    assert_eq!(*game.board(), Board::start());
    assert!(!game.in_check(Color::White));
    assert!(!game.in_check(Color::Black));
}

#[test]
fn test_start_position_mobility() {
    // 11 pawn advances, 2 per knight, 2 per camel, 2 per elephant and 8
    // per picket; rooks and king are boxed in.
    let game = Game::new();
    let total: usize = game
        .board()
        .pieces_of(Color::White)
        .map(|(pos, _)| game.valid_moves(pos).unwrap().len())
        .sum();
    assert_eq!(total, 39);
}

#[test]
fn test_make_move_commits_and_flips_turn() {
    let mut game = Game::new();
    let mv = Move::new(Pos::new(2, 6), Pos::new(3, 6));
    game.make_move(mv).unwrap();
    assert_eq!(game.side_to_move(), Color::Black);
    assert_eq!(game.board().piece_at(Pos::new(2, 6)), None);
    assert_eq!(
        game.board().piece_at(Pos::new(3, 6)),
        Some(Piece::new(Color::White, PieceKind::Pawn))
    );
}

#[test]
fn test_make_move_rejects_wrong_turn() {
    let mut game = Game::new();
    let before = game.clone();
    let mv = Move::new(Pos::new(9, 6), Pos::new(8, 6));
    assert_eq!(game.make_move(mv), Err(ChessError::IllegalMove(mv)));
    assert_eq!(game, before);
}

#[test]
fn test_make_move_rejects_pattern_violation() {
    let mut game = Game::new();
    let before = game.clone();
    // The rook is boxed in at the start.
    let mv = Move::new(Pos::new(1, 1), Pos::new(5, 1));
    assert_eq!(game.make_move(mv), Err(ChessError::IllegalMove(mv)));
    assert_eq!(game, before);
}

#[test]
fn test_make_move_empty_origin() {
    let mut game = Game::new();
    let mv = Move::new(Pos::new(5, 5), Pos::new(6, 5));
    assert_eq!(
        game.make_move(mv),
        Err(ChessError::NoPieceAtOrigin(Pos::new(5, 5)))
    );
}

#[test]
fn test_out_of_bounds_position_is_an_error() {
    let mut game = Game::new();
    let off = Pos::new(11, 1);
    assert_eq!(game.valid_moves(off), Err(ChessError::InvalidPosition(off)));
    let mv = Move::new(Pos::new(2, 6), Pos::new(2, 12));
    assert_eq!(
        game.make_move(mv),
        Err(ChessError::InvalidPosition(Pos::new(2, 12)))
    );
}

#[test]
fn test_set_board_resets_turn() {
    let mut game = Game::new();
    game.set_side_to_move(Color::Black);
    game.set_board(Board::empty());
    assert_eq!(game.side_to_move(), Color::White);
    assert_eq!(*game.board(), Board::empty());
}

#[test]
fn test_promotion_requires_explicit_kind() {
    let mut game = Game::new();
    game.set_board(Board::from_grid(
        "
        |r| | | | | | | | | | |
        | |O| | | | | | | | | |
        | | | | | | | | | | | |
        | | | | | | | | | | | |
        | | | | | |k| | | | | |
        | | | | | | | | | | | |
        | | | | | | | | | | | |
        | | | | | | | | | | | |
        | | | | | | | | | | | |
        | | | | | |K| | | | | |
        ",
    ));

    let from = Pos::new(9, 2);
    let plain = Move::new(from, Pos::new(10, 2));
    assert_eq!(game.make_move(plain), Err(ChessError::IllegalMove(plain)));
    let to_king = Move::promotion(from, Pos::new(10, 2), PieceKind::King);
    assert_eq!(game.make_move(to_king), Err(ChessError::IllegalMove(to_king)));

    // Capture-promotion onto the enemy rook.
    let capture = Move::promotion(from, Pos::new(10, 1), PieceKind::Rook);
    game.make_move(capture).unwrap();
    assert_eq!(
        game.board().piece_at(Pos::new(10, 1)),
        Some(Piece::new(Color::White, PieceKind::Rook))
    );
    assert_eq!(game.side_to_move(), Color::Black);
}

#[test]
fn test_back_rank_checkmate() {
    let mut game = Game::new();
    game.set_board(Board::from_grid(
        "
        |k| | | |R| | | | | | |
        | | | | |R| | | | | | |
        | | | | | | | | | | | |
        | | | | | | | | | | | |
        | | | | | | | | | | | |
        | | | | | | | | | | | |
        | | | | | | | | | | | |
        | | | | | | | | | | | |
        | | | | | | | | | | | |
        | | | | | |K| | | | | |
        ",
    ));

    assert!(game.in_check(Color::Black));
    assert!(game.in_checkmate(Color::Black));
    assert!(!game.in_stalemate(Color::Black));
    assert!(!game.in_checkmate(Color::White));
}

#[test]
fn test_cornered_king_stalemate() {
    let mut game = Game::new();
    game.set_board(Board::from_grid(
        "
        |k| | | | | | | | | | |
        | | | | |R| | | | | | |
        | | | | | | | | | | | |
        | | | | | | | | | | | |
        | | | | | | | | | | | |
        | | | | | | | | | | | |
        | | | | | | | | | | | |
        | | | | | | | | | | | |
        | | | | | | | | | | | |
        | |R| | | | | | | | | |
        ",
    ));

    assert!(!game.in_check(Color::Black));
    assert!(game.in_stalemate(Color::Black));
    assert!(!game.in_checkmate(Color::Black));
}

#[test]
fn test_escape_by_capture_is_not_mate() {
    // Checked by an adjacent unprotected rook: the king takes it.
    let mut game = Game::new();
    game.set_board(Board::from_grid(
        "
        |k|R| | | | | | | | | |
        | | | | | | | | | | | |
        | | | | | | | | | | | |
        | | | | | | | | | | | |
        | | | | | | | | | | | |
        | | | | | | | | | | | |
        | | | | | | | | | | | |
        | | | | | | | | | | | |
        | | | | | | | | | | | |
        | | | | | |K| | | | | |
        ",
    ));

    assert!(game.in_check(Color::Black));
    assert!(!game.in_checkmate(Color::Black));
    let moves = game.valid_moves(Pos::new(10, 1)).unwrap();
    assert!(moves.contains(&Move::new(Pos::new(10, 1), Pos::new(10, 2))));
}
