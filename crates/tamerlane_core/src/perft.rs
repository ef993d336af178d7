use crate::game::Game;
use crate::movegen;

/// Pure perft node count: the number of legal move sequences of length
/// `depth` from the current game state, alternating sides via the
/// controller. Validation tool for the move generator.
pub fn perft(game: &Game, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }
    let mut nodes = 0u64;
    for (from, _) in game.board().pieces_of(game.side_to_move()) {
        for mv in movegen::valid_moves(game.board(), from) {
            let mut next = game.clone();
            next.make_move(mv).expect("generated move must be legal");
            nodes += perft(&next, depth - 1);
        }
    }
    nodes
}
