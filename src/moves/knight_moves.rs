use crate::board_location::{offset_location, BoardLocation};
use crate::board_state::BoardState;
use crate::chess_move::ChessMove;

const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-1, -2),
    (-2, 1),
    (-1, 2),
    (2, 1),
    (1, 2),
    (2, -1),
    (1, -2),
];

/// Pseudo-legal knight moves: the fixed eight offsets, filtered to board
/// bounds and non-friendly destinations.
pub fn collect(state: &BoardState, from: BoardLocation, moves: &mut Vec<ChessMove>) {
    let piece = match state.piece_at(&from) {
        Some(piece) => piece,
        None => return,
    };
    for (d_row, d_col) in KNIGHT_OFFSETS {
        if let Ok(stop) = offset_location(&from, d_row, d_col) {
            match state.piece_at(&stop) {
                Some(target) if target.team == piece.team => {}
                target => moves.push(ChessMove::new(piece, from, stop, target)),
            }
        }
    }
}
