use crate::board_location::{offset_location, BoardLocation};
use crate::board_state::BoardState;
use crate::chess_move::ChessMove;

/// Pseudo-legal king steps to the eight neighboring squares. Castling is
/// produced separately because its legality tests probe threatened squares.
pub fn collect(state: &BoardState, from: BoardLocation, moves: &mut Vec<ChessMove>) {
    let piece = match state.piece_at(&from) {
        Some(piece) => piece,
        None => return,
    };
    for d_row in -1..=1 {
        for d_col in -1..=1 {
            if d_row == 0 && d_col == 0 {
                continue;
            }
            if let Ok(stop) = offset_location(&from, d_row, d_col) {
                match state.piece_at(&stop) {
                    Some(target) if target.team == piece.team => {}
                    target => moves.push(ChessMove::new(piece, from, stop, target)),
                }
            }
        }
    }
}
