use crate::board_location::{offset_location, BoardLocation};
use crate::board_state::BoardState;
use crate::chess_move::ChessMove;

/// Pseudo-legal pawn moves from `from`: single push onto an empty square,
/// double push from the home rank through two empty squares, diagonal
/// captures, and the en-passant capture when the diagonal equals the
/// current en-passant target.
pub fn collect(state: &BoardState, from: BoardLocation, moves: &mut Vec<ChessMove>) {
    let piece = match state.piece_at(&from) {
        Some(piece) => piece,
        None => return,
    };
    let direction = piece.team.pawn_direction();

    if let Ok(one_ahead) = offset_location(&from, direction, 0) {
        if state.piece_at(&one_ahead).is_none() {
            moves.push(ChessMove::new(piece, from, one_ahead, None));
            if from.0 == piece.team.pawn_home_row() {
                if let Ok(two_ahead) = offset_location(&from, 2 * direction, 0) {
                    if state.piece_at(&two_ahead).is_none() {
                        moves.push(ChessMove::new(piece, from, two_ahead, None));
                    }
                }
            }
        }
    }

    for side in [-1, 1] {
        if let Ok(diagonal) = offset_location(&from, direction, side) {
            match state.piece_at(&diagonal) {
                Some(target) if target.team != piece.team => {
                    moves.push(ChessMove::new(piece, from, diagonal, Some(target)));
                }
                None if state.en_passant_target == Some(diagonal) => {
                    moves.push(ChessMove::en_passant(piece, from, diagonal));
                }
                _ => {}
            }
        }
    }
}
