use crate::board_location::{offset_location, BoardLocation};
use crate::board_state::BoardState;
use crate::chess_move::ChessMove;

/// Appends the legal castling moves for the side to move, given its king's
/// current square.
///
/// A castle is produced only when the relevant right is still held, the king
/// is not currently threatened, the squares between king and rook are empty,
/// and every square the king transits (destination included) is safe. Threat
/// probing mutates the side-to-move marker, hence the mutable state.
pub fn collect(state: &mut BoardState, king_at: BoardLocation, moves: &mut Vec<ChessMove>) {
    if state.square_threatened(king_at) {
        return;
    }
    let team = state.turn;
    if state.castle_rights.kingside(team) {
        collect_kingside(state, king_at, moves);
    }
    if state.castle_rights.queenside(team) {
        collect_queenside(state, king_at, moves);
    }
}

fn collect_kingside(state: &mut BoardState, king_at: BoardLocation, moves: &mut Vec<ChessMove>) {
    let (one, two) = match (
        offset_location(&king_at, 0, 1),
        offset_location(&king_at, 0, 2),
    ) {
        (Ok(one), Ok(two)) => (one, two),
        _ => return,
    };
    if state.piece_at(&one).is_none() && state.piece_at(&two).is_none() {
        if !state.square_threatened(one) && !state.square_threatened(two) {
            if let Some(king) = state.piece_at(&king_at) {
                moves.push(ChessMove::castling(king, king_at, two));
            }
        }
    }
}

fn collect_queenside(state: &mut BoardState, king_at: BoardLocation, moves: &mut Vec<ChessMove>) {
    let (one, two, three) = match (
        offset_location(&king_at, 0, -1),
        offset_location(&king_at, 0, -2),
        offset_location(&king_at, 0, -3),
    ) {
        (Ok(one), Ok(two), Ok(three)) => (one, two, three),
        _ => return,
    };
    let lane_clear = state.piece_at(&one).is_none()
        && state.piece_at(&two).is_none()
        && state.piece_at(&three).is_none();
    if lane_clear && !state.square_threatened(one) && !state.square_threatened(two) {
        if let Some(king) = state.piece_at(&king_at) {
            moves.push(ChessMove::castling(king, king_at, two));
        }
    }
}
