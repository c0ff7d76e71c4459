use crate::board_location::{offset_location, BoardLocation};
use crate::board_state::BoardState;
use crate::chess_move::ChessMove;

const ROOK_DIRECTIONS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (-1, 1), (1, -1), (-1, -1)];

pub fn collect_rook(state: &BoardState, from: BoardLocation, moves: &mut Vec<ChessMove>) {
    walk_rays(state, from, &ROOK_DIRECTIONS, moves);
}

pub fn collect_bishop(state: &BoardState, from: BoardLocation, moves: &mut Vec<ChessMove>) {
    walk_rays(state, from, &BISHOP_DIRECTIONS, moves);
}

pub fn collect_queen(state: &BoardState, from: BoardLocation, moves: &mut Vec<ChessMove>) {
    walk_rays(state, from, &ROOK_DIRECTIONS, moves);
    walk_rays(state, from, &BISHOP_DIRECTIONS, moves);
}

/// Walks each direction vector square by square until the board edge, a
/// friendly piece (ray stops before it), or an enemy piece (included, then
/// the ray stops).
fn walk_rays(
    state: &BoardState,
    from: BoardLocation,
    directions: &[(i8, i8)],
    moves: &mut Vec<ChessMove>,
) {
    let piece = match state.piece_at(&from) {
        Some(piece) => piece,
        None => return,
    };
    for (d_row, d_col) in directions {
        for step in 1..8 {
            let stop = match offset_location(&from, d_row * step, d_col * step) {
                Ok(stop) => stop,
                Err(_) => break,
            };
            match state.piece_at(&stop) {
                None => moves.push(ChessMove::new(piece, from, stop, None)),
                Some(target) if target.team != piece.team => {
                    moves.push(ChessMove::new(piece, from, stop, Some(target)));
                    break;
                }
                Some(_) => break,
            }
        }
    }
}
