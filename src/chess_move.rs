use crate::board_location::{location_to_notation, BoardLocation};
use crate::piece_record::PieceRecord;
use crate::piece_types::PieceClass;

/// Immutable description of a single ply transition.
///
/// Instances are produced by the move generator and are valid only for the
/// board they were generated from; constructing one for squares that do not
/// correspond to an actual piece transition is undefined.
///
/// Equality is defined solely by the (start, stop) square pair. Two legal
/// moves sharing squares but differing in special flags compare equal; this
/// never arises under standard rules but is a structural limitation of the
/// move identity.
#[derive(Clone, Debug)]
pub struct ChessMove {
    pub start: BoardLocation,
    pub stop: BoardLocation,
    pub piece_moved: PieceRecord,
    pub piece_taken: Option<PieceRecord>,
    pub is_en_passant: bool,
    pub is_castling: bool,
    pub is_promotion: bool,
}

impl ChessMove {
    /// An ordinary move or capture. `piece_taken` is the destination square's
    /// occupant. Promotion is derived from the mover reaching its last rank.
    pub fn new(
        piece_moved: PieceRecord,
        start: BoardLocation,
        stop: BoardLocation,
        piece_taken: Option<PieceRecord>,
    ) -> Self {
        let is_promotion =
            piece_moved.class == PieceClass::Pawn && stop.0 == piece_moved.team.promotion_row();
        ChessMove {
            start,
            stop,
            piece_moved,
            piece_taken,
            is_en_passant: false,
            is_castling: false,
            is_promotion,
        }
    }

    /// An en-passant capture. The captured pawn sits beside the mover, not on
    /// the destination square, so the taken piece is filled in here rather
    /// than read from the destination.
    pub fn en_passant(piece_moved: PieceRecord, start: BoardLocation, stop: BoardLocation) -> Self {
        let taken = PieceRecord::new(piece_moved.team.opponent(), PieceClass::Pawn);
        ChessMove {
            start,
            stop,
            piece_moved,
            piece_taken: Some(taken),
            is_en_passant: true,
            is_castling: false,
            is_promotion: false,
        }
    }

    /// A castling move described by the king's two-square displacement. The
    /// rook relocation is handled when the move is applied.
    pub fn castling(piece_moved: PieceRecord, start: BoardLocation, stop: BoardLocation) -> Self {
        ChessMove {
            start,
            stop,
            piece_moved,
            piece_taken: None,
            is_en_passant: false,
            is_castling: true,
            is_promotion: false,
        }
    }

    pub fn is_capture(&self) -> bool {
        self.piece_taken.is_some()
    }

    /// Whether this is a two-square pawn advance, which arms the en-passant
    /// target for the following ply.
    pub fn is_double_pawn_push(&self) -> bool {
        self.piece_moved.class == PieceClass::Pawn && (self.start.0 - self.stop.0).abs() == 2
    }

    /// Renders this move in coordinate notation (e.g., "e2e4").
    ///
    /// No disambiguation, capture, promotion-piece, or check suffix is encoded.
    pub fn to_notation(&self) -> String {
        format!(
            "{}{}",
            location_to_notation(&self.start),
            location_to_notation(&self.stop)
        )
    }
}

impl PartialEq for ChessMove {
    fn eq(&self, other: &Self) -> bool {
        self.start == other.start && self.stop == other.stop
    }
}

impl Eq for ChessMove {}
