use crate::errors::Errors;

/// A `(row, col)` pair indexing the 8x8 grid.
///
/// Row 0 is rank 8 (black's back rank), row 7 is rank 1; column 0 is file a.
pub type BoardLocation = (i8, i8);

/// Returns true when the location lies on the board.
pub fn on_board(x: &BoardLocation) -> bool {
    (0..8).contains(&x.0) && (0..8).contains(&x.1)
}

/// Moves a board location by a row and column offset.
///
/// # Returns
///
/// * `Result<BoardLocation, Errors>` - The new board location if within bounds, otherwise `Errors::OutOfBounds`.
pub fn offset_location(x: &BoardLocation, d_row: i8, d_col: i8) -> Result<BoardLocation, Errors> {
    let y: BoardLocation = (x.0 + d_row, x.1 + d_col);
    if on_board(&y) {
        Ok(y)
    } else {
        Err(Errors::OutOfBounds)
    }
}

/// Renders a location in algebraic coordinates: file letter a-h, rank digit 1-8.
///
/// Row 0 maps to rank 8, so `(6, 4)` renders as `"e2"`.
pub fn location_to_notation(x: &BoardLocation) -> String {
    let file = (b'a' + x.1 as u8) as char;
    let rank = (b'8' - x.0 as u8) as char;
    format!("{}{}", file, rank)
}

/// Parses a two-character coordinate like `"e2"` back into a `(row, col)` pair.
pub fn notation_to_location(x: &str) -> Result<BoardLocation, Errors> {
    let bytes = x.as_bytes();
    if bytes.len() != 2 {
        return Err(Errors::InvalidNotation);
    }
    let col = match bytes[0] {
        b'a'..=b'h' => (bytes[0] - b'a') as i8,
        _ => return Err(Errors::InvalidNotation),
    };
    let row = match bytes[1] {
        b'1'..=b'8' => (b'8' - bytes[1]) as i8,
        _ => return Err(Errors::InvalidNotation),
    };
    Ok((row, col))
}
