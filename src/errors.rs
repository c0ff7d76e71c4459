/// Represents all possible error types that can occur in the chess engine.
/// Used throughout the codebase for error handling and reporting.
#[derive(Debug)]
pub enum Errors {
    /// Indicates an attempted access outside the bounds of the chess board.
    OutOfBounds,
    /// A square code string did not name a piece or the empty marker.
    InvalidSquareCode(String),
    /// A board grid was structurally unusable (e.g. a side's king is missing).
    InvalidBoardSetup,
    /// The provided coordinate notation is invalid or could not be parsed.
    InvalidNotation,
    /// The rating log on disk could not be written.
    RatingStoreWrite(String),
}
