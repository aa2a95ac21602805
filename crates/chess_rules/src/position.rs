use cozy_chess::{Board, GameStatus, Move, Piece, Square};
use game_core::Color;
use thiserror::Error;

use crate::side;

/// Returned when a FEN string cannot be parsed into a position.
#[derive(Debug, Error)]
#[error("invalid FEN string: {0:?}")]
pub struct FenError(pub String);

/// Returned by [`Position::parse_move`] at the application boundary.
#[derive(Debug, Error)]
pub enum MoveError {
    #[error("unparseable move string: {0:?}")]
    Syntax(String),
    #[error("move {0} is not legal in this position")]
    Illegal(Move),
}

/// Immutable snapshot of a chess game state.
///
/// A `Position` is only ever produced by the rules engine (start position,
/// FEN parsing, or [`crate::ChessRules::apply`]) and is self-consistent by
/// construction. The opponent engine treats it as an opaque value.
#[derive(Debug, Clone)]
pub struct Position(Board);

impl Position {
    /// The standard chess starting position.
    pub fn startpos() -> Self {
        Position(Board::default())
    }

    /// Parses a FEN string.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        Board::from_fen(fen, false)
            .map(Position)
            .map_err(|_| FenError(fen.to_string()))
    }

    /// Serializes the position back to FEN. Round-trips with
    /// [`Position::from_fen`] to an equivalent position.
    pub fn fen(&self) -> String {
        self.0.to_string()
    }

    /// Parses a coordinate move string ("e2e4", "e7e8q") and checks it is
    /// legal here. Castling uses the king-takes-rook convention ("e1h1").
    pub fn parse_move(&self, s: &str) -> Result<Move, MoveError> {
        let mv: Move = s.parse().map_err(|_| MoveError::Syntax(s.to_string()))?;
        if self.0.is_legal(mv) {
            Ok(mv)
        } else {
            Err(MoveError::Illegal(mv))
        }
    }

    pub fn side_to_move(&self) -> Color {
        side(self.0.side_to_move())
    }

    /// The side to move has no legal moves and is in check.
    pub fn is_checkmate(&self) -> bool {
        self.0.status() == GameStatus::Won
    }

    /// Stalemate or a 50-move-rule draw.
    pub fn is_draw(&self) -> bool {
        self.0.status() == GameStatus::Drawn
    }

    /// Iterates every piece on the board. Used by the evaluator.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Color, Piece)> + '_ {
        self.0.occupied().into_iter().filter_map(move |sq| {
            let piece = self.0.piece_on(sq)?;
            let color = self.0.color_on(sq)?;
            Some((sq, side(color), piece))
        })
    }

    pub(crate) fn board(&self) -> &Board {
        &self.0
    }
}

impl From<Board> for Position {
    fn from(board: Board) -> Self {
        Position(board)
    }
}
