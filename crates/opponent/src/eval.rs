//! Static position evaluation.

use chess_rules::{ChessRules, Position};
use game_core::{Color, Rules, Score};

use crate::pst;

/// Scores a static position from one fixed reference side's perspective.
///
/// The reference side is established once per evaluator — conventionally
/// the side that moves first — and never flips during a search. Positive
/// favors the reference side, negative the opponent, zero is balanced.
pub trait Evaluate<R: Rules> {
    /// The canonical side this evaluator scores for.
    fn reference(&self) -> Color;

    /// Pure function of the position; no side effects.
    fn evaluate(&self, pos: &R::Position) -> Score;
}

/// Material values in points, indexed by piece kind.
/// Order: Pawn, Knight, Bishop, Rook, Queen, King.
///
/// The king value exists only so that mate-adjacent lines dominate the sum;
/// the king is never actually capturable.
const PIECE_VALUES: [Score; 6] = [10, 30, 30, 50, 90, 900];

/// Material plus piece-square evaluation for real chess.
///
/// Every piece contributes its material value, plus a square-dependent
/// bonus for the piece kinds that carry a table (pawn and knight). White
/// contributions are added, Black contributions subtracted, so the score is
/// always from White's perspective regardless of who is to move.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialEval;

impl Evaluate<ChessRules> for MaterialEval {
    fn reference(&self) -> Color {
        Color::White
    }

    fn evaluate(&self, pos: &Position) -> Score {
        let mut score = 0;
        for (sq, color, piece) in pos.pieces() {
            let value = PIECE_VALUES[piece as usize] + pst::bonus(piece, color, sq);
            score += match color {
                Color::White => value,
                Color::Black => -value,
            };
        }
        score
    }
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
