//! Chess rules adapter.
//!
//! All actual chess logic — move generation, position transitions, check and
//! draw adjudication — lives in `cozy-chess`. This crate only translates
//! that API into the [`game_core::Rules`] contract the opponent engine
//! consumes, and provides the serialization boundary (FEN, coordinate move
//! strings) the surrounding application needs.

mod position;

pub use cozy_chess::{Move, Piece, Square};
pub use position::{FenError, MoveError, Position};

use cozy_chess::GameStatus;
use game_core::{Color, Rules};

#[cfg(test)]
mod lib_tests;

fn side(color: cozy_chess::Color) -> Color {
    match color {
        cozy_chess::Color::White => Color::White,
        cozy_chess::Color::Black => Color::Black,
    }
}

/// Stateless handle implementing the rules-engine contract for real chess.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChessRules;

impl Rules for ChessRules {
    type Position = Position;
    type Move = Move;

    fn legal_moves_into(&self, pos: &Position, out: &mut Vec<Move>) {
        pos.board().generate_moves(|moves| {
            out.extend(moves);
            false
        });
    }

    fn apply(&self, pos: &Position, mv: Move) -> Option<Position> {
        let mut next = pos.board().clone();
        next.try_play(mv).ok()?;
        Some(Position::from(next))
    }

    fn is_game_over(&self, pos: &Position) -> bool {
        pos.board().status() != GameStatus::Ongoing
    }

    fn side_to_move(&self, pos: &Position) -> Color {
        side(pos.board().side_to_move())
    }
}
