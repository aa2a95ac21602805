//! Piece-square tables.
//!
//! Each table is authored once from White's viewpoint, with rank 1 at
//! indices 0..8 and files running a..h within a rank. A Black piece looks
//! up the vertically mirrored square, so one table serves both colors.
//!
//! Only pawns and knights carry a table; every other piece kind contributes
//! material value only. That is an intentional simplification, not an
//! oversight — see DESIGN.md before extending it.

use chess_rules::{Piece, Square};
use game_core::{Color, Score};

const PAWN_PST: [Score; 64] = [
    0,  0,  0,  0,  0,  0,  0,  0, // Rank 1
    1,  1,  1, -2, -2,  1,  1,  1, // Rank 2 - keep shelter pawns home
    1, -1, -1,  0,  0, -1, -1,  1, // Rank 3
    0,  0,  0,  2,  2,  0,  0,  0, // Rank 4 - central pawns
    1,  1,  1,  3,  3,  1,  1,  1, // Rank 5
    1,  1,  2,  3,  3,  2,  1,  1, // Rank 6
    5,  5,  5,  5,  5,  5,  5,  5, // Rank 7 - about to promote
    0,  0,  0,  0,  0,  0,  0,  0, // Rank 8
];

const KNIGHT_PST: [Score; 64] = [
    -5, -4, -3, -3, -3, -3, -4, -5, // Rank 1 - knights belong in the center
    -4, -2,  0,  1,  1,  0, -2, -4, // Rank 2
    -3,  1,  1,  2,  2,  1,  1, -3, // Rank 3
    -3,  0,  2,  2,  2,  2,  0, -3, // Rank 4
    -3,  1,  2,  2,  2,  2,  1, -3, // Rank 5
    -3,  0,  1,  2,  2,  1,  0, -3, // Rank 6
    -4, -2,  0,  0,  0,  0, -2, -4, // Rank 7
    -5, -4, -3, -3, -3, -3, -4, -5, // Rank 8
];

/// Positional bonus for `piece` of `color` standing on `sq`.
///
/// Zero for piece kinds without a table.
pub fn bonus(piece: Piece, color: Color, sq: Square) -> Score {
    let sq = match color {
        Color::White => sq,
        Color::Black => sq.flip_rank(),
    };
    match piece {
        Piece::Pawn => PAWN_PST[sq as usize],
        Piece::Knight => KNIGHT_PST[sq as usize],
        _ => 0,
    }
}
