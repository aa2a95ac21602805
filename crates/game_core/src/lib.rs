pub mod types;

pub use types::*;


// =============================================================================
// Rules trait — the contract the move selector consumes from the external
// rules engine (move generation, transitions, terminal detection).
// =============================================================================

/// External rules-engine contract.
///
/// The opponent engine never inspects a position directly; everything it
/// needs — legal moves, transitions, terminal detection, whose turn it is —
/// comes through this trait. That keeps the search generic: the real chess
/// adapter and the small synthetic games used in tests both implement it.
pub trait Rules {
    /// Opaque, self-consistent snapshot of game state plus side to move.
    type Position: Clone;
    /// A move, meaningful only relative to the position it was generated from.
    type Move: Copy + PartialEq + std::fmt::Debug;

    /// Fills `out` with every legal move for `pos`.
    ///
    /// The order is implementation-defined but must be stable for a given
    /// position, so that search results are reproducible.
    fn legal_moves_into(&self, pos: &Self::Position, out: &mut Vec<Self::Move>);

    /// Convenience wrapper around [`Rules::legal_moves_into`].
    fn legal_moves(&self, pos: &Self::Position) -> Vec<Self::Move> {
        let mut moves = Vec::with_capacity(64);
        self.legal_moves_into(pos, &mut moves);
        moves
    }

    /// Applies `mv` to `pos` and returns the resulting position.
    ///
    /// Returns `None` if the move is not legal for this position. The input
    /// position is never mutated; sibling search branches can keep borrowing
    /// it safely.
    fn apply(&self, pos: &Self::Position, mv: Self::Move) -> Option<Self::Position>;

    /// True when no further moves can be played from `pos`.
    fn is_game_over(&self, pos: &Self::Position) -> bool;

    /// Which side is to move in `pos`.
    fn side_to_move(&self, pos: &Self::Position) -> Color;
}
