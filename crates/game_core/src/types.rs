use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn other(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    pub fn idx(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }
}

/// Evaluation score in material points, always expressed from the reference
/// side's perspective. Positive favors the reference side.
pub type Score = i32;

/// Search window bound. Kept well inside the `i32` range so negating a bound
/// can never overflow.
pub const INF: Score = i32::MAX / 2;

/// Difficulty setting for the computer opponent.
///
/// Each tier maps to a fixed search depth in plies; `Random` performs no
/// search at all. Depth, not time, is the resource-control knob: the depths
/// are chosen so worst-case node count stays interactive on one thread.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DifficultyTier {
    /// Uniformly random legal move, no search.
    Random,
    /// 2-ply search.
    Shallow,
    /// 3-ply search.
    Deep,
    /// 4-ply search.
    Deepest,
}

impl DifficultyTier {
    /// Search depth in plies, or `None` for the no-search random policy.
    pub fn depth(self) -> Option<u8> {
        match self {
            DifficultyTier::Random => None,
            DifficultyTier::Shallow => Some(2),
            DifficultyTier::Deep => Some(3),
            DifficultyTier::Deepest => Some(4),
        }
    }
}

impl Default for DifficultyTier {
    fn default() -> Self {
        DifficultyTier::Deep
    }
}

/// Result of one move-selection call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Selection<M> {
    /// The chosen move (`None` if the position has no legal moves).
    pub best_move: Option<M>,
    /// Score of the chosen line, from the reference side's perspective.
    pub score: Score,
    /// Search depth used (0 for the random tier).
    pub depth: u8,
    /// Number of search nodes visited.
    pub nodes: u64,
    /// Generation stamp of the selector at call time. A selection whose
    /// ticket no longer matches the selector's generation was computed for a
    /// game that has since been reset and must be discarded, not applied.
    pub ticket: u64,
}
