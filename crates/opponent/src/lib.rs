//! Computer-opponent move selection.
//!
//! Depth-limited minimax with alpha-beta pruning over a material plus
//! piece-square evaluation, parameterized by difficulty tiers. The chess
//! rules themselves (move generation, transitions, terminal detection) are
//! supplied externally through the [`game_core::Rules`] trait; the real
//! chess instantiation lives in `chess_rules`.
//!
//! One selection call is a pure, synchronous, single-threaded computation:
//! everything it allocates is discarded once a move is returned, and no
//! state survives across turns except the RNG and the generation counter
//! used for stale-result detection.

pub mod eval;
mod pst;
pub mod search;

pub use eval::{Evaluate, MaterialEval};
pub use game_core::{Color, DifficultyTier, Rules, Score, Selection, INF};

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::{debug, trace, warn};


/// Top-level driver: enumerates candidate moves, runs the search per
/// candidate, and picks one according to the mover's color and the tier's
/// policy.
///
/// The caller owns mutual exclusion: no two selections may run concurrently
/// for the same game session, and a new one must not start while a previous
/// one is in flight. When a game is reset mid-search, call
/// [`MoveSelector::new_game`] and use [`MoveSelector::is_current`] to
/// discard the stale result instead of applying it.
pub struct MoveSelector<R: Rules, E: Evaluate<R>> {
    rules: R,
    eval: E,
    rng: SmallRng,
    generation: u64,
}

impl MoveSelector<chess_rules::ChessRules, MaterialEval> {
    /// Selector for real chess with the default material evaluation.
    pub fn chess() -> Self {
        Self::new(chess_rules::ChessRules, MaterialEval)
    }
}

impl<R: Rules, E: Evaluate<R>> MoveSelector<R, E> {
    pub fn new(rules: R, eval: E) -> Self {
        Self {
            rules,
            eval,
            rng: SmallRng::from_entropy(),
            generation: 0,
        }
    }

    /// Selector with a fixed RNG seed, for reproducible games and tests.
    pub fn with_seed(rules: R, eval: E, seed: u64) -> Self {
        Self {
            rules,
            eval,
            rng: SmallRng::seed_from_u64(seed),
            generation: 0,
        }
    }

    /// Resets for a new game (rematch). Any selection obtained before this
    /// call is reported stale by [`MoveSelector::is_current`] afterwards.
    pub fn new_game(&mut self) {
        self.generation += 1;
    }

    /// True if `selection` was produced for the current game, false if the
    /// selector has been reset since and the result must be discarded.
    pub fn is_current(&self, selection: &Selection<R::Move>) -> bool {
        selection.ticket == self.generation
    }

    /// Picks a move for the side to move in `pos`, or `None` if the
    /// position has no legal moves (game over — the caller must not ask
    /// again without producing a new position).
    pub fn select_move(&mut self, pos: &R::Position, tier: DifficultyTier) -> Selection<R::Move> {
        let ticket = self.generation;
        let mut moves = self.rules.legal_moves(pos);

        if moves.is_empty() {
            debug!(?tier, "no legal moves, game over");
            return Selection {
                best_move: None,
                score: self.eval.evaluate(pos),
                depth: 0,
                nodes: 0,
                ticket,
            };
        }

        let Some(depth) = tier.depth() else {
            let best_move = moves.choose(&mut self.rng).copied();
            debug!(?best_move, "random tier pick");
            return Selection {
                best_move,
                score: self.eval.evaluate(pos),
                depth: 0,
                nodes: 1,
                ticket,
            };
        };

        // Shuffling before scoring is deliberate: the strict comparison
        // below keeps the earliest candidate on ties, so the shuffle doubles
        // as a random tie-break and gives the opponent opening variety.
        moves.shuffle(&mut self.rng);

        let mover = self.rules.side_to_move(pos);
        let mover_maximizes = mover == self.eval.reference();
        let mut nodes = 0u64;
        let mut best: Option<(R::Move, Score)> = None;

        for &mv in &moves {
            let Some(child) = self.rules.apply(pos, mv) else {
                // Unreachable for moves obtained from legal_moves; skip the
                // candidate rather than aborting the whole selection.
                warn!(?mv, "rules engine rejected a generated move");
                continue;
            };
            // After the candidate it is the opponent's turn, so the child
            // node maximizes exactly when the mover does not.
            let score = search::search(
                &self.rules,
                &self.eval,
                &child,
                depth.saturating_sub(1),
                -INF,
                INF,
                !mover_maximizes,
                &mut nodes,
            );
            trace!(?mv, score, "scored candidate");

            let better = match best {
                None => true,
                Some((_, best_score)) => {
                    if mover_maximizes {
                        score > best_score
                    } else {
                        score < best_score
                    }
                }
            };
            if better {
                best = Some((mv, score));
            }
        }

        // `best` is set as soon as one candidate applies cleanly; if that
        // somehow never happened, fall back to the first enumerated move
        // rather than failing.
        let (best_move, score) = best.unwrap_or((moves[0], self.eval.evaluate(pos)));
        debug!(?tier, depth, ?best_move, score, nodes, "selection complete");

        Selection {
            best_move: Some(best_move),
            score,
            depth,
            nodes,
            ticket,
        }
    }
}
