//! Depth-limited minimax with alpha-beta pruning.

use game_core::{Rules, Score};

use crate::eval::Evaluate;

/// Scores `pos` by recursive minimax with alpha-beta pruning.
///
/// The returned score is always from the evaluator's fixed reference
/// perspective; it is never negated along the way. The `maximizing` flag
/// only says whose turn it is to prefer high or low values of that score.
///
/// Terminal nodes — `depth == 0`, game over, or no legal moves — return the
/// static evaluation directly. A position with no legal moves is game over
/// by definition, so both cases land in the same place.
///
/// For a fixed move-enumeration order the result is deterministic, and
/// pruning never changes the returned value, only how many nodes are
/// visited (tracked in `nodes`).
pub fn search<R, E>(
    rules: &R,
    eval: &E,
    pos: &R::Position,
    depth: u8,
    mut alpha: Score,
    mut beta: Score,
    maximizing: bool,
    nodes: &mut u64,
) -> Score
where
    R: Rules,
    E: Evaluate<R>,
{
    *nodes += 1;

    if depth == 0 || rules.is_game_over(pos) {
        return eval.evaluate(pos);
    }

    let moves = rules.legal_moves(pos);
    if moves.is_empty() {
        return eval.evaluate(pos);
    }

    if maximizing {
        let mut best = -game_core::INF;
        for mv in moves {
            let Some(child) = rules.apply(pos, mv) else {
                continue;
            };
            let score = search(rules, eval, &child, depth - 1, alpha, beta, false, nodes);
            best = best.max(score);
            alpha = alpha.max(best);
            if beta <= alpha {
                break; // remaining siblings cannot affect the result
            }
        }
        best
    } else {
        let mut best = game_core::INF;
        for mv in moves {
            let Some(child) = rules.apply(pos, mv) else {
                continue;
            };
            let score = search(rules, eval, &child, depth - 1, alpha, beta, true, nodes);
            best = best.min(score);
            beta = beta.min(best);
            if beta <= alpha {
                break;
            }
        }
        best
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
