//! End-to-end scenarios running the full selector against real positions.

use chess_rules::{ChessRules, Position};
use game_core::{Rules, Score, INF};
use opponent_engine::{search::search, DifficultyTier, Evaluate, MaterialEval, MoveSelector};

/// Unpruned minimax oracle over any rules engine.
fn plain_minimax<R, E>(rules: &R, eval: &E, pos: &R::Position, depth: u8, maximizing: bool) -> Score
where
    R: Rules,
    E: Evaluate<R>,
{
    if depth == 0 || rules.is_game_over(pos) {
        return eval.evaluate(pos);
    }
    let moves = rules.legal_moves(pos);
    if moves.is_empty() {
        return eval.evaluate(pos);
    }
    let mut best = if maximizing { -INF } else { INF };
    for mv in moves {
        let child = rules.apply(pos, mv).expect("legal move");
        let score = plain_minimax(rules, eval, &child, depth - 1, !maximizing);
        best = if maximizing {
            best.max(score)
        } else {
            best.min(score)
        };
    }
    best
}

#[test]
fn alpha_beta_matches_plain_minimax_on_real_positions() {
    let fens = [
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        "r1bqkbnr/pppp1ppp/2n5/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R b KQkq - 0 1",
        "3q3k/8/8/8/8/8/8/3R3K w - - 0 1",
    ];
    for fen in fens {
        let pos = Position::from_fen(fen).unwrap();
        for maximizing in [true, false] {
            let mut nodes = 0;
            let pruned = search(
                &ChessRules,
                &MaterialEval,
                &pos,
                2,
                -INF,
                INF,
                maximizing,
                &mut nodes,
            );
            let plain = plain_minimax(&ChessRules, &MaterialEval, &pos, 2, maximizing);
            assert_eq!(pruned, plain, "{fen} maximizing={maximizing}");
        }
    }
}

#[test]
fn deep_tier_finds_the_queen_capture() {
    // The reference side is to move; Rxd8 wins +90 of material while every
    // alternative is worth at most a few points two plies out.
    let pos = Position::from_fen("3q3k/8/8/8/8/8/8/3R3K w - - 0 1").unwrap();
    let capture = pos.parse_move("d1d8").unwrap();

    let mut sel = MoveSelector::with_seed(ChessRules, MaterialEval, 17);
    let selection = sel.select_move(&pos, DifficultyTier::Deep);

    assert_eq!(selection.depth, 3);
    assert_eq!(selection.best_move, Some(capture));
    assert!(selection.score >= 40, "score {}", selection.score);
}

#[test]
fn selector_plays_a_clean_stretch_of_game() {
    // Alternate selections for both sides from the start; every chosen move
    // must be legal, every application must succeed.
    let rules = ChessRules;
    let mut sel = MoveSelector::chess();
    let mut pos = Position::startpos();

    for ply in 0..10 {
        let selection = sel.select_move(&pos, DifficultyTier::Shallow);
        let Some(mv) = selection.best_move else {
            break; // game actually ended
        };
        assert!(
            rules.legal_moves(&pos).contains(&mv),
            "ply {ply}: illegal move {mv}"
        );
        pos = rules.apply(&pos, mv).expect("selected move must apply");
    }
}
