use super::*;
use game_core::Rules;

const STARTPOS_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

#[test]
fn startpos_has_twenty_legal_moves() {
    let rules = ChessRules;
    let pos = Position::startpos();
    assert_eq!(rules.legal_moves(&pos).len(), 20);
    assert!(!rules.is_game_over(&pos));
    assert_eq!(rules.side_to_move(&pos), game_core::Color::White);
}

#[test]
fn fen_round_trips() {
    let pos = Position::from_fen(STARTPOS_FEN).unwrap();
    assert_eq!(pos.fen(), STARTPOS_FEN);

    let mid = "r1bqkbnr/pppp1Qpp/2n5/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR b KQkq - 0 1";
    assert_eq!(Position::from_fen(mid).unwrap().fen(), mid);
}

#[test]
fn bad_fen_is_rejected() {
    assert!(Position::from_fen("not a position").is_err());
    assert!(Position::from_fen("").is_err());
}

#[test]
fn apply_returns_a_distinct_position() {
    let rules = ChessRules;
    let pos = Position::startpos();
    let mv = pos.parse_move("e2e4").unwrap();

    let next = rules.apply(&pos, mv).unwrap();
    assert_eq!(rules.side_to_move(&next), game_core::Color::Black);
    // The input position is untouched.
    assert_eq!(pos.fen(), STARTPOS_FEN);
}

#[test]
fn apply_rejects_illegal_moves() {
    let rules = ChessRules;
    let pos = Position::startpos();
    let mv: Move = "e2e5".parse().unwrap();
    assert!(rules.apply(&pos, mv).is_none());
}

#[test]
fn parse_move_checks_legality() {
    let pos = Position::startpos();
    assert!(pos.parse_move("e2e4").is_ok());
    assert!(matches!(pos.parse_move("zz9"), Err(MoveError::Syntax(_))));
    assert!(matches!(pos.parse_move("e2e5"), Err(MoveError::Illegal(_))));
}

#[test]
fn checkmate_is_game_over() {
    let rules = ChessRules;
    let pos =
        Position::from_fen("r1bqkbnr/pppp1Qpp/2n5/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR b KQkq - 0 1")
            .unwrap();
    assert!(rules.is_game_over(&pos));
    assert!(rules.legal_moves(&pos).is_empty());
    assert!(pos.is_checkmate());
    assert!(!pos.is_draw());
}

#[test]
fn stalemate_is_a_draw() {
    let rules = ChessRules;
    let pos = Position::from_fen("k7/8/1Q6/8/8/8/8/1K6 b - - 0 1").unwrap();
    assert!(rules.is_game_over(&pos));
    assert!(rules.legal_moves(&pos).is_empty());
    assert!(pos.is_draw());
    assert!(!pos.is_checkmate());
}

#[test]
fn move_order_is_stable() {
    let rules = ChessRules;
    let pos = Position::from_fen("4k3/8/8/8/8/8/8/R3K2R w KQ - 0 1").unwrap();
    let first = rules.legal_moves(&pos);
    let second = rules.legal_moves(&pos);
    assert_eq!(first, second);
}
