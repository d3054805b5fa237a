//! Adapter boundary tests: JSON moves, state views, snapshots.

use aadu_puli::board::BoardBuilder;
use aadu_puli::wire::{parse_move, restore, snapshot};
use aadu_puli::{AaduPuli, Error, Move, MoveRequest, RulesEngine, Side, StateBuilder, StateView};

#[test]
fn test_parsed_move_applies() {
    let game = AaduPuli::standard();
    let state = game.new_state();

    let mv = parse_move(r#"{"type":"PLACE","to":12}"#).unwrap();
    let next = game.play(&state, mv).unwrap();
    assert_eq!(next.goats_placed(), 1);
}

#[test]
fn test_well_formed_but_illegal() {
    let game = AaduPuli::standard();
    let state = game.new_state();

    let mv = parse_move(r#"{"type":"PLACE","to":3}"#).unwrap();
    let err: Error = game.play(&state, mv).unwrap_err().into();
    assert!(matches!(err, Error::IllegalMove(_)));
}

#[test]
fn test_move_and_request_share_json_shape() {
    for mv in [Move::place(4), Move::step(3, 9), Move::capture(0, 2, 8)] {
        let from_move = serde_json::to_value(mv).unwrap();
        let from_request = serde_json::to_value(MoveRequest::from(mv)).unwrap();
        assert_eq!(from_move, from_request);
        assert_eq!(parse_move(&from_move.to_string()).unwrap(), mv);
    }
}

#[test]
fn test_node_suffixed_fields_accepted() {
    let mv = parse_move(r#"{"type":"CAPTURE","from_node":0,"to_node":8,"capture_node":2}"#);
    assert_eq!(mv.unwrap(), Move::capture(0, 2, 8));

    let mv = parse_move(r#"{"type":"MOVE","from_node":3,"to_node":9}"#);
    assert_eq!(mv.unwrap(), Move::step(3, 9));

    // Both spellings of one field is a duplicate, not two fields.
    assert!(parse_move(r#"{"type":"PLACE","to":1,"to_node":2}"#).is_err());
}

#[test]
fn test_view_of_finished_game() {
    let game = AaduPuli::standard();
    let state = StateBuilder::new()
        .goats(&[1, 2, 5, 6, 8, 9, 10, 11, 15, 16])
        .turn(Side::Tiger)
        .build(game.board())
        .unwrap();

    let view = StateView::new(&game, &state);
    assert_eq!(view.winner, Some(Side::Goat));
    assert!(view.valid_moves.is_empty());
    assert_eq!(view.board.iter().filter(|c| **c == Some(Side::Goat)).count(), 10);
}

#[test]
fn test_view_lists_same_moves_as_engine() {
    let game = AaduPuli::standard();
    let state = game.play(&game.new_state(), Move::place(2)).unwrap();

    let view = StateView::new(&game, &state);
    assert_eq!(view.valid_moves, game.generate_moves(&state));
    assert!(view.valid_moves.contains(&Move::capture(0, 2, 8)));
}

#[test]
fn test_snapshot_survives_a_game() {
    let game = AaduPuli::standard();
    let mut state = game.new_state();
    for mv in [Move::place(1), Move::step(3, 9), Move::place(2)] {
        state = game.play(&state, mv).unwrap();
    }

    let restored = restore(&snapshot(&state).unwrap(), game.board()).unwrap();
    assert_eq!(restored, state);
    assert_eq!(game.generate_moves(&restored), game.generate_moves(&state));
}

#[test]
fn test_snapshot_for_other_board_rejected() {
    let game = AaduPuli::standard();
    let bytes = snapshot(&game.new_state()).unwrap();

    let small = BoardBuilder::new(5)
        .path(&[0, 1, 2, 3, 4])
        .tiger_starts([0, 1, 2])
        .build()
        .unwrap();
    assert!(matches!(restore(&bytes, &small), Err(Error::InvalidSetup { .. })));
}
