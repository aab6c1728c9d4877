// tests/api_test.rs
//
// Внешний API: команды, запросы, DTO и скрытие карт соперника.

mod common;

use common::{c, init_logging, scripted_deal};
use fox_engine::{
    api::{
        commands::{execute_command, parse_command, ApplyPlayCommand, Command},
        dto::{CommandResponse, GameViewDto},
        errors::ApiError,
        queries::{execute_query, Query, QueryResponse},
    },
    domain::{GameId, RuleConfig},
    engine::{GameController, PendingResponse, PlayKind},
    infra::DeterministicRng,
};

fn setup() -> (GameController<DeterministicRng>, GameId) {
    init_logging();
    let ctl = GameController::new(RuleConfig::compact(), DeterministicRng::from_seed(11)).unwrap();
    let (id, _) = ctl.new_game_with_deal(scripted_deal()).unwrap();
    (ctl, id)
}

fn play_cmd(game_id: GameId, player: usize, card: &str) -> Command {
    Command::ApplyPlay(ApplyPlayCommand {
        game_id,
        player,
        card: card.to_string(),
        kind: None,
    })
}

fn view(ctl: &GameController<DeterministicRng>, game_id: GameId, viewer: Option<usize>) -> GameViewDto {
    match execute_query(
        ctl,
        Query::GetState {
            game_id,
            step: None,
            viewer,
        },
    )
    .unwrap()
    {
        QueryResponse::Game(v) => v,
        other => panic!("unexpected response {other:?}"),
    }
}

#[test]
fn new_game_command_returns_creator_view() {
    let (ctl, _) = setup();
    let resp = execute_command(&ctl, Command::NewGame { viewer: 1 }).unwrap();

    let CommandResponse::GameCreated { game_id, view } = resp else {
        panic!("expected GameCreated");
    };
    assert!(ctl.has_game(game_id));
    assert_eq!(view.game_id, game_id);
    assert_eq!(view.step, 0);
    assert_eq!(view.viewer, Some(1));
    assert_eq!(view.players.len(), 2);
    assert_eq!(view.players[0].hand, vec!["xx"; 6]);
    assert!(view.players[1].hand.iter().all(|t| t != "xx"));
    assert_eq!(view.players[1].hand.len(), 6);
    assert!(view.players.iter().all(|p| p.trick_card == "xx"));
    assert_eq!(view.draw_deck_size, 5);
    assert_eq!(view.draw_deck, None);
    assert_ne!(view.trump_card, "xx");
    assert!(!view.finished);
    assert_eq!(view.summary, None);
}

#[test]
fn apply_play_returns_view_for_acting_player() {
    let (ctl, id) = setup();
    let resp = execute_command(&ctl, play_cmd(id, 0, "7h")).unwrap();

    let CommandResponse::PlayAccepted(view) = resp else {
        panic!("expected PlayAccepted");
    };
    assert_eq!(view.viewer, Some(0));
    assert_eq!(view.step, 1);
    assert_eq!(view.log_len, 1);
    assert_eq!(view.to_move, Some(1));
    assert_eq!(view.players[0].trick_card, "7h");
    assert_eq!(view.players[0].hand, vec!["1h", "3h", "5h", "9h", "11h"]);
    assert_eq!(view.players[1].hand, vec!["xx"; 6]);
    assert_eq!(view.draw_deck, None);
}

#[test]
fn bad_card_tokens_are_bad_requests() {
    let (ctl, id) = setup();

    for token in ["xx", "12h", "7z", "", "h"] {
        let err = execute_command(&ctl, play_cmd(id, 0, token)).unwrap_err();
        assert_eq!(err.code(), "BAD_REQUEST", "token {token:?}");
    }
    assert_eq!(ctl.log_len(id).unwrap(), 0);
}

#[test]
fn bad_player_index_is_bad_request() {
    let (ctl, id) = setup();
    let err = execute_command(&ctl, play_cmd(id, 2, "7h")).unwrap_err();
    assert!(matches!(err, ApiError::BadRequest(_)));

    let err = execute_command(&ctl, Command::NewGame { viewer: 5 }).unwrap_err();
    assert!(matches!(err, ApiError::BadRequest(_)));
    assert_eq!(ctl.game_ids(), vec![id]);
}

#[test]
fn rule_violations_carry_engine_codes() {
    let (ctl, id) = setup();

    let err = execute_command(&ctl, play_cmd(id, 1, "7s")).unwrap_err();
    assert_eq!(err.code(), "NOT_PLAYERS_TURN");

    let err = execute_command(&ctl, play_cmd(id, 0, "7s")).unwrap_err();
    assert_eq!(err.code(), "CARD_NOT_IN_HAND");

    let err = execute_command(
        &ctl,
        Command::ApplyPlay(ApplyPlayCommand {
            game_id: id,
            player: 0,
            card: "7h".into(),
            kind: Some(PlayKind::Discard),
        }),
    )
    .unwrap_err();
    assert_eq!(err.code(), "WRONG_RESPONSE_TYPE");

    let err = execute_command(&ctl, play_cmd(999, 0, "7h")).unwrap_err();
    assert_eq!(err, ApiError::GameNotFound(999));
}

#[test]
fn opponent_view_hides_drawn_card() {
    let (ctl, id) = setup();
    execute_command(&ctl, play_cmd(id, 0, "5h")).unwrap();

    let own = view(&ctl, id, Some(0));
    assert_eq!(own.pending, PendingResponse::AwaitDiscard(0));
    assert!(own.players[0].hand.contains(&"1c".to_string()));
    let drawn = own.events.iter().find(|e| e.kind == "CardDrawn").unwrap();
    assert_eq!(drawn.cards, vec!["1c"]);

    let opp = view(&ctl, id, Some(1));
    assert_eq!(opp.players[0].hand, vec!["xx"; 6]);
    assert_eq!(opp.players[0].trick_card, "5h");
    assert_eq!(opp.draw_deck, None);
    assert_eq!(opp.draw_deck_size, 4);
    let drawn = opp.events.iter().find(|e| e.kind == "CardDrawn").unwrap();
    assert_eq!(drawn.player, Some(0));
    assert_eq!(drawn.cards, vec!["xx"]);

    let full = view(&ctl, id, None);
    assert_eq!(
        full.draw_deck,
        Some(vec!["3c".to_string(), "5c".into(), "9c".into(), "11c".into()])
    );

    execute_command(&ctl, play_cmd(id, 0, "1c")).unwrap();
    let opp = view(&ctl, id, Some(1));
    assert_eq!(opp.players[0].set_aside, vec!["xx"]);
    let set_aside = opp.events.iter().find(|e| e.kind == "CardSetAside").unwrap();
    assert_eq!(set_aside.cards, vec!["xx"]);
    assert_eq!(view(&ctl, id, Some(0)).players[0].set_aside, vec!["1c"]);
}

#[test]
fn get_state_query_rewinds_by_step() {
    let (ctl, id) = setup();
    execute_command(&ctl, play_cmd(id, 0, "7h")).unwrap();
    execute_command(&ctl, play_cmd(id, 1, "11s")).unwrap();

    let QueryResponse::Game(v) = execute_query(
        &ctl,
        Query::GetState {
            game_id: id,
            step: Some(1),
            viewer: None,
        },
    )
    .unwrap() else {
        panic!("expected Game");
    };
    assert_eq!(v.step, 1);
    assert_eq!(v.log_len, 2);
    assert_eq!(v.players[0].trick_card, "7h");
    assert!(v.events.iter().all(|e| e.kind != "TrickWon"));

    let head = view(&ctl, id, None);
    assert_eq!(head.players[0].discards, vec!["7h", "11s"]);
    assert_eq!(head.players[0].tricks_won, 1);
}

#[test]
fn legal_plays_and_list_games_queries() {
    let (ctl, id) = setup();

    let resp = execute_query(&ctl, Query::LegalPlays { game_id: id, player: 0 }).unwrap();
    assert_eq!(
        resp,
        QueryResponse::LegalPlays(
            ["1h", "3h", "5h", "7h", "9h", "11h"].map(String::from).to_vec()
        )
    );

    let resp = execute_query(&ctl, Query::LegalPlays { game_id: id, player: 1 }).unwrap();
    assert_eq!(resp, QueryResponse::LegalPlays(Vec::new()));

    let resp = execute_query(&ctl, Query::ListGames).unwrap();
    assert_eq!(resp, QueryResponse::Games(vec![id]));
}

#[test]
fn commands_parse_from_json() {
    let (ctl, id) = setup();

    let cmd = parse_command(&format!(
        r#"{{"ApplyPlay":{{"game_id":{id},"player":0,"card":"3h"}}}}"#
    ))
    .unwrap();
    execute_command(&ctl, cmd).unwrap();

    let cmd = parse_command(&format!(
        r#"{{"ApplyPlay":{{"game_id":{id},"player":0,"card":"1h","kind":"TrumpReturn"}}}}"#
    ))
    .unwrap();
    let CommandResponse::PlayAccepted(v) = execute_command(&ctl, cmd).unwrap() else {
        panic!("expected PlayAccepted");
    };
    assert_eq!(v.trump_card, "1h");
    assert_eq!(ctl.get_state(id, None).unwrap().trump_card, Some(c("1h")));

    assert!(matches!(
        parse_command(r#"{"NewGame":{"viewer":0}}"#),
        Ok(Command::NewGame { viewer: 0 })
    ));
    assert_eq!(parse_command("{not json").unwrap_err().code(), "BAD_REQUEST");
}

#[test]
fn view_serializes_cards_as_tokens() {
    let (ctl, id) = setup();
    let json = serde_json::to_value(view(&ctl, id, Some(0))).unwrap();
    assert_eq!(json["trump_card"], "7c");
    assert_eq!(json["players"][0]["hand"][0], "1h");
    assert_eq!(json["players"][1]["hand"][0], "xx");
}
