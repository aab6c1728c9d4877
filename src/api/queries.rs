use serde::{Deserialize, Serialize};

use crate::domain::card::card_token;
use crate::domain::{GameId, PlayerIndex, PLAYERS};
use crate::engine::{GameController, GameState, RandomSource};
use crate::infra::mapping::{map_event, map_player_zone, parse_player, tokens};

use super::dto::GameViewDto;
use super::errors::ApiError;

/// Запросы "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum Query {
    /// Состояние партии на шаге `step` (по умолчанию — текущее).
    /// С `viewer` — представление глазами игрока.
    GetState {
        game_id: GameId,
        step: Option<usize>,
        viewer: Option<PlayerIndex>,
    },

    /// Какими картами игрок может сходить сейчас.
    LegalPlays { game_id: GameId, player: PlayerIndex },

    /// Список партий.
    ListGames,
}

/// Результат запроса "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum QueryResponse {
    Game(GameViewDto),
    LegalPlays(Vec<String>),
    Games(Vec<GameId>),
}

/// Выполнить запрос. Запись в партию не блокируется.
pub fn execute_query<R: RandomSource>(
    controller: &GameController<R>,
    query: Query,
) -> Result<QueryResponse, ApiError> {
    match query {
        Query::GetState {
            game_id,
            step,
            viewer,
        } => {
            let viewer = viewer.map(parse_player).transpose()?;
            let state = controller.get_state(game_id, step)?;
            let log_len = controller.log_len(game_id)?;
            Ok(QueryResponse::Game(build_game_view(
                game_id, &state, log_len, viewer,
            )))
        }
        Query::LegalPlays { game_id, player } => {
            let player = parse_player(player)?;
            let cards = controller.legal_plays(game_id, player)?;
            Ok(QueryResponse::LegalPlays(tokens(&cards)))
        }
        Query::ListGames => Ok(QueryResponse::Games(controller.game_ids())),
    }
}

/// Сформировать DTO партии.
///
/// Движок всегда хранит полную информацию; скрытие карт соперника —
/// только здесь, на границе с транспортом.
pub fn build_game_view(
    game_id: GameId,
    state: &GameState,
    log_len: usize,
    viewer: Option<PlayerIndex>,
) -> GameViewDto {
    let players = (0..PLAYERS)
        .map(|p| map_player_zone(state, p, viewer))
        .collect();

    let draw_deck = viewer.is_none().then(|| {
        state
            .draw_deck
            .iter()
            .map(|c| c.to_string())
            .collect()
    });

    let events = state
        .history
        .events
        .iter()
        .map(|e| map_event(e, viewer))
        .collect();

    GameViewDto {
        game_id,
        step: state.steps,
        log_len,
        viewer,
        players,
        trump_card: card_token(state.trump_card),
        draw_deck_size: state.draw_deck.len(),
        draw_deck,
        first_player: state.first_player,
        leader: state.leader,
        to_move: state.to_move(),
        pending: state.pending,
        finished: state.is_finished(),
        summary: state.summary(),
        events,
    }
}
