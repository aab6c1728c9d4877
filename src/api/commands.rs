use serde::{Deserialize, Serialize};

use crate::domain::{GameId, PlayerIndex};
use crate::engine::{GameController, Play, PlayKind, PlayerAction, RandomSource};
use crate::infra::mapping::{parse_card, parse_player};

use super::dto::CommandResponse;
use super::errors::ApiError;
use super::queries::build_game_view;

/// Команда верхнего уровня — всё, что меняет состояние.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum Command {
    /// Раздать новую партию. Ответ — представление глазами `viewer`,
    /// полная раздача клиенту не уходит.
    NewGame { viewer: PlayerIndex },

    /// Ход игрока в существующей партии.
    ApplyPlay(ApplyPlayCommand),
}

/// Ход игрока.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ApplyPlayCommand {
    pub game_id: GameId,
    pub player: PlayerIndex,
    /// Wire-токен карты: `"9h"`, `"11c"`.
    pub card: String,
    /// Тип хода, который имеет в виду клиент. Если не совпал с ожидаемым —
    /// ход отклоняется с `WRONG_RESPONSE_TYPE`.
    #[serde(default)]
    pub kind: Option<PlayKind>,
}

/// Выполнить команду.
pub fn execute_command<R: RandomSource>(
    controller: &GameController<R>,
    command: Command,
) -> Result<CommandResponse, ApiError> {
    match command {
        Command::NewGame { viewer } => {
            let viewer = parse_player(viewer)?;
            let (game_id, state) = controller.new_game()?;
            let view = build_game_view(game_id, &state, 0, Some(viewer));
            Ok(CommandResponse::GameCreated { game_id, view })
        }
        Command::ApplyPlay(cmd) => {
            let player = parse_player(cmd.player)?;
            let card = parse_card(&cmd.card)?;
            let action = PlayerAction {
                play: Play::new(player, card),
                kind: cmd.kind,
            };
            let state = controller.apply_action(cmd.game_id, action)?;
            let view = build_game_view(cmd.game_id, &state, state.steps, Some(player));
            Ok(CommandResponse::PlayAccepted(view))
        }
    }
}

/// Разобрать команду из JSON (то, что пришло от транспорта).
pub fn parse_command(json: &str) -> Result<Command, ApiError> {
    Ok(serde_json::from_str(json)?)
}
