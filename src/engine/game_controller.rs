// src/engine/game_controller.rs

use std::sync::Arc;

use dashmap::DashMap;
use parking_lot::{Mutex, RwLock};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::domain::card::Card;
use crate::domain::deck::Deck;
use crate::domain::rules::RuleConfig;
use crate::domain::{GameId, PlayerIndex};
use crate::engine::actions::{Play, PlayerAction};
use crate::engine::dealing::{self, Deal};
use crate::engine::errors::EngineError;
use crate::engine::game_state::{replay, replay_all, GameState};
use crate::engine::RandomSource;
use crate::infra::ids::IdGenerator;

/// Ошибки уровня контроллера (над движком одной партии).
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ControllerError {
    /// Партии с таким id нет в реестре.
    #[error("партия {0} не найдена")]
    GameNotFound(GameId),

    /// Проброшенная ошибка из движка (EngineError).
    #[error(transparent)]
    Engine(#[from] EngineError),
}

impl ControllerError {
    pub fn code(&self) -> &'static str {
        match self {
            ControllerError::GameNotFound(_) => "GAME_NOT_FOUND",
            ControllerError::Engine(e) => e.code(),
        }
    }
}

/// Всё, что нужно хранить о партии: раздача + журнал ходов.
/// Полное состояние из него всегда выводится через `replay`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameRecord {
    pub deal: Deal,
    pub plays: Vec<Play>,
}

/// Внутренний объект: одна партия в реестре.
///
/// Писатель один: `apply_action` держит `head` на всё время
/// "прочитать → проверить → дописать". Читатели берут только `log`.
struct GameSession {
    deal: Deal,
    /// Состояние после всего журнала (кэш головы).
    head: Mutex<GameState>,
    /// Журнал ходов, только дописывается.
    log: RwLock<Vec<Play>>,
}

impl GameSession {
    fn new(deal: Deal, head: GameState, log: Vec<Play>) -> Self {
        Self {
            deal,
            head: Mutex::new(head),
            log: RwLock::new(log),
        }
    }
}

/// Контроллер партий:
/// - хранит партии по GameId;
/// - сериализует ходы внутри одной партии;
/// - отдаёт состояние на любом шаге журнала.
///
/// Разделяется между потоками через `&self` / `Arc`.
pub struct GameController<R: RandomSource> {
    games: DashMap<GameId, Arc<GameSession>>,
    ids: IdGenerator,
    rng: Mutex<R>,
    rules: RuleConfig,
}

impl<R: RandomSource> GameController<R> {
    /// Создать пустой контроллер с правилами для новых партий.
    pub fn new(rules: RuleConfig, rng: R) -> Result<Self, ControllerError> {
        rules.validate().map_err(EngineError::from)?;
        Ok(Self {
            games: DashMap::new(),
            ids: IdGenerator::new(),
            rng: Mutex::new(rng),
            rules,
        })
    }

    pub fn rules(&self) -> &RuleConfig {
        &self.rules
    }

    /// Раздать новую партию и зарегистрировать её.
    pub fn new_game(&self) -> Result<(GameId, GameState), ControllerError> {
        let deck = Deck::build(&self.rules);
        let deal = {
            let mut rng = self.rng.lock();
            dealing::deal(deck, &mut *rng, &self.rules)?
        };
        self.new_game_with_deal(deal)
    }

    /// Зарегистрировать партию с заранее известной раздачей.
    pub fn new_game_with_deal(&self, deal: Deal) -> Result<(GameId, GameState), ControllerError> {
        deal.validate()?;
        let state = GameState::from_deal(&deal);
        let game_id = self.ids.next_game_id();

        info!(
            game_id,
            first_player = deal.first_player,
            trump = %deal.trump_card,
            "новая партия"
        );
        self.games.insert(
            game_id,
            Arc::new(GameSession::new(deal, state.clone(), Vec::new())),
        );
        Ok((game_id, state))
    }

    /// Восстановить партию из записи; весь журнал проверяется реплеем.
    pub fn import(&self, record: GameRecord) -> Result<GameId, ControllerError> {
        record.deal.validate()?;
        let head = replay_all(&record.deal, &record.plays)?;
        let game_id = self.ids.next_game_id();

        info!(game_id, plays = record.plays.len(), "партия импортирована");
        self.games.insert(
            game_id,
            Arc::new(GameSession::new(record.deal, head, record.plays)),
        );
        Ok(game_id)
    }

    /// Снять запись партии: раздача + копия журнала.
    pub fn export(&self, game_id: GameId) -> Result<GameRecord, ControllerError> {
        let session = self.session(game_id)?;
        let plays = session.log.read().clone();
        Ok(GameRecord {
            deal: session.deal.clone(),
            plays,
        })
    }

    /// Ход картой: тип хода определяет состояние партии.
    pub fn apply_play(
        &self,
        game_id: GameId,
        player: PlayerIndex,
        card: Card,
    ) -> Result<GameState, ControllerError> {
        self.apply_action(game_id, PlayerAction::new(player, card))
    }

    /// Применить действие игрока.
    ///
    /// Ход попадает в журнал только если прошёл проверку; отклонённый ход
    /// не меняет ни журнал, ни состояние.
    pub fn apply_action(
        &self,
        game_id: GameId,
        action: PlayerAction,
    ) -> Result<GameState, ControllerError> {
        let session = self.session(game_id)?;

        let mut head = session.head.lock();
        match head.apply_action(&action) {
            Ok(kind) => {
                session.log.write().push(action.play);
                debug!(
                    game_id,
                    player = action.play.player,
                    card = %action.play.card,
                    ?kind,
                    step = head.steps,
                    "ход принят"
                );
                Ok(head.clone())
            }
            Err(err) => {
                warn!(
                    game_id,
                    player = action.play.player,
                    card = %action.play.card,
                    error = %err,
                    "ход отклонён"
                );
                Err(err.into())
            }
        }
    }

    /// Состояние после `step` ходов (по умолчанию — после всего журнала).
    ///
    /// `step` обрезается до `[0, len]`; ошибкой это не считается.
    pub fn get_state(
        &self,
        game_id: GameId,
        step: Option<usize>,
    ) -> Result<GameState, ControllerError> {
        let session = self.session(game_id)?;
        let log = session.log.read().clone();
        let upto = step.unwrap_or(log.len()).min(log.len());
        Ok(replay(&session.deal, &log, upto)?)
    }

    /// Карты, которыми игрок может сходить сейчас.
    pub fn legal_plays(
        &self,
        game_id: GameId,
        player: PlayerIndex,
    ) -> Result<Vec<Card>, ControllerError> {
        Ok(self.get_state(game_id, None)?.legal_plays(player))
    }

    /// Длина журнала ходов.
    pub fn log_len(&self, game_id: GameId) -> Result<usize, ControllerError> {
        Ok(self.session(game_id)?.log.read().len())
    }

    /// Есть ли партия с таким id.
    pub fn has_game(&self, game_id: GameId) -> bool {
        self.games.contains_key(&game_id)
    }

    /// Все id партий по возрастанию.
    pub fn game_ids(&self) -> Vec<GameId> {
        let mut ids: Vec<GameId> = self.games.iter().map(|e| *e.key()).collect();
        ids.sort_unstable();
        ids
    }

    /// Убрать партию из реестра.
    pub fn remove_game(&self, game_id: GameId) -> bool {
        self.games.remove(&game_id).is_some()
    }

    /// Сессия по id. Ссылку из DashMap сразу отпускаем, чтобы не держать шард.
    fn session(&self, game_id: GameId) -> Result<Arc<GameSession>, ControllerError> {
        self.games
            .get(&game_id)
            .map(|entry| Arc::clone(entry.value()))
            .ok_or(ControllerError::GameNotFound(game_id))
    }
}
