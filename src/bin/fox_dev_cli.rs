// src/bin/fox_dev_cli.rs
//
// Dev-CLI: прогоняет партии "сам с собой" через GameController,
// выбирая случайный допустимый ход, и печатает ход партии и итог.

use clap::{Parser, ValueEnum};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use fox_engine::api::{build_game_view, GameViewDto};
use fox_engine::domain::{GameId, RuleConfig};
use fox_engine::engine::{ControllerError, GameController, RandomSource};
use fox_engine::infra::{persist_game, record_to_json, DeterministicRng, InMemoryGameStorage};

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Rules {
    /// 18 карт, руки по 6
    Compact,
    /// 33 карты, руки по 13, ход в масть
    Classic,
}

#[derive(Debug, Parser)]
#[command(name = "fox_dev_cli", about = "Self-play driver for the trick-taking engine")]
struct Args {
    /// Seed для раздач и выбора ходов
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Сколько партий сыграть
    #[arg(long, default_value_t = 1)]
    games: usize,

    /// Набор правил
    #[arg(long, value_enum, default_value_t = Rules::Compact)]
    rules: Rules,

    /// Файл с правилами в JSON (перекрывает --rules)
    #[arg(long)]
    rules_file: Option<std::path::PathBuf>,

    /// Печатать запись партии (раздача + журнал) в JSON
    #[arg(long)]
    json: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    if let Err(e) = run(&args) {
        error!(error = %e, "dev-CLI завершился с ошибкой");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let rules = match &args.rules_file {
        Some(path) => RuleConfig::from_json_str(&std::fs::read_to_string(path)?)?,
        None => match args.rules {
            Rules::Compact => RuleConfig::compact(),
            Rules::Classic => RuleConfig::classic(),
        },
    };

    info!(seed = args.seed, games = args.games, deck = rules.deck_size(), "старт dev-CLI");

    let controller = GameController::new(rules, DeterministicRng::from_seed(args.seed))?;
    // Отдельный RNG для выбора ходов, чтобы раздачи не зависели от игры.
    let mut chooser = DeterministicRng::from_seed(args.seed.wrapping_add(1));
    let mut storage = InMemoryGameStorage::new();

    let mut wins = [0usize; 2];
    for _ in 0..args.games {
        let game_id = play_one(&controller, &mut chooser)?;
        persist_game(&controller, &mut storage, game_id)?;

        let state = controller.get_state(game_id, None)?;
        let view = build_game_view(game_id, &state, controller.log_len(game_id)?, None);
        print_result(&view);
        if let Some(w) = view.summary.as_ref().and_then(|s| s.winner) {
            wins[w] += 1;
        }

        if args.json {
            let record = controller.export(game_id)?;
            println!("{}", record_to_json(&record)?);
        }
    }

    println!();
    println!(
        "[CLI] Сыграно {} партий: P0 {} / P1 {} / ничьих {}",
        args.games,
        wins[0],
        wins[1],
        args.games - wins[0] - wins[1]
    );
    Ok(())
}

/// Одна партия случайными допустимыми ходами.
fn play_one<R: RandomSource>(
    controller: &GameController<R>,
    chooser: &mut DeterministicRng,
) -> Result<GameId, ControllerError> {
    let (game_id, mut state) = controller.new_game()?;
    println!();
    println!("================ GAME {} =================", game_id);
    println!(
        "[CLI] Козырь {}, первым ходит P{}",
        state.trump_card.map(|c| c.to_string()).unwrap_or_default(),
        state.first_player
    );

    while let Some(player) = state.to_move() {
        let legal = state.legal_plays(player);
        let Some(&card) = legal.get(chooser.gen_index(legal.len())) else {
            break;
        };
        println!(
            "[CLI] шаг {:>2}: P{} {:?} {}",
            state.steps,
            player,
            state.expected_kind(),
            card
        );
        state = controller.apply_play(game_id, player, card)?;
    }

    Ok(game_id)
}

fn print_result(view: &GameViewDto) {
    let Some(summary) = &view.summary else {
        println!("[CLI] Партия {} не завершена", view.game_id);
        return;
    };
    println!(
        "[CLI] Взятки: P0 {}, P1 {} | Очки: P0 {}, P1 {}",
        summary.tricks_won[0], summary.tricks_won[1], summary.points[0], summary.points[1]
    );
}
