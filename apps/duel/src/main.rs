//! Card duel CLI: play five rounds against a model-driven opponent.

mod telemetry;

use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use duel::ai::{create_opponent, LlmOpponent, OpponentAgent, OpponentKind};
use duel::config::{Config, LLM_MODELS, VLM_MODELS};
use duel::console::{render_outcome, render_round, render_state, ConsoleObserver};
use duel::domain::HAND_SIZE;
use duel::recognizer::{create_recognizer, CardImage, ManualRecognizer, RecognizerKind};
use duel::services::{GameSession, SessionSettings};
use duel::{AppError, GameState};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, Lines, Stdin};
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "duel")]
#[command(about = "Five-round card duel against a language-model opponent")]
struct Args {
    /// Opponent implementation: llm or random
    #[arg(long, default_value = "llm")]
    opponent: OpponentKind,

    /// How played cards are read: vision (image path) or manual (typed label)
    #[arg(long, default_value = "vision")]
    recognizer: RecognizerKind,

    /// Seed for deterministic deals and fallback choices
    #[arg(long)]
    seed: Option<u64>,

    /// Opponent model id
    #[arg(long)]
    llm_model: Option<String>,

    /// Vision model id
    #[arg(long)]
    vlm_model: Option<String>,

    /// Seconds to wait for the opponent before playing a random card
    #[arg(long)]
    agent_timeout_secs: Option<u64>,

    /// Emit logs as JSON
    #[arg(long)]
    json_logs: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Print the game state as JSON after every round
    #[arg(long)]
    snapshot_json: bool,
}

type Input = Lines<BufReader<Stdin>>;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    telemetry::init_tracing(args.json_logs, args.verbose);

    let config = apply_overrides(Config::from_env()?, &args);
    info!(
        opponent = %args.opponent,
        recognizer = %args.recognizer,
        llm_model = %config.llm.model.id,
        vlm_model = %config.vlm.model.id,
        "Starting card duel"
    );

    let opponent: Box<dyn OpponentAgent> = match args.opponent {
        OpponentKind::Llm => Box::new(
            LlmOpponent::new(config.llm.clone())?.with_observer(Arc::new(ConsoleObserver::default())),
        ),
        kind => create_opponent(kind, &config)?,
    };
    let recognizer = create_recognizer(args.recognizer, &config)?;
    let settings = SessionSettings {
        agent_timeout: config.agent_timeout,
        seed: config.seed,
    };
    let mut session = GameSession::new(recognizer, opponent, settings);
    let mut input = BufReader::new(tokio::io::stdin()).lines();

    loop {
        let state = session.start_game()?;
        println!("\nNew game: {HAND_SIZE} rounds, highest card wins each round.");
        show_state(&state, args.snapshot_json)?;

        if !play_game(&mut session, &mut input, &args).await? {
            break;
        }

        let again = prompt(&mut input, "Play again? [y/N] ").await?;
        if !matches!(again.as_deref().map(str::trim), Some("y" | "Y" | "yes")) {
            break;
        }
    }

    println!("Goodbye.");
    Ok(())
}

fn apply_overrides(mut config: Config, args: &Args) -> Config {
    if let Some(id) = &args.llm_model {
        config.llm.model = LLM_MODELS.select(id);
    }
    if let Some(id) = &args.vlm_model {
        config.vlm.model = VLM_MODELS.select(id);
    }
    if let Some(secs) = args.agent_timeout_secs {
        config.agent_timeout = Duration::from_secs(secs);
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    config
}

/// Run rounds until the game finishes. Returns false if the player quit.
async fn play_game(
    session: &mut GameSession,
    input: &mut Input,
    args: &Args,
) -> Result<bool, Box<dyn std::error::Error>> {
    let question = match args.recognizer {
        RecognizerKind::Vision => "Photo of your card (path, or 'quit'): ",
        RecognizerKind::Manual => "Your card (e.g. 7, Q, ace, or 'quit'): ",
    };

    loop {
        if let Some(outcome) = session.state().and_then(GameState::outcome) {
            println!("{}", render_outcome(outcome));
            return Ok(true);
        }

        let Some(line) = prompt(input, question).await? else {
            return Ok(false);
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line.eq_ignore_ascii_case("quit") {
            return Ok(false);
        }

        let image = match args.recognizer {
            RecognizerKind::Manual => ManualRecognizer::image_for(line),
            RecognizerKind::Vision => match CardImage::from_path(line).await {
                Ok(image) => image,
                Err(err) => {
                    warn!(path = line, error = %err, "Could not read image");
                    println!("Could not read {line}: {err}. Try another photo.");
                    continue;
                }
            },
        };

        match session.play_round(&image).await {
            Ok(report) => {
                for notice in &report.notices {
                    println!("Note: {notice}");
                }
                println!("{}", render_round(&report));
            }
            Err(err) if err.is_recoverable() => {
                println!("{err}. {}", corrective_action(&err));
                continue;
            }
            Err(err) => return Err(err.into()),
        }

        let state = session.get_state()?;
        show_state(&state, args.snapshot_json)?;
    }
}

fn corrective_action(err: &AppError) -> &'static str {
    match err {
        AppError::Recognizer(_) => "Please retake the photo or try again.",
        AppError::Domain(_) => "Play a card from your hand.",
        _ => "Please try again.",
    }
}

fn show_state(state: &GameState, json: bool) -> Result<(), serde_json::Error> {
    print!("{}", render_state(state));
    if json {
        println!("{}", serde_json::to_string_pretty(state)?);
    }
    Ok(())
}

async fn prompt(input: &mut Input, question: &str) -> std::io::Result<Option<String>> {
    let mut stdout = tokio::io::stdout();
    stdout.write_all(question.as_bytes()).await?;
    stdout.flush().await?;
    input.next_line().await
}
