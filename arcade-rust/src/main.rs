use std::io::{self, BufRead, Write};
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use arcade_engine::application::rps::{PlayRound, PlayRoundInput};
use arcade_engine::application::tictactoe::{
    LoadScores, PlaceMark, PlaceMarkError, PlaceMarkInput, ResetScores,
};
use arcade_engine::domain::entities::{GameStatus, Outcome, TicTacToeGame};
use arcade_engine::domain::repositories::ScoreRepository;
use arcade_engine::domain::value_objects::{Board, MarkTally, Side};
use arcade_engine::AppConfig;

fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "arcade_engine=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = AppConfig::from_env();
    let game = std::env::args().nth(1).unwrap_or_else(|| "rps".to_string());

    match game.as_str() {
        "rps" => run_rps(&config),
        "tictactoe" | "ttt" => {
            let repo = Arc::new(config.score_repository()?);
            run_tictactoe(repo)
        }
        other => anyhow::bail!("Unknown game '{}' (expected rps or tictactoe)", other),
    }
}

fn prompt(text: &str) -> io::Result<()> {
    print!("{}", text);
    io::stdout().flush()
}

fn run_rps(config: &AppConfig) -> anyhow::Result<()> {
    let mut session = config.rps_session();
    tracing::info!(opponent = session.strategy_name(), seeded = config.seed.is_some(), "Starting Rock-Paper-Scissors");

    println!("Rock-Paper-Scissors vs {}. Keys: r/p/s, 'reset', 'quit'.", session.strategy_name());
    prompt("> ")?;

    for line in io::stdin().lock().lines() {
        let line = line?;
        match line.trim() {
            "" => {}
            "quit" | "q" => break,
            "reset" => {
                session.reset();
                println!("New session.");
            }
            raw => match PlayRound.execute(&mut session, PlayRoundInput { raw }) {
                Ok(result) => {
                    println!("Thinking...");
                    std::thread::sleep(config.thinking_delay);

                    let verdict = match result.outcome {
                        Outcome::Win => "You win!",
                        Outcome::Lose => "You lose.",
                        Outcome::Draw => "Draw.",
                    };
                    println!(
                        "Round {}: {} vs {}. {}",
                        result.round_number, result.human, result.opponent, verdict
                    );
                    println!(
                        "Score {}-{}",
                        result.scoreboard.human, result.scoreboard.opponent
                    );
                    match session.current_streak() {
                        Some((Side::Human, n)) if session.is_on_fire() => {
                            println!("{} in a row. On fire!", n)
                        }
                        Some((side, n)) => println!("Streak: {} x{}", side.as_str(), n),
                        None => {}
                    }
                }
                Err(e) => println!("{}", e),
            },
        }
        prompt("> ")?;
    }

    Ok(())
}

fn run_tictactoe<R: ScoreRepository>(repo: Arc<R>) -> anyhow::Result<()> {
    let mut scores = LoadScores::new(repo.clone()).execute()?;
    let place_mark = PlaceMark::new(repo.clone());
    let reset_scores = ResetScores::new(repo);
    let mut game = TicTacToeGame::new();

    println!("Tic-Tac-Toe. Cells 1-9, 'new', 'again', 'clear-scores', 'quit'.");
    render(game.board(), &scores);
    prompt(&format!("{} to move> ", game.to_move().as_str()))?;

    for line in io::stdin().lock().lines() {
        let line = line?;
        match line.trim() {
            "" => {}
            "quit" | "q" => break,
            "new" => game.reset_game(),
            "again" => game.play_again(),
            "clear-scores" => reset_scores.execute(&mut scores)?,
            raw => match raw.parse::<usize>() {
                Ok(n @ 1..=9) => {
                    match place_mark.execute(&mut game, &mut scores, PlaceMarkInput { cell: n - 1 }) {
                        Ok(output) => match output.status {
                            GameStatus::Won { mark, .. } => {
                                println!("{} wins! Type 'again' for a rematch.", mark.as_str())
                            }
                            GameStatus::Draw => println!("Draw. Type 'again' for a rematch."),
                            GameStatus::InProgress => {}
                        },
                        Err(PlaceMarkError::Game(e)) => println!("{}", e),
                        Err(e) => return Err(e.into()),
                    }
                }
                _ => println!("Pick a cell from 1 to 9."),
            },
        }
        render(game.board(), &scores);
        prompt(&format!("{} to move> ", game.to_move().as_str()))?;
    }

    Ok(())
}

fn render(board: &Board, scores: &MarkTally) {
    let cells = board.cells();
    for row in 0..3 {
        let line: Vec<String> = (0..3)
            .map(|col| {
                let cell = row * 3 + col;
                cells[cell].map_or_else(|| (cell + 1).to_string(), |mark| mark.as_str().to_string())
            })
            .collect();
        println!(" {}", line.join(" | "));
    }
    println!("O: {}  X: {}", scores.o, scores.x);
}
