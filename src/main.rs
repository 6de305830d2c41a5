use std::io;
use std::time::{Duration, Instant};

use clap::Parser;
use grid_snake::config::{self, FileConfig, Overrides, Settings};
use grid_snake::game::{GameSession, GameStatus};
use grid_snake::input::{self, GameCommand};
use grid_snake::renderer;
use grid_snake::terminal_runtime::{install_panic_hook, TerminalSession};
use grid_snake::theme;

/// How long one input poll may block before the loop re-checks the tick
/// deadline. Well below the tick interval so input stays responsive.
const INPUT_POLL_TIMEOUT: Duration = Duration::from_millis(5);

#[derive(Debug, Parser)]
#[command(version, about = "Fixed-tick grid Snake for the terminal")]
struct Cli {
    /// Grid width in cells.
    #[arg(long)]
    width: Option<u16>,

    /// Grid height in cells.
    #[arg(long)]
    height: Option<u16>,

    /// Tick interval in milliseconds.
    #[arg(long = "tick-ms")]
    tick_ms: Option<u64>,

    /// Color theme name (Classic, Ocean, Neon).
    #[arg(long)]
    theme: Option<String>,

    /// RNG seed for reproducible food placement.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();

    // Warn about a broken config file before the alternate screen hides it.
    let file_config = match config::load_file_config() {
        Ok(file_config) => file_config,
        Err(error) => {
            eprintln!("Ignoring config file: {error}");
            FileConfig::default()
        }
    };

    let settings = Settings::resolve(
        &file_config,
        &Overrides {
            width: cli.width,
            height: cli.height,
            tick_ms: cli.tick_ms,
            theme: cli.theme.clone(),
        },
    );

    install_panic_hook();
    run(&cli, &settings)
}

fn run(cli: &Cli, settings: &Settings) -> io::Result<()> {
    let mut terminal_session = TerminalSession::enter()?;
    let theme = theme::by_name(&settings.theme);

    let mut game = match cli.seed {
        Some(seed) => GameSession::new_with_seed(settings.grid, seed),
        None => GameSession::new(settings.grid),
    };

    let tick_interval = Duration::from_millis(settings.tick_interval_ms);
    let mut last_tick = Instant::now();

    loop {
        terminal_session
            .terminal_mut()
            .draw(|frame| renderer::render(frame, &game, theme))?;

        if let Some(command) = input::poll_command(INPUT_POLL_TIMEOUT)? {
            if command == GameCommand::Quit {
                break;
            }

            let was_game_over = game.status == GameStatus::GameOver;
            game.apply_command(command);

            // A restart resumes the tick timer from now, not from the
            // deadline left over before the game ended.
            if was_game_over && game.status == GameStatus::Running {
                last_tick = Instant::now();
            }
        }

        if game.status == GameStatus::Running && last_tick.elapsed() >= tick_interval {
            game.tick();
            last_tick = Instant::now();
        }
    }

    Ok(())
}
