use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use ratatui::{backend::CrosstermBackend, Terminal};
use skirmish::core::tick::tick;
use skirmish::input::{process_input, GameInput, InputResult};
use skirmish::ui::draw_ui;
use skirmish::{GameConfig, GameState, INPUT_POLL_MS};
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::{Duration, Instant};

#[derive(Debug, Parser)]
#[command(name = "skirmish", version, about = "Turn-based terminal battle game")]
struct Arguments {
    /// Seed for reproducible enemy encounters and damage rolls
    #[arg(long)]
    seed: Option<u64>,

    /// Write debug logs to this file
    #[arg(long, value_name = "FILE")]
    log: Option<PathBuf>,

    /// Skip enemy thinking, action cooldown, and outcome delays
    #[arg(long)]
    fast: bool,
}

fn init_logging(path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("skirmish=debug")),
        )
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

fn main() -> io::Result<()> {
    let arguments = Arguments::parse();

    // The terminal owns stdout, so logs only go to a file when asked for
    if let Some(path) = &arguments.log {
        init_logging(path)?;
    }

    let config = if arguments.fast {
        GameConfig::instant()
    } else {
        GameConfig::default()
    };
    let mut rng = match arguments.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };
    let mut game_state = GameState::new(config);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_game_loop(&mut terminal, &mut game_state, &mut rng);

    // Restore terminal even when the loop failed
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_game_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    game_state: &mut GameState,
    rng: &mut ChaCha8Rng,
) -> io::Result<()> {
    let mut status: Option<String> = None;
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|frame| draw_ui(frame, game_state, status.as_deref()))?;

        if event::poll(Duration::from_millis(INPUT_POLL_MS))? {
            if let Event::Key(key_event) = event::read()? {
                if key_event.kind == KeyEventKind::Press {
                    match process_input(game_state, GameInput::from(key_event.code), rng) {
                        InputResult::Quit => break,
                        InputResult::Continue => {}
                        InputResult::Events(events) => {
                            if let Some(message) =
                                events.iter().rev().find_map(|event| event.notification())
                            {
                                status = Some(message);
                            }
                        }
                        InputResult::Rejected(err) => status = Some(err.to_string()),
                    }
                }
            }
        }

        let now = Instant::now();
        let delta = now.duration_since(last_tick).as_secs_f64();
        last_tick = now;

        let events = tick(game_state, delta, rng);
        if let Some(message) = events.iter().rev().find_map(|event| event.notification()) {
            status = Some(message);
        }
    }

    Ok(())
}
