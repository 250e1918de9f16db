mod input;
mod ui;

use std::fs::File;
use std::io::{self, Stdout};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::{error, info};
use ratatui::{backend::CrosstermBackend, Terminal};
use simplelog::{Config, LevelFilter, WriteLogger};
use snekgrid::{Cell, Difficulty, DifficultyPolicy, GameConfig, Session, SessionState, Size};

use crate::input::{map_key, KeyAction};

/// Input wait while no tick is scheduled.
const IDLE_POLL: Duration = Duration::from_millis(250);

#[derive(Parser)]
#[command(name = "snekgrid")]
#[command(version, about = "Snake on a wraparound grid")]
struct Cli {
    /// Grid width in cells
    #[arg(long, default_value_t = 20, value_parser = clap::value_parser!(u16).range(2..=500))]
    width: u16,

    /// Grid height in cells
    #[arg(long, default_value_t = 20, value_parser = clap::value_parser!(u16).range(2..=500))]
    height: u16,

    /// Starting speed: easy, normal or hard
    #[arg(long, default_value_t = Difficulty::Normal)]
    difficulty: Difficulty,

    /// Cells the organism starts with
    #[arg(long, default_value_t = 1)]
    initial_length: usize,

    /// Keep the current run when the speed changes instead of starting over
    #[arg(long)]
    keep_run_on_speed_change: bool,

    /// Seed for food placement, random when omitted
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long, default_value = "snekgrid.log")]
    log_file: PathBuf,

    /// off, error, warn, info, debug or trace
    #[arg(long, default_value = "info", value_parser = parse_level)]
    log_level: LevelFilter,
}

fn parse_level(value: &str) -> Result<LevelFilter, String> {
    value
        .parse::<LevelFilter>()
        .map_err(|_| format!("unknown log level `{value}`"))
}

impl Cli {
    fn game_config(&self) -> GameConfig {
        GameConfig {
            size: Size::new(self.width, self.height),
            start: Cell::new(5u16.min(self.width - 1), 5u16.min(self.height - 1)),
            initial_length: self.initial_length,
            difficulty: self.difficulty,
            difficulty_policy: if self.keep_run_on_speed_change {
                DifficultyPolicy::Retime
            } else {
                DifficultyPolicy::Restart
            },
            ..Default::default()
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging before anything else, the terminal is about to go raw
    WriteLogger::init(
        cli.log_level,
        Config::default(),
        File::create(&cli.log_file)
            .with_context(|| format!("failed to create {}", cli.log_file.display()))?,
    )
    .map_err(|e| anyhow!("failed to initialise logger: {e}"))?;

    info!("Starting snekgrid");

    let config = cli.game_config();
    let session = match cli.seed {
        Some(seed) => Session::seeded(config, seed),
        None => Session::from_entropy(config),
    }
    .context("invalid game settings")?;

    // Setup terminal
    enable_raw_mode().context("failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("failed to create terminal")?;

    let result = run(&mut terminal, session);
    if let Err(e) = &result {
        error!("Game loop failed: {e}");
    }

    // Cleanup terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    info!("Exiting snekgrid");
    result.context("game loop failed")
}

fn run(terminal: &mut Terminal<CrosstermBackend<Stdout>>, mut session: Session) -> io::Result<()> {
    let mut drawn = None;

    loop {
        if drawn != Some(session.revision()) {
            let snapshot = session.snapshot();
            terminal.draw(|f| ui::render(f, &snapshot))?;
            drawn = Some(snapshot.revision);
        }

        // Block on input only until the next tick is due
        let timeout = session
            .time_until_tick(Instant::now())
            .unwrap_or(IDLE_POLL);
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if !handle_key(&mut session, map_key(key)) {
                        return Ok(());
                    }
                }
                Event::Resize(..) => drawn = None,
                _ => {}
            }
        }

        session.poll(Instant::now());
    }
}

/// Applies one key to the session. Returns false when the player quits.
fn handle_key(session: &mut Session, action: KeyAction) -> bool {
    let now = Instant::now();
    match action {
        KeyAction::Steer(heading) => {
            session.request_direction(heading);
        }
        KeyAction::Primary => match session.state() {
            SessionState::NotStarted | SessionState::GameOver => session.start(now),
            SessionState::Playing | SessionState::Paused => {
                session.toggle_pause(now);
            }
        },
        KeyAction::Restart => session.restart(now),
        KeyAction::SetDifficulty(difficulty) => session.set_difficulty(difficulty, now),
        KeyAction::Quit => return false,
        KeyAction::None => {}
    }
    true
}
