use clap::Parser;
use crossterm::cursor::Show;
use crossterm::event::{self, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use flapper::build_info;
use flapper::config::GameConfig;
use flapper::error::AppError;
use flapper::game::{on_tap, process_frame, FlappyGame, FrameEvent};
use flapper::input::{map_key, GameInput};
use flapper::{logging, ui};
use log::{info, warn};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::{Duration, Instant};

/// Tap to fly the bird through the pipes.
#[derive(Parser)]
#[command(name = "flapper", version = build_info::VERSION, about, long_about = None)]
struct Args {
    /// JSON config file; CLI flags override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Play field width in world units
    #[arg(long)]
    width: Option<f64>,

    /// Play field height in world units
    #[arg(long)]
    height: Option<f64>,

    /// Target frame interval in milliseconds
    #[arg(long)]
    frame_ms: Option<u64>,

    /// Write logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    match run(args) {
        Ok(best) => {
            println!("Best score this session: {}", best);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("flapper: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<u32, AppError> {
    logging::init(args.verbose, args.log_file.as_deref())?;

    let config = match &args.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    }
    .with_overrides(args.width, args.height, args.frame_ms)?;

    info!(
        "starting flapper {} with viewport {}x{}, frame {}ms",
        build_info::VERSION,
        config.viewport.width,
        config.viewport.height,
        config.frame_ms
    );

    enable_raw_mode()?;
    let result = play(&config);
    let restored = restore_terminal();

    info!("shutting down");
    let best = result?;
    restored?;
    Ok(best)
}

/// Enter the alternate screen and run the game loop. Raw mode is already on.
fn play(config: &GameConfig) -> Result<u32, AppError> {
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    game_loop(&mut terminal, config)
}

/// Undo raw mode, the alternate screen and the hidden cursor. Every step runs
/// even if an earlier one fails.
fn restore_terminal() -> io::Result<()> {
    first_error([
        disable_raw_mode(),
        io::stdout().execute(LeaveAlternateScreen).map(|_| ()),
        io::stdout().execute(Show).map(|_| ()),
    ])
}

/// Log every failed step and return the first failure.
fn first_error(steps: impl IntoIterator<Item = io::Result<()>>) -> io::Result<()> {
    let mut first = None;
    for step in steps {
        if let Err(e) = step {
            warn!("terminal restore step failed: {}", e);
            first.get_or_insert(e);
        }
    }
    first.map_or(Ok(()), Err)
}

/// Draw, read input until the next frame is due, then advance the game by the
/// measured frame delta. Returns the best score seen.
fn game_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    config: &GameConfig,
) -> Result<u32, AppError> {
    let mut game = FlappyGame::new(config.viewport);
    let frame_interval = Duration::from_millis(config.frame_ms);
    let mut last_frame = Instant::now();
    let mut best = 0;

    loop {
        terminal.draw(|frame| ui::draw_ui(frame, &game))?;

        // Handle input until the frame deadline. Resizes only change the
        // render scale, which the next draw picks up.
        let deadline = last_frame + frame_interval;
        loop {
            let timeout = deadline.saturating_duration_since(Instant::now());
            if !event::poll(timeout)? {
                break;
            }
            if let Event::Key(key) = event::read()? {
                match map_key(key) {
                    GameInput::Tap => report(on_tap(&mut game)),
                    GameInput::Quit => return Ok(best.max(game.score())),
                    GameInput::Other => {}
                }
            }
        }

        let now = Instant::now();
        let dt_millis = now.duration_since(last_frame).as_secs_f64() * 1000.0;
        last_frame = now;

        for event in process_frame(&mut game, dt_millis) {
            report(event);
        }
        best = best.max(game.score());
    }
}

fn report(event: FrameEvent) {
    match event {
        FrameEvent::Crashed { score } => info!("crashed with score {}", score),
        FrameEvent::Restarted => info!("new round"),
        FrameEvent::Scored { score } => log::debug!("score {}", score),
        FrameEvent::Flapped => log::trace!("flap"),
    }
}
