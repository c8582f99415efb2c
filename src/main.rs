//! Terminal 2048 runner (default binary).
//!
//! Event-driven: the loop blocks on the next terminal event, applies at most
//! one action, and redraws. It uses crossterm for input and the framebuffer
//! renderer from `tui_2048::term`.

use std::fs::File;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event};
use env_logger::{Env, Target};
use log::info;

use tui_2048::core::GameSnapshot;
use tui_2048::input::{handle_key_event, should_quit};
use tui_2048::session::{HighScoreStore, JsonFileStore, MemoryStore, Session};
use tui_2048::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};

#[derive(Parser, Debug)]
#[command(version, about = "Slide, merge, reach 2048")]
struct Args {
    /// RNG seed (defaults to the current time)
    #[arg(long)]
    seed: Option<u32>,

    /// File that keeps the best score between runs
    #[arg(long, value_name = "PATH", default_value = ".tui-2048-highscore.json")]
    high_score_file: PathBuf,

    /// Keep the best score in memory only
    #[arg(long, conflicts_with = "high_score_file")]
    memory_high_score: bool,

    /// Write logs here (filter with RUST_LOG); logging is off otherwise
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.log_file.as_ref())?;

    let seed = args.seed.unwrap_or_else(clock_seed);
    if args.memory_high_score {
        play(Session::new(seed, MemoryStore::default()))
    } else {
        let store = JsonFileStore::new(&args.high_score_file);
        play(Session::new(seed, store))
    }
}

fn init_logging(log_file: Option<&PathBuf>) -> Result<()> {
    // Anything written to stderr would land on the alternate screen.
    let Some(path) = log_file else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("cannot open log file {}", path.display()))?;
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

fn play<S: HighScoreStore>(mut session: Session<S>) -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut session);

    // Always try to restore terminal state.
    let _ = term.exit();
    info!(
        "exit: score={} high_score={}",
        session.score(),
        session.high_score()
    );
    result
}

fn run<S: HighScoreStore>(term: &mut TerminalRenderer, session: &mut Session<S>) -> Result<()> {
    let view = GameView::default();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        session.snapshot_into(&mut snap);
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        match event::read()? {
            Event::Key(key) => {
                if should_quit(key) {
                    return Ok(());
                }
                if let Some(action) = handle_key_event(key) {
                    session.apply_action(action);
                }
            }
            Event::Resize(_, _) => term.invalidate(),
            _ => {}
        }
    }
}
