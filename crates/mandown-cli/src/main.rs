use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use mandown_config::Config;
use mandown_engine::{PulldownParser, RenderSession, RenderedView};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};
use std::{env, fs, path::Path, process};

mod terminal;
mod viewport;

use terminal::TerminalGuard;
use viewport::SurfaceView;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <markdown-file>", args[0]);
        process::exit(1);
    }

    if let Err(e) = run(Path::new(&args[1])) {
        log::error!("{e:#}");
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(path: &Path) -> Result<()> {
    let config = Config::load()?.unwrap_or_default();

    let input = fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let (columns, _) = crossterm::terminal::size().context("Failed to query terminal size")?;

    // Everything fatal about the document surfaces here, before the terminal
    // leaves cooked mode.
    let view = RenderSession::new(PulldownParser::new())
        .with_initial_rows(config.initial_rows)
        .run(&input, config.content_width(usize::from(columns)))
        .with_context(|| format!("Cannot display {}", path.display()))?;
    log::info!(
        "{}: {} content rows",
        path.display(),
        view.content.lines().len()
    );

    terminal::install_panic_hook();
    let mut guard = TerminalGuard::enter()?;
    show(&mut guard, &view)
}

/// Draws the view and blocks until a key is pressed. Other events only
/// trigger a redraw.
fn show(guard: &mut TerminalGuard, view: &RenderedView) -> Result<()> {
    loop {
        guard.terminal().draw(|f| ui(f, view))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            return Ok(());
        }
    }
}

fn ui(f: &mut Frame, view: &RenderedView) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)].as_ref())
        .split(f.area());

    f.render_widget(SurfaceView::new(&view.content), chunks[0]);
    f.render_widget(SurfaceView::new(&view.status), chunks[1]);
}
