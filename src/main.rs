//! # Binary: gaze-dashboard
//!
//! ## Responsibility
//! Entry point of the dashboard. Loads configuration and data, then either
//! prints a text report or runs the terminal UI until the user quits.
//!
//! ## Usage
//! ```bash
//! gaze-dashboard                                   # TUI, built-in data
//! gaze-dashboard --config dashboard.toml --face 2 --zone yeux
//! gaze-dashboard --report --parameter latence      # one-shot text report
//! gaze-dashboard --print-schema > dashboard.schema.json
//! ```
//!
//! ## Environment Variables
//!
//! - `LOG_FORMAT=json` selects structured JSON output in report mode
//! - `RUST_LOG=debug` sets the log level filter
//!
//! ## Guarantees
//! - Terminal state always restored on exit, even on panic
//! - Clean shutdown on q, Esc, or Ctrl+C

use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use clap::Parser;
use crossterm::event;
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing::info;

use gaze_dashboard::config::export_schema;
use gaze_dashboard::config::loader::load_from_file;
use gaze_dashboard::mascot::Page;
use gaze_dashboard::report::Report;
use gaze_dashboard::tui::app::App;
use gaze_dashboard::tui::events::{apply_event, poll_event};
use gaze_dashboard::tui::ui;
use gaze_dashboard::{
    build_synchronizer, init_tracing, init_tracing_with_format, load_dataset,
    DashboardConfig, FaceId, Parameter, Zone,
};

/// Gaze comparison dashboard (DT vs TSA)
#[derive(Parser, Debug)]
#[command(name = "gaze-dashboard")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Measurement table to load instead of the built-in one (overrides config)
    #[arg(long)]
    dataset: Option<PathBuf>,

    /// Initial face (overrides config)
    #[arg(long)]
    face: Option<FaceId>,

    /// Initial zone: ecran, tete, yeux, bouche (overrides config)
    #[arg(long)]
    zone: Option<Zone>,

    /// Initial parameter: ttt, tp, tf, nbf, nbe, latence (overrides config)
    #[arg(long)]
    parameter: Option<Parameter>,

    /// Page script followed by the mascot (overrides config)
    #[arg(long)]
    page: Option<Page>,

    /// Disable the mascot
    #[arg(long, default_value_t = false)]
    no_mascot: bool,

    /// Print a text report of every view and exit
    #[arg(long, default_value_t = false)]
    report: bool,

    /// Print the configuration JSON Schema and exit
    #[arg(long, default_value_t = false)]
    print_schema: bool,
}

impl Args {
    /// Applies the command-line overrides on top of `config`.
    fn apply(&self, config: &mut DashboardConfig) {
        if let Some(path) = &self.dataset {
            config.dataset.path = Some(path.clone());
        }
        if let Some(face) = self.face {
            config.filters.face = face;
        }
        if let Some(zone) = self.zone {
            config.filters.zone = zone;
        }
        if let Some(parameter) = self.parameter {
            config.filters.parameter = parameter;
        }
        if let Some(page) = self.page {
            config.mascot.page = page;
        }
        if self.no_mascot {
            config.mascot.enabled = false;
        }
    }
}

type Tty = Terminal<CrosstermBackend<io::Stdout>>;

/// Sets up the terminal for TUI rendering.
///
/// # Errors
/// Returns `io::Error` if terminal initialization fails.
fn setup_terminal() -> Result<Tty, io::Error> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, event::EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

/// Restores the terminal to its pre-launch state.
fn restore_terminal(terminal: &mut Tty) -> Result<(), io::Error> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        event::DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    if args.print_schema {
        println!("{}", export_schema()?);
        return Ok(());
    }

    let mut config = match &args.config {
        Some(path) => load_from_file(path)?,
        None => DashboardConfig::default(),
    };
    args.apply(&mut config);

    if args.report {
        // stdout carries the report, logs go to stderr
        let _ = match config.observability.log_format {
            Some(format) => init_tracing_with_format(format.as_env_value()),
            None => init_tracing(),
        };
        let dataset = Arc::new(load_dataset(&config)?);
        info!(records = dataset.len(), "dataset loaded");
        let sync = build_synchronizer(&config, dataset);
        print!("{}", Report::new(&config.dashboard.title, &sync));
        return Ok(());
    }

    let dataset = Arc::new(load_dataset(&config)?);
    let sync = build_synchronizer(&config, dataset);
    let mut app = App::new(&config, sync);

    // Install panic hook that restores terminal before printing panic message
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(
            io::stdout(),
            LeaveAlternateScreen,
            event::DisableMouseCapture
        );
        default_hook(info);
    }));

    let mut terminal = setup_terminal()?;
    let result = run(&mut terminal, &mut app);
    restore_terminal(&mut terminal)?;

    if let Err(e) = result {
        eprintln!("TUI error: {e}");
        std::process::exit(1);
    }
    Ok(())
}

/// Runs the TUI event loop until the user quits.
fn run(terminal: &mut Tty, app: &mut App) -> Result<(), Box<dyn std::error::Error>> {
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        let event = poll_event(app.tick_rate);
        apply_event(app, event);

        if app.should_quit {
            break;
        }

        let now = Instant::now();
        app.on_tick(now.duration_since(last_tick));
        last_tick = now;
    }

    Ok(())
}
