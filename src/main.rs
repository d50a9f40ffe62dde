mod ui;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use pegsol::app::{process_input, App, PegInput};
use pegsol::build_info;
use pegsol::constants::{LOG_ENV_VAR, LOG_FILE_NAME, TICK_INTERVAL_MS};
use pegsol::levels::LevelCatalog;
use pegsol::stats::{self, GameStats};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing_subscriber::EnvFilter;

fn print_help() {
    println!("Peg Solitaire - jump pegs until only one is left\n");
    println!("Usage: pegsol [options]\n");
    println!("Options:");
    println!("  --level N      Start on level N (if unlocked)");
    println!("  --reset-stats  Delete saved statistics and start fresh");
    println!("  --version      Show version information");
    println!("  --help         Show this help message");
    println!();
    println!("Set {}=debug to write a log to ~/.pegsol/{}", LOG_ENV_VAR, LOG_FILE_NAME);
}

/// Options parsed from the command line.
struct Options {
    level: usize,
    reset_stats: bool,
}

fn parse_args(args: &[String]) -> Options {
    let mut options = Options {
        level: 1,
        reset_stats: false,
    };

    let mut iter = args.iter().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--version" | "-v" => {
                println!(
                    "pegsol {} ({})",
                    build_info::BUILD_DATE,
                    build_info::BUILD_COMMIT
                );
                std::process::exit(0);
            }
            "--help" | "-h" => {
                print_help();
                std::process::exit(0);
            }
            "--level" | "-l" => match iter.next().and_then(|n| n.parse().ok()) {
                Some(level) => options.level = level,
                None => {
                    eprintln!("--level needs a level number");
                    std::process::exit(1);
                }
            },
            "--reset-stats" => options.reset_stats = true,
            other => {
                eprintln!("Unknown option: {}", other);
                eprintln!("Run 'pegsol --help' for usage.");
                std::process::exit(1);
            }
        }
    }

    options
}

/// Log to ~/.pegsol/pegsol.log, only when the log env var is set. Stdout
/// belongs to the terminal UI.
fn init_logging() {
    let Ok(filter) = EnvFilter::try_from_env(LOG_ENV_VAR) else {
        return;
    };
    let Ok(dir) = stats::persistence::data_dir() else {
        return;
    };
    if std::fs::create_dir_all(&dir).is_err() {
        return;
    }
    let Ok(log_file) = std::fs::File::create(dir.join(LOG_FILE_NAME)) else {
        return;
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init();
}

fn key_to_input(code: KeyCode) -> PegInput {
    match code {
        KeyCode::Up => PegInput::Up,
        KeyCode::Down => PegInput::Down,
        KeyCode::Left => PegInput::Left,
        KeyCode::Right => PegInput::Right,
        KeyCode::Enter | KeyCode::Char(' ') => PegInput::Select,
        KeyCode::Esc => PegInput::Cancel,
        KeyCode::Char('r') | KeyCode::Char('R') => PegInput::Restart,
        KeyCode::Char('n') | KeyCode::Char('N') => PegInput::NextLevel,
        KeyCode::Char('l') | KeyCode::Char('L') => PegInput::LevelSelect,
        KeyCode::Char('s') | KeyCode::Char('S') => PegInput::Stats,
        KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('?') => PegInput::Help,
        KeyCode::Char('q') | KeyCode::Char('Q') => PegInput::Quit,
        _ => PegInput::Other,
    }
}

fn save(app: &mut App) {
    match stats::save_stats(&app.stats) {
        Ok(()) => app.stats_dirty = false,
        Err(e) => tracing::error!(error = %e, "failed to save stats"),
    }
}

fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> io::Result<()> {
    while !app.should_quit {
        terminal.draw(|frame| ui::draw_ui(frame, &*app))?;

        if event::poll(Duration::from_millis(TICK_INTERVAL_MS))? {
            if let Event::Key(key_event) = event::read()? {
                if key_event.kind == KeyEventKind::Press {
                    process_input(app, key_to_input(key_event.code), Instant::now());
                }
            }
        }

        app.tick(Instant::now());

        if app.stats_dirty {
            save(app);
        }
    }
    Ok(())
}

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let options = parse_args(&args);

    init_logging();
    tracing::info!(
        version = build_info::BUILD_COMMIT,
        level = options.level,
        "starting"
    );

    let catalog = LevelCatalog::builtin()
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

    let stats = if options.reset_stats {
        let fresh = GameStats::default();
        stats::save_stats(&fresh)?;
        println!("Statistics reset.");
        fresh
    } else {
        stats::load_stats()
    };

    let mut app = App::new(catalog, stats, options.level)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut app);

    // Cleanup terminal even if the loop failed
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // A jump still in flight is committed so its result is recorded
    app.commit_pending();
    if app.stats_dirty {
        save(&mut app);
    }

    result?;
    println!("Goodbye!");
    Ok(())
}
