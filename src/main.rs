//! # Forge CLI Entry Point
//!
//! Forge is a terminal dashboard for a development workspace. It renders
//! a fixed header/content/footer layout, offers the configured commands
//! in a palette (git status and git fetch by default), and replaces the
//! content region with the captured output of whichever command runs.
//!
//! ## Usage
//!
//! ```bash
//! # Use current directory as the workspace
//! forge
//!
//! # Use a specific workspace directory
//! forge --path /path/to/repo
//!
//! # Use a specific config file
//! forge --config ./forge.json
//!
//! # Print the resolved command registry and exit
//! forge --debug
//! ```
//!
//! ## Key Bindings
//!
//! - `Esc` - Close the palette, or quit when no palette is open
//! - `Ctrl+P` - Open the command palette
//! - `Up` / `Down` (or `k` / `j`) - Move the palette selection (wraps)
//! - `Enter` - Run the selected command
//!
//! ## Architecture
//!
//! One poll-driven loop owns all state: it reads a key or resize event
//! (or times out and polls again), applies the transition to the
//! [`App`] state, runs commands synchronously when requested, and
//! repaints only when something changed. Command execution blocks the
//! loop until the process exits.

use forge::command::{runner, Registry};
use forge::config::Config;
use forge::ui;
use forge::ui::app::Action;
use forge::ui::theme::Theme;
use forge::ui::App;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    cursor,
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io;
use std::panic;
use std::path::PathBuf;
use std::time::Duration;

/// Poll timeout for one render tick. The loop sleeps this long when no
/// input arrives.
const TICK_TIMEOUT: Duration = Duration::from_millis(100);

/// Trait for reading terminal events (allows dependency injection for testing)
trait EventReader {
    fn read_event(&mut self, timeout: Duration) -> Result<Option<Event>>;
}

/// Production event reader that uses crossterm's event polling + read
struct CrosstermEventReader;

impl EventReader for CrosstermEventReader {
    fn read_event(&mut self, timeout: Duration) -> Result<Option<Event>> {
        if event::poll(timeout).context("Failed to poll for events")? {
            Ok(Some(
                event::read().context("Failed to read keyboard event")?,
            ))
        } else {
            Ok(None)
        }
    }
}

/// Forge - a terminal dashboard for dispatching workspace commands
#[derive(Parser, Debug)]
#[command(name = "forge")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "A terminal dashboard for your workspace commands", long_about = None)]
struct Args {
    /// Workspace directory the default commands run in
    #[arg(short, long, value_name = "DIR")]
    path: Option<PathBuf>,

    /// Path to a config file (default: ~/.config/forge/config.json)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Print the resolved command registry and exit
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Set up panic hook to ensure terminal is restored on panic
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, cursor::Show);

        original_hook(panic_info);
    }));

    let result = run_application(args).await;

    let _ = panic::take_hook();

    result
}

async fn run_application(args: Args) -> Result<()> {
    // Resolve the workspace directory the default commands run in
    let workspace = if let Some(path) = args.path {
        path.canonicalize()
            .with_context(|| format!("Failed to access directory: {}", path.display()))?
    } else {
        std::env::current_dir().context("Failed to get current working directory")?
    };

    let config = match args.config {
        Some(path) => Config::load_from(&path)?,
        None => Config::load(),
    };

    let theme = match Theme::by_name(&config.theme) {
        Some(theme) => theme,
        None => {
            eprintln!(
                "Warning: unknown theme '{}', using '{}'",
                config.theme,
                Theme::default_theme().name
            );
            Theme::default_theme()
        }
    };

    let registry = config.build_registry(&workspace);

    // Debug mode: print the resolved registry and exit
    if args.debug {
        println!("=== Command Registry ===");
        for cmd in registry.iter() {
            println!(
                "  Name: {}\n    Invocation: {}\n    Cwd: {}\n",
                cmd.name,
                cmd.invocation(),
                cmd.cwd.display()
            );
        }
        println!("Theme: {}", theme.name);
        return Ok(());
    }

    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode for terminal")?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, cursor::Hide).context("Failed to setup terminal")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let mut app = App::new();
    let mut event_reader = CrosstermEventReader;
    let run_result = run_app(&mut terminal, &mut app, &registry, theme, &mut event_reader).await;

    // Restore terminal (always runs, even if run_app failed)
    let cleanup_result = cleanup_terminal(&mut terminal);

    // Return the first error that occurred, or Ok if both succeeded
    run_result?;
    cleanup_result?;

    Ok(())
}

/// Clean up terminal state
fn cleanup_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;

    execute!(terminal.backend_mut(), LeaveAlternateScreen, cursor::Show)
        .context("Failed to restore terminal")?;

    terminal.show_cursor().context("Failed to show cursor")?;

    Ok(())
}

/// The render tick loop: poll input, apply the transition, execute
/// commands when requested, and repaint only when the state or the
/// terminal size changed.
async fn run_app<B: Backend<Error: std::error::Error + Send + Sync + 'static>>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    registry: &Registry,
    theme: &Theme,
    event_reader: &mut dyn EventReader,
) -> Result<()> {
    let mut dirty = true;

    loop {
        if dirty {
            terminal
                .draw(|f| ui::render(f, app, registry, theme))
                .context("Failed to draw terminal UI")?;
            dirty = false;
        }

        match event_reader.read_event(TICK_TIMEOUT)? {
            Some(Event::Key(key)) => match app.handle_key(key, registry) {
                Action::None => {}
                Action::Redraw => dirty = true,
                Action::Execute(index) => {
                    // Blocking by design: the UI waits for the process
                    let node = runner::run_command(registry.get(index));
                    app.set_content(node);
                    dirty = true;
                }
                Action::Quit => {}
            },
            Some(Event::Resize(_, _)) => {
                // Layout is recomputed from the new size; state untouched
                dirty = true;
            }
            _ => {}
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
