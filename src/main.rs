use anyhow::{Context, Result};
use clap::Parser;
use ratatui::{backend::TermionBackend, Terminal};
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;
use termion::input::MouseTerminal;
use termion::raw::IntoRawMode;
use termion::screen::IntoAlternateScreen;
use tracing_subscriber::EnvFilter;

use blockquill::config::{Config, ImageCommitPolicy};
use blockquill::editor::state::EditorState;
use blockquill::file::picker::SelectionRules;
use blockquill::input::InputHandler;
use blockquill::theme::{get_builtin_theme, list_builtin_themes};
use blockquill::ui::UI;

/// BlockQuill - A terminal-based block document editor
#[derive(Parser)]
#[command(name = "blockquill")]
#[command(version)]
#[command(about = "A terminal-based block document editor", long_about = None)]
struct Cli {
    /// Theme name (overrides the config file)
    #[arg(short, long)]
    theme: Option<String>,

    /// What an image selected while editing a block does: append or replace
    #[arg(long, value_name = "POLICY")]
    image_commit: Option<ImageCommitPolicy>,

    /// Write logs to this file instead of the cache directory
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Disable mouse block selection
    #[arg(long)]
    no_mouse: bool,
}

/// Set up a panic hook that restores the terminal before displaying panic information.
///
/// This ensures that panics are visible even when the terminal is in raw mode with alternate screen.
fn setup_panic_hook() {
    use std::panic;

    // Take the default panic hook so we can call it after restoration
    let default_panic = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        // Use stderr to avoid interfering with stdout
        let _ = write!(io::stderr(), "{}", termion::screen::ToMainScreen);
        let _ = write!(io::stderr(), "{}", termion::cursor::Show);
        let _ = io::stderr().flush();

        default_panic(panic_info);
    }));
}

/// Default log location: `<cache dir>/blockquill/blockquill.log`.
fn default_log_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join("blockquill").join("blockquill.log"))
}

/// Sends tracing output to a file; the terminal belongs to the UI.
///
/// `BLOCKQUILL_LOG` takes precedence over the configured level. Logging is
/// skipped when no log location can be determined.
fn init_logging(path: Option<PathBuf>, default_level: &str) -> Result<()> {
    let Some(path) = path.or_else(default_log_path) else {
        return Ok(());
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory {}", parent.display()))?;
    }
    let file = File::create(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    let filter = EnvFilter::try_from_env("BLOCKQUILL_LOG")
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}

fn main() -> Result<()> {
    setup_panic_hook();

    let cli = Cli::parse();

    // Load config and apply CLI overrides
    let mut config = Config::load();
    if let Some(theme) = cli.theme {
        config.theme = theme;
    }
    if let Some(policy) = cli.image_commit {
        config.image_commit = policy;
    }
    if cli.no_mouse {
        config.enable_mouse = false;
    }

    init_logging(cli.log_file, &config.log_level)?;
    tracing::info!(theme = %config.theme, image_commit = %config.image_commit, "starting blockquill");

    let theme = match get_builtin_theme(&config.theme) {
        Some(theme) => theme,
        None => {
            eprintln!(
                "Warning: Theme '{}' not found, using default-dark (available: {})",
                config.theme,
                list_builtin_themes().join(", ")
            );
            config.theme = "default-dark".to_string();
            get_builtin_theme(&config.theme).context("Built-in default theme missing")?
        }
    };

    // Setup terminal
    let stdout = io::stdout()
        .into_raw_mode()
        .context("Failed to enable raw mode")?;
    let stdout = MouseTerminal::from(stdout);
    let stdout = stdout
        .into_alternate_screen()
        .context("Failed to enter alternate screen")?;

    let backend = TermionBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let mut ui = UI::new(theme);
    let mut input_handler = InputHandler::new(SelectionRules::from_config(&config));
    let mut state = EditorState::from_config(&config);

    let result = run_event_loop(&mut terminal, &mut ui, &mut input_handler, &mut state);

    // Termion restores the screen through Drop guards; the cursor needs showing.
    write!(terminal.backend_mut(), "{}", termion::cursor::Show)?;
    terminal.backend_mut().flush()?;

    tracing::info!(blocks = state.document().len(), "exiting blockquill");
    result
}

fn run_event_loop<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    ui: &mut UI,
    input_handler: &mut InputHandler,
    state: &mut EditorState,
) -> Result<()> {
    loop {
        state.update_cursor_blink();

        ui.render(terminal, state)?;

        // Terminal input and image selections share one channel
        if let Some(event) = input_handler.poll_event(Duration::from_millis(100))? {
            let should_quit = input_handler.handle_app_event(event, state)?;
            if should_quit {
                break;
            }
        }
    }

    Ok(())
}
