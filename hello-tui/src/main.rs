//! hello-tui - edit a name, bump an age, watch the greeting
//!
//! Every change goes through the reducer: typing dispatches a name change,
//! the button dispatches an age increment.

use std::path::PathBuf;

use clap::Parser;
use hello_tui::{
    app::event::EventHandler,
    error::Result,
    terminal::{install_panic_hook, restore_terminal, setup_terminal, Tui},
    ui, App, UiAction, UiState,
};
use libhello::{
    logging::{LogFormat, LoggingConfig},
    Config, Store, TracingInspector,
};

#[derive(Parser, Debug)]
#[command(name = "hello-tui", version)]
#[command(about = "Edit a name and bump an age through a reducer", long_about = None)]
struct Cli {
    /// Config file (defaults to $HELLO_CONFIG or the XDG config dir)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Start with this name instead of the configured one
    #[arg(long)]
    name: Option<String>,

    /// Start with this age instead of the configured one
    #[arg(long)]
    age: Option<u32>,

    /// Write logs to this file (nothing is logged otherwise)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log format (text, json or pretty)
    #[arg(long, default_value = "text")]
    log_format: LogFormat,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
}

fn run(cli: Cli) -> Result<()> {
    if let Some(ref path) = cli.log_file {
        LoggingConfig::new(cli.log_format, "info".to_string(), cli.verbose)
            .with_file(path)
            .init()?;
    }

    // A broken config file is reported on screen, not fatal
    let (config, config_error) = match load_config(cli.config.as_ref()) {
        Ok(config) => (config, None),
        Err(e) => {
            tracing::warn!("falling back to default config: {}", e);
            (Config::default(), Some(format!("{} (using defaults)", e)))
        }
    };
    let config = config.apply_env();

    let mut initial = config.initial_state();
    if let Some(name) = cli.name {
        initial.name = name;
    }
    if let Some(age) = cli.age {
        initial.age = age;
    }

    tracing::info!(name = %initial.name, age = initial.age, "starting");

    let store = Store::new(initial).with_inspector(Box::new(TracingInspector));
    let mut app = App::new(store, UiState::new(config.ui.clone()));
    if let Some(error) = config_error {
        app.apply_ui(UiAction::ShowError(error));
    }

    install_panic_hook();
    let mut terminal = setup_terminal()?;
    let result = run_app(&mut terminal, &mut app, config.ui.tick_rate_ms);
    restore_terminal(terminal)?;

    tracing::info!(name = %app.state().name, age = app.state().age, "exiting");
    result
}

fn load_config(path: Option<&PathBuf>) -> libhello::Result<Config> {
    match path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

fn run_app(terminal: &mut Tui, app: &mut App, tick_rate_ms: u64) -> Result<()> {
    let events = EventHandler::new(tick_rate_ms);

    loop {
        if app.take_redraw() {
            terminal.draw(|frame| ui::render(frame, app))?;
        }

        app.handle_event(events.next()?);

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
