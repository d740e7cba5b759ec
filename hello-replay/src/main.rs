//! hello-replay - replay an action log through the reducer
//!
//! Reads one JSON action per line, dispatches each one to a store and
//! prints the resulting state.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use libhello::{AppState, Config, HelloError, RawAction, Store, TracingInspector};

#[derive(Parser, Debug)]
#[command(name = "hello-replay", version)]
#[command(about = "Replay a JSON-lines action log through the reducer")]
#[command(after_help = "\
INPUT FORMAT:
  One action per line. Blank lines and lines starting with '#' are skipped.
    {\"type\":\"increment_age\"}
    {\"type\":\"changed_name\",\"nextName\":\"Zee\"}

EXIT CODES:
  0  All actions applied
  1  Config or IO error
  3  Unknown or malformed action

EXAMPLES:
  hello-replay actions.jsonl
  echo '{\"type\":\"increment_age\"}' | hello-replay --format json
  hello-replay --trace --name Zee --age 1 actions.jsonl")]
struct Cli {
    /// Action log to replay (reads stdin if omitted or '-')
    file: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Print every intermediate state instead of only the final one
    #[arg(short, long)]
    trace: bool,

    /// Config file (defaults to $HELLO_CONFIG or the XDG config dir)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Start with this name instead of the configured one
    #[arg(long)]
    name: Option<String>,

    /// Start with this age instead of the configured one
    #[arg(long)]
    age: Option<u32>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = libhello::logging::from_env(cli.verbose).init() {
        eprintln!("Warning: {}", e);
    }

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        let code = e
            .downcast_ref::<HelloError>()
            .map(HelloError::exit_code)
            .unwrap_or(1);
        std::process::exit(code);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = match cli.config {
        Some(ref path) => Config::load_from_path(path),
        None => Config::load(),
    }?;

    let mut initial = config.initial_state();
    if let Some(name) = cli.name {
        initial.name = name;
    }
    if let Some(age) = cli.age {
        initial.age = age;
    }

    let mut store = Store::new(initial).with_inspector(Box::new(TracingInspector));

    let format = cli.format;
    if cli.trace {
        store.subscribe(move |state| match render(state, format) {
            Ok(line) => println!("{}", line),
            Err(e) => tracing::error!("cannot render state: {}", e),
        });
    }

    let reader: Box<dyn BufRead> = match cli.file {
        Some(ref path) if path.as_os_str() != "-" => {
            let file = File::open(path).map_err(|e| {
                HelloError::Io(io::Error::new(
                    e.kind(),
                    format!("cannot open {}: {}", path.display(), e),
                ))
            })?;
            Box::new(BufReader::new(file))
        }
        _ => Box::new(BufReader::new(io::stdin())),
    };

    replay(&mut store, reader)?;

    tracing::info!(actions = store.dispatch_count(), "replay finished");

    if !cli.trace {
        println!("{}", render(store.state(), format)?);
    }

    Ok(())
}

/// Dispatch every action in `reader`, stopping at the first failure
///
/// Lines are read as bytes so that bad encoding is reported against its
/// line number like any other malformed action.
fn replay(store: &mut Store, reader: impl BufRead) -> libhello::Result<()> {
    for (index, bytes) in reader.split(b'\n').enumerate() {
        let line_no = index + 1;
        let line = String::from_utf8(bytes?).map_err(|e| {
            HelloError::InvalidInput(format!("action is not valid UTF-8: {}", e)).at_line(line_no)
        })?;
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let raw: RawAction =
            serde_json::from_str(line).map_err(|e| HelloError::from(e).at_line(line_no))?;

        store
            .dispatch_raw(raw)
            .map_err(|e| HelloError::from(e).at_line(line_no))?;
    }

    Ok(())
}

fn render(state: &AppState, format: OutputFormat) -> libhello::Result<String> {
    match format {
        OutputFormat::Text => Ok(state.greeting()),
        OutputFormat::Json => Ok(serde_json::to_string(state)?),
    }
}
