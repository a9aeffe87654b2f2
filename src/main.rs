// LinkViz: animated linked-list visualizer for the terminal

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::EnvFilter;

use linkviz::animation::Timings;
use linkviz::app_error::AppError;
use linkviz::engine::ListEngine;
use linkviz::list::ListMode;
use linkviz::script::{load_script, run_script};
use linkviz::ui::App;

/// Slowest supported animation scale
const MAX_SPEED: f64 = 100.0;

fn print_usage(program: &str) {
    eprintln!("Usage: {} [options]", program);
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --mode <singly|doubly|circular>  Initial list type (default: singly)");
    eprintln!("  --seed <v1,v2,...>               Start with these values");
    eprintln!("  --script <file>                  Apply JSON-lines operation requests first");
    eprintln!("  --speed <factor>                 Scale animation timings (2 = twice as slow, max 100)");
    eprintln!("  --headless                       Print the final snapshot as JSON, no TUI");
    eprintln!("  --log <file>                     Write tracing output to <file> (LINKVIZ_LOG filter)");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  {} --seed 5,7,9 --mode doubly", program);
    eprintln!("  {} --script ops.jsonl --headless", program);
}

#[derive(Debug, Clone, PartialEq)]
struct CliOptions {
    mode: ListMode,
    seed: Vec<i64>,
    script: Option<PathBuf>,
    speed: f64,
    headless: bool,
    log: Option<PathBuf>,
}

impl Default for CliOptions {
    fn default() -> Self {
        CliOptions {
            mode: ListMode::Singly,
            seed: Vec::new(),
            script: None,
            speed: 1.0,
            headless: false,
            log: None,
        }
    }
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, AppError> {
    let mut options = CliOptions::default();
    let missing = |flag: &str| AppError::Usage(format!("{} needs a value", flag));

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--mode" => {
                let raw = args.next().ok_or_else(|| missing("--mode"))?;
                options.mode = raw
                    .parse()
                    .map_err(|e: linkviz::list::ParseListModeError| AppError::Usage(e.to_string()))?;
            }
            "--seed" => {
                let raw = args.next().ok_or_else(|| missing("--seed"))?;
                options.seed = raw
                    .split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(|s| {
                        s.parse::<i64>().map_err(|_| {
                            AppError::Usage(format!("seed value '{}' is not a whole number", s))
                        })
                    })
                    .collect::<Result<_, _>>()?;
            }
            "--script" => {
                let raw = args.next().ok_or_else(|| missing("--script"))?;
                options.script = Some(PathBuf::from(raw));
            }
            "--speed" => {
                let raw = args.next().ok_or_else(|| missing("--speed"))?;
                let speed: f64 = raw
                    .parse()
                    .map_err(|_| AppError::Usage(format!("speed '{}' is not a number", raw)))?;
                if !speed.is_finite() || speed <= 0.0 || speed > MAX_SPEED {
                    return Err(AppError::Usage(format!(
                        "speed must be greater than 0 and at most {}",
                        MAX_SPEED
                    )));
                }
                options.speed = speed;
            }
            "--headless" => options.headless = true,
            "--log" => {
                let raw = args.next().ok_or_else(|| missing("--log"))?;
                options.log = Some(PathBuf::from(raw));
            }
            _ => return Err(AppError::Usage(format!("unknown argument '{}'", arg))),
        }
    }

    Ok(options)
}

/// Send tracing output to a file; the terminal belongs to the TUI
fn init_logging(path: &Path) -> Result<(), AppError> {
    let file = File::create(path).map_err(|source| AppError::LogFile {
        path: path.to_path_buf(),
        source,
    })?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("LINKVIZ_LOG").unwrap_or_else(|_| EnvFilter::new("linkviz=info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn run(options: CliOptions) -> Result<(), AppError> {
    if let Some(path) = &options.log {
        init_logging(path)?;
    }

    let timings = Timings::default().scaled(options.speed);
    let mut engine = ListEngine::with_timings(options.mode, timings).with_values(options.seed);
    tracing::info!(mode = %engine.mode(), nodes = engine.len(), "engine ready");

    if let Some(path) = &options.script {
        let requests = load_script(path)?;
        eprintln!("Applying {} operation(s) from {}...", requests.len(), path.display());
        for result in run_script(&mut engine, &requests) {
            match result {
                Ok(outcome) => eprintln!("  ok    {}", outcome),
                Err(err) => eprintln!("  error {}", err),
            }
        }
    }

    if options.headless {
        println!("{}", serde_json::to_string_pretty(&engine.snapshot())?);
        return Ok(());
    }

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(engine);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res.map_err(AppError::from)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args();
    let program = args.next().unwrap_or_else(|| "linkviz".to_string());

    let options = match parse_options(args) {
        Ok(options) => options,
        Err(err) => {
            eprintln!("Error: {}", err);
            eprintln!();
            print_usage(&program);
            std::process::exit(2);
        }
    };

    run(options)?;
    Ok(())
}
