//! progress-ring - circular progress indicator demo host
//! Copyright Cybex B.V.

mod app;
mod ui;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use serde_json::{json, Value};
use std::io;
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use app::App;
use progress_ring::config::Settings;
use progress_ring::{paths, svg, ProgressIndicator, ProgressOptions};

/// Circular progress indicator
#[derive(Parser)]
#[command(name = "progress-ring")]
#[command(author = "Cybex B.V.")]
#[command(version)]
#[command(about = "Circular progress indicator - interactive demo and SVG renderer")]
struct Cli {
    /// Settings file (default: ~/.config/progress-ring/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive demo (default)
    Demo,
    /// Render the indicator to SVG markup
    Render(RenderArgs),
    /// Print the example configuration
    Config {
        /// Write it to the settings path instead of printing
        #[arg(long)]
        write: bool,
    },
}

#[derive(Args)]
struct RenderArgs {
    /// Progress value (0-100)
    #[arg(long, allow_negative_numbers = true)]
    value: Option<f64>,
    /// Circle radius
    #[arg(long, allow_negative_numbers = true)]
    radius: Option<f64>,
    /// Stroke thickness
    #[arg(long, allow_negative_numbers = true)]
    thickness: Option<f64>,
    /// Mark the indicator as animated
    #[arg(long)]
    animated: bool,
    /// Mark the indicator as hidden
    #[arg(long)]
    hidden: bool,
    /// Extra options as a JSON object, e.g. '{"value": 40}'
    #[arg(long)]
    options: Option<String>,
    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Set up logging to file
    let log_dir = paths::data_dir();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = tracing_appender::rolling::daily(&log_dir, paths::LOG_FILE);
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .with(fmt::layer().with_writer(non_blocking).with_ansi(false))
        .init();

    tracing::info!("progress-ring starting");

    let cli = Cli::parse();

    let settings = match &cli.config {
        Some(path) => Settings::load_from(path)?,
        None => Settings::load(),
    };

    match cli.command {
        None | Some(Commands::Demo) => run_tui(&settings).await,
        Some(Commands::Render(args)) => render(&settings, args),
        Some(Commands::Config { write }) => {
            if write {
                let path = cli.config.unwrap_or_else(paths::config_file_path);
                Settings::example().save_to(&path)?;
                println!("Wrote {}", path.display());
            } else {
                print!("{}", Settings::example_toml());
            }
            Ok(())
        }
    }
}

/// Merge settings, `--options` and flags into one option set
///
/// Later sources override earlier ones key by key, and the merged object
/// goes through the same validation as any other loose input.
fn render_options(settings: &Settings, args: &RenderArgs) -> Result<ProgressOptions> {
    let mut merged = serde_json::to_value(&settings.indicator)?;
    let Value::Object(map) = &mut merged else {
        bail!("[indicator] settings must be a table");
    };

    if let Some(raw) = &args.options {
        let extra: Value = serde_json::from_str(raw).context("--options must be valid JSON")?;
        match extra {
            Value::Object(extra) => map.extend(extra),
            _ => bail!("--options must be a JSON object"),
        }
    }

    if let Some(value) = args.value {
        map.insert("value".into(), json!(value));
    }
    if let Some(radius) = args.radius {
        map.insert("radius".into(), json!(radius));
    }
    if let Some(thickness) = args.thickness {
        map.insert("thickness".into(), json!(thickness));
    }
    if args.animated {
        map.insert("animated".into(), json!(true));
    }
    if args.hidden {
        map.insert("hidden".into(), json!(true));
    }

    Ok(ProgressOptions::from_json(&merged)?)
}

fn render(settings: &Settings, args: RenderArgs) -> Result<()> {
    let options = render_options(settings, &args)?;
    let container = svg::progress_circle();
    let indicator = ProgressIndicator::new(container.clone(), options)?;
    let markup = svg::to_markup(&container);

    tracing::info!(
        value = indicator.value(),
        radius = indicator.radius(),
        "Rendered progress markup"
    );

    match args.output {
        Some(path) => {
            std::fs::write(&path, markup)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!("Wrote {}", path.display());
        }
        None => print!("{}", markup),
    }
    Ok(())
}

async fn run_tui(settings: &Settings) -> Result<()> {
    // Build the app before touching the terminal so configuration errors print normally
    let mut app = App::new(settings)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the app
    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        eprintln!("Error: {err:?}");
        return Err(err);
    }

    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    let mut event_stream = EventStream::new();
    let timeout = Duration::from_millis(app.demo.tick_ms.max(1));

    loop {
        terminal.draw(|frame| ui::draw(frame, app))?;

        tokio::select! {
            biased;

            Some(Ok(event)) = event_stream.next() => {
                if let Event::Key(key) = event {
                    if key.kind == KeyEventKind::Press {
                        app.handle_key(key.code);
                    }
                }
            }
            // Timeout drives the animation redraw
            _ = tokio::time::sleep(timeout) => {}
        }

        app.tick();

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
