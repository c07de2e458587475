use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;
use zcalc::calculator::{Calculator, copy_to_clipboard};
use zcalc::config;
use zcalc::ui::{OutputFormat, Runner};

/// A keypad-style calculator for the terminal.
///
/// Keys are typed as characters (`0-9 . + - * / =`), named keys in angle
/// brackets (`<Enter>`, `<Backspace>`, `<Delete>`), or keypad labels in
/// square brackets (`[×]`, `[C]`).
#[derive(Parser, Debug)]
#[command(name = "zcalc", version, about)]
struct Cli {
    /// Key sequence to run. Starts an interactive session if omitted.
    #[arg(value_name = "KEYS")]
    keys: Vec<String>,

    /// Print the display after every key instead of once at the end
    #[arg(long)]
    trace: bool,

    /// Print frames as JSON lines
    #[arg(long)]
    json: bool,

    /// Copy the final display to the clipboard
    #[arg(long)]
    copy: bool,

    /// Path to the config file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = config::load(cli.config.as_deref()).context("Failed to load configuration")?;
    let mut calculator = Calculator::new(
        config.display.format_options(),
        config.division_by_zero_message.clone(),
    );

    let interactive = cli.keys.is_empty();
    let format = if cli.json {
        OutputFormat::Json
    } else if interactive {
        OutputFormat::Panel {
            width: calculator.options().width,
            show_keypad: config.display.show_keypad,
        }
    } else {
        OutputFormat::Plain
    };

    let mut runner = Runner::new(format, cli.trace, std::io::stdout().lock());
    if interactive {
        info!("starting interactive session");
        runner.run_interactive(&mut calculator, std::io::stdin().lock())?;
    } else {
        runner.run_sequence(&mut calculator, &cli.keys.join(" "))?;
    }

    if cli.copy {
        let frame = calculator.frame();
        copy_to_clipboard(frame.clipboard_text()).context("Failed to copy result")?;
        info!(text = %frame.text, "copied to clipboard");
    }

    Ok(())
}

/// Log to stderr so stdout only carries the display.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
