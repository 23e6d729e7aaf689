//! multicomplete - token-by-token autocomplete for delimited input
//!
//! Runs an interactive line editor that completes one comma separated
//! token at a time, or answers one-shot queries from the command line.
//!
//! # Usage
//!
//! ```bash
//! # Interactive mode
//! multicomplete --items Monday,Tuesday,Wednesday
//!
//! # One-shot completion
//! multicomplete --items Monday,Tuesday complete "Mon, Tu" --accept Tuesday
//! ```

use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

use multicomplete::cli::CliInterface;
use multicomplete::error::Result;
use multicomplete::repl::ReplEngine;

/// Application entry point
fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Main application logic
///
/// 1. Parse command-line arguments and load configuration
/// 2. Initialize logging
/// 3. Handle subcommands or start the interactive editor
fn run() -> Result<()> {
    let cli = CliInterface::new()?;

    initialize_logging(&cli);

    if cli.handle_subcommand()? {
        return Ok(());
    }

    cli.print_banner();

    run_interactive_mode(&cli)
}

/// Run application in interactive mode
fn run_interactive_mode(cli: &CliInterface) -> Result<()> {
    let config = cli.config();
    let mut repl = ReplEngine::new(&config.editor, &config.history, cli.color_enabled())?;

    run_repl_loop(cli, &mut repl)?;

    if !cli.args().quiet {
        println!("Goodbye!");
    }
    Ok(())
}

/// Main REPL loop
fn run_repl_loop(cli: &CliInterface, repl: &mut ReplEngine) -> Result<()> {
    while repl.is_running() {
        let input = match repl.read_line()? {
            Some(line) if !line.trim().is_empty() => line,
            Some(_) => continue,
            None => break,
        };

        let tokens = repl.process_input(&input);
        display_tokens(cli, &tokens)?;
    }

    Ok(())
}

/// Print the tokens of a submitted line
fn display_tokens(cli: &CliInterface, tokens: &[String]) -> Result<()> {
    if cli.args().json {
        println!("{}", serde_json::to_string(tokens)?);
    } else {
        for (i, token) in tokens.iter().enumerate() {
            println!("{:>3}  {}", i + 1, token);
        }
    }
    Ok(())
}

/// Initialize logging system based on configured level
///
/// `RUST_LOG` takes precedence over the configured level. Logs go to stderr
/// so they never mix with command output.
fn initialize_logging(cli: &CliInterface) {
    let level = cli.config().logging.level.to_tracing_level();
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(level).into())
        .from_env_lossy();

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);

    if cli.config().logging.timestamps {
        subscriber.init();
    } else {
        subscriber.without_time().init();
    }
}
