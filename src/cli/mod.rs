//! Command-line interface for multicomplete
//!
//! This module handles:
//! - Command-line argument parsing using clap
//! - Configuration loading and validation
//! - Vocabulary loading from arguments and files
//! - One-shot subcommands (token splitting, completion, config inspection)

pub mod completion;

use clap::{Parser, Subcommand};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::completion::{CaseSensitivity, MatchMode, Separator};
use crate::config::{Config, LogLevel};
use crate::error::Result;

/// Word-aware autocomplete over delimited text
#[derive(Parser, Debug)]
#[command(
    name = "multicomplete",
    version,
    about = "Token-by-token autocomplete for delimited input",
    long_about = "Completes one delimited token at a time instead of the whole line.
Run without a subcommand for an interactive editor with Tab completion."
)]
pub struct CliArgs {
    /// Configuration file path
    #[arg(short = 'c', long = "config", value_name = "FILE", global = true)]
    pub config_file: Option<PathBuf>,

    /// Completion candidates, comma separated
    #[arg(short = 'i', long, value_name = "ITEMS", value_delimiter = ',', global = true)]
    pub items: Vec<String>,

    /// File with one completion candidate per line
    #[arg(long, value_name = "FILE", global = true)]
    pub vocabulary_file: Option<PathBuf>,

    /// Token separator character
    #[arg(short = 's', long, value_name = "CHAR", global = true)]
    pub separator: Option<String>,

    /// Match candidates anywhere in the token instead of at its start
    #[arg(long, global = true)]
    pub substring: bool,

    /// Distinguish letter case when matching
    #[arg(long, global = true)]
    pub case_sensitive: bool,

    /// Do not append the separator and a space after a completion
    #[arg(long, global = true)]
    pub no_trailing_space: bool,

    /// Emit JSON instead of plain text
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable colored output
    #[arg(long = "no-color", global = true)]
    pub no_color: bool,

    /// Quiet mode (errors only)
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Verbose mode (detailed logging)
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Very verbose mode (trace logging)
    #[arg(long = "vv", global = true)]
    pub very_verbose: bool,

    /// Subcommands
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Subcommands for multicomplete
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Split text into its list of tokens
    Tokens {
        /// Text to split
        #[arg(value_name = "TEXT")]
        text: String,
    },

    /// Show the token under the cursor and its candidates
    Complete {
        /// Buffer contents
        #[arg(value_name = "TEXT")]
        text: String,

        /// Cursor position in characters (defaults to end of text)
        #[arg(long, value_name = "POS")]
        cursor: Option<usize>,

        /// Accept this candidate and print the resulting buffer
        #[arg(long, value_name = "CANDIDATE")]
        accept: Option<String>,
    },

    /// Show version information
    Version,

    /// Generate shell completion script
    Completion {
        /// Shell type (bash, zsh, fish, powershell)
        #[arg(value_name = "SHELL")]
        shell: String,
    },

    /// Show configuration
    Config {
        /// Show effective configuration
        #[arg(long)]
        show: bool,

        /// Validate configuration file
        #[arg(long)]
        validate: bool,
    },
}

/// Result of the `complete` subcommand
#[derive(Debug, Serialize, PartialEq)]
pub struct CompletionReport {
    pub token: String,
    pub token_start: usize,
    pub candidates: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accepted: Option<AcceptedReport>,
}

/// Buffer after accepting a candidate
#[derive(Debug, Serialize, PartialEq)]
pub struct AcceptedReport {
    pub text: String,
    pub cursor: usize,
    pub tokens: Vec<String>,
}

/// CLI interface handler
pub struct CliInterface {
    /// Parsed command-line arguments
    args: CliArgs,

    /// Loaded configuration
    config: Config,
}

impl CliInterface {
    /// Create a new CLI interface from the process arguments
    ///
    /// # Returns
    /// * `Result<Self>` - New CLI interface or error
    pub fn new() -> Result<Self> {
        Self::from_args(CliArgs::parse())
    }

    /// Create a CLI interface from already parsed arguments
    pub fn from_args(args: CliArgs) -> Result<Self> {
        let config = Self::load_config(&args)?;
        Ok(Self { args, config })
    }

    /// Load configuration from file and merge with arguments
    ///
    /// # Arguments
    /// * `args` - Command-line arguments
    ///
    /// # Returns
    /// * `Result<Config>` - Loaded configuration or error
    fn load_config(args: &CliArgs) -> Result<Config> {
        let mut config = Config::load_from_file(args.config_file.as_deref())?;

        if let Err(e) = config.validate() {
            tracing::warn!("Configuration validation failed: {e}. Using defaults instead.");
            config = Config::default();
        }

        Self::apply_args_to_config(&mut config, args)?;
        Ok(config)
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get the CLI arguments
    pub fn args(&self) -> &CliArgs {
        &self.args
    }

    /// Whether colored output is enabled
    pub fn color_enabled(&self) -> bool {
        !self.args.no_color && !self.args.json
    }

    /// Apply CLI arguments to configuration
    ///
    /// Overrides configuration values with CLI arguments where provided
    fn apply_args_to_config(config: &mut Config, args: &CliArgs) -> Result<()> {
        Self::apply_editor_args(config, args)?;
        Self::apply_vocabulary_args(config, args)?;
        Self::apply_logging_args(config, args);
        Ok(())
    }

    /// Apply completion-related CLI arguments to configuration
    fn apply_editor_args(config: &mut Config, args: &CliArgs) -> Result<()> {
        if let Some(separator) = &args.separator {
            config.editor.separator = Separator::parse(separator)?;
        }
        if args.substring {
            config.editor.match_mode = MatchMode::SubstringAnywhere;
        }
        if args.case_sensitive {
            config.editor.case_sensitivity = CaseSensitivity::Sensitive;
        }
        if args.no_trailing_space {
            config.editor.add_space_after_completing = false;
        }
        Ok(())
    }

    /// Replace the configured vocabulary when one is given on the command line
    fn apply_vocabulary_args(config: &mut Config, args: &CliArgs) -> Result<()> {
        let mut vocabulary: Vec<String> = args
            .items
            .iter()
            .map(|item| item.trim().to_string())
            .filter(|item| !item.is_empty())
            .collect();

        if let Some(path) = &args.vocabulary_file {
            vocabulary.extend(read_vocabulary_file(path)?);
        }

        if !vocabulary.is_empty() {
            tracing::debug!(count = vocabulary.len(), "vocabulary from command line");
            config.editor.vocabulary = vocabulary;
        }
        Ok(())
    }

    /// Apply logging-related CLI arguments to configuration
    fn apply_logging_args(config: &mut Config, args: &CliArgs) {
        config.logging.level = if args.very_verbose {
            LogLevel::Trace
        } else if args.verbose {
            LogLevel::Debug
        } else if args.quiet {
            LogLevel::Error
        } else {
            config.logging.level
        };
    }

    /// Handle subcommands
    ///
    /// # Returns
    /// * `Result<bool>` - True if subcommand was handled, false to continue
    pub fn handle_subcommand(&self) -> Result<bool> {
        match &self.args.command {
            Some(Commands::Tokens { text }) => {
                self.print_tokens(text)?;
                Ok(true)
            }
            Some(Commands::Complete {
                text,
                cursor,
                accept,
            }) => {
                let report = self.complete(text, *cursor, accept.as_deref())?;
                self.print_completion(&report)?;
                Ok(true)
            }
            Some(Commands::Version) => {
                self.show_version();
                Ok(true)
            }
            Some(Commands::Completion { shell }) => {
                completion::generate_completion(shell)?;
                Ok(true)
            }
            Some(Commands::Config { show, validate }) => {
                self.handle_config_command(*show, *validate)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Split `text` with the configured separator
    pub fn tokens(&self, text: &str) -> Result<Vec<String>> {
        let mut engine = self.config.editor.build_engine()?;
        engine.set_text(text);
        Ok(engine.extract_token_list())
    }

    fn print_tokens(&self, text: &str) -> Result<()> {
        let tokens = self.tokens(text)?;
        if self.args.json {
            println!("{}", serde_json::to_string(&tokens)?);
        } else {
            for token in tokens {
                println!("{token}");
            }
        }
        Ok(())
    }

    /// Run one completion cycle over `text`
    ///
    /// # Arguments
    /// * `text` - Buffer contents
    /// * `cursor` - Cursor in characters, end of text when `None`
    /// * `accept` - Candidate to accept after filtering
    pub fn complete(
        &self,
        text: &str,
        cursor: Option<usize>,
        accept: Option<&str>,
    ) -> Result<CompletionReport> {
        let mut engine = self.config.editor.build_engine()?;
        let cursor = cursor.unwrap_or_else(|| text.chars().count());
        engine.edit(text, cursor, true);

        let token = engine.current_token().to_string();
        let token_start = engine.token_start();
        let candidates: Vec<String> = engine.filter_current().map(str::to_string).collect();

        let accepted = match accept {
            Some(candidate) => {
                engine.accept_completion(candidate)?;
                Some(AcceptedReport {
                    text: engine.text().to_string(),
                    cursor: engine.cursor(),
                    tokens: engine.extract_token_list(),
                })
            }
            None => None,
        };

        Ok(CompletionReport {
            token,
            token_start,
            candidates,
            accepted,
        })
    }

    fn print_completion(&self, report: &CompletionReport) -> Result<()> {
        if self.args.json {
            println!("{}", serde_json::to_string_pretty(report)?);
            return Ok(());
        }

        println!("token: {:?} (starts at {})", report.token, report.token_start);
        for candidate in &report.candidates {
            println!("  {candidate}");
        }
        if let Some(accepted) = &report.accepted {
            println!("text: {:?} (cursor {})", accepted.text, accepted.cursor);
        }
        Ok(())
    }

    /// Show version information
    fn show_version(&self) {
        println!("multicomplete version {}", env!("CARGO_PKG_VERSION"));
        println!("Rust version: {}", env!("CARGO_PKG_RUST_VERSION"));
    }

    /// Handle config subcommand
    ///
    /// # Arguments
    /// * `show` - Whether to show configuration
    /// * `validate` - Whether to validate configuration
    fn handle_config_command(&self, show: bool, validate: bool) -> Result<()> {
        if validate {
            self.validate_config_file();
        }

        if show || !validate {
            self.show_config()?;
        }

        Ok(())
    }

    /// Validate configuration file
    fn validate_config_file(&self) {
        let path = self.get_config_path();
        println!("Validating configuration file: {}", path.display());

        match Config::load_from_file(self.args.config_file.as_deref()) {
            Ok(config) => match config.validate() {
                Ok(()) => println!("Configuration is valid"),
                Err(e) => println!("Configuration is invalid: {e}"),
            },
            Err(e) => println!("Failed to load configuration: {e}"),
        }
    }

    /// Show effective configuration
    fn show_config(&self) -> Result<()> {
        let path = self.get_config_path();
        println!("# Configuration file: {}", path.display());
        println!("{}", self.config.to_toml_string()?);
        Ok(())
    }

    /// Get configuration file path (from args or default)
    fn get_config_path(&self) -> PathBuf {
        self.args
            .config_file
            .clone()
            .unwrap_or_else(Config::default_path)
    }

    /// Print the banner shown before the interactive editor
    pub fn print_banner(&self) {
        if self.args.quiet {
            return;
        }
        println!("multicomplete {}", env!("CARGO_PKG_VERSION"));
        println!(
            "{} candidates, separator '{}'. Tab completes, Ctrl-D exits.",
            self.config.editor.vocabulary.len(),
            self.config.editor.separator
        );
    }
}

/// Read one candidate per line, skipping blank lines
fn read_vocabulary_file(path: &Path) -> Result<Vec<String>> {
    let text = fs::read_to_string(path)?;
    Ok(text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}
