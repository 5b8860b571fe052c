//! Readify CLI
//!
//! Command-line interface for Readify - browse the catalog, get
//! recommendations and track your reading.

use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use readify_core::focus::{Sound, SoundBoard};
use readify_core::{
    Config, FeedbackDraft, Genre, Length, ProgressForm, Recommender, Selection, StorageError, Store,
};

mod commands;
mod output;

use output::{Output, OutputFormat};

#[derive(Parser)]
#[command(name = "readify")]
#[command(about = "Readify - discover books and track your reading")]
#[command(version)]
#[command(propagate_version = true)]
struct Cli {
    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Quiet mode - minimal output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Use this config file instead of the default
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Verbose logging (debug level)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the catalog
    #[command(alias = "ls")]
    Books {
        /// Match against title or author
        #[arg(short = 'Q', long)]
        query: Option<String>,
        /// Genre filter (or "all")
        #[arg(short, long, default_value = "all")]
        genre: Selection<Genre>,
    },
    /// Show book details
    Show {
        /// Book ID
        id: u32,
    },
    /// Get a random recommendation
    Recommend {
        /// Genre filter (or "all")
        #[arg(short, long, default_value = "all")]
        genre: Selection<Genre>,
        /// Length filter: short, medium, long (or "all")
        #[arg(short, long, default_value = "all")]
        length: Selection<Length>,
        /// Save the pick to the reading list
        #[arg(long)]
        save: bool,
    },
    /// Show the reading list
    ReadingList,
    /// Reading progress tracker
    Progress {
        #[command(subcommand)]
        command: ProgressCommands,
    },
    /// Show the daily visit streak
    Streak,
    /// Manage completed books
    Completed {
        #[command(subcommand)]
        command: Option<CompletedCommands>,
    },
    /// Send or review feedback
    Feedback {
        #[command(subcommand)]
        command: FeedbackCommands,
    },
    /// Show or change the theme
    Theme {
        #[command(subcommand)]
        command: Option<ThemeCommands>,
    },
    /// Subscribe to the newsletter
    Subscribe {
        /// Email address
        email: String,
    },
    /// Author of the day and quotes
    Today {
        /// Number of quotes to show
        #[arg(long, default_value_t = 1)]
        quotes: usize,
    },
    /// Focus sounds
    Sounds {
        #[command(subcommand)]
        command: Option<SoundCommands>,
    },
    /// Build the offline asset cache from a site directory
    Cache {
        /// Directory holding the site's pages and assets
        site_dir: PathBuf,
        /// Request these urls after activation (e.g. ./Main.js)
        #[arg(short, long = "request")]
        requests: Vec<String>,
    },
    /// Show or set configuration
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },
    /// Show status (storage location, saved state)
    Status,
}

/// Page counts, taken as raw text like the tracker form
#[derive(clap::Args, Clone)]
struct ProgressArgs {
    /// Total pages
    #[arg(allow_hyphen_values = true)]
    total: String,
    /// Pages read so far
    #[arg(allow_hyphen_values = true)]
    read: String,
    /// Pages read per day
    #[arg(allow_hyphen_values = true)]
    per_day: String,
}

impl ProgressArgs {
    fn form(&self) -> ProgressForm {
        ProgressForm::new(&self.total, &self.read, &self.per_day)
    }
}

#[derive(Subcommand)]
enum ProgressCommands {
    /// Calculate progress without saving
    Calc(ProgressArgs),
    /// Calculate and save progress
    Save(ProgressArgs),
    /// Show saved progress
    Show,
}

#[derive(Subcommand)]
enum CompletedCommands {
    /// Mark a title as completed
    Add {
        /// Book title
        title: String,
    },
    /// List completed titles
    #[command(alias = "ls")]
    List,
    /// Clear the completed list
    Clear,
}

#[derive(Subcommand)]
enum FeedbackCommands {
    /// Submit feedback
    Submit {
        #[arg(short, long)]
        name: String,
        #[arg(short, long)]
        email: String,
        #[arg(short, long)]
        message: String,
    },
    /// List submitted feedback
    #[command(alias = "ls")]
    List,
}

#[derive(Subcommand)]
enum ThemeCommands {
    /// Show the current theme
    Show,
    /// Switch between light and dark
    Toggle,
    /// Use the dark theme
    Dark,
    /// Use the light theme
    Light,
}

#[derive(Subcommand)]
enum SoundCommands {
    /// List sounds
    List,
    /// Play one sound
    Play { sound: Sound },
    /// Stop playback
    Stop,
}

#[derive(Subcommand, Clone)]
enum ConfigCommands {
    /// Show current configuration
    Show,
    /// Set a configuration value
    Set {
        /// Configuration key (data_dir, log_file, log_level)
        key: String,
        /// Configuration value
        value: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let output = Output::new(OutputFormat::from_flags(cli.json, cli.quiet));
    let config_path = cli.config.as_ref();

    // Commands that don't need the store
    match &cli.command {
        Commands::Config { command } => {
            return handle_config_command(command.clone(), config_path, &output);
        }
        Commands::Sounds { command } => return handle_sound_command(command, &output),
        Commands::Cache {
            site_dir,
            requests,
        } => return commands::cache::install(site_dir, requests, &output),
        _ => {}
    }

    let config =
        Config::load_with_cli_override(config_path).context("Failed to load configuration")?;
    init_logging(&config, cli.verbose);

    let mut store = match Store::open(&config) {
        Ok(store) => store,
        Err(e) => {
            if let Some(hint) = e
                .downcast_ref::<StorageError>()
                .and_then(StorageError::recovery_suggestion)
            {
                eprintln!("Hint: {}", hint);
            }
            return Err(e);
        }
    };

    // Every visit counts toward the streak
    if let Err(e) = store.touch_streak() {
        warn!("Could not update streak: {}", e);
    }

    match cli.command {
        Commands::Books { query, genre } => commands::books::list(&store, query, genre, &output),
        Commands::Show { id } => commands::books::show(&store, id, &output),
        Commands::Recommend {
            genre,
            length,
            save,
        } => {
            let mut recommender = Recommender::new(rand::thread_rng());
            commands::recommend::recommend(
                &mut store,
                &mut recommender,
                genre,
                length,
                save,
                &output,
            )
        }
        Commands::ReadingList => commands::lists::reading_list(&store, &output),
        Commands::Progress { command } => handle_progress_command(command, &mut store, &output),
        Commands::Streak => commands::today::streak(&store, &output),
        Commands::Completed { command } => handle_completed_command(command, &mut store, &output),
        Commands::Feedback { command } => handle_feedback_command(command, &mut store, &output),
        Commands::Theme { command } => handle_theme_command(command, &mut store, &output),
        Commands::Subscribe { email } => commands::prefs::subscribe(&mut store, &email, &output),
        Commands::Today { quotes } => commands::today::today(&store, quotes, &output),
        Commands::Status => commands::status::show(&store, &config, &output),
        Commands::Config { .. } | Commands::Sounds { .. } | Commands::Cache { .. } => Ok(()),
    }
}

fn handle_progress_command(
    command: ProgressCommands,
    store: &mut Store,
    output: &Output,
) -> Result<()> {
    match command {
        ProgressCommands::Calc(args) => commands::progress::calc(&args.form(), output),
        ProgressCommands::Save(args) => commands::progress::save(store, &args.form(), output),
        ProgressCommands::Show => commands::progress::show(store, output),
    }
}

fn handle_completed_command(
    command: Option<CompletedCommands>,
    store: &mut Store,
    output: &Output,
) -> Result<()> {
    match command {
        Some(CompletedCommands::Add { title }) => {
            commands::lists::add_completed(store, &title, output)
        }
        Some(CompletedCommands::List) | None => commands::lists::list_completed(store, output),
        Some(CompletedCommands::Clear) => commands::lists::clear_completed(store, output),
    }
}

fn handle_feedback_command(
    command: FeedbackCommands,
    store: &mut Store,
    output: &Output,
) -> Result<()> {
    match command {
        FeedbackCommands::Submit {
            name,
            email,
            message,
        } => commands::feedback::submit(store, FeedbackDraft::new(name, email, message), output),
        FeedbackCommands::List => commands::feedback::list(store, output),
    }
}

fn handle_theme_command(
    command: Option<ThemeCommands>,
    store: &mut Store,
    output: &Output,
) -> Result<()> {
    match command {
        Some(ThemeCommands::Show) | None => commands::prefs::show_theme(store, output),
        Some(ThemeCommands::Toggle) => commands::prefs::toggle_theme(store, output),
        Some(ThemeCommands::Dark) => commands::prefs::set_theme(store, true, output),
        Some(ThemeCommands::Light) => commands::prefs::set_theme(store, false, output),
    }
}

fn handle_sound_command(command: &Option<SoundCommands>, output: &Output) -> Result<()> {
    let mut board = SoundBoard::new();
    match command {
        Some(SoundCommands::List) | None => commands::sounds::list(output),
        Some(SoundCommands::Play { sound }) => commands::sounds::play(&mut board, *sound, output),
        Some(SoundCommands::Stop) => commands::sounds::stop(&mut board, output),
    }
}

fn handle_config_command(
    command: Option<ConfigCommands>,
    config_path: Option<&PathBuf>,
    output: &Output,
) -> Result<()> {
    match command {
        Some(ConfigCommands::Show) | None => commands::config::show(config_path, output),
        Some(ConfigCommands::Set { key, value }) => {
            commands::config::set(key, value, config_path, output)
        }
    }
}

/// Initialize logging
///
/// Logs go to `config.log_file` when set, otherwise to stderr.
/// `--verbose` raises the level to debug.
fn init_logging(config: &Config, verbose: bool) {
    let log_level = if verbose {
        "debug"
    } else {
        config.log_level.as_str()
    };
    let env_filter = EnvFilter::new(format!(
        "readify_core={},readify_cli={}",
        log_level, log_level
    ));

    match &config.log_file {
        Some(log_path) => {
            let log_file = match File::create(log_path) {
                Ok(f) => f,
                Err(e) => {
                    eprintln!("Warning: Could not create log file {:?}: {}", log_path, e);
                    return;
                }
            };

            // Ignore error if already initialized
            let _ = tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_target(false)
                .with_ansi(false)
                .with_writer(log_file)
                .try_init();

            info!("Logging initialized to {:?}", log_path);
        }
        None => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_target(false)
                .with_writer(std::io::stderr)
                .try_init();
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_recommend_filters() {
        let cli = Cli::try_parse_from([
            "readify", "recommend", "--genre", "sci-fi", "--length", "long", "--save",
        ])
        .unwrap();
        match cli.command {
            Commands::Recommend {
                genre,
                length,
                save,
            } => {
                assert_eq!(genre, Selection::Only(Genre::SciFi));
                assert_eq!(length, Selection::Only(Length::Long));
                assert!(save);
            }
            _ => panic!("expected recommend"),
        }
    }

    #[test]
    fn test_parse_defaults_to_all() {
        let cli = Cli::try_parse_from(["readify", "books"]).unwrap();
        match cli.command {
            Commands::Books { query, genre } => {
                assert!(query.is_none());
                assert_eq!(genre, Selection::All);
            }
            _ => panic!("expected books"),
        }
    }

    #[test]
    fn test_parse_rejects_unknown_genre() {
        assert!(Cli::try_parse_from(["readify", "books", "--genre", "poetry"]).is_err());
    }

    #[test]
    fn test_parse_cache_requests() {
        let cli = Cli::try_parse_from([
            "readify", "cache", "site", "-r", "./Main.js", "--request", "./",
        ])
        .unwrap();
        match cli.command {
            Commands::Cache { site_dir, requests } => {
                assert_eq!(site_dir, PathBuf::from("site"));
                assert_eq!(requests, vec!["./Main.js", "./"]);
            }
            _ => panic!("expected cache"),
        }
    }

    #[test]
    fn test_progress_accepts_raw_text() {
        let cli = Cli::try_parse_from(["readify", "progress", "calc", "300", "-5", "x"]).unwrap();
        match cli.command {
            Commands::Progress {
                command: ProgressCommands::Calc(args),
            } => {
                assert_eq!(args.read, "-5");
                assert!(args.form().to_record().is_err());
            }
            _ => panic!("expected progress calc"),
        }
    }
}
