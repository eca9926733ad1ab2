//! Folio - single-page developer portfolio for the terminal
//!
//! Navigation bar plus one section at a time (home, about, projects, contact),
//! rendered with ratatui.

mod clipboard;
mod config;
mod core;
mod data;
mod frontend;
mod theme;
mod view;

use anyhow::{Context, Result};
use clap::{Parser as ClapParser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(ClapParser)]
#[command(name = "folio")]
#[command(about = "Developer portfolio in the terminal", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Custom data directory (default: ~/.folio)
    /// Can also be set via FOLIO_DIR environment variable
    #[arg(long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Theme preset, overrides ui.theme from the config
    #[arg(short, long)]
    theme: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the composed view tree as JSON instead of starting the UI
    Render {
        /// Section identifier; unknown identifiers render no body
        #[arg(value_name = "SECTION")]
        section: Option<String>,

        /// Viewport scroll offset (rows) to report before composing
        #[arg(long, default_value_t = 0)]
        scroll: u32,
    },
    /// Validate a configuration file
    CheckConfig {
        /// Config file to validate (default: the data directory's config.toml)
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,
    },
}

fn init_logging() -> Result<()> {
    // TUI apps can't log to stdout, so we write to a file in the data directory
    let dir = config::Config::base_dir()?;
    std::fs::create_dir_all(&dir)
        .context(format!("Failed to create data directory {:?}", dir))?;
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join("folio.log"))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Mutex::new(log_file))
        .with_ansi(false) // No color codes in log file
        .init();
    Ok(())
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Set custom data directory before anything resolves it
    if let Some(data_dir) = &cli.data_dir {
        std::env::set_var("FOLIO_DIR", data_dir);
    }

    // Initialize logging (use RUST_LOG env var to control level, e.g. RUST_LOG=debug)
    init_logging()?;
    if let Ok(dir) = std::env::var("FOLIO_DIR") {
        tracing::info!("Using data directory: {}", dir);
    }

    // Handle subcommands
    if let Some(command) = cli.command {
        match command {
            Commands::Render { section, scroll } => {
                let config = load_config(cli.config.as_deref())?;
                return print_tree(&config.ui, section.as_deref(), scroll);
            }
            Commands::CheckConfig { file } => {
                let ok = check_config(file.as_deref().or(cli.config.as_deref()))?;
                if !ok {
                    std::process::exit(1);
                }
                return Ok(());
            }
        }
    }

    let mut config = load_config(cli.config.as_deref())?;
    if let Some(theme) = cli.theme {
        config.ui.theme = theme;
    }
    sanitize(&mut config.ui);

    run_tui(&config.ui)
}

fn load_config(path: Option<&Path>) -> Result<config::Config> {
    match path {
        Some(path) => config::Config::load_from_path(path),
        None => config::Config::load(),
    }
}

/// Log validation issues and replace invalid values with defaults
fn sanitize(ui: &mut config::UiConfig) {
    use config::validator::{auto_fix_ui_config, validate_ui_config};

    let result = validate_ui_config(ui);
    for warning in result.warnings() {
        tracing::warn!("{}", warning.message());
    }
    if result.has_errors() {
        for error in result.errors() {
            tracing::warn!("Invalid config, using default: {}", error.message());
        }
        let fixed = auto_fix_ui_config(ui, &result.issues);
        tracing::info!("Reset {} config value(s) to defaults", fixed);
    }
}

/// Compose once, headless, and print the tree
fn print_tree(ui: &config::UiConfig, section: Option<&str>, scroll: u32) -> Result<()> {
    let signal = core::scroll::ScrollSignal::new();
    let mut app = core::AppCore::new(ui, &signal);
    if let Some(section) = section {
        app.set_active_section(section);
    }
    signal.emit(scroll * core::scroll::ROW_HEIGHT);

    let json = serde_json::to_string_pretty(&app.compose())?;
    println!("{}", json);
    Ok(())
}

/// Print a validation report; false if the config has errors
fn check_config(path: Option<&Path>) -> Result<bool> {
    use config::validator::validate_ui_config;

    let config = match path {
        Some(path) => {
            println!("Validating config file: {:?}", path);
            config::Config::load_from_path(path)
        }
        None => {
            let path = config::Config::config_path()?;
            println!("Validating config file: {:?}", path);
            config::Config::load()
        }
    };

    let config = match config {
        Ok(config) => config,
        Err(e) => {
            eprintln!("✗ Failed to load config: {:#}", e);
            return Ok(false);
        }
    };
    println!("✓ Config loaded successfully");

    let result = validate_ui_config(&config.ui);
    for error in result.errors() {
        eprintln!("✗ Error: {}", error.message());
    }
    for warning in result.warnings() {
        println!("⚠ Warning: {}", warning.message());
    }

    if result.issues.is_empty() {
        println!("✓ Config is valid with no issues");
    } else {
        if result.has_errors() {
            eprintln!("\n✗ Found {} error(s)", result.errors().len());
        }
        if result.has_warnings() {
            println!("⚠ Found {} warning(s)", result.warnings().len());
        }
    }

    Ok(result.is_valid())
}

/// Run TUI frontend
fn run_tui(ui: &config::UiConfig) -> Result<()> {
    use frontend::TuiFrontend;

    let theme = theme::AppTheme::from_name(&ui.theme).unwrap_or_default();
    tracing::info!("Starting TUI with theme '{}'", theme.name);

    let mut frontend = TuiFrontend::new(ui, theme)?;
    let result = core::start(&mut frontend, ui);
    if let Err(e) = &result {
        tracing::error!("TUI exited with error: {:#}", e);
    }
    result
}
