// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use log::{info, Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use note_english::app_config::{Config, LogLevel, ProviderKind};
use note_english::{server, NoteService};

/// CLI Wrapper for ProviderKind to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliProvider {
    Gemini,
    Ollama,
}

impl From<CliProvider> for ProviderKind {
    fn from(cli_provider: CliProvider) -> Self {
        match cli_provider {
            CliProvider::Gemini => ProviderKind::Gemini,
            CliProvider::Ollama => ProviderKind::Ollama,
        }
    }
}

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => LogLevel::Error,
            CliLogLevel::Warn => LogLevel::Warn,
            CliLogLevel::Info => LogLevel::Info,
            CliLogLevel::Debug => LogLevel::Debug,
            CliLogLevel::Trace => LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API (default command)
    Serve,

    /// Generate shell completions for note-english
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// NoteEnglish - sentence translation and vocabulary notes
#[derive(Parser, Debug)]
#[command(name = "note-english")]
#[command(version = "0.1.0")]
#[command(about = "Sentence translation and vocabulary API for English learners")]
#[command(long_about = "NoteEnglish splits text into sentences, translates them with an LLM and
serves cached dictionary details for the extracted vocabulary.

EXAMPLES:
    note-english                                # Serve using conf.json (or defaults)
    note-english --port 9000                    # Serve on another port
    note-english --provider ollama -m llama3    # Use a local Ollama model
    note-english --write-config                 # Write the effective config and exit
    note-english completions bash > ne.bash     # Generate bash completions

ENVIRONMENT:
    GEMINI_API_KEY, GEMINI_MODEL, FRONTEND_ORIGIN, LLM_PROVIDER, LLM_ENDPOINT
    override the matching config values.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json", env = "NOTE_ENGLISH_CONFIG")]
    config_path: PathBuf,

    /// Bind address
    #[arg(long, env = "NOTE_ENGLISH_HOST")]
    host: Option<String>,

    /// Bind port
    #[arg(short, long, env = "NOTE_ENGLISH_PORT")]
    port: Option<u16>,

    /// LLM provider to use
    #[arg(long, value_enum)]
    provider: Option<CliProvider>,

    /// Model name to use
    #[arg(short, long)]
    model: Option<String>,

    /// Set logging level
    #[arg(short, long, value_enum, env = "NOTE_ENGLISH_LOG_LEVEL")]
    log_level: Option<CliLogLevel>,

    /// Write the effective configuration to the config path and exit
    #[arg(long)]
    write_config: bool,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color code for log level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "1;31",
            Level::Warn => "1;33",
            Level::Info => "1;32",
            Level::Debug => "1;36",
            Level::Trace => "1;35",
        }
    }

    // @returns: Emoji for log level
    fn get_emoji_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "❌ ",
            Level::Warn => "🚧 ",
            Level::Info => " ",
            Level::Debug => "🔍 ",
            Level::Trace => "📋 ",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S%.3f");
            let level = record.level();

            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "\x1B[{}m{} {} {}\x1B[0m",
                Self::color_for_level(level),
                now,
                Self::get_emoji_for_level(level),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // The max level is narrowed once the config is known
    CustomLogger::init(LevelFilter::Trace)?;
    log::set_max_level(LevelFilter::Info);

    let cli = CommandLineOptions::parse();

    match &cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(*shell, &mut cmd, "note-english", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Serve) | None => run_server(cli).await,
    }
}

/// Config file, then environment, then command line
fn load_config(options: &CommandLineOptions) -> Result<Config> {
    let mut config = Config::load(&options.config_path)?;
    config.apply_env().context("Invalid environment override")?;

    if let Some(host) = &options.host {
        config.server.host = host.clone();
    }
    if let Some(port) = options.port {
        config.server.port = port;
    }
    if let Some(provider) = &options.provider {
        config.provider.switch_to(provider.clone().into());
    }
    if let Some(model) = &options.model {
        config.provider.model = model.clone();
    }
    if let Some(log_level) = &options.log_level {
        config.log_level = log_level.clone().into();
    }

    Ok(config)
}

async fn run_server(options: CommandLineOptions) -> Result<()> {
    let config = load_config(&options)?;
    log::set_max_level(config.log_level.to_level_filter());

    if options.write_config {
        config.save(&options.config_path)?;
        info!("Wrote configuration to {}", options.config_path.display());
        return Ok(());
    }

    config.validate().context("Configuration validation failed")?;

    let service = Arc::new(NoteService::from_config(&config)?);
    let app = server::router(service, &config.server.frontend_origin)?;

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("NoteEnglish API listening on http://{}{}", addr, server::API_PREFIX);
    info!("Allowing CORS requests from {}", config.server.frontend_origin);

    server::serve(listener, app).await
}
