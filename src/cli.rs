use clap::{Parser, ValueEnum};
use scpbal_janitor::consts::DEFAULT_CONFIG_PATH;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "scpbal-janitor",
    version,
    about = "Rename experiment directories to id_date_extra and move them into the configured home directory"
)]
pub struct Args {
    /// Directories to process
    pub paths: Vec<PathBuf>,

    /// File listing more directories, one per line (`#` comments allowed)
    #[arg(short, long = "file", value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// YAML config providing `home_directory`
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Report what would be moved without touching anything
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Log level (ignored when RUST_LOG is set)
    #[arg(short, long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn as_filter(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}
