mod cli;

use clap::Parser;
use cli::Args;
use eyre::Result;
use scpbal_janitor::{Config, Relocator, process_all, read_path_list};
use std::io::IsTerminal;

fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Args::parse();

    let env_filter = if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::EnvFilter::from_default_env()
    } else {
        tracing_subscriber::EnvFilter::new(args.log_level.as_filter())
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .init();

    // Config problems are fatal and must surface before any directory is touched.
    let config = Config::load(&args.config)?;

    let mut paths = args.paths;
    for list in &args.files {
        paths.extend(read_path_list(list)?);
    }

    if paths.is_empty() {
        tracing::warn!("no directories given; nothing to do");
        return Ok(());
    }

    let relocator = Relocator::from_config(&config, args.dry_run);
    if relocator.is_dry_run() {
        tracing::info!("dry run: no directories will be moved");
    }

    let summary = process_all(&relocator, &paths);
    tracing::info!(
        home = %relocator.destination_root().display(),
        "finished: {summary}"
    );

    Ok(())
}
