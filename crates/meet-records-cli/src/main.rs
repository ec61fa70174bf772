mod cli;
mod commands;
mod config;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Command};
use config::CliConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(format!("meet_records={level}").parse()?),
        )
        .init();

    let config = resolve_config(&cli)?;

    match cli.command {
        Command::Recompute { output } => commands::recompute::run(&config, output.as_deref()),
        Command::Html { output } => commands::html::run(&config, output.as_deref()),
        Command::Import { file } => commands::import::run(&config, &file),
        Command::Attempt {
            entry,
            lift,
            attempt,
        } => commands::attempt::run(&config, entry, lift, usize::from(attempt)),
        Command::Example { output } => commands::example::run(&config, output.as_deref()),
        Command::List => commands::list::run(&config),
    }
}

/// Config file settings, overridden by any flags given.
fn resolve_config(cli: &Cli) -> Result<CliConfig> {
    let mut builder = CliConfig::discover(cli.config.as_deref())?.into_builder();
    if let Some(language) = cli.language {
        builder = builder.language(language);
    }
    if let Some(meet) = &cli.meet {
        builder = builder.meet(meet);
    }
    if let Some(records) = &cli.records {
        builder = builder.records(records);
    }
    if let Some(output_dir) = &cli.output_dir {
        builder = builder.output_dir(output_dir);
    }
    Ok(builder.build())
}
