use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::{debug, info};

use maintainers_rs::{
    config::DEFAULT_FILE_NAME, most_specific, NoMatchError, ResolvedOwnership, Resolver,
};

mod logging;

/// Apply a MAINTAINERS file to find who is responsible for a path.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// The MAINTAINERS file.
    #[arg(
        short = 'f',
        long = "file",
        visible_alias = "filename",
        default_value = DEFAULT_FILE_NAME
    )]
    maintainers_file: PathBuf,

    /// The path to get information on.
    #[arg(long)]
    path: String,

    /// List every matching pattern instead of the resolved area.
    #[arg(long)]
    all_matches: bool,

    /// Output format for the resolved area.
    #[arg(long, value_enum, default_value_t = Format::Yaml)]
    format: Format,

    /// Log debug output to stderr.
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Yaml,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose)
        .map_err(|err| anyhow::anyhow!("failed to initialise logging: {err}"))?;
    debug!(?cli, "parsed arguments");

    let map = maintainers_rs::from_path(&cli.maintainers_file).with_context(|| {
        format!(
            "failed to load MAINTAINERS file {}",
            cli.maintainers_file.display()
        )
    })?;
    info!(
        areas = map.len(),
        patterns = map.pattern_count(),
        "loaded {}",
        cli.maintainers_file.display()
    );
    debug!(?map, "loaded areas");

    let resolver = Resolver::new(&map);
    let matches = resolver.matching_entries(&cli.path);
    debug!(path = %cli.path, ?matches, "matching patterns");

    let winner = most_specific(matches.iter().copied())
        .ok_or_else(|| NoMatchError::new(&cli.path))?;

    if cli.all_matches {
        for &entry in &matches {
            let marker = if std::ptr::eq(entry, winner) { "*" } else { " " };
            println!("{} {:<40}  {}", marker, entry.pattern, entry.key);
        }
        return Ok(());
    }

    let resolved = resolver.ownership(winner, &cli.path);
    print!("{}", render(&resolved, cli.format)?);
    Ok(())
}

fn render(resolved: &ResolvedOwnership, format: Format) -> Result<String> {
    Ok(match format {
        Format::Yaml => serde_yaml::to_string(resolved)?,
        Format::Json => {
            let mut json = serde_json::to_string_pretty(resolved)?;
            json.push('\n');
            json
        }
    })
}
