//! `geoviz` command line tool.
//!
//! ```shell
//! geoviz map --place africa --tiles "Stamen Toner" -o africa.html
//! geoviz incidents --variant circles-with-popups --limit 100 -o san_francisco.html
//! geoviz inspect --rows 5
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;

use commands::{IncidentsArgs, InspectArgs, MapArgs};

/// Interactive map documents from the command line
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write a map with the given view and tile style
    Map(MapArgs),
    /// Load an incident dataset and write it as a map overlay
    Incidents(IncidentsArgs),
    /// Print the shape and the first rows of a dataset
    Inspect(InspectArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    match cli.command {
        Command::Map(args) => args.execute(),
        Command::Incidents(args) => args.execute().await,
        Command::Inspect(args) => args.execute().await,
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_map_command() {
        let cli = Cli::try_parse_from([
            "geoviz",
            "map",
            "--center",
            "-33.87,151.21",
            "--zoom",
            "10",
            "--tiles",
            "stamen terrain",
            "-o",
            "sydney.html",
        ])
        .expect("valid arguments");

        assert_matches!(cli.command, Command::Map(args) if args.view.zoom == Some(10));
    }

    #[test]
    fn place_conflicts_with_center() {
        let result = Cli::try_parse_from([
            "geoviz", "map", "--place", "africa", "--center", "1,2", "-o", "out.html",
        ]);
        assert!(result.is_err());
    }
}
