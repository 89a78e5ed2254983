//! spritepipe CLI - offline sprite asset preparation
//!
//! This binary prepares static sprite sheets for the game's asset loader:
//! `fetch` imports creature animation sheets from the remote sprite server,
//! `pack` builds a sheet from local frames.

use clap::{Parser, Subcommand};
use std::process::ExitCode;

use spritepipe_cli::commands;

/// spritepipe - sprite sheet preparation for 2D games
#[derive(Parser)]
#[command(name = "spritepipe")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch creature sprite archives and import their animation sheets
    Fetch {
        /// Entity ids to import (space-separated; default list when empty)
        entity_ids: Vec<u32>,

        /// Comma-separated entity ids, overriding the positional ids
        #[arg(long = "ids", value_name = "LIST")]
        ids: Option<String>,

        /// Directory receiving one PNG per entity
        #[arg(long, default_value = "public/assets/sprites")]
        out_dir: String,

        /// Path of the JSON manifest to write
        #[arg(long, default_value = "public/assets/manifest.json")]
        manifest: String,

        /// Directory holding cached sprite archives
        #[arg(long, default_value = ".cache")]
        cache_dir: String,
    },

    /// Pack a sprite sheet from a GIF or a directory of still images
    Pack {
        /// Path to a GIF file or a directory of images
        input: String,

        /// Output path for the packed sheet
        #[arg(short, long, default_value = "output_sprite.png")]
        output: String,

        /// Number of rows (directions)
        #[arg(short, long, default_value_t = 8, value_parser = clap::value_parser!(u32).range(1..))]
        rows: u32,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Fetch {
            entity_ids,
            ids,
            out_dir,
            manifest,
            cache_dir,
        } => commands::fetch::run(&entity_ids, ids.as_deref(), &out_dir, &manifest, &cache_dir),
        Commands::Pack {
            input,
            output,
            rows,
        } => commands::pack::run(&input, &output, rows),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_fetch_with_positional_ids() {
        let cli = Cli::try_parse_from(["spritepipe", "fetch", "1", "4", "7"]).unwrap();
        match cli.command {
            Commands::Fetch {
                entity_ids, ids, ..
            } => {
                assert_eq!(entity_ids, vec![1, 4, 7]);
                assert!(ids.is_none());
            }
            _ => panic!("expected fetch command"),
        }
    }

    #[test]
    fn test_cli_parses_fetch_with_ids_flag() {
        let cli = Cli::try_parse_from(["spritepipe", "fetch", "--ids", "1,4,7"]).unwrap();
        match cli.command {
            Commands::Fetch { entity_ids, ids, .. } => {
                assert!(entity_ids.is_empty());
                assert_eq!(ids.as_deref(), Some("1,4,7"));
            }
            _ => panic!("expected fetch command"),
        }
    }

    #[test]
    fn test_cli_parses_pack_defaults() {
        let cli = Cli::try_parse_from(["spritepipe", "pack", "walk.gif"]).unwrap();
        match cli.command {
            Commands::Pack {
                input,
                output,
                rows,
            } => {
                assert_eq!(input, "walk.gif");
                assert_eq!(output, "output_sprite.png");
                assert_eq!(rows, 8);
            }
            _ => panic!("expected pack command"),
        }
    }

    #[test]
    fn test_cli_parses_pack_short_flags() {
        let cli =
            Cli::try_parse_from(["spritepipe", "pack", "frames/", "-o", "hero.png", "-r", "4"])
                .unwrap();
        match cli.command {
            Commands::Pack {
                input,
                output,
                rows,
            } => {
                assert_eq!(input, "frames/");
                assert_eq!(output, "hero.png");
                assert_eq!(rows, 4);
            }
            _ => panic!("expected pack command"),
        }
    }

    #[test]
    fn test_cli_rejects_zero_rows() {
        assert!(Cli::try_parse_from(["spritepipe", "pack", "x.gif", "-r", "0"]).is_err());
    }
}
