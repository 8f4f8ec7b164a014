//! mdforge command line
//!
//! `serve` (the default) runs the HTTP API; `generate` runs one README
//! generation from a JSON request file.

mod generate;

pub use generate::{GenerateArgs, run_generate};

use clap::{Parser, Subcommand};

/// mdforge - Markdown documents with AI-assisted README generation
#[derive(Parser, Debug)]
#[command(
    name = "mdforge",
    version,
    about = "Markdown document service with AI-assisted README generation"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the HTTP API server (default)
    Serve,

    /// Generate one README from a request file
    #[command(visible_alias = "gen")]
    Generate(GenerateArgs),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_serve_is_default() {
        let cli = Cli::parse_from(["mdforge"]);
        assert!(cli.command.is_none());

        let cli = Cli::parse_from(["mdforge", "serve"]);
        assert!(matches!(cli.command, Some(Commands::Serve)));
    }

    #[test]
    fn test_generate_args() {
        let cli = Cli::parse_from(["mdforge", "generate", "--input", "req.json", "-o", "README.md"]);
        match cli.command {
            Some(Commands::Generate(args)) => {
                assert_eq!(args.input, PathBuf::from("req.json"));
                assert_eq!(args.output, Some(PathBuf::from("README.md")));
            }
            other => panic!("Expected generate, got {:?}", other),
        }
    }
}
