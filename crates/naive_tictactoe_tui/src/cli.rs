//! Command-line interface for the terminal board.

use clap::Parser;
use std::path::PathBuf;

/// Naive tic-tac-toe - play against an opponent that picks open tiles at random
#[derive(Parser, Debug)]
#[command(name = "naive_tictactoe")]
#[command(about = "Tic-tac-toe against a random opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// TOML file with marker_user, marker_computer and restart_delay_ms
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Seed for the opponent's random choices (reproducible games)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Where to write logs (the terminal itself is taken by the board)
    #[arg(long, default_value = "naive_tictactoe.log")]
    pub log_file: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["naive_tictactoe"]);
        assert!(cli.config.is_none());
        assert!(cli.seed.is_none());
        assert_eq!(cli.log_file, PathBuf::from("naive_tictactoe.log"));
    }

    #[test]
    fn test_seed_and_config() {
        let cli = Cli::parse_from(["naive_tictactoe", "--seed", "42", "-c", "game.toml"]);
        assert_eq!(cli.seed, Some(42));
        assert_eq!(cli.config, Some(PathBuf::from("game.toml")));
    }
}
