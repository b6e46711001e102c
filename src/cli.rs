use clap::{ArgAction, Parser};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "fitcalc",
    about = "Compute distance, mean speed and calories for raw workout packages"
)]
pub struct Cli {
    /// JSON file with an array of `{"code": "RUN", "data": [15000, 1, 75]}` packages.
    ///
    /// Default: the built-in sample packages.
    #[arg(long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Stop at the first package with an unknown code or bad fields instead of skipping it.
    #[arg(long)]
    pub strict: bool,

    /// Print one JSON object per workout instead of the text summary.
    #[arg(long)]
    pub json: bool,

    /// Increase log verbosity (-v, -vv). Defaults to INFO.
    #[arg(short = 'v', long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Decrease log verbosity (-q, -qq). Defaults to INFO.
    #[arg(short = 'q', long, action = ArgAction::Count, global = true)]
    pub quiet: u8,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults_to_samples_and_skip() {
        let cli = Cli::parse_from(["fitcalc"]);
        assert!(cli.input.is_none());
        assert!(!cli.strict);
        assert!(!cli.json);
    }

    #[test]
    fn parses_flags() {
        let cli = Cli::parse_from(["fitcalc", "--input", "p.json", "--strict", "--json", "-vv"]);
        assert_eq!(cli.input, Some(PathBuf::from("p.json")));
        assert!(cli.strict);
        assert!(cli.json);
        assert_eq!(cli.verbose, 2);
    }
}
