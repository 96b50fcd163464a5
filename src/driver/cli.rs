//! CLI Argument Parsing
//!
//! CLIの引数解析

use clap::Parser;

/// コミット履歴をタイムトラッカーへ送信するCLI
#[derive(Parser, Debug, Clone)]
#[command(name = "tracksync")]
#[command(
    about = "Push git commit history to a time tracker as daily time entries",
    long_about = None
)]
pub struct Args {
    /// Dry run mode - don't actually submit
    #[arg(long)]
    pub dry_run: bool,

    /// Start of the date range (overrides START_DATE)
    #[arg(long)]
    pub since: Option<String>,

    /// End of the date range (overrides END_DATE)
    #[arg(long)]
    pub until: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_defaults() {
        let args = Args::parse_from(["tracksync"]);
        assert!(!args.dry_run);
        assert!(args.since.is_none());
        assert!(args.until.is_none());
    }

    #[test]
    fn test_args_dry_run() {
        let args = Args::parse_from(["tracksync", "--dry-run"]);
        assert!(args.dry_run);
    }

    #[test]
    fn test_args_date_window() {
        let args = Args::parse_from(["tracksync", "--since", "2024-05-01", "--until", "2024-05-31"]);
        assert_eq!(args.since.as_deref(), Some("2024-05-01"));
        assert_eq!(args.until.as_deref(), Some("2024-05-31"));
    }

    #[test]
    fn test_args_combined() {
        let args = Args::parse_from(["tracksync", "--dry-run", "--since", "2024-05-01"]);
        assert!(args.dry_run);
        assert_eq!(args.since.as_deref(), Some("2024-05-01"));
        assert!(args.until.is_none());
    }
}
