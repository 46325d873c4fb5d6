//! CLI argument definitions using clap.

use clap::Parser;
use std::path::PathBuf;

use requeue::{DEFAULT_RESET_TO, DEFAULT_ROOT};

/// Requeue: put posted items in a posting queue back to ready
#[derive(Parser, Debug)]
#[command(name = "requeue")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Directory holding the queue files
    #[arg(long, value_name = "DIR", default_value = DEFAULT_ROOT)]
    pub root: PathBuf,

    /// Status written in place of "posted"
    #[arg(long, value_name = "VALUE", default_value = DEFAULT_RESET_TO)]
    pub reset_to: String,

    /// Report what would change without writing any file
    #[arg(long)]
    pub dry_run: bool,

    /// Also reset Markdown posts whose front matter says "status: posted"
    #[arg(long)]
    pub frontmatter: bool,

    /// Print the run report as JSON
    #[arg(long)]
    pub json: bool,

    /// Increase log verbosity on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments_uses_defaults() {
        let cli = Cli::try_parse_from(["requeue"]).unwrap();
        assert_eq!(cli.root, PathBuf::from("posts"));
        assert_eq!(cli.reset_to, "ready");
        assert!(!cli.dry_run);
        assert!(!cli.frontmatter);
        assert!(!cli.json);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_flags() {
        let cli = Cli::try_parse_from([
            "requeue",
            "--root",
            "queue",
            "--reset-to",
            "pending",
            "--dry-run",
            "--frontmatter",
            "-vv",
        ])
        .unwrap();

        assert_eq!(cli.root, PathBuf::from("queue"));
        assert_eq!(cli.reset_to, "pending");
        assert!(cli.dry_run);
        assert!(cli.frontmatter);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_positional_arguments_rejected() {
        assert!(Cli::try_parse_from(["requeue", "posts"]).is_err());
    }
}
