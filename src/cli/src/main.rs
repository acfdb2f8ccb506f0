//! CLI for the repo list updater.
//!
//! Adds a repository entry to a JSON list, or updates the description of
//! the entries that already carry its URL.

use clap::error::ErrorKind;
use clap::Parser;
use repo_list_updater::{report_failure, try_update_entry, UpdaterConfig, DEFAULT_LIST_KEY};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Printed to stdout when the positional arguments are missing.
const USAGE: &str = "Usage: repo-list-updater JSON_FILE REPO_URL DESCRIPTION";

/// Repo List Updater - Add or re-describe a repository in a JSON list.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the JSON file holding the repository list.
    #[arg(value_name = "JSON_FILE", allow_hyphen_values = true)]
    json_file: PathBuf,

    /// Repository URL to add or update.
    #[arg(value_name = "REPO_URL", allow_hyphen_values = true)]
    repo_url: String,

    /// Description to store for the repository.
    #[arg(value_name = "DESCRIPTION", allow_hyphen_values = true)]
    description: String,

    /// Ignored trailing arguments.
    #[arg(hide = true)]
    extra: Vec<String>,

    /// Top-level key of the repository list.
    #[arg(long, default_value = DEFAULT_LIST_KEY)]
    list_key: String,

    /// Print the updated document instead of writing it.
    #[arg(long)]
    dry_run: bool,
}

fn main() -> ExitCode {
    // Initialize tracing
    init_tracing();

    // Parse arguments
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => return ExitCode::from(handle_parse_error(&e)),
    };

    if run(args) {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    }
}

/// Initializes tracing with environment filter support.
///
/// Events go to stderr in compact form so stdout only carries usage text and
/// dry-run output. The level comes from `RUST_LOG` and defaults to "warn",
/// which keeps a successful run silent.
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();
}

/// Prints the output for an argument parsing failure and returns the
/// process exit code.
///
/// Help and version requests print as usual and exit with 0. Anything else,
/// including missing positional arguments, prints the usage line and exits
/// with 1.
fn handle_parse_error(error: &clap::Error) -> u8 {
    match error.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            if let Err(e) = error.print() {
                debug!(error = %e, "Failed to print help");
            }
            0
        }
        _ => {
            debug!(error = %error, "Invalid arguments");
            println!("{USAGE}");
            1
        }
    }
}

/// Main execution logic. Returns whether the update succeeded.
fn run(args: Args) -> bool {
    if !args.extra.is_empty() {
        debug!(extra = ?args.extra, "Ignoring extra arguments");
    }

    let config = UpdaterConfig::new(args.list_key).with_dry_run(args.dry_run);
    match try_update_entry(&args.json_file, &args.repo_url, &args.description, &config) {
        Ok(report) => {
            if !report.written {
                println!("{}", report.rendered);
            }
            true
        }
        Err(e) => {
            report_failure(&e);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn parses_three_positionals() {
        let args = Args::try_parse_from(["repo-list-updater", "repos.json", "https://x/a", "desc"])
            .unwrap();

        assert_eq!(args.json_file, PathBuf::from("repos.json"));
        assert_eq!(args.repo_url, "https://x/a");
        assert_eq!(args.description, "desc");
        assert_eq!(args.list_key, "mcpRepos");
        assert!(!args.dry_run);
    }

    #[test]
    fn missing_positionals_is_an_error() {
        let error = Args::try_parse_from(["repo-list-updater", "repos.json", "https://x/a"])
            .unwrap_err();

        assert_eq!(error.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn missing_positionals_exit_with_usage_and_leave_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("repos.json");
        fs::write(&path, r#"{"mcpRepos": []}"#).unwrap();

        let error =
            Args::try_parse_from(["repo-list-updater", path.to_str().unwrap(), "https://x/a"])
                .unwrap_err();

        assert_eq!(handle_parse_error(&error), 1);
        assert_eq!(fs::read_to_string(&path).unwrap(), r#"{"mcpRepos": []}"#);
    }

    #[test]
    fn help_exits_successfully() {
        let error = Args::try_parse_from(["repo-list-updater", "--help"]).unwrap_err();

        assert_eq!(error.kind(), ErrorKind::DisplayHelp);
        assert_eq!(handle_parse_error(&error), 0);
    }

    #[test]
    fn unknown_option_exits_with_usage() {
        let error = Args::try_parse_from([
            "repo-list-updater",
            "repos.json",
            "https://x/a",
            "desc",
            "--bogus",
        ])
        .unwrap_err();

        assert_eq!(handle_parse_error(&error), 1);
    }

    #[test]
    fn extra_positionals_are_accepted() {
        let args = Args::try_parse_from([
            "repo-list-updater",
            "repos.json",
            "https://x/a",
            "desc",
            "more",
        ])
        .unwrap();

        assert_eq!(args.description, "desc");
        assert_eq!(args.extra, ["more"]);
    }

    #[test]
    fn description_may_start_with_hyphen() {
        let args = Args::try_parse_from(["repo-list-updater", "repos.json", "https://x/a", "-x"])
            .unwrap();

        assert_eq!(args.description, "-x");
    }

    #[test]
    fn json_file_may_start_with_hyphen() {
        let args = Args::try_parse_from(["repo-list-updater", "-repos.json", "https://x/a", "desc"])
            .unwrap();

        assert_eq!(args.json_file, PathBuf::from("-repos.json"));
        assert_eq!(args.repo_url, "https://x/a");
    }

    #[test]
    fn run_updates_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("repos.json");
        fs::write(&path, "{}").unwrap();
        let args = Args::try_parse_from([
            "repo-list-updater",
            path.to_str().unwrap(),
            "https://x/y/z",
            "desc",
        ])
        .unwrap();

        assert!(run(args));
        assert!(fs::read_to_string(&path).unwrap().contains("\"name\": \"z\""));
    }

    #[test]
    fn run_dry_run_does_not_write() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("repos.json");
        fs::write(&path, "{}").unwrap();
        let args = Args::try_parse_from([
            "repo-list-updater",
            "--dry-run",
            path.to_str().unwrap(),
            "https://x/y/z",
            "desc",
        ])
        .unwrap();

        assert!(args.dry_run);
        assert!(run(args));
        assert_eq!(fs::read_to_string(&path).unwrap(), "{}");
    }

    #[test]
    fn run_fails_on_missing_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("missing.json");
        let args = Args::try_parse_from([
            "repo-list-updater",
            path.to_str().unwrap(),
            "https://x/a",
            "desc",
        ])
        .unwrap();

        assert!(!run(args));
    }
}
