use std::path::{Path, PathBuf};

use clap::ArgMatches;
use tracing::{error, info, warn};

use kakko_core::KakkoError;
use kakko_core::config::KakkoConfig;
use kakko_core::events;
use kakko_core::fixer::{self, FixReport};
use kakko_git::{GitCli, GitError, StagedQuery};

use super::load_config_with_warning;
use crate::color;

/// Staged candidates for `kakko fix` without arguments, with the directory
/// they are relative to.
///
/// git reports staged names relative to the working tree root, so they are
/// resolved there rather than against the cwd. Unlike the hook, an
/// interactive run reports a failed git call as an error.
fn staged_candidates(
    cwd: &Path,
    config: &KakkoConfig,
) -> Result<(PathBuf, Vec<String>), GitError> {
    let root = kakko_git::repo_workdir(cwd)?;

    match GitCli::new(config.git.program()).staged_files(&root)? {
        StagedQuery::Files(files) => Ok((root, files)),
        StagedQuery::Failed { code } => Err(GitError::ListingFailed {
            program: config.git.program().to_string(),
            code,
        }),
    }
}

fn print_report(report: &FixReport) {
    for path in &report.fixed {
        println!(
            "  {} {}",
            color::aurora("✓"),
            color::muted(&path.display().to_string())
        );
    }

    println!(
        "{} of {} file(s) converted",
        color::bold(&report.fixed_count().to_string()),
        report.candidates
    );

    if report.missing > 0 {
        println!(
            "  {} {} file(s) no longer exist and were skipped",
            color::copper("⚠"),
            report.missing
        );
    }
    if report.failed > 0 {
        println!(
            "  {} {} file(s) could not be read or written as UTF-8 text",
            color::copper("⚠"),
            report.failed
        );
    }
}

pub(crate) fn handle_fix_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let json_output = matches.get_flag("json");
    let config = load_config_with_warning();
    let cwd = std::env::current_dir()?;

    let explicit: Option<Vec<String>> = matches
        .get_many::<String>("paths")
        .map(|paths| paths.cloned().collect());

    info!(
        event = "cli.fix_started",
        explicit = explicit.is_some(),
        json = json_output
    );

    let (root, candidates) = match explicit {
        Some(paths) => (cwd, paths),
        None => match staged_candidates(&cwd, &config) {
            Ok(staged) => staged,
            Err(e) => {
                eprintln!("{} {}", color::error("Could not list staged files:"), e);
                if e.is_user_error() {
                    warn!(event = "cli.fix_failed", error = %e, error_code = e.error_code());
                } else {
                    error!(event = "cli.fix_failed", error = %e, error_code = e.error_code());
                }
                events::log_app_error(&e);
                return Err(e.into());
            }
        },
    };

    let report = fixer::fix_candidates(&root, &candidates);

    if json_output {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if candidates.is_empty() {
        println!("{}", config.hook.no_files_message());
    } else {
        print_report(&report);
    }

    info!(
        event = "cli.fix_completed",
        root = %root.display(),
        candidates = report.candidates,
        fixed = report.fixed_count()
    );

    Ok(())
}
