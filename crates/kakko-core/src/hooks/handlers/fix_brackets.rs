//! Stop handler that rewrites full-width parentheses in staged files.
//!
//! Failure handling has two layers. Inside [`crate::fixer`] each file is
//! skipped on its own read or write error. Here, anything that fails the run
//! as a whole (git cannot be spawned) is logged to stderr and turned into a
//! success.

use tracing::{debug, error, info, warn};

use kakko_git::{GitCli, GitError, StagedQuery};

use crate::errors::KakkoError;
use crate::fixer;
use crate::hooks::context::HookContext;
use crate::hooks::errors::HookError;
use crate::hooks::traits::HookHandler;
use crate::hooks::types::{HookEvent, HookOutcome};

/// Where the handler gets its candidate paths from.
pub trait StagedFileSource: Send + Sync {
    fn staged_files(&self, ctx: &HookContext) -> Result<StagedQuery, GitError>;
}

/// Lists the git index of the repository containing the context's cwd,
/// using the configured git program.
pub struct GitIndexSource;

impl StagedFileSource for GitIndexSource {
    fn staged_files(&self, ctx: &HookContext) -> Result<StagedQuery, GitError> {
        GitCli::new(ctx.config().git.program()).staged_files(ctx.cwd())
    }
}

pub struct FixBracketsHook {
    source: Box<dyn StagedFileSource>,
}

impl Default for FixBracketsHook {
    fn default() -> Self {
        Self::with_source(GitIndexSource)
    }
}

impl FixBracketsHook {
    pub fn with_source(source: impl StagedFileSource + 'static) -> Self {
        Self {
            source: Box::new(source),
        }
    }

    fn try_run(&self, ctx: &HookContext) -> Result<HookOutcome, HookError> {
        if !ctx.config().hook.enabled() {
            debug!(event = "core.hook.fix_brackets_skipped", reason = "disabled");
            return Ok(ctx.success());
        }

        let files = match self.source.staged_files(ctx)? {
            StagedQuery::Files(files) => files,
            StagedQuery::Failed { code } => {
                debug!(
                    event = "core.hook.fix_brackets_skipped",
                    reason = "staged listing failed",
                    code = ?code
                );
                return Ok(ctx.success());
            }
        };

        if files.is_empty() {
            return Ok(ctx.success_with_message(ctx.config().hook.no_files_message()));
        }

        let report = fixer::fix_candidates(ctx.cwd(), &files);

        info!(
            event = "core.hook.fix_brackets_completed",
            candidates = report.candidates,
            fixed = report.fixed_count()
        );

        Ok(ctx.success())
    }
}

impl HookHandler for FixBracketsHook {
    fn name(&self) -> &'static str {
        "fix-brackets"
    }

    fn event(&self) -> HookEvent {
        HookEvent::Stop
    }

    fn handle(&self, ctx: &HookContext) -> HookOutcome {
        match self.try_run(ctx) {
            Ok(outcome) => outcome,
            Err(e) => {
                if e.is_user_error() {
                    warn!(
                        event = "core.hook.fix_brackets_failed",
                        error = %e,
                        error_code = e.error_code()
                    );
                } else {
                    error!(
                        event = "core.hook.fix_brackets_failed",
                        error = %e,
                        error_code = e.error_code()
                    );
                }
                eprintln!("kakko: error while converting full-width parentheses: {}", e);
                ctx.success()
            }
        }
    }
}
