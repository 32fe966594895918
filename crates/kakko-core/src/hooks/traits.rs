//! Trait definition for hook handlers.

use super::context::HookContext;
use super::types::{HookEvent, HookOutcome};

/// A routine the host tool runs at one lifecycle event.
///
/// `handle` has no error channel: a handler absorbs its own failures and
/// still returns a success outcome.
pub trait HookHandler: Send + Sync {
    /// Stable identifier used in logs (e.g. "fix-brackets").
    fn name(&self) -> &'static str;

    /// The event this handler is registered under.
    fn event(&self) -> HookEvent;

    fn handle(&self, ctx: &HookContext) -> HookOutcome;
}
