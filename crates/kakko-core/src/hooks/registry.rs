//! Hook registry for looking up handlers by event.

use std::collections::HashMap;
use std::sync::LazyLock;

use tracing::{debug, info};

use super::context::HookContext;
use super::handlers::FixBracketsHook;
use super::traits::HookHandler;
use super::types::{HookEvent, HookOutcome};

/// Global registry with the built-in handlers.
static REGISTRY: LazyLock<HookRegistry> = LazyLock::new(HookRegistry::with_defaults);

/// The registry used by `kakko hook`.
pub fn default_registry() -> &'static HookRegistry {
    &REGISTRY
}

/// Handlers grouped by the event they run on.
#[derive(Default)]
pub struct HookRegistry {
    handlers: HashMap<HookEvent, Vec<Box<dyn HookHandler>>>,
}

impl HookRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every built-in handler.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(FixBracketsHook::default()));
        registry
    }

    /// Add a handler under its own [`HookHandler::event`].
    ///
    /// Handlers for the same event run in registration order.
    pub fn register(&mut self, handler: Box<dyn HookHandler>) {
        self.handlers
            .entry(handler.event())
            .or_default()
            .push(handler);
    }

    /// Names of the handlers registered for `event`, in run order.
    pub fn handler_names(&self, event: HookEvent) -> Vec<&'static str> {
        self.handlers
            .get(&event)
            .map(|handlers| handlers.iter().map(|h| h.name()).collect())
            .unwrap_or_default()
    }

    /// Run every handler registered for `event`.
    ///
    /// Messages from all handlers are joined with newlines. An event with no
    /// handlers yields a plain success.
    pub fn dispatch(&self, event: HookEvent, ctx: &HookContext) -> HookOutcome {
        let Some(handlers) = self.handlers.get(&event) else {
            debug!(
                event = "core.hook.dispatch_skipped",
                hook_event = %event,
                reason = "no handlers registered"
            );
            return HookOutcome::success();
        };

        info!(
            event = "core.hook.dispatch_started",
            hook_event = %event,
            handlers = ?self.handler_names(event)
        );

        let messages: Vec<String> = handlers
            .iter()
            .filter_map(|handler| {
                let outcome = handler.handle(ctx);
                debug!(
                    event = "core.hook.handler_completed",
                    hook_event = %event,
                    handler = handler.name()
                );
                outcome.message_for_user().map(str::to_string)
            })
            .collect();

        info!(event = "core.hook.dispatch_completed", hook_event = %event);

        if messages.is_empty() {
            HookOutcome::success()
        } else {
            HookOutcome::success_with_message(messages.join("\n"))
        }
    }
}
