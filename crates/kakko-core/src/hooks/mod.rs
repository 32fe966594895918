//! Lifecycle hook framework.
//!
//! The host tool runs `kakko hook <event>` with a JSON description of the
//! event on stdin. Handlers implement [`HookHandler`] and are registered in a
//! [`HookRegistry`] keyed by the event they care about; the [`runner`] reads
//! the input, dispatches, and reports the outcome on stdout.
//!
//! Every outcome is a success. A hook must never fail the host tool's turn.

pub mod context;
pub mod errors;
pub mod handlers;
pub mod registry;
pub mod runner;
pub mod traits;
pub mod types;

pub use context::HookContext;
pub use errors::HookError;
pub use registry::{HookRegistry, default_registry};
pub use traits::HookHandler;
pub use types::{HookEvent, HookInput, HookOutcome};
