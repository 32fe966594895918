//! stdin/stdout plumbing between the host tool and the registry.
//!
//! The host writes one JSON object to stdin and reads stdout for a message to
//! show the user. Unreadable input does not stop the hook: it runs with an
//! empty [`HookInput`].

use std::io::{Read, Write};

use tracing::{debug, info, warn};

use crate::errors::KakkoError;

use super::context::HookContext;
use super::errors::HookError;
use super::registry::HookRegistry;
use super::types::{HookEvent, HookInput, HookOutcome};

/// Parse the host's JSON payload. Empty or whitespace-only input is an empty payload.
pub fn parse_input(mut reader: impl Read) -> Result<HookInput, HookError> {
    let mut raw = String::new();
    reader
        .read_to_string(&mut raw)
        .map_err(|e| HookError::InputParse {
            message: e.to_string(),
        })?;

    if raw.trim().is_empty() {
        return Ok(HookInput::default());
    }

    serde_json::from_str(&raw).map_err(|e| HookError::InputParse {
        message: e.to_string(),
    })
}

/// Like [`parse_input`], but falls back to an empty payload on any error.
pub fn read_input(reader: impl Read) -> HookInput {
    match parse_input(reader) {
        Ok(input) => input,
        Err(e) => {
            warn!(
                event = "core.hook.input_parse_failed",
                error = %e,
                error_code = e.error_code()
            );
            HookInput::default()
        }
    }
}

/// Write the user-facing message, if any, as one line.
pub fn write_outcome(outcome: &HookOutcome, writer: &mut impl Write) -> std::io::Result<()> {
    if let Some(message) = outcome.message_for_user() {
        writeln!(writer, "{}", message)?;
        writer.flush()?;
    }
    Ok(())
}

/// Dispatch `event` and report the outcome on `stdout`.
///
/// Always returns exit code 0; a failure to write the message is logged and
/// otherwise ignored.
pub fn run_hook(
    registry: &HookRegistry,
    event: HookEvent,
    ctx: &HookContext,
    stdout: &mut impl Write,
) -> i32 {
    if let Some(name) = ctx.input().hook_event_name.as_deref()
        && name.parse::<HookEvent>().ok() != Some(event)
    {
        debug!(
            event = "core.hook.event_name_mismatch",
            requested = %event,
            reported = name
        );
    }

    info!(
        event = "core.hook.run_started",
        hook_event = %event,
        cwd = %ctx.cwd().display(),
        session_id = ctx.input().session_id.as_deref().unwrap_or_default()
    );

    let outcome = registry.dispatch(event, ctx);

    if let Err(e) = write_outcome(&outcome, stdout) {
        warn!(event = "core.hook.output_write_failed", error = %e);
    }

    info!(event = "core.hook.run_completed", hook_event = %event);

    0
}
