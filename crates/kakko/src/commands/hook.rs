use std::io::IsTerminal;

use clap::ArgMatches;
use tracing::{error, info, warn};

use kakko_core::KakkoError;
use kakko_core::hooks::{HookContext, HookEvent, HookInput, default_registry, runner};

use super::load_config_with_warning;

/// Entry point the host tool invokes. Never returns an error: a hook that
/// cannot run reports a diagnostic on stderr and exits 0.
pub(crate) fn handle_hook_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let name = matches
        .get_one::<String>("event")
        .map(String::as_str)
        .unwrap_or("stop");

    let event = match name.parse::<HookEvent>() {
        Ok(event) => event,
        Err(e) => {
            warn!(
                event = "cli.hook_unknown_event",
                name = name,
                error = %e,
                error_code = e.error_code()
            );
            eprintln!("kakko: {}", e);
            return Ok(());
        }
    };

    info!(event = "cli.hook_started", hook_event = %event);

    let cwd = match std::env::current_dir() {
        Ok(cwd) => cwd,
        Err(e) => {
            error!(event = "cli.hook_cwd_failed", error = %e);
            eprintln!("kakko: cannot determine the current directory: {}", e);
            return Ok(());
        }
    };

    let config = load_config_with_warning();

    let stdin = std::io::stdin();
    let input = if stdin.is_terminal() {
        HookInput::default()
    } else {
        runner::read_input(stdin.lock())
    };

    let ctx = HookContext::new(input, cwd, config);
    let code = runner::run_hook(default_registry(), event, &ctx, &mut std::io::stdout().lock());

    info!(event = "cli.hook_completed", hook_event = %event, code = code);

    Ok(())
}
