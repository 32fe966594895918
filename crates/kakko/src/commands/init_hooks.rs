use clap::ArgMatches;
use tracing::{error, info, warn};

use kakko_core::KakkoError;
use kakko_core::events;
use kakko_core::integrations::claude::{self, STOP_HOOK_COMMAND, SettingsPatch};

use crate::color;

pub(crate) fn handle_init_hooks_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let user = matches.get_flag("user");

    info!(event = "cli.init_hooks_started", user = user);

    let settings_path = if user {
        claude::user_settings_path()?
    } else {
        claude::project_settings_path(&std::env::current_dir()?)
    };

    match claude::ensure_stop_hook(&settings_path, STOP_HOOK_COMMAND) {
        Ok(SettingsPatch::Added) => {
            println!(
                "  {} Registered {} as a Stop hook in {}",
                color::aurora("✓"),
                color::bold(STOP_HOOK_COMMAND),
                color::muted(&settings_path.display().to_string())
            );
        }
        Ok(SettingsPatch::AlreadyConfigured) => {
            println!(
                "  {} {} is already registered in {}",
                color::aurora("✓"),
                color::bold(STOP_HOOK_COMMAND),
                color::muted(&settings_path.display().to_string())
            );
        }
        Err(e) => {
            eprintln!("{} {}", color::error("Failed to patch settings.json:"), e);
            if e.is_user_error() {
                warn!(event = "cli.init_hooks_failed", error = %e, error_code = e.error_code());
            } else {
                error!(event = "cli.init_hooks_failed", error = %e, error_code = e.error_code());
            }
            events::log_app_error(&e);
            return Err(e.into());
        }
    }

    info!(event = "cli.init_hooks_completed", path = %settings_path.display());

    Ok(())
}
