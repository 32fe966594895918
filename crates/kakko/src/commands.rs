use clap::ArgMatches;
use tracing::{error, warn};

use kakko_core::KakkoError;
use kakko_core::config::KakkoConfig;
use kakko_core::events;

mod completions;
mod fix;
mod hook;
mod init_hooks;

pub fn run_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    events::log_app_startup();

    match matches.subcommand() {
        Some(("hook", sub_matches)) => hook::handle_hook_command(sub_matches),
        Some(("fix", sub_matches)) => fix::handle_fix_command(sub_matches),
        Some(("init-hooks", sub_matches)) => init_hooks::handle_init_hooks_command(sub_matches),
        Some(("completions", sub_matches)) => {
            completions::handle_completions_command(sub_matches)
        }
        _ => {
            error!(event = "cli.command_unknown");
            Err("Unknown command".into())
        }
    }
}

/// Load configuration with warning on errors.
///
/// Falls back to defaults if config loading fails, but notifies the user via:
/// - stderr message for immediate visibility
/// - structured log event `cli.config.load_failed` for debugging
pub(crate) fn load_config_with_warning() -> KakkoConfig {
    match KakkoConfig::load_hierarchy() {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "Warning: Could not load config: {}. Using defaults.\n\
                 Tip: Check ~/.kakko/config.toml and ./.kakko/config.toml for syntax errors.",
                e
            );
            warn!(
                event = "cli.config.load_failed",
                error = %e,
                error_code = e.error_code(),
                "Config load failed, using defaults"
            );
            KakkoConfig::default()
        }
    }
}
