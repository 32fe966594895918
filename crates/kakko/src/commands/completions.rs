use clap::ArgMatches;
use clap_complete::{Shell, generate};
use tracing::info;

use crate::app;

pub(crate) fn handle_completions_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let shell = *matches
        .get_one::<Shell>("shell")
        .ok_or("Shell argument is required")?;

    info!(event = "cli.completions_started", shell = %shell);

    let mut cmd = app::build_cli();
    generate(shell, &mut cmd, "kakko", &mut std::io::stdout());

    info!(event = "cli.completions_completed", shell = %shell);

    Ok(())
}
