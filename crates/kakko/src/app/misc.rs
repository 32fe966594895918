use clap::{Arg, ArgAction, Command};
use clap_complete::Shell;

pub fn completions_command() -> Command {
    Command::new("completions")
        .about("Generate shell completion scripts")
        .arg(
            Arg::new("shell")
                .help("Target shell")
                .required(true)
                .index(1)
                .value_parser(clap::value_parser!(Shell)),
        )
}

pub fn init_hooks_command() -> Command {
    Command::new("init-hooks")
        .about("Register the kakko Stop hook in Claude Code settings")
        .arg(
            Arg::new("user")
                .long("user")
                .help("Patch ~/.claude/settings.json instead of ./.claude/settings.json")
                .action(ArgAction::SetTrue),
        )
}
