use clap::{Arg, ArgAction, Command};

pub fn root_command() -> Command {
    Command::new("kakko")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert full-width parentheses （） to half-width () in staged files")
        .long_about("kakko runs as a coding-assistant Stop hook. When the assistant finishes a turn, every file staged in git has its full-width parentheses （ and ） rewritten to ( and ). The hook always reports success so it never blocks the assistant.")
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("no-color")
                .long("no-color")
                .help("Disable colored output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand_required(true)
        .arg_required_else_help(true)
}
