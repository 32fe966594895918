use clap::{Arg, ArgAction, Command};

pub fn hook_command() -> Command {
    Command::new("hook")
        .about("Run the handlers registered for a host lifecycle event (reads the event JSON on stdin)")
        .arg(
            Arg::new("event")
                .help("Lifecycle event name (e.g. stop, Stop, subagent-stop)")
                .index(1)
                .default_value("stop"),
        )
}

pub fn fix_command() -> Command {
    Command::new("fix")
        .about("Convert full-width parentheses in the given files, or in the staged files")
        .arg(
            Arg::new("paths")
                .help("Files to convert, relative to the current directory (default: staged files)")
                .index(1)
                .num_args(1..),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Output in JSON format")
                .action(ArgAction::SetTrue),
        )
}
