mod global;
mod hook;
mod misc;


use clap::Command;

pub fn build_cli() -> Command {
    global::root_command()
        .subcommand(hook::hook_command())
        .subcommand(hook::fix_command())
        .subcommand(misc::init_hooks_command())
        .subcommand(misc::completions_command())
}
