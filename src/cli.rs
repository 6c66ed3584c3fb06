use clap::{value_parser, Arg, ArgAction, Command};

pub const SHELLS: [&str; 5] = ["bash", "zsh", "fish", "powershell", "elvish"];

/// Build the command-line interface
pub fn build_cli() -> Command {
    Command::new("blinky")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Live terminal dashboard for Blinky agents and collectors")
        .after_help(
            "Examples:\n  \
             blinky                      Monitor the local agent\n  \
             blinky 10.0.0.5             Monitor a remote agent\n  \
             blinky 10.0.0.5 --all       Show every detail\n  \
             blinky monitor.lan -c       Monitor all hosts of a collector\n  \
             blinky --agent --brief      Ignore a saved --collector or --all\n  \
             blinky -i 10 --save         Refresh every 10 seconds and remember it",
        )
        .arg(
            Arg::new("host")
                .value_name("HOST")
                .help("Host, host:port or URL of the agent or collector (default: localhost)"),
        )
        .arg(
            Arg::new("interval")
                .short('i')
                .long("interval")
                .value_name("SECS")
                .help("Refresh interval in seconds (default: 5)")
                .value_parser(value_parser!(u64).range(1..)),
        )
        .arg(
            Arg::new("all")
                .short('a')
                .long("all")
                .help("Show all details (every disk, interface, container and service)")
                .overrides_with("brief")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("brief")
                .long("brief")
                .help("Show the capped summary, even when --all was saved")
                .overrides_with("all")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("collector")
                .short('c')
                .long("collector")
                .help("Query a collector (port 8081) instead of an agent (port 9092)")
                .overrides_with("agent")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("agent")
                .long("agent")
                .help("Query an agent, even when --collector was saved")
                .overrides_with("collector")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("once")
                .long("once")
                .help("Render a single report and exit")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Print the normalized snapshot as JSON, one line per refresh")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("no-color")
                .long("no-color")
                .help("Disable colored output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("save")
                .long("save")
                .help("Save host, interval, --all and --collector as defaults")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("completions")
                .long("completions")
                .value_name("SHELL")
                .help("Print shell completions and exit")
                .value_parser(SHELLS),
        )
}
