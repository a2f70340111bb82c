use clap::Parser;

/// Command-line surface for overwork.
///
/// The tool is purely interactive: there are no functional flags, only the
/// standard `--help`/`--version`, and stray arguments are rejected. The
/// backing file location is controlled by the `OVERWORK_DATA_FILE`
/// environment variable instead of a flag.
#[derive(Parser)]
#[command(
    name = "overwork",
    version = env!("CARGO_PKG_VERSION"),
    about = "Track daily worked hours against a quota and accumulate an overwork balance",
    long_about = None
)]
pub struct Cli {}
