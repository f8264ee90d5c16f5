use clap::Parser;

/// Print the day of the week of a calendar date.
#[derive(Parser)]
#[command(
    name = "weekday-of",
    version,
    about = "Print the day of the week of a DD/MM/YYYY date"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Date to look up (DD/MM/YYYY). Prompts on stdin when omitted.
    pub date: Option<String>,
}
