mod cli;
mod logging;
mod prompt;

use std::io::{self, Write};
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use weekday_of::Date;

use crate::cli::Cli;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.date.as_deref()) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(date: Option<&str>) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let date = match date {
        Some(arg) => arg
            .parse::<Date>()
            .with_context(|| format!("invalid date '{arg}'"))?,
        None => {
            let stdin = io::stdin();
            prompt::read_date(&mut stdin.lock(), &mut out)?
        }
    };

    info!(%date, "computing weekday");
    writeln!(out, "{}", prompt::describe(&date))?;
    Ok(())
}
