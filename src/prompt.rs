//! Interactive date prompt.

use std::io::{BufRead, Write};

use anyhow::{Result, bail};
use tracing::debug;
use weekday_of::{Date, date_to_weekday, weekday_to_string};

const PROMPT: &str = "Enter the date (DD/MM/YYYY)\n-> ";
const MALFORMED: &str = "Error: malformed date\n";

/// Prompts until a valid date is entered.
///
/// Any parse or range failure prints an error and asks again. Running out
/// of input before a valid date is an error.
pub fn read_date<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<Date> {
    let mut buf = Vec::new();
    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            bail!("no date entered");
        }

        // invalid UTF-8 becomes U+FFFD and fails to parse like any other bad line
        let line = String::from_utf8_lossy(&buf);
        match line.parse::<Date>() {
            Ok(date) => return Ok(date),
            Err(err) => {
                debug!(input = line.trim(), error = %err, "rejected date input");
                writeln!(output, "{MALFORMED}")?;
            }
        }
    }
}

/// Sentence reported for a date, e.g. `01/01/2000 is a Saturday.`
pub fn describe(date: &Date) -> String {
    format!("{date} is a {}.", weekday_to_string(date_to_weekday(date)))
}
