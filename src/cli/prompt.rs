//! Line-oriented input scanning for the interactive menu.

use crate::models::WorkDuration;
use crate::ui::messages;
use crate::utils::time::parse_hhmm;
use std::io::BufRead;

/// Why a duration entry was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidDuration {
    /// Not of the form `H:M` at all.
    Malformed,
    /// Parsed, but hours or minutes fall outside the accepted bounds.
    OutOfRange,
}

/// Parse and validate one line of duration input.
///
/// Hours are accepted up to and including 24, so a full "24:00" day can be
/// entered; minutes run 0 to 59.
pub fn parse_duration_input(line: &str) -> Result<WorkDuration, InvalidDuration> {
    let (hours, minutes) = parse_hhmm(line).ok_or(InvalidDuration::Malformed)?;
    if !(0..=24).contains(&hours) || !(0..=59).contains(&minutes) {
        return Err(InvalidDuration::OutOfRange);
    }
    Ok(WorkDuration::from_hm(hours, minutes))
}

/// Prompt for a duration and loop until a valid one is entered.
///
/// There is no retry limit; malformed input just re-prompts with a message
/// matching the failure. Returns `None` when stdin is exhausted.
pub fn prompt_duration<R: BufRead>(
    input: &mut R,
    prompt: &str,
) -> std::io::Result<Option<WorkDuration>> {
    println!("{prompt}");
    loop {
        let Some(line) = read_line(input)? else {
            return Ok(None);
        };
        match parse_duration_input(&line) {
            Ok(duration) => return Ok(Some(duration)),
            Err(InvalidDuration::Malformed) => {
                messages::warning("Wrong format! Input in this format: HH:MM");
            }
            Err(InvalidDuration::OutOfRange) => {
                messages::warning("Wrong format! HH must be from 00 to 24 and MM from 00 to 59.");
            }
        }
    }
}

/// Read one line, `None` on end of input.
pub fn read_line<R: BufRead>(input: &mut R) -> std::io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        Ok(None)
    } else {
        Ok(Some(line))
    }
}
