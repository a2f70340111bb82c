//! The interactive controller: render the menu, dispatch actions, persist.
//!
//! Every mutation is saved to disk before the next prompt is shown, so the
//! in-memory state never runs ahead of the backing file.

use crate::cli::prompt::{prompt_duration, read_line};
use crate::errors::AppResult;
use crate::models::{HistoryRecord, Store};
use crate::storage::DataFile;
use crate::ui::messages;
use crate::utils::date::days_between;
use crate::utils::table::{Column, Table};
use crate::{SharedStore, lock};
use std::io::{self, BufRead, Write};

/// Run the menu until the input stream ends. Persistence failures propagate
/// out and abort the session rather than continuing with diverging state.
pub fn main_loop<R: BufRead>(
    input: &mut R,
    store: &SharedStore,
    data: &DataFile,
) -> AppResult<()> {
    loop {
        show_main_screen(&lock(store));
        let Some(line) = read_line(input)? else {
            return Ok(());
        };
        // Anything that is not a number falls through to the invalid arm.
        let keep_going = match line.trim().parse::<u32>().unwrap_or(0) {
            1 => record_working_hours(input, store, data)?,
            2 => change_need_work(input, store, data)?,
            3 => print_history(input, &lock(store))?,
            _ => {
                messages::warning("Invalid option, please try again.");
                true
            }
        };
        if !keep_going {
            return Ok(());
        }
    }
}

fn show_main_screen(store: &Store) {
    println!("---");
    println!("Work Today:\t{}", store.need_work);
    println!("Overwork:\t{}", messages::balance(store.overwork));
    println!();
    println!("1. Record Working Hours");
    println!("2. Change Need Work");
    println!("3. Print History");
    println!("---");
    print!("Select an option: ");
    io::stdout().flush().ok();
}

fn record_working_hours<R: BufRead>(
    input: &mut R,
    store: &SharedStore,
    data: &DataFile,
) -> AppResult<bool> {
    let Some(worked) = prompt_duration(input, "Enter hours worked today (format: '09:15'):")?
    else {
        return Ok(false);
    };
    {
        let mut store = lock(store);
        let record = HistoryRecord::now(worked, store.need_work);
        store.record_worked(record);
        data.save(&store)?;
    }
    messages::success("Worked hours are recorded.");
    block_until_enter(input)
}

fn change_need_work<R: BufRead>(
    input: &mut R,
    store: &SharedStore,
    data: &DataFile,
) -> AppResult<bool> {
    let Some(quota) = prompt_duration(input, "Enter required work hours for today (format: '09:11'):")?
    else {
        return Ok(false);
    };
    {
        let mut store = lock(store);
        store.set_need_work(quota);
        data.save(&store)?;
    }
    messages::success("Today's need work time is changed.");
    block_until_enter(input)
}

fn print_history<R: BufRead>(input: &mut R, store: &Store) -> AppResult<bool> {
    let mut table = Table::new(vec![
        Column::new("Date", 5),
        Column::new("Worked", 6),
        Column::new("Need work", 9),
        Column::new("Overwork", 8),
    ]);

    let mut prev: Option<&HistoryRecord> = None;
    for record in &store.history {
        if let Some(prev) = prev {
            // One blank row per skipped calendar day.
            for _ in 1..days_between(&prev.date, &record.date) {
                table.add_blank_row();
            }
        }
        table.add_row(vec![
            record.date.format("%d.%m").to_string(),
            record.worked.to_string(),
            record.need_work.to_string(),
            record.overwork.to_string(),
        ]);
        prev = Some(record);
    }

    print!("\n{}", table.render());
    block_until_enter(input)
}

/// Single acknowledgment wait. Returns false once input is exhausted.
fn block_until_enter<R: BufRead>(input: &mut R) -> AppResult<bool> {
    println!("\n-> Press Enter to return to the main screen");
    Ok(read_line(input)?.is_some())
}
