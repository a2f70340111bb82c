use crate::models::WorkDuration;
use ansi_term::Colour::{Green, Red, Yellow};
use std::fmt;

pub fn success<T: fmt::Display>(msg: T) {
    println!("{} {}", Green.bold().paint("✔"), msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{} {}", Yellow.bold().paint("!"), msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{} {}", Red.bold().paint("✖"), msg);
}

/// Render an overwork balance with a sign-based color: green for time in
/// credit, red for a shortfall, plain for zero.
pub fn balance(d: WorkDuration) -> String {
    let rendered = d.to_string();
    if d.minutes() > 0 {
        Green.paint(rendered).to_string()
    } else if d.is_negative() {
        Red.paint(rendered).to_string()
    } else {
        rendered
    }
}
