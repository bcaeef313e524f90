//! Styled progress lines on stdout.
//!
//! These are the operator-facing messages printed while data is being
//! gathered; the screen is cleared before the card is drawn.

use crossterm::style::Stylize;

pub fn plain(msg: impl AsRef<str>) {
    println!("{}", msg.as_ref());
}

pub fn dim(msg: impl AsRef<str>) {
    println!("{}", msg.as_ref().dim());
}

pub fn success(msg: impl AsRef<str>) {
    println!("{}", msg.as_ref().green());
}

pub fn warn(msg: impl AsRef<str>) {
    println!("{}", msg.as_ref().yellow());
}

pub fn error(msg: impl AsRef<str>) {
    println!("{}", msg.as_ref().red());
}
