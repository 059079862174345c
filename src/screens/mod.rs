//! Line-oriented terminal screens. Each screen renders, reads what it needs
//! from the input, and returns the route to show next.

pub mod chat;
pub mod notifications;
pub mod register;

use std::io::{BufRead, Write};

use anyhow::{Context, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Register,
    Chat,
    Notifications,
    Exit,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Register => "/",
            Route::Chat => "/chat",
            Route::Notifications => "/notifications",
            Route::Exit => "",
        }
    }
}

/// Write `label` without a newline, then read one line. `None` on end of input.
pub(crate) fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    label: &str,
) -> Result<Option<String>> {
    write!(out, "{label}")?;
    out.flush().context("failed to flush output")?;
    read_line(input)
}

pub(crate) fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .context("failed to read input")?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}
