//! Interactive prompts using dialoguer.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::io::{self, BufRead, Write};

use console::Term;
use dialoguer::Confirm;

const PROMPT: &str = "Copy the files shown?";

/// Ask whether the listed files should be copied.
///
/// Uses a dialoguer prompt when stderr is a terminal. Otherwise one line is
/// read from stdin. Anything other than an explicit yes counts as no.
///
/// # Errors
///
/// * If the user cancels the prompt
/// * If stdin cannot be read
pub fn confirm_copy() -> io::Result<bool> {
    if Term::stderr().is_term() {
        return Ok(Confirm::new()
            .with_prompt(PROMPT)
            .default(false)
            .wait_for_newline(true)
            .interact()?);
    }

    print!("{PROMPT} (y/n) ");
    io::stdout().flush()?;
    read_answer(io::stdin().lock())
}

/// Read one answer line; only `y` is a yes.
fn read_answer<R: BufRead>(mut reader: R) -> io::Result<bool> {
    let mut answer = String::new();
    reader.read_line(&mut answer)?;
    let answer = answer.trim_end_matches(['\r', '\n']);
    log::debug!("Confirmation answer: {answer:?}");
    Ok(answer == "y")
}
