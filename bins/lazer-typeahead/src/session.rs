//! Line-driven picker session.
//!
//! Each input line is one picker event:
//!
//! ```text
//! search <query>   filter the list
//! clear            show every item again
//! check <value>    select a row
//! uncheck <value>  uncheck a row (keeps the selection)
//! list             print the visible rows
//! confirm          emit the selection and stop
//! cancel           discard the selection and stop
//! ```

use crate::output::format_item;
use anyhow::Result;
use lazer_typeahead::{SelectionEvent, TypeaheadSelector};
use std::io::{BufRead, Write};
use std::str::FromStr;

const HELP: &str =
    "commands: search <q>, clear, check <v>, uncheck <v>, list, confirm, cancel";

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerCommand {
    Search(String),
    Clear,
    Check(String),
    Uncheck(String),
    List,
    Confirm,
    Cancel,
    Help,
}

impl FromStr for PickerCommand {
    type Err = String;

    fn from_str(line: &str) -> std::result::Result<Self, Self::Err> {
        let line = line.trim_start();
        let (word, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let arg = rest.trim();

        let needs_arg = |name: &str| -> std::result::Result<String, String> {
            if arg.is_empty() {
                Err(format!("`{}` needs a value", name))
            } else {
                Ok(arg.to_string())
            }
        };

        match word {
            // The raw remainder is kept so a trailing space still reaches the search.
            "search" | "/" => Ok(PickerCommand::Search(rest.to_string())),
            "clear" => Ok(PickerCommand::Clear),
            "check" => needs_arg("check").map(PickerCommand::Check),
            "uncheck" => needs_arg("uncheck").map(PickerCommand::Uncheck),
            "list" | "ls" => Ok(PickerCommand::List),
            "confirm" | "ok" => Ok(PickerCommand::Confirm),
            "cancel" | "quit" => Ok(PickerCommand::Cancel),
            "help" | "?" => Ok(PickerCommand::Help),
            other => Err(format!("unknown command `{}` (try `help`)", other)),
        }
    }
}

/// Drive `picker` from `input` until confirm, cancel or end of input.
///
/// End of input without a terminal command cancels, like dismissing the
/// picker. Returns the terminal event.
pub fn run<R: BufRead, W: Write>(
    picker: &mut TypeaheadSelector,
    input: R,
    out: &mut W,
) -> Result<SelectionEvent> {
    writeln!(out, "{}", picker.title())?;
    print_rows(picker, out)?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<PickerCommand>() {
            Ok(command) => command,
            Err(message) => {
                writeln!(out, "error: {}", message)?;
                continue;
            }
        };
        tracing::debug!(?command, "Picker command");

        match command {
            PickerCommand::Search(query) => {
                picker.search_input(&query);
                print_rows(picker, out)?;
            }
            PickerCommand::Clear => {
                picker.search_input("");
                print_rows(picker, out)?;
            }
            PickerCommand::Check(value) => picker.checkbox_change(&value, true),
            PickerCommand::Uncheck(value) => picker.checkbox_change(&value, false),
            PickerCommand::List => print_rows(picker, out)?,
            PickerCommand::Help => writeln!(out, "{}", HELP)?,
            PickerCommand::Confirm => return Ok(finish(picker.confirm())),
            PickerCommand::Cancel => return Ok(finish(picker.cancel())),
        }
    }

    tracing::debug!("Input ended without confirm, cancelling");
    Ok(finish(picker.cancel()))
}

fn finish(event: Option<SelectionEvent>) -> SelectionEvent {
    // Only a closed picker returns None, and `run` stops at the first close.
    event.unwrap_or(SelectionEvent::Cancel)
}

fn print_rows<W: Write>(picker: &TypeaheadSelector, out: &mut W) -> Result<()> {
    for (item, checked) in picker.rows() {
        let mark = if checked { "x" } else { " " };
        writeln!(out, "[{}] {}", mark, format_item(item))?;
    }
    writeln!(out, "-- {} shown", picker.filtered_len())?;
    Ok(())
}
