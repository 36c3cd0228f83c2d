//! Interactive session — a line-oriented event loop over the viewer.
//!
//! Each command maps to one [`Event`]; the page is re-rendered after every
//! state change.

use crate::error::Result;
use crate::render::Renderer;
use crate::viewer::{Event, ViewMode, Viewer};
use clap::ValueEnum;
use std::fs;
use std::io::{BufRead, Write};

const HELP: &str = "\
commands:
  toggle <path>     expand or collapse an endpoint path (alias: t)
  model <name>      expand or collapse a schema (alias: m)
  tab <endpoints|models>
  load <file>       replace the input with a file's contents
  show              render the page again
  help              show this message
  quit              leave (alias: exit)
";

/// A parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Dispatch(Event),
    Load(String),
    Show,
    Help,
    Quit,
}

/// Parse one line. `Ok(None)` for blank lines, `Err` with a message for
/// anything unrecognized.
pub fn parse_command(line: &str) -> Result<Option<Command>, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (verb, arg) = match line.split_once(char::is_whitespace) {
        Some((verb, arg)) => (verb, arg.trim()),
        None => (line, ""),
    };

    let needs_arg = |what: &str| {
        if arg.is_empty() {
            Err(format!("usage: {} <{}>", verb, what))
        } else {
            Ok(arg.to_string())
        }
    };

    let command = match verb {
        "toggle" | "t" => Command::Dispatch(Event::TogglePath(needs_arg("path")?)),
        "model" | "m" => Command::Dispatch(Event::ToggleSchema(needs_arg("name")?)),
        "tab" => {
            let name = needs_arg("endpoints|models")?;
            let mode = ViewMode::from_str(&name, true)
                .map_err(|_| format!("unknown tab: {}. Use endpoints or models", name))?;
            Command::Dispatch(Event::SelectMode(mode))
        }
        "load" => Command::Load(needs_arg("file")?),
        "show" => Command::Show,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        _ => return Err(format!("unknown command: {}. Type help for a list", verb)),
    };
    Ok(Some(command))
}

/// Run the loop until `quit` or end of input.
pub fn run(
    viewer: &mut Viewer,
    renderer: &dyn Renderer,
    input: impl BufRead,
    mut output: impl Write,
) -> Result<()> {
    output.write_all(renderer.render(&viewer.render())?.as_bytes())?;

    for line in input.lines() {
        let line = line?;
        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(message) => {
                writeln!(output, "{}", message)?;
                continue;
            }
        };
        tracing::debug!(?command, "session command");

        match command {
            Command::Dispatch(event) => viewer.dispatch(event),
            Command::Load(path) => match fs::read_to_string(&path) {
                Ok(text) => viewer.dispatch(Event::InputChanged(text)),
                Err(err) => {
                    writeln!(output, "failed to read {}: {}", path, err)?;
                    continue;
                }
            },
            Command::Show => {}
            Command::Help => {
                output.write_all(HELP.as_bytes())?;
                continue;
            }
            Command::Quit => break,
        }
        output.write_all(renderer.render(&viewer.render())?.as_bytes())?;
    }

    output.flush()?;
    Ok(())
}
