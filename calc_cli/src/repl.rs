//! Read-eval-print loop.
//!
//! Each input line is split on whitespace into a command name and operand
//! tokens and handed to the dispatcher. A few words are handled here instead
//! of being registered commands:
//!
//! - `exit` - leave the loop
//! - `menu` - list registered commands
//! - `json` - print the history as JSON

use std::borrow::Cow;
use std::io::{self, BufRead, Write};

use calc_core::Dispatcher;
use tracing::{debug, info, warn};

/// What the loop should do after one line.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Print this text
    Print(String),
    /// Nothing to print (blank line)
    Continue,
    /// Stop reading input
    Exit,
}

pub struct Repl {
    dispatcher: Dispatcher,
    prompt: String,
}

impl Repl {
    pub fn new(dispatcher: Dispatcher, prompt: impl Into<String>) -> Self {
        Repl {
            dispatcher,
            prompt: prompt.into(),
        }
    }

    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// Evaluate one input line.
    pub fn handle_line(&mut self, line: &str) -> Action {
        let mut tokens = line.split_whitespace();
        let Some(name) = tokens.next() else {
            return Action::Continue;
        };
        let args: Vec<&str> = tokens.collect();

        match name {
            "exit" => Action::Exit,
            "menu" => Action::Print(self.menu()),
            "json" => Action::Print(match self.dispatcher.calculator().history_json() {
                Ok(json) => json,
                Err(err) => format!("An error occurred: {}", err),
            }),
            _ => Action::Print(self.dispatcher.dispatch(name, &args)),
        }
    }

    fn menu(&self) -> String {
        let mut lines = vec!["Available commands:".to_string()];
        for (name, description) in self.dispatcher.registry().describe() {
            if description.is_empty() {
                lines.push(format!("  {}", name));
            } else {
                lines.push(format!("  {:<14} {}", name, description));
            }
        }
        lines.push(format!("  {:<14} {}", "json", "Print the history as JSON"));
        lines.push(format!("  {:<14} {}", "exit", "Quit"));
        lines.join("\n")
    }

    /// Run until `exit` or end of input.
    ///
    /// Lines that are not valid UTF-8 are decoded lossily and evaluated like
    /// any other line; only a failed read or write ends the loop early.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut output: W) -> io::Result<()> {
        info!("REPL started");
        let mut buf = Vec::new();
        loop {
            write!(output, "{}", self.prompt)?;
            output.flush()?;

            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                debug!("end of input");
                writeln!(output)?;
                break;
            }

            let line = String::from_utf8_lossy(&buf);
            if let Cow::Owned(_) = line {
                warn!("input line was not valid UTF-8");
            }

            match self.handle_line(&line) {
                Action::Print(text) => writeln!(output, "{}", text)?,
                Action::Continue => {}
                Action::Exit => {
                    writeln!(output, "Exiting...")?;
                    break;
                }
            }
        }
        info!("REPL stopped");
        Ok(())
    }
}
