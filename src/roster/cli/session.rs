//! # Interactive Session
//!
//! A line-oriented shell over the API. The session owns the current search
//! term and redraws the visible list after every mutation or search change,
//! the same way a list page re-renders after each click.
//!
//! Input and output are injected so the whole loop can be driven from tests.

use super::prompt::{ask, confirm, read_line};
use super::render::{render_list, render_messages};
use roster::api::{CmdMessage, RosterApi};
use roster::error::{Result, RosterError};
use roster::store::DataStore;
use roster::view::SearchQuery;
use std::io::{BufRead, Write};
use tracing::{debug, info};

pub(super) const HELP: &str = "\
Commands:
  add <name>            Add a record (alias: a)
  edit <n> [name]       Rename the record shown as n; prompts when no name is given (alias: e)
  rm <n|a-b>...         Remove records by number or range (aliases: delete, d)
  search [term]         Filter by name; no term clears the filter (alias: /)
  list                  Redraw the list (alias: ls)
  help                  Show this help (alias: ?)
  quit                  Leave (aliases: exit, q)
";

#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum ShellCommand {
    Add(String),
    Edit { index: String, name: Option<String> },
    Remove(Vec<String>),
    Search(String),
    List,
    Help,
    Quit,
    Nothing,
}

impl ShellCommand {
    fn label(&self) -> &'static str {
        match self {
            ShellCommand::Add(_) => "add",
            ShellCommand::Edit { .. } => "edit",
            ShellCommand::Remove(_) => "remove",
            ShellCommand::Search(_) => "search",
            ShellCommand::List => "list",
            ShellCommand::Help => "help",
            ShellCommand::Quit => "quit",
            ShellCommand::Nothing => "nothing",
        }
    }

    pub(super) fn parse(line: &str) -> std::result::Result<Self, String> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(ShellCommand::Nothing);
        }
        if let Some(term) = line.strip_prefix('/') {
            return Ok(ShellCommand::Search(term.trim().to_string()));
        }

        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        match verb.to_ascii_lowercase().as_str() {
            "add" | "a" => Ok(ShellCommand::Add(rest.to_string())),
            "edit" | "e" | "rename" => {
                let (index, name) = match rest.split_once(char::is_whitespace) {
                    Some((index, name)) => (index, Some(name.trim().to_string())),
                    None => (rest, None),
                };
                if index.is_empty() {
                    return Err("Usage: edit <n> [name]".to_string());
                }
                Ok(ShellCommand::Edit {
                    index: index.to_string(),
                    name,
                })
            }
            "rm" | "remove" | "delete" | "d" => {
                let indexes: Vec<String> = rest.split_whitespace().map(str::to_string).collect();
                if indexes.is_empty() {
                    return Err("Usage: rm <n|a-b>...".to_string());
                }
                Ok(ShellCommand::Remove(indexes))
            }
            "search" | "find" => Ok(ShellCommand::Search(rest.to_string())),
            "list" | "ls" => Ok(ShellCommand::List),
            "help" | "?" => Ok(ShellCommand::Help),
            "quit" | "exit" | "q" => Ok(ShellCommand::Quit),
            other => Err(format!(
                "Unknown command: {}. Type 'help' for commands.",
                other
            )),
        }
    }
}

#[derive(Debug, Clone)]
pub(super) struct SessionSettings {
    pub confirm_remove: bool,
    pub name_width: usize,
}

#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

pub(super) struct Session<S: DataStore, R: BufRead, W: Write> {
    api: RosterApi<S>,
    settings: SessionSettings,
    query: String,
    input: R,
    out: W,
}

impl<S: DataStore, R: BufRead, W: Write> Session<S, R, W> {
    pub(super) fn new(api: RosterApi<S>, settings: SessionSettings, input: R, out: W) -> Self {
        Self {
            api,
            settings,
            query: String::new(),
            input,
            out,
        }
    }

    /// Runs until `quit` or end of input.
    pub(super) fn run(&mut self) -> Result<()> {
        info!(records = self.api.store().len(), "session started");
        self.redraw()?;

        let mut handled = 0usize;
        loop {
            write!(self.out, "> ")?;
            self.out.flush()?;

            let Some(line) = read_line(&mut self.input)? else {
                writeln!(self.out)?;
                break;
            };

            let flow = match ShellCommand::parse(&line) {
                Ok(command) => {
                    handled += 1;
                    self.dispatch(command)?
                }
                Err(usage) => {
                    self.print_messages(&[CmdMessage::error(usage)])?;
                    Flow::Continue
                }
            };
            if flow == Flow::Quit {
                break;
            }
        }

        info!(commands = handled, records = self.api.store().len(), "session ended");
        Ok(())
    }

    fn dispatch(&mut self, command: ShellCommand) -> Result<Flow> {
        debug!(command = command.label(), "dispatching");
        let outcome = match command {
            ShellCommand::Add(name) => self.handle_add(&name),
            ShellCommand::Edit { index, name } => self.handle_edit(&index, name),
            ShellCommand::Remove(indexes) => self.handle_remove(&indexes),
            ShellCommand::Search(term) => self.handle_search(term),
            ShellCommand::List => self.redraw(),
            ShellCommand::Help => {
                write!(self.out, "{}", HELP)?;
                Ok(())
            }
            ShellCommand::Quit => return Ok(Flow::Quit),
            ShellCommand::Nothing => Ok(()),
        };

        match outcome {
            Ok(()) => Ok(Flow::Continue),
            // Bad indexes and the like: tell the user, keep the session alive.
            Err(RosterError::Api(msg)) => {
                self.print_messages(&[CmdMessage::error(msg)])?;
                Ok(Flow::Continue)
            }
            Err(e) if e.is_recoverable() => {
                self.print_messages(&[CmdMessage::warning(e.to_string())])?;
                Ok(Flow::Continue)
            }
            Err(e) => Err(e),
        }
    }

    fn handle_add(&mut self, name: &str) -> Result<()> {
        let result = self.api.add_record(name)?;
        self.print_messages(&result.messages)?;
        if !result.affected_records.is_empty() {
            self.redraw()?;
        }
        Ok(())
    }

    fn handle_edit(&mut self, index: &str, name: Option<String>) -> Result<()> {
        let new_name = match name {
            Some(name) => name,
            None => {
                let current = self.api.resolve(&self.query, &[index])?.remove(0);
                let question = format!("New name [{}]: ", current.record.name);
                match ask(&mut self.input, &mut self.out, &question)? {
                    Some(answer) => answer,
                    None => {
                        writeln!(self.out)?;
                        return self.print_messages(&[CmdMessage::info("Edit cancelled.")]);
                    }
                }
            }
        };

        let result = self.api.rename_record(&self.query, index, &new_name)?;
        self.print_messages(&result.messages)?;
        if !result.affected_records.is_empty() {
            self.redraw()?;
        }
        Ok(())
    }

    fn handle_remove(&mut self, indexes: &[String]) -> Result<()> {
        let rows = self.api.resolve(&self.query, indexes)?;

        let confirmed = if self.settings.confirm_remove {
            let mut keep = Vec::with_capacity(rows.len());
            for row in rows {
                let question = format!("Remove '{}'?", row.record.name);
                if confirm(&mut self.input, &mut self.out, &question)? {
                    keep.push(row);
                }
            }
            keep
        } else {
            rows
        };

        if confirmed.is_empty() {
            return self.print_messages(&[CmdMessage::info("Nothing removed.")]);
        }

        let result = self.api.remove_resolved(&confirmed)?;
        self.print_messages(&result.messages)?;
        self.redraw()
    }

    fn handle_search(&mut self, term: String) -> Result<()> {
        self.query = term;
        self.redraw()
    }

    fn redraw(&mut self) -> Result<()> {
        let result = self.api.search_records(&self.query)?;
        let output = render_list(
            &result.listed_records,
            &SearchQuery::new(&self.query),
            self.api.store().len(),
            self.settings.name_width,
        );
        write!(self.out, "{}", output)?;
        Ok(())
    }

    fn print_messages(&mut self, messages: &[CmdMessage]) -> Result<()> {
        write!(self.out, "{}", render_messages(messages))?;
        Ok(())
    }

    #[cfg(test)]
    fn into_parts(self) -> (RosterApi<S>, W) {
        (self.api, self.out)
    }
}
