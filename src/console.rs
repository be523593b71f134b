//! Terminal front end: line commands in, region updates printed to stdout.

use std::cell::RefCell;
use std::path::PathBuf;

use crate::models::ChatEntry;
use crate::service::{Action, ChatView};
use crate::transcript::Transcript;

pub const HELP: &str = "\
Commands:
  /upload <path> [<path>...]  upload a document (only the first path is sent);
                              quote paths that contain spaces: /upload \"My Docs/a.pdf\"
  /clear                      clear the chat transcript
  /history                    print the chat transcript
  /help                       show this message
  /quit                       exit
Anything else is asked as a question.";

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Action(Action<PathBuf>),
    History,
    Help,
    Quit,
    Unknown(String),
}

impl Command {
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim_start();
        let Some(rest) = trimmed.strip_prefix('/') else {
            // Blank lines fall through here too; the ask flow ignores them.
            return Command::Action(Action::Ask(line.to_string()));
        };

        let rest = rest.trim_end();
        let (name, args) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
        match name {
            "upload" => Command::Action(Action::Upload(
                split_args(args).into_iter().map(PathBuf::from).collect(),
            )),
            "clear" => Command::Action(Action::ClearChat),
            "history" => Command::History,
            "help" => Command::Help,
            "quit" | "exit" => Command::Quit,
            other => Command::Unknown(other.to_string()),
        }
    }
}

/// Splits on whitespace, except inside double quotes. An unterminated quote
/// runs to the end of the line.
fn split_args(args: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut current = String::new();
    let mut quoted = false;
    for c in args.chars() {
        match c {
            '"' => quoted = !quoted,
            c if c.is_whitespace() && !quoted => {
                if !current.is_empty() {
                    out.push(std::mem::take(&mut current));
                }
            }
            c => current.push(c),
        }
    }
    if !current.is_empty() {
        out.push(current);
    }
    out
}

/// Prints each region update as it happens and keeps the current state of
/// every region for `/history`.
#[derive(Debug, Default)]
pub struct ConsoleView {
    transcript: RefCell<Transcript>,
    answer: RefCell<String>,
    status: RefCell<String>,
}

impl ConsoleView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn transcript(&self) -> Transcript {
        self.transcript.borrow().clone()
    }

    pub fn answer(&self) -> String {
        self.answer.borrow().clone()
    }

    pub fn status(&self) -> String {
        self.status.borrow().clone()
    }

    pub fn print_history(&self) {
        let transcript = self.transcript.borrow();
        if transcript.is_empty() {
            println!("(no messages)");
        }
        for line in transcript.lines() {
            println!("{line}");
        }
    }
}

impl ChatView for ConsoleView {
    fn set_upload_status(&self, text: &str) {
        println!("[upload] {text}");
        *self.status.borrow_mut() = text.to_string();
    }

    fn set_answer(&self, text: &str) {
        println!("[answer] {text}");
        *self.answer.borrow_mut() = text.to_string();
    }

    fn append_entry(&self, entry: ChatEntry) {
        println!("{}", entry.line());
        self.transcript.borrow_mut().push(entry);
    }

    fn clear_entries(&self) {
        self.transcript.borrow_mut().clear();
        println!("[chat cleared]");
    }
}
