//! Interactive seven-action menu.
//!
//! On a terminal the menu uses dialoguer widgets. When stdin is piped it
//! falls back to numbered prompts read line by line, so the menu can be
//! scripted. Either way every action goes through the same handlers as the
//! subcommands, and an error from one action never ends the loop.

use std::io::{self, BufRead, Write};

use dialoguer::{Input, Select};
use log::warn;

use shelf_core::{Ledger, LedgerStore};

use super::books::{add_book, list_books, search_books};
use super::loans::{borrow_book, list_loans, return_book};
use crate::app::AppContext;
use crate::errors::error_hint;
use crate::helpers::parse_book_id;
use crate::ui::{print, print_error, UiContext};

/// Menu actions, in menu order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    AddBook,
    ListAvailable,
    Search,
    Borrow,
    Return,
    ListBorrowed,
    Exit,
}

impl MenuAction {
    pub const ALL: [MenuAction; 7] = [
        MenuAction::AddBook,
        MenuAction::ListAvailable,
        MenuAction::Search,
        MenuAction::Borrow,
        MenuAction::Return,
        MenuAction::ListBorrowed,
        MenuAction::Exit,
    ];

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn label(&self) -> &'static str {
        match self {
            MenuAction::AddBook => "Add Book",
            MenuAction::ListAvailable => "View All Books",
            MenuAction::Search => "Search Book",
            MenuAction::Borrow => "Borrow Book",
            MenuAction::Return => "Return Book",
            MenuAction::ListBorrowed => "View Borrowed Books",
            MenuAction::Exit => "Exit",
        }
    }
}

/// Source of menu choices and typed text.
///
/// `Ok(None)` from either method means input has ended and the menu should
/// stop as if Exit had been chosen.
pub trait Prompter {
    fn choose(&mut self, title: &str) -> anyhow::Result<Option<MenuAction>>;

    fn text(&mut self, prompt: &str) -> anyhow::Result<Option<String>>;
}

/// Prompter backed by dialoguer widgets on a terminal.
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn choose(&mut self, title: &str) -> anyhow::Result<Option<MenuAction>> {
        let labels: Vec<&str> = MenuAction::ALL.iter().map(|a| a.label()).collect();
        let picked = Select::new()
            .with_prompt(title)
            .items(&labels[..])
            .default(0)
            .interact_opt()?;
        Ok(picked.and_then(MenuAction::from_index))
    }

    fn text(&mut self, prompt: &str) -> anyhow::Result<Option<String>> {
        let value: String = Input::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()?;
        Ok(Some(value))
    }
}

/// Prompter that prints numbered prompts and reads answers line by line.
pub struct LinePrompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn read_line(&mut self) -> anyhow::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let kept = line.trim_end_matches(|c| c == '\n' || c == '\r').len();
        line.truncate(kept);
        Ok(Some(line))
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn choose(&mut self, title: &str) -> anyhow::Result<Option<MenuAction>> {
        let rule = "=".repeat(40);
        loop {
            writeln!(self.output, "\n{}\n{}\n{}", rule, title, rule)?;
            for (number, action) in MenuAction::ALL.iter().enumerate() {
                writeln!(self.output, "{}. {}", number + 1, action.label())?;
            }
            write!(self.output, "Enter your choice (1-{}): ", MenuAction::ALL.len())?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            let picked = line
                .trim()
                .parse::<usize>()
                .ok()
                .and_then(|n| n.checked_sub(1))
                .and_then(MenuAction::from_index);
            match picked {
                Some(action) => return Ok(Some(action)),
                None => writeln!(self.output, "Invalid choice! Please try again.")?,
            }
        }
    }

    fn text(&mut self, prompt: &str) -> anyhow::Result<Option<String>> {
        write!(self.output, "{}: ", prompt)?;
        self.output.flush()?;
        self.read_line()
    }
}

pub fn handle_menu(ctx: &AppContext) -> anyhow::Result<()> {
    let ui = ctx.ui_context(false, None);
    let mut ledger = ctx.open_ledger()?;
    let title = format!("Welcome to {}", ctx.library_name()?);

    if UiContext::is_interactive() {
        run_menu(&ui, &mut ledger, &mut TerminalPrompter, &title, ctx.quiet())
    } else {
        let stdin = io::stdin();
        let mut prompter = LinePrompter::new(stdin.lock(), io::stdout());
        run_menu(&ui, &mut ledger, &mut prompter, &title, ctx.quiet())
    }
}

/// Run the menu until Exit is chosen or input ends.
///
/// Only prompt failures end the loop early; ledger and validation errors are
/// printed and the next choice is read.
pub fn run_menu<S: LedgerStore, P: Prompter>(
    ui: &UiContext,
    ledger: &mut Ledger<S>,
    prompter: &mut P,
    title: &str,
    quiet: bool,
) -> anyhow::Result<()> {
    while let Some(action) = prompter.choose(title)? {
        let outcome = match action {
            MenuAction::Exit => break,
            MenuAction::AddBook => {
                let Some(book_title) = prompter.text("Enter book title")? else {
                    break;
                };
                let Some(author) = prompter.text("Enter author name")? else {
                    break;
                };
                add_book(ui, ledger, &book_title, &author, quiet)
            }
            MenuAction::ListAvailable => list_books(ui, ledger, quiet),
            MenuAction::Search => {
                let Some(keyword) = prompter.text("Enter keyword (title/author)")? else {
                    break;
                };
                search_books(ui, ledger, &keyword, false, quiet)
            }
            MenuAction::Borrow => {
                let Some(raw_id) = prompter.text("Enter book ID to borrow")? else {
                    break;
                };
                match parse_book_id(&raw_id) {
                    Ok(id) => {
                        let Some(name) = prompter.text("Enter your name")? else {
                            break;
                        };
                        borrow_book(ui, ledger, id, &name, quiet)
                    }
                    Err(err) => Err(err.into()),
                }
            }
            MenuAction::Return => {
                let Some(raw_id) = prompter.text("Enter book ID to return")? else {
                    break;
                };
                match parse_book_id(&raw_id) {
                    Ok(id) => {
                        let Some(name) = prompter.text("Enter your name")? else {
                            break;
                        };
                        return_book(ui, ledger, id, &name, quiet)
                    }
                    Err(err) => Err(err.into()),
                }
            }
            MenuAction::ListBorrowed => list_loans(ui, ledger, quiet),
        };

        if let Err(err) = outcome {
            warn!("menu action failed: {}", err);
            print_error(ui, &err.to_string(), error_hint(&err));
        }
    }

    if !quiet {
        print(ui, "Exiting. Goodbye!");
    }
    Ok(())
}
