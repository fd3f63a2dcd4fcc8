use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use shelf_core::VERSION;

/// Shelf - keep track of a book collection and who borrowed what
#[derive(Parser)]
#[command(name = "shelf")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the library data file
    #[arg(short, long, global = true, env = "SHELF_PATH")]
    pub file: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Use ASCII symbols only
    #[arg(long, global = true)]
    pub ascii: bool,
}

/// Arguments for the `add` command
#[derive(Args)]
pub struct AddArgs {
    /// Book title
    #[arg(value_name = "TITLE")]
    pub title: String,

    /// Author name
    #[arg(value_name = "AUTHOR")]
    pub author: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `list` and `loans` commands
#[derive(Args)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Output format (table, plain)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,
}

/// Arguments for the `search` command
#[derive(Args)]
pub struct SearchArgs {
    /// Text to look for in titles and authors (case-insensitive)
    #[arg(value_name = "KEYWORD", default_value = "")]
    pub keyword: String,

    /// Also search books that are currently borrowed
    #[arg(long)]
    pub include_borrowed: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Output format (table, plain)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,
}

/// Arguments for the `borrow` and `return` commands
#[derive(Args)]
pub struct LoanArgs {
    /// Book ID
    #[arg(value_name = "ID", allow_hyphen_values = true)]
    pub id: String,

    /// Borrower name (exact, case-sensitive)
    #[arg(value_name = "NAME")]
    pub name: String,
}

/// Arguments for the `show` command
#[derive(Args)]
pub struct ShowArgs {
    /// Book ID
    #[arg(value_name = "ID", allow_hyphen_values = true)]
    pub id: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command
#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_name = "SHELL")]
    pub shell: Shell,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the interactive menu (default when no command is given)
    Menu,

    /// Add a new book
    Add(AddArgs),

    /// List available books
    List(ListArgs),

    /// Search available books by title or author
    Search(SearchArgs),

    /// Borrow an available book
    Borrow(LoanArgs),

    /// Return a borrowed book
    Return(LoanArgs),

    /// List borrowed books
    Loans(ListArgs),

    /// Show where a book is
    Show(ShowArgs),

    /// Show book counts and the data file location
    Status,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
