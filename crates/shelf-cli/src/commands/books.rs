//! Book commands: add, list, search, show.

use shelf_core::{BookStatus, Ledger, LedgerStore};

use crate::app::AppContext;
use crate::cli::{AddArgs, ListArgs, SearchArgs, ShowArgs};
use crate::errors::CliError;
use crate::helpers::{parse_book_id, require_text, validate_format};
use crate::output::{book_json, books_json, loan_line, loans_json, print_book_list, print_loan_list};
use crate::ui::format::{count, quoted};
use crate::ui::{blank_line, header, kv, print, receipt, UiContext};

pub fn handle_add(ctx: &AppContext, args: &AddArgs) -> anyhow::Result<()> {
    let ui = ctx.ui_context(args.json, None);
    let mut ledger = ctx.open_ledger()?;
    add_book(&ui, &mut ledger, &args.title, &args.author, ctx.quiet())
}

/// Validate, add, and report a new book.
pub fn add_book<S: LedgerStore>(
    ui: &UiContext,
    ledger: &mut Ledger<S>,
    title: &str,
    author: &str,
    quiet: bool,
) -> anyhow::Result<()> {
    let title = require_text("Title", title)?;
    let author = require_text("Author", author)?;
    let book = ledger.add_book(&title, &author)?;

    if ui.mode.is_json() {
        println!("{}", serde_json::to_string_pretty(&book_json(&book))?);
    } else if !quiet {
        let id = book.id.to_string();
        let message = format!("{} by {} added with ID {}", quoted(&book.title), book.author, id);
        print(
            ui,
            &receipt(
                ui,
                &message,
                &[("ID", &id), ("Title", &book.title), ("Author", &book.author)],
            ),
        );
    }
    Ok(())
}

pub fn handle_list(ctx: &AppContext, args: &ListArgs) -> anyhow::Result<()> {
    let format = validate_format(args.format.as_deref())?;
    let ui = ctx.ui_context(args.json, format);
    let ledger = ctx.open_ledger()?;
    list_books(&ui, &ledger, ctx.quiet())
}

/// Print the books on the shelf.
pub fn list_books<S: LedgerStore>(
    ui: &UiContext,
    ledger: &Ledger<S>,
    quiet: bool,
) -> anyhow::Result<()> {
    let books: Vec<_> = ledger.available().iter().collect();
    if ui.mode.is_json() {
        println!("{}", serde_json::to_string_pretty(&books_json(books.iter().copied()))?);
        return Ok(());
    }
    if !quiet && !books.is_empty() {
        if let Some(h) = header(ui, "available", Some(&count(books.len(), "book", "books"))) {
            print(ui, &h);
        }
    }
    print_book_list(ui, &books, "No books available in the library.", quiet);
    Ok(())
}

pub fn handle_search(ctx: &AppContext, args: &SearchArgs) -> anyhow::Result<()> {
    let format = validate_format(args.format.as_deref())?;
    let ui = ctx.ui_context(args.json, format);
    let ledger = ctx.open_ledger()?;
    search_books(&ui, &ledger, &args.keyword, args.include_borrowed, ctx.quiet())
}

/// Print available books (and optionally loans) matching `keyword`.
pub fn search_books<S: LedgerStore>(
    ui: &UiContext,
    ledger: &Ledger<S>,
    keyword: &str,
    include_borrowed: bool,
    quiet: bool,
) -> anyhow::Result<()> {
    let books = ledger.search(keyword);
    let loans = if include_borrowed {
        ledger.search_loans(keyword)
    } else {
        Vec::new()
    };

    if ui.mode.is_json() {
        let mut value = serde_json::json!({ "books": books_json(books.iter().copied()) });
        if include_borrowed {
            value["borrowed"] = loans_json(loans.iter().copied());
        }
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    if !quiet && !(books.is_empty() && loans.is_empty()) {
        if let Some(h) = header(ui, "search", Some(keyword)) {
            print(ui, &h);
        }
    }
    print_book_list(ui, &books, "No matching books found.", quiet);
    if include_borrowed && !loans.is_empty() {
        blank_line(ui);
        if let Some(h) = header(ui, "borrowed", Some(keyword)) {
            print(ui, &h);
        }
        print_loan_list(ui, &loans, "", quiet);
    }
    Ok(())
}

pub fn handle_show(ctx: &AppContext, args: &ShowArgs) -> anyhow::Result<()> {
    let id = parse_book_id(&args.id)?;
    let ui = ctx.ui_context(args.json, None);
    let ledger = ctx.open_ledger()?;

    let status = ledger.status(id).ok_or_else(|| {
        CliError::not_found(
            format!("Book {} not found", id),
            "Run `shelf list` or `shelf loans` to find book IDs.",
        )
    })?;

    if ui.mode.is_json() {
        let mut value = book_json(status.book());
        match &status {
            BookStatus::Available(_) => value["status"] = "available".into(),
            BookStatus::OnLoan(loan) => {
                value["status"] = "on_loan".into();
                value["borrower"] = loan.borrower.clone().into();
            }
        }
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    let book = status.book();
    print(&ui, &kv(&ui, "ID", &book.id.to_string()));
    print(&ui, &kv(&ui, "Title", &book.title));
    print(&ui, &kv(&ui, "Author", &book.author));
    match &status {
        BookStatus::Available(_) => print(&ui, &kv(&ui, "Status", "available")),
        BookStatus::OnLoan(loan) => {
            print(&ui, &kv(&ui, "Status", "on loan"));
            print(&ui, &kv(&ui, "Borrower", &loan.borrower));
            if ui.mode.is_pretty() && !ctx.quiet() {
                blank_line(&ui);
                print(&ui, &loan_line(&ui, loan));
            }
        }
    }
    Ok(())
}
