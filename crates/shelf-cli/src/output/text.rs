//! Text and table output formatting for books and loans.

use shelf_core::{Book, Loan};

use crate::ui::format::{single_line, truncate};
use crate::ui::theme::ARROW;
use crate::ui::{badge, print, table, Badge, Column, UiContext};

const TITLE_WIDTH: usize = 48;

const BOOK_COLUMNS: [Column; 3] = [Column::new("ID"), Column::new("Title"), Column::new("Author")];

const LOAN_COLUMNS: [Column; 4] = [
    Column::new("ID"),
    Column::new("Title"),
    Column::new("Author"),
    Column::new("Borrowed by"),
];

fn cell(ctx: &UiContext, text: &str) -> String {
    let line = single_line(text);
    if ctx.mode.is_pretty() {
        truncate(&line, TITLE_WIDTH)
    } else {
        line
    }
}

fn book_row(ctx: &UiContext, book: &Book) -> Vec<String> {
    vec![
        book.id.to_string(),
        cell(ctx, &book.title),
        cell(ctx, &book.author),
    ]
}

/// Print books as a table (pretty) or one tab-separated line each (plain).
///
/// `empty_message` is shown in pretty mode when there is nothing to list.
pub fn print_book_list(ctx: &UiContext, books: &[&Book], empty_message: &str, quiet: bool) {
    if books.is_empty() {
        if ctx.mode.is_pretty() && !quiet {
            print(ctx, &badge(ctx, Badge::Info, empty_message));
        }
        return;
    }
    let rows: Vec<Vec<String>> = books.iter().map(|book| book_row(ctx, book)).collect();
    print(ctx, &table(ctx, &BOOK_COLUMNS, &rows));
}

/// Print loans as a table (pretty) or one tab-separated line each (plain).
pub fn print_loan_list(ctx: &UiContext, loans: &[&Loan], empty_message: &str, quiet: bool) {
    if loans.is_empty() {
        if ctx.mode.is_pretty() && !quiet {
            print(ctx, &badge(ctx, Badge::Info, empty_message));
        }
        return;
    }
    let rows: Vec<Vec<String>> = loans
        .iter()
        .map(|loan| {
            let mut row = book_row(ctx, &loan.book);
            row.push(cell(ctx, &loan.borrower));
            row
        })
        .collect();
    print(ctx, &table(ctx, &LOAN_COLUMNS, &rows));
}

/// One-line description of a loan: `"Dune" by Herbert -> Alice`.
pub fn loan_line(ctx: &UiContext, loan: &Loan) -> String {
    format!(
        "\"{}\" by {} {} {}",
        single_line(&loan.book.title),
        single_line(&loan.book.author),
        ARROW.get(ctx.unicode),
        single_line(&loan.borrower)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::OutputMode;

    #[test]
    fn test_loan_line_ascii() {
        let ctx = UiContext {
            color: false,
            unicode: false,
            width: 80,
            mode: OutputMode::Plain,
        };
        let loan = Loan {
            book: Book {
                id: 1,
                title: "Dune".to_string(),
                author: "Herbert".to_string(),
            },
            borrower: "Alice".to_string(),
        };
        assert_eq!(loan_line(&ctx, &loan), "\"Dune\" by Herbert -> Alice");
    }
}
