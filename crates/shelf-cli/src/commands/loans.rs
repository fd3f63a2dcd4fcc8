//! Loan commands: borrow, return, loans.

use shelf_core::{BookId, Ledger, LedgerStore};

use crate::app::AppContext;
use crate::cli::{ListArgs, LoanArgs};
use crate::helpers::{parse_book_id, require_text, validate_format};
use crate::output::{loans_json, print_loan_list};
use crate::ui::format::{count, quoted};
use crate::ui::{header, print, receipt, UiContext};

pub fn handle_borrow(ctx: &AppContext, args: &LoanArgs) -> anyhow::Result<()> {
    let id = parse_book_id(&args.id)?;
    let ui = ctx.ui_context(false, None);
    let mut ledger = ctx.open_ledger()?;
    borrow_book(&ui, &mut ledger, id, &args.name, ctx.quiet())
}

/// Lend book `id` to `name` and report the outcome.
///
/// The name is stored exactly as given so a later return can match it.
pub fn borrow_book<S: LedgerStore>(
    ui: &UiContext,
    ledger: &mut Ledger<S>,
    id: BookId,
    name: &str,
    quiet: bool,
) -> anyhow::Result<()> {
    require_text("Name", name)?;
    let loan = ledger.borrow(id, name)?;

    if !quiet {
        let message = format!("{} borrowed {}", loan.borrower, quoted(&loan.book.title));
        let id = loan.book.id.to_string();
        print(
            ui,
            &receipt(
                ui,
                &message,
                &[("ID", &id), ("Title", &loan.book.title), ("Borrower", &loan.borrower)],
            ),
        );
    }
    Ok(())
}

pub fn handle_return(ctx: &AppContext, args: &LoanArgs) -> anyhow::Result<()> {
    let id = parse_book_id(&args.id)?;
    let ui = ctx.ui_context(false, None);
    let mut ledger = ctx.open_ledger()?;
    return_book(&ui, &mut ledger, id, &args.name, ctx.quiet())
}

/// Take book `id` back from `name` and report the outcome.
///
/// The name is compared exactly; it is not trimmed.
pub fn return_book<S: LedgerStore>(
    ui: &UiContext,
    ledger: &mut Ledger<S>,
    id: BookId,
    name: &str,
    quiet: bool,
) -> anyhow::Result<()> {
    require_text("Name", name)?;
    let book = ledger.return_book(id, name)?;

    if !quiet {
        let message = format!("{} returned {}", name, quoted(&book.title));
        let id = book.id.to_string();
        print(
            ui,
            &receipt(ui, &message, &[("ID", &id), ("Title", &book.title), ("Borrower", name)]),
        );
    }
    Ok(())
}

pub fn handle_loans(ctx: &AppContext, args: &ListArgs) -> anyhow::Result<()> {
    let format = validate_format(args.format.as_deref())?;
    let ui = ctx.ui_context(args.json, format);
    let ledger = ctx.open_ledger()?;
    list_loans(&ui, &ledger, ctx.quiet())
}

/// Print every active loan, oldest first.
pub fn list_loans<S: LedgerStore>(
    ui: &UiContext,
    ledger: &Ledger<S>,
    quiet: bool,
) -> anyhow::Result<()> {
    let loans: Vec<_> = ledger.loans().collect();
    if ui.mode.is_json() {
        println!("{}", serde_json::to_string_pretty(&loans_json(loans.iter().copied()))?);
        return Ok(());
    }
    if !quiet && !loans.is_empty() {
        if let Some(h) = header(ui, "borrowed", Some(&count(loans.len(), "book", "books"))) {
            print(ui, &h);
        }
    }
    print_loan_list(ui, &loans, "No borrowed books currently.", quiet);
    Ok(())
}
