//! The book/loan ledger.
//!
//! `Ledger` owns the authoritative in-memory state and a store. Every
//! mutation is applied to a copy of the state, the copy is saved, and only
//! then is it swapped in. A failed save therefore leaves the ledger exactly as
//! it was before the call.

use log::info;

use crate::error::{LedgerError, NotBorrowed, Result, Unavailable};
use crate::storage::{Book, BookId, BookStatus, LedgerState, LedgerStore, Loan};

/// Book counts across both sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    pub available: usize,
    pub on_loan: usize,
    pub total: usize,
}

/// In-memory ledger backed by a store.
#[derive(Debug)]
pub struct Ledger<S: LedgerStore> {
    store: S,
    state: LedgerState,
}

impl<S: LedgerStore> Ledger<S> {
    /// Load state from `store` and build a ledger around it.
    ///
    /// # Errors
    ///
    /// Propagates the store's load error; a corrupt document is not
    /// replaced with an empty ledger.
    pub fn open(store: S) -> Result<Self> {
        let state = store.load()?;
        Ok(Self { store, state })
    }

    /// The backing store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Current in-memory state.
    pub fn state(&self) -> &LedgerState {
        &self.state
    }

    /// Add a new book to the available set.
    ///
    /// Title and author are trimmed and must not be empty. The new id is the
    /// total number of books ever added plus one.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::InvalidInput` for blank text and
    /// `LedgerError::Storage` if the state cannot be persisted.
    pub fn add_book(&mut self, title: &str, author: &str) -> Result<Book> {
        let title = require_text("title", title)?;
        let author = require_text("author", author)?;

        let mut next = self.state.clone();
        let book = Book {
            id: next.next_id(),
            title,
            author,
        };
        next.books.push(book.clone());
        self.commit(next)?;

        info!("added book {} \"{}\"", book.id, book.title);
        Ok(book)
    }

    /// Books currently on the shelf, in insertion order.
    pub fn available(&self) -> &[Book] {
        &self.state.books
    }

    /// Available books whose title or author contains `keyword`,
    /// ignoring case. An empty keyword matches every book.
    ///
    /// Borrowed books are not searched; see [`Ledger::search_loans`].
    pub fn search(&self, keyword: &str) -> Vec<&Book> {
        let needle = keyword.to_lowercase();
        self.state
            .books
            .iter()
            .filter(|book| book.matches_lowercase(&needle))
            .collect()
    }

    /// Active loans whose book matches `keyword`, same rule as [`Ledger::search`].
    pub fn search_loans(&self, keyword: &str) -> Vec<&Loan> {
        let needle = keyword.to_lowercase();
        self.state
            .borrowed_books
            .values()
            .filter(|loan| loan.book.matches_lowercase(&needle))
            .collect()
    }

    /// Lend an available book to `borrower`.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::InvalidInput` for a blank borrower and
    /// `LedgerError::BookNotAvailable` if `id` is not on the shelf, whether it
    /// is on loan or was never added. The ledger is unchanged either way.
    pub fn borrow(&mut self, id: BookId, borrower: &str) -> Result<Loan> {
        if borrower.trim().is_empty() {
            return Err(LedgerError::InvalidInput(
                "borrower name must not be empty".to_string(),
            ));
        }

        let Some(position) = self.state.books.iter().position(|book| book.id == id) else {
            return Err(LedgerError::BookNotAvailable {
                id,
                reason: self.unavailable_reason(id),
            });
        };

        let mut next = self.state.clone();
        let book = next.books.remove(position);
        let loan = Loan {
            book,
            borrower: borrower.to_string(),
        };
        next.borrowed_books.insert(id, loan.clone());
        self.commit(next)?;

        info!("{} borrowed book {}", loan.borrower, id);
        Ok(loan)
    }

    /// Take a book back from `borrower`. The book goes to the end of the
    /// available set.
    ///
    /// The name must match the recorded borrower exactly, case included.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::NotBorrowedByUser` if there is no loan for `id`
    /// or it is held by someone else. The ledger is unchanged.
    pub fn return_book(&mut self, id: BookId, borrower: &str) -> Result<Book> {
        match self.state.borrowed_books.get(&id) {
            None => return Err(not_borrowed(id, borrower, NotBorrowed::NoActiveLoan)),
            Some(loan) if loan.borrower != borrower => {
                return Err(not_borrowed(id, borrower, NotBorrowed::HeldByAnother))
            }
            Some(_) => {}
        }

        let mut next = self.state.clone();
        let Some(loan) = next.borrowed_books.shift_remove(&id) else {
            return Err(not_borrowed(id, borrower, NotBorrowed::NoActiveLoan));
        };
        next.books.push(loan.book.clone());
        self.commit(next)?;

        info!("{} returned book {}", borrower, id);
        Ok(loan.book)
    }

    /// Active loans, in the order they were made.
    pub fn loans(&self) -> impl ExactSizeIterator<Item = &Loan> + '_ {
        self.state.borrowed_books.values()
    }

    /// Where book `id` is, if it exists.
    pub fn status(&self, id: BookId) -> Option<BookStatus<'_>> {
        if let Some(book) = self.state.books.iter().find(|book| book.id == id) {
            return Some(BookStatus::Available(book));
        }
        self.state.borrowed_books.get(&id).map(BookStatus::OnLoan)
    }

    pub fn stats(&self) -> Stats {
        Stats {
            available: self.state.books.len(),
            on_loan: self.state.borrowed_books.len(),
            total: self.state.total(),
        }
    }

    fn unavailable_reason(&self, id: BookId) -> Unavailable {
        match self.state.borrowed_books.get(&id) {
            Some(loan) => Unavailable::OnLoan {
                borrower: loan.borrower.clone(),
            },
            None => Unavailable::Unknown,
        }
    }

    fn commit(&mut self, next: LedgerState) -> Result<()> {
        self.store.save(&next)?;
        self.state = next;
        Ok(())
    }
}

fn require_text(field: &str, value: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(LedgerError::InvalidInput(format!(
            "{} must not be empty",
            field
        )));
    }
    Ok(trimmed.to_string())
}

fn not_borrowed(id: BookId, borrower: &str, reason: NotBorrowed) -> LedgerError {
    LedgerError::NotBorrowedByUser {
        id,
        borrower: borrower.to_string(),
        reason,
    }
}
