//! Core data types for the book ledger.
//!
//! The serde layout of these types is the on-disk document format:
//! `{ "books": [...], "borrowed_books": { "<id>": { "book": ..., "user": ... } } }`.

use std::collections::HashSet;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{LedgerError, Result};

/// Book identifier. Positive, unique across available and borrowed books.
pub type BookId = u64;

/// A book record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Identifier assigned on creation
    pub id: BookId,

    /// Title, surrounding whitespace trimmed
    pub title: String,

    /// Author, surrounding whitespace trimmed
    pub author: String,
}

impl Book {
    /// Case-insensitive substring match on title or author.
    ///
    /// `needle` must already be lowercased.
    pub(crate) fn matches_lowercase(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle) || self.author.to_lowercase().contains(needle)
    }
}

/// An active loan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Loan {
    /// The book being held
    pub book: Book,

    /// Borrower name exactly as supplied
    #[serde(rename = "user")]
    pub borrower: String,
}

impl Loan {
    /// Id of the borrowed book.
    pub fn id(&self) -> BookId {
        self.book.id
    }
}

/// Where a book currently is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookStatus<'a> {
    Available(&'a Book),
    OnLoan(&'a Loan),
}

impl BookStatus<'_> {
    /// The book, wherever it is.
    pub fn book(&self) -> &Book {
        match self {
            BookStatus::Available(book) => book,
            BookStatus::OnLoan(loan) => &loan.book,
        }
    }
}

/// Full persisted state of a ledger.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerState {
    /// Books on the shelf, insertion order
    #[serde(default)]
    pub books: Vec<Book>,

    /// Active loans keyed by book id, insertion order
    #[serde(default)]
    pub borrowed_books: IndexMap<BookId, Loan>,
}

impl LedgerState {
    /// Total number of books ever added.
    pub fn total(&self) -> usize {
        self.books.len() + self.borrowed_books.len()
    }

    /// Id for the next book: total books ever added plus one.
    ///
    /// Only valid while books are never deleted.
    pub fn next_id(&self) -> BookId {
        self.total() as BookId + 1
    }

    /// Check the structural invariants of a loaded document.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::Corrupt` if:
    /// - An id is zero
    /// - An id appears more than once across books and loans
    /// - A loan's key differs from the id of the book it holds
    /// - The ids are not exactly `1..=total()`, which `next_id` relies on
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::with_capacity(self.total());

        for book in &self.books {
            Self::check_id(book.id, &mut seen)?;
        }
        for (key, loan) in &self.borrowed_books {
            if *key != loan.book.id {
                return Err(LedgerError::Corrupt(format!(
                    "loan key {} holds book {}",
                    key, loan.book.id
                )));
            }
            Self::check_id(loan.book.id, &mut seen)?;
        }

        // Unique positive ids fill 1..=total exactly when none is missing.
        let total = seen.len() as BookId;
        if let Some(missing) = (1..=total).find(|id| !seen.contains(id)) {
            return Err(LedgerError::Corrupt(format!(
                "book id {} is missing; ids must run from 1 to {}",
                missing, total
            )));
        }
        Ok(())
    }

    fn check_id(id: BookId, seen: &mut HashSet<BookId>) -> Result<()> {
        if id == 0 {
            return Err(LedgerError::Corrupt("book id 0 is not allowed".to_string()));
        }
        if !seen.insert(id) {
            return Err(LedgerError::Corrupt(format!("duplicate book id {}", id)));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(id: BookId, title: &str, author: &str) -> Book {
        Book {
            id,
            title: title.to_string(),
            author: author.to_string(),
        }
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let state: LedgerState = serde_json::from_str("{}").unwrap();
        assert!(state.books.is_empty());
        assert!(state.borrowed_books.is_empty());
        assert_eq!(state.next_id(), 1);
    }

    #[test]
    fn test_loan_key_is_stringified_id() {
        let mut state = LedgerState::default();
        state.borrowed_books.insert(
            7,
            Loan {
                book: book(7, "Dune", "Herbert"),
                borrower: "Alice".to_string(),
            },
        );
        let value = serde_json::to_value(&state).unwrap();
        assert_eq!(value["borrowed_books"]["7"]["user"], "Alice");
        assert_eq!(value["borrowed_books"]["7"]["book"]["title"], "Dune");
    }

    #[test]
    fn test_validate_rejects_duplicate_across_sets() {
        let mut state = LedgerState::default();
        state.books.push(book(1, "Dune", "Herbert"));
        state.borrowed_books.insert(
            1,
            Loan {
                book: book(1, "Dune", "Herbert"),
                borrower: "Alice".to_string(),
            },
        );
        assert!(matches!(state.validate(), Err(LedgerError::Corrupt(_))));
    }

    #[test]
    fn test_validate_rejects_mismatched_key() {
        let mut state = LedgerState::default();
        state.borrowed_books.insert(
            2,
            Loan {
                book: book(5, "Dune", "Herbert"),
                borrower: "Alice".to_string(),
            },
        );
        assert!(matches!(state.validate(), Err(LedgerError::Corrupt(_))));
    }

    #[test]
    fn test_validate_rejects_gap_in_ids() {
        let mut state = LedgerState::default();
        state.books.push(book(2, "1984", "Orwell"));
        match state.validate() {
            Err(LedgerError::Corrupt(msg)) => assert!(msg.contains("book id 1 is missing")),
            other => panic!("expected corrupt error, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_accepts_ids_split_across_sets() {
        let mut state = LedgerState::default();
        state.books.push(book(3, "Emma", "Austen"));
        state.books.push(book(1, "Dune", "Herbert"));
        state.borrowed_books.insert(
            2,
            Loan {
                book: book(2, "1984", "Orwell"),
                borrower: "Alice".to_string(),
            },
        );
        assert!(state.validate().is_ok());
        assert_eq!(state.next_id(), 4);
    }

    #[test]
    fn test_validate_rejects_zero_id() {
        let mut state = LedgerState::default();
        state.books.push(book(0, "Dune", "Herbert"));
        assert!(state.validate().is_err());
    }

    #[test]
    fn test_matches_title_or_author() {
        let b = book(1, "Dune", "Frank Herbert");
        assert!(b.matches_lowercase("dun"));
        assert!(b.matches_lowercase("herb"));
        assert!(b.matches_lowercase(""));
        assert!(!b.matches_lowercase("orwell"));
    }
}
