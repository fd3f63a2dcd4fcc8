//! JSON output formatting for books and loans.

use shelf_core::{Book, Loan};

/// Convert a book to JSON for output.
pub fn book_json(book: &Book) -> serde_json::Value {
    serde_json::json!({
        "id": book.id,
        "title": book.title,
        "author": book.author,
    })
}

/// Convert multiple books to a JSON array for output.
pub fn books_json<'a>(books: impl IntoIterator<Item = &'a Book>) -> serde_json::Value {
    serde_json::Value::Array(books.into_iter().map(book_json).collect())
}

/// Convert a loan to JSON for output, flattened with the borrower name.
pub fn loan_json(loan: &Loan) -> serde_json::Value {
    serde_json::json!({
        "id": loan.book.id,
        "title": loan.book.title,
        "author": loan.book.author,
        "borrower": loan.borrower,
    })
}

/// Convert multiple loans to a JSON array for output.
pub fn loans_json<'a>(loans: impl IntoIterator<Item = &'a Loan>) -> serde_json::Value {
    serde_json::Value::Array(loans.into_iter().map(loan_json).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loan_json_is_flat() {
        let loan = Loan {
            book: Book {
                id: 1,
                title: "Dune".to_string(),
                author: "Herbert".to_string(),
            },
            borrower: "Alice".to_string(),
        };
        let value = loan_json(&loan);
        assert_eq!(value["id"], 1);
        assert_eq!(value["title"], "Dune");
        assert_eq!(value["borrower"], "Alice");
    }

    #[test]
    fn test_books_json_keeps_order() {
        let books = vec![
            Book {
                id: 2,
                title: "1984".to_string(),
                author: "Orwell".to_string(),
            },
            Book {
                id: 1,
                title: "Dune".to_string(),
                author: "Herbert".to_string(),
            },
        ];
        let value = books_json(&books);
        assert_eq!(value[0]["id"], 2);
        assert_eq!(value[1]["id"], 1);
    }
}
