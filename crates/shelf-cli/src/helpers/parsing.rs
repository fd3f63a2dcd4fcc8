//! Parsing helpers for book ids, free text, and output format.

use shelf_core::BookId;

use crate::errors::CliError;

/// Parse a book id typed by the user.
///
/// Accepts a positive whole number with optional surrounding whitespace.
pub fn parse_book_id(raw: &str) -> Result<BookId, CliError> {
    match raw.trim().parse::<BookId>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(CliError::invalid_identifier_format(raw.trim())),
    }
}

/// Require non-blank text for a named field.
pub fn require_text(field: &str, value: &str) -> Result<String, CliError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CliError::invalid_input(format!("{} cannot be empty", field)));
    }
    Ok(trimmed.to_string())
}

/// Check a `--format` value.
pub fn validate_format(value: Option<&str>) -> Result<Option<&str>, CliError> {
    match value {
        None | Some("table") | Some("plain") => Ok(value),
        Some(other) => Err(CliError::invalid_input(format!(
            "Invalid format: {} (use table or plain)",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_book_id() {
        assert_eq!(parse_book_id("7").unwrap(), 7);
        assert_eq!(parse_book_id(" 12 ").unwrap(), 12);
    }

    #[test]
    fn test_parse_book_id_rejects_non_numbers() {
        for raw in ["abc", "", "1.5", "-3", "0", "1e3"] {
            assert!(
                matches!(parse_book_id(raw), Err(CliError::InvalidIdentifierFormat(_))),
                "{:?} should be rejected",
                raw
            );
        }
    }

    #[test]
    fn test_require_text() {
        assert_eq!(require_text("Title", " Dune ").unwrap(), "Dune");
        assert!(require_text("Title", "   ").is_err());
    }

    #[test]
    fn test_validate_format() {
        assert_eq!(validate_format(Some("plain")).unwrap(), Some("plain"));
        assert_eq!(validate_format(None).unwrap(), None);
        assert!(validate_format(Some("csv")).is_err());
    }
}
