//! Constants used throughout the CLI.

/// Exit codes for the CLI.
///
/// These follow common Unix conventions:
/// - 0: Success
/// - 1: General error (used by anyhow for unhandled errors)
/// - 2: Misuse of shell command (reserved by shells, used by clap)
/// - 3+: Application-specific errors
pub mod exit_codes {
    /// Borrow requested for a book that is not on the shelf.
    pub const NOT_AVAILABLE: i32 = 3;

    /// Return requested by someone who does not hold the loan.
    pub const NOT_BORROWED: i32 = 4;

    /// Invalid user input or arguments (including a non-numeric book id).
    pub const INVALID_INPUT: i32 = 5;

    /// Data file could not be parsed.
    pub const CORRUPT_DATA: i32 = 6;

    /// Book id does not exist.
    pub const NOT_FOUND: i32 = 7;
}
