pub mod books;
pub mod loans;
pub mod menu;
pub mod misc;
