//! Core types for the Shelfmark catalog

mod book;

pub use book::{Book, Year, STATUS_AVAILABLE, STATUS_CHECKED_OUT};
