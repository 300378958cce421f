//! Formatting utilities

pub mod format;
