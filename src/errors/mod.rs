//! Error types for scanning and parsing.
//!
//! Every failure carries the byte position it was detected at, plus a
//! name and an optional suggestion for display.

pub mod errors;
