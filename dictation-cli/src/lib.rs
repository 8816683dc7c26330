//! Dictation CLI library
//!
//! This library provides the command-line interface for scoring dictation
//! answers against reference transcripts.

pub mod commands;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;

pub use error::{CliError, CliResult};
