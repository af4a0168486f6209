//! Command Line Interface for the Synograph thesaurus tools.
//!
//! This module provides the command-line interface functionality including
//! argument parsing, command execution, and output formatting.

pub mod args;
pub mod commands;
pub mod output;
