//! Thesaurus ingestion: flat-file parsing and self-consistency filtering.
//!
//! This module turns a raw entry/synonym-list dictionary into a mapping that
//! is closed over its own vocabulary:
//! - Flat-file parsing of the grammalecte `.dat` format
//! - Removal of dangling synonym references

pub mod filter;
pub mod parser;

pub use filter::filter_dangling;
pub use parser::{RawMapping, parse_dat, parse_dat_file};
