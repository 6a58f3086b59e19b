//! Maintenance passes for the restaurant menu document.
//!
//! The tool is a set of single-pass batch transforms over one persisted
//! `menus.json`: ingredient correction plus resale price derivation
//! (`correct`), wholesale price refresh (`refresh`), description backfill
//! (`describe`) and document shape repair (`fix`). Every pass reads the whole
//! document into memory, mutates it, writes it back once, and leaves a
//! per-run report beside it.

pub mod cli;
pub mod config;
pub mod corrector;
pub mod document;
pub mod error;
pub mod fixup;
pub mod lexicon;
pub mod matcher;
pub mod pricelist;
pub mod pricer;
pub mod report;
pub mod rules;
