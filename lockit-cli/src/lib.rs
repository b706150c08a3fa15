//! CLI library for testing purposes

pub mod chars;
pub mod create_tsv;
pub mod diff;
pub mod full_tsv;
pub mod rename;
pub mod report;
pub mod stats;
pub mod update;
pub mod validation;
