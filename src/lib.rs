#![forbid(unsafe_code)]
//! Localization kit for `.loc` file trees.
//!
//! Parses and writes the loc format and its TSV-family interchange
//! documents, and reconciles them across languages: merged multi-language
//! views, translation diffs, update application, and key renames.
//! All processing happens through the shared [`LocFile`] model.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use lockit::{ParseMode, formats::tsv, reconcile, tree};
//!
//! // Export a tree's German files against their English originals.
//! let mut files = tree::read_tree("data/localization", "de", ParseMode::Lenient)?;
//! let originals = tree::read_tree("data/localization", "en", ParseMode::Lenient)?;
//! for warning in reconcile::insert_original(&mut files, &originals) {
//!     eprintln!("WARNING! {warning}");
//! }
//! tsv::write_to("export.txt", &files)?;
//! # Ok::<(), lockit::Error>(())
//! ```
//!
//! # Formats
//!
//! - **loc** (`formats::loc`): one `KEY [# comment]` header plus a braced
//!   value block per entry
//! - **TSV** (`formats::tsv`): flat 4-column interchange document for a
//!   translation round
//! - **Full TSV** (`formats::full_tsv`): merged document with one value
//!   column per language
//! - **Sheet** (`formats::sheet`): worksheet grid contract for external
//!   spreadsheet backends

pub mod error;
pub mod formats;
pub mod reconcile;
pub mod stats;
pub mod tree;
pub mod types;

// Re-export most used types for easy consumption
pub use crate::{
    error::Error,
    formats::ParseMode,
    reconcile::ReconcileWarning,
    types::{Entry, FullEntry, FullFile, LocFile},
};
