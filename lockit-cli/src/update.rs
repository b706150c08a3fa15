//! The `update-loc` command: apply a translated TSV document onto an
//! original tree.

use lockit::{ParseMode, reconcile};

use crate::report;
use crate::validation::{validate_directory_path, validate_file_path};

/// Run the update-loc command. The original tree provides the files and
/// entry order; the TSV document provides the new values; the result is
/// written under `path`.
pub fn run_update_loc_command(
    path: &str,
    input: &str,
    original_path: &str,
    original_language: &str,
    mode: ParseMode,
) -> Result<(), String> {
    validate_file_path(input)?;
    validate_directory_path(original_path)?;

    let originals = report::read_tree_reported(original_path, original_language, mode)?;
    let incoming = report::read_tsv_reported(input, mode)?;
    let updated = reconcile::update_files(&originals, &incoming, original_language);
    report::write_tree_reported(path, &updated)?;
    println!();
    println!("Done.");
    Ok(())
}
