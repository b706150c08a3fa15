//! The `create-full-tsv` and `extract-tsv` commands for the merged
//! multi-language document.

use lockit::{ParseMode, formats::full_tsv, reconcile};

use crate::report;
use crate::validation::{validate_directory_path, validate_file_path, validate_output_path};

/// Run the create-full-tsv command: merge every language of a tree into
/// one multi-column document with the base language leading.
pub fn run_create_full_tsv_command(
    path: &str,
    base_language: &str,
    output: &str,
    mode: ParseMode,
) -> Result<(), String> {
    validate_directory_path(path)?;
    validate_output_path(output)?;

    let files = report::read_tree_inferred_reported(path, mode)?;
    let views = reconcile::build_full_view(&files, base_language).map_err(|e| e.to_string())?;
    report::write_full_tsv_reported(output, &views)?;
    println!();
    println!("Done.");
    Ok(())
}

/// Run the extract-tsv command: split a full TSV document back into a
/// per-language `.loc` tree.
pub fn run_extract_tsv_command(
    input: &str,
    output_path: &str,
    mode: ParseMode,
) -> Result<(), String> {
    validate_file_path(input)?;

    println!();
    println!("Parsing TSV file...");
    let files =
        full_tsv::read_from(input, mode).map_err(|e| format!("Failed to parse {}: {}", input, e))?;
    report::print_files(&files);

    report::write_tree_reported(output_path, &files)?;
    println!();
    println!("Done.");
    Ok(())
}
