//! The `diff-tsv` command: what still needs translating, and what the
//! original no longer contains.

use lockit::{ParseMode, formats::decode_text, reconcile};

use crate::report;
use crate::validation::{validate_directory_path, validate_file_path, validate_output_path};

/// Options for the diff-tsv command.
#[derive(Debug, Clone)]
pub struct DiffTsvOptions {
    pub path: String,
    pub language: String,
    pub original_language: String,
    pub changed_keys: Option<String>,
    pub output: String,
    pub removed_output: String,
    pub mode: ParseMode,
}

/// Run the diff-tsv command. Entries missing from the translation (or
/// listed as changed) go to `output`; entries the original dropped go to
/// `removed_output`.
pub fn run_diff_tsv_command(options: &DiffTsvOptions) -> Result<(), String> {
    validate_directory_path(&options.path)?;
    validate_output_path(&options.output)?;
    validate_output_path(&options.removed_output)?;

    let changed_keys = match &options.changed_keys {
        Some(path) => read_changed_keys(path)?,
        None => Vec::new(),
    };

    let files = report::read_tree_reported(&options.path, &options.language, options.mode)?;
    let originals =
        report::read_tree_reported(&options.path, &options.original_language, options.mode)?;

    let added = reconcile::diff_files(
        &files,
        &originals,
        &options.original_language,
        &changed_keys,
    );
    report::write_tsv_reported(&options.output, &added)?;

    let removed = reconcile::diff_files(&originals, &files, &options.language, &[]);
    report::write_tsv_reported(&options.removed_output, &removed)?;

    println!();
    println!("Done.");
    Ok(())
}

/// Reads a newline-separated key list, dropping empty lines.
fn read_changed_keys(path: &str) -> Result<Vec<String>, String> {
    validate_file_path(path)?;
    let bytes = std::fs::read(path).map_err(|e| format!("Failed to read {}: {}", path, e))?;
    Ok(decode_text(&bytes)
        .lines()
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}
