//! Narrated wrappers around the library's tree and TSV I/O.
//!
//! Every command walks the same arc: announce the scan, list what was
//! parsed, list what is written. These helpers keep that narration in one
//! place and convert library errors into the `Result<(), String>` shape
//! the commands report.

use lockit::{FullFile, LocFile, ParseMode, formats::full_tsv, formats::tsv, tree};

/// Prints the per-file listing used after every parse and write step.
pub fn print_files(files: &[LocFile]) {
    for file in files {
        println!("  - {}  ({} entries)", file.filename, file.entries.len());
    }
}

/// Reads a language's tree, narrating the scan and the parsed files.
pub fn read_tree_reported(
    path: &str,
    language: &str,
    mode: ParseMode,
) -> Result<Vec<LocFile>, String> {
    println!();
    println!("Checking for files...");
    println!("- path: {}", path);
    if !language.is_empty() {
        println!("- language: {}", language);
    }
    let files = tree::read_tree(path, language, mode)
        .map_err(|e| format!("Failed to read tree {}: {}", path, e))?;
    println!();
    println!("Parsing {} file(s)...", files.len());
    print_files(&files);
    Ok(files)
}

/// Reads a whole tree with per-file language inference, narrating like
/// [`read_tree_reported`].
pub fn read_tree_inferred_reported(path: &str, mode: ParseMode) -> Result<Vec<LocFile>, String> {
    println!();
    println!("Checking for files...");
    println!("- path: {}", path);
    let files = tree::read_tree_inferred(path, mode)
        .map_err(|e| format!("Failed to read tree {}: {}", path, e))?;
    println!();
    println!("Parsing {} file(s)...", files.len());
    print_files(&files);
    Ok(files)
}

/// Parses a 4-column TSV document, listing the files it contains.
pub fn read_tsv_reported(path: &str, mode: ParseMode) -> Result<Vec<LocFile>, String> {
    println!();
    println!("Parsing TSV file...");
    let files =
        tsv::read_from(path, mode).map_err(|e| format!("Failed to parse {}: {}", path, e))?;
    print_files(&files);
    Ok(files)
}

/// Writes a 4-column TSV document, listing the files going into it.
pub fn write_tsv_reported(path: &str, files: &[LocFile]) -> Result<(), String> {
    println!();
    println!("Writing output file...");
    print_files(files);
    tsv::write_to(path, files).map_err(|e| format!("Failed to write {}: {}", path, e))
}

/// Writes a full multi-language TSV document.
pub fn write_full_tsv_reported(path: &str, files: &[FullFile]) -> Result<(), String> {
    println!();
    println!("Writing output file...");
    for file in files {
        println!(
            "  - {}  ({} entries)",
            file.full_filename(),
            file.entries.len()
        );
    }
    full_tsv::write_to(path, files).map_err(|e| format!("Failed to write {}: {}", path, e))
}

/// Writes files back into a tree under `root`.
pub fn write_tree_reported(root: &str, files: &[LocFile]) -> Result<(), String> {
    println!();
    println!("Writing {} output file(s)...", files.len());
    print_files(files);
    tree::write_tree(root, files).map_err(|e| format!("Failed to write tree {}: {}", root, e))
}
