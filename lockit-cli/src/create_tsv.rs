//! The `create-tsv` command: export one language into a flat TSV document.

use lockit::{ParseMode, reconcile};

use crate::report;
use crate::validation::{validate_directory_path, validate_output_path};

/// Run the create-tsv command: export a language's tree, optionally
/// overlaying a second language's values as the Original column.
pub fn run_create_tsv_command(
    path: &str,
    language: &str,
    original_language: &str,
    output: &str,
    mode: ParseMode,
) -> Result<(), String> {
    validate_directory_path(path)?;
    validate_output_path(output)?;

    let mut files = report::read_tree_reported(path, language, mode)?;
    if original_language != language {
        let originals = report::read_tree_reported(path, original_language, mode)?;
        for warning in reconcile::insert_original(&mut files, &originals) {
            println!("WARNING! {}", warning);
        }
    }
    report::write_tsv_reported(output, &files)?;
    println!();
    println!("Done.");
    Ok(())
}
