//! The `wordcount` command: entry and word statistics for a tree.

use lockit::{ParseMode, stats, tree};

use crate::report;
use crate::validation::validate_directory_path;

/// Run the wordcount command. With `--json` the statistics are printed as
/// a single JSON object and the scan narration is suppressed.
pub fn run_wordcount_command(path: &str, language: &str, json_output: bool) -> Result<(), String> {
    validate_directory_path(path)?;

    if json_output {
        let files = tree::read_tree(path, language, ParseMode::Lenient)
            .map_err(|e| format!("Failed to read tree {}: {}", path, e))?;
        let collected = stats::collect(&files);
        let body = serde_json::to_string_pretty(&collected).map_err(|e| e.to_string())?;
        println!("{}", body);
        return Ok(());
    }

    let files = report::read_tree_reported(path, language, ParseMode::Lenient)?;
    let collected = stats::collect(&files);
    println!();
    println!("Statistics:");
    println!("  - files: {}", collected.files);
    println!("  - entries: {}", collected.entries);
    println!("  - words: {}", collected.words);
    println!("  - longest entry: {}", collected.longest_entry);
    Ok(())
}
