//! The `export-chars` command: the distinct non-ASCII characters a
//! language uses.
//!
//! Font tooling consumes the listing to build per-language glyph sets, so
//! the output keeps the original first-seen order rather than sorting.

use lockit::ParseMode;

use crate::report;
use crate::validation::{validate_directory_path, validate_output_path};

/// Run the export-chars command, writing an indexed character listing.
pub fn run_export_chars_command(
    path: &str,
    language: &str,
    output: Option<&str>,
) -> Result<(), String> {
    validate_directory_path(path)?;
    let output_name = match output {
        Some(name) => name.to_string(),
        None => format!("output_{}.txt", language),
    };
    validate_output_path(&output_name)?;

    let files = report::read_tree_reported(path, language, ParseMode::Lenient)?;

    let mut seen: Vec<char> = Vec::new();
    let mut listing = String::new();
    for file in &files {
        for entry in &file.entries {
            for character in entry.value.chars() {
                if (character as u32) >= 128 && !seen.contains(&character) {
                    println!("{} {}", character, character as u32);
                    let pad = if seen.len() < 10 { "     " } else { "    " };
                    listing.push_str(&format!(
                        "{}:{}{}    [{}]\n",
                        seen.len(),
                        pad,
                        character,
                        character as u32
                    ));
                    seen.push(character);
                }
            }
        }
    }

    std::fs::write(&output_name, listing)
        .map_err(|e| format!("Failed to write {}: {}", output_name, e))?;
    println!();
    println!("Exported {} character(s) to {}.", seen.len(), output_name);
    Ok(())
}
