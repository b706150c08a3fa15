//! The `rename-keys` command: bulk key renames across a tree.

use std::collections::HashMap;

use lockit::{ParseMode, formats::decode_text, reconcile};

use crate::report;
use crate::validation::{validate_directory_path, validate_file_path};

/// Run the rename-keys command. The mapping file holds one
/// `OLD<TAB>NEW` pair per line; the tree is rewritten in place.
pub fn run_rename_keys_command(
    path: &str,
    language: &str,
    renames: &str,
    mode: ParseMode,
) -> Result<(), String> {
    validate_directory_path(path)?;
    validate_file_path(renames)?;

    let pairs = read_renames(renames)?;
    println!("Keys to rename:");
    for (old, new) in &pairs {
        println!("  - {} -> {}", old, new);
    }
    let map: HashMap<String, String> = pairs.into_iter().collect();

    let mut files = report::read_tree_reported(path, language, mode)?;
    let renamed = reconcile::rename_keys(&mut files, &map);
    report::write_tree_reported(path, &files)?;
    println!();
    println!("Renamed {} entry(ies).", renamed);
    println!("Done.");
    Ok(())
}

/// Reads the rename table: tab-separated pairs, empty fields dropped,
/// lines with fewer than two fields ignored. Later pairs win on
/// duplicate old keys.
fn read_renames(path: &str) -> Result<Vec<(String, String)>, String> {
    let bytes = std::fs::read(path).map_err(|e| format!("Failed to read {}: {}", path, e))?;
    let mut pairs = Vec::new();
    for line in decode_text(&bytes).lines() {
        let fields: Vec<&str> = line.split('\t').filter(|field| !field.is_empty()).collect();
        if fields.len() >= 2 {
            pairs.push((fields[0].to_string(), fields[1].to_string()));
        }
    }
    Ok(pairs)
}
