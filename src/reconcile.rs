//! Cross-revision reconciliation of per-language files.
//!
//! Everything here is a pure transformation over [`LocFile`] sets: merging
//! languages into a [`FullFile`] view, overlaying original-language values,
//! diffing a translation against its source, applying translated updates,
//! and renaming keys. Missing counterparts during an overlay are reported
//! as [`ReconcileWarning`] values for the caller to render; they never
//! abort the run.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    error::Error,
    types::{Entry, FullEntry, FullFile, LocFile, qualified_filename},
};

/// A non-fatal mismatch found while overlaying original values.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReconcileWarning {
    /// No original-language file shares the reference filename.
    MissingFile { filename: String },
    /// The key exists in the translated file but not in its original.
    MissingKey { filename: String, key: String },
}

impl fmt::Display for ReconcileWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReconcileWarning::MissingFile { filename } => {
                write!(f, "no corresponding original file exists for `{filename}`")
            }
            ReconcileWarning::MissingKey { filename, key } => {
                write!(
                    f,
                    "key `{key}` exists in `{filename}` but not in the original"
                )
            }
        }
    }
}

/// Merges per-language files into one multi-language view per reference
/// filename.
///
/// Rules:
/// - Language order is `base_language` first, the rest sorted ascending.
/// - Reference filenames are deduplicated and sorted ascending.
/// - Keys are unioned in first-seen order across the group's languages.
/// - A language missing a file or a key contributes an empty value, so
///   every entry's values stay aligned to the language list.
/// - Comments come from the base-language entry when one exists.
///
/// Fails with [`Error::Config`] when no input file carries
/// `base_language`.
pub fn build_full_view(files: &[LocFile], base_language: &str) -> Result<Vec<FullFile>, Error> {
    let mut languages: Vec<String> = files.iter().map(|file| file.language.clone()).collect();
    languages.sort();
    languages.dedup();
    let Some(base_index) = languages.iter().position(|lang| lang == base_language) else {
        return Err(Error::config(format!(
            "base language `{base_language}` not found in input files"
        )));
    };
    let base = languages.remove(base_index);
    languages.insert(0, base);

    let mut filenames: Vec<String> = files.iter().map(LocFile::reference_filename).collect();
    filenames.sort();
    filenames.dedup();

    let mut views = Vec::new();
    for reference in &filenames {
        let group: Vec<Option<&LocFile>> = languages
            .iter()
            .map(|language| {
                files
                    .iter()
                    .find(|f| &f.language == language && &f.reference_filename() == reference)
            })
            .collect();

        let mut keys: Vec<&str> = Vec::new();
        for file in group.iter().flatten() {
            for entry in &file.entries {
                if !keys.contains(&entry.key.as_str()) {
                    keys.push(&entry.key);
                }
            }
        }

        let mut entries = Vec::new();
        for key in keys {
            let values = group
                .iter()
                .map(|file| {
                    file.and_then(|f| f.find_entry(key))
                        .map(|entry| entry.value.clone())
                        .unwrap_or_default()
                })
                .collect();
            let comment = group[0]
                .and_then(|f| f.find_entry(key))
                .map(|entry| entry.comment.clone())
                .unwrap_or_default();
            entries.push(FullEntry::new(key, values, comment));
        }

        let (path, filename) = split_reference(reference);
        views.push(FullFile {
            path,
            filename,
            languages: languages.clone(),
            entries,
        });
    }
    Ok(views)
}

/// Copies original-language values into the `original` slot of every
/// matching entry, pairing files by reference filename and entries by key.
/// Unmatched files and keys are left untouched and reported as warnings.
pub fn insert_original(files: &mut [LocFile], originals: &[LocFile]) -> Vec<ReconcileWarning> {
    let mut warnings = Vec::new();
    for file in files {
        let reference = file.reference_filename();
        let Some(original) = originals
            .iter()
            .find(|o| o.reference_filename() == reference)
        else {
            warnings.push(ReconcileWarning::MissingFile {
                filename: file.filename.clone(),
            });
            continue;
        };
        for entry in &mut file.entries {
            match original.find_entry(&entry.key) {
                Some(original_entry) => entry.original = original_entry.value.clone(),
                None => warnings.push(ReconcileWarning::MissingKey {
                    filename: file.filename.clone(),
                    key: entry.key.clone(),
                }),
            }
        }
    }
    warnings
}

/// Collects the entries of `originals` that still need translation work in
/// `files`: every key absent from the paired translated file, plus every
/// key listed in `changed_keys`.
///
/// Emitted entries carry an empty value, the original's value in the
/// `original` slot, and the original's comment. Output filenames are the
/// reference filename with `language` qualified back in; files with no
/// differences are dropped.
pub fn diff_files(
    files: &[LocFile],
    originals: &[LocFile],
    language: &str,
    changed_keys: &[String],
) -> Vec<LocFile> {
    let mut difference = Vec::new();
    for original in originals {
        let reference = original.reference_filename();
        let translated = files
            .iter()
            .find(|f| f.reference_filename() == reference)
            .map(|f| f.entries.as_slice())
            .unwrap_or(&[]);

        let mut file = LocFile::new(qualified_filename(&reference, language), language);
        for original_entry in &original.entries {
            let translated_entry = translated.iter().find(|e| e.key == original_entry.key);
            if translated_entry.is_none() || changed_keys.contains(&original_entry.key) {
                file.entries.push(Entry::new(
                    original_entry.key.clone(),
                    "",
                    original_entry.value.clone(),
                    original_entry.comment.clone(),
                ));
            }
        }
        if !file.entries.is_empty() {
            difference.push(file);
        }
    }
    difference
}

/// Applies translated `files` onto `originals`, returning only the files
/// an input file touched.
///
/// Values of existing keys are overwritten in place (original and comment
/// survive); new keys are appended; an input file with no original
/// counterpart becomes a fresh file under the language-qualified path.
/// Input files sharing one reference filename accumulate into a single
/// output file.
pub fn update_files(originals: &[LocFile], files: &[LocFile], language: &str) -> Vec<LocFile> {
    let mut updated: Vec<LocFile> = Vec::new();
    for file in files {
        let reference = file.reference_filename();
        let index = match updated
            .iter()
            .position(|u| u.reference_filename() == reference)
        {
            Some(index) => index,
            None => {
                let target = originals
                    .iter()
                    .find(|o| o.reference_filename() == reference)
                    .cloned()
                    .unwrap_or_else(|| {
                        LocFile::new(qualified_filename(&reference, language), language)
                    });
                updated.push(target);
                updated.len() - 1
            }
        };
        let target = &mut updated[index];
        for entry in &file.entries {
            match target.find_entry_mut(&entry.key) {
                Some(existing) => existing.value = entry.value.clone(),
                None => target.entries.push(entry.clone()),
            }
        }
    }
    updated.retain(|file| !file.entries.is_empty());
    updated
}

/// Renames every entry whose key appears in `renames`, across all files.
/// Returns the number of entries renamed.
pub fn rename_keys(files: &mut [LocFile], renames: &HashMap<String, String>) -> usize {
    let mut renamed = 0;
    for file in files {
        for entry in &mut file.entries {
            if let Some(new_key) = renames.get(&entry.key) {
                entry.key = new_key.clone();
                renamed += 1;
            }
        }
    }
    renamed
}

fn split_reference(reference: &str) -> (String, String) {
    match reference.rfind('/') {
        Some(pos) => (
            reference[..pos].to_string(),
            reference[pos + 1..].to_string(),
        ),
        None => (String::new(), reference.to_string()),
    }
}
