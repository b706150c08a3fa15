//! Entry and word statistics over parsed files.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::types::LocFile;

// Word runs as translators count them, unicode-aware.
lazy_static! {
    static ref WORD_REGEX: Regex = Regex::new(r"\w+").unwrap();
}

/// Entry and word totals for a set of files.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct TreeStats {
    pub files: usize,
    pub entries: usize,
    pub words: usize,
    /// Word count of the wordiest single entry value.
    pub longest_entry: usize,
}

/// Counts the words in one text, where a word is any `\w+` run.
pub fn count_words(text: &str) -> usize {
    WORD_REGEX.find_iter(text).count()
}

/// Tallies entries and value words across `files`.
pub fn collect(files: &[LocFile]) -> TreeStats {
    let mut stats = TreeStats {
        files: files.len(),
        ..TreeStats::default()
    };
    for file in files {
        stats.entries += file.entries.len();
        for entry in &file.entries {
            let words = count_words(&entry.value);
            stats.words += words;
            stats.longest_entry = stats.longest_entry.max(words);
        }
    }
    stats
}
