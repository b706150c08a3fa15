//! Scanning and bulk I/O for `.loc` directory trees.
//!
//! Trees keep one subdirectory per language (`ui/de/menu.loc`,
//! `ui/en/menu.loc`). Scanning is recursive with two rules inherited from
//! the on-disk convention: `.svn` directories are skipped, and a directory
//! that directly contains matching files is taken as a leaf, so its
//! subdirectories are not searched. All listings are ordered by
//! [`natural_cmp`] to keep runs deterministic across platforms.

use std::cmp::Ordering;
use std::ffi::OsStr;
use std::fs;
use std::iter::Peekable;
use std::path::{Path, PathBuf};
use std::str::Chars;

use crate::{
    error::Error,
    formats::{ParseMode, loc},
    types::LocFile,
};

/// Compares strings with numeric awareness: runs of ASCII digits compare
/// by value, so `v2` sorts before `v10`.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut left = a.chars().peekable();
    let mut right = b.chars().peekable();
    loop {
        match (left.peek().copied(), right.peek().copied()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) if x.is_ascii_digit() && y.is_ascii_digit() => {
                match take_number(&mut left).cmp(&take_number(&mut right)) {
                    Ordering::Equal => {}
                    other => return other,
                }
            }
            (Some(x), Some(y)) => match x.cmp(&y) {
                Ordering::Equal => {
                    left.next();
                    right.next();
                }
                other => return other,
            },
        }
    }
}

fn take_number(chars: &mut Peekable<Chars>) -> u64 {
    let mut value: u64 = 0;
    while let Some(c) = chars.peek().copied() {
        let Some(digit) = c.to_digit(10) else { break };
        value = value.saturating_mul(10).saturating_add(u64::from(digit));
        chars.next();
    }
    value
}

/// Recursively collects the tree's `.loc` files (extension matched
/// case-insensitively).
///
/// A non-empty `language` keeps only files whose parent directory is named
/// after it (case-insensitively), which is how `de` selects
/// `ui/de/menu.loc` but not `ui/en/menu.loc`. Listings are natural-sorted
/// and the traversal is depth-first, so the result order is stable.
pub fn scan_tree(root: impl AsRef<Path>, language: &str) -> Result<Vec<PathBuf>, Error> {
    scan_directory(root.as_ref(), language)
}

fn scan_directory(dir: &Path, language: &str) -> Result<Vec<PathBuf>, Error> {
    let mut listing: Vec<PathBuf> = fs::read_dir(dir)?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<Result<_, _>>()?;
    listing.sort_by(|a, b| natural_cmp(&segment_name(a), &segment_name(b)));

    let mut files = Vec::new();
    let mut subdirs = Vec::new();
    for path in listing {
        if path.file_name().is_some_and(|name| name == ".svn") {
            continue;
        }
        if path.is_dir() {
            subdirs.push(path);
        } else if has_loc_extension(&path)
            && (language.is_empty() || directory_is_language(dir, language))
        {
            files.push(path);
        }
    }
    if !files.is_empty() {
        return Ok(files);
    }

    let mut collected = Vec::new();
    for subdir in subdirs {
        collected.extend(scan_directory(&subdir, language)?);
    }
    Ok(collected)
}

fn segment_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn has_loc_extension(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case(loc::EXTENSION))
}

fn directory_is_language(dir: &Path, language: &str) -> bool {
    dir.file_name()
        .and_then(OsStr::to_str)
        .is_some_and(|name| name.eq_ignore_ascii_case(language))
}

/// Parses every scanned file of a tree, tagging each with `language`
/// (empty means untagged). Stored filenames are root-relative with `/`
/// separators.
pub fn read_tree(
    root: impl AsRef<Path>,
    language: &str,
    mode: ParseMode,
) -> Result<Vec<LocFile>, Error> {
    let root = root.as_ref();
    let mut files = Vec::new();
    for path in scan_tree(root, language)? {
        let filename = relative_name(root, &path);
        files.push(loc::read_from(&path, filename, language, mode)?);
    }
    Ok(files)
}

/// Parses every `.loc` file of a tree, tagging each with the language its
/// path implies: the directory segment directly above the file, or the
/// empty string for files at the root.
pub fn read_tree_inferred(root: impl AsRef<Path>, mode: ParseMode) -> Result<Vec<LocFile>, Error> {
    let root = root.as_ref();
    let mut files = Vec::new();
    for path in scan_tree(root, "")? {
        let filename = relative_name(root, &path);
        let language = filename.rsplit('/').nth(1).unwrap_or_default().to_string();
        files.push(loc::read_from(&path, filename, language, mode)?);
    }
    Ok(files)
}

/// Writes each file under `root` at its stored filename, creating parent
/// directories as needed.
pub fn write_tree(root: impl AsRef<Path>, files: &[LocFile]) -> Result<(), Error> {
    let root = root.as_ref();
    for file in files {
        let path = root.join(&file.filename);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        loc::write_to(&path, file)?;
    }
    Ok(())
}

fn relative_name(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative
        .components()
        .map(|component| component.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Entry;
    use tempfile::TempDir;

    fn write_loc(root: &Path, filename: &str, body: &str) {
        let path = root.join(filename);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, format!("\u{feff}{body}")).unwrap();
    }

    const MENU_BODY: &str = "HELLO\n{\nHallo\n}\n";

    #[test]
    fn test_natural_cmp_orders_numeric_runs_by_value() {
        let mut names = vec!["v10", "v2", "v1"];
        names.sort_by(|a, b| natural_cmp(a, b));
        assert_eq!(names, vec!["v1", "v2", "v10"]);

        assert_eq!(natural_cmp("a2b", "a10b"), Ordering::Less);
        assert_eq!(natural_cmp("a10b", "a10c"), Ordering::Less);
        assert_eq!(natural_cmp("same", "same"), Ordering::Equal);
        assert_eq!(natural_cmp("v1", "v1x"), Ordering::Less);
        assert_eq!(natural_cmp("alpha", "beta"), Ordering::Less);
    }

    #[test]
    fn test_scan_tree_filters_by_language_directory() {
        let dir = TempDir::new().unwrap();
        write_loc(dir.path(), "ui/de/menu.loc", MENU_BODY);
        write_loc(dir.path(), "ui/en/menu.loc", MENU_BODY);

        let found = scan_tree(dir.path(), "de").unwrap();
        assert_eq!(found, vec![dir.path().join("ui/de/menu.loc")]);
    }

    #[test]
    fn test_scan_tree_skips_svn_directories() {
        let dir = TempDir::new().unwrap();
        write_loc(dir.path(), ".svn/de/junk.loc", MENU_BODY);
        write_loc(dir.path(), "ui/de/menu.loc", MENU_BODY);

        let found = scan_tree(dir.path(), "").unwrap();
        assert_eq!(found, vec![dir.path().join("ui/de/menu.loc")]);
    }

    #[test]
    fn test_scan_tree_matches_extension_and_language_case_insensitively() {
        let dir = TempDir::new().unwrap();
        write_loc(dir.path(), "ui/DE/MENU.LOC", MENU_BODY);
        write_loc(dir.path(), "ui/de/notes.txt", "not a loc file");

        let found = scan_tree(dir.path(), "de").unwrap();
        assert_eq!(found, vec![dir.path().join("ui/DE/MENU.LOC")]);
    }

    #[test]
    fn test_scan_tree_stops_at_directories_with_files() {
        let dir = TempDir::new().unwrap();
        write_loc(dir.path(), "en/a.loc", MENU_BODY);
        write_loc(dir.path(), "en/sub/b.loc", MENU_BODY);

        let found = scan_tree(dir.path(), "").unwrap();
        assert_eq!(found, vec![dir.path().join("en/a.loc")]);
    }

    #[test]
    fn test_scan_tree_orders_files_naturally() {
        let dir = TempDir::new().unwrap();
        write_loc(dir.path(), "en/v10.loc", MENU_BODY);
        write_loc(dir.path(), "en/v1.loc", MENU_BODY);
        write_loc(dir.path(), "en/v2.loc", MENU_BODY);

        let found = scan_tree(dir.path(), "en").unwrap();
        let names: Vec<String> = found.iter().map(|p| segment_name(p)).collect();
        assert_eq!(names, vec!["v1.loc", "v2.loc", "v10.loc"]);
    }

    #[test]
    fn test_scan_tree_missing_root_fails() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("not-there");
        assert!(matches!(
            scan_tree(&missing, "").unwrap_err(),
            Error::Io(_)
        ));
    }

    #[test]
    fn test_read_tree_tags_language_and_relative_filenames() {
        let dir = TempDir::new().unwrap();
        write_loc(dir.path(), "ui/de/menu.loc", MENU_BODY);

        let files = read_tree(dir.path(), "de", ParseMode::Lenient).unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].filename, "ui/de/menu.loc");
        assert_eq!(files[0].language, "de");
        assert_eq!(files[0].entries, vec![Entry::new("HELLO", "Hallo", "Hallo", "")]);
    }

    #[test]
    fn test_read_tree_inferred_tags_parent_directory() {
        let dir = TempDir::new().unwrap();
        write_loc(dir.path(), "ui/de/menu.loc", MENU_BODY);
        write_loc(dir.path(), "ui/en/menu.loc", "HELLO\n{\nHello\n}\n");

        let files = read_tree_inferred(dir.path(), ParseMode::Lenient).unwrap();
        let mut tags: Vec<(String, String)> = files
            .iter()
            .map(|f| (f.language.clone(), f.filename.clone()))
            .collect();
        tags.sort();
        assert_eq!(
            tags,
            vec![
                ("de".to_string(), "ui/de/menu.loc".to_string()),
                ("en".to_string(), "ui/en/menu.loc".to_string()),
            ]
        );
    }

    #[test]
    fn test_read_tree_inferred_root_level_files_have_no_language() {
        let dir = TempDir::new().unwrap();
        write_loc(dir.path(), "menu.loc", MENU_BODY);

        let files = read_tree_inferred(dir.path(), ParseMode::Lenient).unwrap();
        assert_eq!(files[0].language, "");
        assert_eq!(files[0].filename, "menu.loc");
    }

    #[test]
    fn test_write_tree_round_trips() {
        let dir = TempDir::new().unwrap();
        let files = vec![LocFile::with_entries(
            "ui/de/menu.loc",
            "de",
            vec![Entry::new("HELLO", "Hallo", "Hello", "greeting")],
        )];

        write_tree(dir.path(), &files).unwrap();

        let bytes = fs::read(dir.path().join("ui/de/menu.loc")).unwrap();
        assert!(bytes.starts_with("\u{feff}".as_bytes()));

        let read_back = read_tree(dir.path(), "de", ParseMode::Strict).unwrap();
        assert_eq!(read_back[0].filename, files[0].filename);
        assert_eq!(read_back[0].entries[0].key, "HELLO");
        assert_eq!(read_back[0].entries[0].value, "Hallo");
        // Serialization keeps the comment but folds original into value.
        assert_eq!(read_back[0].entries[0].comment, "greeting");
        assert_eq!(read_back[0].entries[0].original, "Hallo");
    }
}
