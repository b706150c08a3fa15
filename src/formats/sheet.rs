//! Worksheet contract for spreadsheet-based interchange.
//!
//! The actual workbook backend (cell styling, XLS/XLSX I/O) lives outside
//! this crate; what is fixed here is everything a backend must honor so
//! that spreadsheet and TSV documents stay row-for-row interchangeable:
//! the cell grid, the row styling classes, column widths, and the
//! soft-hyphen shield that keeps spreadsheet software from treating a
//! leading `-` as a formula.
//!
//! A backend renders [`build_sheet`]'s [`SheetDocument`] into a workbook,
//! and feeds the cells of columns A-D back through [`parse_rows`] to read
//! one.

use serde::{Deserialize, Serialize};

use crate::{
    formats::{SENTINEL, tsv},
    types::LocFile,
};

/// Width floor for the key column, in characters.
pub const KEY_COLUMN_MIN_WIDTH: usize = 10;

/// Fixed width for the translation, original, and comment columns.
pub const TEXT_COLUMN_WIDTH: usize = 40;

/// Shield character substituted for `-` in entry cells.
const SOFT_HYPHEN: char = '\u{00AD}';

/// Styling class of a worksheet row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SheetRowKind {
    /// Row 1 column captions; rendered bold.
    Title,
    /// Visual spacer row, no content.
    Blank,
    /// `###` sentinel row opening a file.
    FileHeader,
    /// Data row; rendered top-aligned with word wrap.
    Entry,
}

/// One worksheet row: columns A-D plus its styling class.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SheetRow {
    pub cells: [String; 4],
    pub kind: SheetRowKind,
}

impl SheetRow {
    fn new(cells: [String; 4], kind: SheetRowKind) -> Self {
        SheetRow { cells, kind }
    }

    fn blank() -> Self {
        SheetRow::new(Default::default(), SheetRowKind::Blank)
    }
}

/// A complete single-worksheet document ready for a workbook backend.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SheetDocument {
    /// Rows in worksheet order, starting at row 1.
    pub rows: Vec<SheetRow>,

    /// Column widths for columns A-D, in characters.
    pub column_widths: [usize; 4],
}

impl SheetDocument {
    /// The raw cell grid, as a backend reading a workbook would hand it
    /// back to [`parse_rows`].
    pub fn cell_rows(&self) -> Vec<[String; 4]> {
        self.rows.iter().map(|row| row.cells.clone()).collect()
    }
}

/// Lays files out as a worksheet, mirroring the TSV document layout:
/// title row, then per file a blank row, a `###` header row, another
/// blank row, and one row per entry.
pub fn build_sheet(files: &[LocFile]) -> SheetDocument {
    let mut rows = Vec::new();
    let mut longest_key = 0;

    rows.push(SheetRow::new(
        tsv::TITLE_ROW.map(String::from),
        SheetRowKind::Title,
    ));

    for file in files {
        rows.push(SheetRow::blank());
        let language = if file.language.is_empty() {
            SENTINEL.to_string()
        } else {
            file.language.clone()
        };
        rows.push(SheetRow::new(
            [
                SENTINEL.to_string(),
                SENTINEL.to_string(),
                language,
                file.reference_filename(),
            ],
            SheetRowKind::FileHeader,
        ));
        rows.push(SheetRow::blank());

        for entry in &file.entries {
            longest_key = longest_key.max(entry.key.chars().count());
            rows.push(SheetRow::new(
                [
                    shield(&entry.key),
                    shield(&entry.value),
                    shield(&entry.original),
                    shield(&entry.comment),
                ],
                SheetRowKind::Entry,
            ));
        }
    }

    SheetDocument {
        rows,
        column_widths: [
            longest_key.max(KEY_COLUMN_MIN_WIDTH),
            TEXT_COLUMN_WIDTH,
            TEXT_COLUMN_WIDTH,
            TEXT_COLUMN_WIDTH,
        ],
    }
}

/// Folds a worksheet's cell grid back into per-language files.
///
/// Row semantics are exactly [`crate::formats::tsv`]'s: `###` keys open
/// files, empty keys are spacers, anything before the first header is
/// dropped. The grid is rectangular by construction, so there is no
/// malformed-row policy to choose here.
pub fn parse_rows<I>(rows: I) -> Vec<LocFile>
where
    I: IntoIterator<Item = [String; 4]>,
{
    tsv::rows_to_files(rows.into_iter().map(|row| row.map(|cell| unshield(&cell))))
}

/// Entry cells swap `-` for a soft hyphen so spreadsheet software does
/// not read a leading dash as a formula.
fn shield(text: &str) -> String {
    text.replace('-', &SOFT_HYPHEN.to_string())
}

fn unshield(text: &str) -> String {
    text.replace(SOFT_HYPHEN, "-")
}
