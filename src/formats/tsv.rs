//! Codec for the flat 4-column TSV interchange format.
//!
//! Every row is `key`, `value` (translation), `original`, `comment`,
//! tab-separated, each field quoted with `"` and doubled-quote escaping.
//! A row whose key is the `###` sentinel opens a new file: its original
//! column carries the language (`###` for none) and its comment column the
//! reference filename. Empty-key rows are visual spacers and are skipped,
//! as is anything before the first header row (which is how the document's
//! `"Key","Translation","Original","Comment"` title row disappears on
//! parse).

use std::io::Write;
use std::path::Path;

use crate::{
    error::Error,
    formats::{BOM, ParseMode, SENTINEL, decode_text},
    types::{Entry, LocFile},
};

/// Column separator for both TSV variants.
pub const DELIMITER: u8 = b'\t';

pub(crate) const TITLE_ROW: [&str; 4] = ["Key", "Translation", "Original", "Comment"];

/// Parses TSV text into the per-language files it describes.
pub fn parse(text: &str, mode: ParseMode) -> Result<Vec<LocFile>, Error> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .delimiter(DELIMITER)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        if record.len() != 4 {
            if mode.is_strict() {
                let line = record.position().map_or(0, |p| p.line() as usize);
                return Err(Error::malformed(
                    line,
                    format!("expected 4 columns, found {}", record.len()),
                ));
            }
            continue;
        }
        rows.push([
            record[0].to_string(),
            record[1].to_string(),
            record[2].to_string(),
            record[3].to_string(),
        ]);
    }

    Ok(rows_to_files(rows))
}

/// Folds 4-column rows into [`LocFile`]s.
///
/// This is the row state machine shared with the sheet codec, which is why
/// it takes plain rows rather than a CSV reader: the two formats must stay
/// row-for-row interchangeable.
pub(crate) fn rows_to_files<I>(rows: I) -> Vec<LocFile>
where
    I: IntoIterator<Item = [String; 4]>,
{
    let mut files = Vec::new();
    let mut current: Option<LocFile> = None;

    for [key, value, original, comment] in rows {
        if key == SENTINEL {
            if let Some(file) = current.take() {
                files.push(file);
            }
            let language = if original == SENTINEL {
                String::new()
            } else {
                original
            };
            current = Some(LocFile::new(comment, language));
        } else if key.is_empty() {
            // spacer row
        } else if let Some(file) = current.as_mut() {
            file.upsert_entry(Entry::new(key, value, original, comment));
        }
    }
    if let Some(file) = current.take() {
        files.push(file);
    }

    files
}

/// Serializes files as TSV rows into `writer`.
pub fn to_writer<W: Write>(files: &[LocFile], writer: W) -> Result<(), Error> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(DELIMITER)
        .quote_style(csv::QuoteStyle::Always)
        .from_writer(writer);

    writer.write_record(TITLE_ROW)?;
    for file in files {
        writer.write_record([""; 4])?;
        let language = if file.language.is_empty() {
            SENTINEL.to_string()
        } else {
            file.language.clone()
        };
        writer.write_record([
            SENTINEL.to_string(),
            SENTINEL.to_string(),
            language,
            file.reference_filename(),
        ])?;
        writer.write_record([""; 4])?;
        for entry in &file.entries {
            writer.write_record([&entry.key, &entry.value, &entry.original, &entry.comment])?;
        }
    }
    writer.flush()?;
    Ok(())
}

/// Serializes files to TSV text. The inverse of [`parse`] up to filename
/// normalization: parsed files carry reference filenames.
pub fn to_string(files: &[LocFile]) -> Result<String, Error> {
    let mut buffer = Vec::new();
    to_writer(files, &mut buffer)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

/// Reads and parses a TSV document from disk.
pub fn read_from(path: impl AsRef<Path>, mode: ParseMode) -> Result<Vec<LocFile>, Error> {
    let bytes = std::fs::read(path)?;
    parse(&decode_text(&bytes), mode)
}

/// Writes a TSV document to disk, prefixed with the UTF-8 byte-order-mark.
pub fn write_to(path: impl AsRef<Path>, files: &[LocFile]) -> Result<(), Error> {
    let mut writer = std::io::BufWriter::new(std::fs::File::create(path)?);
    writer.write_all(BOM.as_bytes())?;
    to_writer(files, &mut writer)?;
    writer.flush()?;
    Ok(())
}
