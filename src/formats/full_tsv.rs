//! Codec for the merged multi-language TSV format.
//!
//! One row per key, one column per language: `key`, `comment`, then a
//! value column for each language in the document's language order. The
//! language order is fixed for the whole document by the first `###`
//! header row; every later header row repeats it but only its reference
//! filename (column 1) is used. Parsing fans each header out into one
//! [`LocFile`] per language, with the language segment inserted into the
//! filename, so a full document extracts straight back into a `.loc`
//! tree.

use std::io::Write;
use std::path::Path;

use crate::{
    error::Error,
    formats::{BOM, ParseMode, SENTINEL, decode_text, tsv::DELIMITER},
    types::{Entry, FullFile, LocFile, qualified_filename},
};

/// Parses full-TSV text into per-language files.
///
/// Each data row becomes one entry per language: that language's column
/// as `value`, the base-language column (first value column) as
/// `original`, and column 1 as `comment`. A document with no `###`
/// header rows parses to no files, so a title-only document reads back
/// as empty.
pub fn parse(text: &str, mode: ParseMode) -> Result<Vec<LocFile>, Error> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .delimiter(DELIMITER)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut column_count: Option<usize> = None;
    let mut languages: Vec<String> = Vec::new();
    let mut files: Vec<LocFile> = Vec::new();
    let mut group: Vec<LocFile> = Vec::new();

    for result in reader.records() {
        let record = result?;
        let count = *column_count.get_or_insert(record.len());
        if record.len() != count {
            if mode.is_strict() {
                let line = record.position().map_or(0, |p| p.line() as usize);
                return Err(Error::malformed(
                    line,
                    format!("expected {count} columns, found {}", record.len()),
                ));
            }
            continue;
        }

        let key = &record[0];
        if key == SENTINEL {
            if count < 3 {
                return Err(Error::DataMismatch(format!(
                    "full TSV needs at least 3 columns, found {count}"
                )));
            }
            files.append(&mut group);
            if languages.is_empty() {
                languages = record.iter().skip(2).map(str::to_string).collect();
            }
            let reference = &record[1];
            for language in &languages {
                group.push(LocFile::new(
                    qualified_filename(reference, language),
                    language.clone(),
                ));
            }
        } else if !key.is_empty() {
            for (i, file) in group.iter_mut().enumerate() {
                file.upsert_entry(Entry::new(key, &record[2 + i], &record[2], &record[1]));
            }
        }
    }
    files.append(&mut group);

    Ok(files)
}

/// Serializes full files as merged TSV rows into `writer`.
///
/// All files must share one language set (a [`FullFile`] group built by
/// [`crate::reconcile::build_full_view`] always does).
pub fn to_writer<W: Write>(files: &[FullFile], writer: W) -> Result<(), Error> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(DELIMITER)
        .quote_style(csv::QuoteStyle::Always)
        .from_writer(writer);

    let languages: &[String] = files.first().map_or(&[], |f| f.languages.as_slice());
    let width = 2 + languages.len();

    let mut title = vec!["Key".to_string(), "Comment".to_string()];
    title.extend(languages.iter().cloned());
    writer.write_record(&title)?;

    for file in files {
        if file.languages.as_slice() != languages {
            return Err(Error::DataMismatch(format!(
                "file `{}` does not share the document language set",
                file.full_filename()
            )));
        }

        writer.write_record(vec![String::new(); width])?;
        let mut header = vec![SENTINEL.to_string(), file.full_filename()];
        header.extend(languages.iter().cloned());
        writer.write_record(&header)?;
        writer.write_record(vec![String::new(); width])?;

        for entry in &file.entries {
            if entry.values.len() != languages.len() {
                return Err(Error::DataMismatch(format!(
                    "entry `{}` carries {} values for {} languages",
                    entry.key,
                    entry.values.len(),
                    languages.len()
                )));
            }
            let mut row = vec![entry.key.clone(), entry.comment.clone()];
            row.extend(entry.values.iter().cloned());
            writer.write_record(&row)?;
        }
    }
    writer.flush()?;
    Ok(())
}

/// Serializes full files to merged TSV text.
pub fn to_string(files: &[FullFile]) -> Result<String, Error> {
    let mut buffer = Vec::new();
    to_writer(files, &mut buffer)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

/// Reads and parses a full-TSV document from disk.
pub fn read_from(path: impl AsRef<Path>, mode: ParseMode) -> Result<Vec<LocFile>, Error> {
    let bytes = std::fs::read(path)?;
    parse(&decode_text(&bytes), mode)
}

/// Writes a full-TSV document to disk, prefixed with the UTF-8
/// byte-order-mark.
pub fn write_to(path: impl AsRef<Path>, files: &[FullFile]) -> Result<(), Error> {
    let mut writer = std::io::BufWriter::new(std::fs::File::create(path)?);
    writer.write_all(BOM.as_bytes())?;
    to_writer(files, &mut writer)?;
    writer.flush()?;
    Ok(())
}
