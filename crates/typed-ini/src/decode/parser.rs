use crate::decode::infer::infer;
use crate::decode::scanner::{self, LineKind, ParsedLine};
use crate::document::Document;
use crate::error::{Error, Result};
use crate::options::Options;

/// Index of the section that key/value lines are currently assigned to.
type Cursor = Option<usize>;

/// Build a [`Document`] from the whole input in one pass.
///
/// The scan is a fold over the classified lines carrying the index of the
/// current section; a key/value line before any header aborts the parse.
pub fn parse_document(input: &str, options: &Options) -> Result<Document> {
    let mut doc = Document::default();
    scanner::iter(input).try_fold(None, |cursor, line| {
        apply_line(&mut doc, cursor, &line, options)
    })?;
    tracing::debug!(sections = doc.len(), "parsed document");
    Ok(doc)
}

fn apply_line(
    doc: &mut Document,
    cursor: Cursor,
    line: &ParsedLine<'_>,
    options: &Options,
) -> Result<Cursor> {
    match line.kind {
        LineKind::Ignored => Ok(cursor),
        LineKind::Section { name } => Ok(Some(open_section(doc, name, line.number))),
        LineKind::KeyValue { key, value } => {
            insert_entry(doc, cursor, line.number, key, value, options)?;
            Ok(cursor)
        }
        LineKind::SectionAndKeyValue { name, key, value } => {
            let cursor = Some(open_section(doc, name, line.number));
            insert_entry(doc, cursor, line.number, key, value, options)?;
            Ok(cursor)
        }
    }
}

fn open_section(doc: &mut Document, name: &str, line: usize) -> usize {
    let (idx, created) = doc.open_section(name);
    if created {
        tracing::trace!(line, section = name, "opened section");
    } else {
        tracing::trace!(line, section = name, "reopened section");
    }
    idx
}

fn insert_entry(
    doc: &mut Document,
    cursor: Cursor,
    line: usize,
    key: &str,
    value: &str,
    options: &Options,
) -> Result<()> {
    let Some(idx) = cursor else {
        return Err(Error::NoActiveSection {
            line,
            key: key.to_owned(),
        });
    };
    let (key, value) = if options.trim_whitespace {
        (trim_ascii(key), trim_ascii(value))
    } else {
        (key, value)
    };
    if key.is_empty() {
        tracing::debug!(line, "skipped key that is blank after trimming");
        return Ok(());
    }
    let value = infer(value, line)?;
    let kind = value.kind();
    let section = doc.section_mut(idx);
    if section.upsert(key.to_owned(), value) {
        tracing::trace!(line, section = section.name(), key, %kind, "overwrote key");
    } else {
        tracing::trace!(line, section = section.name(), key, %kind, "inserted key");
    }
    Ok(())
}

fn trim_ascii(s: &str) -> &str {
    s.trim_matches([' ', '\t'])
}
