//! Heading bookmarks built on top of `lopdf`.

use std::collections::BTreeMap;

use lopdf::{Dictionary, Document, Object, ObjectId, StringFormat};
use thiserror::Error;

use crate::engine::HeadingAnchor;

/// Errors that can occur while embedding bookmarks into a rendered PDF document.
#[derive(Error, Debug)]
pub enum BookmarkError {
    /// The PDF bytes could not be parsed by `lopdf`.
    #[error("Failed to parse PDF bytes")]
    Parse(#[from] lopdf::Error),
    /// The updated document could not be serialized.
    #[error("Failed to write PDF bytes")]
    Write(#[from] std::io::Error),
    /// A required catalog entry was missing from the document trailer.
    #[error("PDF catalog entry is missing")]
    MissingCatalog,
    /// The catalog object was not a dictionary, preventing outline injection.
    #[error("PDF catalog entry is not a dictionary")]
    InvalidCatalog,
    /// A heading refers to a page that does not exist in the rendered document.
    #[error("Heading {heading_index} refers to missing page {page_number}")]
    MissingPage {
        heading_index: usize,
        page_number: usize,
    },
}

/// Adds a flat outline with one entry per drawn heading.
///
/// Each entry targets `/Dest [page /Fit]` for the page the heading first appeared on.  Headings
/// that were never drawn are skipped, and the input is returned unchanged when no entry remains.
pub fn apply_heading_bookmarks(
    pdf_bytes: &[u8],
    headings: &[HeadingAnchor],
) -> Result<Vec<u8>, BookmarkError> {
    let mut document = Document::load_mem(pdf_bytes)?;

    let pages = document.get_pages();
    let mut outline_entries = collect_outline_entries(&mut document, headings, &pages)?;

    if outline_entries.is_empty() {
        return Ok(pdf_bytes.to_vec());
    }

    let outlines_id = document.new_object_id();
    link_outline_entries(outlines_id, &mut document, &mut outline_entries);
    insert_outlines_root(outlines_id, &mut document, &outline_entries)?;

    let mut buffer = Vec::new();
    document.save_to(&mut buffer)?;
    Ok(buffer)
}

struct OutlineEntry {
    object_id: ObjectId,
    page_ref: ObjectId,
    title: String,
}

fn collect_outline_entries(
    document: &mut Document,
    headings: &[HeadingAnchor],
    pages: &BTreeMap<u32, ObjectId>,
) -> Result<Vec<OutlineEntry>, BookmarkError> {
    let mut entries = Vec::new();

    for (index, heading) in headings.iter().enumerate() {
        let Some(page_number) = heading.page else {
            continue;
        };
        let page_ref = u32::try_from(page_number)
            .ok()
            .and_then(|number| pages.get(&number).copied())
            .ok_or(BookmarkError::MissingPage {
                heading_index: index,
                page_number,
            })?;

        entries.push(OutlineEntry {
            object_id: document.new_object_id(),
            page_ref,
            title: heading.title.clone(),
        });
    }

    Ok(entries)
}

/// Encodes an outline title, switching to UTF-16BE for anything outside ASCII.
fn title_object(title: &str) -> Object {
    if title.is_ascii() {
        return Object::string_literal(title);
    }
    let mut bytes = vec![0xFE, 0xFF];
    for unit in title.encode_utf16() {
        bytes.extend_from_slice(&unit.to_be_bytes());
    }
    Object::String(bytes, StringFormat::Hexadecimal)
}

fn link_outline_entries(
    outlines_id: ObjectId,
    document: &mut Document,
    entries: &mut [OutlineEntry],
) {
    for index in 0..entries.len() {
        let mut dictionary = Dictionary::new();
        dictionary.set("Title", title_object(&entries[index].title));
        dictionary.set(
            "Dest",
            Object::Array(vec![
                Object::Reference(entries[index].page_ref),
                Object::Name("Fit".into()),
            ]),
        );
        dictionary.set("Parent", Object::Reference(outlines_id));

        if index > 0 {
            dictionary.set("Prev", Object::Reference(entries[index - 1].object_id));
        }

        if index + 1 < entries.len() {
            dictionary.set("Next", Object::Reference(entries[index + 1].object_id));
        }

        document
            .objects
            .insert(entries[index].object_id, Object::Dictionary(dictionary));
    }
}

fn insert_outlines_root(
    outlines_id: ObjectId,
    document: &mut Document,
    entries: &[OutlineEntry],
) -> Result<(), BookmarkError> {
    let catalog_id = document
        .trailer
        .get(b"Root")
        .and_then(Object::as_reference)
        .map_err(|_| BookmarkError::MissingCatalog)?;

    let mut dictionary = Dictionary::new();
    dictionary.set("Type", Object::Name("Outlines".into()));
    dictionary.set("Count", Object::Integer(entries.len() as i64));
    if let Some(first) = entries.first() {
        dictionary.set("First", Object::Reference(first.object_id));
    }
    if let Some(last) = entries.last() {
        dictionary.set("Last", Object::Reference(last.object_id));
    }

    let catalog = document
        .objects
        .get_mut(&catalog_id)
        .ok_or(BookmarkError::MissingCatalog)?
        .as_dict_mut()
        .map_err(|_| BookmarkError::InvalidCatalog)?;
    catalog.set("Outlines", Object::Reference(outlines_id));
    catalog.set("PageMode", Object::Name("UseOutlines".into()));

    document
        .objects
        .insert(outlines_id, Object::Dictionary(dictionary));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_titles_stay_literal() {
        assert!(matches!(
            title_object("Quick preface"),
            Object::String(bytes, StringFormat::Literal) if bytes == b"Quick preface"
        ));
    }

    #[test]
    fn unicode_titles_use_utf16_with_bom() {
        let Object::String(bytes, StringFormat::Hexadecimal) = title_object("Café") else {
            panic!("expected hexadecimal string");
        };
        assert_eq!(&bytes[..2], &[0xFE, 0xFF]);
        assert_eq!(bytes.len(), 2 + 4 * 2);
    }

    #[test]
    fn garbage_bytes_fail_to_parse() {
        let err = apply_heading_bookmarks(b"not a pdf", &[]).unwrap_err();
        assert!(matches!(err, BookmarkError::Parse(_)));
    }
}
