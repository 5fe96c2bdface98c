/// Block-level content of a document body or table cell.
use crate::ooxml::docx::element::XmlElement;
use crate::ooxml::docx::paragraph::Paragraph;
use crate::ooxml::docx::table::Table;
use crate::ooxml::error::{OoxmlError, Result};

/// A top-level unit of content: a paragraph or a table.
#[derive(Debug, Clone, Copy)]
pub enum Block<'a> {
    Paragraph(Paragraph<'a>),
    Table(Table<'a>),
}

/// Yield each paragraph and table child of `container`, in document order.
///
/// `container` must be a document body (`w:body`) or a table cell (`w:tc`).
/// Other direct children (section properties, bookmarks, content controls)
/// are skipped.
pub fn block_items(container: &XmlElement) -> Result<Vec<Block<'_>>> {
    if !(container.is("w:body") || container.is("w:tc")) {
        return Err(OoxmlError::UnsupportedContainer(container.name().to_string()));
    }

    Ok(container
        .children()
        .iter()
        .filter_map(|child| {
            if child.is("w:p") {
                Some(Block::Paragraph(Paragraph::new(child)))
            } else if child.is("w:tbl") {
                Some(Block::Table(Table::new(child)))
            } else {
                None
            }
        })
        .collect())
}
