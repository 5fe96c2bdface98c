/// Paragraph identifiers (`w14:paraId`).
///
/// Identifier stamping is the one change extraction makes to a document:
/// a paragraph without an identifier receives a random 7-digit uppercase hex
/// token. Tagged paragraphs are never touched.
use crate::common::id::generate_para_id;
use crate::ooxml::docx::paragraph::{PARA_ID_ATTR, text_box_paragraph_path};
use crate::ooxml::docx::{Paragraph, XmlElement};

/// Return the identifier of `paragraph`, generating and storing one when it
/// has none.
///
/// Calling this again on the same paragraph returns the same identifier and
/// leaves the element unchanged.
pub fn assign_para_id(paragraph: &mut XmlElement) -> String {
    if let Some(existing) = paragraph.attr(PARA_ID_ATTR) {
        return existing.to_string();
    }
    let id = generate_para_id();
    paragraph.set_attr(PARA_ID_ATTR, &id);
    id
}

/// Read the identifier of `paragraph` without modifying it; empty when absent.
#[inline]
pub fn read_para_id(paragraph: &XmlElement) -> String {
    paragraph.attr(PARA_ID_ATTR).unwrap_or_default().to_string()
}

/// Stamp identifiers on every paragraph extraction will emit from `body`.
///
/// Visits the same paragraphs as the record walk: top-level paragraphs, or
/// their text box paragraphs when they hold text boxes, and table-cell
/// paragraphs when `include_table_cells` is set. Returns the number of
/// identifiers generated.
pub fn stamp_body(body: &mut XmlElement, include_table_cells: bool) -> usize {
    let mut generated = 0;
    let mut stamp = |p: &mut XmlElement| {
        if p.attr(PARA_ID_ATTR).is_none() {
            assign_para_id(p);
            generated += 1;
        }
    };

    for child in body.children_mut() {
        if child.is("w:p") {
            if Paragraph::new(child).has_text_box() {
                let path = text_box_paragraph_path(child);
                child.for_each_path_mut(path, &mut stamp);
            } else {
                stamp(child);
            }
        } else if child.is("w:tbl") && include_table_cells {
            stamp_table(child, &mut stamp);
        }
    }

    generated
}

fn stamp_table<F>(table: &mut XmlElement, stamp: &mut F)
where
    F: FnMut(&mut XmlElement),
{
    for row in table.children_mut().iter_mut().filter(|c| c.is("w:tr")) {
        for cell in row.children_mut().iter_mut().filter(|c| c.is("w:tc")) {
            for block in cell.children_mut() {
                if block.is("w:p") {
                    stamp(block);
                } else if block.is("w:tbl") {
                    stamp_table(block, stamp);
                }
            }
        }
    }
}
