/// Block classification: decides which paragraphs a block contributes and
/// what kind of record each becomes.
use crate::ooxml::docx::{Block, Paragraph, Table};
use serde::Serialize;
use std::fmt;

/// Kind of a property record, as written in `ParaObjectType`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockType {
    Paragraph,
    TextBoxParagraph,
    LinkedImageParagraph,
    ShapeParagraph,
    TableCellParagraph,
}

impl BlockType {
    pub const fn as_str(self) -> &'static str {
        match self {
            BlockType::Paragraph => "paragraph",
            BlockType::TextBoxParagraph => "text_box_paragraph",
            BlockType::LinkedImageParagraph => "linked_image_paragraph",
            BlockType::ShapeParagraph => "shape_paragraph",
            BlockType::TableCellParagraph => "table_cell_paragraph",
        }
    }
}

impl fmt::Display for BlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of classifying one top-level block.
#[derive(Debug, Clone)]
pub enum Classified<'a> {
    /// A table; its paragraphs are only emitted on request
    Table(Table<'a>),
    /// A paragraph holding text boxes, replaced by the boxes' paragraphs
    TextBox(Vec<Paragraph<'a>>),
    /// A paragraph emitted as itself
    Paragraph(Paragraph<'a>, BlockType),
}

/// Classify a top-level block.
///
/// A paragraph with a text box expands into the text box paragraphs and is
/// not emitted itself. Any other paragraph is a linked image paragraph, else
/// a shape paragraph, else a plain paragraph.
pub fn classify(block: Block<'_>) -> Classified<'_> {
    match block {
        Block::Table(table) => Classified::Table(table),
        Block::Paragraph(para) if para.has_text_box() => {
            Classified::TextBox(para.text_box_paragraphs())
        },
        Block::Paragraph(para) => Classified::Paragraph(para, paragraph_type(&para)),
    }
}

/// Type of a paragraph without text boxes. Images take precedence over shapes.
pub fn paragraph_type(para: &Paragraph<'_>) -> BlockType {
    if para.has_inline_image() {
        BlockType::LinkedImageParagraph
    } else if para.has_inline_shape() {
        BlockType::ShapeParagraph
    } else {
        BlockType::Paragraph
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::docx::XmlElement;

    const IMAGE: &str = "<w:drawing><wp:inline><a:graphic><a:graphicData><pic:pic/></a:graphicData></a:graphic></wp:inline></w:drawing>";
    const SHAPE: &str = "<w:drawing><wp:inline><a:graphic><a:graphicData><dgm:relIds/></a:graphicData></a:graphic></wp:inline></w:drawing>";

    fn paragraph(inner: &str) -> XmlElement {
        XmlElement::parse(format!("<w:p>{inner}</w:p>").as_bytes()).unwrap()
    }

    #[test]
    fn test_image_wins_over_shape() {
        let p = paragraph(&format!("<w:r>{SHAPE}</w:r><w:r>{IMAGE}</w:r>"));
        assert_eq!(
            paragraph_type(&Paragraph::new(&p)),
            BlockType::LinkedImageParagraph
        );
    }

    #[test]
    fn test_shape_and_plain() {
        let p = paragraph(&format!("<w:r>{SHAPE}</w:r>"));
        assert_eq!(paragraph_type(&Paragraph::new(&p)), BlockType::ShapeParagraph);

        let p = paragraph("<w:r><w:t>plain</w:t></w:r>");
        assert_eq!(paragraph_type(&Paragraph::new(&p)), BlockType::Paragraph);
    }

    #[test]
    fn test_text_box_paragraph_expands() {
        let p = paragraph(&format!(
            "<w:r>{IMAGE}<w:pict><v:textbox><w:txbxContent><w:p><w:r><w:t>a</w:t></w:r></w:p><w:p/></w:txbxContent></v:textbox></w:pict></w:r>"
        ));
        match classify(Block::Paragraph(Paragraph::new(&p))) {
            Classified::TextBox(paras) => {
                assert_eq!(paras.len(), 2);
                assert_eq!(paras[0].text(), "a");
            },
            other => panic!("unexpected classification: {:?}", other),
        }
    }

    #[test]
    fn test_table_is_not_a_paragraph() {
        let tbl = XmlElement::parse(b"<w:tbl><w:tr><w:tc><w:p/></w:tc></w:tr></w:tbl>").unwrap();
        assert!(matches!(
            classify(Block::Table(Table::new(&tbl))),
            Classified::Table(_)
        ));
    }

    #[test]
    fn test_block_type_names() {
        assert_eq!(BlockType::LinkedImageParagraph.to_string(), "linked_image_paragraph");
        assert_eq!(
            serde_json::to_string(&BlockType::TextBoxParagraph).unwrap(),
            "\"text_box_paragraph\""
        );
    }
}
