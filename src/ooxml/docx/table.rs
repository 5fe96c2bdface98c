/// Table, Row, and Cell views for Word documents.
use crate::ooxml::docx::block::{Block, block_items};
use crate::ooxml::docx::element::XmlElement;
use crate::ooxml::docx::paragraph::Paragraph;
use crate::ooxml::error::Result;
use smallvec::SmallVec;

/// A table in a Word document.
///
/// Represents a `<w:tbl>` element. Tables contain rows, which contain cells,
/// which contain paragraphs and nested tables.
///
/// # Example
///
/// ```rust,ignore
/// for row in table.rows() {
///     for cell in row.cells() {
///         println!("{}", cell.text());
///     }
/// }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Table<'a> {
    element: &'a XmlElement,
}

impl<'a> Table<'a> {
    #[inline]
    pub fn new(element: &'a XmlElement) -> Self {
        Self { element }
    }

    /// Get the number of rows in this table.
    pub fn row_count(&self) -> usize {
        self.element.children_named("w:tr").count()
    }

    /// Rows in document order.
    pub fn rows(&self) -> SmallVec<[Row<'a>; 16]> {
        self.element.children_named("w:tr").map(Row::new).collect()
    }

    /// Every paragraph inside the table, row by row and cell by cell,
    /// descending into nested tables.
    pub fn paragraphs(&self) -> Result<Vec<Paragraph<'a>>> {
        let mut out = Vec::new();
        self.collect_paragraphs(&mut out)?;
        Ok(out)
    }

    fn collect_paragraphs(&self, out: &mut Vec<Paragraph<'a>>) -> Result<()> {
        for row in self.rows() {
            for cell in row.cells() {
                for block in cell.blocks()? {
                    match block {
                        Block::Paragraph(p) => out.push(p),
                        Block::Table(t) => t.collect_paragraphs(out)?,
                    }
                }
            }
        }
        Ok(())
    }
}

/// A row in a table (`w:tr`).
#[derive(Debug, Clone, Copy)]
pub struct Row<'a> {
    element: &'a XmlElement,
}

impl<'a> Row<'a> {
    #[inline]
    pub fn new(element: &'a XmlElement) -> Self {
        Self { element }
    }

    /// Cells in document order.
    pub fn cells(&self) -> SmallVec<[Cell<'a>; 16]> {
        self.element.children_named("w:tc").map(Cell::new).collect()
    }
}

/// A cell in a table row (`w:tc`).
#[derive(Debug, Clone, Copy)]
pub struct Cell<'a> {
    element: &'a XmlElement,
}

impl<'a> Cell<'a> {
    #[inline]
    pub fn new(element: &'a XmlElement) -> Self {
        Self { element }
    }

    /// Paragraphs and nested tables of this cell.
    pub fn blocks(&self) -> Result<Vec<Block<'a>>> {
        block_items(self.element)
    }

    /// Text of the cell's direct paragraphs, separated by newlines.
    pub fn text(&self) -> String {
        self.element
            .children_named("w:p")
            .map(|p| Paragraph::new(p).text())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
