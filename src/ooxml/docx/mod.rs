/// Word (.docx) document support.
///
/// This module provides the read-side model of Microsoft Word documents in
/// the Office Open XML (OOXML) format that formatting resolution works on.
///
/// # Architecture
///
/// The module is organized around these key types:
/// - `Package`: The overall .docx file package
/// - `Document`: The body tree with its styles, numbering and theme parts
/// - `XmlElement`: The owned element tree backing every view
/// - `Paragraph`, `Run`: Borrowed views with text and formatting accessors
/// - `Table`: A table with rows and cells
/// - `Styles`, `Numbering`, `Theme`: Side parts consulted by the cascade
///
/// # Example
///
/// ```rust,no_run
/// use paraprops::ooxml::docx::Package;
///
/// // Open a document
/// let package = Package::open("document.docx")?;
/// let doc = package.document()?;
///
/// // Access paragraphs and runs
/// for para in doc.paragraphs()? {
///     println!("Paragraph: {}", para.text());
///     for run in para.runs() {
///         println!("  Run: {} (bold: {:?})", run.text(), run.format().bold()?);
///     }
/// }
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub mod block;
pub mod document;
pub mod element;
pub mod enums;
pub mod format;
pub mod numbering;
pub mod package;
pub mod paragraph;
pub mod styles;
pub mod table;
pub mod theme;

pub use block::{Block, block_items};
pub use document::Document;
pub use element::XmlElement;
pub use enums::{BorderEdge, WdLineSpacingRule, WdParagraphAlignment, WdStyleType, WdUnderline};
pub use format::{LineSpacing, NumberingRef, ParagraphFormat, RunFormat};
pub use numbering::{Numbering, NumberingEntry, NumberingTable};
pub use package::Package;
pub use paragraph::{Paragraph, Run, RunText};
pub use styles::{Style, Styles};
pub use table::{Cell, Row, Table};
pub use theme::{Theme, ThemeFonts};
