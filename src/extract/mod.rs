//! Paragraph property extraction.
//!
//! Resolves the effective formatting of every paragraph of a Word document
//! and renders one record per paragraph.
//!
//! # Pipeline
//!
//! 1. Missing paragraph identifiers are stamped into the document body
//!    ([`identity`]).
//! 2. The numbering table and theme fonts are built once per document.
//! 3. Top-level blocks are classified in document order ([`classify`]).
//! 4. Each emitted paragraph is resolved through the style cascade
//!    ([`cascade`]) into a [`ParagraphProperties`] record.
//! 5. The records are rendered as XML ([`serialize`]) or JSON ([`json`]).
//!
//! # Example
//!
//! ```rust,no_run
//! use paraprops::extract::{ExtractOptions, extract_docx_properties};
//!
//! let xml = extract_docx_properties("report.docx", &ExtractOptions::default())?;
//! println!("{}", xml);
//! # Ok::<(), paraprops::Error>(())
//! ```
pub mod cascade;
pub mod classify;
pub mod identity;
pub mod json;
pub mod options;
pub mod record;
pub mod serialize;

pub use cascade::StyleCascade;
pub use classify::{BlockType, Classified, classify};
pub use identity::{assign_para_id, read_para_id};
pub use options::{ExtractOptions, OutputFormat};
pub use record::{Border, FIELD_COUNT, FIELD_NAMES, FieldValue, ParagraphProperties, Shading, SmallCaps};

use crate::common::{Error, Result};
use crate::ooxml::docx::{Document, Package, Paragraph};
use std::path::Path;

/// Resolve the property records of a loaded document, in document order.
///
/// Unless disabled in `options`, paragraphs without a `w14:paraId` receive
/// a generated one in `document` first.
pub fn extract_properties(
    document: &mut Document,
    options: &ExtractOptions,
) -> Result<Vec<ParagraphProperties>> {
    if options.assign_missing_ids {
        let generated = identity::stamp_body(document.body_mut()?, options.include_table_cells);
        log::debug!("Generated {} paragraph identifiers", generated);
    }
    let document = &*document;

    let numbering = document.numbering_table();
    let theme = document.theme_fonts();
    log::debug!(
        "Side tables: {} numbering rows, major font {:?}, minor font {:?}",
        numbering.len(),
        theme.major_font,
        theme.minor_font
    );
    let cascade = StyleCascade::new(document.styles(), &numbering, &theme);

    let mut records = Vec::new();

    for (index, block) in document.blocks()?.into_iter().enumerate() {
        match classify(block) {
            Classified::Table(table) if options.include_table_cells => {
                for para in table.paragraphs()? {
                    emit(&mut records, &cascade, para, BlockType::TableCellParagraph);
                }
            },
            Classified::Table(table) => {
                log::debug!("Block {}: skipping table with {} rows", index, table.row_count());
            },
            Classified::TextBox(paras) => {
                log::debug!("Block {}: {} text box paragraphs", index, paras.len());
                for para in paras {
                    emit(&mut records, &cascade, para, BlockType::TextBoxParagraph);
                }
            },
            Classified::Paragraph(para, object_type) => {
                log::debug!("Block {}: {}", index, object_type);
                emit(&mut records, &cascade, para, object_type);
            },
        }
    }

    log::info!("Extracted {} paragraph records", records.len());
    Ok(records)
}

fn emit<'a>(
    records: &mut Vec<ParagraphProperties>,
    cascade: &StyleCascade<'a>,
    para: Paragraph<'a>,
    object_type: BlockType,
) {
    let hex_id = identity::read_para_id(para.element());
    let para_id = records.len() + 1;
    records.push(cascade.properties(para, para_id, object_type, hex_id));
}

/// Render records in the format chosen by `options`.
pub fn render(records: &[ParagraphProperties], options: &ExtractOptions) -> Result<String> {
    let output = match options.output {
        OutputFormat::Xml => serialize::to_xml(records, options),
        OutputFormat::Json { pretty } => json::to_json(records, pretty)?,
    };
    log::info!("Rendered {} records ({} bytes)", records.len(), output.len());
    Ok(output)
}

/// Open a .docx file, extract its records and render them.
///
/// Fails when the path is empty or does not exist, when the file is not a
/// readable Word package, or when its main document is malformed.
pub fn extract_docx_properties<P: AsRef<Path>>(path: P, options: &ExtractOptions) -> Result<String> {
    let path = path.as_ref();
    if path.as_os_str().is_empty() || !path.exists() {
        return Err(Error::NotFound(path.display().to_string()));
    }

    log::info!("Opening {}", path.display());
    let mut document = Package::open(path)?.document()?;
    let records = extract_properties(&mut document, options)?;
    render(&records, options)
}

/// Extract and render records from the bytes of a .docx archive.
pub fn extract_docx_bytes(bytes: Vec<u8>, options: &ExtractOptions) -> Result<String> {
    let mut document = Package::from_bytes(bytes)?.document()?;
    let records = extract_properties(&mut document, options)?;
    render(&records, options)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn document(body: &str) -> Document {
        let xml = format!(
            r#"<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>{body}<w:sectPr/></w:body></w:document>"#
        );
        Document::from_parts(xml.as_bytes(), None, None, &[]).unwrap()
    }

    const TEXT_BOX: &str = r#"<w:p><w:r><w:t>anchor</w:t><w:pict><v:shape><v:textbox><w:txbxContent><w:p><w:r><w:t>boxed one</w:t></w:r></w:p><w:p><w:r><w:t>boxed two</w:t></w:r></w:p></w:txbxContent></v:textbox></v:shape></w:pict></w:r></w:p>"#;
    const TABLE: &str = r#"<w:tbl><w:tr><w:tc><w:p><w:r><w:t>cell</w:t></w:r></w:p></w:tc></w:tr></w:tbl>"#;

    #[test]
    fn test_records_follow_document_order() {
        let mut doc = document(&format!(
            "<w:p><w:r><w:t>first</w:t></w:r></w:p>{TABLE}{TEXT_BOX}<w:p><w:r><w:t>last</w:t></w:r></w:p>"
        ));
        let records = extract_properties(&mut doc, &ExtractOptions::default()).unwrap();

        let summary: Vec<(usize, BlockType, &str)> = records
            .iter()
            .map(|r| (r.para_id, r.object_type, r.content.as_str()))
            .collect();
        assert_eq!(
            summary,
            vec![
                (1, BlockType::Paragraph, "first"),
                (2, BlockType::TextBoxParagraph, "boxed one"),
                (3, BlockType::TextBoxParagraph, "boxed two"),
                (4, BlockType::Paragraph, "last"),
            ]
        );
        assert!(records.iter().all(|r| r.hex_id.len() == 7));
    }

    #[test]
    fn test_table_cells_on_request() {
        let mut doc = document(&format!("{TABLE}<w:p/>"));
        let options = ExtractOptions::new().with_table_cells(true);
        let records = extract_properties(&mut doc, &options).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].object_type, BlockType::TableCellParagraph);
        assert_eq!(records[0].content, "cell");
        assert_eq!(records[0].hex_id.len(), 7);
        assert_eq!(records[1].para_id, 2);
    }

    #[test]
    fn test_identifiers_are_stable_across_runs() {
        let mut doc = document("<w:p/><w:p w14:paraId=\"0BADF00D\"/>");
        let first = extract_properties(&mut doc, &ExtractOptions::default()).unwrap();
        let second = extract_properties(&mut doc, &ExtractOptions::default()).unwrap();

        assert_eq!(first[0].hex_id, second[0].hex_id);
        assert_eq!(first[1].hex_id, "0BADF00D");
    }

    #[test]
    fn test_read_only_identifiers() {
        let mut doc = document("<w:p/>");
        let options = ExtractOptions::new().with_id_assignment(false);
        let records = extract_properties(&mut doc, &options).unwrap();

        assert_eq!(records[0].hex_id, "");
        assert!(doc.paragraphs().unwrap()[0].para_id().is_none());
    }

    #[test]
    fn test_render_dispatch() {
        let mut doc = document("<w:p><w:r><w:t>x</w:t></w:r></w:p>");
        let records = extract_properties(&mut doc, &ExtractOptions::default()).unwrap();

        let xml = render(&records, &ExtractOptions::default()).unwrap();
        assert!(xml.starts_with("<?xml"));

        let options = ExtractOptions::new().with_output(OutputFormat::Json { pretty: false });
        let json = render(&records, &options).unwrap();
        assert!(json.starts_with("[{\"ParaID\":1,"));

        assert_eq!(render(&[], &ExtractOptions::default()).unwrap(), "");
    }

    #[test]
    fn test_missing_path() {
        let options = ExtractOptions::default();
        assert!(matches!(
            extract_docx_properties("", &options),
            Err(Error::NotFound(_))
        ));
        assert!(matches!(
            extract_docx_properties("/definitely/not/here.docx", &options),
            Err(Error::NotFound(_))
        ));
    }

    #[test]
    fn test_invalid_archive() {
        assert!(matches!(
            extract_docx_bytes(b"not a zip".to_vec(), &ExtractOptions::default()),
            Err(Error::ZipError(_))
        ));
    }
}
