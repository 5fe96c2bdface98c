/// Document - the loaded content of a Word document.
use crate::ooxml::docx::block::{Block, block_items};
use crate::ooxml::docx::element::XmlElement;
use crate::ooxml::docx::numbering::{Numbering, NumberingTable};
use crate::ooxml::docx::paragraph::Paragraph;
use crate::ooxml::docx::styles::Styles;
use crate::ooxml::docx::theme::{Theme, ThemeFonts};
use crate::ooxml::error::{OoxmlError, Result};

/// A Word document: the body tree plus the style, numbering and theme
/// parts that formatting resolution consults.
///
/// The body is owned, so paragraph identifiers can be written back into it.
///
/// # Examples
///
/// ```rust,no_run
/// use paraprops::ooxml::docx::Package;
///
/// let pkg = Package::open("document.docx")?;
/// let doc = pkg.document()?;
///
/// for para in doc.paragraphs()? {
///     println!("Paragraph: {}", para.text());
/// }
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct Document {
    /// The `w:document` root element
    root: XmlElement,
    styles: Styles,
    numbering: Option<Numbering>,
    themes: Vec<Theme>,
}

impl Document {
    /// Build a document from raw part content.
    ///
    /// A malformed main document is an error. Malformed styles, numbering or
    /// theme parts are logged and treated as absent.
    pub fn from_parts(
        document_xml: &[u8],
        styles_xml: Option<&[u8]>,
        numbering_xml: Option<&[u8]>,
        theme_xmls: &[&[u8]],
    ) -> Result<Self> {
        let root = XmlElement::parse(document_xml)?;
        if !root.is("w:document") {
            return Err(OoxmlError::InvalidFormat(format!(
                "Unexpected document root <{}>",
                root.name()
            )));
        }

        let styles = match styles_xml.map(Styles::from_xml) {
            Some(Ok(styles)) => styles,
            Some(Err(e)) => {
                log::warn!("Ignoring unreadable styles part: {}", e);
                Styles::default()
            },
            None => Styles::default(),
        };

        let numbering = match numbering_xml.map(Numbering::from_xml) {
            Some(Ok(numbering)) => Some(numbering),
            Some(Err(e)) => {
                log::warn!("Ignoring unreadable numbering part: {}", e);
                None
            },
            None => None,
        };

        let themes = theme_xmls
            .iter()
            .enumerate()
            .filter_map(|(index, xml)| match Theme::from_xml(xml) {
                Ok(theme) => Some(theme),
                Err(e) => {
                    log::warn!("Ignoring unreadable theme part #{}: {}", index, e);
                    None
                },
            })
            .collect();

        Ok(Self {
            root,
            styles,
            numbering,
            themes,
        })
    }

    /// The `w:document` root element.
    #[inline]
    pub fn root(&self) -> &XmlElement {
        &self.root
    }

    /// The `w:body` element.
    pub fn body(&self) -> Result<&XmlElement> {
        self.root
            .child("w:body")
            .ok_or_else(|| OoxmlError::InvalidFormat("Document has no <w:body>".to_string()))
    }

    /// Mutable access to the `w:body` element.
    pub fn body_mut(&mut self) -> Result<&mut XmlElement> {
        self.root
            .children_mut()
            .iter_mut()
            .find(|c| c.is("w:body"))
            .ok_or_else(|| OoxmlError::InvalidFormat("Document has no <w:body>".to_string()))
    }

    /// Top-level blocks of the body in document order.
    pub fn blocks(&self) -> Result<Vec<Block<'_>>> {
        block_items(self.body()?)
    }

    /// Top-level paragraphs of the body (table content excluded).
    pub fn paragraphs(&self) -> Result<Vec<Paragraph<'_>>> {
        Ok(self
            .blocks()?
            .into_iter()
            .filter_map(|block| match block {
                Block::Paragraph(p) => Some(p),
                Block::Table(_) => None,
            })
            .collect())
    }

    /// Text of the top-level paragraphs, one per line.
    pub fn text(&self) -> Result<String> {
        Ok(self
            .paragraphs()?
            .iter()
            .map(|p| p.text())
            .collect::<Vec<_>>()
            .join("\n"))
    }

    /// Style definitions; empty when the document has no styles part.
    #[inline]
    pub fn styles(&self) -> &Styles {
        &self.styles
    }

    /// Numbering definitions, if the document has a numbering part.
    #[inline]
    pub fn numbering(&self) -> Option<&Numbering> {
        self.numbering.as_ref()
    }

    /// Flattened numbering lookup; empty without a numbering part.
    pub fn numbering_table(&self) -> NumberingTable {
        self.numbering
            .as_ref()
            .map(NumberingTable::build)
            .unwrap_or_default()
    }

    /// Parsed theme parts in package order.
    #[inline]
    pub fn themes(&self) -> &[Theme] {
        &self.themes
    }

    /// Major and minor fonts merged across theme parts.
    pub fn theme_fonts(&self) -> ThemeFonts {
        ThemeFonts::from_themes(&self.themes)
    }
}
