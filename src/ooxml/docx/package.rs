/// Package implementation for Word documents.
use crate::ooxml::docx::document::Document;
use crate::ooxml::error::Result;
use crate::ooxml::opc::OpcPackage;
use crate::ooxml::opc::constants::{default_partname, relationship_type};
use std::fs::File;
use std::io::{BufReader, Cursor, Read, Seek};
use std::path::Path;

/// A Word (.docx) package.
///
/// This is the main entry point for working with Word documents.
/// It wraps an OPC package and locates the parts that formatting
/// resolution needs.
///
/// # Examples
///
/// ```rust,no_run
/// use paraprops::ooxml::docx::Package;
///
/// // Open an existing document
/// let pkg = Package::open("document.docx")?;
///
/// // Get the main document
/// let doc = pkg.document()?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct Package {
    /// The underlying OPC package
    opc: OpcPackage,
    /// Partname of the main document part
    main_partname: String,
}

impl Package {
    /// Open a .docx package from a file path.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the .docx file
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use paraprops::ooxml::docx::Package;
    ///
    /// let pkg = Package::open("document.docx")?;
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Create a .docx package from a reader.
    ///
    /// # Arguments
    ///
    /// * `reader` - A reader containing the .docx file data (must implement Read + Seek)
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use paraprops::ooxml::docx::Package;
    /// use std::io::Cursor;
    ///
    /// let data = std::fs::read("document.docx")?;
    /// let cursor = Cursor::new(data);
    /// let pkg = Package::from_reader(cursor)?;
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn from_reader<R: Read + Seek>(reader: R) -> Result<Self> {
        Self::from_opc(OpcPackage::from_reader(reader)?)
    }

    /// Create a .docx package from the bytes of an archive.
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self> {
        Self::from_reader(Cursor::new(bytes))
    }

    /// Wrap an already loaded OPC package.
    ///
    /// Fails when the package has no main document part or declares a main
    /// part content type that is not WordprocessingML.
    pub fn from_opc(opc: OpcPackage) -> Result<Self> {
        let main_partname = opc.main_document_partname()?;
        opc.check_main_content_type(&main_partname)?;
        log::debug!("Main document part: {}", main_partname);
        Ok(Self { opc, main_partname })
    }

    /// Partname of the main document part.
    #[inline]
    pub fn main_partname(&self) -> &str {
        &self.main_partname
    }

    /// Load the main document together with its styles, numbering and
    /// theme parts.
    ///
    /// Theme parts are every member under `/word/theme/`, in sorted order.
    pub fn document(&self) -> Result<Document> {
        let document_xml = self.opc.require_part(&self.main_partname)?;

        let styles_xml = self.related_part(relationship_type::STYLES, default_partname::STYLES)?;
        let numbering_xml =
            self.related_part(relationship_type::NUMBERING, default_partname::NUMBERING)?;

        let theme_xmls: Vec<&[u8]> = self
            .opc
            .part_names_with_prefix(default_partname::THEME_PREFIX)
            .filter_map(|name| self.opc.part(name))
            .collect();

        log::debug!(
            "Loading document: styles={}, numbering={}, themes={}",
            styles_xml.is_some(),
            numbering_xml.is_some(),
            theme_xmls.len()
        );

        Document::from_parts(document_xml, styles_xml, numbering_xml, &theme_xmls)
    }

    fn related_part(&self, reltype: &str, fallback: &str) -> Result<Option<&[u8]>> {
        Ok(self
            .opc
            .document_related_partname(&self.main_partname, reltype, fallback)?
            .and_then(|partname| self.opc.part(&partname)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::error::OoxmlError;

    const ROOT_RELS: &str = r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/main.xml"/></Relationships>"#;
    const DOC_RELS: &str = r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles" Target="custom-styles.xml"/></Relationships>"#;
    const DOCUMENT: &str = r#"<w:document><w:body><w:p><w:r><w:t>Hi</w:t></w:r></w:p></w:body></w:document>"#;
    const STYLES: &str = r#"<w:styles><w:style w:type="paragraph" w:default="1" w:styleId="Normal"><w:name w:val="Normal"/></w:style></w:styles>"#;

    fn theme(major: &str) -> Vec<u8> {
        format!(r#"<a:theme><a:majorFont><a:latin typeface="{major}"/></a:majorFont></a:theme>"#)
            .into_bytes()
    }

    #[test]
    fn test_relationship_targets_are_followed() {
        let opc = OpcPackage::from_parts([
            ("_rels/.rels", ROOT_RELS.as_bytes().to_vec()),
            ("word/_rels/main.xml.rels", DOC_RELS.as_bytes().to_vec()),
            ("word/main.xml", DOCUMENT.as_bytes().to_vec()),
            ("word/custom-styles.xml", STYLES.as_bytes().to_vec()),
            ("word/theme/theme2.xml", theme("Second")),
            ("word/theme/theme1.xml", theme("First")),
        ]);
        let pkg = Package::from_opc(opc).unwrap();
        assert_eq!(pkg.main_partname(), "/word/main.xml");

        let doc = pkg.document().unwrap();
        assert_eq!(doc.styles().len(), 1);
        assert_eq!(doc.themes().len(), 2);
        assert_eq!(doc.theme_fonts().major_font, "Second");
        assert_eq!(doc.text().unwrap(), "Hi");
    }

    #[test]
    fn test_well_known_partnames_are_used_without_relationships() {
        let opc = OpcPackage::from_parts([
            ("word/document.xml", DOCUMENT.as_bytes().to_vec()),
            ("word/styles.xml", STYLES.as_bytes().to_vec()),
        ]);
        let doc = Package::from_opc(opc).unwrap().document().unwrap();
        assert_eq!(doc.styles().len(), 1);
        assert!(doc.numbering().is_none());
    }

    #[test]
    fn test_missing_main_part() {
        let opc = OpcPackage::from_parts([("word/styles.xml", STYLES.as_bytes().to_vec())]);
        assert!(matches!(
            Package::from_opc(opc),
            Err(OoxmlError::PartNotFound(_))
        ));
    }

    #[test]
    fn test_not_a_zip_archive() {
        assert!(matches!(
            Package::from_bytes(b"plain text".to_vec()),
            Err(OoxmlError::Zip(_))
        ));
    }
}
