/// Styles - document styles and formatting definitions.
use crate::ooxml::docx::element::XmlElement;
use crate::ooxml::docx::enums::WdStyleType;
use crate::ooxml::docx::format::{ParagraphFormat, RunFormat};
use crate::ooxml::error::Result;
use smallvec::SmallVec;

/// Built-in style names stored in lowercase in `w:name`, paired with the
/// name Word shows in its user interface.
const UI_NAME_ALIASES: [(&str, &str); 12] = [
    ("caption", "Caption"),
    ("footer", "Footer"),
    ("header", "Header"),
    ("heading 1", "Heading 1"),
    ("heading 2", "Heading 2"),
    ("heading 3", "Heading 3"),
    ("heading 4", "Heading 4"),
    ("heading 5", "Heading 5"),
    ("heading 6", "Heading 6"),
    ("heading 7", "Heading 7"),
    ("heading 8", "Heading 8"),
    ("heading 9", "Heading 9"),
];

/// Convert an internal style name to the name shown in the user interface.
pub fn ui_style_name(internal: &str) -> &str {
    UI_NAME_ALIASES
        .iter()
        .find(|(name, _)| *name == internal)
        .map_or(internal, |&(_, ui)| ui)
}

/// Convert a user interface style name to the internal name.
pub fn internal_style_name(ui: &str) -> &str {
    UI_NAME_ALIASES
        .iter()
        .find(|(_, name)| *name == ui)
        .map_or(ui, |&(internal, _)| internal)
}

/// A collection of styles defined in a Word document.
///
/// Supports lookup by style ID, by name, and of the default
/// style of each type.
///
/// # Examples
///
/// ```rust,ignore
/// use paraprops::ooxml::docx::Package;
///
/// let pkg = Package::open("document.docx")?;
/// let doc = pkg.document()?;
///
/// println!("Document has {} styles", doc.styles().len());
/// if let Some(heading) = doc.styles().get_by_name("Heading 1") {
///     println!("Style: {} (type: {})", heading.style_id(), heading.style_type());
/// }
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Styles {
    style_list: SmallVec<[Style; 32]>,
}

impl Styles {
    /// Parse the content of a styles part.
    pub fn from_xml(xml: &[u8]) -> Result<Self> {
        let root = XmlElement::parse(xml)?;
        let style_list = root
            .children_named("w:style")
            .filter_map(Style::from_element)
            .collect();
        Ok(Self { style_list })
    }

    /// Get the number of styles in the document.
    #[inline]
    pub fn len(&self) -> usize {
        self.style_list.len()
    }

    /// Check if there are no styles defined.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.style_list.is_empty()
    }

    /// Get a style by its ID.
    ///
    /// Returns `None` if no style with the given ID is found.
    pub fn get_by_id(&self, style_id: &str) -> Option<&Style> {
        self.style_list.iter().find(|s| s.style_id == style_id)
    }

    /// Get a style by its user interface name.
    ///
    /// Built-in names such as "Heading 1" are matched against their
    /// lowercase internal form. Returns `None` if no style matches.
    pub fn get_by_name(&self, name: &str) -> Option<&Style> {
        let internal = internal_style_name(name);
        self.style_list
            .iter()
            .find(|s| s.name.as_deref() == Some(internal))
    }

    /// Get the default style for a given style type.
    ///
    /// Returns `None` if no default style is defined for that type.
    pub fn get_default(&self, style_type: WdStyleType) -> Option<&Style> {
        self.style_list
            .iter()
            .find(|s| s.is_default && s.style_type == style_type)
    }

    /// Resolve a style reference of the given type.
    ///
    /// An absent id, an unknown id, or an id naming a style of another type
    /// resolves to the default style of `style_type`.
    pub fn resolve(&self, style_id: Option<&str>, style_type: WdStyleType) -> Option<&Style> {
        style_id
            .and_then(|id| self.get_by_id(id))
            .filter(|s| s.style_type == style_type)
            .or_else(|| self.get_default(style_type))
    }
}

/// A single style definition in a Word document.
///
/// Represents a `<w:style>` element with its properties.
/// Can be a paragraph, character, table, or list style.
#[derive(Debug, Clone)]
pub struct Style {
    /// Style identifier (required)
    style_id: String,
    /// Internal name from `w:name`
    name: Option<String>,
    /// Type of style (paragraph, character, table, or list)
    style_type: WdStyleType,
    /// Whether this is the default style for its type
    is_default: bool,
    /// Whether this is a custom (user-defined) style
    is_custom: bool,
    /// ID of the style this is based on
    based_on: Option<String>,
    /// Paragraph properties declared by the style
    p_pr: Option<XmlElement>,
    /// Run properties declared by the style
    r_pr: Option<XmlElement>,
}

impl Style {
    /// Build a style from a `w:style` element; styles without an id are skipped.
    fn from_element(element: &XmlElement) -> Option<Self> {
        let style_id = element.attr("w:styleId")?.to_string();
        let on = |attr: &str| matches!(element.attr(attr), Some("1" | "true" | "on"));
        Some(Self {
            style_id,
            name: element
                .child("w:name")
                .and_then(|n| n.attr("w:val"))
                .map(str::to_string),
            style_type: element
                .attr("w:type")
                .and_then(WdStyleType::from_xml)
                .unwrap_or_default(),
            is_default: on("w:default"),
            is_custom: on("w:customStyle"),
            based_on: element
                .child("w:basedOn")
                .and_then(|n| n.attr("w:val"))
                .map(str::to_string),
            p_pr: element.child("w:pPr").cloned(),
            r_pr: element.child("w:rPr").cloned(),
        })
    }

    /// Get the style identifier.
    #[inline]
    pub fn style_id(&self) -> &str {
        &self.style_id
    }

    /// Get the internal style name as stored in `w:name`.
    ///
    /// Returns `None` if no name is defined.
    #[inline]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Get the name shown in the user interface.
    pub fn ui_name(&self) -> Option<&str> {
        self.name.as_deref().map(ui_style_name)
    }

    /// Get the style type.
    #[inline]
    pub fn style_type(&self) -> WdStyleType {
        self.style_type
    }

    /// Check if this is the default style for its type.
    #[inline]
    pub fn is_default(&self) -> bool {
        self.is_default
    }

    /// Check if this is a built-in style.
    #[inline]
    pub fn is_builtin(&self) -> bool {
        !self.is_custom
    }

    /// Get the ID of the style this is based on.
    #[inline]
    pub fn based_on(&self) -> Option<&str> {
        self.based_on.as_deref()
    }

    /// Paragraph formatting declared directly by this style.
    ///
    /// Properties inherited through `w:basedOn` are not merged in.
    #[inline]
    pub fn paragraph_format(&self) -> ParagraphFormat<'_> {
        ParagraphFormat::new(self.p_pr.as_ref())
    }

    /// Character formatting declared directly by this style.
    #[inline]
    pub fn run_format(&self) -> RunFormat<'_> {
        RunFormat::new(self.r_pr.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STYLES: &str = r#"<w:styles xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
  <w:style w:type="paragraph" w:default="1" w:styleId="Normal">
    <w:name w:val="Normal"/>
    <w:rPr><w:sz w:val="22"/></w:rPr>
  </w:style>
  <w:style w:type="paragraph" w:styleId="Heading1">
    <w:name w:val="heading 1"/>
    <w:basedOn w:val="Normal"/>
    <w:pPr><w:jc w:val="center"/></w:pPr>
    <w:rPr><w:b/></w:rPr>
  </w:style>
  <w:style w:type="character" w:default="1" w:styleId="DefaultParagraphFont">
    <w:name w:val="Default Paragraph Font"/>
  </w:style>
  <w:style w:type="character" w:customStyle="1" w:styleId="Emph">
    <w:name w:val="Emph"/>
    <w:rPr><w:i/></w:rPr>
  </w:style>
  <w:style w:type="paragraph"><w:name w:val="No id"/></w:style>
</w:styles>"#;

    #[test]
    fn test_parse_styles() {
        let styles = Styles::from_xml(STYLES.as_bytes()).unwrap();
        assert_eq!(styles.len(), 4);

        let heading = styles.get_by_id("Heading1").unwrap();
        assert_eq!(heading.name(), Some("heading 1"));
        assert_eq!(heading.ui_name(), Some("Heading 1"));
        assert_eq!(heading.based_on(), Some("Normal"));
        assert_eq!(heading.run_format().bold().unwrap(), Some(true));
        assert!(heading.is_builtin());

        assert!(!styles.get_by_id("Emph").unwrap().is_builtin());
    }

    #[test]
    fn test_lookup_by_ui_name() {
        let styles = Styles::from_xml(STYLES.as_bytes()).unwrap();
        assert_eq!(styles.get_by_name("Heading 1").unwrap().style_id(), "Heading1");
        assert_eq!(styles.get_by_name("Normal").unwrap().style_id(), "Normal");
        assert!(styles.get_by_name("Title").is_none());
    }

    #[test]
    fn test_resolve_falls_back_to_default() {
        let styles = Styles::from_xml(STYLES.as_bytes()).unwrap();
        let para = |id| {
            styles
                .resolve(id, WdStyleType::Paragraph)
                .map(|s| s.style_id().to_string())
        };
        assert_eq!(para(Some("Heading1")).as_deref(), Some("Heading1"));
        assert_eq!(para(Some("Missing")).as_deref(), Some("Normal"));
        assert_eq!(para(Some("Emph")).as_deref(), Some("Normal"));
        assert_eq!(para(None).as_deref(), Some("Normal"));

        let run = styles.resolve(None, WdStyleType::Character).unwrap();
        assert_eq!(run.style_id(), "DefaultParagraphFont");
    }

    #[test]
    fn test_style_name_aliases() {
        assert_eq!(ui_style_name("heading 3"), "Heading 3");
        assert_eq!(ui_style_name("Body Text"), "Body Text");
        assert_eq!(internal_style_name("Caption"), "caption");
    }
}
