/// Paragraph and run views over the document element tree.
use crate::ooxml::docx::element::XmlElement;
use crate::ooxml::docx::format::{ParagraphFormat, RunFormat};
use smallvec::SmallVec;

/// Attribute holding the Word 2010 paragraph identifier.
pub const PARA_ID_ATTR: &str = "w14:paraId";

const TEXT_BOX_PATH: [&str; 3] = ["v:textbox", "w:txbxContent", "w:p"];
const DRAWING_TEXT_BOX_PATH: [&str; 3] = ["wps:txbx", "w:txbxContent", "w:p"];
const INLINE_IMAGE_PATH: [&str; 5] = ["w:drawing", "wp:inline", "a:graphic", "a:graphicData", "pic:pic"];
const INLINE_SHAPE_PATH: [&str; 5] = [
    "w:drawing",
    "wp:inline",
    "a:graphic",
    "a:graphicData",
    "dgm:relIds",
];

/// A paragraph (`w:p`) in a Word document.
///
/// Paragraphs contain runs and carry their own formatting properties.
#[derive(Debug, Clone, Copy)]
pub struct Paragraph<'a> {
    element: &'a XmlElement,
}

impl<'a> Paragraph<'a> {
    /// Wrap a `w:p` element.
    #[inline]
    pub fn new(element: &'a XmlElement) -> Self {
        Self { element }
    }

    /// The backing `w:p` element.
    #[inline]
    pub fn element(&self) -> &'a XmlElement {
        self.element
    }

    /// Existing `w14:paraId`, if any.
    #[inline]
    pub fn para_id(&self) -> Option<&'a str> {
        self.element.attr(PARA_ID_ATTR)
    }

    /// Direct paragraph formatting (`w:pPr`).
    #[inline]
    pub fn format(&self) -> ParagraphFormat<'a> {
        ParagraphFormat::new(self.properties())
    }

    /// The `w:pPr` element, if present.
    #[inline]
    pub fn properties(&self) -> Option<&'a XmlElement> {
        self.element.child("w:pPr")
    }

    /// Runs in document order.
    ///
    /// Includes runs wrapped in `w:hyperlink`.
    pub fn runs(&self) -> SmallVec<[Run<'a>; 8]> {
        let mut runs = SmallVec::new();
        for child in self.element.children() {
            if child.is("w:r") {
                runs.push(Run::new(child));
            } else if child.is("w:hyperlink") {
                runs.extend(child.children_named("w:r").map(Run::new));
            }
        }
        runs
    }

    /// Text of all runs concatenated.
    pub fn text(&self) -> String {
        let mut text = String::new();
        for run in self.runs() {
            run.push_text(&mut text);
        }
        text
    }

    /// Paragraphs nested in this paragraph's text boxes.
    ///
    /// VML text boxes are used when present; DrawingML text boxes are read
    /// only when no VML text box exists, since Word writes both forms of the
    /// same box into `mc:AlternateContent`.
    pub fn text_box_paragraphs(&self) -> Vec<Paragraph<'a>> {
        self.element
            .find_path_all(text_box_paragraph_path(self.element))
            .into_iter()
            .map(Paragraph::new)
            .collect()
    }

    /// Whether the paragraph contains a text box.
    pub fn has_text_box(&self) -> bool {
        self.element.find_path(&TEXT_BOX_PATH[..2]).is_some()
            || self.element.find_path(&DRAWING_TEXT_BOX_PATH[..2]).is_some()
    }

    /// Whether the paragraph contains an inline picture.
    pub fn has_inline_image(&self) -> bool {
        self.element.find_path(&INLINE_IMAGE_PATH).is_some()
    }

    /// Whether the paragraph contains an inline diagram.
    pub fn has_inline_shape(&self) -> bool {
        self.element.find_path(&INLINE_SHAPE_PATH).is_some()
    }
}

/// Path from a `w:p` to the paragraphs of its text boxes.
///
/// The VML form when the paragraph has one, otherwise the DrawingML form.
pub fn text_box_paragraph_path(paragraph: &XmlElement) -> &'static [&'static str] {
    if paragraph.find_path(&TEXT_BOX_PATH).is_some() {
        &TEXT_BOX_PATH
    } else {
        &DRAWING_TEXT_BOX_PATH
    }
}

/// A run (`w:r`): a span of text sharing one set of character formatting.
#[derive(Debug, Clone, Copy)]
pub struct Run<'a> {
    element: &'a XmlElement,
}

impl<'a> Run<'a> {
    #[inline]
    pub fn new(element: &'a XmlElement) -> Self {
        Self { element }
    }

    /// Direct character formatting (`w:rPr`).
    #[inline]
    pub fn format(&self) -> RunFormat<'a> {
        RunFormat::new(self.element.child("w:rPr"))
    }

    /// Text of this run.
    ///
    /// Only direct children are read: `w:t` contributes its text, tabs
    /// become `\t`, breaks become `\n` and non-breaking hyphens become `-`.
    pub fn text(&self) -> String {
        let mut text = String::new();
        self.push_text(&mut text);
        text
    }

    fn push_text(&self, out: &mut String) {
        for child in self.element.children() {
            match child.name() {
                "w:t" => out.push_str(child.text()),
                "w:tab" | "w:ptab" => out.push('\t'),
                "w:br" | "w:cr" => out.push('\n'),
                "w:noBreakHyphen" => out.push('-'),
                _ => {},
            }
        }
    }
}

/// Run text predicates used by the formatting votes.
pub trait RunText {
    /// Non-empty and not exactly a single line break.
    fn is_text_bearing(&self) -> bool;

    /// Non-empty.
    fn is_non_empty(&self) -> bool;

    /// Contains at least one non-whitespace character.
    fn is_visible(&self) -> bool;
}

impl RunText for str {
    #[inline]
    fn is_text_bearing(&self) -> bool {
        !self.is_empty() && self != "\n"
    }

    #[inline]
    fn is_non_empty(&self) -> bool {
        !self.is_empty()
    }

    #[inline]
    fn is_visible(&self) -> bool {
        self.chars().any(|c| !c.is_whitespace())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(xml: &str) -> XmlElement {
        XmlElement::parse(xml.as_bytes()).unwrap()
    }

    #[test]
    fn test_runs_include_hyperlinks() {
        let p = parse(
            r#"<w:p><w:r><w:t>Visit </w:t></w:r><w:hyperlink r:id="rId4"><w:r><w:t>example</w:t></w:r></w:hyperlink><w:r><w:tab/><w:t>now</w:t><w:br/></w:r></w:p>"#,
        );
        let para = Paragraph::new(&p);
        assert_eq!(para.runs().len(), 3);
        assert_eq!(para.text(), "Visit example\tnow\n");
    }

    #[test]
    fn test_run_text_ignores_nested_text_boxes() {
        let p = parse(
            r#"<w:p><w:r><w:t>outer</w:t><w:pict><v:shape><v:textbox><w:txbxContent><w:p><w:r><w:t>inner</w:t></w:r></w:p></w:txbxContent></v:textbox></v:shape></w:pict></w:r></w:p>"#,
        );
        let para = Paragraph::new(&p);
        assert_eq!(para.text(), "outer");
        assert!(para.has_text_box());

        let inner = para.text_box_paragraphs();
        assert_eq!(inner.len(), 1);
        assert_eq!(inner[0].text(), "inner");
    }

    #[test]
    fn test_vml_text_box_preferred_over_drawingml() {
        let p = parse(
            r#"<w:p><w:r><mc:AlternateContent><mc:Choice><w:drawing><wps:wsp><wps:txbx><w:txbxContent><w:p><w:r><w:t>box</w:t></w:r></w:p></w:txbxContent></wps:txbx></wps:wsp></w:drawing></mc:Choice><mc:Fallback><w:pict><v:textbox><w:txbxContent><w:p><w:r><w:t>box</w:t></w:r></w:p></w:txbxContent></v:textbox></w:pict></mc:Fallback></mc:AlternateContent></w:r></w:p>"#,
        );
        assert_eq!(Paragraph::new(&p).text_box_paragraphs().len(), 1);
    }

    #[test]
    fn test_image_and_shape_detection() {
        let p = parse(
            r#"<w:p><w:r><w:drawing><wp:inline><a:graphic><a:graphicData><pic:pic/></a:graphicData></a:graphic></wp:inline></w:drawing></w:r><w:r><w:drawing><wp:inline><a:graphic><a:graphicData><dgm:relIds/></a:graphicData></a:graphic></wp:inline></w:drawing></w:r></w:p>"#,
        );
        let para = Paragraph::new(&p);
        assert!(para.has_inline_image());
        assert!(para.has_inline_shape());
        assert!(!para.has_text_box());
    }

    #[test]
    fn test_run_predicates() {
        assert!("a".is_text_bearing());
        assert!(!"\n".is_text_bearing());
        assert!(!"".is_non_empty());
        assert!(" ".is_non_empty());
        assert!(!" \t".is_visible());
        assert!("x ".is_visible());
    }
}
