//! XML rendering of property records.
//!
//! The output is one `ArrayOfParagraphProperties` root with a
//! `ParagraphProperties` child per record and one element per field, in
//! field order. Field values are written as escaped text, or as CDATA for
//! the fields named in [`ExtractOptions::cdata_fields`].

use crate::common::xml::{escape_text, push_cdata, strip_invalid_xml_chars};
use crate::extract::options::ExtractOptions;
use crate::extract::record::ParagraphProperties;

/// Declaration written before the root element.
pub const XML_DECLARATION: &str = "<?xml version='1.0' encoding='UTF-8'?>";
/// Root element name.
pub const ROOT_ELEMENT: &str = "ArrayOfParagraphProperties";
/// Element name of one record.
pub const RECORD_ELEMENT: &str = "ParagraphProperties";

/// Incremental writer for the records document.
///
/// # Examples
///
/// ```rust,ignore
/// let mut writer = XmlRecordWriter::new(&options);
/// for record in &records {
///     writer.write_record(record);
/// }
/// let xml = writer.finish();
/// ```
pub struct XmlRecordWriter<'o> {
    options: &'o ExtractOptions,
    buffer: String,
    records: usize,
}

impl<'o> XmlRecordWriter<'o> {
    pub fn new(options: &'o ExtractOptions) -> Self {
        Self {
            options,
            buffer: String::with_capacity(4096),
            records: 0,
        }
    }

    /// Append one record.
    pub fn write_record(&mut self, record: &ParagraphProperties) {
        if self.records == 0 {
            self.buffer.push_str(XML_DECLARATION);
            self.buffer.push('\n');
            self.open_tag(ROOT_ELEMENT);
        }
        self.records += 1;

        self.open_tag(RECORD_ELEMENT);
        for (name, value) in record.fields() {
            if value.is_empty() {
                self.buffer.push('<');
                self.buffer.push_str(name);
                self.buffer.push_str("/>");
                continue;
            }

            let text = value.to_string();
            let text = strip_invalid_xml_chars(&text);
            self.open_tag(name);
            if self.options.is_cdata_field(name) {
                push_cdata(&mut self.buffer, &text);
            } else {
                self.buffer.push_str(&escape_text(&text));
            }
            self.close_tag(name);
        }
        self.close_tag(RECORD_ELEMENT);
    }

    /// Close the document and return it; empty when no record was written.
    pub fn finish(mut self) -> String {
        if self.records > 0 {
            self.close_tag(ROOT_ELEMENT);
        }
        self.buffer
    }

    #[inline]
    fn open_tag(&mut self, name: &str) {
        self.buffer.push('<');
        self.buffer.push_str(name);
        self.buffer.push('>');
    }

    #[inline]
    fn close_tag(&mut self, name: &str) {
        self.buffer.push_str("</");
        self.buffer.push_str(name);
        self.buffer.push('>');
    }
}

/// Render records as an XML document; an empty slice gives an empty string.
pub fn to_xml(records: &[ParagraphProperties], options: &ExtractOptions) -> String {
    let mut writer = XmlRecordWriter::new(options);
    for record in records {
        writer.write_record(record);
    }
    writer.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::record::tests::sample;
    use crate::ooxml::docx::XmlElement;
    use proptest::prelude::*;

    fn field<'e>(root: &'e XmlElement, record: usize, name: &str) -> &'e XmlElement {
        root.children_named(RECORD_ELEMENT)
            .nth(record)
            .and_then(|r| r.child(name))
            .unwrap()
    }

    #[test]
    fn test_empty_input_gives_empty_output() {
        assert_eq!(to_xml(&[], &ExtractOptions::default()), "");
    }

    #[test]
    fn test_document_shape() {
        let mut second = sample();
        second.para_id = 2;
        let xml = to_xml(&[sample(), second], &ExtractOptions::default());

        assert!(xml.starts_with("<?xml version='1.0' encoding='UTF-8'?>\n<ArrayOfParagraphProperties><ParagraphProperties><ParaID>1</ParaID><ParaObjectType>paragraph</ParaObjectType>"));
        assert!(xml.contains("<ParaContent><![CDATA[it`s]]></ParaContent>"));
        assert!(xml.contains("<ParaListStyle/>"));
        assert!(xml.contains("<ParaShadingVal/>"));
        assert!(xml.ends_with("</ParagraphProperties></ArrayOfParagraphProperties>"));

        let root = XmlElement::parse(xml.as_bytes()).unwrap();
        assert_eq!(root.name(), ROOT_ELEMENT);
        assert_eq!(root.children().len(), 2);
        assert_eq!(field(&root, 1, "ParaID").text(), "2");
        assert_eq!(field(&root, 0, "ParaSmallCaps").text(), "No Text");
    }

    #[test]
    fn test_markup_in_content_survives() {
        let mut record = sample();
        record.content = "a < b & c\nnext ]]> end".to_string();
        record.cleaned_content = record.content.clone();
        let xml = to_xml(&[record.clone()], &ExtractOptions::default());

        assert!(xml.contains("<ParaCleanedContent>a &lt; b &amp; c\nnext ]]&gt; end</ParaCleanedContent>"));
        let root = XmlElement::parse(xml.as_bytes()).unwrap();
        assert_eq!(field(&root, 0, "ParaContent").text(), record.content);
        assert_eq!(field(&root, 0, "ParaCleanedContent").text(), record.content);
    }

    #[test]
    fn test_invalid_characters_are_dropped() {
        let mut record = sample();
        record.content = "form\u{C}feed".to_string();
        let xml = to_xml(&[record], &ExtractOptions::default());
        assert!(xml.contains("<![CDATA[formfeed]]>"));
    }

    #[test]
    fn test_cdata_fields_are_configurable() {
        let options = ExtractOptions::new().with_cdata_fields(["ParaStyle"]);
        let xml = to_xml(&[sample()], &options);
        assert!(xml.contains("<ParaStyle><![CDATA[Normal]]></ParaStyle>"));
        assert!(xml.contains("<ParaContent>it`s</ParaContent>"));
    }

    proptest! {
        #[test]
        fn prop_content_round_trips(content in "[^\r\u{0}-\u{8}\u{B}\u{C}\u{E}-\u{1F}\u{FFFE}\u{FFFF}]{0,64}") {
            let mut record = sample();
            record.content = content.clone();
            record.cleaned_content = content.clone();
            let xml = to_xml(&[record], &ExtractOptions::default());

            let root = XmlElement::parse(xml.as_bytes()).unwrap();
            prop_assert_eq!(field(&root, 0, "ParaContent").text(), content.as_str());
            prop_assert_eq!(field(&root, 0, "ParaCleanedContent").text(), content.as_str());
        }
    }
}
