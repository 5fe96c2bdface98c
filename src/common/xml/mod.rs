//! XML text helpers shared by the record serializer.

pub mod escape;

pub use escape::{escape_text, is_xml_char, push_cdata, strip_invalid_xml_chars, unescape_xml};
