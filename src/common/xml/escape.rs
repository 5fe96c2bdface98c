use aho_corasick::{AhoCorasick, MatchKind};
use once_cell::sync::Lazy;
use std::borrow::Cow;

// Static initialization: automaton is built only once, thread-safe
static TEXT_ESCAPER: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasick::builder()
        .build(["&", "<", ">"])
        .expect("Failed to build XML text escaper")
});

// Use LeftmostLongest to ensure longer entities are matched first (e.g., &amp; instead of &lt;)
static XML_UNESCAPER: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasick::builder()
        .match_kind(MatchKind::LeftmostLongest)
        .build(["&amp;", "&lt;", "&gt;", "&quot;", "&apos;"])
        .expect("Failed to build XML unescaper")
});

/// Escape the characters that are significant in XML character data.
///
/// Quotes are left alone since the result is only ever used as element content.
///
/// # Examples
///
/// ```
/// use paraprops::common::xml::escape_text;
/// assert_eq!(escape_text("a & b"), "a &amp; b");
/// assert_eq!(escape_text("<tag>\"hi\"</tag>"), "&lt;tag&gt;\"hi\"&lt;/tag&gt;");
/// ```
#[inline]
pub fn escape_text(s: &str) -> String {
    TEXT_ESCAPER.replace_all(s, &["&amp;", "&lt;", "&gt;"])
}

/// Unescape XML special characters.
///
/// Replaces the five standard XML entities with their corresponding characters.
/// Unknown or malformed entities are left unchanged.
///
/// # Examples
///
/// ```
/// use paraprops::common::xml::unescape_xml;
/// assert_eq!(unescape_xml("&lt;a &amp; b&gt;"), "<a & b>");
/// assert_eq!(unescape_xml("&amp;lt;"), "&lt;");
/// assert_eq!(unescape_xml("&invalid;"), "&invalid;");
/// ```
#[inline]
pub fn unescape_xml(s: &str) -> String {
    XML_UNESCAPER.replace_all(s, &["&", "<", ">", "\"", "'"])
}

/// Whether `c` is allowed in an XML 1.0 document.
#[inline]
pub fn is_xml_char(c: char) -> bool {
    matches!(c,
        '\u{9}' | '\u{A}' | '\u{D}'
        | '\u{20}'..='\u{D7FF}'
        | '\u{E000}'..='\u{FFFD}'
        | '\u{10000}'..='\u{10FFFF}')
}

/// Drop characters that cannot appear in XML 1.0 (control characters such as
/// vertical tab or form feed that Word sometimes stores in run text).
pub fn strip_invalid_xml_chars(s: &str) -> Cow<'_, str> {
    if s.chars().all(is_xml_char) {
        Cow::Borrowed(s)
    } else {
        Cow::Owned(s.chars().filter(|&c| is_xml_char(c)).collect())
    }
}

/// Append `s` as one or more CDATA sections.
///
/// A literal `]]>` cannot live inside a CDATA section, so the text is split
/// there and the `>` carried into the next section.
pub fn push_cdata(out: &mut String, s: &str) {
    out.push_str("<![CDATA[");
    let mut rest = s;
    while let Some(pos) = rest.find("]]>") {
        out.push_str(&rest[..pos + 2]);
        out.push_str("]]><![CDATA[");
        rest = &rest[pos + 2..];
    }
    out.push_str(rest);
    out.push_str("]]>");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_text_roundtrip() {
        let raw = "x < y && y > z";
        assert_eq!(unescape_xml(&escape_text(raw)), raw);
    }

    #[test]
    fn test_strip_invalid_chars() {
        assert!(matches!(strip_invalid_xml_chars("plain\ttext"), Cow::Borrowed(_)));
        assert_eq!(strip_invalid_xml_chars("a\u{B}b\u{C}c"), "abc");
    }

    #[test]
    fn test_push_cdata_plain() {
        let mut out = String::new();
        push_cdata(&mut out, "a < b & c\n");
        assert_eq!(out, "<![CDATA[a < b & c\n]]>");
    }

    #[test]
    fn test_push_cdata_splits_terminator() {
        let mut out = String::new();
        push_cdata(&mut out, "x]]>y");
        assert_eq!(out, "<![CDATA[x]]]]><![CDATA[>y]]>");
    }
}
