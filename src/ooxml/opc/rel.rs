/// Relationship parsing for OPC packages.
///
/// A `.rels` part lists the relationships from one source part (or from the
/// package itself) to its targets. Only what is needed to locate parts is kept.
use crate::ooxml::error::{OoxmlError, Result};
use crate::ooxml::opc::constants::target_mode;
use quick_xml::Reader;
use quick_xml::events::Event;

/// A single relationship from a source part to a target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relationship {
    /// Relationship ID (e.g., "rId1", "rId2")
    r_id: String,

    /// Relationship type URI
    reltype: String,

    /// Target reference - either a part URI or external URL
    target_ref: String,

    /// Whether this is an external relationship
    is_external: bool,
}

impl Relationship {
    /// Get the relationship ID.
    #[inline]
    pub fn r_id(&self) -> &str {
        &self.r_id
    }

    /// Get the relationship type.
    #[inline]
    pub fn reltype(&self) -> &str {
        &self.reltype
    }

    /// Get the target reference as written in the `.rels` part.
    #[inline]
    pub fn target_ref(&self) -> &str {
        &self.target_ref
    }

    /// Check if this is an external relationship.
    #[inline]
    pub fn is_external(&self) -> bool {
        self.is_external
    }

    /// Resolve the target against the source part's directory.
    ///
    /// Returns `None` for external relationships.
    pub fn target_partname(&self, base_uri: &str) -> Option<String> {
        if self.is_external {
            return None;
        }
        Some(resolve_partname(base_uri, &self.target_ref))
    }
}

/// Parse the content of a `.rels` part.
pub fn parse_relationships(xml: &[u8]) -> Result<Vec<Relationship>> {
    let mut rels = Vec::new();
    let mut reader = Reader::from_reader(xml);
    reader.config_mut().trim_text(true);

    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Empty(ref e)) | Ok(Event::Start(ref e)) => {
                if e.local_name().as_ref() == b"Relationship" {
                    let mut r_id = None;
                    let mut reltype = None;
                    let mut target_ref = None;
                    let mut is_external = false;

                    for attr in e.attributes().flatten() {
                        let value = attr
                            .decode_and_unescape_value(reader.decoder())
                            .map_err(|e| OoxmlError::Xml(e.to_string()))?;
                        match attr.key.as_ref() {
                            b"Id" => r_id = Some(value.into_owned()),
                            b"Type" => reltype = Some(value.into_owned()),
                            b"Target" => target_ref = Some(value.into_owned()),
                            b"TargetMode" => is_external = value == target_mode::EXTERNAL,
                            _ => {},
                        }
                    }

                    if let (Some(r_id), Some(reltype), Some(target_ref)) =
                        (r_id, reltype, target_ref)
                    {
                        rels.push(Relationship {
                            r_id,
                            reltype,
                            target_ref,
                            is_external,
                        });
                    }
                }
            },
            Ok(Event::Eof) => break,
            Err(e) => return Err(OoxmlError::Xml(e.to_string())),
            _ => {},
        }
        buf.clear();
    }

    Ok(rels)
}

/// Translate a relative reference onto a base URI, producing an absolute partname.
///
/// `("/word", "../customXml/item1.xml")` becomes `"/customXml/item1.xml"`;
/// references that already start with a slash are only normalized.
pub fn resolve_partname(base_uri: &str, target_ref: &str) -> String {
    let joined = if target_ref.starts_with('/') {
        target_ref.to_string()
    } else if base_uri.ends_with('/') {
        format!("{}{}", base_uri, target_ref)
    } else {
        format!("{}/{}", base_uri, target_ref)
    };

    let mut segments: Vec<&str> = Vec::new();
    for segment in joined.split('/') {
        match segment {
            "" | "." => {},
            ".." => {
                segments.pop();
            },
            s => segments.push(s),
        }
    }

    let mut out = String::with_capacity(joined.len());
    for segment in segments {
        out.push('/');
        out.push_str(segment);
    }
    if out.is_empty() {
        out.push('/');
    }
    out
}

/// Directory portion of a partname, e.g. "/word" for "/word/document.xml".
pub fn base_uri(partname: &str) -> &str {
    match partname.rfind('/') {
        Some(0) | None => "/",
        Some(pos) => &partname[..pos],
    }
}

/// Partname of the `.rels` part holding the relationships of `source`.
///
/// The package itself (`"/"`) keeps its relationships in `/_rels/.rels`.
pub fn rels_partname(source: &str) -> String {
    if source == "/" {
        return "/_rels/.rels".to_string();
    }
    let base = base_uri(source);
    let filename = &source[source.rfind('/').map_or(0, |p| p + 1)..];
    if base == "/" {
        format!("/_rels/{}.rels", filename)
    } else {
        format!("{}/_rels/{}.rels", base, filename)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_partname() {
        assert_eq!(resolve_partname("/word", "styles.xml"), "/word/styles.xml");
        assert_eq!(resolve_partname("/", "word/document.xml"), "/word/document.xml");
        assert_eq!(
            resolve_partname("/word", "../customXml/item1.xml"),
            "/customXml/item1.xml"
        );
        assert_eq!(resolve_partname("/word", "/word/theme/theme1.xml"), "/word/theme/theme1.xml");
    }

    #[test]
    fn test_rels_partname() {
        assert_eq!(rels_partname("/"), "/_rels/.rels");
        assert_eq!(rels_partname("/word/document.xml"), "/word/_rels/document.xml.rels");
        assert_eq!(rels_partname("/document.xml"), "/_rels/document.xml.rels");
    }

    #[test]
    fn test_parse_relationships() {
        let xml = br#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
  <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles" Target="styles.xml"/>
  <Relationship Id="rId2" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/hyperlink" Target="https://example.com/?a=1&amp;b=2" TargetMode="External"/>
</Relationships>"#;

        let rels = parse_relationships(xml).unwrap();
        assert_eq!(rels.len(), 2);
        assert_eq!(rels[0].r_id(), "rId1");
        assert_eq!(rels[0].target_partname("/word").as_deref(), Some("/word/styles.xml"));
        assert!(rels[1].is_external());
        assert_eq!(rels[1].target_ref(), "https://example.com/?a=1&b=2");
        assert_eq!(rels[1].target_partname("/word"), None);
    }
}
