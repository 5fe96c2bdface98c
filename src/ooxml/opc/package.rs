/// In-memory view of an OPC package (the ZIP container behind a .docx).
///
/// The XML and relationship members of the archive are read once into a
/// partname-keyed map, after which parts and relationships can be queried
/// without touching the archive. Binary members (images, embedded objects,
/// fonts) are never decompressed.
use std::collections::{BTreeMap, HashMap};
use std::io::{Read, Seek};

use quick_xml::Reader;
use quick_xml::events::Event;

use crate::ooxml::error::{OoxmlError, Result};
use crate::ooxml::opc::constants::{content_type, default_partname, relationship_type};
use crate::ooxml::opc::rel::{Relationship, base_uri, parse_relationships, rels_partname};

/// An OPC package loaded into memory.
#[derive(Debug, Clone)]
pub struct OpcPackage {
    /// Part blobs keyed by absolute partname ("/word/document.xml")
    parts: BTreeMap<String, Vec<u8>>,
}

impl OpcPackage {
    /// Load a package from any seekable reader holding a ZIP archive.
    ///
    /// Only members that [`is_markup_member`] accepts are read.
    pub fn from_reader<R: Read + Seek>(reader: R) -> Result<Self> {
        let mut archive = zip::ZipArchive::new(reader)
            .map_err(|e| OoxmlError::Zip(format!("Invalid ZIP archive: {}", e)))?;

        let mut parts = BTreeMap::new();
        for index in 0..archive.len() {
            let mut file = archive.by_index(index)?;
            if file.is_dir() {
                continue;
            }
            let partname = format!("/{}", file.name().trim_start_matches('/'));
            if !is_markup_member(&partname) {
                continue;
            }
            let mut content = Vec::new();
            file.read_to_end(&mut content)?;
            parts.insert(partname, content);
        }

        Ok(Self { parts })
    }

    /// Build a package directly from partname/blob pairs.
    pub fn from_parts<I, S>(parts: I) -> Self
    where
        I: IntoIterator<Item = (S, Vec<u8>)>,
        S: Into<String>,
    {
        let parts = parts
            .into_iter()
            .map(|(name, blob)| {
                let name = name.into();
                if name.starts_with('/') {
                    (name, blob)
                } else {
                    (format!("/{}", name), blob)
                }
            })
            .collect();
        Self { parts }
    }

    /// Get the blob of a part, if present.
    #[inline]
    pub fn part(&self, partname: &str) -> Option<&[u8]> {
        self.parts.get(partname).map(Vec::as_slice)
    }

    /// Get the blob of a part, failing with [`OoxmlError::PartNotFound`].
    pub fn require_part(&self, partname: &str) -> Result<&[u8]> {
        self.part(partname)
            .ok_or_else(|| OoxmlError::PartNotFound(partname.to_string()))
    }

    /// All partnames, in sorted order.
    pub fn part_names(&self) -> impl Iterator<Item = &str> {
        self.parts.keys().map(String::as_str)
    }

    /// Partnames starting with `prefix`, in sorted order.
    pub fn part_names_with_prefix<'a>(&'a self, prefix: &'a str) -> impl Iterator<Item = &'a str> {
        self.part_names().filter(move |name| name.starts_with(prefix))
    }

    /// Relationships whose source is `source` ("/" for the package itself).
    ///
    /// A missing `.rels` part yields an empty list.
    pub fn relationships(&self, source: &str) -> Result<Vec<Relationship>> {
        match self.part(&rels_partname(source)) {
            Some(xml) => parse_relationships(xml),
            None => Ok(Vec::new()),
        }
    }

    /// Partname of the first internal target of `source` with the given relationship type.
    pub fn related_partname(&self, source: &str, reltype: &str) -> Result<Option<String>> {
        let base = base_uri(source);
        Ok(self
            .relationships(source)?
            .iter()
            .filter(|rel| rel.reltype() == reltype)
            .find_map(|rel| rel.target_partname(base)))
    }

    /// Locate the main document part.
    ///
    /// Uses the package-level officeDocument relationship and falls back to
    /// `/word/document.xml`. Fails when neither exists.
    pub fn main_document_partname(&self) -> Result<String> {
        if let Some(partname) = self.related_partname("/", relationship_type::OFFICE_DOCUMENT)?
            && self.parts.contains_key(&partname)
        {
            return Ok(partname);
        }
        if self.parts.contains_key(default_partname::MAIN_DOCUMENT) {
            return Ok(default_partname::MAIN_DOCUMENT.to_string());
        }
        Err(OoxmlError::PartNotFound(
            default_partname::MAIN_DOCUMENT.to_string(),
        ))
    }

    /// Locate a part related to the main document, falling back to a well-known partname.
    ///
    /// Returns `None` when neither the relationship target nor the fallback exist.
    pub fn document_related_partname(
        &self,
        main_partname: &str,
        reltype: &str,
        fallback: &str,
    ) -> Result<Option<String>> {
        if let Some(partname) = self.related_partname(main_partname, reltype)?
            && self.parts.contains_key(&partname)
        {
            return Ok(Some(partname));
        }
        Ok(self
            .parts
            .contains_key(fallback)
            .then(|| fallback.to_string()))
    }

    /// Content type declared for a part in `[Content_Types].xml`.
    ///
    /// Returns `None` when the package has no content types part or the part
    /// is not covered by an override or extension default.
    pub fn content_type(&self, partname: &str) -> Result<Option<String>> {
        let Some(xml) = self.part(default_partname::CONTENT_TYPES) else {
            return Ok(None);
        };
        let map = ContentTypeMap::from_xml(xml)?;
        Ok(map.get(partname).map(str::to_string))
    }

    /// Verify that the main document part is a WordprocessingML main part.
    ///
    /// Packages without a declared content type are accepted.
    pub fn check_main_content_type(&self, main_partname: &str) -> Result<()> {
        match self.content_type(main_partname)? {
            Some(ct) if !content_type::WML_MAIN_TYPES.contains(&ct.as_str()) => {
                Err(OoxmlError::InvalidContentType {
                    expected: content_type::WML_DOCUMENT_MAIN.to_string(),
                    got: ct,
                })
            },
            _ => Ok(()),
        }
    }
}

/// Content type lookup built from Default and Override elements.
struct ContentTypeMap {
    /// Maps lowercase file extensions to default content types
    defaults: HashMap<String, String>,

    /// Maps specific partnames to override content types
    overrides: HashMap<String, String>,
}

impl ContentTypeMap {
    fn from_xml(xml: &[u8]) -> Result<Self> {
        let mut map = Self {
            defaults: HashMap::new(),
            overrides: HashMap::new(),
        };
        let mut reader = Reader::from_reader(xml);
        reader.config_mut().trim_text(true);

        let mut buf = Vec::new();

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Empty(ref e)) | Ok(Event::Start(ref e)) => {
                    let is_default = match e.local_name().as_ref() {
                        b"Default" => true,
                        b"Override" => false,
                        _ => {
                            buf.clear();
                            continue;
                        },
                    };

                    let mut key = None;
                    let mut ct = None;
                    for attr in e.attributes().flatten() {
                        let value = attr
                            .decode_and_unescape_value(reader.decoder())
                            .map_err(|e| OoxmlError::Xml(e.to_string()))?
                            .into_owned();
                        match attr.key.as_ref() {
                            b"Extension" | b"PartName" => key = Some(value),
                            b"ContentType" => ct = Some(value),
                            _ => {},
                        }
                    }

                    if let (Some(key), Some(ct)) = (key, ct) {
                        if is_default {
                            map.defaults.insert(key.to_lowercase(), ct);
                        } else {
                            map.overrides.insert(key, ct);
                        }
                    }
                },
                Ok(Event::Eof) => break,
                Err(e) => {
                    return Err(OoxmlError::Xml(format!(
                        "Content types parse error: {}",
                        e
                    )));
                },
                _ => {},
            }
            buf.clear();
        }

        Ok(map)
    }

    /// Override first, then the default for the partname's extension.
    fn get(&self, partname: &str) -> Option<&str> {
        if let Some(ct) = self.overrides.get(partname) {
            return Some(ct);
        }
        let filename = partname.rsplit('/').next().unwrap_or(partname);
        let ext = filename.rsplit_once('.').map(|(_, ext)| ext)?;
        self.defaults.get(&ext.to_lowercase()).map(String::as_str)
    }
}

/// Whether a member holds XML markup: `[Content_Types].xml`, relationship
/// parts and `.xml` parts. Matching is on the extension, case-insensitive.
pub fn is_markup_member(partname: &str) -> bool {
    partname
        .rsplit_once('.')
        .is_some_and(|(_, ext)| ext.eq_ignore_ascii_case("xml") || ext.eq_ignore_ascii_case("rels"))
}
