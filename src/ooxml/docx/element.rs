/// Owned XML element tree used as the backing structure of a Word document.
///
/// Parts are parsed once with quick-xml into [`XmlElement`] nodes. Paragraph,
/// run and table types are borrowed views over this tree, and the only
/// mutation performed on it is paragraph identifier stamping.
use crate::ooxml::error::{OoxmlError, Result};
use quick_xml::Reader;
use quick_xml::escape::resolve_predefined_entity;
use quick_xml::events::{BytesStart, Event};

/// A single XML element with its attributes, children and text.
///
/// Names are kept exactly as written (`w:p`, `a:latin`, `Relationship`).
/// Namespace declarations are dropped; Word parts use fixed prefixes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XmlElement {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<XmlElement>,
    text: String,
}

impl XmlElement {
    /// Create an empty element with the given qualified name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Add an attribute, builder style.
    pub fn with_attr(mut self, name: &str, value: &str) -> Self {
        self.set_attr(name, value);
        self
    }

    /// Parse an XML document and return its root element.
    ///
    /// Text is kept untrimmed so that `w:t` whitespace survives. Entity and
    /// character references are resolved.
    pub fn parse(xml: &[u8]) -> Result<Self> {
        let mut reader = Reader::from_reader(xml);
        let mut buf = Vec::new();
        let mut stack: Vec<XmlElement> = Vec::new();

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(ref e)) => {
                    stack.push(Self::from_start(e, &reader)?);
                },
                Ok(Event::Empty(ref e)) => {
                    let element = Self::from_start(e, &reader)?;
                    match stack.last_mut() {
                        Some(parent) => parent.children.push(element),
                        None => return Ok(element),
                    }
                },
                Ok(Event::Text(ref t)) => {
                    if let Some(current) = stack.last_mut() {
                        let text = std::str::from_utf8(t.as_ref())
                            .map_err(|e| OoxmlError::Xml(format!("Invalid UTF-8 in text: {}", e)))?;
                        current.text.push_str(text);
                    }
                },
                Ok(Event::CData(ref t)) => {
                    if let Some(current) = stack.last_mut() {
                        let text = std::str::from_utf8(t).map_err(|e| {
                            OoxmlError::Xml(format!("Invalid UTF-8 in CDATA: {}", e))
                        })?;
                        current.text.push_str(text);
                    }
                },
                Ok(Event::GeneralRef(ref r)) => {
                    if let Some(current) = stack.last_mut() {
                        if let Some(ch) = r
                            .resolve_char_ref()
                            .map_err(|e| OoxmlError::Xml(e.to_string()))?
                        {
                            current.text.push(ch);
                        } else {
                            let name = r.decode().map_err(|e| OoxmlError::Xml(e.to_string()))?;
                            let resolved = resolve_predefined_entity(&name).ok_or_else(|| {
                                OoxmlError::Xml(format!("Unknown entity reference: &{};", name))
                            })?;
                            current.text.push_str(resolved);
                        }
                    }
                },
                Ok(Event::End(_)) => {
                    if let Some(element) = stack.pop() {
                        match stack.last_mut() {
                            Some(parent) => parent.children.push(element),
                            None => return Ok(element),
                        }
                    }
                },
                Ok(Event::Eof) => break,
                Err(e) => return Err(OoxmlError::Xml(e.to_string())),
                _ => {},
            }
            buf.clear();
        }

        Err(OoxmlError::Xml("No root element found".to_string()))
    }

    fn from_start(e: &BytesStart<'_>, reader: &Reader<&[u8]>) -> Result<Self> {
        let name = std::str::from_utf8(e.name().as_ref())
            .map_err(|e| OoxmlError::Xml(format!("Invalid UTF-8 in tag name: {}", e)))?
            .to_string();

        let mut element = XmlElement::new(name);
        for attr in e.attributes() {
            let attr = attr.map_err(|e| OoxmlError::Xml(e.to_string()))?;
            let key = std::str::from_utf8(attr.key.as_ref())
                .map_err(|e| OoxmlError::Xml(format!("Invalid UTF-8 in attribute key: {}", e)))?;
            if key == "xmlns" || key.starts_with("xmlns:") {
                continue;
            }
            let value = attr
                .decode_and_unescape_value(reader.decoder())
                .map_err(|e| OoxmlError::Xml(e.to_string()))?;
            element.attributes.push((key.to_string(), value.into_owned()));
        }
        Ok(element)
    }

    /// Qualified name as written, e.g. `w:p`.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name without its namespace prefix.
    #[inline]
    pub fn local_name(&self) -> &str {
        local_part(&self.name)
    }

    /// Check whether this element has the given name.
    ///
    /// A prefixed name (`w:r`) must match exactly, which keeps `w:r` apart
    /// from `m:r`. An unprefixed name matches on local name only.
    #[inline]
    pub fn is(&self, name: &str) -> bool {
        names_match(&self.name, name)
    }

    /// Get an attribute value, matched like [`XmlElement::is`].
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| names_match(key, name))
            .map(|(_, value)| value.as_str())
    }

    /// Set an attribute, replacing an existing value with the same name.
    pub fn set_attr(&mut self, name: &str, value: &str) {
        match self.attributes.iter_mut().find(|(key, _)| key == name) {
            Some((_, existing)) => *existing = value.to_string(),
            None => self
                .attributes
                .push((name.to_string(), value.to_string())),
        }
    }

    /// All attributes in document order.
    #[inline]
    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    /// Text directly contained in this element.
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Direct children.
    #[inline]
    pub fn children(&self) -> &[XmlElement] {
        &self.children
    }

    /// Mutable access to the direct children.
    #[inline]
    pub fn children_mut(&mut self) -> &mut [XmlElement] {
        &mut self.children
    }

    /// First direct child with the given name.
    pub fn child(&self, name: &str) -> Option<&XmlElement> {
        self.children.iter().find(|c| c.is(name))
    }

    /// Direct children with the given name.
    pub fn children_named<'a, 'n>(
        &'a self,
        name: &'n str,
    ) -> impl Iterator<Item = &'a XmlElement> + use<'a, 'n> {
        self.children.iter().filter(move |c| c.is(name))
    }

    /// All descendants in document order, excluding `self`.
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants {
            stack: self.children.iter().rev().collect(),
        }
    }

    /// First descendant with the given name.
    pub fn find(&self, name: &str) -> Option<&XmlElement> {
        self.descendants().find(|e| e.is(name))
    }

    /// First match of a relative descendant path.
    ///
    /// The first name may be any descendant; every following name must be a
    /// direct child of the previous match. `["w:pPr", "w:jc"]` behaves like
    /// the XPath `.//w:pPr/w:jc`.
    pub fn find_path(&self, path: &[&str]) -> Option<&XmlElement> {
        let (first, rest) = path.split_first()?;
        self.descendants()
            .filter(|e| e.is(first))
            .find_map(|e| e.find_child_chain(rest))
    }

    /// All matches of a relative descendant path, in document order.
    pub fn find_path_all(&self, path: &[&str]) -> Vec<&XmlElement> {
        let mut found = Vec::new();
        if let Some((first, rest)) = path.split_first() {
            for start in self.descendants().filter(|e| e.is(first)) {
                start.collect_child_chain(rest, &mut found);
            }
        }
        found
    }

    /// Apply `f` to every match of a relative descendant path, in the same
    /// order as [`XmlElement::find_path_all`].
    pub fn for_each_path_mut<F>(&mut self, path: &[&str], f: &mut F)
    where
        F: FnMut(&mut XmlElement),
    {
        let Some((first, rest)) = path.split_first() else {
            return;
        };
        for child in self.children.iter_mut() {
            if child.is(first) {
                child.apply_child_chain(rest, f);
            }
            child.for_each_path_mut(path, f);
        }
    }

    fn apply_child_chain<F>(&mut self, path: &[&str], f: &mut F)
    where
        F: FnMut(&mut XmlElement),
    {
        match path.split_first() {
            None => f(self),
            Some((name, rest)) => {
                for child in self.children.iter_mut().filter(|c| c.is(name)) {
                    child.apply_child_chain(rest, f);
                }
            },
        }
    }

    fn find_child_chain(&self, path: &[&str]) -> Option<&XmlElement> {
        match path.split_first() {
            None => Some(self),
            Some((name, rest)) => self
                .children
                .iter()
                .filter(|c| c.is(name))
                .find_map(|child| child.find_child_chain(rest)),
        }
    }

    fn collect_child_chain<'a>(&'a self, path: &[&str], out: &mut Vec<&'a XmlElement>) {
        match path.split_first() {
            None => out.push(self),
            Some((name, rest)) => {
                for child in self.children.iter().filter(|c| c.is(name)) {
                    child.collect_child_chain(rest, out);
                }
            },
        }
    }
}

/// Pre-order iterator over the descendants of an element.
pub struct Descendants<'a> {
    stack: Vec<&'a XmlElement>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a XmlElement;

    fn next(&mut self) -> Option<Self::Item> {
        let next = self.stack.pop()?;
        self.stack.extend(next.children.iter().rev());
        Some(next)
    }
}

#[inline]
fn local_part(name: &str) -> &str {
    name.rsplit_once(':').map_or(name, |(_, local)| local)
}

#[inline]
fn names_match(actual: &str, wanted: &str) -> bool {
    if wanted.contains(':') {
        actual == wanted
    } else {
        local_part(actual) == wanted
    }
}
