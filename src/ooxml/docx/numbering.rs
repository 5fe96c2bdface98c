/// Numbering support for reading numbering definitions from Word documents.
///
/// This module provides types for accessing numbering (lists) in Word documents
/// and a flattened lookup table keyed by list id and level.
use crate::common::unit::twips_to_pt;
use crate::ooxml::docx::format::NumberingRef;
use crate::ooxml::error::{OoxmlError, Result};
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use std::collections::HashMap;

/// Numbering definitions in a Word document.
///
/// Contains abstract numbering definitions and numbering instances.
///
/// # Examples
///
/// ```rust,no_run
/// use paraprops::ooxml::docx::Package;
///
/// let pkg = Package::open("document.docx")?;
/// let doc = pkg.document()?;
///
/// if let Some(numbering) = doc.numbering() {
///     println!("Found {} numbering definitions", numbering.num_count());
/// }
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Numbering {
    /// Abstract numbering definitions (templates)
    abstract_nums: Vec<AbstractNum>,
    /// Numbering instances (concrete lists)
    nums: Vec<Num>,
}

/// Abstract numbering definition (`w:abstractNum`).
#[derive(Debug, Clone)]
pub struct AbstractNum {
    /// Abstract numbering ID
    id: u32,
    /// Multi-level type (singleLevel, multilevel, hybridMultilevel)
    multi_level_type: Option<String>,
    /// Per-level definitions
    levels: Vec<Level>,
}

/// One level (`w:lvl`) of an abstract numbering definition.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Level {
    /// Level index (`w:ilvl`)
    pub ilvl: u32,
    /// Start value (`w:start`)
    pub start: Option<i64>,
    /// Number format (`w:numFmt`), e.g. "decimal" or "bullet"
    pub num_format: Option<String>,
    /// Level text (`w:lvlText`), e.g. "%1."
    pub level_text: Option<String>,
    /// Left indent in twips (`w:pPr/w:ind/@w:left`)
    pub left: Option<i64>,
    /// Hanging indent in twips (`w:pPr/w:ind/@w:hanging`)
    pub hanging: Option<i64>,
}

/// Numbering instance (`w:num`) binding a list id to an abstract definition.
#[derive(Debug, Clone)]
pub struct Num {
    /// Numbering ID
    id: u32,
    /// Referenced abstract numbering ID
    abstract_num_id: u32,
}

impl Numbering {
    /// Get all abstract numbering definitions.
    #[inline]
    pub fn abstract_nums(&self) -> &[AbstractNum] {
        &self.abstract_nums
    }

    /// Get all numbering instances.
    #[inline]
    pub fn nums(&self) -> &[Num] {
        &self.nums
    }

    /// Get the number of abstract numbering definitions.
    #[inline]
    pub fn abstract_num_count(&self) -> usize {
        self.abstract_nums.len()
    }

    /// Get the number of numbering instances.
    #[inline]
    pub fn num_count(&self) -> usize {
        self.nums.len()
    }

    /// Find an abstract numbering definition by ID.
    pub fn get_abstract_num(&self, id: u32) -> Option<&AbstractNum> {
        self.abstract_nums.iter().find(|a| a.id == id)
    }

    /// Find a numbering instance by ID.
    pub fn get_num(&self, id: u32) -> Option<&Num> {
        self.nums.iter().find(|n| n.id == id)
    }

    /// Parse the content of a numbering part.
    ///
    /// Input that ends with elements still open is rejected.
    pub fn from_xml(xml: &[u8]) -> Result<Self> {
        let mut reader = Reader::from_reader(xml);
        reader.config_mut().trim_text(true);

        let mut parser = NumberingParser::default();
        let mut depth = 0usize;
        let mut buf = Vec::with_capacity(1024);

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(e)) => {
                    depth += 1;
                    parser.open(&e);
                },
                Ok(Event::Empty(e)) => {
                    parser.open(&e);
                    parser.close(e.local_name().as_ref());
                },
                Ok(Event::End(e)) => {
                    depth = depth.saturating_sub(1);
                    parser.close(e.local_name().as_ref());
                },
                Ok(Event::Eof) => break,
                Err(e) => return Err(OoxmlError::Xml(e.to_string())),
                _ => {},
            }
            buf.clear();
        }

        if depth != 0 {
            return Err(OoxmlError::Xml(format!(
                "Numbering part ends with {} unclosed element(s)",
                depth
            )));
        }

        Ok(Self {
            abstract_nums: parser.abstract_nums,
            nums: parser.nums,
        })
    }
}

/// State of the numbering event loop.
///
/// A self-closing element is opened and closed in one step, so it never
/// leaves a definition pending.
#[derive(Default)]
struct NumberingParser {
    abstract_nums: Vec<AbstractNum>,
    nums: Vec<Num>,
    current_abstract: Option<AbstractNum>,
    current_level: Option<Level>,
    in_num: bool,
    current_num_id: Option<u32>,
    current_abstract_num_id: Option<u32>,
}

impl NumberingParser {
    fn open(&mut self, e: &BytesStart<'_>) {
        match e.local_name().as_ref() {
            b"abstractNum" => {
                self.current_abstract = attr_u32(e, b"abstractNumId").map(|id| AbstractNum {
                    id,
                    multi_level_type: None,
                    levels: Vec::new(),
                });
            },
            b"multiLevelType" => {
                if let Some(abstract_num) = self.current_abstract.as_mut() {
                    abstract_num.multi_level_type = attr_string(e, b"val");
                }
            },
            b"lvl" if self.current_abstract.is_some() => {
                self.current_level = Some(Level {
                    ilvl: attr_u32(e, b"ilvl").unwrap_or(0),
                    ..Default::default()
                });
            },
            b"start" => {
                if let Some(level) = self.current_level.as_mut() {
                    level.start = attr_i64(e, b"val");
                }
            },
            b"numFmt" => {
                if let Some(level) = self.current_level.as_mut() {
                    level.num_format = attr_string(e, b"val");
                }
            },
            b"lvlText" => {
                if let Some(level) = self.current_level.as_mut() {
                    level.level_text = attr_string(e, b"val");
                }
            },
            b"ind" => {
                if let Some(level) = self.current_level.as_mut() {
                    level.left = attr_i64(e, b"left").or_else(|| attr_i64(e, b"start"));
                    level.hanging = attr_i64(e, b"hanging");
                }
            },
            b"num" if self.current_abstract.is_none() => {
                self.in_num = true;
                self.current_num_id = attr_u32(e, b"numId");
                self.current_abstract_num_id = None;
            },
            b"abstractNumId" if self.in_num => {
                self.current_abstract_num_id = attr_u32(e, b"val");
            },
            _ => {},
        }
    }

    fn close(&mut self, local_name: &[u8]) {
        match local_name {
            b"lvl" => {
                if let (Some(level), Some(abstract_num)) =
                    (self.current_level.take(), self.current_abstract.as_mut())
                {
                    abstract_num.levels.push(level);
                }
            },
            b"abstractNum" => {
                self.current_level = None;
                if let Some(abstract_num) = self.current_abstract.take() {
                    self.abstract_nums.push(abstract_num);
                }
            },
            b"num" if self.in_num => {
                if let (Some(id), Some(abstract_id)) = (
                    self.current_num_id.take(),
                    self.current_abstract_num_id.take(),
                ) {
                    self.nums.push(Num {
                        id,
                        abstract_num_id: abstract_id,
                    });
                }
                self.in_num = false;
            },
            _ => {},
        }
    }
}

fn attr_raw<'e>(e: &'e BytesStart<'_>, name: &[u8]) -> Option<std::borrow::Cow<'e, [u8]>> {
    e.attributes()
        .flatten()
        .find(|attr| attr.key.local_name().as_ref() == name)
        .map(|attr| attr.value)
}

fn attr_u32(e: &BytesStart<'_>, name: &[u8]) -> Option<u32> {
    attr_raw(e, name).and_then(|v| atoi_simd::parse::<u32>(&v).ok())
}

fn attr_i64(e: &BytesStart<'_>, name: &[u8]) -> Option<i64> {
    attr_raw(e, name).and_then(|v| atoi_simd::parse::<i64>(&v).ok())
}

fn attr_string(e: &BytesStart<'_>, name: &[u8]) -> Option<String> {
    attr_raw(e, name).map(|v| {
        let raw = String::from_utf8_lossy(&v);
        match quick_xml::escape::unescape(&raw) {
            Ok(value) => value.into_owned(),
            Err(_) => raw.into_owned(),
        }
    })
}

impl AbstractNum {
    /// Get the abstract numbering ID.
    #[inline]
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Get the multi-level type, if declared.
    #[inline]
    pub fn multi_level_type(&self) -> Option<&str> {
        self.multi_level_type.as_deref()
    }

    /// Get the level definitions in document order.
    #[inline]
    pub fn levels(&self) -> &[Level] {
        &self.levels
    }
}

impl Num {
    /// Get the numbering ID.
    #[inline]
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Get the referenced abstract numbering ID.
    #[inline]
    pub fn abstract_num_id(&self) -> u32 {
        self.abstract_num_id
    }
}

/// One row of the flattened numbering table.
#[derive(Debug, Clone, PartialEq)]
pub struct NumberingEntry {
    /// Number format of the level
    pub num_format: Option<String>,
    /// Left indent in twips
    pub left: Option<i64>,
    /// Hanging indent in twips
    pub hanging: Option<i64>,
    /// Start value
    pub start: Option<i64>,
    /// Level text
    pub level_text: Option<String>,
    /// Multi-level type of the owning abstract definition
    pub multi_level_type: Option<String>,
}

/// Numbering definitions flattened to a `(list id, level)` lookup.
///
/// Every concrete list is joined to the levels of the abstract definition it
/// references. A list whose abstract definition is missing contributes no
/// rows. When the part defines no concrete lists the table is empty and every
/// lookup misses.
#[derive(Debug, Clone, Default)]
pub struct NumberingTable {
    entries: HashMap<(u32, u32), NumberingEntry>,
}

impl NumberingTable {
    /// Flatten parsed numbering definitions.
    pub fn build(numbering: &Numbering) -> Self {
        let mut entries = HashMap::new();
        for num in numbering.nums() {
            let Some(abstract_num) = numbering.get_abstract_num(num.abstract_num_id()) else {
                continue;
            };
            for level in abstract_num.levels() {
                entries
                    .entry((num.id(), level.ilvl))
                    .or_insert_with(|| NumberingEntry {
                        num_format: level.num_format.clone(),
                        left: level.left,
                        hanging: level.hanging,
                        start: level.start,
                        level_text: level.level_text.clone(),
                        multi_level_type: abstract_num.multi_level_type.clone(),
                    });
            }
        }
        Self { entries }
    }

    /// Number of `(list id, level)` rows.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up a row; negative ids or levels never match.
    pub fn lookup(&self, num_id: i64, level: i64) -> Option<&NumberingEntry> {
        let num_id = u32::try_from(num_id).ok()?;
        let level = u32::try_from(level).ok()?;
        self.entries.get(&(num_id, level))
    }

    /// Row for a paragraph's numbering reference.
    #[inline]
    pub fn entry(&self, num_ref: NumberingRef) -> Option<&NumberingEntry> {
        self.lookup(num_ref.num_id, num_ref.level)
    }

    /// Number format label, or `None` when the row or column is absent.
    pub fn num_format(&self, num_ref: NumberingRef) -> Option<&str> {
        self.entry(num_ref)?.num_format.as_deref()
    }

    /// Left indent contributed by the list level, in points.
    pub fn left_indent_pt(&self, num_ref: NumberingRef) -> Option<f64> {
        self.entry(num_ref)?.left.map(twips_to_pt)
    }
}
