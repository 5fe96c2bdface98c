//! The per-paragraph property record and its fixed field layout.

use crate::extract::classify::BlockType;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::fmt;

/// Number of fields in a [`ParagraphProperties`] record.
pub const FIELD_COUNT: usize = 46;

/// Field names in output order.
pub const FIELD_NAMES: [&str; FIELD_COUNT] = [
    "ParaID",
    "ParaObjectType",
    "ParaHexId",
    "ParaCleanedContent",
    "ParaContent",
    "ParaContentTabStart",
    "ParaFontFamily",
    "ParaBold",
    "ParaItalic",
    "ParaFontSize",
    "ParaStyle",
    "ParaListStyle",
    "ParaLeftIndent",
    "ParaRightIndent",
    "ParaFirstLineIndent",
    "ParaAlignment",
    "ParaLineSpace",
    "ParaAboveSpace",
    "ParaBelowSpace",
    "ParaBorderTopVal",
    "ParaBorderTopSz",
    "ParaBorderTopSpace",
    "ParaBorderTopColor",
    "ParaBorderLeftVal",
    "ParaBorderLeftSz",
    "ParaBorderLeftSpace",
    "ParaBorderLeftColor",
    "ParaBorderBottomVal",
    "ParaBorderBottomSz",
    "ParaBorderBottomSpace",
    "ParaBorderBottomColor",
    "ParaBorderRightVal",
    "ParaBorderRightSz",
    "ParaBorderRightSpace",
    "ParaBorderRightColor",
    "ParaBorderBetweenVal",
    "ParaBorderBetweenSz",
    "ParaBorderBetweenSpace",
    "ParaBorderBetweenColor",
    "ParaShadingVal",
    "ParaShadingColor",
    "ParaShadingFill",
    "ParaSingleStrike",
    "ParaDoubleStrike",
    "ParaUnderline",
    "ParaSmallCaps",
];

/// One border edge (`w:pBdr/w:top`, ...), attribute values as written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Border {
    pub val: String,
    pub sz: String,
    pub space: String,
    pub color: String,
}

impl Default for Border {
    fn default() -> Self {
        Self {
            val: "0".to_string(),
            sz: "0".to_string(),
            space: "0".to_string(),
            color: "-1".to_string(),
        }
    }
}

/// Paragraph shading (`w:pPr/w:shd`); `None` where the attribute is absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Shading {
    pub val: Option<String>,
    pub color: Option<String>,
    pub fill: Option<String>,
}

/// Small-caps state of a paragraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SmallCaps {
    /// No run carries visible text
    NoText,
    Enabled(bool),
}

impl fmt::Display for SmallCaps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SmallCaps::NoText => f.write_str("No Text"),
            SmallCaps::Enabled(value) => write!(f, "{}", value),
        }
    }
}

/// A single field value, borrowed from a record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Int(usize),
    Number(f64),
    Bool(bool),
    Text(&'a str),
    SmallCaps(SmallCaps),
    /// No resolved value
    Empty,
}

impl FieldValue<'_> {
    /// Whether the value renders as an empty string.
    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Empty => true,
            FieldValue::Text(s) => s.is_empty(),
            _ => false,
        }
    }
}

impl fmt::Display for FieldValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Int(v) => write!(f, "{}", v),
            FieldValue::Number(v) => write!(f, "{}", v),
            FieldValue::Bool(v) => write!(f, "{}", v),
            FieldValue::Text(v) => f.write_str(v),
            FieldValue::SmallCaps(v) => write!(f, "{}", v),
            FieldValue::Empty => Ok(()),
        }
    }
}

impl Serialize for FieldValue<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match *self {
            FieldValue::Int(v) => serializer.serialize_u64(v as u64),
            FieldValue::Number(v) => serializer.serialize_f64(v),
            FieldValue::Bool(v) => serializer.serialize_bool(v),
            FieldValue::Text(v) => serializer.serialize_str(v),
            FieldValue::SmallCaps(SmallCaps::Enabled(v)) => serializer.serialize_bool(v),
            FieldValue::SmallCaps(SmallCaps::NoText) => serializer.serialize_str("No Text"),
            FieldValue::Empty => serializer.serialize_none(),
        }
    }
}

/// Effective formatting of one paragraph.
///
/// Every field always holds either a resolved value or its fallback.
#[derive(Debug, Clone, PartialEq)]
pub struct ParagraphProperties {
    /// 1-based position in the emitted sequence
    pub para_id: usize,
    pub object_type: BlockType,
    /// `w14:paraId` of the paragraph
    pub hex_id: String,
    pub cleaned_content: String,
    pub content: String,
    /// Number of leading tab characters of `content`
    pub content_tab_start: usize,
    pub font_family: String,
    pub bold: bool,
    pub italic: bool,
    /// Font size in points
    pub font_size: f64,
    pub style: String,
    pub list_style: String,
    pub left_indent: f64,
    pub right_indent: f64,
    pub first_line_indent: f64,
    /// Alignment wire value (`left`, `center`, `both`, ...)
    pub alignment: String,
    pub line_space: f64,
    pub above_space: f64,
    pub below_space: f64,
    /// Top, left, bottom, right and between edges, in that order
    pub borders: [Border; 5],
    pub shading: Shading,
    pub single_strike: bool,
    pub double_strike: bool,
    pub underline: String,
    pub small_caps: SmallCaps,
}

impl ParagraphProperties {
    /// Field values in output order, aligned with [`FIELD_NAMES`].
    pub fn values(&self) -> [FieldValue<'_>; FIELD_COUNT] {
        let [top, left, bottom, right, between] = &self.borders;
        [
            FieldValue::Int(self.para_id),
            FieldValue::Text(self.object_type.as_str()),
            FieldValue::Text(&self.hex_id),
            FieldValue::Text(&self.cleaned_content),
            FieldValue::Text(&self.content),
            FieldValue::Int(self.content_tab_start),
            FieldValue::Text(&self.font_family),
            FieldValue::Bool(self.bold),
            FieldValue::Bool(self.italic),
            FieldValue::Number(self.font_size),
            FieldValue::Text(&self.style),
            FieldValue::Text(&self.list_style),
            FieldValue::Number(self.left_indent),
            FieldValue::Number(self.right_indent),
            FieldValue::Number(self.first_line_indent),
            FieldValue::Text(&self.alignment),
            FieldValue::Number(self.line_space),
            FieldValue::Number(self.above_space),
            FieldValue::Number(self.below_space),
            FieldValue::Text(&top.val),
            FieldValue::Text(&top.sz),
            FieldValue::Text(&top.space),
            FieldValue::Text(&top.color),
            FieldValue::Text(&left.val),
            FieldValue::Text(&left.sz),
            FieldValue::Text(&left.space),
            FieldValue::Text(&left.color),
            FieldValue::Text(&bottom.val),
            FieldValue::Text(&bottom.sz),
            FieldValue::Text(&bottom.space),
            FieldValue::Text(&bottom.color),
            FieldValue::Text(&right.val),
            FieldValue::Text(&right.sz),
            FieldValue::Text(&right.space),
            FieldValue::Text(&right.color),
            FieldValue::Text(&between.val),
            FieldValue::Text(&between.sz),
            FieldValue::Text(&between.space),
            FieldValue::Text(&between.color),
            optional(&self.shading.val),
            optional(&self.shading.color),
            optional(&self.shading.fill),
            FieldValue::Bool(self.single_strike),
            FieldValue::Bool(self.double_strike),
            FieldValue::Text(&self.underline),
            FieldValue::SmallCaps(self.small_caps),
        ]
    }

    /// `(name, value)` pairs in output order.
    pub fn fields(&self) -> impl Iterator<Item = (&'static str, FieldValue<'_>)> {
        FIELD_NAMES.into_iter().zip(self.values())
    }

    /// Value of a field by name.
    pub fn get(&self, name: &str) -> Option<FieldValue<'_>> {
        self.fields().find(|(n, _)| *n == name).map(|(_, v)| v)
    }
}

fn optional(value: &Option<String>) -> FieldValue<'_> {
    value.as_deref().map_or(FieldValue::Empty, FieldValue::Text)
}

impl Serialize for ParagraphProperties {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(FIELD_COUNT))?;
        for (name, value) in self.fields() {
            map.serialize_entry(name, &value)?;
        }
        map.end()
    }
}
