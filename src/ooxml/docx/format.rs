//! Formatting-property views over `w:rPr` and `w:pPr`.
//!
//! The same views read direct formatting on runs and paragraphs and the
//! formatting declared by styles. Every accessor that interprets a value
//! returns `Result<Option<T>>`: `Ok(None)` when the property is not set,
//! `Err` when it is set to something that cannot be interpreted.

use crate::common::unit::{half_points_to_pt, line_units_to_multiple, twips_to_pt};
use crate::ooxml::docx::element::XmlElement;
use crate::ooxml::docx::enums::{WdLineSpacingRule, WdParagraphAlignment, WdUnderline};
use crate::ooxml::error::{OoxmlError, Result};

/// Resolved line spacing of a paragraph.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LineSpacing {
    /// Multiple of single line spacing (e.g., 1.15)
    Multiple(f64),
    /// Exact spacing in points
    Exact(f64),
    /// At least spacing in points
    AtLeast(f64),
}

impl LineSpacing {
    /// Numeric value: a multiple for [`LineSpacing::Multiple`], points otherwise.
    #[inline]
    pub fn value(self) -> f64 {
        match self {
            Self::Multiple(v) | Self::Exact(v) | Self::AtLeast(v) => v,
        }
    }
}

/// Parse an `ST_OnOff` value. An absent value means "on".
pub fn parse_on_off(attribute: &str, value: Option<&str>) -> Result<bool> {
    match value {
        None => Ok(true),
        Some("true" | "1" | "on") => Ok(true),
        Some("false" | "0" | "off") => Ok(false),
        Some(other) => Err(OoxmlError::invalid_value(attribute, other)),
    }
}

/// Parse a signed integer attribute value.
pub fn parse_int(attribute: &str, value: &str) -> Result<i64> {
    atoi_simd::parse::<i64>(value.trim().as_bytes())
        .map_err(|_| OoxmlError::invalid_value(attribute, value))
}

/// Read `w:val` of a toggle child element such as `w:b` or `w:i`.
fn toggle(props: Option<&XmlElement>, name: &str) -> Result<Option<bool>> {
    match props.and_then(|p| p.child(name)) {
        Some(element) => parse_on_off(name, element.attr("w:val")).map(Some),
        None => Ok(None),
    }
}

/// Read an integer attribute of a child element.
fn int_attr(props: Option<&XmlElement>, child: &str, attribute: &str) -> Result<Option<i64>> {
    match props
        .and_then(|p| p.child(child))
        .and_then(|e| e.attr(attribute))
    {
        Some(value) => parse_int(attribute, value).map(Some),
        None => Ok(None),
    }
}

/// Character formatting (`w:rPr`) of a run or style.
#[derive(Debug, Clone, Copy)]
pub struct RunFormat<'a> {
    r_pr: Option<&'a XmlElement>,
}

impl<'a> RunFormat<'a> {
    /// Wrap a `w:rPr` element; `None` gives a view with no properties set.
    #[inline]
    pub fn new(r_pr: Option<&'a XmlElement>) -> Self {
        Self { r_pr }
    }

    /// The underlying `w:rPr`, if any.
    #[inline]
    pub fn element(&self) -> Option<&'a XmlElement> {
        self.r_pr
    }

    /// Character style referenced by `w:rStyle`.
    pub fn style_id(&self) -> Option<&'a str> {
        self.r_pr?.child("w:rStyle")?.attr("w:val")
    }

    /// Typeface for ASCII text (`w:rFonts/@w:ascii`).
    pub fn font_name(&self) -> Option<&'a str> {
        self.r_pr?.child("w:rFonts")?.attr("w:ascii")
    }

    /// Font size in points.
    ///
    /// Word stores font size in half-points (e.g., 24 = 12pt).
    pub fn font_size(&self) -> Result<Option<f64>> {
        Ok(int_attr(self.r_pr, "w:sz", "w:val")?.map(half_points_to_pt))
    }

    pub fn bold(&self) -> Result<Option<bool>> {
        toggle(self.r_pr, "w:b")
    }

    pub fn italic(&self) -> Result<Option<bool>> {
        toggle(self.r_pr, "w:i")
    }

    pub fn strike(&self) -> Result<Option<bool>> {
        toggle(self.r_pr, "w:strike")
    }

    pub fn double_strike(&self) -> Result<Option<bool>> {
        toggle(self.r_pr, "w:dstrike")
    }

    pub fn small_caps(&self) -> Result<Option<bool>> {
        toggle(self.r_pr, "w:smallCaps")
    }

    /// Underline kind.
    ///
    /// Returns `None` when `w:u` is absent or carries no `w:val`.
    pub fn underline(&self) -> Result<Option<WdUnderline>> {
        match self
            .r_pr
            .and_then(|p| p.child("w:u"))
            .and_then(|u| u.attr("w:val"))
        {
            Some(value) => WdUnderline::from_xml(value)
                .map(Some)
                .ok_or_else(|| OoxmlError::invalid_value("w:u", value)),
            None => Ok(None),
        }
    }
}

/// Paragraph formatting (`w:pPr`) of a paragraph or style.
#[derive(Debug, Clone, Copy)]
pub struct ParagraphFormat<'a> {
    p_pr: Option<&'a XmlElement>,
}

impl<'a> ParagraphFormat<'a> {
    /// Wrap a `w:pPr` element; `None` gives a view with no properties set.
    #[inline]
    pub fn new(p_pr: Option<&'a XmlElement>) -> Self {
        Self { p_pr }
    }

    /// The underlying `w:pPr`, if any.
    #[inline]
    pub fn element(&self) -> Option<&'a XmlElement> {
        self.p_pr
    }

    /// Paragraph style referenced by `w:pStyle`.
    pub fn style_id(&self) -> Option<&'a str> {
        self.p_pr?.child("w:pStyle")?.attr("w:val")
    }

    pub fn alignment(&self) -> Result<Option<WdParagraphAlignment>> {
        match self.p_pr.and_then(|p| p.child("w:jc")).and_then(|jc| jc.attr("w:val")) {
            Some(value) => WdParagraphAlignment::from_xml(value)
                .map(Some)
                .ok_or_else(|| OoxmlError::invalid_value("w:jc", value)),
            None => Ok(None),
        }
    }

    /// Line spacing from `w:spacing/@w:line` and `@w:lineRule`.
    ///
    /// An absent rule is treated as `auto`.
    pub fn line_spacing(&self) -> Result<Option<LineSpacing>> {
        let Some(spacing) = self.p_pr.and_then(|p| p.child("w:spacing")) else {
            return Ok(None);
        };
        let Some(line) = spacing.attr("w:line") else {
            return Ok(None);
        };
        let line = parse_int("w:line", line)?;
        let rule = match spacing.attr("w:lineRule") {
            Some(value) => WdLineSpacingRule::from_xml(value)
                .ok_or_else(|| OoxmlError::invalid_value("w:lineRule", value))?,
            None => WdLineSpacingRule::Auto,
        };
        Ok(Some(match rule {
            WdLineSpacingRule::Auto => LineSpacing::Multiple(line_units_to_multiple(line)),
            WdLineSpacingRule::Exact => LineSpacing::Exact(twips_to_pt(line)),
            WdLineSpacingRule::AtLeast => LineSpacing::AtLeast(twips_to_pt(line)),
        }))
    }

    /// Space before the paragraph in points.
    pub fn space_before(&self) -> Result<Option<f64>> {
        Ok(int_attr(self.p_pr, "w:spacing", "w:before")?.map(twips_to_pt))
    }

    /// Space after the paragraph in points.
    pub fn space_after(&self) -> Result<Option<f64>> {
        Ok(int_attr(self.p_pr, "w:spacing", "w:after")?.map(twips_to_pt))
    }

    /// Left indent in points (`w:ind/@w:left`, or `@w:start`).
    pub fn left_indent(&self) -> Result<Option<f64>> {
        match int_attr(self.p_pr, "w:ind", "w:left")? {
            Some(v) => Ok(Some(twips_to_pt(v))),
            None => Ok(int_attr(self.p_pr, "w:ind", "w:start")?.map(twips_to_pt)),
        }
    }

    /// Right indent in points (`w:ind/@w:right`, or `@w:end`).
    pub fn right_indent(&self) -> Result<Option<f64>> {
        match int_attr(self.p_pr, "w:ind", "w:right")? {
            Some(v) => Ok(Some(twips_to_pt(v))),
            None => Ok(int_attr(self.p_pr, "w:ind", "w:end")?.map(twips_to_pt)),
        }
    }

    /// First-line indent in points; a hanging indent is returned as a negative value.
    pub fn first_line_indent(&self) -> Result<Option<f64>> {
        if let Some(hanging) = int_attr(self.p_pr, "w:ind", "w:hanging")? {
            return Ok(Some(-twips_to_pt(hanging)));
        }
        Ok(int_attr(self.p_pr, "w:ind", "w:firstLine")?.map(twips_to_pt))
    }

    /// List membership declared by `w:numPr`.
    ///
    /// A `w:numPr` without `w:numId` gives `None`; a missing `w:ilvl` is level 0.
    pub fn numbering(&self) -> Result<Option<NumberingRef>> {
        let Some(num_pr) = self.p_pr.and_then(|p| p.child("w:numPr")) else {
            return Ok(None);
        };
        let Some(num_id) = int_attr(Some(num_pr), "w:numId", "w:val")? else {
            return Ok(None);
        };
        let level = int_attr(Some(num_pr), "w:ilvl", "w:val")?.unwrap_or(0);
        Ok(Some(NumberingRef { num_id, level }))
    }
}

/// A paragraph's reference into the numbering definitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NumberingRef {
    /// Concrete list id (`w:numId`)
    pub num_id: i64,
    /// Indentation level (`w:ilvl`)
    pub level: i64,
}
