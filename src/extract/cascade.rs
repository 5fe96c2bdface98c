//! Style cascade resolution.
//!
//! Each attribute of a paragraph is resolved independently by walking its
//! own precedence chain: direct run formatting, the runs' character styles,
//! direct paragraph formatting, the paragraph style, the document style of
//! the same name and, for fonts, the theme. A level that holds a value ends
//! the walk; when no level does, the attribute takes its fallback.
//!
//! A value that is present but cannot be interpreted does not abort
//! extraction. The attribute is logged and takes its fallback.

use crate::extract::classify::BlockType;
use crate::extract::record::{Border, ParagraphProperties, Shading, SmallCaps};
use crate::ooxml::docx::enums::{BorderEdge, WdParagraphAlignment, WdStyleType};
use crate::ooxml::docx::format::{NumberingRef, ParagraphFormat, RunFormat};
use crate::ooxml::docx::numbering::NumberingTable;
use crate::ooxml::docx::paragraph::{Paragraph, Run, RunText};
use crate::ooxml::docx::styles::{Style, Styles};
use crate::ooxml::docx::theme::ThemeFonts;
use crate::ooxml::docx::element::XmlElement;
use crate::ooxml::error::Result;
use smallvec::SmallVec;

/// Font family when no level names one.
pub const DEFAULT_FONT_FAMILY: &str = "Default";
/// Font size in points when no level sets one.
pub const DEFAULT_FONT_SIZE: f64 = 11.0;
/// Line spacing multiple when no level sets one.
pub const DEFAULT_LINE_SPACING: f64 = 1.15;
/// Style name of a paragraph whose style cannot be resolved.
pub const DEFAULT_STYLE_NAME: &str = "Normal";

/// Resolves effective paragraph formatting against a document's side tables.
///
/// The resolver only borrows the styles, numbering table and theme fonts;
/// it keeps no state between paragraphs.
#[derive(Debug, Clone, Copy)]
pub struct StyleCascade<'a> {
    styles: &'a Styles,
    numbering: &'a NumberingTable,
    theme: &'a ThemeFonts,
}

/// Everything the cascade reads about one paragraph, gathered once.
#[derive(Debug, Clone)]
pub struct ParagraphContext<'a> {
    paragraph: Paragraph<'a>,
    runs: SmallVec<[RunEntry<'a>; 8]>,
    /// Style referenced by `w:pStyle`, or the default paragraph style
    para_style: Option<&'a Style>,
    /// Display name of the paragraph style
    style_name: String,
    /// Document style looked up by `style_name`
    doc_style: Option<&'a Style>,
}

#[derive(Debug, Clone)]
struct RunEntry<'a> {
    format: RunFormat<'a>,
    style: Option<&'a Style>,
    text: String,
}

impl<'a> ParagraphContext<'a> {
    /// The paragraph being resolved.
    #[inline]
    pub fn paragraph(&self) -> &Paragraph<'a> {
        &self.paragraph
    }

    /// Display name of the paragraph style, `Normal` when unresolved.
    #[inline]
    pub fn style_name(&self) -> &str {
        &self.style_name
    }

    fn para_style_format(&self) -> ParagraphFormat<'a> {
        self.para_style
            .map_or(ParagraphFormat::new(None), |s| s.paragraph_format())
    }

    fn doc_style_format(&self) -> ParagraphFormat<'a> {
        self.doc_style
            .map_or(ParagraphFormat::new(None), |s| s.paragraph_format())
    }

    fn para_style_run_format(&self) -> RunFormat<'a> {
        self.para_style.map_or(RunFormat::new(None), |s| s.run_format())
    }

    fn doc_style_run_format(&self) -> RunFormat<'a> {
        self.doc_style.map_or(RunFormat::new(None), |s| s.run_format())
    }

    /// Runs whose text is non-empty and not a lone line break.
    fn text_bearing_runs(&self) -> impl Iterator<Item = &RunEntry<'a>> {
        self.runs.iter().filter(|r| r.text.is_text_bearing())
    }

    /// Runs with any text at all.
    fn non_empty_runs(&self) -> impl Iterator<Item = &RunEntry<'a>> {
        self.runs.iter().filter(|r| r.text.is_non_empty())
    }
}

/// Map a failed resolution to the attribute's fallback, logging the cause.
fn or_fallback<T>(attribute: &str, result: Result<T>, fallback: T) -> T {
    result.unwrap_or_else(|e| {
        log::warn!("Failed to resolve {}: {}; using fallback", attribute, e);
        fallback
    })
}

/// Most frequent value, ignoring `None`; ties go to the value seen first.
fn majority<T: PartialEq + Copy>(values: impl IntoIterator<Item = Option<T>>) -> Option<T> {
    let mut counts: SmallVec<[(T, usize); 8]> = SmallVec::new();
    for value in values.into_iter().flatten() {
        match counts.iter_mut().find(|(v, _)| *v == value) {
            Some((_, count)) => *count += 1,
            None => counts.push((value, 1)),
        }
    }
    let mut best: Option<(T, usize)> = None;
    for &(value, count) in &counts {
        if best.is_none_or(|(_, c)| count > c) {
            best = Some((value, count));
        }
    }
    best.map(|(value, _)| value)
}

/// Whether every value is `Some(true)`, with at least one value.
fn all_enabled(values: impl IntoIterator<Item = Result<Option<bool>>>) -> Result<bool> {
    let mut seen = false;
    for value in values {
        if value? != Some(true) {
            return Ok(false);
        }
        seen = true;
    }
    Ok(seen)
}

/// Whether every value is `Some(true)`; true for no values at all.
fn none_disabled(values: impl IntoIterator<Item = Result<Option<bool>>>) -> Result<bool> {
    for value in values {
        if value? != Some(true) {
            return Ok(false);
        }
    }
    Ok(true)
}

/// First descendant `tag` whose parent is `parent` and that carries
/// `attribute`, searched in document order.
///
/// Elements named `tag` under `parent` that lack the attribute are skipped.
pub fn lookup_attribute<'e>(
    element: &'e XmlElement,
    tag: &str,
    parent: &str,
    attribute: &str,
) -> Option<&'e str> {
    let parent_matches = element.is(parent);
    for child in element.children() {
        if parent_matches
            && child.is(tag)
            && let Some(value) = child.attr(attribute)
        {
            return Some(value);
        }
        if let Some(value) = lookup_attribute(child, tag, parent, attribute) {
            return Some(value);
        }
    }
    None
}

impl<'a> StyleCascade<'a> {
    pub fn new(styles: &'a Styles, numbering: &'a NumberingTable, theme: &'a ThemeFonts) -> Self {
        Self {
            styles,
            numbering,
            theme,
        }
    }

    /// Gather the runs and styles of a paragraph.
    pub fn context(&self, paragraph: Paragraph<'a>) -> ParagraphContext<'a> {
        let para_style = self
            .styles
            .resolve(paragraph.format().style_id(), WdStyleType::Paragraph);
        let style_name = para_style
            .and_then(Style::ui_name)
            .unwrap_or(DEFAULT_STYLE_NAME)
            .to_string();
        let doc_style = self.styles.get_by_name(&style_name);

        let runs = paragraph
            .runs()
            .into_iter()
            .map(|run: Run<'a>| {
                let format = run.format();
                RunEntry {
                    style: self
                        .styles
                        .resolve(format.style_id(), WdStyleType::Character),
                    format,
                    text: run.text(),
                }
            })
            .collect();

        ParagraphContext {
            paragraph,
            runs,
            para_style,
            style_name,
            doc_style,
        }
    }

    /// Resolve every attribute of a paragraph into a record.
    pub fn properties(
        &self,
        paragraph: Paragraph<'a>,
        para_id: usize,
        object_type: BlockType,
        hex_id: String,
    ) -> ParagraphProperties {
        let ctx = self.context(paragraph);
        let content = paragraph.text();

        ParagraphProperties {
            para_id,
            object_type,
            hex_id,
            cleaned_content: content.replace('`', "'"),
            content_tab_start: content.chars().take_while(|&c| c == '\t').count(),
            content,
            font_family: self.font_family(&ctx),
            bold: self.bold(&ctx),
            italic: self.italic(&ctx),
            font_size: self.font_size(&ctx),
            style: ctx.style_name.clone(),
            list_style: self.list_style(&ctx),
            left_indent: self.left_indent(&ctx),
            right_indent: self.right_indent(&ctx),
            first_line_indent: self.first_line_indent(&ctx),
            alignment: self.alignment(&ctx).to_xml().to_string(),
            line_space: self.line_spacing(&ctx),
            above_space: self.space_before(&ctx),
            below_space: self.space_after(&ctx),
            borders: self.borders(&ctx),
            shading: self.shading(&ctx),
            single_strike: self.single_strike(&ctx),
            double_strike: self.double_strike(&ctx),
            underline: self.underline(&ctx),
            small_caps: self.small_caps(&ctx),
        }
    }

    /// Paragraph style font, document style font, majority run-style font,
    /// majority run font, then the theme font for the style.
    pub fn font_family(&self, ctx: &ParagraphContext<'a>) -> String {
        let run_style_fonts: SmallVec<[Option<&str>; 8]> = ctx
            .text_bearing_runs()
            .filter_map(|r| r.style)
            .map(|s| s.run_format().font_name())
            .collect();
        let run_fonts: SmallVec<[Option<&str>; 8]> = ctx
            .text_bearing_runs()
            .map(|r| r.format.font_name())
            .collect();

        ctx.para_style_run_format()
            .font_name()
            .or_else(|| ctx.doc_style_run_format().font_name())
            .or_else(|| majority(run_style_fonts))
            .or_else(|| majority(run_fonts))
            .or_else(|| self.theme.font_for_style(&ctx.style_name))
            .unwrap_or(DEFAULT_FONT_FAMILY)
            .to_string()
    }

    /// Style bold, else true only when every text-bearing run is bold.
    pub fn bold(&self, ctx: &ParagraphContext<'a>) -> bool {
        or_fallback("ParaBold", self.try_bold(ctx), false)
    }

    fn try_bold(&self, ctx: &ParagraphContext<'a>) -> Result<bool> {
        if let Some(bold) = ctx.para_style_run_format().bold()? {
            return Ok(bold);
        }
        if let Some(bold) = ctx.doc_style_run_format().bold()? {
            return Ok(bold);
        }
        all_enabled(ctx.text_bearing_runs().map(|r| r.format.bold()))
    }

    /// Style italic, else true only when every run sets italic explicitly
    /// and every text-bearing run is italic.
    pub fn italic(&self, ctx: &ParagraphContext<'a>) -> bool {
        or_fallback("ParaItalic", self.try_italic(ctx), false)
    }

    fn try_italic(&self, ctx: &ParagraphContext<'a>) -> Result<bool> {
        if let Some(italic) = ctx.para_style_run_format().italic()? {
            return Ok(italic);
        }
        if let Some(italic) = ctx.doc_style_run_format().italic()? {
            return Ok(italic);
        }
        for run in &ctx.runs {
            if run.format.italic()?.is_none() {
                return Ok(false);
            }
        }
        all_enabled(ctx.text_bearing_runs().map(|r| r.format.italic()))
    }

    /// First run size, else first run-style size, else paragraph style size,
    /// else document style size.
    pub fn font_size(&self, ctx: &ParagraphContext<'a>) -> f64 {
        or_fallback("ParaFontSize", self.try_font_size(ctx), DEFAULT_FONT_SIZE)
    }

    fn try_font_size(&self, ctx: &ParagraphContext<'a>) -> Result<f64> {
        for run in ctx.text_bearing_runs() {
            if let Some(size) = run.format.font_size()? {
                return Ok(size);
            }
        }
        for style in ctx.text_bearing_runs().filter_map(|r| r.style) {
            if let Some(size) = style.run_format().font_size()? {
                return Ok(size);
            }
        }
        if let Some(size) = ctx.para_style_run_format().font_size()? {
            return Ok(size);
        }
        Ok(ctx
            .doc_style_run_format()
            .font_size()?
            .unwrap_or(DEFAULT_FONT_SIZE))
    }

    /// List membership of the paragraph: its own `w:numPr`, else the style's.
    ///
    /// Only paragraphs with a `w:pPr` are considered.
    fn numbering_ref(&self, ctx: &ParagraphContext<'a>) -> Result<Option<NumberingRef>> {
        if ctx.paragraph.properties().is_none() {
            return Ok(None);
        }
        match ctx.paragraph.format().numbering()? {
            Some(num_ref) => Ok(Some(num_ref)),
            None => ctx.doc_style_format().numbering(),
        }
    }

    /// Number format of the paragraph's list level, empty when not in a list.
    pub fn list_style(&self, ctx: &ParagraphContext<'a>) -> String {
        let result = self.numbering_ref(ctx).map(|num_ref| {
            num_ref
                .and_then(|r| self.numbering.num_format(r))
                .unwrap_or_default()
                .to_string()
        });
        or_fallback("ParaListStyle", result, String::new())
    }

    fn numbering_indent(&self, ctx: &ParagraphContext<'a>) -> Result<Option<f64>> {
        Ok(self
            .numbering_ref(ctx)?
            .and_then(|r| self.numbering.left_indent_pt(r)))
    }

    /// Direct indent minus the list indent, else style indents, else the
    /// list indent alone.
    pub fn left_indent(&self, ctx: &ParagraphContext<'a>) -> f64 {
        or_fallback("ParaLeftIndent", self.try_left_indent(ctx), 0.0)
    }

    fn try_left_indent(&self, ctx: &ParagraphContext<'a>) -> Result<f64> {
        let numbering = self.numbering_indent(ctx)?;
        if let Some(direct) = ctx.paragraph.format().left_indent()? {
            return Ok(direct - numbering.unwrap_or(0.0));
        }
        if let Some(indent) = ctx.para_style_format().left_indent()? {
            return Ok(indent);
        }
        if let Some(indent) = ctx.doc_style_format().left_indent()? {
            return Ok(indent);
        }
        Ok(numbering.unwrap_or(0.0))
    }

    pub fn right_indent(&self, ctx: &ParagraphContext<'a>) -> f64 {
        let result = paragraph_chain(ctx, |f| f.right_indent());
        or_fallback("ParaRightIndent", result, None).unwrap_or(0.0)
    }

    pub fn first_line_indent(&self, ctx: &ParagraphContext<'a>) -> f64 {
        let result = paragraph_chain(ctx, |f| f.first_line_indent());
        or_fallback("ParaFirstLineIndent", result, None).unwrap_or(0.0)
    }

    /// Direct `w:jc`, any `w:jc` under a `w:pPr` of the paragraph, then the
    /// styles.
    pub fn alignment(&self, ctx: &ParagraphContext<'a>) -> WdParagraphAlignment {
        or_fallback(
            "ParaAlignment",
            self.try_alignment(ctx),
            WdParagraphAlignment::default(),
        )
    }

    fn try_alignment(&self, ctx: &ParagraphContext<'a>) -> Result<WdParagraphAlignment> {
        if let Some(alignment) = ctx.paragraph.format().alignment()? {
            return Ok(alignment);
        }
        let element = ctx.paragraph.element();
        if let Some(value) = lookup_attribute(element, "w:jc", "w:pPr", "w:val")
            && let Some(alignment) = WdParagraphAlignment::from_xml(value)
        {
            return Ok(alignment);
        }
        if let Some(alignment) = ctx.para_style_format().alignment()? {
            return Ok(alignment);
        }
        Ok(ctx.doc_style_format().alignment()?.unwrap_or_default())
    }

    pub fn line_spacing(&self, ctx: &ParagraphContext<'a>) -> f64 {
        let result = paragraph_chain(ctx, |f| f.line_spacing());
        or_fallback("ParaLineSpace", result, None).map_or(DEFAULT_LINE_SPACING, |s| s.value())
    }

    pub fn space_before(&self, ctx: &ParagraphContext<'a>) -> f64 {
        let result = paragraph_chain(ctx, |f| f.space_before());
        or_fallback("ParaAboveSpace", result, None).unwrap_or(0.0)
    }

    pub fn space_after(&self, ctx: &ParagraphContext<'a>) -> f64 {
        let result = paragraph_chain(ctx, |f| f.space_after());
        or_fallback("ParaBelowSpace", result, None).unwrap_or(0.0)
    }

    /// Border edges read from `w:pBdr`, in [`BorderEdge::ALL`] order.
    pub fn borders(&self, ctx: &ParagraphContext<'a>) -> [Border; 5] {
        let element = ctx.paragraph.element();
        BorderEdge::ALL.map(|edge| {
            let attr = |name: &str, default: &str| {
                lookup_attribute(element, edge.tag(), "w:pBdr", name)
                    .unwrap_or(default)
                    .to_string()
            };
            let fallback = Border::default();
            Border {
                val: attr("w:val", &fallback.val),
                sz: attr("w:sz", &fallback.sz),
                space: attr("w:space", &fallback.space),
                color: attr("w:color", &fallback.color),
            }
        })
    }

    /// Shading read from `w:pPr/w:shd`.
    pub fn shading(&self, ctx: &ParagraphContext<'a>) -> Shading {
        let element = ctx.paragraph.element();
        let attr = |name: &str| lookup_attribute(element, "w:shd", "w:pPr", name).map(str::to_string);
        Shading {
            val: attr("w:val"),
            color: attr("w:color"),
            fill: attr("w:fill"),
        }
    }

    /// True when every non-empty run is struck through, including when
    /// there are none.
    pub fn single_strike(&self, ctx: &ParagraphContext<'a>) -> bool {
        let result = none_disabled(ctx.non_empty_runs().map(|r| r.format.strike()));
        or_fallback("ParaSingleStrike", result, false)
    }

    /// Double strike counterpart of [`Self::single_strike`].
    pub fn double_strike(&self, ctx: &ParagraphContext<'a>) -> bool {
        let result = none_disabled(ctx.non_empty_runs().map(|r| r.format.double_strike()));
        or_fallback("ParaDoubleStrike", result, false)
    }

    /// Underline of a single-run paragraph, else the document style's.
    pub fn underline(&self, ctx: &ParagraphContext<'a>) -> String {
        or_fallback("ParaUnderline", self.try_underline(ctx), String::new())
    }

    fn try_underline(&self, ctx: &ParagraphContext<'a>) -> Result<String> {
        let mut non_empty = ctx.non_empty_runs();
        if let (Some(run), None) = (non_empty.next(), non_empty.next())
            && let Some(underline) = run.format.underline()?
        {
            return Ok(underline.to_xml().to_string());
        }
        Ok(ctx
            .doc_style_run_format()
            .underline()?
            .map(|u| u.to_xml().to_string())
            .unwrap_or_default())
    }

    /// `No Text` when no run has visible text, else whether any non-empty
    /// run is in small caps.
    pub fn small_caps(&self, ctx: &ParagraphContext<'a>) -> SmallCaps {
        if !ctx.runs.iter().any(|r| r.text.is_visible()) {
            return SmallCaps::NoText;
        }
        let result = ctx
            .non_empty_runs()
            .map(|r| r.format.small_caps())
            .collect::<Result<SmallVec<[_; 8]>>>()
            .map(|values| SmallCaps::Enabled(values.contains(&Some(true))));
        or_fallback("ParaSmallCaps", result, SmallCaps::Enabled(false))
    }
}

/// Direct paragraph formatting, then the paragraph style, then the document
/// style.
fn paragraph_chain<'a, T>(
    ctx: &ParagraphContext<'a>,
    get: impl Fn(&ParagraphFormat<'a>) -> Result<Option<T>>,
) -> Result<Option<T>> {
    if let Some(value) = get(&ctx.paragraph.format())? {
        return Ok(Some(value));
    }
    if let Some(value) = get(&ctx.para_style_format())? {
        return Ok(Some(value));
    }
    get(&ctx.doc_style_format())
}
