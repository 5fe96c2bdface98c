/// Enumerations for Word document formatting values.
///
/// Each enumeration converts to and from the attribute value used in
/// WordprocessingML markup.
use std::fmt;

/// Specifies the type of a style definition.
///
/// Corresponds to the VBA `WdStyleType` enumeration.
///
/// # Examples
///
/// ```rust
/// use paraprops::ooxml::docx::enums::WdStyleType;
///
/// assert_eq!(WdStyleType::from_xml("character"), Some(WdStyleType::Character));
/// assert_eq!(WdStyleType::List.to_xml(), "numbering");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum WdStyleType {
    /// Paragraph style.
    Paragraph = 1,
    /// Character style.
    Character = 2,
    /// Table style.
    Table = 3,
    /// List (numbering) style.
    List = 4,
}

impl WdStyleType {
    /// Convert the style type to its XML attribute value.
    #[inline]
    pub const fn to_xml(self) -> &'static str {
        match self {
            Self::Paragraph => "paragraph",
            Self::Character => "character",
            Self::Table => "table",
            Self::List => "numbering",
        }
    }

    /// Parse style type from XML attribute value.
    ///
    /// Returns `None` if the value is not recognized.
    #[inline]
    pub fn from_xml(s: &str) -> Option<Self> {
        match s {
            "paragraph" => Some(Self::Paragraph),
            "character" => Some(Self::Character),
            "table" => Some(Self::Table),
            "numbering" => Some(Self::List),
            _ => None,
        }
    }
}

impl Default for WdStyleType {
    #[inline]
    fn default() -> Self {
        // A style without w:type is a paragraph style
        Self::Paragraph
    }
}

impl fmt::Display for WdStyleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Paragraph => write!(f, "Paragraph"),
            Self::Character => write!(f, "Character"),
            Self::Table => write!(f, "Table"),
            Self::List => write!(f, "List"),
        }
    }
}

/// Paragraph justification (`w:jc`).
///
/// Corresponds to the VBA `WdParagraphAlignment` enumeration. The logical
/// values `start` and `end` are read as left and right.
///
/// # Examples
///
/// ```rust
/// use paraprops::ooxml::docx::enums::WdParagraphAlignment;
///
/// assert_eq!(WdParagraphAlignment::from_xml("both"), Some(WdParagraphAlignment::Justify));
/// assert_eq!(WdParagraphAlignment::from_xml("start"), Some(WdParagraphAlignment::Left));
/// assert_eq!(WdParagraphAlignment::Justify.to_xml(), "both");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum WdParagraphAlignment {
    #[default]
    Left = 0,
    Center = 1,
    Right = 2,
    Justify = 3,
    Distribute = 4,
    JustifyMedium = 5,
    JustifyHigh = 7,
    JustifyLow = 8,
    ThaiJustify = 9,
}

impl WdParagraphAlignment {
    /// Convert the alignment to its XML attribute value.
    #[inline]
    pub const fn to_xml(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
            Self::Justify => "both",
            Self::Distribute => "distribute",
            Self::JustifyMedium => "mediumKashida",
            Self::JustifyHigh => "highKashida",
            Self::JustifyLow => "lowKashida",
            Self::ThaiJustify => "thaiDistribute",
        }
    }

    /// Parse alignment from XML attribute value.
    ///
    /// Returns `None` if the value is not recognized.
    #[inline]
    pub fn from_xml(s: &str) -> Option<Self> {
        match s {
            "left" | "start" => Some(Self::Left),
            "center" => Some(Self::Center),
            "right" | "end" => Some(Self::Right),
            "both" => Some(Self::Justify),
            "distribute" => Some(Self::Distribute),
            "mediumKashida" => Some(Self::JustifyMedium),
            "highKashida" => Some(Self::JustifyHigh),
            "lowKashida" => Some(Self::JustifyLow),
            "thaiDistribute" => Some(Self::ThaiJustify),
            _ => None,
        }
    }
}

impl fmt::Display for WdParagraphAlignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_xml())
    }
}

/// Underline kind of a run (`w:u/@w:val`).
///
/// Corresponds to the VBA `WdUnderline` enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WdUnderline {
    None,
    Single,
    Words,
    Double,
    Thick,
    Dotted,
    DottedHeavy,
    Dash,
    DashHeavy,
    DashLong,
    DashLongHeavy,
    DotDash,
    DotDashHeavy,
    DotDotDash,
    DotDotDashHeavy,
    Wavy,
    WavyHeavy,
    WavyDouble,
}

impl WdUnderline {
    /// Convert the underline kind to its XML attribute value.
    #[inline]
    pub const fn to_xml(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Single => "single",
            Self::Words => "words",
            Self::Double => "double",
            Self::Thick => "thick",
            Self::Dotted => "dotted",
            Self::DottedHeavy => "dottedHeavy",
            Self::Dash => "dash",
            Self::DashHeavy => "dashedHeavy",
            Self::DashLong => "dashLong",
            Self::DashLongHeavy => "dashLongHeavy",
            Self::DotDash => "dotDash",
            Self::DotDashHeavy => "dashDotHeavy",
            Self::DotDotDash => "dotDotDash",
            Self::DotDotDashHeavy => "dashDotDotHeavy",
            Self::Wavy => "wave",
            Self::WavyHeavy => "wavyHeavy",
            Self::WavyDouble => "wavyDouble",
        }
    }

    /// Parse underline kind from XML attribute value.
    ///
    /// Returns `None` if the value is not recognized.
    pub fn from_xml(s: &str) -> Option<Self> {
        let kind = match s {
            "none" => Self::None,
            "single" => Self::Single,
            "words" => Self::Words,
            "double" => Self::Double,
            "thick" => Self::Thick,
            "dotted" => Self::Dotted,
            "dottedHeavy" => Self::DottedHeavy,
            "dash" => Self::Dash,
            "dashedHeavy" => Self::DashHeavy,
            "dashLong" => Self::DashLong,
            "dashLongHeavy" => Self::DashLongHeavy,
            "dotDash" => Self::DotDash,
            "dashDotHeavy" => Self::DotDashHeavy,
            "dotDotDash" => Self::DotDotDash,
            "dashDotDotHeavy" => Self::DotDotDashHeavy,
            "wave" => Self::Wavy,
            "wavyHeavy" => Self::WavyHeavy,
            "wavyDouble" => Self::WavyDouble,
            _ => return None,
        };
        Some(kind)
    }
}

impl fmt::Display for WdUnderline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_xml())
    }
}

/// Interpretation of `w:spacing/@w:line`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WdLineSpacingRule {
    /// Multiple of a single line, in 240ths.
    #[default]
    Auto,
    /// Exact height in twips.
    Exact,
    /// Minimum height in twips.
    AtLeast,
}

impl WdLineSpacingRule {
    #[inline]
    pub const fn to_xml(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Exact => "exact",
            Self::AtLeast => "atLeast",
        }
    }

    #[inline]
    pub fn from_xml(s: &str) -> Option<Self> {
        match s {
            "auto" => Some(Self::Auto),
            "exact" => Some(Self::Exact),
            "atLeast" => Some(Self::AtLeast),
            _ => None,
        }
    }
}

/// Edges of a paragraph border (`w:pBdr` children).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BorderEdge {
    Top,
    Left,
    Bottom,
    Right,
    Between,
}

impl BorderEdge {
    /// All edges in record order.
    pub const ALL: [BorderEdge; 5] = [
        BorderEdge::Top,
        BorderEdge::Left,
        BorderEdge::Bottom,
        BorderEdge::Right,
        BorderEdge::Between,
    ];

    /// Qualified element name of this edge.
    #[inline]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Top => "w:top",
            Self::Left => "w:left",
            Self::Bottom => "w:bottom",
            Self::Right => "w:right",
            Self::Between => "w:between",
        }
    }
}

impl fmt::Display for BorderEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Top => write!(f, "Top"),
            Self::Left => write!(f, "Left"),
            Self::Bottom => write!(f, "Bottom"),
            Self::Right => write!(f, "Right"),
            Self::Between => write!(f, "Between"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_type_conversion() {
        assert_eq!(WdStyleType::from_xml("paragraph"), Some(WdStyleType::Paragraph));
        assert_eq!(WdStyleType::from_xml("numbering"), Some(WdStyleType::List));
        assert_eq!(WdStyleType::from_xml("bogus"), None);
        assert_eq!(WdStyleType::default(), WdStyleType::Paragraph);
    }

    #[test]
    fn test_alignment_conversion() {
        assert_eq!(
            WdParagraphAlignment::from_xml("end"),
            Some(WdParagraphAlignment::Right)
        );
        assert_eq!(WdParagraphAlignment::JustifyLow.to_xml(), "lowKashida");
        assert_eq!(WdParagraphAlignment::default().to_xml(), "left");
        assert_eq!(WdParagraphAlignment::from_xml("justify"), None);
    }

    #[test]
    fn test_underline_conversion() {
        for value in ["single", "double", "wave", "dashDotHeavy", "none", "words"] {
            let kind = WdUnderline::from_xml(value).unwrap();
            assert_eq!(kind.to_xml(), value);
        }
        assert_eq!(WdUnderline::from_xml("squiggly"), None);
    }

    #[test]
    fn test_border_edges_in_order() {
        let names: Vec<String> = BorderEdge::ALL.iter().map(|e| e.to_string()).collect();
        assert_eq!(names, ["Top", "Left", "Bottom", "Right", "Between"]);
        assert_eq!(BorderEdge::Between.tag(), "w:between");
    }
}
