/// Theme support for Word documents.
///
/// Only the font scheme is read: the major (heading) and minor (body) Latin
/// typefaces.
use crate::ooxml::error::{OoxmlError, Result};
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

/// A single theme part.
///
/// # Examples
///
/// ```rust
/// use paraprops::ooxml::docx::theme::Theme;
///
/// let xml = br#"<a:theme name="Office"><a:themeElements><a:fontScheme>
///   <a:majorFont><a:latin typeface="Calibri Light"/></a:majorFont>
///   <a:minorFont><a:latin typeface="Calibri"/></a:minorFont>
/// </a:fontScheme></a:themeElements></a:theme>"#;
/// let theme = Theme::from_xml(xml).unwrap();
/// assert_eq!(theme.major_font(), Some("Calibri Light"));
/// assert_eq!(theme.minor_font(), Some("Calibri"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Theme {
    /// Theme name
    name: Option<String>,
    /// Major font (for headings)
    major_font: Option<String>,
    /// Minor font (for body text)
    minor_font: Option<String>,
}

impl Theme {
    /// Get the theme name.
    #[inline]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Get the major font (typically used for headings).
    #[inline]
    pub fn major_font(&self) -> Option<&str> {
        self.major_font.as_deref()
    }

    /// Get the minor font (typically used for body text).
    #[inline]
    pub fn minor_font(&self) -> Option<&str> {
        self.minor_font.as_deref()
    }

    /// Parse the content of a theme part.
    ///
    /// When a font slot holds several `a:latin` typefaces the last one is
    /// used. Input that ends with elements still open is rejected.
    pub fn from_xml(xml: &[u8]) -> Result<Self> {
        let mut reader = Reader::from_reader(xml);
        reader.config_mut().trim_text(true);

        let mut theme = Self::default();
        let mut in_major_font = false;
        let mut in_minor_font = false;
        let mut depth = 0usize;
        let mut buf = Vec::with_capacity(1024);

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(e)) => {
                    depth += 1;
                    match e.local_name().as_ref() {
                        b"theme" => theme.name = attr_value(&e, &reader, b"name")?,
                        b"majorFont" => in_major_font = true,
                        b"minorFont" => in_minor_font = true,
                        b"latin" => theme.record_latin(&e, &reader, in_major_font, in_minor_font)?,
                        _ => {},
                    }
                },
                Ok(Event::Empty(e)) => match e.local_name().as_ref() {
                    b"theme" => theme.name = attr_value(&e, &reader, b"name")?,
                    b"latin" => theme.record_latin(&e, &reader, in_major_font, in_minor_font)?,
                    _ => {},
                },
                Ok(Event::End(e)) => {
                    depth = depth.saturating_sub(1);
                    match e.local_name().as_ref() {
                        b"majorFont" => in_major_font = false,
                        b"minorFont" => in_minor_font = false,
                        _ => {},
                    }
                },
                Ok(Event::Eof) => break,
                Err(e) => return Err(OoxmlError::Xml(e.to_string())),
                _ => {},
            }
            buf.clear();
        }

        if depth != 0 {
            return Err(OoxmlError::Xml(format!(
                "Theme part ends with {} unclosed element(s)",
                depth
            )));
        }

        Ok(theme)
    }

    fn record_latin(
        &mut self,
        e: &BytesStart<'_>,
        reader: &Reader<&[u8]>,
        in_major_font: bool,
        in_minor_font: bool,
    ) -> Result<()> {
        let Some(font) = attr_value(e, reader, b"typeface")? else {
            return Ok(());
        };
        if in_major_font {
            self.major_font = Some(font);
        } else if in_minor_font {
            self.minor_font = Some(font);
        }
        Ok(())
    }
}

fn attr_value(e: &BytesStart<'_>, reader: &Reader<&[u8]>, name: &[u8]) -> Result<Option<String>> {
    for attr in e.attributes().flatten() {
        if attr.key.local_name().as_ref() == name {
            let value = attr
                .decode_and_unescape_value(reader.decoder())
                .map_err(|e| OoxmlError::Xml(e.to_string()))?;
            return Ok(Some(value.into_owned()));
        }
    }
    Ok(None)
}

/// Major and minor theme fonts of a document.
///
/// Both default to the empty string when no theme part provides them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThemeFonts {
    pub major_font: String,
    pub minor_font: String,
}

impl ThemeFonts {
    /// Merge theme parts in the order given; a later part overrides the
    /// slots it defines.
    pub fn from_themes<'a, I>(themes: I) -> Self
    where
        I: IntoIterator<Item = &'a Theme>,
    {
        let mut fonts = Self::default();
        for theme in themes {
            if let Some(font) = theme.major_font() {
                fonts.major_font = font.to_string();
            }
            if let Some(font) = theme.minor_font() {
                fonts.minor_font = font.to_string();
            }
        }
        fonts
    }

    /// Font used for a paragraph style: major for headings, minor otherwise.
    ///
    /// Returns `None` when the selected slot is empty.
    pub fn font_for_style(&self, style_name: &str) -> Option<&str> {
        let font = if style_name.to_lowercase().contains("heading") {
            &self.major_font
        } else {
            &self.minor_font
        };
        (!font.is_empty()).then_some(font.as_str())
    }
}
