//! Configuration types for property extraction.
//!
//! This module defines the options used to customize which paragraphs are
//! emitted and how the records are rendered.

/// Output encoding of the extracted records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// `ArrayOfParagraphProperties` XML document
    #[default]
    Xml,
    /// JSON array of objects keyed by field name
    Json {
        /// Indent the output
        pretty: bool,
    },
}

/// Field emitted as CDATA by default.
pub const DEFAULT_CDATA_FIELD: &str = "ParaContent";

/// Configuration options for property extraction.
///
/// # Examples
///
/// ```rust
/// use paraprops::extract::{ExtractOptions, OutputFormat};
///
/// // Create with defaults
/// let options = ExtractOptions::default();
/// assert_eq!(options.cdata_fields, vec!["ParaContent".to_string()]);
///
/// // Or customize
/// let options = ExtractOptions::new()
///     .with_table_cells(true)
///     .with_output(OutputFormat::Json { pretty: true });
/// ```
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// Field names whose values are written as CDATA sections
    pub cdata_fields: Vec<String>,
    /// Whether paragraphs inside table cells are emitted
    pub include_table_cells: bool,
    /// How the records are rendered
    pub output: OutputFormat,
    /// Whether untagged paragraphs get a generated `w14:paraId`
    pub assign_missing_ids: bool,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            cdata_fields: vec![DEFAULT_CDATA_FIELD.to_string()],
            include_table_cells: false,
            output: OutputFormat::Xml,
            assign_missing_ids: true,
        }
    }
}

impl ExtractOptions {
    /// Create a new `ExtractOptions` with default values.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the set of fields written as CDATA.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use paraprops::extract::ExtractOptions;
    ///
    /// let options = ExtractOptions::new().with_cdata_fields(["ParaContent", "ParaCleanedContent"]);
    /// assert!(options.is_cdata_field("ParaCleanedContent"));
    /// ```
    pub fn with_cdata_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.cdata_fields = fields.into_iter().map(Into::into).collect();
        self
    }

    /// Set whether table-cell paragraphs are emitted.
    ///
    /// When enabled, every paragraph of every cell is emitted as a
    /// `table_cell_paragraph` record and takes a `ParaID`.
    #[inline]
    pub fn with_table_cells(mut self, include: bool) -> Self {
        self.include_table_cells = include;
        self
    }

    /// Set the output format.
    #[inline]
    pub fn with_output(mut self, output: OutputFormat) -> Self {
        self.output = output;
        self
    }

    /// Set whether missing paragraph identifiers are generated and written
    /// back into the document.
    #[inline]
    pub fn with_id_assignment(mut self, assign: bool) -> Self {
        self.assign_missing_ids = assign;
        self
    }

    /// Whether `field` is written as CDATA.
    #[inline]
    pub fn is_cdata_field(&self, field: &str) -> bool {
        self.cdata_fields.iter().any(|f| f == field)
    }
}
