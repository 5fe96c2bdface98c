/// Constant values related to the Open Packaging Convention.
///
/// Content types, relationship types and well-known part names used when
/// locating the parts of a WordprocessingML package.

/// Content type URIs (like MIME-types) that specify a part's format
pub mod content_type {
    pub const WML_DOCUMENT_MAIN: &str =
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml";
    pub const WML_TEMPLATE_MAIN: &str =
        "application/vnd.openxmlformats-officedocument.wordprocessingml.template.main+xml";
    pub const WML_DOCUMENT_MACRO_MAIN: &str = "application/vnd.ms-word.document.macroEnabled.main+xml";
    pub const WML_TEMPLATE_MACRO_MAIN: &str = "application/vnd.ms-word.template.macroEnabledTemplate.main+xml";

    /// Content types accepted for the main document part.
    pub const WML_MAIN_TYPES: [&str; 4] = [
        WML_DOCUMENT_MAIN,
        WML_TEMPLATE_MAIN,
        WML_DOCUMENT_MACRO_MAIN,
        WML_TEMPLATE_MACRO_MAIN,
    ];
}

/// Relationship type URIs used in OPC packages
pub mod relationship_type {
    pub const OFFICE_DOCUMENT: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument";
    pub const NUMBERING: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/numbering";
    pub const STYLES: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles";
}

/// Open XML relationship target modes
pub mod target_mode {
    /// External relationship target mode (e.g., hyperlinks to external URLs)
    pub const EXTERNAL: &str = "External";
}

/// Part names used when relationships are missing or incomplete.
pub mod default_partname {
    pub const CONTENT_TYPES: &str = "/[Content_Types].xml";
    pub const MAIN_DOCUMENT: &str = "/word/document.xml";
    pub const STYLES: &str = "/word/styles.xml";
    pub const NUMBERING: &str = "/word/numbering.xml";
    /// Prefix shared by all theme parts of a Word package.
    pub const THEME_PREFIX: &str = "/word/theme/";
}
