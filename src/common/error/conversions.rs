//! Error conversion implementations.
//!
//! This module contains From trait implementations to convert from internal
//! error types to the unified Error type.

use super::types::Error;
use crate::ooxml::error::OoxmlError;

impl From<OoxmlError> for Error {
    fn from(err: OoxmlError) -> Self {
        match err {
            OoxmlError::Io(e) => Error::Io(e),
            OoxmlError::Xml(s) => Error::XmlError(s),
            OoxmlError::PartNotFound(s) => Error::ComponentNotFound(s),
            OoxmlError::InvalidContentType { expected, got } => {
                Error::InvalidContentType { expected, got }
            },
            OoxmlError::InvalidFormat(s) => Error::InvalidFormat(s),
            OoxmlError::InvalidValue { .. } => Error::InvalidFormat(err.to_string()),
            OoxmlError::UnsupportedContainer(s) => Error::UnsupportedContainer(s),
            OoxmlError::Zip(s) => Error::ZipError(s),
        }
    }
}

impl From<quick_xml::Error> for Error {
    fn from(err: quick_xml::Error) -> Self {
        Error::XmlError(err.to_string())
    }
}

impl From<zip::result::ZipError> for Error {
    fn from(err: zip::result::ZipError) -> Self {
        Error::ZipError(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Render(format!("JSON serialization error: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ooxml_error_maps_to_unified_variant() {
        let err: Error = OoxmlError::PartNotFound("/word/document.xml".to_string()).into();
        assert!(matches!(err, Error::ComponentNotFound(ref s) if s == "/word/document.xml"));

        let err: Error = OoxmlError::UnsupportedContainer("w:p".to_string()).into();
        assert!(matches!(err, Error::UnsupportedContainer(_)));
    }

    #[test]
    fn test_invalid_value_keeps_context() {
        let err: Error = OoxmlError::InvalidValue {
            attribute: "w:sz".to_string(),
            value: "big".to_string(),
        }
        .into();
        let message = err.to_string();
        assert!(message.contains("w:sz"));
        assert!(message.contains("big"));
    }

    #[test]
    fn test_loader_failures_keep_their_kind() {
        let err: Error = OoxmlError::Zip("invalid Zip archive".to_string()).into();
        assert!(matches!(err, Error::ZipError(_)));

        let err: Error = OoxmlError::Xml("unclosed element".to_string()).into();
        assert!(matches!(err, Error::XmlError(_)));

        let err: Error = OoxmlError::InvalidFormat("no main document".to_string()).into();
        assert!(matches!(err, Error::InvalidFormat(_)));

        let err: Error = OoxmlError::Io(std::io::Error::other("disk")).into();
        assert!(matches!(err, Error::Io(_)));

        let err: Error = OoxmlError::InvalidContentType {
            expected: "application/xml".to_string(),
            got: "image/png".to_string(),
        }
        .into();
        assert!(matches!(err, Error::InvalidContentType { .. }));
    }
}
