/// Open Packaging Convention (OPC) support.
///
/// A .docx file is a ZIP archive of XML parts tied together by relationship
/// parts. This module reads the archive and resolves the parts a Word
/// document needs.
pub mod constants;
pub mod package;
pub mod rel;

pub use package::OpcPackage;
pub use rel::Relationship;
