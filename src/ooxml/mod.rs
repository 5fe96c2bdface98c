//! Office Open XML (OOXML) support for Word documents.
//!
//! The implementation is based on the Open Packaging Conventions (OPC) and
//! follows the structure of the python-docx library, adapted for Rust.
//!
//! # Architecture
//!
//! 1. **OPC Layer** (`opc`): Package handling (ZIP, parts, relationships, content types)
//! 2. **Errors** (`error`): The OOXML-layer error type
//! 3. **WordprocessingML** (`docx`): Element tree, paragraph/run/table views,
//!    styles, numbering and theme parts
//!
//! # Example: Working with Word Documents
//!
//! ```rust,no_run
//! use paraprops::ooxml::docx::Package;
//!
//! // Open and read a document
//! let pkg = Package::open("document.docx")?;
//! let doc = pkg.document()?;
//!
//! // Extract text content
//! let text = doc.text()?;
//! println!("Document contains {} paragraphs", doc.paragraphs()?.len());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
pub mod docx;
pub mod error;
pub mod opc;

pub use error::{OoxmlError, Result};
