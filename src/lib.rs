//! Paraprops - effective paragraph formatting for Word documents
//!
//! This library resolves the formatting every paragraph of a `.docx` document
//! actually displays with. Direct paragraph and run properties, the paragraph
//! style, the document style of the same name, character styles, numbering
//! definitions and theme fonts are combined into one flat property record per
//! paragraph, rendered as XML or JSON.
//!
//! # Features
//!
//! - **Style cascade**: font family, size, emphasis, indents, spacing,
//!   alignment, borders, shading, strike, underline and small caps
//! - **Block classification**: plain, text-box, image and shape paragraphs,
//!   with optional table-cell paragraphs
//! - **Stable identity**: missing `w14:paraId` attributes are generated so
//!   records can be correlated with the document
//! - **Degradation**: a malformed attribute falls back to its default and is
//!   logged instead of aborting the document
//!
//! # Example
//!
//! ```no_run
//! use paraprops::{ExtractOptions, extract_docx_properties};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let xml = extract_docx_properties("document.docx", &ExtractOptions::default())?;
//! println!("{}", xml);
//! # Ok(())
//! # }
//! ```
//!
//! # Example - Working with records
//!
//! ```no_run
//! use paraprops::ooxml::docx::Package;
//! use paraprops::extract::{ExtractOptions, extract_properties};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut doc = Package::open("document.docx")?.document()?;
//! for record in extract_properties(&mut doc, &ExtractOptions::default())? {
//!     println!("{} {} {}pt", record.hex_id, record.font_family, record.font_size);
//! }
//! # Ok(())
//! # }
//! ```

pub mod common;
pub mod extract;
pub mod ooxml;

pub use common::{Error, Result};
pub use extract::{
    ExtractOptions, OutputFormat, ParagraphProperties, extract_docx_bytes, extract_docx_properties,
    extract_properties, render,
};
pub use ooxml::docx::{Document, Package};
