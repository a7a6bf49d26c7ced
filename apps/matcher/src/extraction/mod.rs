// Extraction layer: PDF text, regex attributes, and the parsers that assemble profiles.
// Pure and synchronous; no I/O beyond the bytes handed in.

pub mod attributes;
pub mod pdf;
pub mod profile;
pub mod vocab;

pub use attributes::AttributeExtractor;
pub use pdf::PdfTextExtractor;
pub use profile::ProfileParser;
