//! TIFF container format logic.
//!
//! Currently limited to the 8-byte classic TIFF header: byte-order
//! detection, format-magic validation, and extraction of the first IFD
//! offset. Everything past the header (IFDs, tags, image data) belongs to
//! the consuming decoder.

mod header;

pub use header::{is_tiff_header, TiffHeader, TIFF_HEADER_SIZE};
