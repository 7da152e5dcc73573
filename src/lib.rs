//! # tiff-probe
//!
//! Byte-order sniffing and header decoding for TIFF-style containers.
//!
//! This library answers two questions a format dispatcher asks of a
//! candidate byte stream: "is this a TIFF?" (without consuming the stream)
//! and "what does its header say?" (byte order and first IFD offset). It is
//! a library-level component: the surrounding decoder owns the byte source's
//! lifecycle, and everything past the 8-byte header (IFD parsing, tag
//! decoding, pixel data) is out of scope here.
//!
//! ## Architecture
//!
//! The library is organized into two modules:
//!
//! - [`io`] - Byte-order-aware cursor with snapshot/restore, plus endian
//!   decoding helpers
//! - [`mod@format`] - TIFF header probing and parsing
//!
//! ## Example
//!
//! ```rust
//! use std::io::Cursor;
//! use tiff_probe::{ByteOrder, ByteOrderCursor, TiffHeader};
//!
//! // Little-endian TIFF header, first IFD at offset 16
//! let bytes: &[u8] = &[0x49, 0x49, 0x2A, 0x00, 0x10, 0x00, 0x00, 0x00];
//! let mut cursor = ByteOrderCursor::new(Cursor::new(bytes)).unwrap();
//!
//! // Non-destructive probe: the cursor does not move
//! assert!(TiffHeader::is_valid_header(&mut cursor));
//! assert_eq!(cursor.position(), 0);
//!
//! // Destructive parse: the cursor ends up just past the header
//! let header = TiffHeader::parse(&mut cursor).unwrap();
//! assert_eq!(header.byte_order, ByteOrder::LittleEndian);
//! assert_eq!(header.first_ifd_offset, 16);
//! ```

pub mod error;
pub mod format;
pub mod io;

// Re-export commonly used types
pub use error::TiffError;
pub use format::{is_tiff_header, TiffHeader, TIFF_HEADER_SIZE};
pub use io::{
    read_i16_be, read_i16_le, read_i32_be, read_i32_le, read_u16_be, read_u16_le, read_u32_be,
    read_u32_le, ByteOrder, ByteOrderCursor, CursorSnapshot,
};
