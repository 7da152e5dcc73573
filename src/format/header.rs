//! TIFF header sniffing and decoding.
//!
//! # TIFF Header Structure (8 bytes)
//! ```text
//! Bytes 0-1: Byte order marker (0x49 0x49 = little-endian "II",
//!            0x4D 0x4D = big-endian "MM")
//! Bytes 2-3: Format magic (42), read in the declared byte order
//! Bytes 4-7: Offset to first IFD, read in the declared byte order
//! ```
//!
//! Decoding runs in two phases. The marker bytes are read raw, because no
//! byte order is known until they have been seen; every later field is then
//! decoded in the order the marker declared. The codec offers both a
//! destructive [`TiffHeader::parse`] and a non-destructive
//! [`TiffHeader::is_valid_header`] probe that a format dispatcher can run
//! against a candidate stream without consuming it.

use std::io::{Read, Seek};

use tracing::{debug, trace};

use crate::error::TiffError;
use crate::io::{ByteOrder, ByteOrderCursor};

// =============================================================================
// Constants
// =============================================================================

/// Marker byte for little-endian streams ("I" for Intel, doubled)
const MARKER_LITTLE_ENDIAN: u8 = 0x49;

/// Marker byte for big-endian streams ("M" for Motorola, doubled)
const MARKER_BIG_ENDIAN: u8 = 0x4D;

/// Format magic confirming the stream is a classic TIFF
const TIFF_MAGIC: i16 = 42;

/// Size of a classic TIFF header in bytes
pub const TIFF_HEADER_SIZE: usize = 8;

// =============================================================================
// TiffHeader
// =============================================================================

/// Decoded TIFF stream header.
///
/// Built once per stream by a successful [`TiffHeader::parse`] and immutable
/// thereafter. Holds the byte order every subsequent multi-byte value in the
/// stream must be read with, and the offset of the first IFD relative to the
/// start of the same byte source the header came from. The offset is not
/// bounds-checked here; whether it lands inside the source is the consuming
/// decoder's responsibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TiffHeader {
    /// Byte order for all multi-byte values in the stream
    pub byte_order: ByteOrder,

    /// Offset of the first IFD, relative to the start of the byte source
    pub first_ifd_offset: u32,
}

impl TiffHeader {
    /// Test whether a valid TIFF header starts at the cursor's current
    /// position, without consuming it.
    ///
    /// The cursor's position and byte order after this call are identical
    /// to before it, on every path, success included. Mismatched marker
    /// bytes, a wrong magic, and a stream too short to hold a full header
    /// all report `false`; none of them raise. Absence of a TIFF header is
    /// an expected, silent outcome for a dispatcher trying several format
    /// detectors in sequence.
    pub fn is_valid_header<R: Read + Seek>(cursor: &mut ByteOrderCursor<R>) -> bool {
        let snapshot = cursor.snapshot();
        let outcome = Self::read_header(cursor);
        // the probe must never move the cursor, even when it succeeds
        let restored = cursor.restore(snapshot).is_ok();
        let valid = restored && outcome.is_ok();
        trace!(valid, "probed stream for TIFF header");
        valid
    }

    /// Decode the 8-byte header at the cursor's current position.
    ///
    /// On success the cursor's byte order is fixed to the order the stream
    /// declared, and its position sits immediately after the header, ready
    /// for IFD parsing by the consuming decoder.
    ///
    /// # Errors
    /// - [`TiffError::InvalidFormat`] if the marker bytes are neither "II"
    ///   nor "MM", or the format magic is not 42
    /// - [`TiffError::TruncatedInput`] if the stream ends inside the header
    pub fn parse<R: Read + Seek>(cursor: &mut ByteOrderCursor<R>) -> Result<Self, TiffError> {
        let header = Self::read_header(cursor)?;
        debug!(
            byte_order = ?header.byte_order,
            first_ifd_offset = header.first_ifd_offset,
            "decoded TIFF header"
        );
        Ok(header)
    }

    /// Shared decode path for probe and parse.
    fn read_header<R: Read + Seek>(cursor: &mut ByteOrderCursor<R>) -> Result<Self, TiffError> {
        // Phase 1: the marker bytes are read raw; no order is known yet.
        let low = cursor.read_u8()?;
        let high = cursor.read_u8()?;
        let byte_order = match (low, high) {
            (MARKER_LITTLE_ENDIAN, MARKER_LITTLE_ENDIAN) => ByteOrder::LittleEndian,
            (MARKER_BIG_ENDIAN, MARKER_BIG_ENDIAN) => ByteOrder::BigEndian,
            _ => return Err(TiffError::bad_order_marker(low, high)),
        };

        // Phase 2: every remaining field decodes in the declared order.
        cursor.set_byte_order(byte_order);

        let magic = cursor.read_i16()?;
        if magic != TIFF_MAGIC {
            return Err(TiffError::bad_magic(magic));
        }

        let first_ifd_offset = cursor.read_u32()?;

        Ok(TiffHeader {
            byte_order,
            first_ifd_offset,
        })
    }
}

// =============================================================================
// Slice-Level Sniffing
// =============================================================================

/// Check whether an already-buffered prefix starts with a valid TIFF header.
///
/// Allocation-free convenience for dispatchers that hold the first bytes of
/// a candidate file in memory and have no cursor to probe with. Matches the
/// same classic-TIFF layout as [`TiffHeader::is_valid_header`].
pub fn is_tiff_header(bytes: &[u8]) -> bool {
    if bytes.len() < TIFF_HEADER_SIZE {
        return false;
    }

    let byte_order = match (bytes[0], bytes[1]) {
        (MARKER_LITTLE_ENDIAN, MARKER_LITTLE_ENDIAN) => ByteOrder::LittleEndian,
        (MARKER_BIG_ENDIAN, MARKER_BIG_ENDIAN) => ByteOrder::BigEndian,
        _ => return false,
    };

    byte_order.read_i16(&bytes[2..4]) == TIFF_MAGIC
}

// =============================================================================
// Tests
// =============================================================================
