use std::io;

use thiserror::Error;

/// Errors that can occur while sniffing or decoding a TIFF header.
///
/// The non-destructive probe ([`crate::TiffHeader::is_valid_header`]) never
/// surfaces these: a stream that is not a TIFF is an expected outcome for a
/// format sniffer, reported as `false`. The destructive
/// [`crate::TiffHeader::parse`] surfaces them as fatal to the attempt; any
/// retry or fallback-to-other-format policy belongs to the caller.
#[derive(Debug, Error)]
pub enum TiffError {
    /// Fewer bytes remained in the source than the current read required.
    #[error("truncated input: needed {needed} byte(s) at offset {position}")]
    TruncatedInput {
        /// Cursor position when the read was attempted.
        position: u64,
        /// Number of bytes the read required.
        needed: usize,
    },

    /// Bytes were present but did not match the expected byte-order marker
    /// or format magic.
    #[error("invalid TIFF header: {reason}")]
    InvalidFormat { reason: String },

    /// A non-end-of-data failure of the underlying byte source (seek error,
    /// transport error). End-of-data is always reported as
    /// [`TiffError::TruncatedInput`], never as `Io`.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl TiffError {
    /// Build an [`TiffError::InvalidFormat`] for an unrecognized byte-order
    /// marker.
    pub(crate) fn bad_order_marker(low: u8, high: u8) -> Self {
        TiffError::InvalidFormat {
            reason: format!(
                "byte-order marker 0x{low:02X}{high:02X} is neither \"II\" (0x4949) nor \"MM\" (0x4D4D)"
            ),
        }
    }

    /// Build an [`TiffError::InvalidFormat`] for a wrong format magic.
    pub(crate) fn bad_magic(magic: i16) -> Self {
        TiffError::InvalidFormat {
            reason: format!("format magic is {magic}, expected 42"),
        }
    }
}
