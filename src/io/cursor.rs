//! Byte-order-aware read cursor with snapshot/restore.
//!
//! TIFF streams declare their endianness in the first two header bytes, so a
//! reader must be able to consume raw bytes before any order is known and
//! then switch modes for everything after. [`ByteOrderCursor`] supports that
//! two-phase discipline: single-byte reads are order-independent, multi-byte
//! reads respect the cursor's current [`ByteOrder`], and a
//! snapshot/restore pair lets a caller probe ahead and undo the probe's
//! effects exactly.

use std::io::{self, Read, Seek, SeekFrom};

use crate::error::TiffError;

use super::endian::{
    read_i16_be, read_i16_le, read_i32_be, read_i32_le, read_u16_be, read_u16_le, read_u32_be,
    read_u32_le,
};

// =============================================================================
// ByteOrder
// =============================================================================

/// Byte order (endianness) of a TIFF stream.
///
/// Declared by the first two bytes of the header and immutable for the rest
/// of the stream; all multi-byte values must be read respecting it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteOrder {
    /// Little-endian ("II" = Intel)
    LittleEndian,
    /// Big-endian ("MM" = Motorola)
    BigEndian,
}

impl ByteOrder {
    /// Decode a u16 from a byte slice using this byte order.
    #[inline]
    pub fn read_u16(self, bytes: &[u8]) -> u16 {
        match self {
            ByteOrder::LittleEndian => read_u16_le(bytes),
            ByteOrder::BigEndian => read_u16_be(bytes),
        }
    }

    /// Decode an i16 from a byte slice using this byte order.
    #[inline]
    pub fn read_i16(self, bytes: &[u8]) -> i16 {
        match self {
            ByteOrder::LittleEndian => read_i16_le(bytes),
            ByteOrder::BigEndian => read_i16_be(bytes),
        }
    }

    /// Decode a u32 from a byte slice using this byte order.
    #[inline]
    pub fn read_u32(self, bytes: &[u8]) -> u32 {
        match self {
            ByteOrder::LittleEndian => read_u32_le(bytes),
            ByteOrder::BigEndian => read_u32_be(bytes),
        }
    }

    /// Decode an i32 from a byte slice using this byte order.
    #[inline]
    pub fn read_i32(self, bytes: &[u8]) -> i32 {
        match self {
            ByteOrder::LittleEndian => read_i32_le(bytes),
            ByteOrder::BigEndian => read_i32_be(bytes),
        }
    }
}

// =============================================================================
// CursorSnapshot
// =============================================================================

/// Opaque capture of a cursor's position and byte order.
///
/// Taken immediately before a speculative read sequence and handed back to
/// [`ByteOrderCursor::restore`] to undo it. A snapshot carries no ownership
/// of the byte source and must not outlive the cursor it was taken from.
#[derive(Debug, Clone, Copy)]
pub struct CursorSnapshot {
    position: u64,
    byte_order: ByteOrder,
}

// =============================================================================
// ByteOrderCursor
// =============================================================================

/// A stateful read cursor over a seekable byte source.
///
/// Tracks the current absolute position and the current byte order, exposes
/// order-correct multi-byte reads, and can capture/restore a
/// position-plus-order snapshot. The source is exclusively owned by the
/// cursor; no internal synchronization is provided.
///
/// A new cursor starts little-endian. The initial order is irrelevant until
/// [`set_byte_order`](ByteOrderCursor::set_byte_order) is called, because
/// the order-detection bytes at the front of a header are read one at a
/// time with [`read_u8`](ByteOrderCursor::read_u8).
#[derive(Debug)]
pub struct ByteOrderCursor<R> {
    source: R,
    byte_order: ByteOrder,
    position: u64,
}

macro_rules! read_fn {
    ($name:ident, $ty:ty) => {
        /// Consume the next bytes and assemble them according to the
        /// cursor's *current* byte order.
        ///
        /// Fails with [`TiffError::TruncatedInput`] if too few bytes remain.
        #[inline]
        pub fn $name(&mut self) -> Result<$ty, TiffError> {
            let mut buf = [0u8; std::mem::size_of::<$ty>()];
            self.fill(&mut buf)?;
            Ok(self.byte_order.$name(&buf))
        }
    };
}

impl<R: Read + Seek> ByteOrderCursor<R> {
    /// Wrap a byte source, synchronizing the cursor position with the
    /// source's current stream position.
    pub fn new(mut source: R) -> Result<Self, TiffError> {
        let position = source.stream_position()?;
        Ok(ByteOrderCursor {
            source,
            byte_order: ByteOrder::LittleEndian,
            position,
        })
    }

    /// Current absolute position in the byte source.
    #[inline]
    pub fn position(&self) -> u64 {
        self.position
    }

    /// The byte order currently used for multi-byte reads.
    #[inline]
    pub fn byte_order(&self) -> ByteOrder {
        self.byte_order
    }

    /// Switch the byte order for all subsequent multi-byte reads.
    ///
    /// Has no effect on already-consumed bytes.
    #[inline]
    pub fn set_byte_order(&mut self, order: ByteOrder) {
        self.byte_order = order;
    }

    /// Consume exactly one byte. Single-byte reads are order-independent.
    ///
    /// Fails with [`TiffError::TruncatedInput`] if no byte remains.
    #[inline]
    pub fn read_u8(&mut self) -> Result<u8, TiffError> {
        let mut buf = [0u8; 1];
        self.fill(&mut buf)?;
        Ok(buf[0])
    }

    read_fn!(read_u16, u16);
    read_fn!(read_i16, i16);
    read_fn!(read_u32, u32);
    read_fn!(read_i32, i32);

    /// Capture the current position and byte order.
    ///
    /// Side-effect free on the source.
    #[inline]
    pub fn snapshot(&self) -> CursorSnapshot {
        CursorSnapshot {
            position: self.position,
            byte_order: self.byte_order,
        }
    }

    /// Reset position and byte order to the captured values.
    ///
    /// Idempotent, and valid even after a read failed partway: the seek is
    /// absolute, so whatever the underlying source consumed during the
    /// failed read is discarded and the snapshot wins.
    pub fn restore(&mut self, snapshot: CursorSnapshot) -> Result<(), TiffError> {
        self.source.seek(SeekFrom::Start(snapshot.position))?;
        self.position = snapshot.position;
        self.byte_order = snapshot.byte_order;
        Ok(())
    }

    /// Borrow the underlying byte source.
    #[inline]
    pub fn get_ref(&self) -> &R {
        &self.source
    }

    /// Unwrap the cursor, returning the underlying byte source.
    #[inline]
    pub fn into_inner(self) -> R {
        self.source
    }

    /// Read exactly `buf.len()` bytes, advancing the tracked position only
    /// on success. End-of-data maps to `TruncatedInput`; any other source
    /// failure passes through as `Io`.
    fn fill(&mut self, buf: &mut [u8]) -> Result<(), TiffError> {
        match self.source.read_exact(buf) {
            Ok(()) => {
                self.position += buf.len() as u64;
                Ok(())
            }
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => Err(TiffError::TruncatedInput {
                position: self.position,
                needed: buf.len(),
            }),
            Err(e) => Err(TiffError::Io(e)),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
