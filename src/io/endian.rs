//! Endian decoding helpers.
//!
//! TIFF streams can be either little-endian or big-endian, determined by the
//! marker bytes at the start of the header. These helpers decode multi-byte
//! integers from already-buffered bytes; [`crate::ByteOrder`] dispatches to
//! them once the stream's order is known.

/// Read a little-endian u16 from a byte slice.
///
/// # Panics
/// Panics if the slice has fewer than 2 bytes.
#[inline]
pub fn read_u16_le(bytes: &[u8]) -> u16 {
    u16::from_le_bytes([bytes[0], bytes[1]])
}

/// Read a big-endian u16 from a byte slice.
///
/// # Panics
/// Panics if the slice has fewer than 2 bytes.
#[inline]
pub fn read_u16_be(bytes: &[u8]) -> u16 {
    u16::from_be_bytes([bytes[0], bytes[1]])
}

/// Read a little-endian i16 from a byte slice.
///
/// # Panics
/// Panics if the slice has fewer than 2 bytes.
#[inline]
pub fn read_i16_le(bytes: &[u8]) -> i16 {
    i16::from_le_bytes([bytes[0], bytes[1]])
}

/// Read a big-endian i16 from a byte slice.
///
/// # Panics
/// Panics if the slice has fewer than 2 bytes.
#[inline]
pub fn read_i16_be(bytes: &[u8]) -> i16 {
    i16::from_be_bytes([bytes[0], bytes[1]])
}

/// Read a little-endian u32 from a byte slice.
///
/// # Panics
/// Panics if the slice has fewer than 4 bytes.
#[inline]
pub fn read_u32_le(bytes: &[u8]) -> u32 {
    u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
}

/// Read a big-endian u32 from a byte slice.
///
/// # Panics
/// Panics if the slice has fewer than 4 bytes.
#[inline]
pub fn read_u32_be(bytes: &[u8]) -> u32 {
    u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
}

/// Read a little-endian i32 from a byte slice.
///
/// # Panics
/// Panics if the slice has fewer than 4 bytes.
#[inline]
pub fn read_i32_le(bytes: &[u8]) -> i32 {
    i32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
}

/// Read a big-endian i32 from a byte slice.
///
/// # Panics
/// Panics if the slice has fewer than 4 bytes.
#[inline]
pub fn read_i32_be(bytes: &[u8]) -> i32 {
    i32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_u16_le() {
        // 0x0102 in little-endian is stored as [0x02, 0x01]
        assert_eq!(read_u16_le(&[0x02, 0x01]), 0x0102);
        assert_eq!(read_u16_le(&[0x00, 0x00]), 0x0000);
        assert_eq!(read_u16_le(&[0xFF, 0xFF]), 0xFFFF);
    }

    #[test]
    fn test_read_u16_be() {
        // 0x0102 in big-endian is stored as [0x01, 0x02]
        assert_eq!(read_u16_be(&[0x01, 0x02]), 0x0102);
        assert_eq!(read_u16_be(&[0x00, 0x00]), 0x0000);
        assert_eq!(read_u16_be(&[0xFF, 0xFF]), 0xFFFF);
    }

    #[test]
    fn test_read_i16_negative() {
        // -1 is all-ones in both orders
        assert_eq!(read_i16_le(&[0xFF, 0xFF]), -1);
        assert_eq!(read_i16_be(&[0xFF, 0xFF]), -1);
        // -2 differs per order
        assert_eq!(read_i16_le(&[0xFE, 0xFF]), -2);
        assert_eq!(read_i16_be(&[0xFF, 0xFE]), -2);
    }

    #[test]
    fn test_read_u32_le() {
        // 0x01020304 in little-endian is stored as [0x04, 0x03, 0x02, 0x01]
        assert_eq!(read_u32_le(&[0x04, 0x03, 0x02, 0x01]), 0x01020304);
        assert_eq!(read_u32_le(&[0x00, 0x00, 0x00, 0x00]), 0x00000000);
        assert_eq!(read_u32_le(&[0xFF, 0xFF, 0xFF, 0xFF]), 0xFFFFFFFF);
    }

    #[test]
    fn test_read_u32_be() {
        // 0x01020304 in big-endian is stored as [0x01, 0x02, 0x03, 0x04]
        assert_eq!(read_u32_be(&[0x01, 0x02, 0x03, 0x04]), 0x01020304);
        assert_eq!(read_u32_be(&[0x00, 0x00, 0x00, 0x00]), 0x00000000);
        assert_eq!(read_u32_be(&[0xFF, 0xFF, 0xFF, 0xFF]), 0xFFFFFFFF);
    }

    #[test]
    fn test_read_i32_negative() {
        assert_eq!(read_i32_le(&[0xFF, 0xFF, 0xFF, 0xFF]), -1);
        assert_eq!(read_i32_be(&[0xFF, 0xFF, 0xFF, 0xFF]), -1);
    }
}
