//! Integration tests for format sniffing.
//!
//! These tests verify the end-to-end flow a format dispatcher follows:
//! - Probe a candidate stream with several detectors in sequence
//! - Probes leave the cursor untouched on every path
//! - Once TIFF is selected, parse consumes exactly the header

use std::io::Cursor;

use tiff_probe::{is_tiff_header, ByteOrder, ByteOrderCursor, TiffError, TiffHeader};

const TIFF_LE: &[u8] = &[0x49, 0x49, 0x2A, 0x00, 0x10, 0x00, 0x00, 0x00];
const TIFF_BE: &[u8] = &[0x4D, 0x4D, 0x00, 0x2A, 0x00, 0x00, 0x00, 0x10];
const JPEG: &[u8] = &[0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, 0x4A, 0x46];
const PNG: &[u8] = &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

/// A dispatcher-shaped helper: probe for TIFF, fall back to a byte-pattern
/// check for other formats, parse only once TIFF has been selected.
fn dispatch(bytes: &[u8]) -> Option<&'static str> {
    let mut cursor = ByteOrderCursor::new(Cursor::new(bytes)).unwrap();

    if TiffHeader::is_valid_header(&mut cursor) {
        // A probe must not have consumed anything
        assert_eq!(cursor.position(), 0);
        let header = TiffHeader::parse(&mut cursor).expect("probe said this is a TIFF");
        assert_eq!(cursor.position(), 8);
        assert_eq!(header.first_ifd_offset, 16);
        return Some("tiff");
    }

    // The failed probe must have left the stream intact for other detectors
    assert_eq!(cursor.position(), 0);
    match bytes {
        [0xFF, 0xD8, ..] => Some("jpeg"),
        [0x89, b'P', b'N', b'G', ..] => Some("png"),
        _ => None,
    }
}

#[test]
fn test_dispatch_selects_tiff() {
    assert_eq!(dispatch(TIFF_LE), Some("tiff"));
    assert_eq!(dispatch(TIFF_BE), Some("tiff"));
}

#[test]
fn test_dispatch_falls_through_to_other_formats() {
    assert_eq!(dispatch(JPEG), Some("jpeg"));
    assert_eq!(dispatch(PNG), Some("png"));
    assert_eq!(dispatch(&[0x00; 8]), None);
}

#[test]
fn test_dispatch_short_candidate() {
    // A sniffer must never fail on a too-short stream
    assert_eq!(dispatch(&[0x49, 0x49, 0x2A, 0x00, 0x10]), None);
    assert_eq!(dispatch(&[]), None);
}

#[test]
fn test_parse_after_probe_reads_following_data_in_stream_order() {
    // Header, then a 16-bit value the consumer reads in the stream's order
    let mut bytes = TIFF_BE.to_vec();
    bytes.extend_from_slice(&[0x01, 0x00]);

    let mut cursor = ByteOrderCursor::new(Cursor::new(&bytes[..])).unwrap();
    assert!(TiffHeader::is_valid_header(&mut cursor));

    let header = TiffHeader::parse(&mut cursor).unwrap();
    assert_eq!(header.byte_order, ByteOrder::BigEndian);
    assert_eq!(header.first_ifd_offset, 16);

    // The parse fixed the cursor's byte order for everything after
    assert_eq!(cursor.read_u16().unwrap(), 0x0100);
}

#[test]
fn test_parse_without_probe_surfaces_errors() {
    let mut cursor = ByteOrderCursor::new(Cursor::new(JPEG)).unwrap();
    let err = TiffHeader::parse(&mut cursor).unwrap_err();
    assert!(matches!(err, TiffError::InvalidFormat { .. }));

    let mut cursor = ByteOrderCursor::new(Cursor::new(&TIFF_LE[..5])).unwrap();
    let err = TiffHeader::parse(&mut cursor).unwrap_err();
    assert!(matches!(err, TiffError::TruncatedInput { .. }));
}

#[test]
fn test_slice_sniff_agrees_with_cursor_probe() {
    for candidate in [TIFF_LE, TIFF_BE, JPEG, PNG] {
        let mut cursor = ByteOrderCursor::new(Cursor::new(candidate)).unwrap();
        assert_eq!(
            is_tiff_header(candidate),
            TiffHeader::is_valid_header(&mut cursor),
            "slice sniff and cursor probe disagree on {candidate:02X?}"
        );
    }
}
