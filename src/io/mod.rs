//! I/O layer: byte-order-aware cursor and endian decoding helpers.

mod cursor;
mod endian;

pub use cursor::{ByteOrder, ByteOrderCursor, CursorSnapshot};
pub use endian::{
    read_i16_be, read_i16_le, read_i32_be, read_i32_le, read_u16_be, read_u16_le, read_u32_be,
    read_u32_le,
};
