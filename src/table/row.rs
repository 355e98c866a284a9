// Sat Oct 17 2026 - Alex

use super::column::ColumnType;
use super::float::format_fitted;
use super::layout::MemoryTable;
use crate::memory::raw;
use crate::memory::Address;
use itertools::Itertools;
use std::borrow::Cow;
use std::fmt;

/// One address and one span of bytes, checked against the table that renders it.
///
/// Built through [`MemoryTable::row`] or [`MemoryTable::row_from_value`]; once built it
/// always renders.
#[derive(Debug, Clone)]
pub struct Row<'a> {
    table: &'a MemoryTable,
    address: Address,
    bytes: Cow<'a, [u8]>,
}

impl<'a> Row<'a> {
    pub(crate) fn new(table: &'a MemoryTable, address: Address, bytes: Cow<'a, [u8]>) -> Self {
        Self { table, address, bytes }
    }

    pub fn address(&self) -> Address {
        self.address
    }
}

impl fmt::Display for Row<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.table.address_width();
        write!(
            f,
            "| 0x{:0digits$x} |",
            self.address.truncate(width).as_u64(),
            digits = width.hex_digits()
        )?;
        for &column in self.table.columns() {
            write!(f, " {}|", format_field(column, &self.bytes))?;
        }
        Ok(())
    }
}

/// Renders one cell: the value padded to the column's field width plus a trailing space.
pub fn format_field(column: ColumnType, bytes: &[u8]) -> String {
    let width = column.field_width(bytes.len());
    match column {
        ColumnType::Bool => bytes_msb_first(bytes, |b| format!("{:08b} ", b)),
        ColumnType::Hex => bytes_msb_first(bytes, |b| format!("{:02x} ", b)),
        ColumnType::Char => bytes_msb_first(bytes, |b| format!("{} ", display_char(b))),
        ColumnType::I16 => format!("{:>width$} ", raw::read_i16(bytes)),
        ColumnType::U16 => format!("{:>width$} ", raw::read_u16(bytes)),
        ColumnType::I32 => format!("{:>width$} ", raw::read_i32(bytes)),
        ColumnType::U32 => format!("{:>width$} ", raw::read_u32(bytes)),
        ColumnType::I64 => format!("{:>width$} ", raw::read_i64(bytes)),
        ColumnType::U64 => format!("{:>width$} ", raw::read_u64(bytes)),
        ColumnType::F32 => format!("{:>width$} ", format_fitted(raw::read_f32(bytes) as f64, width)),
        ColumnType::F64 => format!("{:>width$} ", format_fitted(raw::read_f64(bytes), width)),
    }
}

// Last byte first, so native little-endian storage reads most significant byte first.
fn bytes_msb_first(bytes: &[u8], render: impl Fn(u8) -> String) -> String {
    bytes.iter().rev().map(|&b| render(b)).join("")
}

fn display_char(byte: u8) -> char {
    if byte.is_ascii_graphic() || byte == b' ' {
        byte as char
    } else {
        '.'
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bool_field() {
        assert_eq!(format_field(ColumnType::Bool, &[1, 0x80]), "10000000 00000001 ");
    }

    #[test]
    fn test_hex_field() {
        assert_eq!(format_field(ColumnType::Hex, &[0x0a, 0xff, 0, 7]), "07 00 ff 0a ");
    }

    #[test]
    fn test_char_field_replaces_unprintable() {
        assert_eq!(format_field(ColumnType::Char, &[b'a', 0, b'Z', 0x0a]), ". Z . a ");
    }

    #[test]
    fn test_decimal_field_is_right_justified() {
        let bytes = (-42i16).to_ne_bytes();
        assert_eq!(format_field(ColumnType::I16, &bytes), "   -42 ");

        let bytes = 1234i32.to_ne_bytes();
        assert_eq!(format_field(ColumnType::I32, &bytes), "        1234 ");

        let bytes = u64::MAX.to_ne_bytes();
        assert_eq!(
            format_field(ColumnType::U64, &bytes),
            format!("{:>24} ", u64::MAX)
        );
    }

    #[test]
    fn test_float_field() {
        let bytes = 1.04f32.to_ne_bytes();
        assert_eq!(format_field(ColumnType::F32, &bytes), "        1.04 ");

        let bytes = (-0.5f64).to_ne_bytes();
        assert_eq!(format_field(ColumnType::F64, &bytes), "        -0.5 ");
    }

    #[test]
    fn test_field_lengths_match_column_width() {
        let bytes = [0x41u8, 0x42, 0x43, 0x44];
        for column in [ColumnType::Bool, ColumnType::Hex, ColumnType::Char, ColumnType::I32, ColumnType::U32, ColumnType::F32] {
            assert_eq!(
                format_field(column, &bytes).chars().count(),
                column.display_width(4) - 1,
                "{column}"
            );
        }
    }
}
