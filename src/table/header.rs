// Sat Oct 17 2026 - Alex

use super::column::{ColumnType, MARGIN_WIDTH};
use crate::memory::AddressWidth;

pub const DIVIDER: char = '|';

/// Width of the address column: `0x`, the hex digits and the margin.
pub const fn address_column_width(width: AddressWidth) -> usize {
    2 + width.hex_digits() + MARGIN_WIDTH
}

/// Places `label` in the middle of a field of `width` spaces.
///
/// When the padding is odd the extra space goes to the right. Labels wider than the field
/// are cut to fit.
pub fn in_center(width: usize, label: &str) -> String {
    let label: String = label.chars().take(width).collect();
    let len = label.chars().count();
    let left = (width - len) / 2;
    let right = width - len - left;
    format!("{}{}{}", " ".repeat(left), label, " ".repeat(right))
}

/// Bit index ruler for a bool column spanning `bytes` bytes.
///
/// Each byte takes an eight character slot followed by one space, with one extra leading
/// space. The highest bit number of a byte sits left aligned at the start of its slot and
/// the lowest one right aligned at the end; the least significant byte is rightmost.
pub fn bit_ruler(bytes: usize) -> String {
    let mut ruler = String::with_capacity(ColumnType::Bool.display_width(bytes));
    ruler.push(' ');
    for byte in (0..bytes).rev() {
        let low = byte * 8;
        let high = low + 7;
        ruler.push_str(&format!("{:<2}    {:>2} ", high, low));
    }
    ruler
}

fn column_label(column: ColumnType, bytes: usize) -> String {
    match column.label() {
        Some(label) => in_center(column.display_width(bytes), label),
        None => bit_ruler(bytes),
    }
}

pub fn build_header(address: AddressWidth, columns: &[ColumnType], bytes: usize) -> String {
    let mut header = String::new();
    header.push(DIVIDER);
    header.push_str(&in_center(address_column_width(address), "addr"));
    for &column in columns {
        header.push(DIVIDER);
        header.push_str(&column_label(column, bytes));
    }
    header.push(DIVIDER);
    header
}
