// Sat Oct 17 2026 - Alex

use super::error::TableError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Space around every field, one character on each side.
pub const MARGIN_WIDTH: usize = 2;

/// Characters reserved for a floating point value.
pub const FLOAT_FIELD_WIDTH: usize = 12;

/// One interpretation of the row's bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    /// Bit flags, eight binary digits per byte.
    Bool,
    /// Two hex digits per byte.
    Hex,
    /// One character per byte.
    Char,
    I16,
    U16,
    I32,
    U32,
    I64,
    U64,
    F32,
    F64,
}

impl ColumnType {
    pub const ALL: [ColumnType; 11] = [
        ColumnType::Bool,
        ColumnType::Hex,
        ColumnType::Char,
        ColumnType::I16,
        ColumnType::U16,
        ColumnType::I32,
        ColumnType::U32,
        ColumnType::I64,
        ColumnType::U64,
        ColumnType::F32,
        ColumnType::F64,
    ];

    /// Size of the underlying type.
    pub const fn byte_width(&self) -> usize {
        match self {
            ColumnType::Bool | ColumnType::Hex | ColumnType::Char => 1,
            ColumnType::I16 | ColumnType::U16 => 2,
            ColumnType::I32 | ColumnType::U32 | ColumnType::F32 => 4,
            ColumnType::I64 | ColumnType::U64 | ColumnType::F64 => 8,
        }
    }

    /// Byte-wise columns repeat their rendering for each byte of the span instead of
    /// decoding the span as a single value.
    pub const fn is_bytewise(&self) -> bool {
        matches!(self, ColumnType::Bool | ColumnType::Hex | ColumnType::Char)
    }

    /// Display width of the column for a row span of `bytes`, margins included.
    pub const fn display_width(&self, bytes: usize) -> usize {
        match self {
            ColumnType::F32 | ColumnType::F64 => MARGIN_WIDTH + FLOAT_FIELD_WIDTH,
            ColumnType::Bool => MARGIN_WIDTH + bytes * 8 + bytes - 1,
            ColumnType::Hex => MARGIN_WIDTH + bytes * 2 + bytes - 1,
            ColumnType::Char => MARGIN_WIDTH + bytes + bytes - 1,
            _ => MARGIN_WIDTH + bytes * 3,
        }
    }

    /// Width of the value itself, without margins.
    pub const fn field_width(&self, bytes: usize) -> usize {
        self.display_width(bytes) - MARGIN_WIDTH
    }

    /// Text centered in the header cell. `None` for bool columns, which get a bit ruler.
    pub const fn label(&self) -> Option<&'static str> {
        match self {
            ColumnType::Bool => None,
            ColumnType::Hex => Some("hex"),
            ColumnType::Char => Some("char"),
            ColumnType::F32 | ColumnType::F64 => Some("float"),
            _ => Some("dec"),
        }
    }

    pub const fn name(&self) -> &'static str {
        match self {
            ColumnType::Bool => "bool",
            ColumnType::Hex => "hex",
            ColumnType::Char => "char",
            ColumnType::I16 => "i16",
            ColumnType::U16 => "u16",
            ColumnType::I32 => "i32",
            ColumnType::U32 => "u32",
            ColumnType::I64 => "i64",
            ColumnType::U64 => "u64",
            ColumnType::F32 => "f32",
            ColumnType::F64 => "f64",
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColumnType {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let column = match s.trim().to_lowercase().as_str() {
            "bool" | "bits" => ColumnType::Bool,
            "hex" | "u8" => ColumnType::Hex,
            "char" => ColumnType::Char,
            "i16" => ColumnType::I16,
            "u16" => ColumnType::U16,
            "i32" | "int" => ColumnType::I32,
            "u32" => ColumnType::U32,
            "i64" => ColumnType::I64,
            "u64" => ColumnType::U64,
            "f32" | "float" => ColumnType::F32,
            "f64" | "double" => ColumnType::F64,
            _ => return Err(TableError::UnsupportedColumnType(s.to_string())),
        };
        Ok(column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_widths_for_four_bytes() {
        assert_eq!(ColumnType::F32.display_width(4), 14);
        assert_eq!(ColumnType::Bool.display_width(4), 37);
        assert_eq!(ColumnType::Hex.display_width(4), 13);
        assert_eq!(ColumnType::Char.display_width(4), 9);
        assert_eq!(ColumnType::U32.display_width(4), 14);
    }

    #[test]
    fn test_single_byte_widths() {
        assert_eq!(ColumnType::Bool.display_width(1), 10);
        assert_eq!(ColumnType::Hex.display_width(1), 4);
        assert_eq!(ColumnType::Char.display_width(1), 3);
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("bool".parse::<ColumnType>().unwrap(), ColumnType::Bool);
        assert_eq!("u8".parse::<ColumnType>().unwrap(), ColumnType::Hex);
        assert_eq!(" Double ".parse::<ColumnType>().unwrap(), ColumnType::F64);

        for column in ColumnType::ALL {
            assert_eq!(column.name().parse::<ColumnType>().unwrap(), column);
        }
    }

    #[test]
    fn test_unknown_name_is_unsupported() {
        let err = "string".parse::<ColumnType>().unwrap_err();
        assert!(matches!(err, TableError::UnsupportedColumnType(ref name) if name == "string"));
    }

    #[test]
    fn test_labels() {
        assert_eq!(ColumnType::Bool.label(), None);
        assert_eq!(ColumnType::F64.label(), Some("float"));
        assert_eq!(ColumnType::I16.label(), Some("dec"));
        assert_eq!(ColumnType::Char.label(), Some("char"));
    }
}
