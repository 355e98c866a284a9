// Sat Oct 17 2026 - Alex

use crate::table::TableError;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Address {
    value: u64,
}

impl Address {
    pub fn new(value: u64) -> Self {
        Self { value }
    }

    pub fn from_ptr<T>(ptr: *const T) -> Self {
        Self { value: ptr as usize as u64 }
    }

    pub fn from_ref<T>(value: &T) -> Self {
        Self::from_ptr(value as *const T)
    }

    pub fn as_u64(&self) -> u64 {
        self.value
    }

    pub fn offset(&self, offset: i64) -> Self {
        Self { value: self.value.wrapping_add_signed(offset) }
    }

    /// Keeps only the low `width` bytes, the way a cast to a narrower integer would.
    pub fn truncate(&self, width: AddressWidth) -> Self {
        Self { value: self.value & width.mask() }
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:016x}", self.value)
    }
}

impl fmt::LowerHex for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.value, f)
    }
}

macro_rules! impl_address_from {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Address {
                fn from(value: $ty) -> Self {
                    Self::new(value as u64)
                }
            }
        )*
    };
}

impl_address_from!(u8, u16, u32, u64, usize);

impl From<Address> for u64 {
    fn from(addr: Address) -> Self {
        addr.value
    }
}

/// Byte width of the address column, i.e. the size of the integer type addresses are
/// stored in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub enum AddressWidth {
    U8,
    U16,
    U32,
    U64,
}

impl AddressWidth {
    /// Width of a pointer on the host, the `uintptr_t` case.
    pub const fn native() -> Self {
        if std::mem::size_of::<usize>() == 8 {
            AddressWidth::U64
        } else {
            AddressWidth::U32
        }
    }

    pub fn from_bytes(bytes: usize) -> Result<Self, TableError> {
        match bytes {
            1 => Ok(AddressWidth::U8),
            2 => Ok(AddressWidth::U16),
            4 => Ok(AddressWidth::U32),
            8 => Ok(AddressWidth::U64),
            other => Err(TableError::UnsupportedAddressWidth(other)),
        }
    }

    pub const fn bytes(&self) -> usize {
        match self {
            AddressWidth::U8 => 1,
            AddressWidth::U16 => 2,
            AddressWidth::U32 => 4,
            AddressWidth::U64 => 8,
        }
    }

    /// Number of hex digits used to print an address of this width.
    pub const fn hex_digits(&self) -> usize {
        self.bytes() * 2
    }

    pub const fn mask(&self) -> u64 {
        match self {
            AddressWidth::U64 => u64::MAX,
            other => (1u64 << (other.bytes() * 8)) - 1,
        }
    }
}

impl Default for AddressWidth {
    fn default() -> Self {
        Self::native()
    }
}

impl TryFrom<usize> for AddressWidth {
    type Error = TableError;

    fn try_from(bytes: usize) -> Result<Self, Self::Error> {
        Self::from_bytes(bytes)
    }
}

impl From<AddressWidth> for usize {
    fn from(width: AddressWidth) -> Self {
        width.bytes()
    }
}

impl fmt::Display for AddressWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "u{}", self.bytes() * 8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_width_from_bytes() {
        assert_eq!(AddressWidth::from_bytes(2).unwrap(), AddressWidth::U16);
        assert_eq!(AddressWidth::from_bytes(8).unwrap(), AddressWidth::U64);
        assert!(matches!(
            AddressWidth::from_bytes(3),
            Err(TableError::UnsupportedAddressWidth(3))
        ));
    }

    #[test]
    fn test_address_truncate() {
        let addr = Address::new(0x1234_5678_9abc);
        assert_eq!(addr.truncate(AddressWidth::U16).as_u64(), 0x9abc);
        assert_eq!(addr.truncate(AddressWidth::U32).as_u64(), 0x5678_9abc);
        assert_eq!(addr.truncate(AddressWidth::U64), addr);
    }

    #[test]
    fn test_native_width_matches_pointer() {
        assert_eq!(AddressWidth::native().bytes(), std::mem::size_of::<usize>());
    }

    #[test]
    fn test_address_from_ref() {
        let value = 7u32;
        let addr = Address::from_ref(&value);
        assert_eq!(addr.as_u64(), &value as *const u32 as usize as u64);
        assert_eq!(addr.offset(4).as_u64(), addr.as_u64() + 4);
    }

    #[test]
    fn test_address_width_serde() {
        let width: AddressWidth = serde_json::from_str("4").unwrap();
        assert_eq!(width, AddressWidth::U32);
        assert!(serde_json::from_str::<AddressWidth>("5").is_err());
        assert_eq!(serde_json::to_string(&AddressWidth::U16).unwrap(), "2");
    }
}
