// Sat Oct 17 2026 - Alex

//! Byte views of typed values.
//!
//! Everything here works in host byte order: a value is copied out byte for byte and read
//! back byte for byte, with no swapping in either direction. Table output therefore depends
//! on the endianness of the machine it runs on.

/// A value that can be viewed as the raw bytes it occupies in memory.
pub trait RawBytes {
    /// Size of the value in bytes.
    fn byte_len(&self) -> usize;

    /// The value's in-memory bytes, host order.
    fn raw_bytes(&self) -> Vec<u8>;
}

macro_rules! impl_raw_bytes {
    ($($ty:ty),*) => {
        $(
            impl RawBytes for $ty {
                fn byte_len(&self) -> usize {
                    std::mem::size_of::<$ty>()
                }

                fn raw_bytes(&self) -> Vec<u8> {
                    self.to_ne_bytes().to_vec()
                }
            }
        )*
    };
}

impl_raw_bytes!(u8, u16, u32, u64, i8, i16, i32, i64, f32, f64);

impl RawBytes for bool {
    fn byte_len(&self) -> usize {
        1
    }

    fn raw_bytes(&self) -> Vec<u8> {
        vec![*self as u8]
    }
}

impl<const N: usize> RawBytes for [u8; N] {
    fn byte_len(&self) -> usize {
        N
    }

    fn raw_bytes(&self) -> Vec<u8> {
        self.to_vec()
    }
}

impl RawBytes for &[u8] {
    fn byte_len(&self) -> usize {
        self.len()
    }

    fn raw_bytes(&self) -> Vec<u8> {
        self.to_vec()
    }
}

/// Copies the first `N` bytes of `bytes` into a fixed array.
///
/// Callers guarantee `bytes.len() >= N`; missing bytes read as zero.
pub fn copy_prefix<const N: usize>(bytes: &[u8]) -> [u8; N] {
    let mut out = [0u8; N];
    let len = bytes.len().min(N);
    out[..len].copy_from_slice(&bytes[..len]);
    out
}

macro_rules! define_readers {
    ($($name:ident => $ty:ty),*) => {
        $(
            pub fn $name(bytes: &[u8]) -> $ty {
                <$ty>::from_ne_bytes(copy_prefix(bytes))
            }
        )*
    };
}

define_readers!(
    read_i16 => i16,
    read_u16 => u16,
    read_i32 => i32,
    read_u32 => u32,
    read_i64 => i64,
    read_u64 => u64,
    read_f32 => f32,
    read_f64 => f64
);
