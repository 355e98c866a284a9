// Sat Oct 17 2026 - Alex

pub mod address;
pub mod raw;

pub use address::{Address, AddressWidth};
pub use raw::RawBytes;
