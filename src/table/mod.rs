// Sat Oct 17 2026 - Alex

pub mod column;
pub mod error;
pub mod float;
pub mod header;
pub mod layout;
pub mod row;

pub use column::ColumnType;
pub use error::TableError;
pub use layout::{MemoryTable, TableBuilder};
pub use row::Row;
