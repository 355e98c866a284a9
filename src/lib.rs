// Sat Oct 17 2026 - Alex

pub mod config;
pub mod demo;
pub mod memory;
pub mod table;
pub mod ui;
pub mod utils;

pub use config::TableConfig;
pub use memory::{Address, AddressWidth, RawBytes};
pub use table::{ColumnType, MemoryTable, Row, TableBuilder, TableError};
