// Sat Oct 17 2026 - Alex

use super::column::ColumnType;
use super::error::TableError;
use super::header::{address_column_width, build_header};
use super::row::Row;
use crate::memory::{Address, AddressWidth, RawBytes};
use std::borrow::Cow;
use std::io::{self, Write};

/// A fixed layout for dumping memory: one address column followed by every configured
/// interpretation of the same span of bytes.
///
/// The header is computed once when the table is built. Rows are rendered on demand and
/// always have exactly [`MemoryTable::line_width`] characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryTable {
    address_width: AddressWidth,
    columns: Vec<ColumnType>,
    span: usize,
    header: String,
    line_width: usize,
}

impl MemoryTable {
    pub fn new(address_width: AddressWidth, columns: &[ColumnType]) -> Result<Self, TableError> {
        let span = columns
            .iter()
            .map(ColumnType::byte_width)
            .max()
            .ok_or(TableError::NoColumns)?;

        if let Some(column) = columns.iter().find(|c| !c.is_bytewise() && c.byte_width() != span) {
            log::debug!("{} column is {} bytes wide, table span is {}", column, column.byte_width(), span);
            return Err(TableError::SizeMismatch {
                expected: span,
                actual: column.byte_width(),
            });
        }

        let line_width = address_column_width(address_width)
            + columns.iter().map(|c| c.display_width(span)).sum::<usize>()
            + columns.len()
            + 2;
        let header = build_header(address_width, columns, span);
        debug_assert_eq!(header.chars().count(), line_width);

        log::debug!(
            "Built memory table: {} address, {} columns, {} byte span, {} characters wide",
            address_width,
            columns.len(),
            span,
            line_width
        );

        Ok(Self {
            address_width,
            columns: columns.to_vec(),
            span,
            header,
            line_width,
        })
    }

    pub fn builder(address_width: AddressWidth) -> TableBuilder {
        TableBuilder::new(address_width)
    }

    pub fn header(&self) -> &str {
        &self.header
    }

    /// Characters in one rendered line, equal to the header length.
    pub fn line_width(&self) -> usize {
        self.line_width
    }

    /// Number of bytes every row must supply.
    pub fn span(&self) -> usize {
        self.span
    }

    pub fn columns(&self) -> &[ColumnType] {
        &self.columns
    }

    pub fn address_width(&self) -> AddressWidth {
        self.address_width
    }

    pub fn column_widths(&self) -> Vec<usize> {
        self.columns.iter().map(|c| c.display_width(self.span)).collect()
    }

    pub fn row<'a>(&'a self, address: impl Into<Address>, bytes: &'a [u8]) -> Result<Row<'a>, TableError> {
        self.check_size(bytes.len())?;
        Ok(Row::new(self, address.into(), Cow::Borrowed(bytes)))
    }

    /// Builds a row from the in-memory bytes of `value`, which must be exactly one span wide.
    pub fn row_from_value<T: RawBytes>(&self, address: impl Into<Address>, value: T) -> Result<Row<'_>, TableError> {
        self.check_size(value.byte_len())?;
        Ok(Row::new(self, address.into(), Cow::Owned(value.raw_bytes())))
    }

    pub fn write_header<W: Write>(&self, out: &mut W) -> Result<(), TableError> {
        writeln!(out, "{}", self.header)?;
        Ok(())
    }

    pub fn write_row<W: Write>(&self, out: &mut W, address: impl Into<Address>, bytes: &[u8]) -> Result<(), TableError> {
        let row = self.row(address, bytes)?;
        log::trace!("Writing row at {}", row.address());
        writeln!(out, "{}", row)?;
        Ok(())
    }

    pub fn write_value<W: Write, T: RawBytes>(
        &self,
        out: &mut W,
        address: impl Into<Address>,
        value: T,
    ) -> Result<(), TableError> {
        let row = self.row_from_value(address, value)?;
        log::trace!("Writing value row at {}", row.address());
        writeln!(out, "{}", row)?;
        Ok(())
    }

    pub fn print_header(&self) -> Result<(), TableError> {
        self.write_header(&mut io::stdout().lock())
    }

    pub fn print_data(&self, address: impl Into<Address>, bytes: &[u8]) -> Result<(), TableError> {
        self.write_row(&mut io::stdout().lock(), address, bytes)
    }

    pub fn print_value<T: RawBytes>(&self, address: impl Into<Address>, value: T) -> Result<(), TableError> {
        self.write_value(&mut io::stdout().lock(), address, value)
    }

    fn check_size(&self, actual: usize) -> Result<(), TableError> {
        if actual != self.span {
            return Err(TableError::SizeMismatch {
                expected: self.span,
                actual,
            });
        }
        Ok(())
    }
}

pub struct TableBuilder {
    address_width: AddressWidth,
    columns: Vec<ColumnType>,
}

impl TableBuilder {
    pub fn new(address_width: AddressWidth) -> Self {
        Self {
            address_width,
            columns: Vec::new(),
        }
    }

    pub fn column(mut self, column: ColumnType) -> Self {
        self.columns.push(column);
        self
    }

    pub fn columns(mut self, columns: &[ColumnType]) -> Self {
        self.columns.extend_from_slice(columns);
        self
    }

    pub fn build(self) -> Result<MemoryTable, TableError> {
        MemoryTable::new(self.address_width, &self.columns)
    }
}
