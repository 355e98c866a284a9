// Sat Oct 17 2026 - Alex

//! The walkthrough printed by `memory-table demo`.

use crate::memory::{Address, AddressWidth};
use crate::table::{ColumnType, MemoryTable, TableError};
use std::io::Write;

/// Mixed scalars on one table: raw bytes, an integer and a float.
pub fn general_usage<W: Write>(out: &mut W) -> Result<(), TableError> {
    let table = MemoryTable::new(
        AddressWidth::U16,
        &[ColumnType::Bool, ColumnType::Hex, ColumnType::U32, ColumnType::F32],
    )?;

    table.write_header(out)?;
    table.write_row(out, 0x69u16, &[1, 2, 3, 4])?;
    table.write_value(out, 0x70u16, 1234i32)?;
    table.write_value(out, 0x71u16, 1.04f32)?;
    Ok(())
}

/// Every element of `[1, 2, ..., 20]` at its real address.
pub fn int_array_dump<W: Write>(out: &mut W) -> Result<(), TableError> {
    let values: [i32; 20] = std::array::from_fn(|i| i as i32 + 1);
    let table = MemoryTable::new(
        AddressWidth::native(),
        &[ColumnType::Bool, ColumnType::I32, ColumnType::Hex],
    )?;

    table.write_header(out)?;
    for value in &values {
        table.write_value(out, Address::from_ref(value), *value)?;
    }
    Ok(())
}

/// A float array with a caller-side name column in front of each row.
pub fn named_float_dump<W: Write>(out: &mut W) -> Result<(), TableError> {
    let values: [f32; 20] = std::array::from_fn(|i| 100.5 + i as f32);
    let table = MemoryTable::new(
        AddressWidth::native(),
        &[ColumnType::F32, ColumnType::Bool, ColumnType::Hex],
    )?;

    writeln!(out, "|    name    {}", table.header())?;
    for (i, value) in values.iter().enumerate() {
        let row = table.row_from_value(Address::from_ref(value), *value)?;
        writeln!(out, "| {:>10} {}", format!("REG{}", i), row)?;
    }
    Ok(())
}

pub fn run_all<W: Write>(out: &mut W) -> Result<(), TableError> {
    writeln!(out, "\n\nGeneral usage:")?;
    general_usage(out)?;

    writeln!(out, "\n\n[i32; 20] dump example:")?;
    int_array_dump(out)?;

    writeln!(out, "\n\n[f32; 20] dump example with names:")?;
    named_float_dump(out)?;
    Ok(())
}
