// Sat Oct 17 2026 - Alex

use super::args::{Args, Command, RowArgs, TableArgs};
use crate::demo;
use crate::memory::Address;
use crate::table::MemoryTable;
use crate::ui;
use crate::utils::{hex_string_spaced, parse_address, parse_hex};
use anyhow::Context;
use std::io::{self, Write};

pub struct CommandHandler {
    quiet: bool,
}

impl CommandHandler {
    pub fn new() -> Self {
        Self { quiet: false }
    }

    pub fn execute(&mut self, args: Args) -> anyhow::Result<()> {
        self.quiet = args.quiet;
        if args.no_color {
            colored::control::set_override(false);
        }

        self.setup_logging(&args)?;

        let stdout = io::stdout();
        let mut out = stdout.lock();
        match args.command {
            Command::Demo => self.handle_demo(&mut out),
            Command::Header(table_args) => self.handle_header(&mut out, table_args),
            Command::Row(row_args) => self.handle_row(&mut out, row_args),
        }
    }

    fn setup_logging(&self, args: &Args) -> anyhow::Result<()> {
        let level = match args.log_level.to_lowercase().as_str() {
            "trace" => log::LevelFilter::Trace,
            "debug" => log::LevelFilter::Debug,
            "info" => log::LevelFilter::Info,
            "warn" => log::LevelFilter::Warn,
            "error" => log::LevelFilter::Error,
            "off" => log::LevelFilter::Off,
            _ => log::LevelFilter::Warn,
        };

        env_logger::Builder::new()
            .filter_level(level)
            .format_timestamp(None)
            .try_init()
            .context("Failed to initialise logging")?;

        Ok(())
    }

    fn handle_demo<W: Write>(&self, out: &mut W) -> anyhow::Result<()> {
        log::info!("Executing demo command");
        demo::run_all(out)?;
        Ok(())
    }

    fn handle_header<W: Write>(&self, out: &mut W, args: TableArgs) -> anyhow::Result<()> {
        log::info!("Executing header command");
        let table = self.build_table(&args)?;
        table.write_header(out)?;
        Ok(())
    }

    fn handle_row<W: Write>(&self, out: &mut W, args: RowArgs) -> anyhow::Result<()> {
        log::info!("Executing row command");
        let table = self.build_table(&args.table)?;

        let address = parse_address(&args.address)
            .with_context(|| format!("Invalid address: {}", args.address))?;
        let bytes = parse_hex(&args.bytes)
            .with_context(|| format!("Invalid hex bytes: {}", args.bytes))?;

        write_rows(out, &table, address, &bytes, args.name.as_deref(), !args.no_header)?;

        if !self.quiet {
            ui::print_success(&format!("{} row(s) of {} bytes", bytes.len() / table.span(), table.span()));
        }
        Ok(())
    }

    fn build_table(&self, args: &TableArgs) -> anyhow::Result<MemoryTable> {
        let config = args.to_config()?;
        let table = config
            .build()
            .with_context(|| format!("Invalid table: {:?} with {}-byte addresses", config.columns, config.address_width))?;

        if !self.quiet {
            ui::print_info(&format!(
                "{} columns over {} bytes, {} characters per line",
                table.columns().len(),
                table.span(),
                table.line_width()
            ));
        }
        Ok(table)
    }
}

impl Default for CommandHandler {
    fn default() -> Self {
        Self::new()
    }
}

/// Writes `bytes` as consecutive rows starting at `address`, one span per row. Nothing is
/// written unless `bytes` fills a whole number of rows.
pub fn write_rows<W: Write>(
    out: &mut W,
    table: &MemoryTable,
    address: Address,
    bytes: &[u8],
    name: Option<&str>,
    with_header: bool,
) -> anyhow::Result<()> {
    if bytes.is_empty() || bytes.len() % table.span() != 0 {
        anyhow::bail!(
            "Expected a multiple of {} bytes, got {} ({})",
            table.span(),
            bytes.len(),
            hex_string_spaced(bytes)
        );
    }

    if with_header {
        match name {
            Some(_) => writeln!(out, "|    name    {}", table.header())?,
            None => table.write_header(out)?,
        }
    }

    for (i, chunk) in bytes.chunks(table.span()).enumerate() {
        let row = table.row(address.offset((i * table.span()) as i64), chunk)?;
        match name {
            Some(name) => writeln!(out, "| {:>10} {}", name, row)?,
            None => writeln!(out, "{}", row)?,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::AddressWidth;
    use crate::table::ColumnType;

    #[test]
    fn test_write_rows_advances_address() {
        let table = MemoryTable::new(AddressWidth::U16, &[ColumnType::Hex, ColumnType::U16]).unwrap();
        let mut out = Vec::new();
        write_rows(&mut out, &table, Address::new(0x100), &[1, 0, 2, 0, 3, 0], None, true).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], table.header());
        assert!(lines[1].starts_with("| 0x0100 | 00 01 |"));
        assert!(lines[2].starts_with("| 0x0102 | 00 02 |"));
        assert!(lines[3].starts_with("| 0x0104 | 00 03 |"));
    }

    #[test]
    fn test_write_rows_with_name() {
        let table = MemoryTable::new(AddressWidth::U8, &[ColumnType::Hex]).unwrap();
        let mut out = Vec::new();
        write_rows(&mut out, &table, Address::new(0x10), &[0xaa], Some("REG0"), true).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "|    name    | addr |hex |\n|       REG0 | 0x10 | aa |\n");
    }

    #[test]
    fn test_write_rows_rejects_partial_row() {
        let table = MemoryTable::new(AddressWidth::U16, &[ColumnType::U16]).unwrap();
        let mut out = Vec::new();
        let err = write_rows(&mut out, &table, Address::new(0), &[1, 2, 3], None, true).unwrap_err();

        assert_eq!(err.to_string(), "Expected a multiple of 2 bytes, got 3 (01 02 03)");
        assert!(out.is_empty());
    }

    #[test]
    fn test_write_rows_rejects_empty_buffer() {
        let table = MemoryTable::new(AddressWidth::U16, &[ColumnType::U16]).unwrap();
        let mut out = Vec::new();
        let err = write_rows(&mut out, &table, Address::new(0), &[], None, false).unwrap_err();

        assert!(err.to_string().starts_with("Expected a multiple of 2 bytes, got 0"));
        assert!(out.is_empty());
    }
}
