// Sat Oct 17 2026 - Alex

use crate::config::TableConfig;
use crate::memory::AddressWidth;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "memory-table")]
#[command(author = "Alex")]
#[command(version = "1.0.0")]
#[command(about = "Dump memory as a fixed-width table of typed columns", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true, default_value = "warn")]
    pub log_level: String,

    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the example tables
    Demo,
    /// Print the header line of a table
    Header(TableArgs),
    /// Print one or more rows of a table
    Row(RowArgs),
}

#[derive(Parser, Debug, Clone)]
pub struct TableArgs {
    /// JSON table description; overrides --address-width and --columns
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Address size in bytes (1, 2, 4 or 8)
    #[arg(short = 'w', long, default_value_t = AddressWidth::native().bytes())]
    pub address_width: usize,

    /// Comma separated column types, e.g. bool,hex,u32,f32
    #[arg(short, long, value_delimiter = ',', default_value = "bool,hex")]
    pub columns: Vec<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct RowArgs {
    #[command(flatten)]
    pub table: TableArgs,

    /// Address of the first byte, in hex
    #[arg(short, long)]
    pub address: String,

    /// Bytes in memory order, in hex; several spans print several rows
    #[arg(short, long)]
    pub bytes: String,

    /// Label printed in front of every row
    #[arg(short, long)]
    pub name: Option<String>,

    #[arg(long)]
    pub no_header: bool,
}

impl TableArgs {
    pub fn to_config(&self) -> anyhow::Result<TableConfig> {
        match &self.config {
            Some(path) => Ok(TableConfig::load(path)?),
            None => Ok(TableConfig::new()
                .with_address_width(self.address_width)
                .with_columns(self.columns.as_slice())),
        }
    }
}
