// Sat Oct 17 2026 - Alex

pub mod cli;

pub use cli::{Args, Command, CommandHandler};

use colored::Colorize;

// Status lines go to stderr so that table output can be piped on its own.

pub fn print_info(message: &str) {
    eprintln!("{} {}", "[*]".blue(), message);
}

pub fn print_success(message: &str) {
    eprintln!("{} {}", "[+]".green(), message);
}

pub fn print_error(message: &str) {
    eprintln!("{} {}", "[!]".red(), message);
}
