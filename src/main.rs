// Sat Oct 17 2026 - Alex

use memory_table::ui;

fn main() {
    if let Err(e) = ui::cli::run() {
        ui::print_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}
