//! Header printing.

/// Print a bold section header.
pub fn print_header(title: &str) {
    println!("\n\x1b[1m{}\x1b[0m", title);
    println!("═══════════════════════════════════════");
}
