//! UI utilities for pretty printing

use colored::Colorize;

pub fn print_field(label: &str, value: &str) {
    println!("{:<12} {}", format!("{}:", label).bright_green(), value);
}

pub fn print_info(msg: &str) {
    println!("{} {}", "ℹ".bright_blue(), msg);
}

pub fn print_error(msg: &str) {
    eprintln!("{} {}", "✗".bright_red(), msg.red());
}
