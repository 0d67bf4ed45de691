//! Terminal UI helpers: banner and styled messages.

use console::style;
use sysinfo::System;

/// Check if color output is disabled via `NO_COLOR` env var.
#[must_use]
pub fn is_color_disabled() -> bool {
    std::env::var("NO_COLOR").is_ok()
}

/// Print the startup banner with host information.
pub fn print_banner(version: &str) {
    let os = System::name().unwrap_or_else(|| "unknown".to_string());
    let kernel = System::kernel_version().unwrap_or_else(|| "unknown".to_string());
    let arch = System::cpu_arch().unwrap_or_else(|| std::env::consts::ARCH.to_string());
    let units = cpubench_core::options::available_parallelism();

    let rule = "-".repeat(63);
    let body = format!(
        "CPU Bench v{version}\n{os} {kernel} ({arch}, {units} execution units)"
    );
    if is_color_disabled() {
        println!("{rule}\n{body}\n{rule}\n");
    } else {
        println!(
            "{}\n{}\n{}\n",
            style(&rule).green(),
            style(&body).green(),
            style(&rule).green()
        );
    }
}

/// Print a warning message.
pub fn print_warning(text: &str) {
    if is_color_disabled() {
        eprintln!("[WARN] {text}");
    } else {
        eprintln!("{} {text}", style("[WARN]").yellow().bold());
    }
}

/// Print an error message.
pub fn print_error(text: &str) {
    if is_color_disabled() {
        eprintln!("[ERROR] {text}");
    } else {
        eprintln!("{} {text}", style("[ERROR]").red().bold());
    }
}
