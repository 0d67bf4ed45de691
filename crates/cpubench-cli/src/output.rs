//! CLI output formatting and result dumps.

use std::io;
use std::time::Duration;

use cpubench_core::workload::PiDigits;

/// Format a digit string for display, truncating long runs unless verbose.
#[must_use]
pub fn format_digits(pi: &PiDigits, verbose: bool) -> String {
    let s = pi.decimal_string();
    if !verbose && s.len() > 100 {
        format!(
            "{}...{} ({} digits)",
            &s[..50],
            &s[s.len() - 50..],
            pi.digits.len()
        )
    } else {
        s
    }
}

/// Format a duration for display.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn format_duration(d: Duration) -> String {
    if d < Duration::from_millis(1) {
        format!("{}µs", d.as_micros())
    } else if d < Duration::from_secs(1) {
        format!("{:.2}ms", d.as_secs_f64() * 1_000.0)
    } else if d < Duration::from_secs(60) {
        format!("{:.3}s", d.as_secs_f64())
    } else {
        let mins = d.as_secs() / 60;
        let rest = d.as_secs_f64() - (mins * 60) as f64;
        format!("{mins}m{rest:.1}s")
    }
}

/// Format a number with thousand separators.
#[must_use]
pub fn format_number(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Write a result string to a file.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be created or written.
pub fn write_to_file(path: &str, contents: &str) -> io::Result<()> {
    std::fs::write(path, contents)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pi(digits: &str) -> PiDigits {
        PiDigits {
            digits: digits.to_string(),
            exponent: 1,
        }
    }

    #[test]
    fn format_digits_short_value_keeps_point() {
        assert_eq!(format_digits(&pi("31415"), false), "3.1415");
    }

    #[test]
    fn format_digits_truncates_long_values() {
        let long = pi(&"3".repeat(500));
        let s = format_digits(&long, false);
        assert!(s.contains("..."));
        assert!(s.contains("(500 digits)"));
        assert!(s.len() < 150);
    }

    #[test]
    fn format_digits_verbose_keeps_everything() {
        let long = pi(&"3".repeat(500));
        let s = format_digits(&long, true);
        assert_eq!(s.len(), 501); // decimal point included
    }

    #[test]
    fn format_duration_ranges() {
        assert!(format_duration(Duration::from_nanos(500)).contains("µs"));
        assert!(format_duration(Duration::from_millis(42)).contains("ms"));
        assert!(format_duration(Duration::from_secs_f64(3.14)).contains('s'));
        assert_eq!(format_duration(Duration::from_secs(90)), "1m30.0s");
    }

    #[test]
    fn format_number_thousands() {
        assert_eq!(format_number(42), "42");
        assert_eq!(format_number(1234), "1,234");
        assert_eq!(format_number(1_000_000), "1,000,000");
    }
}
