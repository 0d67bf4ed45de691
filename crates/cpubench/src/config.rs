//! Application configuration from CLI flags and environment.

use clap::Parser;

/// CpuBench — CPU benchmark: pi digits or prime counting.
#[derive(Parser, Debug)]
#[command(name = "cpubench", version, about)]
#[allow(clippy::struct_excessive_bools)]
pub struct AppConfig {
    /// Value to benchmark with: digits of pi, or the prime upper bound.
    #[arg(short, long, default_value = "10000", env = "CPUBENCH_N")]
    pub n: u64,

    /// Workload to run: pi (single-threaded) or primes (all cores).
    #[arg(long, default_value = "pi")]
    pub mode: String,

    /// Worker count for the primes workload (0 = one per execution unit).
    #[arg(long, default_value = "0")]
    pub workers: usize,

    /// Print the full digit string instead of a truncated preview.
    #[arg(short, long)]
    pub verbose: bool,

    /// Quiet mode (only output the result value).
    #[arg(short, long)]
    pub quiet: bool,

    /// Show iteration, precision, and worker details.
    #[arg(short, long)]
    pub details: bool,

    /// Write the result (digits or count) to a file.
    #[arg(short, long)]
    pub output: Option<String>,

    /// Display a progress bar while computing.
    #[arg(long)]
    pub progress: bool,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = AppConfig::parse_from(["cpubench"]);
        assert_eq!(config.n, 10_000);
        assert_eq!(config.mode, "pi");
        assert_eq!(config.workers, 0);
        assert!(!config.quiet);
        assert!(config.output.is_none());
    }

    #[test]
    fn explicit_flags() {
        let config = AppConfig::parse_from([
            "cpubench", "-n", "500", "--mode", "primes", "--workers", "4", "-q",
        ]);
        assert_eq!(config.n, 500);
        assert_eq!(config.mode, "primes");
        assert_eq!(config.workers, 4);
        assert!(config.quiet);
    }
}
