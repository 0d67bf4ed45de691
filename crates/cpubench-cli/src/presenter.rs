//! CLI result presenter.

use cpubench_core::chudnovsky::{iterations_for, precision_for};
use cpubench_core::options::Options;
use cpubench_core::runner::BenchReport;
use cpubench_core::workload::BenchOutput;

use crate::checksum::output_checksum;
use crate::output::{format_digits, format_duration, format_number};
use crate::ui;

/// CLI result presenter.
pub struct CliPresenter {
    verbose: bool,
    quiet: bool,
    details: bool,
    workers: usize,
}

impl CliPresenter {
    /// Create a presenter from the run options and quiet flag.
    #[must_use]
    pub fn new(opts: &Options, quiet: bool) -> Self {
        Self {
            verbose: opts.verbose,
            quiet,
            details: opts.details,
            workers: opts.workers,
        }
    }

    /// Present a finished benchmark report, including the checksum line.
    pub fn present_report(&self, report: &BenchReport) {
        let output = match &report.outcome {
            Ok(output) => output,
            Err(error) => {
                self.present_error(&error.to_string());
                return;
            }
        };

        if self.quiet {
            match output {
                BenchOutput::Pi(pi) => println!("{}", pi.decimal_string()),
                BenchOutput::Primes(count) => println!("{count}"),
            }
            return;
        }

        println!("Workload: {}", report.workload);
        println!("N: {}", format_number(report.value));
        println!("Duration: {}", format_duration(report.duration));

        match output {
            BenchOutput::Pi(pi) => {
                if self.details {
                    println!("Iterations: {}", format_number(iterations_for(report.value)));
                    if let Ok(bits) = precision_for(report.value) {
                        println!("Precision: {} bits", format_number(bits));
                    }
                }
                println!("pi = {}", format_digits(pi, self.verbose));
            }
            BenchOutput::Primes(count) => {
                if self.details {
                    println!("Workers: {}", self.workers);
                }
                println!("Primes found: {}", format_number(*count));
            }
        }

        println!("MD5 checksum: {}", output_checksum(output));
    }

    /// Present an error.
    pub fn present_error(&self, error: &str) {
        ui::print_error(error);
    }
}
