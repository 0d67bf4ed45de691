//! Application entry point and dispatch.

use anyhow::{Context, Result};

use cpubench_cli::output::{format_number, write_to_file};
use cpubench_cli::presenter::CliPresenter;
use cpubench_cli::progress::ProgressBarObserver;
use cpubench_cli::ui;
use cpubench_core::observer::ProgressObserver;
use cpubench_core::observers::{LoggingObserver, NoOpObserver};
use cpubench_core::options::Options;
use cpubench_core::registry::{DefaultFactory, WorkloadFactory};
use cpubench_core::runner::execute_workload;
use cpubench_core::workload::BenchOutput;

use crate::config::AppConfig;
use crate::priority;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        cpubench_cli::completion::generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(());
    }

    let opts = Options {
        workers: config.workers,
        verbose: config.verbose,
        details: config.details,
    }
    .normalize();

    if !config.quiet {
        ui::print_banner(crate::version::version());
    }

    if let Err(e) = priority::raise_priority() {
        tracing::warn!("could not raise process priority: {e}");
        ui::print_warning("unable to raise process priority; timings may be noisier (try running as root)");
    }

    let factory = DefaultFactory::new();
    let workload = factory.get(&config.mode)?;

    if !config.quiet {
        println!(
            "Running {} with n = {}...",
            workload.name(),
            format_number(config.n)
        );
    }

    let observer: Box<dyn ProgressObserver> = if config.progress && !config.quiet {
        Box::new(ProgressBarObserver::new())
    } else if config.verbose {
        Box::new(LoggingObserver::new(500))
    } else {
        Box::new(NoOpObserver::new())
    };

    let report = execute_workload(workload.as_ref(), config.n, &opts, observer.as_ref());

    let presenter = CliPresenter::new(&opts, config.quiet);
    presenter.present_report(&report);

    match report.outcome {
        Ok(output) => {
            if let Some(path) = &config.output {
                let contents = match &output {
                    BenchOutput::Pi(pi) => pi.decimal_string(),
                    BenchOutput::Primes(count) => count.to_string(),
                };
                write_to_file(path, &contents)
                    .with_context(|| format!("failed to write result to {path}"))?;
            }
            Ok(())
        }
        Err(error) => Err(error.into()),
    }
}
