use std::process::ExitCode;

use stress::{block_cpu, output, Args, Invocation, StressError};
use tracing::{debug, level_filters::LevelFilter};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();
    // stdout carries the user-facing lines, diagnostics stay on stderr.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    init_tracing();

    let invocation = Args::from_env().and_then(|args| args.invocation());
    debug!(?invocation, "resolved command line");

    match invocation {
        Ok(Invocation::Help) => {
            output::print_help();
            ExitCode::SUCCESS
        }
        Ok(Invocation::Run { seconds }) => {
            output::print_status(seconds);
            debug!(seconds, "blocking cpu");
            let work = block_cpu(seconds);
            debug!(
                iterations = work.iterations,
                total = work.total,
                elapsed = ?work.elapsed,
                "done"
            );
            ExitCode::SUCCESS
        }
        Err(err @ StressError::BadValue(_)) => {
            output::print_error(&err);
            ExitCode::from(1)
        }
        Err(StressError::Cli(err)) => {
            let _ = err.print();
            ExitCode::from(1)
        }
    }
}
