use thiserror::Error;

/// Everything that can stop a run before any work starts.
#[derive(Debug, Error)]
pub enum StressError {
    /// A duration token that does not read as a float.
    #[error("Bad value: {0}")]
    BadValue(String),

    /// clap could not collect the command line.
    #[error(transparent)]
    Cli(#[from] clap::Error),
}

pub type StressResult<T> = Result<T, StressError>;
