//! Command-line handling.
//!
//! clap only collects the raw tokens. Help and duration are resolved by
//! scanning them in order, so `-h` stops the scan wherever it shows up and a
//! bad token fails the run at the point it is reached.

use std::ffi::{OsStr, OsString};
use std::iter;

use clap::Parser;
use tracing::trace;

use crate::error::{StressError, StressResult};

/// Seconds of work when no duration is given.
pub const DEFAULT_SECONDS: f64 = 10.0;

/// Stress one CPU for a number of seconds
#[derive(Parser, Debug)]
#[command(long_about = None, disable_help_flag = true, disable_version_flag = true)]
pub struct Args {
    /// Seconds to keep the cpu busy (last one wins), or -h/--help
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    tokens: Vec<OsString>,
}

/// What the command line asks for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Invocation {
    /// Busy the cpu for `seconds`.
    Run { seconds: f64 },
    /// Print usage and do no work.
    Help,
}

impl Args {
    /// Collect arguments from the environment.
    pub fn from_env() -> StressResult<Self> {
        Self::from_args(std::env::args_os())
    }

    /// Collect arguments from an iterator whose first item is the binary name.
    ///
    /// clap is handed its own `--` right after the binary name, so a `--`
    /// typed by the user is kept as an ordinary token.
    pub fn from_args<I, T>(itr: I) -> StressResult<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let mut itr = itr.into_iter().map(Into::<OsString>::into);
        let bin = itr.next().unwrap_or_else(|| OsString::from("stress"));
        let argv = iter::once(bin)
            .chain(iter::once(OsString::from("--")))
            .chain(itr);
        Ok(Self::try_parse_from(argv)?)
    }

    pub fn tokens(&self) -> &[OsString] {
        &self.tokens
    }

    pub fn invocation(&self) -> StressResult<Invocation> {
        resolve(&self.tokens)
    }
}

/// Scan `tokens` in order and decide what to do.
///
/// Every numeric token overwrites the previous duration. The scan stops at
/// the first help flag or the first token that is not a float.
pub fn resolve<I, S>(tokens: I) -> StressResult<Invocation>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let mut seconds = DEFAULT_SECONDS;
    for token in tokens {
        let token = token.as_ref().to_string_lossy();
        trace!(%token, "scanning argument");
        if token == "-h" || token == "--help" {
            return Ok(Invocation::Help);
        }
        seconds = parse_seconds(&token).ok_or_else(|| StressError::BadValue(token.into_owned()))?;
    }
    Ok(Invocation::Run { seconds })
}

/// Surrounding whitespace is ignored. `inf`, `infinity` and `nan` are
/// accepted in any case, with an optional sign. Single underscores between
/// digits group them (`1_000.5`).
pub fn parse_seconds(token: &str) -> Option<f64> {
    strip_digit_underscores(token.trim())?.parse().ok()
}

/// `None` when an underscore is not surrounded by digits.
fn strip_digit_underscores(token: &str) -> Option<String> {
    let mut out = String::with_capacity(token.len());
    let mut prev = None;
    let mut chars = token.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '_' {
            let after_digit = prev.is_some_and(|p: char| p.is_ascii_digit());
            let before_digit = chars.peek().is_some_and(char::is_ascii_digit);
            if !(after_digit && before_digit) {
                return None;
            }
        } else {
            out.push(c);
        }
        prev = Some(c);
    }
    Some(out)
}
