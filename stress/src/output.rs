use std::io::{self, Write};

use crate::error::StressError;

pub const USAGE: [&str; 2] = ["stress.py <time>", "  Stress CPU for <time> seconds."];

pub fn write_help<W: Write>(out: &mut W) -> io::Result<()> {
    for line in USAGE {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

pub fn error_line(err: &StressError) -> String {
    format!("ERROR - {err}")
}

pub fn status_line(seconds: f64) -> String {
    format!("Doing work for {} sec ...", format_seconds(seconds))
}

pub fn write_line<W: Write>(out: &mut W, line: &str) -> io::Result<()> {
    writeln!(out, "{line}")?;
    out.flush()
}

// A closed stdout must not abort the run, so write errors are dropped.
pub fn print_help() {
    let _ = write_help(&mut io::stdout().lock());
}

pub fn print_error(err: &StressError) {
    let _ = write_line(&mut io::stdout().lock(), &error_line(err));
}

pub fn print_status(seconds: f64) {
    let _ = write_line(&mut io::stdout().lock(), &status_line(seconds));
}

/// Shortest round-trip rendering of `seconds`.
///
/// Integral values keep a `.0`, exponents carry a sign and at least two
/// digits (`1e+20`, `1.5e-07`), non-finite values are `inf`, `-inf`, `nan`.
pub fn format_seconds(seconds: f64) -> String {
    if seconds.is_nan() {
        return "nan".to_owned();
    }
    if seconds.is_infinite() {
        return if seconds > 0.0 { "inf" } else { "-inf" }.to_owned();
    }

    // Debug already switches to scientific notation below 1e-4 and from 1e16 up.
    let repr = format!("{seconds:?}");
    match repr.split_once('e') {
        Some((mantissa, exp)) => {
            let (sign, digits) = match exp.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exp),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => repr,
    }
}
