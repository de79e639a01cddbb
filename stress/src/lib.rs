//! Keep one CPU busy with float additions for a number of seconds.
//!
//! `stress <time>` runs for `<time>` seconds (10.0 by default),
//! `stress -h` prints usage.

pub mod args;
pub mod error;
pub mod output;
pub mod work;

pub use args::{Args, Invocation, DEFAULT_SECONDS};
pub use error::{StressError, StressResult};
pub use work::{block_cpu, Workload};
