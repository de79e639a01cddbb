use std::hint::black_box;
use std::time::{Duration, Instant};

/// What one busy loop got through before time ran out.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Workload {
    pub iterations: u64,
    pub total: f64,
    pub elapsed: Duration,
}

/// Spin on float additions until more than `seconds` have passed.
///
/// The clock is read after every addition, so at least one iteration always
/// runs. A NaN duration never compares as exceeded and spins forever.
pub fn block_cpu(seconds: f64) -> Workload {
    let mut total = 0.0_f64;
    let mut iterations = 0_u64;
    let start = Instant::now();
    loop {
        total = black_box(total + 1.0);
        iterations += 1;
        let elapsed = start.elapsed();
        if elapsed.as_secs_f64() > seconds {
            return Workload {
                iterations,
                total,
                elapsed,
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_duration_runs_once() {
        let work = block_cpu(-1.0);
        assert_eq!(work.iterations, 1);
        assert_eq!(work.total, 1.0);
    }

    #[test]
    fn zero_duration_stops_quickly() {
        let work = block_cpu(0.0);
        assert!(work.iterations >= 1);
        assert!(work.elapsed < Duration::from_secs(1));
    }

    #[test]
    fn runs_past_duration() {
        let work = block_cpu(0.05);
        assert!(work.elapsed >= Duration::from_millis(50));
        assert!(work.iterations > 1);
        assert_eq!(work.total, work.iterations as f64);
    }
}
