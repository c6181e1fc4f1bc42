use std::fmt;
use std::time::{Duration, Instant};

/// Records the total run interval and the compute-only interval.
///
/// `start` marks the beginning of the whole run, `begin_work` and `end_work`
/// bracket pool spawn through pool join, and `finish` closes the run after
/// output has been written.
#[derive(Debug, Clone)]
pub struct TimingHarness {
    start_total: Instant,
    start_work: Option<Instant>,
    end_work: Option<Instant>,
}

impl TimingHarness {
    pub fn start() -> Self {
        TimingHarness {
            start_total: Instant::now(),
            start_work: None,
            end_work: None,
        }
    }

    /// Marks the instant immediately before the workers are spawned.
    pub fn begin_work(&mut self) {
        self.start_work = Some(Instant::now());
        self.end_work = None;
    }

    /// Marks the instant immediately after the join barrier returns.
    pub fn end_work(&mut self) {
        self.end_work = Some(Instant::now());
    }

    /// Runs `f` between `begin_work` and `end_work`.
    pub fn measure_work<T>(&mut self, f: impl FnOnce() -> T) -> T {
        self.begin_work();
        let out = f();
        self.end_work();
        out
    }

    /// Compute-only interval so far; zero if work was never bracketed.
    pub fn work_elapsed(&self) -> Duration {
        match (self.start_work, self.end_work) {
            (Some(start), Some(end)) => end.duration_since(start),
            _ => Duration::ZERO,
        }
    }

    /// Closes the total interval and produces the sample.
    pub fn finish(self, rows: usize, workers: usize) -> TimingSample {
        let end_total = Instant::now();
        TimingSample {
            rows,
            workers,
            total: end_total.duration_since(self.start_total),
            compute: self.work_elapsed(),
        }
    }
}

/// Elapsed intervals of one run plus the problem size and worker count.
///
/// Displays as the CSV line `rows,workers,total,compute` with seconds in
/// C `%e` notation (for example `1.234560e-03`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimingSample {
    pub rows: usize,
    pub workers: usize,
    pub total: Duration,
    pub compute: Duration,
}

impl fmt::Display for TimingSample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{},{}",
            self.rows,
            self.workers,
            sci(self.total.as_secs_f64()),
            sci(self.compute.as_secs_f64())
        )
    }
}

/// Formats like C's `%e`: six fractional digits and a signed exponent of
/// at least two digits.
fn sci(value: f64) -> String {
    let s = format!("{value:.6e}");
    match s.split_once('e') {
        Some((mantissa, exp)) => {
            let (sign, digits) = match exp.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exp),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_sci_matches_c_printf() {
        assert_eq!(sci(0.0), "0.000000e+00");
        assert_eq!(sci(1.5), "1.500000e+00");
        assert_eq!(sci(0.00123456), "1.234560e-03");
        assert_eq!(sci(12345.0), "1.234500e+04");
        assert_eq!(sci(2.5e-120), "2.500000e-120");
    }

    #[test]
    fn test_sample_display() {
        let sample = TimingSample {
            rows: 5,
            workers: 4,
            total: Duration::from_millis(250),
            compute: Duration::from_micros(20),
        };
        assert_eq!(sample.to_string(), "5,4,2.500000e-01,2.000000e-05");
    }

    #[test]
    fn test_intervals_nest() {
        let mut timer = TimingHarness::start();
        let value = timer.measure_work(|| {
            std::thread::sleep(Duration::from_millis(5));
            42
        });
        assert_eq!(value, 42);
        let sample = timer.finish(10, 2);
        assert_eq!(sample.rows, 10);
        assert_eq!(sample.workers, 2);
        assert!(sample.compute >= Duration::from_millis(5));
        assert!(sample.total >= sample.compute);
    }

    #[test]
    fn test_no_work_means_zero_compute() {
        let timer = TimingHarness::start();
        let sample = timer.finish(1, 1);
        assert_eq!(sample.compute, Duration::ZERO);
    }

    #[test]
    fn test_display_round_trips_seconds() {
        let sample = TimingSample {
            rows: 1,
            workers: 1,
            total: Duration::from_secs_f64(0.75),
            compute: Duration::from_secs_f64(0.125),
        };
        let line = sample.to_string();
        let fields: Vec<&str> = line.split(',').collect();
        assert_eq!(fields.len(), 4);
        assert_relative_eq!(fields[2].parse::<f64>().unwrap(), 0.75);
        assert_relative_eq!(fields[3].parse::<f64>().unwrap(), 0.125);
    }
}
