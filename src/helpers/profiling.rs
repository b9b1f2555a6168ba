use std::fs;
use std::time::{Duration, Instant};

pub fn get_rss_memory() -> u64 {
    if let Ok(statm) = fs::read_to_string("/proc/self/statm") {
        if let Some(rss_str) = statm.split_whitespace().nth(1) {
            if let Ok(rss) = rss_str.parse::<u64>() {
                return rss * 4096 / 1024; // pages to KB
            }
        }
    }
    0
}

/// Wall time and resident memory captured at the start of a load.
pub struct Probe {
    start: Instant,
    initial_memory: u64,
}

impl Probe {
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
            initial_memory: get_rss_memory(),
        }
    }

    /// Elapsed time and RSS growth in KB. Shrinking memory reports 0.
    pub fn finish(&self) -> (Duration, u64) {
        let final_memory = get_rss_memory();
        (
            self.start.elapsed(),
            final_memory.saturating_sub(self.initial_memory),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn probe_measures_elapsed_time() {
        let probe = Probe::start();
        std::thread::sleep(Duration::from_millis(5));
        let (elapsed, _) = probe.finish();
        assert!(elapsed >= Duration::from_millis(5));
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn rss_is_reported_on_linux() {
        assert!(get_rss_memory() > 0);
    }
}
