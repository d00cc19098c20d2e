use std::time::Instant;

/// A struct to track and log progress of a long-running conversion.
///
/// streams have no known length up front, so this reports a running count
/// and throughput every `check` hands instead of a percentage.
pub struct Progress {
    check: usize,
    ticks: usize,
    begin: Instant,
    delta: Instant,
}

impl Progress {
    pub fn new(check: usize) -> Self {
        let now = Instant::now();
        Self {
            check: check.max(1),
            ticks: 0,
            begin: now,
            delta: now,
        }
    }

    pub fn tick(&mut self) {
        self.ticks += 1;
        if self.ticks % self.check == 0 {
            let now = Instant::now();
            let total_t = now.duration_since(self.begin);
            let delta_t = now.duration_since(self.delta);
            self.delta = now;
            log::info!(
                "progress: {:8.0?} {:>10} hands   mean {:6.0}/s   last {:6.0}/s",
                total_t,
                self.ticks,
                self.ticks as f32 / total_t.as_secs_f32(),
                self.check as f32 / delta_t.as_secs_f32(),
            );
        }
    }

    pub fn ticks(&self) -> usize {
        self.ticks
    }
}

impl Default for Progress {
    fn default() -> Self {
        Self::new(crate::PROGRESS_INTERVAL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_ticks() {
        let mut progress = Progress::new(10);
        for _ in 0..25 {
            progress.tick();
        }
        assert!(progress.ticks() == 25);
    }

    #[test]
    fn zero_interval_never_divides_by_zero() {
        let mut progress = Progress::new(0);
        progress.tick();
        assert!(progress.ticks() == 1);
    }
}
