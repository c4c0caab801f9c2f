/// Events per second over a sliding window of the most recent samples.
///
/// Feed it a timestamp on every event (a frame drawn, a step taken) and read
/// the rate back. Until the window fills the rate is optimistic, since empty
/// slots count as zero-length intervals.
#[derive(Debug, Clone)]
pub struct RateCounter {
    samples: Vec<f64>,
    index: usize,
    sum: f64,
    last_time: Option<f64>,
    rate: f64,
}

impl RateCounter {
    pub fn new(max_samples: usize) -> Self {
        Self {
            samples: vec![0.0; max_samples.max(1)],
            index: 0,
            sum: 0.0,
            last_time: None,
            rate: 0.0,
        }
    }

    /// Record an event at time `now` (seconds) and return the updated rate
    pub fn tick(&mut self, now: f64) -> f64 {
        let delta = match self.last_time {
            Some(last) => now - last,
            None => 0.0,
        };
        self.last_time = Some(now);

        self.sum -= self.samples[self.index];
        self.sum += delta;
        self.samples[self.index] = delta;
        self.index = (self.index + 1) % self.samples.len();

        if self.sum > 0.0 {
            self.rate = self.samples.len() as f64 / self.sum;
        }
        self.rate
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }
}

impl Default for RateCounter {
    fn default() -> Self {
        Self::new(100)
    }
}
