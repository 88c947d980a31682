//! Decaying moving average over a scalar series.
//!
//! Keeps two statistics in parallel: a plain average and variance over a
//! fixed window of the most recent samples, and an exponentially decayed
//! average and variance that weigh recent samples more heavily. The decayed
//! pair reacts to workload drift while the windowed pair stays comparable
//! across readings, which is exactly what trigger heuristics want when they
//! compute confidence bounds and z-scores.

/// Moving average with both windowed and exponentially decayed statistics.
///
/// All updates are O(1). Not thread safe; the owning heuristic is only ever
/// driven from the controller thread.
pub struct DecayingMovingAverage {
    window: Box<[f64]>,
    next: usize,
    num: usize,

    sum: f64,
    sum_of_squares: f64,

    davg: f64,
    dvariance: f64,
    alpha: f64,
}

impl DecayingMovingAverage {
    /// `window_samples` bounds the plain average, `decay_factor` is the
    /// weight kept from history on every new sample, in `(0, 1]`.
    pub fn new(window_samples: usize, decay_factor: f64) -> Self {
        assert!(window_samples > 0, "window must hold at least one sample");
        assert!(
            decay_factor > 0.0 && decay_factor <= 1.0,
            "decay factor out of range: {}",
            decay_factor
        );
        Self {
            window: vec![0.0; window_samples].into_boxed_slice(),
            next: 0,
            num: 0,
            sum: 0.0,
            sum_of_squares: 0.0,
            davg: 0.0,
            dvariance: 0.0,
            alpha: decay_factor,
        }
    }

    pub fn add(&mut self, value: f64) {
        if self.num == 0 {
            self.davg = value;
            self.dvariance = 0.0;
        } else {
            self.davg = (1.0 - self.alpha) * value + self.alpha * self.davg;
            let diff = value - self.davg;
            self.dvariance = (1.0 - self.alpha) * diff * diff + self.alpha * self.dvariance;
        }

        // Evict the oldest sample from the running sums before the slot is
        // overwritten. The slots start out zeroed so this is a no-op until
        // the window wraps.
        let old = self.window[self.next];
        self.sum -= old;
        self.sum_of_squares -= old * old;

        self.sum += value;
        self.sum_of_squares += value * value;
        self.window[self.next] = value;
        self.next = (self.next + 1) % self.window.len();
        if self.num < self.window.len() {
            self.num += 1;
        }
    }

    pub fn num(&self) -> usize {
        self.num
    }

    /// Plain average of the windowed samples, 0.0 before any sample.
    pub fn avg(&self) -> f64 {
        if self.num == 0 {
            return 0.0;
        }
        self.sum / self.num as f64
    }

    /// Population variance of the windowed samples, 0.0 with fewer than two.
    pub fn variance(&self) -> f64 {
        if self.num <= 1 {
            return 0.0;
        }
        let x_bar = self.avg();
        let result = self.sum_of_squares / self.num as f64 - x_bar * x_bar;
        // Rounding may drive the difference of the two large terms slightly
        // negative.
        result.max(0.0)
    }

    pub fn sd(&self) -> f64 {
        self.variance().sqrt()
    }

    /// Decayed average, 0.0 before any sample.
    pub fn davg(&self) -> f64 {
        if self.num == 0 {
            return 0.0;
        }
        self.davg
    }

    pub fn dvariance(&self) -> f64 {
        self.dvariance
    }

    pub fn dsd(&self) -> f64 {
        self.dvariance.sqrt()
    }
}
