//! Pointer velocity estimation
//!
//! Keeps a short history of pointer samples and fits a line through the
//! ones inside the time window. Older samples are discarded so a pause
//! before release does not bias the estimate.

use std::collections::VecDeque;

/// Upper bound on retained samples
const MAX_SAMPLES: usize = 20;

/// Pointer axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Sample {
    time_ms: u64,
    x: f32,
    y: f32,
}

impl Sample {
    fn along(&self, axis: Axis) -> f32 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }
}

#[derive(Debug, Clone)]
pub struct VelocityTracker {
    samples: VecDeque<Sample>,
    window_ms: u64,
}

impl Default for VelocityTracker {
    fn default() -> Self {
        Self::new(100)
    }
}

impl VelocityTracker {
    pub fn new(window_ms: u64) -> Self {
        Self {
            samples: VecDeque::with_capacity(MAX_SAMPLES),
            window_ms,
        }
    }

    /// Clear all samples (gesture start)
    pub fn reset(&mut self) {
        self.samples.clear();
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Record a pointer position
    ///
    /// Samples going back in time restart the history.
    pub fn add_sample(&mut self, time_ms: u64, x: f32, y: f32) {
        if let Some(last) = self.samples.back() {
            if time_ms < last.time_ms {
                self.samples.clear();
            }
        }
        self.samples.push_back(Sample { time_ms, x, y });

        // Drop samples that fell out of the window or over capacity
        let newest = time_ms;
        while let Some(front) = self.samples.front() {
            let stale = newest.saturating_sub(front.time_ms) > self.window_ms;
            if stale || self.samples.len() > MAX_SAMPLES {
                self.samples.pop_front();
            } else {
                break;
            }
        }
    }

    /// Estimated velocity along `axis` in pixels per second
    ///
    /// Least-squares slope over the windowed samples; zero with fewer than
    /// two samples or when all samples share a timestamp.
    pub fn current_velocity(&self, axis: Axis) -> f32 {
        if self.samples.len() < 2 {
            return 0.0;
        }
        let Some(newest) = self.samples.back() else {
            return 0.0;
        };
        let origin = newest.time_ms;

        let points: Vec<(f64, f64)> = self
            .samples
            .iter()
            .filter(|s| origin - s.time_ms <= self.window_ms)
            .map(|s| {
                let t = -((origin - s.time_ms) as f64) / 1000.0;
                (t, s.along(axis) as f64)
            })
            .collect();

        if points.len() < 2 {
            return 0.0;
        }

        let n = points.len() as f64;
        let mean_t = points.iter().map(|(t, _)| t).sum::<f64>() / n;
        let mean_p = points.iter().map(|(_, p)| p).sum::<f64>() / n;

        let mut cov = 0.0;
        let mut var = 0.0;
        for (t, p) in &points {
            cov += (t - mean_t) * (p - mean_p);
            var += (t - mean_t) * (t - mean_t);
        }

        if var <= f64::EPSILON {
            return 0.0;
        }
        (cov / var) as f32
    }
}
