//! Settle animation and release target selection

/// Offsets closer than this are treated as the same stop
const STOP_EPSILON: f32 = 1e-4;

/// Duration policy for settle animations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettleTiming {
    /// Duration of a non-flung settle across the full range
    pub base_ms: u64,
    pub min_ms: u64,
    pub max_ms: u64,
}

impl Default for SettleTiming {
    fn default() -> Self {
        Self {
            base_ms: 256,
            min_ms: 0,
            max_ms: 600,
        }
    }
}

impl SettleTiming {
    /// Duration for travelling `distance_px` of a `range_px` slide range
    ///
    /// A fling moves at roughly a quarter of the release speed on average;
    /// otherwise the duration grows with the fraction of range travelled.
    pub fn duration_ms(&self, distance_px: f32, range_px: i32, velocity: f32) -> u64 {
        let distance = distance_px.abs();
        let raw = if velocity.abs() > 0.0 {
            4.0 * 1000.0 * distance / velocity.abs()
        } else {
            let range = range_px.max(1) as f32;
            (distance / range + 1.0) * self.base_ms as f32
        };
        (raw.round() as u64).clamp(self.min_ms, self.max_ms)
    }
}

/// Quintic ease-out: fast start, gentle landing
pub fn ease_out_quint(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0) - 1.0;
    t * t * t * t * t + 1.0
}

/// Time-based interpolation between two offsets
#[derive(Debug, Clone, PartialEq)]
pub struct SettleAnimation {
    pub from: f32,
    pub to: f32,
    /// Set at the first tick when the settle was started without a clock
    pub start_ms: Option<u64>,
    pub duration_ms: u64,
}

impl SettleAnimation {
    pub fn new(from: f32, to: f32, start_ms: Option<u64>, duration_ms: u64) -> Self {
        Self {
            from,
            to,
            start_ms,
            duration_ms,
        }
    }

    /// Offset at `now_ms` and whether the animation has finished
    ///
    /// The final sample is exactly `to`.
    pub fn sample(&mut self, now_ms: u64) -> (f32, bool) {
        let start = *self.start_ms.get_or_insert(now_ms);
        let elapsed = now_ms.saturating_sub(start);
        if self.duration_ms == 0 || elapsed >= self.duration_ms {
            return (self.to, true);
        }
        let t = elapsed as f32 / self.duration_ms as f32;
        (self.from + (self.to - self.from) * ease_out_quint(t), false)
    }
}

/// Pick where a released gesture settles
///
/// `velocity` is signed towards expanded. A fling picks the nearest stop
/// strictly in its direction (or the 0/1 boundary if none); otherwise the
/// nearest stop wins, ties going to the higher offset. `stops` must be
/// ascending.
pub fn choose_settle_target(
    offset: f32,
    velocity: f32,
    min_fling_velocity: f32,
    stops: &[f32],
) -> f32 {
    if velocity.abs() >= min_fling_velocity && velocity != 0.0 {
        let target = if velocity > 0.0 {
            stops.iter().copied().find(|&s| s > offset + STOP_EPSILON)
        } else {
            stops.iter().rev().copied().find(|&s| s < offset - STOP_EPSILON)
        };
        return target.unwrap_or(if velocity > 0.0 { 1.0 } else { 0.0 });
    }

    let mut best: Option<(f32, f32)> = None;
    for &stop in stops {
        let distance = (offset - stop).abs();
        best = match best {
            None => Some((stop, distance)),
            Some((best_stop, best_distance)) => {
                if distance < best_distance - STOP_EPSILON {
                    Some((stop, distance))
                } else if (distance - best_distance).abs() <= STOP_EPSILON && stop > best_stop {
                    Some((stop, distance))
                } else {
                    Some((best_stop, best_distance))
                }
            }
        };
    }
    best.map(|(stop, _)| stop).unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const STOPS: [f32; 2] = [0.0, 1.0];
    const ANCHORED: [f32; 3] = [0.0, 0.5, 1.0];

    #[test]
    fn test_nearest_snap() {
        assert_eq!(choose_settle_target(0.6, 0.0, 400.0, &STOPS), 1.0);
        assert_eq!(choose_settle_target(0.4, 0.0, 400.0, &STOPS), 0.0);
        assert_eq!(choose_settle_target(0.45, 0.0, 400.0, &ANCHORED), 0.5);
        assert_eq!(choose_settle_target(0.8, 399.0, 400.0, &ANCHORED), 1.0);
    }

    #[test]
    fn test_tie_breaks_upward() {
        assert_eq!(choose_settle_target(0.5, 0.0, 400.0, &STOPS), 1.0);
        assert_eq!(choose_settle_target(0.25, 0.0, 400.0, &ANCHORED), 0.5);
    }

    #[test]
    fn test_fling_directional() {
        assert_eq!(choose_settle_target(1.0, -800.0, 400.0, &STOPS), 0.0);
        assert_eq!(choose_settle_target(0.9, -800.0, 400.0, &ANCHORED), 0.5);
        assert_eq!(choose_settle_target(0.1, 800.0, 400.0, &ANCHORED), 0.5);
        assert_eq!(choose_settle_target(0.55, 800.0, 400.0, &ANCHORED), 1.0);
    }

    #[test]
    fn test_fling_past_last_stop_uses_boundary() {
        assert_eq!(choose_settle_target(1.0, 900.0, 400.0, &STOPS), 1.0);
        assert_eq!(choose_settle_target(0.0, -900.0, 400.0, &STOPS), 0.0);
    }

    #[test]
    fn test_fling_to_hidden_from_edge() {
        let stops = [-0.1, 0.0, 1.0];
        assert_eq!(choose_settle_target(0.0, -900.0, 400.0, &stops), -0.1);
        assert_eq!(choose_settle_target(0.3, -900.0, 400.0, &stops), 0.0);
    }

    #[test]
    fn test_animation_ends_exactly() {
        let mut anim = SettleAnimation::new(0.2, 1.0, Some(0), 100);
        let (mid, done) = anim.sample(50);
        assert!(!done);
        assert!(mid > 0.2 && mid < 1.0);
        assert_eq!(anim.sample(100), (1.0, true));
    }

    #[test]
    fn test_lazy_start() {
        let mut anim = SettleAnimation::new(0.0, 1.0, None, 100);
        assert_eq!(anim.sample(1000), (0.0, false));
        assert_eq!(anim.start_ms, Some(1000));
        assert_eq!(anim.sample(1100), (1.0, true));
    }

    #[test]
    fn test_duration_clamped() {
        let timing = SettleTiming::default();
        assert_eq!(timing.duration_ms(1000.0, 1000, 0.0), 512.min(600));
        assert_eq!(timing.duration_ms(1000.0, 1000, 100.0), 600);
        assert_eq!(timing.duration_ms(500.0, 1000, 8000.0), 250);
    }
}
