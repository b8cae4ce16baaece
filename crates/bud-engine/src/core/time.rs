/// Frame-rate limiter for the per-frame animation callback.
/// Accumulates elapsed wall time against a target tick interval; the
/// excess is carried over rather than reset, so the tick rate does not
/// drift when frame deltas straddle the threshold.
pub struct TickTimer {
    /// Target interval between simulation ticks, in milliseconds.
    interval_ms: f32,
    /// Accumulated time from variable frame deltas.
    accumulator: f32,
}

impl TickTimer {
    /// Cap on catch-up ticks per frame to prevent spiral of death.
    const MAX_CATCH_UP: f32 = 10.0;

    pub fn new(fps: u32) -> Self {
        Self {
            interval_ms: 1000.0 / fps.max(1) as f32,
            accumulator: 0.0,
        }
    }

    /// Add frame time to the accumulator. Returns the number of
    /// simulation ticks to run.
    pub fn advance(&mut self, elapsed_ms: f32) -> u32 {
        self.accumulator += elapsed_ms;
        self.accumulator = self.accumulator.min(self.interval_ms * Self::MAX_CATCH_UP);
        let ticks = (self.accumulator / self.interval_ms) as u32;
        self.accumulator -= ticks as f32 * self.interval_ms;
        ticks
    }

    pub fn interval_ms(&self) -> f32 {
        self.interval_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_tick_exact() {
        let mut timer = TickTimer::new(60);
        assert_eq!(timer.advance(1000.0 / 60.0), 1);
    }

    #[test]
    fn accumulates_partial_frames() {
        let mut timer = TickTimer::new(60);
        assert_eq!(timer.advance(8.0), 0);
        // 8 + 10 = 18ms, over one 16.67ms tick
        assert_eq!(timer.advance(10.0), 1);
    }

    #[test]
    fn excess_carries_over() {
        let mut timer = TickTimer::new(60);
        // 25ms = one tick plus ~8.3ms carried over
        assert_eq!(timer.advance(25.0), 1);
        // Another 10ms pushes the carry past a second tick
        assert_eq!(timer.advance(10.0), 1);
    }

    #[test]
    fn caps_catch_up_ticks() {
        let mut timer = TickTimer::new(60);
        // A full second of backlog, capped at 10 ticks
        assert_eq!(timer.advance(1000.0), 10);
    }
}
