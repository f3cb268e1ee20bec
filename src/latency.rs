use std::ops::RangeInclusive;
use std::time::Duration;

use rand::Rng;
use tracing::debug;

/// Seconds slept before any output is produced.
pub const STARTUP_DELAY_SECS: RangeInclusive<f64> = 0.5..=2.0;
/// Seconds slept between two consecutive response events.
pub const EVENT_PAUSE_SECS: RangeInclusive<f64> = 0.5..=1.0;
/// Largest accepted latency multiplier.
pub const MAX_LATENCY_SCALE: f64 = 1000.0;

/// Simulated latency of a slow remote model.
#[derive(Debug, Clone)]
pub struct Latency {
    startup: RangeInclusive<f64>,
    pause: RangeInclusive<f64>,
}

impl Default for Latency {
    fn default() -> Self {
        Self::scaled(1.0)
    }
}

impl Latency {
    /// Both ranges multiplied by `scale`, clamped to `0..=MAX_LATENCY_SCALE`.
    /// A scale of 0 disables sleeping.
    pub fn scaled(scale: f64) -> Self {
        let scale = if scale.is_finite() {
            scale.clamp(0.0, MAX_LATENCY_SCALE)
        } else {
            1.0
        };
        Self {
            startup: STARTUP_DELAY_SECS.start() * scale..=STARTUP_DELAY_SECS.end() * scale,
            pause: EVENT_PAUSE_SECS.start() * scale..=EVENT_PAUSE_SECS.end() * scale,
        }
    }

    /// Constant delays, for tests that need exact timing.
    #[cfg(test)]
    pub fn fixed(startup: Duration, pause: Duration) -> Self {
        let startup = startup.as_secs_f64();
        let pause = pause.as_secs_f64();
        Self {
            startup: startup..=startup,
            pause: pause..=pause,
        }
    }

    pub fn startup_delay(&self) -> Duration {
        Self::sample(&self.startup)
    }

    pub fn pause_delay(&self) -> Duration {
        Self::sample(&self.pause)
    }

    /// Lower and upper bound of the total time slept for a run that writes
    /// `lines` lines: one startup delay plus a pause between each pair.
    pub fn bounds(&self, lines: usize) -> (Duration, Duration) {
        let gaps = lines.saturating_sub(1) as f64;
        let min = self.startup.start() + self.pause.start() * gaps;
        let max = self.startup.end() + self.pause.end() * gaps;
        (Duration::from_secs_f64(min), Duration::from_secs_f64(max))
    }

    pub async fn startup(&self) {
        let delay = self.startup_delay();
        debug!(delay_ms = delay.as_millis() as u64, "simulating startup latency");
        Self::sleep(delay).await;
    }

    pub async fn pause(&self) {
        let delay = self.pause_delay();
        debug!(delay_ms = delay.as_millis() as u64, "pausing between events");
        Self::sleep(delay).await;
    }

    async fn sleep(delay: Duration) {
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }

    fn sample(range: &RangeInclusive<f64>) -> Duration {
        if range.end() <= range.start() {
            return Duration::from_secs_f64(*range.start());
        }
        let secs = rand::thread_rng().gen_range(range.clone());
        Duration::from_secs_f64(secs)
    }
}
