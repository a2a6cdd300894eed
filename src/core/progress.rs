use std::time::Duration;

pub const DEFAULT_STEP: u8 = 2;
pub const DEFAULT_TICK: Duration = Duration::from_millis(50);
const COMPLETE: u8 = 100;

/// 查詢前的進度動畫，純粹為了呈現節奏，不代表實際工作量
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchProgress {
    step: u8,
    tick: Duration,
}

impl Default for SearchProgress {
    fn default() -> Self {
        Self {
            step: DEFAULT_STEP,
            tick: DEFAULT_TICK,
        }
    }
}

impl SearchProgress {
    /// `step` 為 0 時視為 1
    pub fn new(step: u8, tick: Duration) -> Self {
        Self {
            step: step.max(1),
            tick,
        }
    }

    pub fn step(&self) -> u8 {
        self.step
    }

    pub fn tick(&self) -> Duration {
        self.tick
    }

    /// Number of ticks until the counter reaches 100.
    pub fn ticks(&self) -> u32 {
        u32::from(COMPLETE).div_ceil(u32::from(self.step))
    }

    /// Advances the counter by `step` every `tick`, reporting each value
    /// (capped at 100) to `on_tick`, and returns once 100 is reached.
    pub async fn run<F: FnMut(u8)>(&self, mut on_tick: F) {
        let mut counter: u8 = 0;
        while counter < COMPLETE {
            tokio::time::sleep(self.tick).await;
            counter = counter.saturating_add(self.step).min(COMPLETE);
            on_tick(counter);
        }
        tracing::debug!("Search progress complete after {} ticks", self.ticks());
    }
}
