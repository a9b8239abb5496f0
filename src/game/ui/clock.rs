use std::thread;
use std::time::{Duration, Instant};

/// Caps a loop to a fixed frame rate by sleeping off the unused part of each
/// frame budget.
pub struct FrameClock {
    frame_budget: Duration,
    last_tick: Option<Instant>,
}

impl FrameClock {
    pub fn new(target_fps: u32) -> Self {
        Self {
            frame_budget: Duration::from_secs(1) / target_fps.max(1),
            last_tick: None,
        }
    }

    /// Wait until at least one frame budget has passed since the previous
    /// tick, then return the real time elapsed. The first tick never waits.
    pub fn tick(&mut self) -> Duration {
        let elapsed = match self.last_tick {
            Some(last) => {
                let spent = last.elapsed();
                if spent < self.frame_budget {
                    thread::sleep(self.frame_budget - spent);
                }
                last.elapsed()
            }
            None => Duration::ZERO,
        };
        self.last_tick = Some(Instant::now());
        elapsed
    }
}
