use crate::{Pacing, Params};

/// Turns display-refresh timestamps into a number of simulation steps
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameClock {
    last_ms: Option<f64>,
    accumulator_ms: f64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of steps to run for a refresh at `now_ms`
    ///
    /// `FixedRate` banks elapsed time (capped at `MAX_FRAME_MS` per frame)
    /// and pays it out in whole `FIXED_STEP_MS` steps. The first frame
    /// always runs one step.
    pub fn advance(&mut self, now_ms: f64, pacing: Pacing) -> u32 {
        if pacing == Pacing::PerFrame {
            self.last_ms = Some(now_ms);
            return 1;
        }

        let Some(last_ms) = self.last_ms else {
            if now_ms.is_finite() {
                self.last_ms = Some(now_ms);
            }
            return 1;
        };

        let elapsed = now_ms - last_ms;
        if !elapsed.is_finite() {
            return 0;
        }
        self.last_ms = Some(now_ms.max(last_ms));
        self.accumulator_ms += elapsed.clamp(0.0, Params::MAX_FRAME_MS);

        let mut steps = 0;
        while self.accumulator_ms >= Params::FIXED_STEP_MS {
            self.accumulator_ms -= Params::FIXED_STEP_MS;
            steps += 1;
        }
        steps
    }
}
