/// Where the splash screen is in its lifetime.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Loading,
    FadingOut,
    Finished,
}

/// Outcome of a single timer tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Tick {
    Advanced(f64),
    Reached100,
    Idle,
}

/// Linear progress ramp from 0 to 100 over a fixed number of timer ticks.
#[derive(Clone, Debug, PartialEq)]
pub struct LoadingProgress {
    loading_time: u32,
    total_ticks: u32,
    elapsed_ticks: u32,
    phase: Phase,
}

impl LoadingProgress {
    pub fn new(loading_time: u32, tick_ms: u32) -> Self {
        let tick_ms = tick_ms.max(1);
        let total_ticks = loading_time.div_ceil(tick_ms).max(1);
        Self {
            loading_time,
            total_ticks,
            elapsed_ticks: 0,
            phase: Phase::Loading,
        }
    }

    pub fn tick(&mut self) -> Tick {
        if self.phase != Phase::Loading {
            return Tick::Idle;
        }

        self.elapsed_ticks += 1;
        if self.elapsed_ticks >= self.total_ticks {
            self.elapsed_ticks = self.total_ticks;
            self.phase = Phase::FadingOut;
            Tick::Reached100
        } else {
            Tick::Advanced(self.percent())
        }
    }

    /// Ends the fade-out. Returns true only on the call that actually finished the splash.
    pub fn finish(&mut self) -> bool {
        if self.phase != Phase::FadingOut {
            return false;
        }
        self.phase = Phase::Finished;
        true
    }

    pub fn percent(&self) -> f64 {
        f64::from(self.elapsed_ticks) * 100.0 / f64::from(self.total_ticks)
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn loading_time(&self) -> u32 {
        self.loading_time
    }
}

/// Text shown under the progress bar.
pub fn progress_label(percent: f64) -> String {
    format!("Loading {}%", percent.clamp(0.0, 100.0).round() as u32)
}
