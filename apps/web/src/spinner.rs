const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
const SPINNER_FRAMES_PER_SECOND: f64 = 12.0;
const SPINNER_MAX_FRAME_DELTA: f64 = 0.25;

/// Loading indicator driven by the browser clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct Spinner {
    phase: f64,
    last_tick: Option<f64>,
}

impl Spinner {
    pub fn tick(&mut self, now_seconds: f64) -> &'static str {
        let (phase, last_tick) = advance_spinner(self.phase, self.last_tick, now_seconds);
        self.phase = phase;
        self.last_tick = last_tick;
        spinner_frame(self.phase)
    }
}

/// Moves the phase forward by elapsed time; long gaps (background tabs) are clamped.
pub fn advance_spinner(phase: f64, last_tick: Option<f64>, now_seconds: f64) -> (f64, Option<f64>) {
    let delta = last_tick
        .map(|last| (now_seconds - last).clamp(0.0, SPINNER_MAX_FRAME_DELTA))
        .unwrap_or(0.0);

    let cycle = SPINNER_FRAMES.len() as f64;
    let next = delta
        .mul_add(SPINNER_FRAMES_PER_SECOND, phase)
        .rem_euclid(cycle);

    (next, Some(now_seconds))
}

pub fn spinner_frame(phase: f64) -> &'static str {
    let index = phase.rem_euclid(SPINNER_FRAMES.len() as f64) as usize;
    SPINNER_FRAMES[index.min(SPINNER_FRAMES.len() - 1)]
}
