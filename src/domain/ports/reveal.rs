/// Display hook for the roulette's cosmetic draws
///
/// The names passed here never influence the outcome.
pub trait RevealSink: Send {
    /// Called once per cosmetic draw, `step` counting from 0.
    fn transient(&mut self, step: usize, total: usize, name: &str);
}

/// Sink that discards every draw (JSON output, tests)
#[derive(Debug, Default, Clone, Copy)]
pub struct NullReveal;

impl RevealSink for NullReveal {
    fn transient(&mut self, _step: usize, _total: usize, _name: &str) {}
}

/// Sink that records every draw in order
#[derive(Debug, Default, Clone)]
pub struct RecordingReveal {
    pub shown: Vec<String>,
}

impl RevealSink for RecordingReveal {
    fn transient(&mut self, _step: usize, _total: usize, name: &str) {
        self.shown.push(name.to_string());
    }
}
