use std::collections::HashMap;
use std::time::Instant;

/// Cross-cutting observer for pipeline events.
///
/// Decouples the driver from a specific output mechanism so tests can run
/// silently while the CLI reports stage timings.
pub trait PipelineLogger: Send {
    /// Frame-level progress.
    fn progress(&mut self, current: usize, total: usize);

    /// How long a named pipeline stage (decode, effect, encode) took.
    fn timing(&mut self, stage: &str, duration_ms: f64);

    /// Human-readable status message.
    fn info(&mut self, message: &str);

    /// End-of-run summary. Default: no-op.
    fn summary(&self) {}
}

/// Discards all events. Used by tests.
pub struct NullPipelineLogger;

impl PipelineLogger for NullPipelineLogger {
    fn progress(&mut self, _current: usize, _total: usize) {}
    fn timing(&mut self, _stage: &str, _duration_ms: f64) {}
    fn info(&mut self, _message: &str) {}
}

/// Aggregates per-stage timings and reports them, plus total wall time,
/// when the run completes.
pub struct StdoutPipelineLogger {
    timings: HashMap<String, StageStats>,
    start_time: Instant,
    frames: usize,
}

#[derive(Clone, Copy, Default)]
struct StageStats {
    count: usize,
    total_ms: f64,
}

impl StdoutPipelineLogger {
    pub fn new() -> Self {
        Self {
            timings: HashMap::new(),
            start_time: Instant::now(),
            frames: 0,
        }
    }

    /// The formatted summary, or `None` when nothing was recorded.
    pub fn summary_string(&self) -> Option<String> {
        if self.timings.is_empty() {
            return None;
        }

        let elapsed_ms = self.start_time.elapsed().as_secs_f64() * 1000.0;
        let mut lines = vec![format!(
            "Pipeline summary ({} frames, {:.1}s total):",
            self.frames,
            elapsed_ms / 1000.0
        )];

        let mut stages: Vec<_> = self.timings.keys().collect();
        stages.sort();
        for stage in stages {
            let stats = &self.timings[stage];
            let avg_ms = if stats.count == 0 {
                0.0
            } else {
                stats.total_ms / stats.count as f64
            };
            let pct = if elapsed_ms > 0.0 {
                stats.total_ms / elapsed_ms * 100.0
            } else {
                0.0
            };
            lines.push(format!(
                "  {stage:8}: avg {avg_ms:6.1}ms  total {:7.0}ms  ({pct:4.1}%)",
                stats.total_ms
            ));
        }

        Some(lines.join("\n"))
    }
}

impl Default for StdoutPipelineLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl PipelineLogger for StdoutPipelineLogger {
    fn progress(&mut self, current: usize, _total: usize) {
        self.frames = current;
    }

    fn timing(&mut self, stage: &str, duration_ms: f64) {
        let stats = self.timings.entry(stage.to_string()).or_default();
        stats.count += 1;
        stats.total_ms += duration_ms;
    }

    fn info(&mut self, message: &str) {
        log::info!("{message}");
    }

    fn summary(&self) {
        if let Some(summary) = self.summary_string() {
            eprintln!("{summary}");
        }
    }
}
