//! Frame-sampled volume fades with generation-based supersession.
//!
//! Every audio element owns one [`FadeGeneration`]. Starting a fade bumps the
//! generation; a fade loop that observes a newer generation stops writing and
//! never runs its completion step.

use std::cell::Cell;
use std::rc::Rc;

/// Fade-in applied when a track starts.
pub const FADE_IN_MS: f64 = 800.0;
/// Fade-out applied when playback stops.
pub const FADE_OUT_MS: f64 = 600.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FadeSpec {
    pub from: f64,
    pub to: f64,
    pub duration_ms: f64,
}

impl FadeSpec {
    pub fn new(from: f64, to: f64, duration_ms: f64) -> Self {
        Self {
            from: from.clamp(0.0, 1.0),
            to: to.clamp(0.0, 1.0),
            duration_ms,
        }
    }

    pub fn fade_in() -> Self {
        Self::new(0.0, 1.0, FADE_IN_MS)
    }

    pub fn fade_out(from: f64) -> Self {
        Self::new(from, 0.0, FADE_OUT_MS)
    }

    /// Progress in `[0, 1]` after `elapsed_ms`.
    pub fn progress(&self, elapsed_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        (elapsed_ms / self.duration_ms).clamp(0.0, 1.0)
    }

    pub fn volume_at(&self, elapsed_ms: f64) -> f64 {
        let t = self.progress(elapsed_ms);
        (self.from + (self.to - self.from) * t).clamp(0.0, 1.0)
    }
}

/// Shared fade counter for one audio element.
#[derive(Debug, Clone, Default)]
pub struct FadeGeneration(Rc<Cell<u64>>);

impl FadeGeneration {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> u64 {
        self.0.get()
    }

    /// Invalidate every running fade and return the new generation.
    pub fn supersede(&self) -> u64 {
        let next = self.0.get().wrapping_add(1);
        self.0.set(next);
        next
    }

    /// Begin a fade that owns the element until the next supersession.
    pub fn begin(&self, spec: FadeSpec, started_at_ms: f64) -> FadeRun {
        FadeRun {
            spec,
            generation: self.supersede(),
            counter: self.clone(),
            started_at_ms,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FadeStep {
    /// Write this volume and wait for the next frame.
    Continue(f64),
    /// Write this final volume; the fade is complete.
    Finished(f64),
    /// A newer fade owns the element. Write nothing.
    Superseded,
}

#[derive(Debug, Clone)]
pub struct FadeRun {
    spec: FadeSpec,
    generation: u64,
    counter: FadeGeneration,
    started_at_ms: f64,
}

impl FadeRun {
    /// Levels and duration; the driver writes `from` before the first frame.
    pub fn spec(&self) -> FadeSpec {
        self.spec
    }

    pub fn is_current(&self) -> bool {
        self.counter.current() == self.generation
    }

    /// Sample the fade at frame timestamp `now_ms`.
    pub fn step(&self, now_ms: f64) -> FadeStep {
        if !self.is_current() {
            return FadeStep::Superseded;
        }
        let elapsed = now_ms - self.started_at_ms;
        let volume = self.spec.volume_at(elapsed);
        if self.spec.progress(elapsed) >= 1.0 {
            FadeStep::Finished(volume)
        } else {
            FadeStep::Continue(volume)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fade_in_stays_in_range_and_finishes_on_time() {
        let fades = FadeGeneration::new();
        let run = fades.begin(FadeSpec::fade_in(), 1000.0);

        let mut now = 990.0;
        let mut finished_at = None;
        while now < 2000.0 {
            match run.step(now) {
                FadeStep::Continue(v) => {
                    assert!((0.0..=1.0).contains(&v));
                    assert!(v < 1.0);
                }
                FadeStep::Finished(v) => {
                    assert_eq!(v, 1.0);
                    finished_at = Some(now);
                    break;
                }
                FadeStep::Superseded => panic!("fade was never superseded"),
            }
            now += 16.7;
        }

        let finished_at = finished_at.unwrap();
        assert!(finished_at - 1000.0 >= 800.0);
    }

    #[test]
    fn test_frame_before_start_clamps_to_from() {
        let spec = FadeSpec::new(0.4, 0.0, 600.0);
        assert_eq!(spec.volume_at(-12.0), 0.4);
        assert_eq!(spec.volume_at(300.0), 0.2);
        assert_eq!(spec.volume_at(5000.0), 0.0);
    }

    #[test]
    fn test_out_of_range_levels_are_clamped() {
        let spec = FadeSpec::new(1.5, -0.5, 100.0);
        assert_eq!(spec.from, 1.0);
        assert_eq!(spec.to, 0.0);
    }

    #[test]
    fn test_zero_duration_finishes_immediately() {
        let fades = FadeGeneration::new();
        let run = fades.begin(FadeSpec::new(0.0, 1.0, 0.0), 50.0);
        assert_eq!(run.step(50.0), FadeStep::Finished(1.0));
    }

    #[test]
    fn test_run_starts_from_its_spec_level() {
        let fades = FadeGeneration::new();
        let spec = FadeSpec::fade_out(0.7);
        let run = fades.begin(spec, 20.0);
        assert_eq!(run.spec(), spec);
        assert_eq!(run.step(20.0), FadeStep::Continue(run.spec().from));
    }

    #[test]
    fn test_newer_fade_supersedes_older_one() {
        let fades = FadeGeneration::new();
        let stop = fades.begin(FadeSpec::fade_out(1.0), 0.0);
        assert!(matches!(stop.step(100.0), FadeStep::Continue(_)));

        let start = fades.begin(FadeSpec::fade_in(), 150.0);
        assert_eq!(stop.step(200.0), FadeStep::Superseded);
        // Even past its own deadline the stale fade must not report completion.
        assert_eq!(stop.step(10_000.0), FadeStep::Superseded);
        assert!(matches!(start.step(200.0), FadeStep::Continue(_)));
    }

    #[test]
    fn test_supersede_without_new_fade() {
        let fades = FadeGeneration::new();
        let run = fades.begin(FadeSpec::fade_in(), 0.0);
        fades.supersede();
        assert!(!run.is_current());
        assert_eq!(run.step(900.0), FadeStep::Superseded);
    }
}
