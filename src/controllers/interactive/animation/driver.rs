use std::time::{Duration, Instant};

/// Lower bound on elapsed time when computing FPS.
const MIN_ELAPSED_SECS: f64 = 1e-6;

/// Live state of a running animation. Discarded on stop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationState {
    /// Level the next tick renders.
    pub level: u32,
    pub start_time: Instant,
    pub frame_count: u64,
    next_tick: Instant,
    interval: Duration,
}

/// What one tick asks the caller to do.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TickOutcome {
    /// Render `level`. `finished` marks the last frame of a non-looping run.
    Frame { level: u32, fps: f64, finished: bool },
    /// Depth dropped below the pending level with looping off. Nothing to render.
    Stopped,
}

/// Steps the construction level from 0 up to the current depth on a fixed
/// interval, optionally wrapping back to 0.
#[derive(Debug, Clone, Default)]
pub struct AnimationDriver {
    state: Option<AnimationState>,
}

impl AnimationDriver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from level 0. Restarting a running animation resets it.
    pub fn start(&mut self, now: Instant, interval: Duration) {
        self.state = Some(AnimationState {
            level: 0,
            start_time: now,
            frame_count: 0,
            next_tick: now + interval,
            interval,
        });
    }

    pub fn stop(&mut self) {
        self.state = None;
    }

    /// Re-arms the tick timer without touching level, frame count or start time.
    pub fn set_interval(&mut self, now: Instant, interval: Duration) {
        if let Some(state) = self.state.as_mut() {
            state.interval = interval;
            state.next_tick = now + interval;
        }
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.state.is_some()
    }

    #[must_use]
    pub fn state(&self) -> Option<&AnimationState> {
        self.state.as_ref()
    }

    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.state.map(|state| state.next_tick)
    }

    /// Advances one frame if the tick is due.
    ///
    /// `max_depth` and `loop_animation` are read at every tick, so changes made
    /// mid-run apply from the next tick on and no frame ever renders a level
    /// above `max_depth`. Late ticks do not catch up: the following tick is
    /// scheduled one interval after `now`.
    pub fn tick(&mut self, now: Instant, max_depth: u32, loop_animation: bool) -> Option<TickOutcome> {
        let state = self.state.as_mut()?;
        if now < state.next_tick {
            return None;
        }

        if state.level > max_depth {
            if !loop_animation {
                self.state = None;
                return Some(TickOutcome::Stopped);
            }
            state.level = 0;
        }

        let level = state.level;
        state.level += 1;
        state.frame_count += 1;

        let elapsed = now
            .saturating_duration_since(state.start_time)
            .as_secs_f64()
            .max(MIN_ELAPSED_SECS);
        let fps = state.frame_count as f64 / elapsed;

        let finished = state.level > max_depth && !loop_animation;
        if state.level > max_depth && loop_animation {
            state.level = 0;
        }
        state.next_tick = now + state.interval;

        if finished {
            self.state = None;
        }

        Some(TickOutcome::Frame { level, fps, finished })
    }
}
