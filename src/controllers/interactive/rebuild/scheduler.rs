use std::time::{Duration, Instant};

/// Quiet period a burst of param changes must settle for before rebuilding.
pub const DEBOUNCE_DELAY: Duration = Duration::from_millis(60);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RebuildAction {
    /// A rebuild is pending and will fire at `deadline` unless re-armed.
    Armed { deadline: Instant },
    /// The animation owns the canvas; nothing was scheduled.
    Suppressed,
}

/// Debounces rebuild requests into a single deferred rebuild.
///
/// Two states: idle (`pending == None`) and pending with a deadline. Each
/// request while idle or pending pushes the deadline out to `now + delay`.
#[derive(Debug, Clone)]
pub struct RebuildScheduler {
    delay: Duration,
    pending: Option<Instant>,
}

impl RebuildScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::with_delay(DEBOUNCE_DELAY)
    }

    #[must_use]
    pub fn with_delay(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    pub fn request(&mut self, now: Instant, animation_active: bool) -> RebuildAction {
        if animation_active {
            return RebuildAction::Suppressed;
        }

        let deadline = now + self.delay;
        self.pending = Some(deadline);

        RebuildAction::Armed { deadline }
    }

    /// Returns `true` exactly once when the pending deadline has passed.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.pending {
            Some(deadline) if deadline <= now => {
                self.pending = None;
                true
            }
            _ => false,
        }
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending
    }

    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for RebuildScheduler {
    fn default() -> Self {
        Self::new()
    }
}
