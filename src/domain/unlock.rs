//! Countdown gates for the watch and download actions.
//!
//! Each detail view drives two independent gates. A user action starts a
//! fixed countdown; when it reaches zero the gate flips to ready and stays
//! ready for the rest of the session for that entry. This is pure client
//! pacing, trivially bypassable, and not a security control; nothing on the
//! server enforces it.

use std::time::{Duration, Instant};

/// Default countdown length.
pub const UNLOCK_SECONDS: u64 = 15;

/// Observable state of a gate at a point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnlockPhase {
    /// No countdown started; the action is locked.
    Idle,
    /// Counting down; the action stays locked.
    Counting { remaining_secs: u64 },
    /// Countdown finished; the action is unlocked for the session.
    Ready,
}

#[derive(Debug, Clone)]
pub struct UnlockGate {
    duration: Duration,
    started: Option<Instant>,
    ready: bool,
}

impl UnlockGate {
    pub fn new() -> Self {
        Self::with_duration(Duration::from_secs(UNLOCK_SECONDS))
    }

    pub fn with_duration(duration: Duration) -> Self {
        Self {
            duration,
            started: None,
            ready: false,
        }
    }

    /// Start the countdown. A second start while counting or after the gate
    /// is ready is ignored.
    pub fn start(&mut self, now: Instant) {
        if self.ready || self.started.is_some() {
            return;
        }
        self.started = Some(now);
    }

    /// Phase as observed at `now`. Crossing the full duration latches the
    /// gate ready; it never locks again until [`UnlockGate::reset`].
    pub fn phase(&mut self, now: Instant) -> UnlockPhase {
        if self.ready {
            return UnlockPhase::Ready;
        }
        let Some(started) = self.started else {
            return UnlockPhase::Idle;
        };

        let elapsed = now.saturating_duration_since(started);
        if elapsed >= self.duration {
            self.ready = true;
            self.started = None;
            return UnlockPhase::Ready;
        }

        // Ceiling, so the last displayed second only reaches zero when the
        // gate actually opens.
        let remaining = self.duration - elapsed;
        let remaining_secs = remaining.as_secs() + u64::from(remaining.subsec_nanos() > 0);
        UnlockPhase::Counting { remaining_secs }
    }

    pub fn is_ready(&mut self, now: Instant) -> bool {
        self.phase(now) == UnlockPhase::Ready
    }

    /// Teardown for the view: cancels a running countdown and re-locks the
    /// gate, as happens when navigating to another entry.
    pub fn reset(&mut self) {
        self.started = None;
        self.ready = false;
    }
}

impl Default for UnlockGate {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locked_until_the_full_countdown_elapses() {
        let start = Instant::now();
        let mut gate = UnlockGate::new();
        gate.start(start);

        assert_eq!(
            gate.phase(start + Duration::from_secs(14)),
            UnlockPhase::Counting { remaining_secs: 1 }
        );
        assert!(!gate.is_ready(start + Duration::from_secs(14)));
        assert!(gate.is_ready(start + Duration::from_secs(15)));
    }

    #[test]
    fn stays_ready_for_the_rest_of_the_session() {
        let start = Instant::now();
        let mut gate = UnlockGate::new();
        gate.start(start);
        assert!(gate.is_ready(start + Duration::from_secs(15)));

        // Later observations, and even a stray start, leave it ready.
        gate.start(start + Duration::from_secs(20));
        assert!(gate.is_ready(start + Duration::from_secs(3600)));
    }

    #[test]
    fn idle_until_started_and_restart_is_ignored_while_counting() {
        let start = Instant::now();
        let mut gate = UnlockGate::new();
        assert_eq!(gate.phase(start), UnlockPhase::Idle);

        gate.start(start);
        // Restarting mid-count must not extend the countdown.
        gate.start(start + Duration::from_secs(10));
        assert!(gate.is_ready(start + Duration::from_secs(15)));
    }

    #[test]
    fn reset_cancels_and_relocks() {
        let start = Instant::now();
        let mut gate = UnlockGate::new();
        gate.start(start);
        gate.reset();
        assert_eq!(gate.phase(start + Duration::from_secs(30)), UnlockPhase::Idle);

        gate.start(start);
        assert!(gate.is_ready(start + Duration::from_secs(15)));
        gate.reset();
        assert_eq!(gate.phase(start + Duration::from_secs(16)), UnlockPhase::Idle);
    }

    #[test]
    fn two_gates_count_independently() {
        let start = Instant::now();
        let mut watch = UnlockGate::new();
        let mut download = UnlockGate::new();

        watch.start(start);
        download.start(start + Duration::from_secs(10));

        assert!(watch.is_ready(start + Duration::from_secs(15)));
        assert_eq!(
            download.phase(start + Duration::from_secs(15)),
            UnlockPhase::Counting { remaining_secs: 10 }
        );
        assert!(download.is_ready(start + Duration::from_secs(25)));
    }
}
