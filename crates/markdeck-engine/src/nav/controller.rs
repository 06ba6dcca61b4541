//! Navigation and transition state machine.
//!
//! The controller owns the committed position (`current_index`), the shown
//! position (`display_index`, which lags during a transition), and the
//! transition phase. It is driven entirely through [`Controller::dispatch`]
//! and [`Controller::tick`]; no UI binding, no timers of its own. The host
//! event loop supplies the clock.

use std::time::{Duration, Instant};

/// Transition phase governing which slide index is shown.
///
/// `Exiting` always hands off to `Entering`, which always settles to `Idle`;
/// there is no cancellation of an in-flight transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Exiting,
    Entering,
}

/// Abstract navigation intent as delivered by a keyboard or pointer source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Advance,
    Retreat,
    Jump(usize),
}

/// Durations for the two timed legs of a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionTiming {
    /// Time spent in `Exiting` before the display index commits.
    pub exit: Duration,
    /// Time spent in `Entering` before the controller settles.
    pub settle: Duration,
}

impl TransitionTiming {
    /// Zero-duration timing: the minimal instant-commit controller variant.
    /// Both legs elapse on the first tick after the request.
    pub fn instant() -> Self {
        Self {
            exit: Duration::ZERO,
            settle: Duration::ZERO,
        }
    }
}

impl Default for TransitionTiming {
    fn default() -> Self {
        Self {
            exit: Duration::from_millis(320),
            settle: Duration::from_millis(260),
        }
    }
}

/// Timer-driven navigation state machine over a fixed slide count.
#[derive(Debug, Clone)]
pub struct Controller {
    total: usize,
    current_index: usize,
    display_index: usize,
    phase: Phase,
    deadline: Option<Instant>,
    timing: TransitionTiming,
}

impl Controller {
    pub fn new(total: usize, timing: TransitionTiming) -> Self {
        Self {
            total,
            current_index: 0,
            display_index: 0,
            phase: Phase::Idle,
            deadline: None,
            timing,
        }
    }

    /// The committed position. During a transition this already points at
    /// the target while `display_index` still shows the outgoing slide.
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// The position the renderer should show right now.
    pub fn display_index(&self) -> usize {
        self.display_index
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// Fraction of the deck shown so far, in `[0, 1]`. Zero for an empty deck.
    pub fn progress(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            (self.display_index + 1) as f64 / self.total as f64
        }
    }

    /// When the next timed phase change is due, if a transition is in flight.
    /// Hosts can use this to size their poll timeout.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Feed one abstract navigation intent into the state machine.
    pub fn dispatch(&mut self, intent: Intent, now: Instant) {
        match intent {
            Intent::Advance => self.next(now),
            Intent::Retreat => self.prev(now),
            Intent::Jump(index) => self.request_index(index, now),
        }
    }

    /// Advance by one slide; a no-op at the last index.
    pub fn next(&mut self, now: Instant) {
        if self.display_index + 1 < self.total {
            self.request_index(self.display_index + 1, now);
        }
    }

    /// Retreat by one slide; a no-op at index 0.
    pub fn prev(&mut self, now: Instant) {
        if self.display_index > 0 {
            self.request_index(self.display_index - 1, now);
        }
    }

    /// Request a transition to `index`.
    ///
    /// Out-of-range indices clamp silently. Requests for the shown index are
    /// no-ops, and any request while a transition is in flight is dropped
    /// outright; the in-flight transition always wins.
    pub fn request_index(&mut self, index: usize, now: Instant) {
        if self.total == 0 {
            return;
        }
        let index = index.min(self.total - 1);
        if index == self.display_index {
            return;
        }
        if self.phase != Phase::Idle {
            log::debug!(
                "transition to {index} dropped while {:?} toward {}",
                self.phase,
                self.current_index
            );
            return;
        }
        self.current_index = index;
        self.phase = Phase::Exiting;
        self.deadline = Some(now + self.timing.exit);
    }

    /// Advance the state machine to `now`, draining every expired deadline
    /// so zero-duration timing settles in a single call.
    pub fn tick(&mut self, now: Instant) {
        while let Some(deadline) = self.deadline {
            if now < deadline {
                break;
            }
            match self.phase {
                Phase::Exiting => {
                    self.display_index = self.current_index;
                    self.phase = Phase::Entering;
                    // Anchor the settle leg to the deadline, not to `now`,
                    // so a late tick does not stretch the transition.
                    self.deadline = Some(deadline + self.timing.settle);
                }
                Phase::Entering => {
                    self.phase = Phase::Idle;
                    self.deadline = None;
                }
                Phase::Idle => {
                    self.deadline = None;
                }
            }
        }
    }

    /// Rebind the controller to a freshly compiled deck.
    ///
    /// Any pending transition is force-flushed to `Idle` and both indices
    /// are clamped into the new range; a half-finished animation has nothing
    /// meaningful to settle into after the slides changed underneath it.
    pub fn reload(&mut self, total: usize) {
        self.total = total;
        self.phase = Phase::Idle;
        self.deadline = None;
        let last = total.saturating_sub(1);
        self.current_index = self.current_index.min(last);
        self.display_index = self.display_index.min(last);
    }
}
