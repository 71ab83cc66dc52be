//=========================================================================
// Transition
//=========================================================================
//
// Timed two-phase color fade used to mask a screen swap.
//
// Timeline (duration D):
//
//   opacity
//     1 ┤        ╱╲
//       │      ╱    ╲
//     0 ┼────╱────────╲────
//       0       D/2      D
//         Outgoing  Incoming
//
// Phase change (midpoint) and completion are announced through two
// signals and through the return value of `advance`, both synchronously
// before `advance` returns.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{debug, trace};
use thiserror::Error;

//=== Internal Dependencies ===============================================

use super::{Color, Renderer, Signal, SubscriptionId};

//=== TransitionError =====================================================

/// Rejected transition configuration.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum TransitionError {
    #[error("transition duration must be positive, got {0}")]
    NonPositiveDuration(f32),

    #[error("transition duration must be finite, got {0}")]
    NonFiniteDuration(f32),
}

//=== TransitionPhase =====================================================

/// Which half of the fade is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionPhase {
    /// Fading towards the color. The accumulated value rises.
    Outgoing,

    /// Fading back out. The accumulated value falls.
    Incoming,
}

//=== TransitionEvent =====================================================

/// Lifecycle notification produced by [`Transition::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionEvent {
    /// The midpoint was reached; the screen is fully covered.
    PhaseChanged,

    /// The fade has cleared; the transition can be discarded.
    Completed,
}

//=== Transition ==========================================================

/// Symmetric fade-to-color-and-back animation.
pub struct Transition {
    color: Color,
    duration: f32,
    half_duration: f32,
    current_value: f32,
    phase: TransitionPhase,
    completed: bool,
    disposed: bool,
    phase_changed: Signal,
    completed_signal: Signal,
}

impl Transition {
    /// Duration used by [`Transition::with_default_duration`], in seconds.
    pub const DEFAULT_DURATION: f32 = 1.0;

    //--- Construction -----------------------------------------------------

    /// Creates a fade to `color` lasting `duration` seconds in total.
    ///
    /// # Errors
    ///
    /// Returns [`TransitionError`] if `duration` is not a positive, finite
    /// number of seconds.
    pub fn new(color: Color, duration: f32) -> Result<Self, TransitionError> {
        if !duration.is_finite() {
            return Err(TransitionError::NonFiniteDuration(duration));
        }
        if duration <= 0.0 {
            return Err(TransitionError::NonPositiveDuration(duration));
        }

        Ok(Self::from_valid_duration(color, duration))
    }

    /// Creates a fade lasting [`Transition::DEFAULT_DURATION`].
    pub fn with_default_duration(color: Color) -> Self {
        Self::from_valid_duration(color, Self::DEFAULT_DURATION)
    }

    fn from_valid_duration(color: Color, duration: f32) -> Self {
        Self {
            color,
            duration,
            half_duration: duration / 2.0,
            current_value: 0.0,
            phase: TransitionPhase::Outgoing,
            completed: false,
            disposed: false,
            phase_changed: Signal::new(),
            completed_signal: Signal::new(),
        }
    }

    //--- Subscriptions ----------------------------------------------------

    /// Runs `handler` when the fade crosses its midpoint.
    pub fn on_phase_changed<F>(&mut self, handler: F) -> SubscriptionId
    where
        F: FnMut() + Send + 'static,
    {
        self.phase_changed.subscribe(handler)
    }

    /// Runs `handler` when the fade has fully cleared.
    pub fn on_completed<F>(&mut self, handler: F) -> SubscriptionId
    where
        F: FnMut() + Send + 'static,
    {
        self.completed_signal.subscribe(handler)
    }

    /// Removes a handler registered with either subscription method.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.phase_changed.unsubscribe(id) || self.completed_signal.unsubscribe(id)
    }

    //--- Update -----------------------------------------------------------

    /// Advances the fade by `elapsed_seconds`.
    ///
    /// Returns the event emitted by this call, if any. Subscribers have
    /// already been notified when this returns. Once completed, further
    /// calls do nothing.
    pub fn advance(&mut self, elapsed_seconds: f32) -> Option<TransitionEvent> {
        debug_assert!(
            elapsed_seconds >= 0.0,
            "elapsed time must be non-negative, got {}",
            elapsed_seconds
        );

        if self.completed {
            trace!(target: "screens::transition", "Advance ignored, transition already completed");
            return None;
        }

        match self.phase {
            TransitionPhase::Outgoing => {
                self.current_value += elapsed_seconds;

                if self.current_value >= self.half_duration {
                    self.phase = TransitionPhase::Incoming;
                    debug!(
                        target: "screens::transition",
                        "Transition reached midpoint ({:.3}s of {:.3}s)",
                        self.current_value,
                        self.duration
                    );
                    self.phase_changed.emit();
                    return Some(TransitionEvent::PhaseChanged);
                }
            }
            TransitionPhase::Incoming => {
                self.current_value -= elapsed_seconds;

                if self.current_value <= 0.0 {
                    self.completed = true;
                    debug!(target: "screens::transition", "Transition completed");
                    self.completed_signal.emit();
                    return Some(TransitionEvent::Completed);
                }
            }
        }

        trace!(
            target: "screens::transition",
            "{:?} value={:.3} opacity={:.3}",
            self.phase,
            self.current_value,
            self.opacity()
        );
        None
    }

    //--- Rendering --------------------------------------------------------

    /// Overlay opacity in [0, 1].
    pub fn opacity(&self) -> f32 {
        (self.current_value / self.half_duration).clamp(0.0, 1.0)
    }

    /// Fills the whole viewport with the fade color at the current opacity.
    pub fn render(&self, renderer: &mut dyn Renderer) {
        debug_assert!(!self.disposed, "rendering a disposed transition");

        let viewport = renderer.viewport();
        renderer.begin_frame();
        renderer.fill_rect(viewport, self.color.scaled(self.opacity()));
        renderer.end_frame();
    }

    //--- Disposal ---------------------------------------------------------

    /// Drops all subscribers. Safe to call more than once.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }

        self.phase_changed.clear();
        self.completed_signal.clear();
        self.disposed = true;
        debug!(target: "screens::transition", "Transition disposed");
    }

    //--- Queries ----------------------------------------------------------

    pub fn phase(&self) -> TransitionPhase {
        self.phase
    }

    /// Accumulated time value driving the opacity, in seconds.
    pub fn current_value(&self) -> f32 {
        self.current_value
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }

    pub fn half_duration(&self) -> f32 {
        self.half_duration
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }
}

impl std::fmt::Debug for Transition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Transition")
            .field("color", &self.color)
            .field("duration", &self.duration)
            .field("current_value", &self.current_value)
            .field("phase", &self.phase)
            .field("completed", &self.completed)
            .field("disposed", &self.disposed)
            .finish()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
