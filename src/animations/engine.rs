//! Per-gauge animation engine.
//!
//! Holds at most one active animation: a single [`Transition`] or a
//! rise-then-return [`TransitionSequence`]. Starting a new animation aborts the
//! running one without a completion report. The host advances everything
//! through [`AnimationEngine::tick`], which writes interpolated values into the
//! [`GaugeState`] and reports what happened instead of invoking callbacks.
//!
//! # Tick Order
//!
//! 1. Advance the active animation and write its value (measured extrema follow)
//! 2. On rise completion: record the peak and start the hold countdown
//! 3. Advance the peak hold countdown (skipped on the tick that recorded a peak)

use core::time::Duration;

use super::easing::Easing;
use super::transition::{SequencePhase, Transition, TransitionSequence, TransitionState};
use crate::config::AnimationConfig;
use crate::state::GaugeState;

/// Events produced by one [`AnimationEngine::tick`].
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct TickReport {
    /// The gauge value moved.
    pub value_changed: bool,
    /// The active animation finished (not raised by `abort`).
    pub completed: bool,
    /// A rise-then-return sequence reached its peak.
    pub peak_recorded: bool,
    /// The peak marker hold expired.
    pub peak_hidden: bool,
}

#[derive(Clone, Copy, PartialEq, Debug)]
enum Active {
    None,
    Single(Transition),
    Sequence(TransitionSequence),
}

/// Drives value animations for one gauge.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct AnimationEngine {
    active: Active,
    config: AnimationConfig,
}

impl AnimationEngine {
    pub const fn new(config: AnimationConfig) -> Self {
        Self {
            active: Active::None,
            config,
        }
    }

    #[inline]
    pub const fn config(&self) -> &AnimationConfig { &self.config }

    /// Replace the timing configuration. Running animations keep their timings.
    pub const fn set_config(
        &mut self,
        config: AnimationConfig,
    ) {
        self.config = config;
    }

    // =========================================================================
    // Control
    // =========================================================================

    /// Animate from the current value to `target`.
    ///
    /// Any running animation is aborted first. The target is clamped the way
    /// [`GaugeState::set_value`] would clamp it; the clamped target is returned.
    /// `None` picks the configured standard duration and easing. An explicit
    /// duration is used as given; a zero duration jumps on the next tick.
    pub fn play(
        &mut self,
        state: &GaugeState,
        target: f64,
        duration: Option<Duration>,
        easing: Option<Easing>,
    ) -> f64 {
        self.abort();
        let target = state.normalize(target);
        let duration = duration.unwrap_or(self.config.std_time_to_value);
        let easing = easing.unwrap_or(self.config.standard_easing);

        let mut transition = Transition::new(state.value(), target, duration, easing);
        transition.play();
        self.active = Active::Single(transition);
        target
    }

    /// Rise to `target`, record it as peak, then fall back to zero.
    ///
    /// Returns the clamped target.
    pub fn play_return_to_zero(
        &mut self,
        state: &GaugeState,
        target: f64,
    ) -> f64 {
        self.abort();
        let target = state.normalize(target);
        let rest = state.normalize(0.0);

        let rise = Transition::new(
            state.value(),
            target,
            self.config.rtz_time_to_value,
            self.config.return_to_zero_easing,
        );
        let mut sequence = TransitionSequence::new(
            rise,
            rest,
            self.config.rtz_time_back_to_zero,
            self.config.return_to_zero_easing,
            self.config.return_delay,
        );
        sequence.play();
        self.active = Active::Sequence(sequence);
        target
    }

    /// Play the active single transition back toward its start value.
    ///
    /// Returns `false` when there is nothing to reverse (idle, or a sequence).
    pub fn play_reverse(&mut self) -> bool {
        match &mut self.active {
            Active::Single(transition) => {
                transition.reverse();
                transition.state() == TransitionState::PlayingReverse
            }
            Active::None | Active::Sequence(_) => false,
        }
    }

    /// Stop immediately. The gauge keeps the last interpolated value and no
    /// completion is reported.
    pub const fn abort(&mut self) { self.active = Active::None; }

    // =========================================================================
    // Tick
    // =========================================================================

    /// Advance by `delta` and write the result into `state`.
    pub fn tick(
        &mut self,
        state: &mut GaugeState,
        delta: Duration,
    ) -> TickReport {
        let mut report = TickReport::default();
        let before = state.value();

        match &mut self.active {
            Active::None => {}
            Active::Single(transition) => {
                transition.advance(delta);
                state.set_value(transition.value());
                if transition.state() == TransitionState::Done {
                    report.completed = true;
                    self.active = Active::None;
                }
            }
            Active::Sequence(sequence) => {
                let step = sequence.advance(delta);
                if let Some(peak) = step.peak {
                    state.set_value(peak);
                    state.record_peak();
                    report.peak_recorded = true;
                }
                if let Some(value) = step.value {
                    state.set_value(value);
                }
                if step.completed {
                    report.completed = true;
                    self.active = Active::None;
                }
            }
        }

        report.value_changed = state.value() != before;
        if !report.peak_recorded {
            report.peak_hidden = state.peak_mut().tick(delta);
        }
        report
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Playback state of the active animation; `Idle` when nothing runs.
    ///
    /// A rise-then-return sequence reports `Done` while it waits at the peak
    /// between its two transitions.
    pub const fn state(&self) -> TransitionState {
        match &self.active {
            Active::None => TransitionState::Idle,
            Active::Single(transition) => transition.state(),
            Active::Sequence(sequence) => match sequence.phase() {
                SequencePhase::Rising | SequencePhase::Returning => TransitionState::PlayingForward,
                SequencePhase::Holding | SequencePhase::Done => TransitionState::Done,
            },
        }
    }

    /// Phase of the running rise-then-return sequence, if any.
    pub const fn sequence_phase(&self) -> Option<SequencePhase> {
        match &self.active {
            Active::Sequence(sequence) => Some(sequence.phase()),
            Active::None | Active::Single(_) => None,
        }
    }

    #[inline]
    pub const fn is_animating(&self) -> bool { !matches!(self.active, Active::None) }

    /// Whether a rise-then-return sequence is running.
    #[inline]
    pub const fn is_returning_to_zero(&self) -> bool { matches!(self.active, Active::Sequence(_)) }

    /// Target of the active animation, if any. For a sequence this is the
    /// rise target.
    pub const fn target(&self) -> Option<f64> {
        match &self.active {
            Active::None => None,
            Active::Single(transition) => Some(transition.target_value()),
            Active::Sequence(sequence) => Some(sequence.rise().target_value()),
        }
    }
}

impl Default for AnimationEngine {
    fn default() -> Self { Self::new(AnimationConfig::new()) }
}
