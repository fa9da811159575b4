//! Tweens between two values.
//!
//! A [`Transition`] interpolates from a start to a target value over a fixed
//! duration. A [`TransitionSequence`] chains a rise to a target with a fall
//! back to zero, optionally separated by a pause.
//!
//! Time only moves through `advance(delta)`; nothing here reads a clock.
//! `advance` returns the part of `delta` the tween did not need, so a frame
//! that spans the end of one phase carries its leftover into the next.

use core::time::Duration;

use super::easing::Easing;

/// Playback state of a transition.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum TransitionState {
    /// Built but not started.
    #[default]
    Idle,
    /// Moving from start toward target.
    PlayingForward,
    /// Moving from the current position back toward start.
    PlayingReverse,
    /// Reached its end (target when forward, start when reversed).
    Done,
}

// =============================================================================
// Single Transition
// =============================================================================

/// One tween from `start` to `target`.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Transition {
    start: f64,
    target: f64,
    duration: Duration,
    easing: Easing,
    elapsed: Duration,
    state: TransitionState,
    /// Set by `reverse`, cleared by `play`.
    reversed: bool,
}

impl Transition {
    pub const fn new(
        start: f64,
        target: f64,
        duration: Duration,
        easing: Easing,
    ) -> Self {
        Self {
            start,
            target,
            duration,
            easing,
            elapsed: Duration::ZERO,
            state: TransitionState::Idle,
            reversed: false,
        }
    }

    /// Start playing forward from the beginning.
    pub const fn play(&mut self) {
        self.elapsed = Duration::ZERO;
        self.state = TransitionState::PlayingForward;
        self.reversed = false;
    }

    /// Turn around and play back toward `start` from the current position.
    ///
    /// Has no effect on an idle transition.
    pub const fn reverse(&mut self) {
        match self.state {
            TransitionState::PlayingForward | TransitionState::Done => {
                self.state = TransitionState::PlayingReverse;
                self.reversed = true;
            }
            TransitionState::Idle | TransitionState::PlayingReverse => {}
        }
    }

    /// Advance by `delta`. Returns the unused part of `delta`, which is
    /// non-zero only when the transition finishes inside this step.
    pub fn advance(
        &mut self,
        delta: Duration,
    ) -> Duration {
        match self.state {
            TransitionState::PlayingForward => {
                let left = self.duration.saturating_sub(self.elapsed);
                if delta >= left {
                    self.elapsed = self.duration;
                    self.state = TransitionState::Done;
                    delta - left
                } else {
                    self.elapsed += delta;
                    Duration::ZERO
                }
            }
            TransitionState::PlayingReverse => {
                if delta >= self.elapsed {
                    let spare = delta - self.elapsed;
                    self.elapsed = Duration::ZERO;
                    self.state = TransitionState::Done;
                    spare
                } else {
                    self.elapsed -= delta;
                    Duration::ZERO
                }
            }
            TransitionState::Idle | TransitionState::Done => delta,
        }
    }

    /// Linear progress in `[0, 1]`. A zero-length transition is complete at once.
    pub fn progress(&self) -> f64 {
        if self.duration.is_zero() {
            return if self.reversed || self.state == TransitionState::Idle { 0.0 } else { 1.0 };
        }
        (self.elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
    }

    /// Interpolated value at the current position.
    pub fn value(&self) -> f64 {
        self.start + self.easing.apply(self.progress()) * (self.target - self.start)
    }

    /// Whether the transition is playing in either direction.
    #[inline]
    pub const fn is_playing(&self) -> bool {
        matches!(self.state, TransitionState::PlayingForward | TransitionState::PlayingReverse)
    }

    #[inline]
    pub const fn state(&self) -> TransitionState { self.state }

    #[inline]
    pub const fn start_value(&self) -> f64 { self.start }

    #[inline]
    pub const fn target_value(&self) -> f64 { self.target }

    #[inline]
    pub const fn duration(&self) -> Duration { self.duration }

    #[inline]
    pub const fn easing(&self) -> Easing { self.easing }
}

// =============================================================================
// Rise / Return Sequence
// =============================================================================

/// Phase of a rise-then-return sequence.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SequencePhase {
    Rising,
    /// Waiting out the return delay at the peak.
    Holding,
    Returning,
    Done,
}

/// What happened during one [`TransitionSequence::advance`] step.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct SequenceStep {
    /// Value reached when the rise completed in this step.
    pub peak: Option<f64>,
    /// Value at the end of the step, if the sequence moved.
    pub value: Option<f64>,
    /// The return phase finished in this step.
    pub completed: bool,
}

/// Rise to a target, then fall back to a rest value.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct TransitionSequence {
    rise: Transition,
    fall: Transition,
    return_delay: Duration,
    waited: Duration,
    phase: SequencePhase,
}

impl TransitionSequence {
    /// Build a sequence. The fall starts wherever the rise ends and moves to
    /// `rest` over `fall_duration`.
    pub const fn new(
        rise: Transition,
        rest: f64,
        fall_duration: Duration,
        fall_easing: Easing,
        return_delay: Duration,
    ) -> Self {
        Self {
            rise,
            fall: Transition::new(rise.target, rest, fall_duration, fall_easing),
            return_delay,
            waited: Duration::ZERO,
            phase: SequencePhase::Rising,
        }
    }

    /// Start the rise.
    pub const fn play(&mut self) {
        self.rise.play();
        self.waited = Duration::ZERO;
        self.phase = SequencePhase::Rising;
    }

    /// Advance by `delta`, carrying leftover time across phase boundaries.
    pub fn advance(
        &mut self,
        delta: Duration,
    ) -> SequenceStep {
        let mut step = SequenceStep::default();
        let mut remaining = delta;

        if self.phase == SequencePhase::Rising {
            remaining = self.rise.advance(remaining);
            let value = self.rise.value();
            step.value = Some(value);
            if self.rise.state() == TransitionState::Done {
                step.peak = Some(value);
                self.fall = Transition::new(value, self.fall.target, self.fall.duration, self.fall.easing);
                self.phase = SequencePhase::Holding;
            }
        }

        if self.phase == SequencePhase::Holding {
            let wait = self.return_delay.saturating_sub(self.waited);
            if remaining >= wait {
                remaining -= wait;
                self.waited = self.return_delay;
                self.fall.play();
                self.phase = SequencePhase::Returning;
            } else {
                self.waited += remaining;
                remaining = Duration::ZERO;
            }
        }

        if self.phase == SequencePhase::Returning {
            self.fall.advance(remaining);
            step.value = Some(self.fall.value());
            if self.fall.state() == TransitionState::Done {
                self.phase = SequencePhase::Done;
                step.completed = true;
            }
        }

        step
    }

    #[inline]
    pub const fn phase(&self) -> SequencePhase { self.phase }

    /// Whether the sequence still has work to do.
    #[inline]
    pub const fn is_running(&self) -> bool { !matches!(self.phase, SequencePhase::Done) }

    #[inline]
    pub const fn rise(&self) -> &Transition { &self.rise }

    #[inline]
    pub const fn fall(&self) -> &Transition { &self.fall }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn ms(n: u64) -> Duration { Duration::from_millis(n) }

    #[test]
    fn test_linear_tween_midpoint() {
        let mut t = Transition::new(0.0, 100.0, ms(1000), Easing::Linear);
        t.play();
        assert_eq!(t.advance(ms(500)), Duration::ZERO);
        assert!((t.value() - 50.0).abs() < EPS);
        assert_eq!(t.state(), TransitionState::PlayingForward);
    }

    #[test]
    fn test_tween_completes_with_leftover() {
        let mut t = Transition::new(10.0, 20.0, ms(100), Easing::STANDARD);
        t.play();
        assert_eq!(t.advance(ms(130)), ms(30));
        assert_eq!(t.state(), TransitionState::Done);
        assert!((t.value() - 20.0).abs() < EPS);
    }

    #[test]
    fn test_idle_tween_does_not_move() {
        let mut t = Transition::new(0.0, 100.0, ms(100), Easing::Linear);
        assert_eq!(t.advance(ms(50)), ms(50));
        assert_eq!(t.state(), TransitionState::Idle);
        assert!((t.value() - 0.0).abs() < EPS);
    }

    #[test]
    fn test_reverse_returns_to_start() {
        let mut t = Transition::new(0.0, 100.0, ms(1000), Easing::Linear);
        t.play();
        t.advance(ms(600));
        t.reverse();
        assert_eq!(t.state(), TransitionState::PlayingReverse);
        t.advance(ms(200));
        assert!((t.value() - 40.0).abs() < EPS);
        assert_eq!(t.advance(ms(500)), ms(100));
        assert_eq!(t.state(), TransitionState::Done);
        assert!((t.value() - 0.0).abs() < EPS);
    }

    #[test]
    fn test_zero_duration_finishes_immediately() {
        let mut t = Transition::new(0.0, 5.0, Duration::ZERO, Easing::Linear);
        t.play();
        t.advance(Duration::ZERO);
        assert_eq!(t.state(), TransitionState::Done);
        assert!((t.value() - 5.0).abs() < EPS);
    }

    #[test]
    fn test_sequence_rises_then_returns() {
        let rise = Transition::new(0.0, 80.0, ms(800), Easing::Sine);
        let mut seq = TransitionSequence::new(rise, 0.0, ms(1200), Easing::Sine, Duration::ZERO);
        seq.play();

        let step = seq.advance(ms(400));
        assert!(step.peak.is_none());
        assert_eq!(seq.phase(), SequencePhase::Rising);

        let step = seq.advance(ms(400));
        assert_eq!(step.peak, Some(80.0));
        assert_eq!(seq.phase(), SequencePhase::Returning);
        assert!((step.value.unwrap() - 80.0).abs() < EPS);

        let step = seq.advance(ms(1200));
        assert!(step.completed);
        assert!((step.value.unwrap() - 0.0).abs() < EPS);
        assert!(!seq.is_running());
    }

    #[test]
    fn test_sequence_single_large_step() {
        let rise = Transition::new(0.0, 50.0, ms(800), Easing::Sine);
        let mut seq = TransitionSequence::new(rise, 0.0, ms(1200), Easing::Sine, Duration::ZERO);
        seq.play();
        let step = seq.advance(ms(5000));
        assert_eq!(step.peak, Some(50.0));
        assert!(step.completed);
        assert!((step.value.unwrap() - 0.0).abs() < EPS);
    }

    #[test]
    fn test_sequence_honours_return_delay() {
        let rise = Transition::new(0.0, 50.0, ms(800), Easing::Sine);
        let mut seq = TransitionSequence::new(rise, 0.0, ms(1200), Easing::Sine, ms(300));
        seq.play();
        seq.advance(ms(800));
        assert_eq!(seq.phase(), SequencePhase::Holding);
        seq.advance(ms(200));
        assert_eq!(seq.phase(), SequencePhase::Holding);
        let step = seq.advance(ms(100));
        assert_eq!(seq.phase(), SequencePhase::Returning);
        assert!((step.value.unwrap() - 50.0).abs() < EPS);
    }
}
