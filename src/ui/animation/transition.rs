//! Model/presentation value pairs driven by `iced_anim`
//!
//! A [`Transition`] keeps the value the widget logic reasons about (the
//! *target*) apart from the value currently on screen (the *presented* value).
//! Whether a change animates is decided by the active [`Transaction`].

use std::time::{Duration, Instant};

use iced::{Color, Point, Size};
use iced_anim::Animated;
use iced_anim::transition::Easing;

/// Duration used when no explicit animation was requested
pub const IMPLICIT_DURATION: Duration = Duration::from_millis(250);

/// Linear interpolation between two values
pub trait Lerp: Copy + PartialEq {
    fn lerp(from: Self, to: Self, t: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(from: Self, to: Self, t: f32) -> Self {
        from + (to - from) * t
    }
}

impl Lerp for Point {
    fn lerp(from: Self, to: Self, t: f32) -> Self {
        Point::new(
            <f32 as Lerp>::lerp(from.x, to.x, t),
            <f32 as Lerp>::lerp(from.y, to.y, t),
        )
    }
}

impl Lerp for Size {
    fn lerp(from: Self, to: Self, t: f32) -> Self {
        Size::new(
            <f32 as Lerp>::lerp(from.width, to.width, t),
            <f32 as Lerp>::lerp(from.height, to.height, t),
        )
    }
}

impl Lerp for Color {
    fn lerp(from: Self, to: Self, t: f32) -> Self {
        Color::from_rgba(
            <f32 as Lerp>::lerp(from.r, to.r, t),
            <f32 as Lerp>::lerp(from.g, to.g, t),
            <f32 as Lerp>::lerp(from.b, to.b, t),
            <f32 as Lerp>::lerp(from.a, to.a, t),
        )
    }
}

/// Timing curve of an animated transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimingCurve {
    /// Default curve for implicit changes
    Ease,
    /// Slow start and slow end
    EaseInOut,
}

impl TimingCurve {
    fn easing(self, duration: Duration) -> Easing {
        match self {
            TimingCurve::Ease => Easing::EASE.with_duration(duration),
            TimingCurve::EaseInOut => Easing::EASE_IN_OUT.with_duration(duration),
        }
    }
}

/// How property changes made inside a batched update are presented
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transaction {
    actions_disabled: bool,
    duration: Duration,
    curve: TimingCurve,
}

impl Default for Transaction {
    fn default() -> Self {
        Self::implicit()
    }
}

impl Transaction {
    /// Changes animate with the implicit duration and curve
    pub fn implicit() -> Self {
        Self {
            actions_disabled: false,
            duration: IMPLICIT_DURATION,
            curve: TimingCurve::Ease,
        }
    }

    /// Changes are applied to the presentation immediately
    pub fn disabled() -> Self {
        Self {
            actions_disabled: true,
            ..Self::implicit()
        }
    }

    /// Changes animate over `duration` with an ease-in-ease-out curve
    pub fn animated(duration: Duration) -> Self {
        Self {
            actions_disabled: false,
            duration,
            curve: TimingCurve::EaseInOut,
        }
    }

    pub fn actions_disabled(&self) -> bool {
        self.actions_disabled
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn curve(&self) -> TimingCurve {
        self.curve
    }

    fn easing(&self) -> Easing {
        self.curve().easing(self.duration())
    }
}

/// An animatable property: target value plus on-screen value
#[derive(Debug)]
pub struct Transition<T> {
    from: T,
    to: T,
    progress: Animated<f32>,
}

impl<T: Lerp> Transition<T> {
    pub fn new(value: T) -> Self {
        Self {
            from: value,
            to: value,
            progress: Animated::transition(1.0, Easing::EASE.with_duration(IMPLICIT_DURATION)),
        }
    }

    /// Change the target value under the given transaction
    ///
    /// An animated change always starts from what is currently presented,
    /// so interrupting a running animation never jumps.
    ///
    /// Re-setting the current target is a no-op and leaves a running
    /// animation alone.
    pub fn set(&mut self, target: T, transaction: &Transaction) {
        if target == self.to {
            return;
        }

        if transaction.actions_disabled() {
            self.from = target;
            self.to = target;
            self.progress = Animated::transition(1.0, transaction.easing());
            return;
        }

        self.from = self.presented();
        self.to = target;
        self.progress = Animated::transition(0.0, transaction.easing());
        self.progress.update(1.0.into());
    }

    /// Model value, as last set
    pub fn target(&self) -> T {
        self.to
    }

    /// Value currently on screen
    pub fn presented(&self) -> T {
        let t = (*self.progress.value()).clamp(0.0, 1.0);
        if t >= 1.0 {
            self.to
        } else {
            T::lerp(self.from, self.to, t)
        }
    }

    pub fn is_animating(&self) -> bool {
        self.progress.is_animating()
    }

    /// Advance the presentation to `now`
    pub fn tick(&mut self, now: Instant) {
        self.progress.tick(now);
    }
}
