use std::time::Duration;

/// How long a label show/hide transition runs.
pub const FLOAT_DURATION: Duration = Duration::from_millis(200);

/// Easing curve applied to transition progress.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Curve {
    #[default]
    Linear,
    EaseIn,
    EaseOut,
}

impl Curve {
    /// Apply the curve to a progress value in `0.0..=1.0`.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Curve::Linear => t,
            Curve::EaseIn => t * t,
            Curve::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
        }
    }
}

/// Visual pose of the floating label.
///
/// `rise` runs from 0.0 (inline, overlapping the text row) to 1.0 (floating,
/// on the caption row). `opacity` runs from 0.0 (hidden) to 1.0 (fully shown).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    pub rise: f32,
    pub opacity: f32,
}

impl Pose {
    pub const HIDDEN: Self = Self {
        rise: 0.0,
        opacity: 0.0,
    };
    pub const SHOWN: Self = Self {
        rise: 1.0,
        opacity: 1.0,
    };

    fn lerp(from: Self, to: Self, t: f32) -> Self {
        Self {
            rise: from.rise + (to.rise - from.rise) * t,
            opacity: from.opacity + (to.opacity - from.opacity) * t,
        }
    }
}

/// A tick-driven transition between two poses.
///
/// Retargeting samples the current pose as the new origin, so a show issued
/// while a hide is still in flight picks up from wherever the label currently
/// is instead of snapping. Targets are always supplied from fixed constants,
/// never read back from the animated position.
#[derive(Clone, Debug)]
pub struct Transition {
    from: Pose,
    to: Pose,
    curve: Curve,
    duration: Duration,
    elapsed: Duration,
}

impl Transition {
    /// A transition already settled at `pose`.
    pub fn settled(pose: Pose) -> Self {
        Self {
            from: pose,
            to: pose,
            curve: Curve::Linear,
            duration: Duration::ZERO,
            elapsed: Duration::ZERO,
        }
    }

    /// Begin animating toward `to` from the currently sampled pose.
    ///
    /// A retarget to the pose the transition is already settled at is a no-op,
    /// so repeated show (or hide) requests do not restart the animation.
    pub fn retarget(&mut self, to: Pose, curve: Curve, duration: Duration) {
        if self.is_settled() && self.to == to {
            return;
        }
        self.from = self.sample();
        self.to = to;
        self.curve = curve;
        self.duration = duration;
        self.elapsed = Duration::ZERO;
    }

    /// Jump straight to `pose` with no animation.
    pub fn jump(&mut self, pose: Pose) {
        *self = Self::settled(pose);
    }

    /// Advance the transition by `dt`.
    pub fn tick(&mut self, dt: Duration) {
        if self.is_settled() {
            return;
        }
        self.elapsed = self.elapsed.saturating_add(dt);
        if self.elapsed >= self.duration {
            *self = Self::settled(self.to);
        }
    }

    /// The pose at the current point in the transition.
    pub fn sample(&self) -> Pose {
        if self.is_settled() {
            return self.to;
        }
        let t = self.elapsed.as_secs_f32() / self.duration.as_secs_f32();
        Pose::lerp(self.from, self.to, self.curve.apply(t))
    }

    /// The pose this transition is heading for.
    pub fn target(&self) -> Pose {
        self.to
    }

    pub fn is_settled(&self) -> bool {
        self.elapsed >= self.duration
    }
}
