use unicode_width::UnicodeWidthStr;

use crate::animation::{Curve, FLOAT_DURATION, Pose, Transition};

/// Which of the two configured label colors applies.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    Active,
    #[default]
    Inactive,
}

/// The caption element owned by a field.
///
/// Holds the cached caption text, its measured cell width (the `sizeToFit`
/// equivalent), the color mode, and the pose transition. It has no identity
/// outside its parent field.
#[derive(Clone, Debug)]
pub(crate) struct FloatLabel {
    caption: String,
    caption_width: u16,
    color_mode: ColorMode,
    transition: Transition,
}

impl FloatLabel {
    pub fn new() -> Self {
        Self {
            caption: String::new(),
            caption_width: 0,
            color_mode: ColorMode::default(),
            transition: Transition::settled(Pose::HIDDEN),
        }
    }

    /// Update the caption, remeasuring only when the text actually changed.
    /// Returns `true` when a remeasure happened.
    pub fn set_caption(&mut self, caption: &str) -> bool {
        if self.caption == caption {
            return false;
        }
        self.caption = caption.to_string();
        self.caption_width = self.caption.width() as u16;
        true
    }

    pub fn caption(&self) -> &str {
        &self.caption
    }

    pub fn caption_width(&self) -> u16 {
        self.caption_width
    }

    pub fn color_mode(&self) -> ColorMode {
        self.color_mode
    }

    pub fn set_color_mode(&mut self, mode: ColorMode) {
        self.color_mode = mode;
    }

    /// Raise the label to the floating position.
    pub fn show(&mut self, animated: bool) {
        if animated {
            self.transition
                .retarget(Pose::SHOWN, Curve::EaseOut, FLOAT_DURATION);
        } else {
            self.transition.jump(Pose::SHOWN);
        }
    }

    /// Drop the label back to the inline position and fade it out.
    pub fn hide(&mut self, animated: bool) {
        if animated {
            self.transition
                .retarget(Pose::HIDDEN, Curve::EaseIn, FLOAT_DURATION);
        } else {
            self.transition.jump(Pose::HIDDEN);
        }
    }

    pub fn tick(&mut self, dt: std::time::Duration) {
        self.transition.tick(dt);
    }

    pub fn pose(&self) -> Pose {
        self.transition.sample()
    }

    /// Whether the label is (or is animating toward being) shown.
    pub fn is_visible(&self) -> bool {
        self.transition.target() == Pose::SHOWN
    }

    pub fn is_animating(&self) -> bool {
        !self.transition.is_settled()
    }
}
