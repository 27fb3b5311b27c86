#![deny(rust_2018_idioms)]
#![doc = include_str!("../README.md")]

mod animation;
mod editor;
mod field;
mod label;
mod layout;
mod render;
mod runtime;
mod theme;

pub use animation::{FLOAT_DURATION, Pose};
pub use field::{AnimationDirection, FloatingLabelField};
pub use label::ColorMode;
pub use layout::{LabelInsets, text_rect};
pub use runtime::{FloatForm, FormOptions};
pub use theme::{FieldTheme, LabelTextStyle};

pub mod prelude {
    pub use super::{
        AnimationDirection, ColorMode, FieldTheme, FloatForm, FloatingLabelField, FormOptions,
        LabelTextStyle,
    };
}
