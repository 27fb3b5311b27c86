use ratatui::style::{Color, Modifier, Style};

use crate::layout::LabelInsets;

/// Emphasis token for the floating label, standing in for a dynamic-type
/// text style. `Caption` mirrors the original bold small-caption look.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LabelTextStyle {
    #[default]
    Caption,
    Footnote,
    Body,
}

impl LabelTextStyle {
    pub(crate) fn modifier(self) -> Modifier {
        match self {
            LabelTextStyle::Caption => Modifier::BOLD,
            LabelTextStyle::Footnote => Modifier::DIM,
            LabelTextStyle::Body => Modifier::empty(),
        }
    }
}

/// Visual configuration for a [`FloatingLabelField`](crate::FloatingLabelField).
#[derive(Clone, Debug)]
pub struct FieldTheme {
    /// Label color while the field is focused.
    pub active_color: Color,
    /// Label color while the field is not focused.
    pub inactive_color: Color,
    /// Style applied to the entered text.
    pub text_style: Style,
    /// Color of the inline placeholder shown while the field is empty.
    pub placeholder_color: Color,
    /// Emphasis applied to the floating label.
    pub label_text_style: LabelTextStyle,
    /// Background the label fades toward when animating.
    pub background: Color,
    /// Columns of padding on both sides of the text rect.
    pub horizontal_padding: u16,
    /// Extra rows between the floating label line and the text line.
    pub vertical_padding: u16,
}

impl Default for FieldTheme {
    fn default() -> Self {
        Self {
            active_color: Color::Blue,
            inactive_color: Color::Rgb(0xb3, 0xb3, 0xb3),
            text_style: Style::default(),
            placeholder_color: Color::Rgb(0xc7, 0xc7, 0xcd),
            label_text_style: LabelTextStyle::default(),
            background: Color::Reset,
            horizontal_padding: 1,
            vertical_padding: 0,
        }
    }
}

impl FieldTheme {
    pub fn insets(&self) -> LabelInsets {
        LabelInsets::new(self.vertical_padding, self.horizontal_padding)
    }
}

/// Fade `fg` toward `bg` by the given opacity.
///
/// RGB pairs blend per channel (`Reset` counts as black); palette colors
/// cannot blend, so they cut over at half opacity. `None` means "do not draw".
pub(crate) fn fade(fg: Color, bg: Color, opacity: f32) -> Option<Color> {
    let opacity = opacity.clamp(0.0, 1.0);
    if opacity <= f32::EPSILON {
        return None;
    }
    if opacity >= 1.0 {
        return Some(fg);
    }
    match (rgb_of(fg), rgb_of(bg)) {
        (Some((fr, fg_, fb)), Some((br, bg_, bb))) => {
            let mix = |f: u8, b: u8| (b as f32 + (f as f32 - b as f32) * opacity).round() as u8;
            Some(Color::Rgb(mix(fr, br), mix(fg_, bg_), mix(fb, bb)))
        }
        _ => (opacity >= 0.5).then_some(fg),
    }
}

fn rgb_of(color: Color) -> Option<(u8, u8, u8)> {
    match color {
        Color::Rgb(r, g, b) => Some((r, g, b)),
        Color::Reset => Some((0, 0, 0)),
        _ => None,
    }
}
