use ratatui::layout::Rect;

/// Insets carving the text rect out of the field bounds.
///
/// The top inset reserves the label line (one row, plus any extra vertical
/// padding) so the visible text never overlaps the floating label; the
/// horizontal inset applies on both sides.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LabelInsets {
    pub top: u16,
    pub horizontal: u16,
}

impl LabelInsets {
    pub fn new(vertical_padding: u16, horizontal_padding: u16) -> Self {
        Self {
            top: 1 + vertical_padding,
            horizontal: horizontal_padding,
        }
    }
}

/// The text-entry rectangle: field bounds inset by `insets`.
///
/// Computed from the bounds and fixed constants only, so it is stable across
/// animation frames. Degenerate bounds collapse to a zero-size rect.
pub fn text_rect(bounds: Rect, insets: LabelInsets) -> Rect {
    let x = bounds.x.saturating_add(insets.horizontal);
    let y = bounds.y.saturating_add(insets.top);
    let width = bounds.width.saturating_sub(insets.horizontal.saturating_mul(2));
    let height = bounds.height.saturating_sub(insets.top);
    if width == 0 || height == 0 || y >= bounds.bottom() {
        return Rect::new(bounds.x, bounds.y, 0, 0);
    }
    Rect::new(x, y, width, 1)
}

/// Resting rows for the label within the field bounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LabelRows {
    /// Raised position, above the text baseline.
    pub floating: u16,
    /// Resting position, coincident with placeholder/text.
    pub inline: u16,
}

/// Rows for a field at `bounds`, or `None` when there is no room for both the
/// label line and the text line.
pub fn label_rows(bounds: Rect, insets: LabelInsets) -> Option<LabelRows> {
    let text = text_rect(bounds, insets);
    if text.height == 0 {
        return None;
    }
    Some(LabelRows {
        floating: bounds.y,
        inline: text.y,
    })
}

/// Interpolated row between `inline` (rise 0.0) and `floating` (rise 1.0).
pub fn glide_row(rows: LabelRows, rise: f32) -> u16 {
    let span = rows.inline.saturating_sub(rows.floating) as f32;
    let raised = (rise.clamp(0.0, 1.0) * span).round() as u16;
    rows.inline.saturating_sub(raised)
}
