use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Widget;
use unicode_width::UnicodeWidthChar;

use crate::field::{AnimationDirection, FloatingLabelField};
use crate::label::ColorMode;
use crate::layout::{glide_row, label_rows};
use crate::theme::fade;

/// Leftmost column scrolled out of view so the cursor stays visible.
pub(crate) fn scroll_col(cursor_col: u16, width: u16) -> u16 {
    if cursor_col < width {
        0
    } else {
        cursor_col - width + 1
    }
}

/// Tail of `text` after skipping `scroll` display columns.
fn windowed(text: &str, scroll: u16) -> &str {
    if scroll == 0 {
        return text;
    }
    let mut skipped = 0u16;
    for (byte, ch) in text.char_indices() {
        if skipped >= scroll {
            return &text[byte..];
        }
        skipped += ch.width().unwrap_or(0) as u16;
    }
    ""
}

impl Widget for &mut FloatingLabelField {
    /// The layout pass plus drawing: first re-applies the derived visual
    /// state, then paints the text row and the label at its sampled pose.
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.sync_visual();

        if let Some(block) = self.block() {
            block.clone().render(area, buf);
        }
        let inner = self.inner(area);
        let hpad = self.theme().horizontal_padding;
        let width = inner.width.saturating_sub(hpad.saturating_mul(2));
        if width == 0 || inner.height == 0 {
            return;
        }
        let x = inner.x + hpad;

        // Text row: entered text, or the inline placeholder while empty.
        let text_y = self.text_row(area);
        if self.buffer().is_empty() {
            let style = Style::default().fg(self.theme().placeholder_color);
            buf.set_stringn(x, text_y, self.placeholder(), width as usize, style);
        } else {
            let scroll = if self.is_focused() {
                scroll_col(self.buffer().cursor_column(), width)
            } else {
                0
            };
            let visible = windowed(self.buffer().text(), scroll);
            buf.set_stringn(x, text_y, visible, width as usize, self.theme().text_style);
        }

        // Label, painted over the text row while it glides through it.
        let Some(rows) = label_rows(inner, self.theme().insets()) else {
            return;
        };
        let pose = self.label_pose();
        let row = match self.direction() {
            AnimationDirection::Upward => glide_row(rows, pose.rise),
            AnimationDirection::Downward => rows.floating,
        };
        let base = match self.color_mode() {
            ColorMode::Active => self.theme().active_color,
            ColorMode::Inactive => self.theme().inactive_color,
        };
        let Some(color) = fade(base, self.theme().background, pose.opacity) else {
            return;
        };
        let style = Style::default()
            .fg(color)
            .add_modifier(self.theme().label_text_style.modifier());
        let natural = self.label().caption_width().min(width) as usize;
        buf.set_stringn(x, row, self.label().caption(), natural, style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::FLOAT_DURATION;
    use ratatui::style::{Color, Modifier};

    fn render(field: &mut FloatingLabelField, area: Rect) -> Buffer {
        let mut buf = Buffer::empty(area);
        field.render(area, &mut buf);
        buf
    }

    fn row_text(buf: &Buffer, area: Rect, y: u16) -> String {
        (area.x..area.right())
            .map(|x| buf.cell((x, y)).unwrap().symbol())
            .collect()
    }

    #[test]
    fn empty_field_draws_inline_placeholder_only() {
        let mut field = FloatingLabelField::new("Email");
        let area = Rect::new(0, 0, 12, 2);
        let buf = render(&mut field, area);
        assert_eq!(row_text(&buf, area, 0).trim(), "", "caption row stays blank");
        assert!(row_text(&buf, area, 1).contains("Email"));
        let cell = buf.cell((1, 1)).unwrap();
        assert_eq!(cell.style().fg, Some(Color::Rgb(0xc7, 0xc7, 0xcd)));
    }

    #[test]
    fn settled_field_draws_caption_on_floating_row() {
        let mut field = FloatingLabelField::new("Email").with_text("a@b.c");
        let area = Rect::new(0, 0, 12, 2);
        let buf = render(&mut field, area);
        assert!(row_text(&buf, area, 0).contains("Email"));
        assert!(row_text(&buf, area, 1).contains("a@b.c"));
        let cell = buf.cell((1, 0)).unwrap();
        assert!(cell.style().add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn label_color_follows_focus() {
        let mut field = FloatingLabelField::new("Email").with_text("a");
        let area = Rect::new(0, 0, 12, 2);
        let theme = field.theme().clone();

        let buf = render(&mut field, area);
        assert_eq!(buf.cell((1, 0)).unwrap().style().fg, Some(theme.inactive_color));

        field.focus();
        let buf = render(&mut field, area);
        assert_eq!(buf.cell((1, 0)).unwrap().style().fg, Some(theme.active_color));
    }

    #[test]
    fn render_applies_the_layout_rules() {
        let mut field = FloatingLabelField::new("Email");
        field.focus();
        let area = Rect::new(0, 0, 12, 2);
        render(&mut field, area);
        assert!(!field.label_visible(), "focused empty field stays hidden");

        field.handle_key(&crossterm::event::KeyEvent::new(
            crossterm::event::KeyCode::Char('x'),
            crossterm::event::KeyModifiers::NONE,
        ));
        field.tick(FLOAT_DURATION);
        render(&mut field, area);
        assert!(field.label_visible());
        assert!(!field.is_animating());
    }

    #[test]
    fn long_text_scrolls_to_keep_cursor_visible() {
        let mut field = FloatingLabelField::new("Email");
        field.focus();
        field.set_text("abcdefghijkl");
        let area = Rect::new(0, 0, 8, 2);
        let buf = render(&mut field, area);
        let row = row_text(&buf, area, 1);
        assert!(row.contains('l'), "tail of the value must be visible: {row:?}");
        assert!(!row.contains('a'), "head scrolled out of view: {row:?}");
    }

    #[test]
    fn too_small_area_draws_text_without_label() {
        let mut field = FloatingLabelField::new("Email").with_text("hi");
        let area = Rect::new(0, 0, 10, 1);
        let buf = render(&mut field, area);
        assert!(row_text(&buf, area, 0).contains("hi"));
    }

    #[test]
    fn windowed_skips_display_columns() {
        assert_eq!(windowed("abc", 0), "abc");
        assert_eq!(windowed("abc", 1), "bc");
        assert_eq!(windowed("日本語", 2), "本語");
        assert_eq!(windowed("ab", 5), "");
    }

    #[test]
    fn scroll_col_keeps_cursor_in_window() {
        assert_eq!(scroll_col(0, 8), 0);
        assert_eq!(scroll_col(7, 8), 0);
        assert_eq!(scroll_col(8, 8), 1);
        assert_eq!(scroll_col(12, 8), 5);
    }
}
