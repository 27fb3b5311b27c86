use std::time::Duration;

use crossterm::event::KeyEvent;
use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::widgets::Block;

use crate::animation::Pose;
use crate::editor::EditBuffer;
use crate::label::{ColorMode, FloatLabel};
use crate::layout::text_rect;
use crate::render::scroll_col;
use crate::theme::{FieldTheme, LabelTextStyle};

/// Which element moves while the label transitions.
///
/// `Upward` glides the label from the text row up to the caption row.
/// `Downward` keeps the label anchored on the caption row and slides the
/// text row down into place instead. Final states are identical.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AnimationDirection {
    #[default]
    Upward,
    Downward,
}

/// A single-line text input with a floating caption label.
///
/// The field owns the native editing behavior (value storage, cursor, focus)
/// and one caption element. Text-change and focus events feed the label's
/// visibility state machine:
///
/// - the label is shown exactly while the field has text, animating in the
///   moment the value becomes non-empty and out the moment it empties again;
/// - focus changes only swap the label color between the active and inactive
///   theme colors, never its visibility.
///
/// Hosts deliver events by direct method call (`handle_key`, `focus`, `blur`),
/// drive animations with `tick`, and draw via the widget impls in this crate.
///
/// There is deliberately no `Default` impl: a field is always constructed
/// around its placeholder caption.
#[derive(Clone, Debug)]
pub struct FloatingLabelField {
    buffer: EditBuffer,
    label: FloatLabel,
    focused: bool,
    direction: AnimationDirection,
    theme: FieldTheme,
    block: Option<Block<'static>>,
}

impl FloatingLabelField {
    pub fn new(placeholder: impl Into<String>) -> Self {
        let mut label = FloatLabel::new();
        label.set_caption(&placeholder.into());
        Self {
            buffer: EditBuffer::default(),
            label,
            focused: false,
            direction: AnimationDirection::default(),
            theme: FieldTheme::default(),
            block: None,
        }
    }

    /// Start with pre-existing text; the label is pre-positioned at the
    /// floating pose with no animation.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.buffer = EditBuffer::new(text);
        self.sync_visual();
        self
    }

    pub fn with_theme(mut self, theme: FieldTheme) -> Self {
        self.theme = theme;
        self
    }

    pub fn with_block(mut self, block: Block<'static>) -> Self {
        self.block = Some(block);
        self
    }

    pub fn with_direction(mut self, direction: AnimationDirection) -> Self {
        self.direction = direction;
        self
    }

    // Text & placeholder

    pub fn text(&self) -> &str {
        self.buffer.text()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Replace the value, forwarding it directly to the buffer and
    /// re-evaluating label visibility on an emptiness change.
    pub fn set_text(&mut self, text: impl Into<String>) {
        let was_empty = self.buffer.is_empty();
        self.buffer.set_text(text);
        self.text_did_change(was_empty);
    }

    /// Char index of the editing cursor within the value.
    pub fn cursor(&self) -> usize {
        self.buffer.cursor()
    }

    pub fn placeholder(&self) -> &str {
        self.label.caption()
    }

    /// Update the placeholder caption and remeasure it in one step. A no-op
    /// when identical to the cached placeholder, so no redundant remeasure
    /// happens.
    pub fn set_placeholder(&mut self, placeholder: &str) {
        self.label.set_caption(placeholder);
    }

    // Focus

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Begin an editing session. Swaps the label to its active color; the
    /// label stays hidden while the field is empty.
    pub fn focus(&mut self) {
        if self.focused {
            return;
        }
        self.focused = true;
        self.label.set_color_mode(ColorMode::Active);
    }

    /// End the editing session. The inactive color applies unconditionally;
    /// with empty text the label is hidden anyway, so the two historical
    /// rules are observationally identical.
    pub fn blur(&mut self) {
        if !self.focused {
            return;
        }
        self.focused = false;
        self.label.set_color_mode(ColorMode::Inactive);
    }

    // Events

    /// Feed one key event into the field. Returns `true` when consumed.
    /// Ignored entirely while the field is not focused.
    pub fn handle_key(&mut self, key: &KeyEvent) -> bool {
        if !self.focused {
            return false;
        }
        let was_empty = self.buffer.is_empty();
        let consumed = self.buffer.handle_key(key);
        if consumed {
            self.text_did_change(was_empty);
        }
        consumed
    }

    /// Advance any in-flight label transition.
    pub fn tick(&mut self, dt: Duration) {
        self.label.tick(dt);
    }

    pub fn is_animating(&self) -> bool {
        self.label.is_animating()
    }

    // Label introspection

    /// Whether the label is shown (or animating toward shown).
    pub fn label_visible(&self) -> bool {
        self.label.is_visible()
    }

    pub fn color_mode(&self) -> ColorMode {
        self.label.color_mode()
    }

    /// The label's currently sampled pose, for custom renderers.
    pub fn label_pose(&self) -> Pose {
        self.label.pose()
    }

    // Theme setters. Plain assignments: the renderer reads the theme fresh
    // every frame, so nothing derived is cached here.

    pub fn set_active_color(&mut self, color: Color) {
        self.theme.active_color = color;
    }

    pub fn set_inactive_color(&mut self, color: Color) {
        self.theme.inactive_color = color;
    }

    pub fn set_label_text_style(&mut self, style: LabelTextStyle) {
        self.theme.label_text_style = style;
    }

    pub fn set_horizontal_padding(&mut self, columns: u16) {
        self.theme.horizontal_padding = columns;
    }

    pub fn set_vertical_padding(&mut self, rows: u16) {
        self.theme.vertical_padding = rows;
    }

    pub fn theme(&self) -> &FieldTheme {
        &self.theme
    }

    // Geometry

    /// The text-entry rectangle for the given bounds: inset by one row (plus
    /// vertical padding) on top and by the horizontal padding on both sides.
    pub fn text_area(&self, bounds: Rect) -> Rect {
        text_rect(self.inner(bounds), self.theme.insets())
    }

    /// Terminal cursor position while focused, for `Frame::set_cursor_position`.
    pub fn cursor_position(&self, bounds: Rect) -> Option<(u16, u16)> {
        if !self.focused {
            return None;
        }
        let text = self.text_area(bounds);
        if text.width == 0 {
            return None;
        }
        let scroll = scroll_col(self.buffer.cursor_column(), text.width);
        let x = text.x + (self.buffer.cursor_column() - scroll).min(text.width - 1);
        Some((x, self.text_row(bounds)))
    }

    // Internals shared with the renderer

    pub(crate) fn inner(&self, bounds: Rect) -> Rect {
        match &self.block {
            Some(block) => block.inner(bounds),
            None => bounds,
        }
    }

    pub(crate) fn block(&self) -> Option<&Block<'static>> {
        self.block.as_ref()
    }

    pub(crate) fn buffer(&self) -> &EditBuffer {
        &self.buffer
    }

    pub(crate) fn label(&self) -> &FloatLabel {
        &self.label
    }

    pub(crate) fn direction(&self) -> AnimationDirection {
        self.direction
    }

    /// Row the text currently occupies. Fixed for `Upward`; for `Downward`
    /// the text row slides from the top row down to the inset row as the
    /// label rises.
    pub(crate) fn text_row(&self, bounds: Rect) -> u16 {
        let inner = self.inner(bounds);
        let text = text_rect(inner, self.theme.insets());
        if text.height == 0 {
            return inner.y;
        }
        match self.direction {
            AnimationDirection::Upward => text.y,
            AnimationDirection::Downward => {
                let span = (text.y - inner.y) as f32;
                inner.y + (self.label_pose().rise.clamp(0.0, 1.0) * span).round() as u16
            }
        }
    }

    /// The layout pass: idempotent re-application of the derived visual
    /// state. Focused-and-empty forces the label hidden; any text forces it
    /// shown without re-animating. In-flight transitions are left alone:
    /// a hide already targeting hidden reports `is_visible() == false`, so
    /// re-running this during the animation must not retarget it.
    pub(crate) fn sync_visual(&mut self) {
        if self.focused && self.buffer.is_empty() && self.label.is_visible() {
            self.label.hide(true);
        } else if !self.buffer.is_empty() && !self.label.is_visible() {
            self.label.show(false);
        }
    }

    fn text_did_change(&mut self, was_empty: bool) {
        let now_empty = self.buffer.is_empty();
        if was_empty == now_empty {
            return;
        }
        if now_empty {
            self.label.hide(true);
        } else {
            self.label.show(true);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::FLOAT_DURATION;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn key(ch: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(ch), KeyModifiers::NONE)
    }

    fn backspace() -> KeyEvent {
        KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE)
    }

    #[test]
    fn starts_hidden_and_inactive() {
        let field = FloatingLabelField::new("Email");
        assert!(!field.label_visible());
        assert_eq!(field.color_mode(), ColorMode::Inactive);
        assert_eq!(field.placeholder(), "Email");
    }

    #[test]
    fn visibility_tracks_text_emptiness() {
        let mut field = FloatingLabelField::new("Email");
        field.focus();
        for ch in ['a', 'b', 'c'] {
            field.handle_key(&key(ch));
            assert!(field.label_visible());
        }
        field.handle_key(&backspace());
        field.handle_key(&backspace());
        assert!(field.label_visible(), "still has one char");
        field.handle_key(&backspace());
        assert!(!field.label_visible(), "hidden once the value empties");
    }

    #[test]
    fn focus_gain_on_empty_field_never_animates() {
        let mut field = FloatingLabelField::new("Email");
        field.focus();
        assert!(!field.label_visible());
        assert!(!field.is_animating());
        assert_eq!(field.color_mode(), ColorMode::Active);
    }

    #[test]
    fn blur_on_empty_field_never_animates() {
        let mut field = FloatingLabelField::new("Email");
        field.focus();
        field.blur();
        assert!(!field.is_animating());
        assert_eq!(field.color_mode(), ColorMode::Inactive);
    }

    #[test]
    fn blur_with_text_only_swaps_color() {
        let mut field = FloatingLabelField::new("Email");
        field.focus();
        field.handle_key(&key('a'));
        field.tick(FLOAT_DURATION);
        field.blur();
        assert!(field.label_visible());
        assert!(!field.is_animating());
        assert_eq!(field.color_mode(), ColorMode::Inactive);
    }

    #[test]
    fn emptiness_edge_triggers_exactly_one_animation() {
        let mut field = FloatingLabelField::new("Email");
        field.focus();
        field.handle_key(&key('a'));
        assert!(field.is_animating());
        field.tick(FLOAT_DURATION);
        assert!(!field.is_animating());
        // A second character is not an emptiness edge.
        field.handle_key(&key('b'));
        assert!(!field.is_animating());
    }

    #[test]
    fn set_text_drives_the_same_state_machine() {
        let mut field = FloatingLabelField::new("Email");
        field.set_text("hello");
        assert!(field.label_visible());
        assert!(field.is_animating());
        field.tick(FLOAT_DURATION);
        field.set_text("");
        assert!(!field.label_visible());
        field.tick(FLOAT_DURATION);
        assert_eq!(field.label_pose(), Pose::HIDDEN);
    }

    #[test]
    fn with_text_pre_positions_without_animation() {
        let field = FloatingLabelField::new("Email").with_text("dirk@example.com");
        assert!(field.label_visible());
        assert!(!field.is_animating());
        assert_eq!(field.label_pose(), Pose::SHOWN);
    }

    #[test]
    fn show_then_immediate_hide_lands_hidden() {
        let mut field = FloatingLabelField::new("Email");
        field.focus();
        field.handle_key(&key('a'));
        field.tick(Duration::from_millis(40));
        field.handle_key(&backspace());
        field.tick(FLOAT_DURATION);
        assert!(!field.label_visible());
        assert_eq!(field.label_pose(), Pose::HIDDEN);
    }

    #[test]
    fn keys_are_ignored_while_unfocused() {
        let mut field = FloatingLabelField::new("Email");
        assert!(!field.handle_key(&key('a')));
        assert!(field.is_empty());
    }

    #[test]
    fn layout_sync_forces_consistent_state() {
        let mut field = FloatingLabelField::new("Email");
        field.set_text("x");
        field.tick(FLOAT_DURATION);
        field.focus();
        field.set_text("");
        field.tick(FLOAT_DURATION);
        field.sync_visual();
        assert!(!field.label_visible());

        field.blur();
        field.set_text("y");
        field.tick(FLOAT_DURATION);
        field.sync_visual();
        assert!(field.label_visible());
        assert!(!field.is_animating(), "re-application must not re-animate");
    }

    #[test]
    fn layout_sync_leaves_an_inflight_hide_alone() {
        let mut field = FloatingLabelField::new("Email");
        field.focus();
        field.handle_key(&key('a'));
        field.tick(FLOAT_DURATION);
        field.handle_key(&backspace());
        assert!(field.is_animating());

        let step = Duration::from_millis(33);
        let mut elapsed = Duration::ZERO;
        while elapsed < FLOAT_DURATION {
            field.sync_visual();
            field.tick(step);
            elapsed += step;
        }
        assert!(
            !field.is_animating(),
            "hide must finish on schedule despite layout passes"
        );
        assert_eq!(field.label_pose(), Pose::HIDDEN);
    }

    #[test]
    fn text_area_is_inset_for_the_label() {
        let field = FloatingLabelField::new("Email");
        let text = field.text_area(Rect::new(0, 0, 20, 2));
        assert_eq!(text, Rect::new(1, 1, 18, 1));
    }

    #[test]
    fn downward_direction_slides_the_text_row() {
        let mut field =
            FloatingLabelField::new("Email").with_direction(AnimationDirection::Downward);
        let bounds = Rect::new(0, 0, 20, 2);
        assert_eq!(field.text_row(bounds), 0, "empty field rests on the top row");
        field.set_text("x");
        field.tick(FLOAT_DURATION);
        assert_eq!(field.text_row(bounds), 1, "text makes room for the label");
    }

    #[test]
    fn cursor_position_follows_the_cursor() {
        let mut field = FloatingLabelField::new("Email");
        let bounds = Rect::new(0, 0, 10, 2);
        assert_eq!(field.cursor_position(bounds), None, "no cursor while blurred");
        field.focus();
        field.handle_key(&key('h'));
        field.handle_key(&key('i'));
        assert_eq!(field.cursor_position(bounds), Some((3, 1)));
    }

    #[test]
    fn full_scenario_walkthrough() {
        let mut field = FloatingLabelField::new("Email");
        assert_eq!(field.placeholder(), "Email");
        assert!(!field.label_visible());

        field.set_text("a");
        field.tick(FLOAT_DURATION);
        assert!(field.label_visible());
        assert_eq!(field.color_mode(), ColorMode::Inactive, "not focused yet");
        assert_eq!(field.label_pose(), Pose::SHOWN);

        field.set_text("");
        field.tick(FLOAT_DURATION);
        assert!(!field.label_visible());
        assert_eq!(field.label_pose(), Pose::HIDDEN);

        field.focus();
        assert!(!field.label_visible(), "focus alone never shows the label");

        field.handle_key(&key('a'));
        field.tick(FLOAT_DURATION);
        assert!(field.label_visible());
        assert_eq!(field.color_mode(), ColorMode::Active);
    }
}
