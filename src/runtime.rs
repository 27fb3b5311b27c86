use std::io::{self, Stdout};
use std::ops::{Deref, DerefMut};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    widgets::Paragraph,
};

use crate::field::FloatingLabelField;

const HELP_TEXT: &str = "Tab/Shift+Tab switch field • Enter submit • Esc quit";

/// Runner behavior knobs.
#[derive(Debug, Clone)]
pub struct FormOptions {
    /// Upper bound on how long the event poll blocks; also the animation
    /// tick granularity.
    pub tick_rate: Duration,
    pub show_help: bool,
}

impl Default for FormOptions {
    fn default() -> Self {
        Self {
            tick_rate: Duration::from_millis(33),
            show_help: true,
        }
    }
}

/// A minimal terminal host for a stack of [`FloatingLabelField`]s.
///
/// Owns the terminal session, routes key events to the focused field,
/// drives label animations between events, and returns the entered values
/// on submit (`None` when the user quit instead).
#[derive(Debug, Default)]
pub struct FloatForm {
    fields: Vec<FloatingLabelField>,
    title: Option<String>,
    options: FormOptions,
    focused: usize,
}

impl FloatForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_options(mut self, options: FormOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_field(mut self, field: FloatingLabelField) -> Self {
        self.fields.push(field);
        self
    }

    pub fn fields(&self) -> &[FloatingLabelField] {
        &self.fields
    }

    pub fn focused_index(&self) -> usize {
        self.focused
    }

    pub fn focused_field_mut(&mut self) -> Option<&mut FloatingLabelField> {
        self.fields.get_mut(self.focused)
    }

    /// Move focus by `delta` fields, wrapping at both ends.
    pub fn shift_focus(&mut self, delta: isize) {
        if self.fields.is_empty() {
            return;
        }
        let len = self.fields.len() as isize;
        let next = (self.focused as isize + delta).rem_euclid(len) as usize;
        if next == self.focused && self.fields[self.focused].is_focused() {
            return;
        }
        if let Some(field) = self.fields.get_mut(self.focused) {
            field.blur();
        }
        self.focused = next;
        self.fields[self.focused].focus();
    }

    /// Advance every field's animation by `dt`.
    pub fn tick(&mut self, dt: Duration) {
        for field in &mut self.fields {
            field.tick(dt);
        }
    }

    /// Run the interactive session until submit or quit.
    pub fn run(mut self) -> Result<Option<Vec<String>>> {
        self.shift_focus(0);
        let mut app = App::new(self);
        app.run()
    }
}

struct App {
    form: FloatForm,
    should_quit: bool,
    submitted: bool,
}

impl App {
    fn new(form: FloatForm) -> Self {
        Self {
            form,
            should_quit: false,
            submitted: false,
        }
    }

    fn run(&mut self) -> Result<Option<Vec<String>>> {
        let mut terminal = TerminalGuard::new()?;
        let mut last_tick = Instant::now();
        while !self.should_quit {
            terminal.draw(|frame| draw(frame, &mut self.form))?;

            let timeout = self.form.options.tick_rate;
            if event::poll(timeout).context("failed to poll terminal events")? {
                match event::read().context("failed to read terminal event")? {
                    Event::Key(key) => self.handle_key(key),
                    Event::Resize(_, _) => {}
                    _ => {}
                }
            }
            self.form.tick(last_tick.elapsed());
            last_tick = Instant::now();
        }

        if self.submitted {
            let values = self
                .form
                .fields
                .iter()
                .map(|field| field.text().to_string())
                .collect();
            Ok(Some(values))
        } else {
            Ok(None)
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL)
            && matches!(key.code, KeyCode::Char('q') | KeyCode::Char('c'))
        {
            self.should_quit = true;
            return;
        }
        match key.code {
            KeyCode::Tab | KeyCode::Down => self.form.shift_focus(1),
            KeyCode::BackTab | KeyCode::Up => self.form.shift_focus(-1),
            KeyCode::Enter => {
                self.submitted = true;
                self.should_quit = true;
            }
            KeyCode::Esc => self.should_quit = true,
            _ => {
                if let Some(field) = self.form.focused_field_mut() {
                    field.handle_key(&key);
                }
            }
        }
    }
}

fn draw(frame: &mut ratatui::Frame<'_>, form: &mut FloatForm) {
    let mut constraints = vec![Constraint::Length(1)];
    for field in &form.fields {
        constraints.push(Constraint::Length(field_height(field)));
    }
    constraints.push(Constraint::Min(0));
    if form.options.show_help {
        constraints.push(Constraint::Length(1));
    }
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(frame.area());

    if let Some(title) = &form.title {
        frame.render_widget(Paragraph::new(title.as_str()), chunks[0]);
    }

    let mut cursor: Option<(u16, u16)> = None;
    let focused = form.focused;
    for (idx, field) in form.fields.iter_mut().enumerate() {
        let area = chunks[idx + 1];
        if idx == focused {
            cursor = field.cursor_position(area);
        }
        frame.render_widget(&mut *field, area);
    }

    if form.options.show_help {
        let help = Paragraph::new(HELP_TEXT).style(Style::default().fg(Color::DarkGray));
        frame.render_widget(help, chunks[chunks.len() - 1]);
    }

    if let Some(position) = cursor {
        frame.set_cursor_position(position);
    }
}

fn field_height(field: &FloatingLabelField) -> u16 {
    let inner = 2 + field.theme().vertical_padding;
    if field.block().is_some() {
        inner + 2
    } else {
        inner
    }
}

struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalGuard {
    fn new() -> Result<Self> {
        enable_raw_mode().context("failed to enable raw mode")?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).context("failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend).context("failed to initialize terminal")?;
        Ok(Self { terminal })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

impl Deref for TerminalGuard {
    type Target = Terminal<CrosstermBackend<Stdout>>;

    fn deref(&self) -> &Self::Target {
        &self.terminal
    }
}

impl DerefMut for TerminalGuard {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.terminal
    }
}
