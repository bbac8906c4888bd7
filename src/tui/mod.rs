// SPDX-FileCopyrightText: 2026 Iris Authors
// SPDX-License-Identifier: LicenseRef-Iris-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Iris and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Terminal UI.
//!
//! Dual-pane shell over [`ViewerState`]: raw export on the left, derived view on
//! the right, a record picker, live substring search, and basic in-place editing
//! of the raw buffer. All work happens synchronously on the event thread.

use std::{
    error::Error,
    io,
    path::PathBuf,
    time::{Duration, Instant},
};

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
};
use smallvec::SmallVec;

use crate::query::MatchSpan;
use crate::store;
use crate::ui::ViewerState;

mod hints;
mod theme;

const POLL_INTERVAL: Duration = Duration::from_millis(250);
const TOAST_DURATION: Duration = Duration::from_secs(3);
const PAGE_STEP: usize = 10;
const MATCH_CONTEXT_LINES: usize = 3;
/// Fuzzy picker matches below this rapidfuzz ratio are dropped.
const PICKER_MIN_RATIO: f64 = 55.0;

/// Runs the interactive viewer on an already-read export text.
///
/// The initial parse must succeed; afterwards every error is recoverable and
/// surfaces as a toast.
pub fn run_with_export(
    raw: String,
    source_path: Option<PathBuf>,
) -> Result<(), Box<dyn Error>> {
    let mut state = ViewerState::default();
    state.load(raw)?;

    let mut terminal = TerminalSession::new()?;
    let mut app = App::new(state, source_path);

    while !app.should_quit {
        terminal.draw(|frame| draw(frame, &mut app))?;

        if event::poll(POLL_INTERVAL)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
                _ => {}
            }
        }
    }

    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InputMode {
    Normal,
    EditRaw,
    Search,
    Picker,
    SavePath,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
    Raw,
    Derived,
}

#[derive(Debug, Clone)]
struct Toast {
    message: String,
    expires_at: Instant,
}

/// One styled region of a pane, in char offsets of that pane's text. Higher
/// priority wins where regions overlap.
#[derive(Debug, Clone, Copy)]
pub(crate) struct PaneSpan {
    pub(crate) span: MatchSpan,
    pub(crate) style: Style,
    pub(crate) priority: u8,
}

struct App {
    state: ViewerState,
    source_path: Option<PathBuf>,
    mode: InputMode,
    focus: Focus,
    raw_scroll: (usize, usize),
    derived_scroll: (usize, usize),
    raw_cursor: usize,
    match_cursor: usize,
    search_input: String,
    picker_input: String,
    picker_matches: Vec<usize>,
    picker_state: ListState,
    save_input: String,
    toast: Option<Toast>,
    show_help: bool,
    should_quit: bool,
}

impl App {
    fn new(state: ViewerState, source_path: Option<PathBuf>) -> Self {
        Self {
            state,
            source_path,
            mode: InputMode::Normal,
            focus: Focus::Raw,
            raw_scroll: (0, 0),
            derived_scroll: (0, 0),
            raw_cursor: 0,
            match_cursor: 0,
            search_input: String::new(),
            picker_input: String::new(),
            picker_matches: Vec::new(),
            picker_state: ListState::default(),
            save_input: String::new(),
            toast: None,
            show_help: false,
            should_quit: false,
        }
    }

    fn set_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast {
            message: message.into(),
            expires_at: Instant::now() + TOAST_DURATION,
        });
    }

    fn active_toast(&self) -> Option<&str> {
        self.toast
            .as_ref()
            .filter(|toast| toast.expires_at > Instant::now())
            .map(|toast| toast.message.as_str())
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        match self.mode {
            InputMode::Normal => self.handle_normal_key(key.code),
            InputMode::EditRaw => self.handle_edit_key(key.code),
            InputMode::Search => self.handle_search_key(key.code),
            InputMode::Picker => self.handle_picker_key(key.code),
            InputMode::SavePath => self.handle_save_key(key.code),
        }
    }

    fn handle_normal_key(&mut self, code: KeyCode) {
        if self.show_help {
            // Any key dismisses the help overlay.
            self.show_help = false;
            return;
        }

        match code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Tab => {
                self.focus = match self.focus {
                    Focus::Raw => Focus::Derived,
                    Focus::Derived => Focus::Raw,
                };
            }
            KeyCode::Char('[') => self.switch_record(-1),
            KeyCode::Char(']') => self.switch_record(1),
            KeyCode::Char('g') => {
                self.picker_input.clear();
                self.refresh_picker();
                self.mode = InputMode::Picker;
            }
            KeyCode::Char('/') => {
                self.search_input = self.state.query().to_owned();
                self.mode = InputMode::Search;
            }
            KeyCode::Char('n') => self.jump_to_match(1),
            KeyCode::Char('N') => self.jump_to_match(-1),
            KeyCode::Char('e') => {
                self.focus = Focus::Raw;
                self.raw_cursor = self.raw_cursor.min(char_len(self.state.raw_text()));
                self.mode = InputMode::EditRaw;
            }
            KeyCode::Char('r') => self.reparse(),
            KeyCode::Char('o') => self.reload_from_disk(),
            KeyCode::Char('s') => {
                self.save_input = self
                    .source_path
                    .as_ref()
                    .map(|path| path.display().to_string())
                    .unwrap_or_else(|| "export-edited.json".to_owned());
                self.mode = InputMode::SavePath;
            }
            KeyCode::Char('?') => self.show_help = true,
            KeyCode::Up => self.scroll_focused(-1, 0),
            KeyCode::Down => self.scroll_focused(1, 0),
            KeyCode::Left => self.scroll_focused(0, -4),
            KeyCode::Right => self.scroll_focused(0, 4),
            KeyCode::PageUp => self.scroll_focused(-(PAGE_STEP as isize), 0),
            KeyCode::PageDown => self.scroll_focused(PAGE_STEP as isize, 0),
            KeyCode::Home => self.set_focused_scroll((0, 0)),
            KeyCode::End => {
                let lines = line_count(self.focused_text().as_str()).saturating_sub(1);
                self.set_focused_scroll((lines, 0));
            }
            _ => {}
        }
    }

    fn handle_edit_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc => self.mode = InputMode::Normal,
            KeyCode::Char(ch) => self.insert_at_cursor(ch),
            KeyCode::Enter => self.insert_at_cursor('\n'),
            KeyCode::Backspace => {
                if self.raw_cursor > 0 {
                    let text = remove_char_at(self.state.raw_text(), self.raw_cursor - 1);
                    self.raw_cursor -= 1;
                    self.state.edit_raw(text);
                }
            }
            KeyCode::Delete => {
                if self.raw_cursor < char_len(self.state.raw_text()) {
                    let text = remove_char_at(self.state.raw_text(), self.raw_cursor);
                    self.state.edit_raw(text);
                }
            }
            KeyCode::Left => self.raw_cursor = self.raw_cursor.saturating_sub(1),
            KeyCode::Right => {
                self.raw_cursor = (self.raw_cursor + 1).min(char_len(self.state.raw_text()));
            }
            KeyCode::Up => self.move_cursor_vertically(-1),
            KeyCode::Down => self.move_cursor_vertically(1),
            _ => {}
        }
        self.follow_cursor();
    }

    fn handle_search_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc => {
                self.search_input.clear();
                self.state.set_query("");
                self.mode = InputMode::Normal;
            }
            KeyCode::Enter => self.mode = InputMode::Normal,
            KeyCode::Backspace => {
                self.search_input.pop();
                self.apply_live_query();
            }
            KeyCode::Char(ch) => {
                self.search_input.push(ch);
                self.apply_live_query();
            }
            _ => {}
        }
    }

    fn handle_picker_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc => self.mode = InputMode::Normal,
            KeyCode::Enter => {
                if let Some(record) = self
                    .picker_state
                    .selected()
                    .and_then(|visible| self.picker_matches.get(visible))
                {
                    self.state.select(*record);
                    self.derived_scroll = (0, 0);
                }
                self.mode = InputMode::Normal;
            }
            KeyCode::Up => self.move_picker_selection(-1),
            KeyCode::Down => self.move_picker_selection(1),
            KeyCode::Backspace => {
                self.picker_input.pop();
                self.refresh_picker();
            }
            KeyCode::Char(ch) => {
                self.picker_input.push(ch);
                self.refresh_picker();
            }
            _ => {}
        }
    }

    fn handle_save_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc => self.mode = InputMode::Normal,
            KeyCode::Enter => {
                let path = PathBuf::from(self.save_input.trim());
                if path.as_os_str().is_empty() {
                    self.set_toast("Save cancelled: empty path");
                } else {
                    match store::write_export(&path, self.state.raw_text()) {
                        Ok(()) => self.set_toast(format!("Saved {}", path.display())),
                        Err(err) => self.set_toast(format!("Save failed: {err}")),
                    }
                }
                self.mode = InputMode::Normal;
            }
            KeyCode::Backspace => {
                self.save_input.pop();
            }
            KeyCode::Char(ch) => self.save_input.push(ch),
            _ => {}
        }
    }

    fn switch_record(&mut self, delta: isize) {
        let len = self.state.dataset().len();
        if len == 0 {
            return;
        }
        let current = self.state.selected().min(len - 1) as isize;
        let next = (current + delta).clamp(0, len as isize - 1) as usize;
        if next != self.state.selected() {
            self.state.select(next);
            self.derived_scroll = (0, 0);
        }
    }

    fn jump_to_match(&mut self, delta: isize) {
        let matches = self.state.raw_matches();
        if matches.is_empty() {
            self.set_toast("No matches in the raw pane");
            return;
        }

        let len = matches.len() as isize;
        let cursor = (self.match_cursor as isize + delta).rem_euclid(len) as usize;
        self.match_cursor = cursor;

        let (line, _) = offset_to_line_col(self.state.raw_text(), matches[cursor].start);
        self.raw_scroll.0 = line.saturating_sub(MATCH_CONTEXT_LINES);
        self.set_toast(format!("Match {}/{}", cursor + 1, matches.len()));
    }

    fn reparse(&mut self) {
        match self.state.reparse() {
            Ok(()) => {
                self.match_cursor = 0;
                self.set_toast(format!("Re-parsed {} records", self.state.dataset().len()));
            }
            Err(err) => self.set_toast(format!("Re-parse failed: {err}")),
        }
    }

    fn reload_from_disk(&mut self) {
        let Some(path) = self.source_path.clone() else {
            self.set_toast("No source file to reload");
            return;
        };

        let raw = match store::read_export(&path) {
            Ok(raw) => raw,
            Err(err) => {
                self.set_toast(format!("Reload failed: {err}"));
                return;
            }
        };

        match self.state.load(raw) {
            Ok(()) => {
                self.raw_scroll = (0, 0);
                self.derived_scroll = (0, 0);
                self.raw_cursor = 0;
                self.match_cursor = 0;
                self.set_toast(format!("Loaded {}", path.display()));
            }
            Err(err) => self.set_toast(format!("Reload failed: {err}")),
        }
    }

    fn apply_live_query(&mut self) {
        self.state.set_query(&self.search_input.clone());
        self.match_cursor = 0;
    }

    fn refresh_picker(&mut self) {
        let labels = self.state.record_labels();
        let mut scored: Vec<(i64, usize)> = labels
            .iter()
            .enumerate()
            .filter_map(|(index, label)| {
                picker_score(&self.picker_input, label).map(|score| (score, index))
            })
            .collect();
        scored.sort_by(|a, b| b.0.cmp(&a.0).then(a.1.cmp(&b.1)));

        self.picker_matches = scored.into_iter().map(|(_, index)| index).collect();
        self.picker_state = ListState::default();
        if !self.picker_matches.is_empty() {
            self.picker_state.select(Some(0));
        }
    }

    fn move_picker_selection(&mut self, delta: isize) {
        if self.picker_matches.is_empty() {
            return;
        }
        let len = self.picker_matches.len() as isize;
        let current = self.picker_state.selected().unwrap_or(0) as isize;
        let next = (current + delta).rem_euclid(len) as usize;
        self.picker_state.select(Some(next));
    }

    fn insert_at_cursor(&mut self, ch: char) {
        let text = insert_char_at(self.state.raw_text(), self.raw_cursor, ch);
        self.raw_cursor += 1;
        self.state.edit_raw(text);
    }

    fn move_cursor_vertically(&mut self, delta: isize) {
        let text = self.state.raw_text();
        let (line, col) = offset_to_line_col(text, self.raw_cursor);
        let target = line as isize + delta;
        if target < 0 {
            return;
        }
        self.raw_cursor = line_col_to_offset(text, target as usize, col);
    }

    /// Keeps the edit cursor inside the visible window of the raw pane.
    fn follow_cursor(&mut self) {
        let (line, col) = offset_to_line_col(self.state.raw_text(), self.raw_cursor);
        if line < self.raw_scroll.0 {
            self.raw_scroll.0 = line;
        }
        if col < self.raw_scroll.1 {
            self.raw_scroll.1 = col.saturating_sub(4);
        }
    }

    fn focused_text(&self) -> String {
        match self.focus {
            Focus::Raw => self.state.raw_text().to_owned(),
            Focus::Derived => self.state.derived_text(),
        }
    }

    fn scroll_focused(&mut self, dy: isize, dx: isize) {
        let max_y = line_count(self.focused_text().as_str()).saturating_sub(1);
        let scroll = match self.focus {
            Focus::Raw => &mut self.raw_scroll,
            Focus::Derived => &mut self.derived_scroll,
        };
        scroll.0 = saturating_step(scroll.0, dy).min(max_y);
        scroll.1 = saturating_step(scroll.1, dx);
    }

    fn set_focused_scroll(&mut self, value: (usize, usize)) {
        match self.focus {
            Focus::Raw => self.raw_scroll = value,
            Focus::Derived => self.derived_scroll = value,
        }
    }
}

fn saturating_step(value: usize, delta: isize) -> usize {
    if delta < 0 {
        value.saturating_sub(delta.unsigned_abs())
    } else {
        value.saturating_add(delta as usize)
    }
}

/// Substring-first scoring for the record picker; falls back to a rapidfuzz
/// ratio so near-misses still rank. `None` filters the record out.
pub(crate) fn picker_score(filter: &str, label: &str) -> Option<i64> {
    let filter = filter.trim();
    if filter.is_empty() {
        return Some(0);
    }

    let haystack = label.to_lowercase();
    let needle = filter.to_lowercase();

    if let Some(first) = haystack.find(&needle) {
        let mut score = 100_000i64.saturating_sub(first as i64 * 100);
        score -= haystack.chars().count() as i64;
        if first == 0 {
            score += 10_000;
        }
        return Some(score);
    }

    let ratio = rapidfuzz::fuzz::ratio(needle.chars(), haystack.chars());
    if ratio < PICKER_MIN_RATIO {
        return None;
    }
    Some((ratio * 100.0).round() as i64)
}

pub(crate) fn char_len(text: &str) -> usize {
    text.chars().count()
}

fn line_count(text: &str) -> usize {
    text.split('\n').count()
}

/// Char offset to `(line, column)`, both zero-based. Offsets past the end land
/// on the end of the last line.
pub(crate) fn offset_to_line_col(text: &str, offset: usize) -> (usize, usize) {
    let mut line = 0;
    let mut col = 0;
    for (at, ch) in text.chars().enumerate() {
        if at == offset {
            return (line, col);
        }
        if ch == '\n' {
            line += 1;
            col = 0;
        } else {
            col += 1;
        }
    }
    (line, col)
}

/// `(line, column)` back to a char offset, clamping the column into the line
/// and the line into the text.
pub(crate) fn line_col_to_offset(text: &str, line: usize, col: usize) -> usize {
    let mut offset = 0;
    for (index, text_line) in text.split('\n').enumerate() {
        let len = char_len(text_line);
        if index == line {
            return offset + col.min(len);
        }
        offset += len + 1;
    }
    char_len(text)
}

pub(crate) fn insert_char_at(text: &str, at: usize, ch: char) -> String {
    let mut out = String::with_capacity(text.len() + ch.len_utf8());
    for (index, existing) in text.chars().enumerate() {
        if index == at {
            out.push(ch);
        }
        out.push(existing);
    }
    if at >= char_len(text) {
        out.push(ch);
    }
    out
}

pub(crate) fn remove_char_at(text: &str, at: usize) -> String {
    text.chars()
        .enumerate()
        .filter(|(index, _)| *index != at)
        .map(|(_, ch)| ch)
        .collect()
}

/// Builds styled lines for one pane. Spans must be sorted by start; the
/// highest-priority span wins per char, ties going to the later span.
pub(crate) fn build_pane_lines(
    text: &str,
    spans: &[PaneSpan],
    base: Style,
) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    let mut offset = 0usize;
    let mut head = 0usize;

    for text_line in text.split('\n') {
        let len = char_len(text_line);
        let line_end = offset + len;

        while head < spans.len() && spans[head].span.end <= offset {
            head += 1;
        }

        let mut overlapping: SmallVec<[PaneSpan; 4]> = SmallVec::new();
        let mut probe = head;
        while probe < spans.len() && spans[probe].span.start < line_end {
            if spans[probe].span.end > offset {
                overlapping.push(spans[probe]);
            }
            probe += 1;
        }

        lines.push(styled_line(text_line, offset, &overlapping, base));
        offset = line_end + 1;
    }

    lines
}

fn styled_line(
    text_line: &str,
    line_start: usize,
    spans: &[PaneSpan],
    base: Style,
) -> Line<'static> {
    if spans.is_empty() {
        return Line::from(Span::styled(text_line.to_owned(), base));
    }

    let mut segments: Vec<Span<'static>> = Vec::new();
    let mut buffer = String::new();
    let mut current = base;

    for (col, ch) in text_line.chars().enumerate() {
        let offset = line_start + col;
        let mut style = base;
        let mut best_priority = 0u8;
        for pane_span in spans {
            if pane_span.span.start <= offset
                && offset < pane_span.span.end
                && pane_span.priority >= best_priority
            {
                best_priority = pane_span.priority;
                style = pane_span.style;
            }
        }

        if style != current && !buffer.is_empty() {
            segments.push(Span::styled(std::mem::take(&mut buffer), current));
        }
        current = style;
        buffer.push(ch);
    }
    if !buffer.is_empty() {
        segments.push(Span::styled(buffer, current));
    }

    Line::from(segments)
}

fn draw(frame: &mut Frame<'_>, app: &mut App) {
    let area = frame.size();
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    draw_header(frame, app, layout[0]);
    draw_selector(frame, app, layout[1]);
    draw_panes(frame, app, layout[2]);
    draw_status(frame, app, layout[3]);

    if app.mode == InputMode::Picker {
        draw_picker(frame, app, layout[2]);
    }
    if app.show_help {
        draw_help(frame, layout[2]);
    }
}

fn draw_header(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let source = app
        .source_path
        .as_ref()
        .map(|path| path.display().to_string())
        .unwrap_or_else(|| "demo export".to_owned());
    let mut spans = vec![
        Span::styled(" iris ", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(source),
    ];
    if app.state.dirty() {
        spans.push(Span::styled("  [modified]", theme::dirty_header_style()));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_selector(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let len = app.state.dataset().len();
    let line = if len == 0 {
        Line::from(Span::raw(" no records"))
    } else {
        let index = app.state.selected().min(len - 1);
        let label = app
            .state
            .dataset()
            .get(index)
            .map(|record| record.display_label(index))
            .unwrap_or_default();
        Line::from(vec![
            Span::styled(
                format!(" record {}/{} ", index + 1, len),
                Style::default().fg(theme::FOOTER_LABEL_COLOR),
            ),
            Span::raw(label),
        ])
    };
    frame.render_widget(Paragraph::new(line), area);
}

fn draw_panes(frame: &mut Frame<'_>, app: &mut App, area: Rect) {
    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let search_spans = |matches: Vec<MatchSpan>| -> Vec<PaneSpan> {
        matches
            .into_iter()
            .map(|span| PaneSpan { span, style: theme::search_style(), priority: 2 })
            .collect()
    };

    // Raw pane: static tokens under search matches.
    let mut raw_spans: Vec<PaneSpan> = app
        .state
        .static_tokens()
        .iter()
        .map(|token| PaneSpan {
            span: token.span,
            style: theme::token_style(token.category),
            priority: 1,
        })
        .collect();
    raw_spans.extend(search_spans(app.state.raw_matches()));
    raw_spans.sort_by_key(|pane_span| pane_span.span.start);

    let raw_text = app.state.raw_text().to_owned();
    let raw_lines = build_pane_lines(&raw_text, &raw_spans, Style::default());
    let raw_focused = app.focus == Focus::Raw;
    let raw_title = if app.mode == InputMode::EditRaw {
        "Raw export — EDIT"
    } else {
        "Raw export"
    };
    frame.render_widget(
        Paragraph::new(raw_lines)
            .block(pane_block(raw_title, raw_focused))
            .scroll((app.raw_scroll.0 as u16, app.raw_scroll.1 as u16)),
        panes[0],
    );

    // Derived pane: dirty header marker under search matches.
    let derived_text = app.state.derived_text();
    let mut derived_spans = Vec::new();
    if app.state.dirty() && !derived_text.is_empty() {
        derived_spans.push(PaneSpan {
            span: MatchSpan::new(0, char_len(app.state.derived_header())),
            style: theme::dirty_header_style(),
            priority: 1,
        });
    }
    derived_spans.extend(search_spans(app.state.derived_matches()));
    derived_spans.sort_by_key(|pane_span| pane_span.span.start);

    let derived_lines = build_pane_lines(&derived_text, &derived_spans, Style::default());
    frame.render_widget(
        Paragraph::new(derived_lines)
            .block(pane_block("Parsed view", !raw_focused))
            .scroll((app.derived_scroll.0 as u16, app.derived_scroll.1 as u16)),
        panes[1],
    );

    if app.mode == InputMode::EditRaw {
        set_edit_cursor(frame, app, panes[0]);
    }
}

fn pane_block(title: &str, focused: bool) -> Block<'_> {
    let color = if focused { theme::FOCUS_BORDER } else { theme::IDLE_BORDER };
    Block::default()
        .borders(Borders::ALL)
        .title(title.to_owned())
        .border_style(Style::default().fg(color))
}

fn set_edit_cursor(frame: &mut Frame<'_>, app: &App, pane: Rect) {
    let inner_x = pane.x.saturating_add(1);
    let inner_y = pane.y.saturating_add(1);
    let inner_width = pane.width.saturating_sub(2) as usize;
    let inner_height = pane.height.saturating_sub(2) as usize;
    if inner_width == 0 || inner_height == 0 {
        return;
    }

    let (line, col) = offset_to_line_col(app.state.raw_text(), app.raw_cursor);
    let (scroll_y, scroll_x) = app.raw_scroll;
    if line < scroll_y || line >= scroll_y + inner_height || col < scroll_x {
        return;
    }
    let visible_col = (col - scroll_x).min(inner_width.saturating_sub(1));
    frame.set_cursor(inner_x + visible_col as u16, inner_y + (line - scroll_y) as u16);
}

fn draw_status(frame: &mut Frame<'_>, app: &App, area: Rect) {
    match app.mode {
        InputMode::Search => {
            let matches = app.state.raw_matches().len() + app.state.derived_matches().len();
            let text = format!(" /{}", app.search_input);
            frame.render_widget(
                Paragraph::new(Line::from(vec![
                    Span::raw(text.clone()),
                    Span::styled(
                        format!("   {matches} matches"),
                        Style::default().fg(theme::FOOTER_LABEL_COLOR),
                    ),
                ])),
                area,
            );
            let cursor_x = area.x.saturating_add(text.chars().count() as u16);
            frame.set_cursor(cursor_x.min(area.x + area.width.saturating_sub(1)), area.y);
        }
        InputMode::SavePath => {
            let text = format!(" Save as: {}", app.save_input);
            frame.render_widget(Paragraph::new(text.clone()), area);
            let cursor_x = area.x.saturating_add(text.chars().count() as u16);
            frame.set_cursor(cursor_x.min(area.x + area.width.saturating_sub(1)), area.y);
        }
        _ => {
            if let Some(message) = app.active_toast() {
                frame.render_widget(
                    Paragraph::new(Span::styled(
                        format!(" {message}"),
                        Style::default().fg(Color::Yellow),
                    )),
                    area,
                );
                return;
            }
            frame.render_widget(Paragraph::new(footer_line(app.mode)), area);
        }
    }
}

fn footer_line(mode: InputMode) -> Line<'static> {
    let mut spans = Vec::new();
    for (key, label) in hints::footer_hints(mode) {
        spans.push(Span::styled(
            format!(" {key}"),
            Style::default().fg(theme::FOOTER_KEY_COLOR),
        ));
        spans.push(Span::styled(
            format!(" {label} "),
            Style::default().fg(theme::FOOTER_LABEL_COLOR),
        ));
    }
    Line::from(spans)
}

fn draw_picker(frame: &mut Frame<'_>, app: &mut App, area: Rect) {
    let overlay = centered_rect(area, 70, 70);
    frame.render_widget(Clear, overlay);

    let block = Block::default()
        .borders(Borders::ALL)
        .title("Records")
        .border_style(Style::default().fg(theme::FOCUS_BORDER));
    let inner = block.inner(overlay);
    frame.render_widget(block, overlay);

    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(inner);

    frame.render_widget(
        Paragraph::new(format!(" filter: {}", app.picker_input)),
        sections[0],
    );

    let labels = app.state.record_labels();
    let items: Vec<ListItem<'_>> = app
        .picker_matches
        .iter()
        .filter_map(|index| labels.get(*index))
        .map(|label| ListItem::new(label.clone()))
        .collect();
    let list = List::new(items)
        .highlight_style(Style::default().bg(theme::SEARCH_BG).fg(Color::Black));
    frame.render_stateful_widget(list, sections[1], &mut app.picker_state);
}

fn draw_help(frame: &mut Frame<'_>, area: Rect) {
    let overlay = centered_rect(area, 60, 60);
    frame.render_widget(Clear, overlay);

    let mut lines = vec![
        Line::from(Span::styled("Keys", Style::default().add_modifier(Modifier::BOLD))),
        Line::from(""),
    ];
    for (key, label) in hints::footer_hints(InputMode::Normal) {
        lines.push(Line::from(vec![
            Span::styled(format!("  {key:>5}  "), Style::default().fg(theme::FOOTER_KEY_COLOR)),
            Span::raw(label),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from("Search is case-insensitive and capped at 5000 matches."));
    lines.push(Line::from("Edits mark the parsed view stale until re-parsed with r."));

    frame.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title("Help")
                .border_style(Style::default().fg(theme::FOCUS_BORDER)),
        ),
        overlay,
    );
}

fn centered_rect(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);
    horizontal[1]
}

struct TerminalSession {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TerminalSession {
    fn new() -> Result<Self, Box<dyn Error>> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).map_err(|err| {
            teardown_terminal();
            err
        })?;

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).map_err(|err| {
            teardown_terminal();
            err
        })?;
        terminal.clear().map_err(|err| {
            teardown_terminal();
            err
        })?;

        Ok(Self { terminal })
    }

    fn draw(&mut self, draw_fn: impl FnOnce(&mut Frame<'_>)) -> io::Result<()> {
        self.terminal.draw(draw_fn)?;
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = self.terminal.show_cursor();
        teardown_terminal();
    }
}

fn teardown_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen);
}

#[cfg(test)]
mod tests;
