//! Cursor and selection engine.
//!
//! Maps raw key presses to a 2-D logical cursor over the virtual line
//! list, tracks the single selected line toggled by the `yy` chord, and
//! keeps the addressed row scrolled into view. Keys are matched
//! case-insensitively; unrecognized keys move nothing but still break an
//! armed chord and clear the selection.

use termfolio_core::VirtualLines;
use termfolio_surface::input::Key;

/// Scroll window over the virtual line list.
///
/// Offsets are in sub-row units of `line_height` so the flush-top /
/// flush-bottom arithmetic holds for any fixed per-line height; the shell
/// uses a height of one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    top: usize,
    height: usize,
    line_height: usize,
}

impl Viewport {
    #[must_use]
    pub fn new(height: usize, line_height: usize) -> Self {
        Self {
            top: 0,
            height,
            line_height: line_height.max(1),
        }
    }

    /// Scrolled offset of the viewport top.
    #[must_use]
    pub fn top(&self) -> usize {
        self.top
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    pub fn set_height(&mut self, height: usize) {
        self.height = height;
    }

    /// First row with any part inside the viewport.
    #[must_use]
    pub fn first_row(&self) -> usize {
        self.top / self.line_height
    }

    /// Rows that fit fully inside the viewport.
    #[must_use]
    pub fn visible_rows(&self) -> usize {
        self.height / self.line_height
    }

    /// Scroll so `row` is inside the viewport: rows above the top become
    /// flush with the top, rows below the bottom become flush with the
    /// bottom, visible rows leave the offset untouched.
    pub fn ensure_visible(&mut self, row: usize) {
        let offset = row * self.line_height;
        if offset < self.top {
            self.top = offset;
        } else if offset + self.line_height > self.top + self.height {
            self.top = (offset + self.line_height).saturating_sub(self.height);
        }
    }

    /// Wheel scrolling: move by whole rows, clamped to the content extent.
    pub fn scroll_rows(&mut self, delta: isize, total_lines: usize) {
        let max_top = (total_lines * self.line_height).saturating_sub(self.height);
        let moved = self.top as isize + delta * self.line_height as isize;
        self.top = moved.clamp(0, max_top as isize) as usize;
    }
}

/// What a key press did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorOutcome {
    /// Escape: the window should close; nothing else was touched.
    CloseRequested,
    /// The key was consumed (navigation, chord progress, or a no-op that
    /// still reset chord and selection state).
    Handled,
}

/// The cursor/selection state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CursorEngine {
    row: usize,
    column: usize,
    selected: Option<usize>,
    pending_chord: Option<char>,
    viewport: Viewport,
}

impl CursorEngine {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            row: 0,
            column: 0,
            selected: None,
            pending_chord: None,
            viewport,
        }
    }

    #[must_use]
    pub fn row(&self) -> usize {
        self.row
    }

    #[must_use]
    pub fn column(&self) -> usize {
        self.column
    }

    /// Row marked by the selection chord, if any.
    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn viewport_mut(&mut self) -> &mut Viewport {
        &mut self.viewport
    }

    /// True between the first and second `y` of the selection chord.
    #[must_use]
    pub fn chord_armed(&self) -> bool {
        self.pending_chord == Some('y')
    }

    /// Feed one key press. The shell only routes unmodified keys here.
    pub fn handle_key(&mut self, key: Key, lines: &VirtualLines) -> CursorOutcome {
        if key == Key::Escape {
            return CursorOutcome::CloseRequested;
        }

        let pressed = match key {
            Key::Char(ch) => Some(ch.to_ascii_lowercase()),
            _ => None,
        };

        // Second `y` of the chord: mark the current row and stop without
        // moving the cursor or re-scrolling.
        if pressed == Some('y') && self.chord_armed() {
            self.selected = Some(self.row);
            self.pending_chord = None;
            return CursorOutcome::Handled;
        }
        self.pending_chord = pressed;

        let max_row = lines.total_lines().saturating_sub(1);
        match (key, pressed) {
            (Key::Up, _) | (_, Some('k')) => {
                self.row = self.row.saturating_sub(1);
                self.column = self.column.min(lines.line_len(self.row));
            }
            (Key::Down, _) | (_, Some('j')) => {
                self.row = (self.row + 1).min(max_row);
                self.column = self.column.min(lines.line_len(self.row));
            }
            (Key::Left, _) | (_, Some('h')) => {
                self.column = self.column.saturating_sub(1);
            }
            (Key::Right, _) | (_, Some('l')) => {
                self.column = (self.column + 1).min(lines.line_len(self.row));
            }
            _ => {}
        }

        self.selected = None;
        self.viewport.ensure_visible(self.row);
        CursorOutcome::Handled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use termfolio_core::{ContentSet, Project};

    fn project() -> Project {
        Project {
            title: "widget".to_owned(),
            description: "a demo".to_owned(),
            repo_url: "https://example.com".to_owned(),
            technologies: Vec::new(),
        }
    }

    fn lines_with_projects(count: usize) -> VirtualLines {
        let items = (0..count).map(|_| project()).collect();
        VirtualLines::derive("~/p", "main", "hi", &ContentSet::Projects(items))
    }

    fn engine() -> CursorEngine {
        CursorEngine::new(Viewport::new(10, 1))
    }

    fn press(engine: &mut CursorEngine, lines: &VirtualLines, keys: &[Key]) {
        for key in keys {
            engine.handle_key(*key, lines);
        }
    }

    #[test]
    fn down_never_exceeds_last_row() {
        let lines = lines_with_projects(1); // 5 rows total
        let mut engine = engine();
        press(
            &mut engine,
            &lines,
            &[Key::Char('j'), Key::Char('j'), Key::Char('j')],
        );
        assert_eq!(engine.row(), 3);
        press(&mut engine, &lines, &[Key::Char('j')]);
        assert_eq!(engine.row(), 4);
        press(&mut engine, &lines, &[Key::Char('j')]);
        assert_eq!(engine.row(), 4);
    }

    #[test]
    fn up_never_goes_below_zero() {
        let lines = lines_with_projects(1);
        let mut engine = engine();
        press(&mut engine, &lines, &[Key::Char('k'), Key::Up, Key::Char('k')]);
        assert_eq!(engine.row(), 0);
    }

    #[test]
    fn arrows_match_vi_keys() {
        let lines = lines_with_projects(1);
        let mut engine = engine();
        press(&mut engine, &lines, &[Key::Down, Key::Down]);
        assert_eq!(engine.row(), 2);
        press(&mut engine, &lines, &[Key::Up]);
        assert_eq!(engine.row(), 1);
    }

    #[test]
    fn keys_match_case_insensitively() {
        let lines = lines_with_projects(1);
        let mut engine = engine();
        press(&mut engine, &lines, &[Key::Char('J'), Key::Char('J')]);
        assert_eq!(engine.row(), 2);
        press(&mut engine, &lines, &[Key::Char('K')]);
        assert_eq!(engine.row(), 1);
    }

    #[test]
    fn empty_content_clamps_to_header_rows() {
        let lines =
            VirtualLines::derive("~/p", "main", "hi", &ContentSet::Projects(Vec::new()));
        let mut engine = engine();
        press(&mut engine, &lines, &[Key::Char('j')]);
        assert_eq!(engine.row(), 1);
        press(&mut engine, &lines, &[Key::Char('j')]);
        assert_eq!(engine.row(), 1);
    }

    #[test]
    fn double_y_selects_current_row() {
        let lines = lines_with_projects(1);
        let mut engine = engine();
        press(&mut engine, &lines, &[Key::Char('j'), Key::Char('j')]);
        press(&mut engine, &lines, &[Key::Char('y')]);
        assert!(engine.chord_armed());
        assert_eq!(engine.selected(), None);
        press(&mut engine, &lines, &[Key::Char('y')]);
        assert_eq!(engine.selected(), Some(2));
        assert!(!engine.chord_armed());
    }

    #[test]
    fn selecting_press_does_not_scroll() {
        let lines = lines_with_projects(4); // 14 rows
        let mut engine = CursorEngine::new(Viewport::new(3, 1));
        for _ in 0..9 {
            engine.handle_key(Key::Char('j'), &lines);
        }
        let top_before = engine.viewport().top();
        press(&mut engine, &lines, &[Key::Char('y'), Key::Char('y')]);
        assert_eq!(engine.viewport().top(), top_before);
        assert_eq!(engine.selected(), Some(9));
    }

    #[test]
    fn intervening_key_cancels_the_chord() {
        let lines = lines_with_projects(1);
        let mut engine = engine();
        press(
            &mut engine,
            &lines,
            &[Key::Char('y'), Key::Char('x'), Key::Char('y')],
        );
        assert_eq!(engine.selected(), None);
        assert!(engine.chord_armed());
    }

    #[test]
    fn navigation_clears_selection() {
        let lines = lines_with_projects(1);
        let mut engine = engine();
        press(&mut engine, &lines, &[Key::Char('y'), Key::Char('y')]);
        assert_eq!(engine.selected(), Some(0));
        press(&mut engine, &lines, &[Key::Char('j')]);
        assert_eq!(engine.selected(), None);
    }

    #[test]
    fn unrecognized_key_clears_selection_without_moving() {
        let lines = lines_with_projects(1);
        let mut engine = engine();
        press(&mut engine, &lines, &[Key::Char('j')]);
        press(&mut engine, &lines, &[Key::Char('y'), Key::Char('y')]);
        press(&mut engine, &lines, &[Key::Char('x')]);
        assert_eq!(engine.row(), 1);
        assert_eq!(engine.selected(), None);
    }

    #[test]
    fn escape_short_circuits_all_state() {
        let lines = lines_with_projects(1);
        let mut engine = engine();
        press(&mut engine, &lines, &[Key::Char('y'), Key::Char('y')]);
        let outcome = engine.handle_key(Key::Escape, &lines);
        assert_eq!(outcome, CursorOutcome::CloseRequested);
        // Escape changes nothing by itself.
        assert_eq!(engine.selected(), Some(0));
    }

    // Column clamping replaces the unbounded growth of the source
    // material; the bound is the addressed line's length.
    #[test]
    fn column_stops_at_line_end() {
        let lines = lines_with_projects(1);
        let mut engine = engine();
        press(&mut engine, &lines, &[Key::Char('j'), Key::Char('j')]);
        let len = lines.line_len(2);
        for _ in 0..len + 10 {
            engine.handle_key(Key::Char('l'), &lines);
        }
        assert_eq!(engine.column(), len);
    }

    #[test]
    fn column_floors_at_zero() {
        let lines = lines_with_projects(1);
        let mut engine = engine();
        press(&mut engine, &lines, &[Key::Char('h'), Key::Left]);
        assert_eq!(engine.column(), 0);
    }

    #[test]
    fn row_change_reclamps_column() {
        let lines = lines_with_projects(1);
        let mut engine = engine();
        // Row 1 (`$ echo "hi"`) is longer than row 2 (`widget`).
        press(&mut engine, &lines, &[Key::Char('j')]);
        for _ in 0..lines.line_len(1) {
            engine.handle_key(Key::Char('l'), &lines);
        }
        assert!(engine.column() > lines.line_len(2));
        press(&mut engine, &lines, &[Key::Char('j')]);
        assert_eq!(engine.column(), lines.line_len(2));
    }

    #[test]
    fn viewport_scrolls_rows_above_to_flush_top() {
        let mut viewport = Viewport::new(4, 1);
        viewport.ensure_visible(10);
        assert_eq!(viewport.top(), 7);
        viewport.ensure_visible(2);
        assert_eq!(viewport.top(), 2);
    }

    #[test]
    fn viewport_scrolls_rows_below_to_flush_bottom() {
        let mut viewport = Viewport::new(4, 1);
        viewport.ensure_visible(5);
        assert_eq!(viewport.top(), 2);
        assert_eq!(viewport.first_row(), 2);
    }

    #[test]
    fn viewport_leaves_visible_rows_alone() {
        let mut viewport = Viewport::new(4, 1);
        viewport.ensure_visible(5);
        let top = viewport.top();
        viewport.ensure_visible(3);
        assert_eq!(viewport.top(), top);
    }

    #[test]
    fn viewport_respects_line_height() {
        let mut viewport = Viewport::new(12, 3);
        viewport.ensure_visible(6);
        // offset 18 + height 3 must fit inside top + 12.
        assert_eq!(viewport.top(), 9);
        viewport.ensure_visible(1);
        assert_eq!(viewport.top(), 3);
    }

    #[test]
    fn wheel_scroll_clamps_to_content() {
        let mut viewport = Viewport::new(4, 1);
        viewport.scroll_rows(-3, 10);
        assert_eq!(viewport.top(), 0);
        viewport.scroll_rows(100, 10);
        assert_eq!(viewport.top(), 6);
    }

    #[test]
    fn cursor_navigation_keeps_row_in_view() {
        let lines = lines_with_projects(4); // 14 rows
        let mut engine = CursorEngine::new(Viewport::new(3, 1));
        for _ in 0..5 {
            engine.handle_key(Key::Char('j'), &lines);
        }
        assert_eq!(engine.row(), 5);
        assert_eq!(engine.viewport().top(), 3);
        for _ in 0..5 {
            engine.handle_key(Key::Char('k'), &lines);
        }
        assert_eq!(engine.viewport().top(), 0);
    }
}
