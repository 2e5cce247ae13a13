//! The terminal shell: chrome, drag wiring, and widget rendering.
//!
//! Routes keys and pointer events while the window is open, hosts the
//! cursor engine's rendered output, and draws the whole window (chrome
//! row, prompt rows, and the visible slice of content) into the host
//! frame. While closed it renders a dock hint; the sibling reopen path
//! goes through the shared open flag.

use termfolio_core::{ContentSet, LineKind, VirtualLines, WidgetConfig};
use termfolio_surface::input::{InputEvent, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use termfolio_surface::render::{CellStyle, FrameCell, Rect, RenderFrame, TermColor, TextRole};
use termfolio_surface::style::{StyleToken, ThemeSpec};
use termfolio_surface::widgets::{window_chrome_spec, ChromeButton, WindowChromeSpec};

use crate::cursor::{CursorEngine, CursorOutcome, Viewport};
use crate::keymap::{KeyChord, KeyCommand, Keymap, WindowScope};
use crate::window::{DragState, OpenFlag, WindowState};

/// What an input event did at the shell level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellOutcome {
    Ignored,
    Handled,
    /// The window just closed (Escape or the close button).
    Closed,
    /// A command the app shell owns (theme cycling, quitting).
    App(KeyCommand),
}

/// The draggable faux terminal window.
#[derive(Debug)]
pub struct TerminalShell {
    window: WindowState,
    drag: DragState,
    engine: CursorEngine,
    lines: VirtualLines,
    title: String,
    chrome: WindowChromeSpec,
    keymap: Keymap,
    host: (usize, usize),
}

impl TerminalShell {
    #[must_use]
    pub fn new(config: &WidgetConfig, content: &ContentSet, open: OpenFlag) -> Self {
        let lines = VirtualLines::derive(
            &config.path_line,
            &config.branch,
            &config.info_text,
            content,
        );
        let window = WindowState::new(open, config.window);
        let content_rows = window.preset_size().1.saturating_sub(2);
        Self {
            window,
            drag: DragState::default(),
            engine: CursorEngine::new(Viewport::new(content_rows, 1)),
            lines,
            title: config.title.clone(),
            chrome: window_chrome_spec(),
            keymap: Keymap::with_default_bindings(),
            host: (0, 0),
        }
    }

    #[must_use]
    pub fn window(&self) -> &WindowState {
        &self.window
    }

    #[must_use]
    pub fn engine(&self) -> &CursorEngine {
        &self.engine
    }

    #[must_use]
    pub fn lines(&self) -> &VirtualLines {
        &self.lines
    }

    #[must_use]
    pub fn scope(&self) -> WindowScope {
        if !self.window.is_open() {
            WindowScope::Closed
        } else if self.window.is_minimized() {
            WindowScope::Minimized
        } else {
            WindowScope::Active
        }
    }

    /// Footer hint entries for the current window state.
    #[must_use]
    pub fn hints(&self) -> Vec<(String, &'static str)> {
        self.keymap.hints(self.scope())
    }

    pub fn set_host_size(&mut self, host: (usize, usize)) {
        self.host = host;
        let origin = self.window.origin();
        self.window.move_to(origin, host);
    }

    pub fn update(&mut self, event: InputEvent) -> ShellOutcome {
        match event {
            InputEvent::Key(key_event) => self.handle_key(key_event),
            InputEvent::Mouse(mouse) => self.handle_mouse(mouse),
            InputEvent::Resize(resize) => {
                self.set_host_size((resize.width, resize.height));
                ShellOutcome::Handled
            }
            InputEvent::Tick => ShellOutcome::Ignored,
        }
    }

    fn handle_key(&mut self, event: KeyEvent) -> ShellOutcome {
        let chord = KeyChord::from_event(event);
        let scope = self.scope();
        if let Some(command) = self.keymap.resolve(scope, chord) {
            // While navigation is live, chrome keys still count as "any
            // other key" for the cursor state machine: they break an armed
            // chord and clear the selection. Escape short-circuits.
            if scope == WindowScope::Active
                && matches!(
                    command,
                    KeyCommand::ToggleMinimize | KeyCommand::ToggleMaximize
                )
            {
                let _ = self.engine.handle_key(event.key, &self.lines);
            }
            return self.apply_command(command);
        }

        // Navigation and the selection chord reach the engine only while
        // the window is open and not minimized, and only unmodified.
        if self.scope() != WindowScope::Active
            || event.modifiers.ctrl
            || event.modifiers.alt
        {
            return ShellOutcome::Ignored;
        }
        match self.engine.handle_key(event.key, &self.lines) {
            CursorOutcome::CloseRequested => {
                self.window.close();
                ShellOutcome::Closed
            }
            CursorOutcome::Handled => ShellOutcome::Handled,
        }
    }

    fn apply_command(&mut self, command: KeyCommand) -> ShellOutcome {
        match command {
            KeyCommand::CloseWindow => {
                self.window.close();
                ShellOutcome::Closed
            }
            KeyCommand::ReopenWindow => {
                self.window.reopen();
                ShellOutcome::Handled
            }
            KeyCommand::ToggleMinimize => {
                self.window.toggle_minimized();
                ShellOutcome::Handled
            }
            KeyCommand::ToggleMaximize => {
                self.window.toggle_maximized();
                self.sync_viewport();
                // The grown window may poke past the host edge.
                let origin = self.window.origin();
                self.window.move_to(origin, self.host);
                ShellOutcome::Handled
            }
            KeyCommand::CycleTheme | KeyCommand::Quit => ShellOutcome::App(command),
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) -> ShellOutcome {
        if !self.window.is_open() {
            if mouse.kind == MouseEventKind::Down(MouseButton::Left)
                && self.dock_rect().contains(mouse.column, mouse.row)
            {
                self.window.reopen();
                return ShellOutcome::Handled;
            }
            return ShellOutcome::Ignored;
        }

        let (ox, oy) = self.window.origin();
        let (width, _) = self.window.frame_size();
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let on_title_bar =
                    mouse.row == oy && mouse.column >= ox && mouse.column < ox + width;
                if !on_title_bar {
                    return ShellOutcome::Ignored;
                }
                let offset = mouse.column - ox;
                if let Some(button) = ChromeButton::at_column_offset(offset) {
                    return self.press_chrome_button(button);
                }
                self.drag.press((mouse.column, mouse.row), (ox, oy));
                ShellOutcome::Handled
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                let Some(origin) = self.drag.drag_to((mouse.column, mouse.row)) else {
                    return ShellOutcome::Ignored;
                };
                self.window.move_to(origin, self.host);
                ShellOutcome::Handled
            }
            MouseEventKind::Up(MouseButton::Left) => {
                self.drag.release();
                ShellOutcome::Handled
            }
            MouseEventKind::WheelUp | MouseEventKind::WheelDown
                if !self.window.is_minimized() =>
            {
                let delta = if mouse.kind == MouseEventKind::WheelUp {
                    -1
                } else {
                    1
                };
                self.engine
                    .viewport_mut()
                    .scroll_rows(delta, self.lines.total_lines());
                ShellOutcome::Handled
            }
            _ => ShellOutcome::Ignored,
        }
    }

    fn press_chrome_button(&mut self, button: ChromeButton) -> ShellOutcome {
        match button {
            ChromeButton::Close => self.apply_command(KeyCommand::CloseWindow),
            ChromeButton::Minimize => self.apply_command(KeyCommand::ToggleMinimize),
            ChromeButton::Maximize => self.apply_command(KeyCommand::ToggleMaximize),
        }
    }

    fn sync_viewport(&mut self) {
        let content_rows = self.window.preset_size().1.saturating_sub(2);
        self.engine.viewport_mut().set_height(content_rows);
        let row = self.engine.row();
        self.engine.viewport_mut().ensure_visible(row);
    }

    fn dock_rect(&self) -> Rect {
        Rect {
            x: 1,
            y: self.host.1.saturating_sub(2),
            width: dock_label().chars().count(),
            height: 1,
        }
    }

    /// Draw the widget (window or dock hint) into the host frame.
    pub fn render(&self, frame: &mut RenderFrame) {
        if !self.window.is_open() {
            let dock = self.dock_rect();
            frame.draw_text(dock.x, dock.y, dock_label(), TextRole::Muted);
            return;
        }

        let theme = frame.theme();
        let (ox, oy) = self.window.origin();
        let (width, height) = self.window.frame_size();
        let surface = TermColor::Ansi256(theme.color(StyleToken::Surface));
        let border = TermColor::Ansi256(theme.color(StyleToken::Muted));
        let inner = frame.draw_panel(
            Rect {
                x: ox,
                y: oy,
                width,
                height,
            },
            "",
            self.chrome.border,
            border,
            surface,
        );

        self.render_title_bar(frame, ox, oy, width, surface);
        if !self.window.is_minimized() {
            self.render_content(frame, inner, surface);
        }
    }

    fn render_title_bar(
        &self,
        frame: &mut RenderFrame,
        ox: usize,
        oy: usize,
        width: usize,
        surface: TermColor,
    ) {
        let theme = frame.theme();
        let button_color = |button: ChromeButton| {
            TermColor::Ansi256(match button {
                ChromeButton::Close => theme.color(StyleToken::Danger),
                ChromeButton::Minimize => theme.color(StyleToken::Info),
                ChromeButton::Maximize => theme.color(StyleToken::Success),
            })
        };
        // Blank the button strip so the border dashes don't run through it.
        let fg = TermColor::Ansi256(theme.color(StyleToken::Foreground));
        let strip = " ".repeat(self.chrome.title_start_offset.saturating_sub(1));
        frame.draw_styled_text(ox + 1, oy, &strip, fg, surface, false);
        for button in ChromeButton::ALL {
            let x = ox + button.column_offset();
            frame.set_cell(
                x,
                oy,
                FrameCell {
                    glyph: ChromeButton::GLYPH,
                    style: CellStyle {
                        fg: button_color(button),
                        bg: surface,
                        bold: false,
                        dim: false,
                        underline: false,
                    },
                },
            );
        }

        let title_x = ox + self.chrome.title_start_offset;
        let title_max = (ox + width).saturating_sub(title_x + 2);
        let title: String = self.title.chars().take(title_max).collect();
        frame.draw_styled_text(title_x, oy, &title, fg, surface, theme.typography.title_bold);
    }

    fn render_content(&self, frame: &mut RenderFrame, inner: Rect, surface: TermColor) {
        let theme = frame.theme();
        let viewport = self.engine.viewport();
        let first = viewport.first_row();
        let selection = TermColor::Ansi256(theme.color(StyleToken::Selection));

        for slot in 0..viewport.visible_rows().min(inner.height) {
            let row = first + slot;
            let Some(line) = self.lines.line(row) else {
                break;
            };
            let y = inner.y + slot;
            let selected = self.engine.selected() == Some(row);
            let bg = if selected { selection } else { surface };
            if selected {
                frame.fill_bg(
                    Rect {
                        x: inner.x,
                        y,
                        width: inner.width,
                        height: 1,
                    },
                    bg,
                );
            }
            let role = match line.kind {
                LineKind::Path => TextRole::Accent,
                LineKind::Echo => TextRole::Info,
                LineKind::ItemTitle => TextRole::Focus,
                LineKind::ItemBody => TextRole::Primary,
            };
            let fg = frame.color_for_role(role);
            let text: String = line.text.chars().take(inner.width).collect();
            frame.draw_styled_text(inner.x, y, &text, fg, bg, role == TextRole::Focus);

            if row == self.engine.row() {
                self.render_cursor(frame, inner, y, theme);
            }
        }
    }

    fn render_cursor(&self, frame: &mut RenderFrame, inner: Rect, y: usize, theme: ThemeSpec) {
        let column = self.engine.column();
        if column >= inner.width {
            return;
        }
        let x = inner.x + column;
        let glyph = frame.cell(x, y).map_or(' ', |cell| cell.glyph);
        frame.set_cell(
            x,
            y,
            FrameCell {
                glyph,
                style: CellStyle {
                    fg: TermColor::Ansi256(theme.color(StyleToken::Background)),
                    bg: TermColor::Ansi256(theme.color(StyleToken::Cursor)),
                    bold: false,
                    dim: false,
                    underline: false,
                },
            },
        );
    }
}

fn dock_label() -> &'static str {
    "[ termfolio closed: press o or click here to reopen ]"
}
