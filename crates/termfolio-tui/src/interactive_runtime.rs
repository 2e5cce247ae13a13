//! Interactive crossterm runtime for the widget.
//!
//! Owns the terminal session (raw mode, alternate screen, mouse capture),
//! maps backend events into surface input events, and repaints the app
//! frame when state changes.

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event as TerminalEvent,
    KeyCode as TerminalKeyCode, KeyEventKind, KeyModifiers,
    MouseButton as TerminalMouseButton, MouseEventKind as TerminalMouseEventKind,
};
use crossterm::style::{
    Attribute, Color, Print, SetAttribute, SetBackgroundColor, SetForegroundColor,
};
use crossterm::terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{execute, queue};
use termfolio_core::{ContentSet, Project, WidgetConfig};
use termfolio_surface::input::{
    InputEvent, Key, KeyEvent, Modifiers, MouseButton, MouseEvent, MouseEventKind, ResizeEvent,
};
use termfolio_surface::render::{CellStyle, RenderFrame, TermColor};

use crate::app::{App, Command};
use crate::theme::env_palette_override;

const TICK_INTERVAL: Duration = Duration::from_millis(250);

/// Run the interactive widget until quit.
pub fn run() -> Result<(), String> {
    let config = WidgetConfig::load_or_default(&config_path())
        .map_err(|err| format!("load config: {err}"))?;
    let content = load_content(&content_path())?;
    let palette = env_palette_override().unwrap_or_else(|| config.palette.clone());
    let mut app = App::new(&config, &content, &palette);

    let mut session =
        TerminalSession::enter().map_err(|err| format!("enter terminal mode: {err}"))?;

    let (width, height) = terminal_size().map_err(|err| format!("read terminal size: {err}"))?;
    let _ = app.update(InputEvent::Resize(ResizeEvent { width, height }));

    let mut dirty = true;
    loop {
        if dirty {
            let frame = app.render();
            render_frame(&mut session.stdout, &frame)
                .map_err(|err| format!("render frame: {err}"))?;
            dirty = false;
        }

        if app.quitting() {
            break;
        }

        let has_event =
            event::poll(TICK_INTERVAL).map_err(|err| format!("poll terminal event: {err}"))?;
        if !has_event {
            continue;
        }

        let terminal_event = event::read().map_err(|err| format!("read terminal event: {err}"))?;
        if is_interrupt(&terminal_event) {
            break;
        }

        if let Some(input) = map_terminal_event(terminal_event) {
            let command = app.update(input);
            dirty = true;
            if command == Command::Quit {
                break;
            }
        }
    }

    Ok(())
}

/// Non-interactive fallback: one rendered frame as plain text.
#[must_use]
pub fn render_snapshot_text() -> String {
    let config = WidgetConfig::default();
    let content = sample_content();
    let app = App::new(&config, &content, &config.palette);
    let mut text = app.render().snapshot();
    text.push('\n');
    text
}

/// Built-in records shown when no content file is present. The real data
/// source stays outside this crate.
#[must_use]
pub fn sample_content() -> ContentSet {
    ContentSet::Projects(vec![
        Project {
            title: "termfolio".to_owned(),
            description: "this widget: a draggable terminal window for a portfolio".to_owned(),
            repo_url: "https://github.com/example/termfolio".to_owned(),
            technologies: vec!["rust".to_owned(), "crossterm".to_owned()],
        },
        Project {
            title: "linkless".to_owned(),
            description: "static site generator with zero client javascript".to_owned(),
            repo_url: "https://github.com/example/linkless".to_owned(),
            technologies: vec!["rust".to_owned()],
        },
        Project {
            title: "promptd".to_owned(),
            description: "shell prompt daemon with async git status".to_owned(),
            repo_url: "https://github.com/example/promptd".to_owned(),
            technologies: vec!["rust".to_owned(), "tokio".to_owned()],
        },
    ])
}

fn load_content(path: &Path) -> Result<ContentSet, String> {
    if path.exists() {
        ContentSet::from_json_file(path).map_err(|err| format!("load content: {err}"))
    } else {
        Ok(sample_content())
    }
}

fn config_path() -> PathBuf {
    resolve_override_path(
        std::env::var("TERMFOLIO_CONFIG").ok(),
        std::env::var("HOME").ok(),
        "termfolio.toml",
    )
}

fn content_path() -> PathBuf {
    resolve_override_path(
        std::env::var("TERMFOLIO_CONTENT").ok(),
        std::env::var("HOME").ok(),
        "content.json",
    )
}

fn resolve_override_path(
    override_value: Option<String>,
    home: Option<String>,
    file_name: &str,
) -> PathBuf {
    if let Some(path) = override_value {
        if !path.trim().is_empty() {
            return PathBuf::from(path);
        }
    }
    let mut path = PathBuf::from(home.unwrap_or_else(|| ".".to_owned()));
    path.push(".config");
    path.push("termfolio");
    path.push(file_name);
    path
}

fn terminal_size() -> io::Result<(usize, usize)> {
    let (width, height) = terminal::size()?;
    Ok((usize::from(width), usize::from(height)))
}

fn map_terminal_event(event: TerminalEvent) -> Option<InputEvent> {
    match event {
        TerminalEvent::Resize(width, height) => Some(InputEvent::Resize(ResizeEvent {
            width: usize::from(width),
            height: usize::from(height),
        })),
        TerminalEvent::Key(key_event) => {
            if !matches!(key_event.kind, KeyEventKind::Press | KeyEventKind::Repeat) {
                return None;
            }

            let key = match key_event.code {
                TerminalKeyCode::Char(ch) => Key::Char(ch),
                TerminalKeyCode::Enter => Key::Enter,
                TerminalKeyCode::Esc => Key::Escape,
                TerminalKeyCode::Tab => Key::Tab,
                TerminalKeyCode::Backspace => Key::Backspace,
                TerminalKeyCode::Up => Key::Up,
                TerminalKeyCode::Down => Key::Down,
                TerminalKeyCode::Left => Key::Left,
                TerminalKeyCode::Right => Key::Right,
                _ => return None,
            };

            let modifiers = Modifiers {
                shift: key_event.modifiers.contains(KeyModifiers::SHIFT),
                ctrl: key_event.modifiers.contains(KeyModifiers::CONTROL),
                alt: key_event.modifiers.contains(KeyModifiers::ALT),
            };

            Some(InputEvent::Key(KeyEvent { key, modifiers }))
        }
        TerminalEvent::Mouse(mouse_event) => {
            let kind = match mouse_event.kind {
                TerminalMouseEventKind::Down(button) => {
                    MouseEventKind::Down(map_mouse_button(button)?)
                }
                TerminalMouseEventKind::Up(button) => MouseEventKind::Up(map_mouse_button(button)?),
                TerminalMouseEventKind::Drag(button) => {
                    MouseEventKind::Drag(map_mouse_button(button)?)
                }
                TerminalMouseEventKind::ScrollUp => MouseEventKind::WheelUp,
                TerminalMouseEventKind::ScrollDown => MouseEventKind::WheelDown,
                _ => return None,
            };
            Some(InputEvent::Mouse(MouseEvent {
                kind,
                column: usize::from(mouse_event.column),
                row: usize::from(mouse_event.row),
            }))
        }
        _ => None,
    }
}

fn map_mouse_button(button: TerminalMouseButton) -> Option<MouseButton> {
    match button {
        TerminalMouseButton::Left => Some(MouseButton::Left),
        TerminalMouseButton::Right => Some(MouseButton::Right),
        TerminalMouseButton::Middle => None,
    }
}

fn is_interrupt(event: &TerminalEvent) -> bool {
    let TerminalEvent::Key(key_event) = event else {
        return false;
    };

    if !matches!(key_event.kind, KeyEventKind::Press | KeyEventKind::Repeat) {
        return false;
    }

    matches!(key_event.code, TerminalKeyCode::Char('c'))
        && key_event.modifiers.contains(KeyModifiers::CONTROL)
}

fn render_frame<W: Write>(out: &mut W, frame: &RenderFrame) -> io::Result<()> {
    queue!(out, MoveTo(0, 0), Clear(ClearType::All))?;
    let size = frame.size();

    for y in 0..size.height {
        queue!(out, MoveTo(0, to_u16(y)))?;
        let mut style = None;
        for x in 0..size.width {
            if let Some(cell) = frame.cell(x, y) {
                if style != Some(cell.style) {
                    queue_style(out, cell.style)?;
                    style = Some(cell.style);
                }
                queue!(out, Print(cell.glyph))?;
            }
        }
    }

    queue!(
        out,
        SetAttribute(Attribute::Reset),
        MoveTo(0, to_u16(size.height))
    )?;
    out.flush()
}

fn term_color_to_crossterm(tc: TermColor) -> Color {
    match tc {
        TermColor::Ansi256(idx) => Color::AnsiValue(idx),
        TermColor::Rgb(r, g, b) => Color::Rgb { r, g, b },
    }
}

fn queue_style<W: Write>(out: &mut W, style: CellStyle) -> io::Result<()> {
    queue!(
        out,
        SetAttribute(Attribute::Reset),
        SetForegroundColor(term_color_to_crossterm(style.fg)),
        SetBackgroundColor(term_color_to_crossterm(style.bg)),
    )?;
    if style.bold {
        queue!(out, SetAttribute(Attribute::Bold))?;
    } else if style.dim {
        queue!(out, SetAttribute(Attribute::Dim))?;
    } else {
        queue!(out, SetAttribute(Attribute::NormalIntensity))?;
    }
    if style.underline {
        queue!(out, SetAttribute(Attribute::Underlined))?;
    } else {
        queue!(out, SetAttribute(Attribute::NoUnderline))?;
    }
    Ok(())
}

fn to_u16(value: usize) -> u16 {
    value.min(usize::from(u16::MAX)) as u16
}

struct TerminalSession {
    stdout: io::Stdout,
}

impl TerminalSession {
    fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(
            stdout,
            EnterAlternateScreen,
            EnableMouseCapture,
            Hide,
            Clear(ClearType::All),
            MoveTo(0, 0)
        )?;
        Ok(Self { stdout })
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = execute!(
            self.stdout,
            SetAttribute(Attribute::Reset),
            DisableMouseCapture,
            LeaveAlternateScreen,
            Show,
            MoveTo(0, 0)
        );
        let _ = terminal::disable_raw_mode();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent as TerminalKeyEvent, MouseEvent as TerminalMouseEvent};
    use termfolio_core::ContentKind;

    #[test]
    fn key_press_maps_to_surface_event() {
        let event = TerminalEvent::Key(TerminalKeyEvent::new(
            TerminalKeyCode::Char('j'),
            KeyModifiers::NONE,
        ));
        assert_eq!(
            map_terminal_event(event),
            Some(InputEvent::Key(KeyEvent::plain(Key::Char('j'))))
        );
    }

    #[test]
    fn key_release_is_filtered() {
        let mut raw = TerminalKeyEvent::new(TerminalKeyCode::Char('j'), KeyModifiers::NONE);
        raw.kind = KeyEventKind::Release;
        assert_eq!(map_terminal_event(TerminalEvent::Key(raw)), None);
    }

    #[test]
    fn mouse_drag_cycle_maps_to_surface_events() {
        let down = TerminalEvent::Mouse(TerminalMouseEvent {
            kind: TerminalMouseEventKind::Down(TerminalMouseButton::Left),
            column: 7,
            row: 3,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(
            map_terminal_event(down),
            Some(InputEvent::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column: 7,
                row: 3,
            }))
        );

        let drag = TerminalEvent::Mouse(TerminalMouseEvent {
            kind: TerminalMouseEventKind::Drag(TerminalMouseButton::Left),
            column: 9,
            row: 4,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(
            map_terminal_event(drag),
            Some(InputEvent::Mouse(MouseEvent {
                kind: MouseEventKind::Drag(MouseButton::Left),
                column: 9,
                row: 4,
            }))
        );

        let wheel = TerminalEvent::Mouse(TerminalMouseEvent {
            kind: TerminalMouseEventKind::ScrollDown,
            column: 9,
            row: 4,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(
            map_terminal_event(wheel),
            Some(InputEvent::Mouse(MouseEvent {
                kind: MouseEventKind::WheelDown,
                column: 9,
                row: 4,
            }))
        );
    }

    #[test]
    fn middle_button_is_filtered() {
        let event = TerminalEvent::Mouse(TerminalMouseEvent {
            kind: TerminalMouseEventKind::Down(TerminalMouseButton::Middle),
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(map_terminal_event(event), None);
    }

    #[test]
    fn ctrl_c_is_an_interrupt() {
        let event = TerminalEvent::Key(TerminalKeyEvent::new(
            TerminalKeyCode::Char('c'),
            KeyModifiers::CONTROL,
        ));
        assert!(is_interrupt(&event));
        let plain = TerminalEvent::Key(TerminalKeyEvent::new(
            TerminalKeyCode::Char('c'),
            KeyModifiers::NONE,
        ));
        assert!(!is_interrupt(&plain));
    }

    #[test]
    fn override_path_wins_over_home_default() {
        let path = resolve_override_path(
            Some("/tmp/custom.toml".to_owned()),
            Some("/home/me".to_owned()),
            "termfolio.toml",
        );
        assert_eq!(path, PathBuf::from("/tmp/custom.toml"));

        let fallback = resolve_override_path(None, Some("/home/me".to_owned()), "content.json");
        assert_eq!(
            fallback,
            PathBuf::from("/home/me/.config/termfolio/content.json")
        );
    }

    #[test]
    fn blank_override_falls_back_to_home() {
        let path = resolve_override_path(
            Some("  ".to_owned()),
            Some("/home/me".to_owned()),
            "termfolio.toml",
        );
        assert_eq!(
            path,
            PathBuf::from("/home/me/.config/termfolio/termfolio.toml")
        );
    }

    #[test]
    fn sample_content_is_projects() {
        let content = sample_content();
        assert_eq!(content.kind(), ContentKind::Project);
        assert!(!content.is_empty());
    }

    #[test]
    fn snapshot_text_contains_the_widget() {
        let text = render_snapshot_text();
        assert!(text.contains("guest@termfolio"));
        assert!(text.contains("~/portfolio git:(main)"));
        assert!(text.ends_with('\n'));
    }
}
