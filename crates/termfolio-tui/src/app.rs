//! App shell hosting the terminal window inside a backdrop frame.

use termfolio_core::{ContentSet, WidgetConfig};
use termfolio_surface::input::InputEvent;
use termfolio_surface::render::{FrameSize, RenderFrame, TextRole};
use termfolio_surface::style::ThemeSpec;

use crate::keymap::KeyCommand;
use crate::shell::{ShellOutcome, TerminalShell};
use crate::theme::{cycle_theme, resolve_theme};
use crate::window::OpenFlag;

/// Commands returned to the event loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    None,
    Quit,
}

/// The whole screen: backdrop, the widget, and the footer hint line.
#[derive(Debug)]
pub struct App {
    shell: TerminalShell,
    open: OpenFlag,
    palette_name: String,
    theme: ThemeSpec,
    width: usize,
    height: usize,
    quitting: bool,
}

impl App {
    #[must_use]
    pub fn new(config: &WidgetConfig, content: &ContentSet, palette_name: &str) -> Self {
        let open = OpenFlag::new(true);
        let mut shell = TerminalShell::new(config, content, open.clone());
        shell.set_host_size((120, 40));
        Self {
            shell,
            open,
            palette_name: palette_name.to_owned(),
            theme: resolve_theme(palette_name),
            width: 120,
            height: 40,
            quitting: false,
        }
    }

    #[must_use]
    pub fn shell(&self) -> &TerminalShell {
        &self.shell
    }

    #[must_use]
    pub fn theme(&self) -> ThemeSpec {
        self.theme
    }

    #[must_use]
    pub fn palette_name(&self) -> &str {
        &self.palette_name
    }

    #[must_use]
    pub fn quitting(&self) -> bool {
        self.quitting
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    pub fn update(&mut self, event: InputEvent) -> Command {
        if let InputEvent::Resize(resize) = event {
            self.width = resize.width;
            self.height = resize.height;
        }

        match self.shell.update(event) {
            ShellOutcome::App(KeyCommand::CycleTheme) => {
                self.palette_name = cycle_theme(&self.palette_name).to_owned();
                self.theme = resolve_theme(&self.palette_name);
                Command::None
            }
            ShellOutcome::App(KeyCommand::Quit) => {
                self.quitting = true;
                Command::Quit
            }
            ShellOutcome::App(_)
            | ShellOutcome::Closed
            | ShellOutcome::Handled
            | ShellOutcome::Ignored => Command::None,
        }
    }

    /// Render the full screen frame.
    #[must_use]
    pub fn render(&self) -> RenderFrame {
        let size = FrameSize {
            width: self.width.max(1),
            height: self.height.max(1),
        };
        let mut frame = RenderFrame::new(size, self.theme);
        self.shell.render(&mut frame);
        self.render_footer(&mut frame);
        frame
    }

    fn render_footer(&self, frame: &mut RenderFrame) {
        let hints = self.shell.hints();
        let mut parts: Vec<String> = hints
            .iter()
            .map(|(chord, description)| format!("{chord} {description}"))
            .collect();
        if self.open.get() && !self.shell.window().is_minimized() {
            parts.push("h/j/k/l move".to_owned());
            parts.push("yy mark line".to_owned());
        }
        let line = parts.join("  ");
        let y = self.height.saturating_sub(1);
        frame.draw_text(1, y, &line, TextRole::Muted);
    }
}
