//! termfolio-surface: boundary layer between the widget and the terminal.
//!
//! The widget crate consumes only these input/render/style primitives and
//! never touches the concrete terminal backend, so the backend can change
//! without rippling through the shell or the cursor engine.

/// Stable input abstraction consumed by the widget crate.
pub mod input {
    /// Canonical key set routed to the widget.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Key {
        Char(char),
        Enter,
        Escape,
        Tab,
        Backspace,
        Up,
        Down,
        Left,
        Right,
    }

    /// Canonical keyboard modifiers.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Modifiers {
        pub shift: bool,
        pub ctrl: bool,
        pub alt: bool,
    }

    impl Modifiers {
        #[must_use]
        pub const fn none() -> Self {
            Self {
                shift: false,
                ctrl: false,
                alt: false,
            }
        }
    }

    /// Canonical key event.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct KeyEvent {
        pub key: Key,
        pub modifiers: Modifiers,
    }

    impl KeyEvent {
        #[must_use]
        pub const fn plain(key: Key) -> Self {
            Self {
                key,
                modifiers: Modifiers::none(),
            }
        }
    }

    /// Pointer button.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum MouseButton {
        Left,
        Right,
    }

    /// Pointer event phase. Down/Drag/Up cover a full drag cycle; the
    /// wheel variants scroll the content viewport.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum MouseEventKind {
        Down(MouseButton),
        Up(MouseButton),
        Drag(MouseButton),
        WheelUp,
        WheelDown,
    }

    /// Canonical mouse event in frame cell coordinates.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct MouseEvent {
        pub kind: MouseEventKind,
        pub column: usize,
        pub row: usize,
    }

    /// Canonical frame resize event.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ResizeEvent {
        pub width: usize,
        pub height: usize,
    }

    /// Input stream event consumed by the widget crate.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum InputEvent {
        Key(KeyEvent),
        Mouse(MouseEvent),
        Resize(ResizeEvent),
        Tick,
    }
}

/// Style and theme primitives consumed by the widget crate.
pub mod style {
    /// Logical theme families.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum ThemeKind {
        Dark,
        Light,
        HighContrast,
    }

    /// Stable style tokens exposed to the widget crate.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum StyleToken {
        Background,
        Surface,
        Foreground,
        Muted,
        Accent,
        Success,
        Danger,
        Info,
        Focus,
        /// Background of the line marked by the selection chord.
        Selection,
        /// Block cursor glyph color.
        Cursor,
    }

    /// Palette uses terminal 256-color indexes for portability.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Palette {
        pub background: u8,
        pub surface: u8,
        pub foreground: u8,
        pub muted: u8,
        pub accent: u8,
        pub success: u8,
        pub danger: u8,
        pub info: u8,
        pub focus: u8,
        pub selection: u8,
        pub cursor: u8,
    }

    /// Typography emphasis policy per theme.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct TypographySpec {
        pub accent_bold: bool,
        pub danger_bold: bool,
        pub muted_dim: bool,
        pub focus_underline: bool,
        pub title_bold: bool,
    }

    /// Theme specification exposed to the widget crate.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ThemeSpec {
        pub kind: ThemeKind,
        pub palette: Palette,
        pub typography: TypographySpec,
    }

    impl ThemeSpec {
        /// Returns the color index for a style token.
        #[must_use]
        pub fn color(self, token: StyleToken) -> u8 {
            match token {
                StyleToken::Background => self.palette.background,
                StyleToken::Surface => self.palette.surface,
                StyleToken::Foreground => self.palette.foreground,
                StyleToken::Muted => self.palette.muted,
                StyleToken::Accent => self.palette.accent,
                StyleToken::Success => self.palette.success,
                StyleToken::Danger => self.palette.danger,
                StyleToken::Info => self.palette.info,
                StyleToken::Focus => self.palette.focus,
                StyleToken::Selection => self.palette.selection,
                StyleToken::Cursor => self.palette.cursor,
            }
        }

        /// Builds a theme for the requested style family.
        #[must_use]
        pub fn for_kind(kind: ThemeKind) -> Self {
            let palette = match kind {
                ThemeKind::Dark => Palette {
                    background: 16,
                    surface: 234,
                    foreground: 252,
                    muted: 243,
                    accent: 114,
                    success: 41,
                    danger: 203,
                    info: 110,
                    focus: 81,
                    selection: 237,
                    cursor: 156,
                },
                ThemeKind::Light => Palette {
                    background: 255,
                    surface: 253,
                    foreground: 235,
                    muted: 245,
                    accent: 29,
                    success: 28,
                    danger: 160,
                    info: 31,
                    focus: 25,
                    selection: 252,
                    cursor: 22,
                },
                ThemeKind::HighContrast => Palette {
                    background: 16,
                    surface: 232,
                    foreground: 231,
                    muted: 250,
                    accent: 51,
                    success: 118,
                    danger: 196,
                    info: 159,
                    focus: 229,
                    selection: 240,
                    cursor: 226,
                },
            };
            let typography = match kind {
                ThemeKind::Dark | ThemeKind::Light => TypographySpec {
                    accent_bold: true,
                    danger_bold: true,
                    muted_dim: true,
                    focus_underline: true,
                    title_bold: true,
                },
                ThemeKind::HighContrast => TypographySpec {
                    accent_bold: true,
                    danger_bold: true,
                    muted_dim: false,
                    focus_underline: true,
                    title_bold: true,
                },
            };
            Self {
                kind,
                palette,
                typography,
            }
        }
    }

    impl Default for ThemeSpec {
        fn default() -> Self {
            Self::for_kind(ThemeKind::Dark)
        }
    }
}

/// Render and frame primitives consumed by the widget crate.
pub mod render {
    use super::style::{StyleToken, ThemeSpec};
    use super::widgets::BorderStyle;

    /// Terminal color: ANSI256 index or 24-bit RGB.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum TermColor {
        Ansi256(u8),
        Rgb(u8, u8, u8),
    }

    /// Frame dimensions in terminal cells.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct FrameSize {
        pub width: usize,
        pub height: usize,
    }

    /// A rectangular region within a frame.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Rect {
        pub x: usize,
        pub y: usize,
        pub width: usize,
        pub height: usize,
    }

    impl Rect {
        /// Inner region after removing the 1-cell border.
        #[must_use]
        pub fn inner(self) -> Self {
            if self.width < 2 || self.height < 2 {
                return Self {
                    x: self.x,
                    y: self.y,
                    width: 0,
                    height: 0,
                };
            }
            Self {
                x: self.x + 1,
                y: self.y + 1,
                width: self.width - 2,
                height: self.height - 2,
            }
        }

        /// Cell-inclusive containment check, used for pointer hit tests.
        #[must_use]
        pub fn contains(self, column: usize, row: usize) -> bool {
            column >= self.x
                && column < self.x + self.width
                && row >= self.y
                && row < self.y + self.height
        }
    }

    /// Cell style represented as terminal colors and text attributes.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct CellStyle {
        pub fg: TermColor,
        pub bg: TermColor,
        pub bold: bool,
        pub dim: bool,
        pub underline: bool,
    }

    /// A single frame cell.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct FrameCell {
        pub glyph: char,
        pub style: CellStyle,
    }

    /// Semantic role for rendered text.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum TextRole {
        Primary,
        Muted,
        Accent,
        Success,
        Danger,
        Info,
        Focus,
    }

    struct BorderChars {
        top_left: char,
        top_right: char,
        bottom_left: char,
        bottom_right: char,
        horizontal: char,
        vertical: char,
    }

    fn border_chars(style: BorderStyle) -> BorderChars {
        match style {
            BorderStyle::Rounded => BorderChars {
                top_left: '╭',
                top_right: '╮',
                bottom_left: '╰',
                bottom_right: '╯',
                horizontal: '─',
                vertical: '│',
            },
            BorderStyle::Plain => BorderChars {
                top_left: '┌',
                top_right: '┐',
                bottom_left: '└',
                bottom_right: '┘',
                horizontal: '─',
                vertical: '│',
            },
            BorderStyle::Heavy => BorderChars {
                top_left: '┏',
                top_right: '┓',
                bottom_left: '┗',
                bottom_right: '┛',
                horizontal: '━',
                vertical: '┃',
            },
        }
    }

    /// Cell-grid frame the widget draws into.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct RenderFrame {
        size: FrameSize,
        cells: Vec<FrameCell>,
        theme: ThemeSpec,
    }

    impl RenderFrame {
        /// Create a blank frame filled with the theme background.
        #[must_use]
        pub fn new(size: FrameSize, theme: ThemeSpec) -> Self {
            let default_cell = FrameCell {
                glyph: ' ',
                style: CellStyle {
                    fg: TermColor::Ansi256(theme.color(StyleToken::Foreground)),
                    bg: TermColor::Ansi256(theme.color(StyleToken::Background)),
                    bold: false,
                    dim: false,
                    underline: false,
                },
            };
            Self {
                size,
                cells: vec![default_cell; size.width.saturating_mul(size.height)],
                theme,
            }
        }

        #[must_use]
        pub fn theme(&self) -> ThemeSpec {
            self.theme
        }

        #[must_use]
        pub fn size(&self) -> FrameSize {
            self.size
        }

        /// Returns one frame cell for assertions and blitting.
        #[must_use]
        pub fn cell(&self, x: usize, y: usize) -> Option<FrameCell> {
            if x >= self.size.width || y >= self.size.height {
                return None;
            }
            Some(self.cells[y * self.size.width + x])
        }

        /// Write a single cell, clipped to frame bounds.
        pub fn set_cell(&mut self, x: usize, y: usize, cell: FrameCell) {
            if x >= self.size.width || y >= self.size.height {
                return;
            }
            self.cells[y * self.size.width + x] = cell;
        }

        /// Draw text on a single row, clipped to frame width.
        pub fn draw_text(&mut self, x: usize, y: usize, text: &str, role: TextRole) {
            let (bold, dim, underline) = self.style_for_role(role);
            let style = CellStyle {
                fg: self.color_for_role(role),
                bg: TermColor::Ansi256(self.theme.color(StyleToken::Background)),
                bold,
                dim,
                underline,
            };
            self.draw_cells(x, y, text, style);
        }

        /// Draw text with explicit colors and weight.
        pub fn draw_styled_text(
            &mut self,
            x: usize,
            y: usize,
            text: &str,
            fg: TermColor,
            bg: TermColor,
            bold: bool,
        ) {
            let style = CellStyle {
                fg,
                bg,
                bold,
                dim: false,
                underline: false,
            };
            self.draw_cells(x, y, text, style);
        }

        fn draw_cells(&mut self, x: usize, y: usize, text: &str, style: CellStyle) {
            if y >= self.size.height || x >= self.size.width {
                return;
            }
            for (offset, glyph) in text.chars().enumerate() {
                let col = x + offset;
                if col >= self.size.width {
                    break;
                }
                self.cells[y * self.size.width + col] = FrameCell { glyph, style };
            }
        }

        /// Draw a bordered, titled panel into a rectangular region.
        ///
        /// Returns the inner `Rect` (content area inside the border).
        pub fn draw_panel(
            &mut self,
            rect: Rect,
            title: &str,
            border: BorderStyle,
            border_color: TermColor,
            bg: TermColor,
        ) -> Rect {
            if rect.width < 2 || rect.height < 2 {
                return Rect {
                    x: rect.x,
                    y: rect.y,
                    width: 0,
                    height: 0,
                };
            }

            let chars = border_chars(border);
            let border_style = CellStyle {
                fg: border_color,
                bg,
                bold: false,
                dim: false,
                underline: false,
            };

            self.fill_bg(rect, bg);

            self.set_cell(
                rect.x,
                rect.y,
                FrameCell {
                    glyph: chars.top_left,
                    style: border_style,
                },
            );
            for col in (rect.x + 1)..(rect.x + rect.width - 1) {
                self.set_cell(
                    col,
                    rect.y,
                    FrameCell {
                        glyph: chars.horizontal,
                        style: border_style,
                    },
                );
            }
            self.set_cell(
                rect.x + rect.width - 1,
                rect.y,
                FrameCell {
                    glyph: chars.top_right,
                    style: border_style,
                },
            );

            if !title.is_empty() {
                let title_max = rect.width.saturating_sub(4);
                let truncated: String = title.chars().take(title_max).collect();
                let title_text = format!(" {truncated} ");
                let title_style = CellStyle {
                    fg: border_color,
                    bg,
                    bold: self.theme.typography.title_bold,
                    dim: false,
                    underline: false,
                };
                for (i, ch) in title_text.chars().enumerate() {
                    let col = rect.x + 2 + i;
                    if col >= rect.x + rect.width - 1 {
                        break;
                    }
                    self.set_cell(
                        col,
                        rect.y,
                        FrameCell {
                            glyph: ch,
                            style: title_style,
                        },
                    );
                }
            }

            for row in (rect.y + 1)..(rect.y + rect.height - 1) {
                self.set_cell(
                    rect.x,
                    row,
                    FrameCell {
                        glyph: chars.vertical,
                        style: border_style,
                    },
                );
                self.set_cell(
                    rect.x + rect.width - 1,
                    row,
                    FrameCell {
                        glyph: chars.vertical,
                        style: border_style,
                    },
                );
            }

            let bottom_y = rect.y + rect.height - 1;
            self.set_cell(
                rect.x,
                bottom_y,
                FrameCell {
                    glyph: chars.bottom_left,
                    style: border_style,
                },
            );
            for col in (rect.x + 1)..(rect.x + rect.width - 1) {
                self.set_cell(
                    col,
                    bottom_y,
                    FrameCell {
                        glyph: chars.horizontal,
                        style: border_style,
                    },
                );
            }
            self.set_cell(
                rect.x + rect.width - 1,
                bottom_y,
                FrameCell {
                    glyph: chars.bottom_right,
                    style: border_style,
                },
            );

            rect.inner()
        }

        /// Fill a rectangular region with a background color.
        pub fn fill_bg(&mut self, rect: Rect, bg: TermColor) {
            let fg = TermColor::Ansi256(self.theme.color(StyleToken::Foreground));
            let style = CellStyle {
                fg,
                bg,
                bold: false,
                dim: false,
                underline: false,
            };
            for row in rect.y..rect.y + rect.height {
                for col in rect.x..rect.x + rect.width {
                    self.set_cell(col, row, FrameCell { glyph: ' ', style });
                }
            }
        }

        #[must_use]
        pub fn row_text(&self, y: usize) -> String {
            if y >= self.size.height {
                return String::new();
            }
            let start = y * self.size.width;
            let end = start + self.size.width;
            self.cells[start..end]
                .iter()
                .map(|cell| cell.glyph)
                .collect()
        }

        /// Text-only snapshot helper for lightweight regression tests.
        #[must_use]
        pub fn snapshot(&self) -> String {
            (0..self.size.height)
                .map(|row| self.row_text(row))
                .collect::<Vec<_>>()
                .join("\n")
        }

        /// Returns the `TermColor` for a semantic role.
        #[must_use]
        pub fn color_for_role(&self, role: TextRole) -> TermColor {
            TermColor::Ansi256(match role {
                TextRole::Primary => self.theme.color(StyleToken::Foreground),
                TextRole::Muted => self.theme.color(StyleToken::Muted),
                TextRole::Accent => self.theme.color(StyleToken::Accent),
                TextRole::Success => self.theme.color(StyleToken::Success),
                TextRole::Danger => self.theme.color(StyleToken::Danger),
                TextRole::Info => self.theme.color(StyleToken::Info),
                TextRole::Focus => self.theme.color(StyleToken::Focus),
            })
        }

        fn style_for_role(&self, role: TextRole) -> (bool, bool, bool) {
            let typography = self.theme.typography;
            match role {
                TextRole::Primary | TextRole::Info | TextRole::Success => (false, false, false),
                TextRole::Muted => (false, typography.muted_dim, false),
                TextRole::Accent => (typography.accent_bold, false, false),
                TextRole::Danger => (typography.danger_bold, false, false),
                TextRole::Focus => (true, false, typography.focus_underline),
            }
        }
    }
}

/// Stable widget primitives for the terminal window chrome.
pub mod widgets {
    /// Border treatment exposed by the surface.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum BorderStyle {
        Plain,
        Rounded,
        Heavy,
    }

    /// Title-bar chrome buttons, ordered left to right.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum ChromeButton {
        Close,
        Minimize,
        Maximize,
    }

    impl ChromeButton {
        pub const ALL: [ChromeButton; 3] =
            [ChromeButton::Close, ChromeButton::Minimize, ChromeButton::Maximize];

        /// Glyph drawn in the title bar; the buttons differ by color only.
        pub const GLYPH: char = '●';

        /// Column offset of the button within the window's title bar.
        #[must_use]
        pub fn column_offset(self) -> usize {
            match self {
                Self::Close => 2,
                Self::Minimize => 4,
                Self::Maximize => 6,
            }
        }

        /// Button whose hit zone covers the given title-bar column offset.
        #[must_use]
        pub fn at_column_offset(offset: usize) -> Option<Self> {
            Self::ALL
                .into_iter()
                .find(|button| button.column_offset() == offset)
        }
    }

    /// Title-bar layout for the terminal window.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct WindowChromeSpec {
        pub border: BorderStyle,
        /// Columns reserved for the chrome buttons before the title starts.
        pub title_start_offset: usize,
    }

    /// The one chrome layout this widget ships.
    #[must_use]
    pub fn window_chrome_spec() -> WindowChromeSpec {
        WindowChromeSpec {
            border: BorderStyle::Rounded,
            title_start_offset: 9,
        }
    }
}

/// Snapshot helpers for surface-based render assertions.
pub mod snapshot;
