//! termfolio-tui: a draggable faux terminal window for the terminal.
//!
//! The widget renders portfolio content behind a shell-prompt facade:
//! a chrome-decorated window that can be dragged with the mouse,
//! minimized, maximized, and closed, with vi-style cursor navigation and
//! a `yy` chord that marks a line.

pub mod app;
pub mod cursor;
pub mod interactive_runtime;
pub mod keymap;
pub mod shell;
pub mod theme;
pub mod window;
