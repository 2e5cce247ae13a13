//! Window state: the shared open flag, minimize/maximize, and dragging.

use std::cell::Cell;
use std::rc::Rc;

use termfolio_core::WindowGeometry;

/// Shared observable open/closed flag.
///
/// Handed to the shell and to any sibling toggle control at construction
/// time; every clone observes the same value. Updates are serialized
/// through the single-threaded event loop, so last-writer-wins is the
/// whole story.
#[derive(Debug, Clone)]
pub struct OpenFlag(Rc<Cell<bool>>);

impl OpenFlag {
    #[must_use]
    pub fn new(open: bool) -> Self {
        Self(Rc::new(Cell::new(open)))
    }

    #[must_use]
    pub fn get(&self) -> bool {
        self.0.get()
    }

    pub fn set(&self, open: bool) {
        self.0.set(open);
    }

    pub fn toggle(&self) {
        self.0.set(!self.0.get());
    }
}

/// Optional box constraining where the window origin may land.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragBounds {
    pub min_x: usize,
    pub min_y: usize,
    pub max_x: usize,
    pub max_y: usize,
}

impl DragBounds {
    fn clamp(&self, origin: (usize, usize)) -> (usize, usize) {
        (
            origin.0.clamp(self.min_x, self.max_x),
            origin.1.clamp(self.min_y, self.max_y),
        )
    }
}

/// Pointer drag tracker for the title bar.
///
/// A press grabs the window, drags move it, release drops it. Two presses
/// with no drag in between count as a double press and suppress the
/// second engagement until its release.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DragState {
    grab: Option<(usize, usize)>,
    dragged: bool,
    click_armed: bool,
    suppressed_press: bool,
}

impl DragState {
    /// Pointer pressed on the title bar. Returns whether a drag engaged.
    pub fn press(&mut self, at: (usize, usize), origin: (usize, usize)) -> bool {
        if self.click_armed {
            // Double press: swallow this engagement.
            self.click_armed = false;
            self.suppressed_press = true;
            self.grab = None;
            return false;
        }
        self.grab = Some((
            at.0.saturating_sub(origin.0),
            at.1.saturating_sub(origin.1),
        ));
        self.dragged = false;
        true
    }

    /// Pointer moved while pressed. Returns the new origin, if dragging.
    pub fn drag_to(&mut self, at: (usize, usize)) -> Option<(usize, usize)> {
        let (dx, dy) = self.grab?;
        self.dragged = true;
        Some((at.0.saturating_sub(dx), at.1.saturating_sub(dy)))
    }

    /// Pointer released.
    pub fn release(&mut self) {
        if self.suppressed_press {
            self.suppressed_press = false;
        } else {
            self.click_armed = !self.dragged && self.grab.is_some();
        }
        self.grab = None;
        self.dragged = false;
    }

    #[must_use]
    pub fn engaged(&self) -> bool {
        self.grab.is_some()
    }
}

/// The window's chrome-level state.
///
/// Minimize is a local hide-toggle: it collapses the window to its title
/// bar and leaves the shared open flag alone. Close is the only operation
/// that flips the flag.
#[derive(Debug, Clone)]
pub struct WindowState {
    open: OpenFlag,
    minimized: bool,
    maximized: bool,
    origin: (usize, usize),
    geometry: WindowGeometry,
    drag_bounds: Option<DragBounds>,
}

impl WindowState {
    #[must_use]
    pub fn new(open: OpenFlag, geometry: WindowGeometry) -> Self {
        let geometry = geometry.normalized();
        Self {
            open,
            minimized: false,
            maximized: false,
            origin: geometry.origin,
            geometry,
            drag_bounds: None,
        }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open.get()
    }

    #[must_use]
    pub fn is_minimized(&self) -> bool {
        self.minimized
    }

    #[must_use]
    pub fn is_maximized(&self) -> bool {
        self.maximized
    }

    #[must_use]
    pub fn origin(&self) -> (usize, usize) {
        self.origin
    }

    pub fn set_drag_bounds(&mut self, bounds: Option<DragBounds>) {
        self.drag_bounds = bounds;
        self.origin = self.constrained(self.origin, (usize::MAX, usize::MAX));
    }

    /// The active size preset, ignoring minimization.
    #[must_use]
    pub fn preset_size(&self) -> (usize, usize) {
        if self.maximized {
            self.geometry.large
        } else {
            self.geometry.small
        }
    }

    /// Rendered size in cells: the active preset, or a bare title bar
    /// when minimized.
    #[must_use]
    pub fn frame_size(&self) -> (usize, usize) {
        let (width, height) = self.preset_size();
        if self.minimized {
            (width, 2)
        } else {
            (width, height)
        }
    }

    pub fn close(&mut self) {
        self.open.set(false);
    }

    /// Reopen restores an un-minimized window.
    pub fn reopen(&mut self) {
        self.open.set(true);
        self.minimized = false;
    }

    pub fn toggle_minimized(&mut self) {
        self.minimized = !self.minimized;
    }

    pub fn toggle_maximized(&mut self) {
        self.maximized = !self.maximized;
    }

    /// Move the origin, honoring the optional drag bounds and keeping the
    /// window inside the host frame.
    pub fn move_to(&mut self, origin: (usize, usize), host: (usize, usize)) {
        self.origin = self.constrained(origin, host);
    }

    fn constrained(&self, origin: (usize, usize), host: (usize, usize)) -> (usize, usize) {
        let (width, height) = self.frame_size();
        let mut origin = (
            origin.0.min(host.0.saturating_sub(width)),
            origin.1.min(host.1.saturating_sub(height)),
        );
        if let Some(bounds) = self.drag_bounds {
            origin = bounds.clamp(origin);
        }
        origin
    }
}
