//! Floating window placement: generic move and resize for one floating
//! rectangle.

mod placement;
mod resize;

pub use placement::MoveSession;
pub use resize::{ResizeSession, SizeConstraint};

use std::rc::Rc;

use super::{Options, Panel};

/// Geometry state machine of one floating rectangle.
///
/// A window starts out positioned by a centering transform; the first move or
/// resize pins it to absolute coordinates and the transform never comes back.
/// At most one move and one resize session exist at a time, each spanning one
/// pointer-down to pointer-up interaction.
#[derive(Debug)]
pub struct FloatingWindow<W: Panel> {
    pub(super) panel: W,
    /// Whether the centering transform is still in effect.
    pub(super) centered: bool,
    pub(super) move_session: Option<MoveSession>,
    pub(super) resize_session: Option<ResizeSession>,
    pub(super) options: Rc<Options>,
}

impl<W: Panel> FloatingWindow<W> {
    pub fn new(panel: W, options: Rc<Options>) -> Self {
        Self {
            panel,
            centered: false,
            move_session: None,
            resize_session: None,
            options,
        }
    }

    pub fn panel(&self) -> &W {
        &self.panel
    }

    pub fn panel_mut(&mut self) -> &mut W {
        &mut self.panel
    }

    pub fn is_moving(&self) -> bool {
        self.move_session.is_some()
    }

    pub fn is_resizing(&self) -> bool {
        self.resize_session.is_some()
    }

    /// Applies transform-based centering.
    pub fn center(&mut self) {
        self.panel.set_centered(true);
        self.centered = true;
    }

    /// Converts the centering transform into absolute coordinates.
    ///
    /// Captures the current visual box, sets left/top from it, then drops the
    /// transform, so the window does not jump. One-way: once pinned, the
    /// window stays absolutely positioned.
    pub(super) fn pin(&mut self) {
        if !self.centered {
            return;
        }
        let rect = self.panel.bounds();
        self.panel.set_pos(rect.loc);
        self.panel.set_centered(false);
        self.centered = false;
    }

    /// Ends whichever session is active.
    ///
    /// Pointer-up is the sole cancellation point; it must always clear both
    /// session kinds, even when no movement occurred.
    pub fn pointer_up(&mut self) {
        self.move_end();
        self.resize_end();
    }

    #[cfg(test)]
    pub(crate) fn verify_invariants(&self) {
        if self.move_session.is_some() || self.resize_session.is_some() {
            assert!(!self.centered, "an interacting window must be pinned");
        }
    }
}
