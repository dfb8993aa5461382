//! Window move sessions.

use tracing::trace;

use super::FloatingWindow;
use crate::layout::Panel;
use crate::utils::{clamp_axis, Point};

/// State of one in-progress window move.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveSession {
    /// Pointer offset from the window's top-left at grab time.
    grab_offset: Point,
}

impl<W: Panel> FloatingWindow<W> {
    /// Starts a move session at the window's current visual position.
    pub fn move_begin(&mut self, pointer: Point) -> bool {
        if self.move_session.is_some() || self.resize_session.is_some() {
            return false;
        }

        let rect = self.panel.bounds();
        self.pin();

        self.move_session = Some(MoveSession {
            grab_offset: pointer - rect.loc,
        });

        trace!("move started");
        true
    }

    /// Follows the pointer, keeping the box fully inside the viewport.
    ///
    /// Horizontal and vertical clamps are independent; on each axis the
    /// leading edge wins when the box is larger than the viewport.
    pub fn move_update(&mut self, pointer: Point) -> bool {
        let Some(session) = &self.move_session else {
            return false;
        };

        let rect = self.panel.bounds();
        let viewport = self.panel.viewport();

        let pos = pointer - session.grab_offset;
        let pos = Point {
            x: clamp_axis(pos.x, rect.size.w, viewport.w),
            y: clamp_axis(pos.y, rect.size.h, viewport.h),
        };
        self.panel.set_pos(pos);

        true
    }

    /// Ends the move session. The last applied position is already final, so
    /// there is no commit step. No-op without an active session.
    pub fn move_end(&mut self) {
        if self.move_session.take().is_some() {
            trace!("move ended");
        }
    }
}
