//! Window resize sessions.

use cardboard_config::DimensionPair;
use tracing::{trace, warn};

use super::FloatingWindow;
use crate::layout::{Marker, Options, Panel};
use crate::utils::{ensure_min_max, Point, Size};

/// Pixel size bracket for one resize session.
///
/// Resolved once at session start from the declarative markers; the viewport
/// size is baked in at that moment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeConstraint {
    pub min: Size,
    pub max: Size,
}

impl SizeConstraint {
    /// Resolves the min/max markers of `panel`, falling back to the default
    /// minimum and the viewport maximum where a marker is absent or
    /// malformed.
    pub fn resolve<W: Panel>(panel: &W, options: &Options) -> Self {
        Self {
            min: marker_size(panel, Marker::SizeMin).unwrap_or(options.min_window_size),
            max: marker_size(panel, Marker::SizeMax).unwrap_or_else(|| panel.viewport()),
        }
    }
}

/// Reads a size marker and resolves it to pixels in the panel's context.
///
/// A lone value applies to both axes. Malformed text counts as not specified.
pub(in crate::layout) fn marker_size<W: Panel>(panel: &W, marker: Marker) -> Option<Size> {
    let text = panel.marker_text(marker)?;
    match DimensionPair::parse(&text) {
        Ok(pair) => Some(panel.resolve_pair(pair)),
        Err(err) => {
            warn!(?marker, %err, "ignoring malformed size marker");
            None
        }
    }
}

/// State of one in-progress window resize.
///
/// The top-left corner is the anchor; the bottom-right corner follows the
/// pointer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizeSession {
    anchor: Point,
    start_pointer: Point,
    start_size: Size,
    constraint: SizeConstraint,
}

impl<W: Panel> FloatingWindow<W> {
    /// Starts a resize session, fixing the top-left corner at its current
    /// visual position and resolving the size constraints.
    pub fn resize_begin(&mut self, pointer: Point) -> bool {
        if self.move_session.is_some() || self.resize_session.is_some() {
            return false;
        }

        let rect = self.panel.bounds();
        self.pin();

        let constraint = SizeConstraint::resolve(&self.panel, &self.options);
        self.resize_session = Some(ResizeSession {
            anchor: rect.loc,
            start_pointer: pointer,
            start_size: rect.size,
            constraint,
        });

        trace!(?constraint, "resize started");
        true
    }

    /// Follows the pointer with the bottom-right corner.
    ///
    /// Each axis clamps `start + delta` to the declared minimum and to the
    /// smaller of the declared maximum and the viewport space remaining from
    /// the anchor. The minimum wins when the bracket inverts.
    pub fn resize_update(&mut self, pointer: Point) -> bool {
        let Some(session) = &self.resize_session else {
            return false;
        };

        let viewport = self.panel.viewport();
        let delta = pointer - session.start_pointer;
        let c = &session.constraint;

        let size = Size {
            w: ensure_min_max(
                session.start_size.w + delta.x,
                c.min.w,
                f64::min(c.max.w, viewport.w - session.anchor.x),
            ),
            h: ensure_min_max(
                session.start_size.h + delta.y,
                c.min.h,
                f64::min(c.max.h, viewport.h - session.anchor.y),
            ),
        };
        self.panel.set_size(size);

        true
    }

    /// Ends the resize session. No-op without an active session.
    pub fn resize_end(&mut self) {
        if self.resize_session.take().is_some() {
            trace!("resize ended");
        }
    }
}
