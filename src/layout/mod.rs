//! Interactive layout logic.
//!
//! The engine owns the geometry state machines and nothing else: hit testing,
//! event listening and document mutation stay with the host. Every entry
//! point is a plain method call made from the host's event handlers, so the
//! whole engine is single-threaded and synchronous.
//!
//! Within one handler invocation, geometry reads happen before geometry
//! writes: each pointer-move does one measurement pass over the affected
//! panels, then one mutation pass. Hosts backed by a live rendering engine
//! therefore see no read-after-write layout thrash.

pub mod board;
pub mod floating;
pub mod modal;
pub mod probe;
pub mod rows;
pub mod snapshot;

#[cfg(test)]
mod tests;

use std::fmt;

use thiserror::Error;

use crate::utils::{Point, Rect, Size};

pub use board::Board;
pub use floating::FloatingWindow;
pub use modal::{close_open_modals, ClickTarget, Modal, ModalState};
pub use probe::{Axis, GeometryProbe, ScaledProbe};
pub use snapshot::{BoardSnapshot, ModalSnapshot, WindowSnapshot};

/// Opacity of a card detached into the drag overlay.
pub const DRAG_ALPHA: f64 = 0.7;

/// Z-index of the drag overlay and of a centered modal window.
pub const RAISED_Z_INDEX: i32 = 1000;

/// Vertical tolerance when clustering cards into rows.
pub const ROW_TOLERANCE: f64 = 10.;

/// Fallback minimum window size when no `SizeMin` marker is present.
pub const DEFAULT_MIN_SIZE: Size = Size { w: 200., h: 100. };

/// Configurable properties of the engine.
#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    /// Vertical tolerance for row clustering.
    pub row_tolerance: f64,
    /// Opacity of a card while it is detached into the drag overlay.
    pub drag_alpha: f64,
    /// Z-index used for the drag overlay and centered modal windows.
    pub raised_z_index: i32,
    /// Minimum window size used when no `SizeMin` marker is present.
    pub min_window_size: Size,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            row_tolerance: ROW_TOLERANCE,
            drag_alpha: DRAG_ALPHA,
            raised_z_index: RAISED_Z_INDEX,
            min_window_size: DEFAULT_MIN_SIZE,
        }
    }
}

/// Fatal construction errors.
///
/// Raised only while scanning structure at construction; the object is not
/// usable afterwards. Everything else (missing optional regions, malformed
/// marker text) degrades silently instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The designated root element does not carry the card marker.
    #[error("element is not a card root (missing card marker)")]
    NotACard,
    /// A modal handler without the expected nested card-wrap subtree.
    #[error("modal handler has no card-wrap subtree")]
    MissingCardWrap,
}

/// Structural regions of a card or modal subtree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    /// The card marker class on a card root.
    CardMarker,
    /// The card-wrap subtree of a modal handler.
    CardWrap,
    /// The header region, located by tag name.
    Header,
    /// The main content region.
    Main,
    /// The footer region.
    Footer,
    /// The drag handle, nested under the header.
    DragHandle,
    /// The resize handle.
    ResizeHandle,
    /// The close button, nested under the header.
    CloseButton,
}

/// Markers carrying declarative configuration text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Marker {
    /// `"true"`/`"false"`: whether a click outside the window closes it.
    OutsideClickClose,
    /// Initial window size, `"W, H"` (both components required).
    SizeInit,
    /// Minimum window size (a lone value applies to both axes).
    SizeMin,
    /// Maximum window size (a lone value applies to both axes).
    SizeMax,
}

/// Drag overlay presentation of a detached card.
///
/// While detached, the card is absolutely positioned at `pos`, frozen at
/// `size`, raised to `z_index`, semi-transparent, and transparent to pointer
/// events so hit testing reaches the panels underneath it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Overlay {
    pub pos: Point,
    pub size: Size,
    pub alpha: f64,
    pub z_index: i32,
}

/// A pointer-down hit, as resolved by the host's hit testing.
#[derive(Debug, Clone, PartialEq)]
pub struct Hit<Id> {
    /// Card whose subtree was hit.
    pub card: Id,
    /// Innermost structural region that was hit.
    pub region: Region,
}

/// Host element handle the engine can measure, query and style.
///
/// This is the engine's only view of the document. Measurement must be fresh:
/// [`Panel::bounds`] reflects the host's current layout, including any reflow
/// caused by style writes earlier in the same handler invocation.
pub trait Panel: GeometryProbe {
    /// Type that can be used as a unique ID of this panel.
    type Id: PartialEq + fmt::Debug + Clone;

    /// Unique ID of this panel.
    fn id(&self) -> &Self::Id;

    /// Freshly measured border box, in viewport coordinates.
    fn bounds(&self) -> Rect;

    /// Current viewport size.
    fn viewport(&self) -> Size;

    /// Whether the structural `region` exists under this panel.
    fn has_region(&self, region: Region) -> bool;

    /// Text content of a declarative marker element, if present.
    fn marker_text(&self, marker: Marker) -> Option<String>;

    /// Detaches the panel into the drag overlay, or restores flow styling.
    ///
    /// Passing `None` reverts every inline property the overlay set, so the
    /// stylesheet's flow layout applies again.
    fn set_overlay(&mut self, overlay: Option<Overlay>);

    /// Sets the absolute position of the panel's box.
    fn set_pos(&mut self, pos: Point);

    /// Sets the size of the panel's box.
    fn set_size(&mut self, size: Size);

    /// Shows or hides the panel.
    fn set_visible(&mut self, visible: bool);

    /// Applies or clears transform-based centering.
    ///
    /// Centering places the box at the middle of the viewport and raises it;
    /// clearing removes only the transform, leaving position and size alone.
    fn set_centered(&mut self, centered: bool);
}

/// Which optional regions a card actually has.
///
/// Absent regions disable the corresponding feature; they are scanned once at
/// construction and never produce errors.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CardRegions {
    pub header: bool,
    pub drag_handle: bool,
    pub main: bool,
    pub footer: bool,
    pub resize_handle: bool,
    pub close_button: bool,
}

impl CardRegions {
    /// Scans a panel subtree for the card marker and optional regions.
    pub fn scan<W: Panel>(panel: &W) -> Result<Self, ConfigError> {
        if !panel.has_region(Region::CardMarker) {
            return Err(ConfigError::NotACard);
        }

        let header = panel.has_region(Region::Header);
        Ok(Self {
            header,
            // The drag handle and close button sit under the header; without
            // a header neither exists.
            drag_handle: header && panel.has_region(Region::DragHandle),
            main: panel.has_region(Region::Main),
            footer: panel.has_region(Region::Footer),
            resize_handle: panel.has_region(Region::ResizeHandle),
            close_button: header && panel.has_region(Region::CloseButton),
        })
    }
}

/// A validated card panel with its structural region scan.
#[derive(Debug)]
pub struct Card<W: Panel> {
    panel: W,
    regions: CardRegions,
}

impl<W: Panel> Card<W> {
    /// Wraps `panel`, verifying the card marker and scanning the optional
    /// regions.
    pub fn new(panel: W) -> Result<Self, ConfigError> {
        let regions = CardRegions::scan(&panel)?;
        Ok(Self { panel, regions })
    }

    pub fn panel(&self) -> &W {
        &self.panel
    }

    pub fn panel_mut(&mut self) -> &mut W {
        &mut self.panel
    }

    pub fn regions(&self) -> CardRegions {
        self.regions
    }

    pub fn into_panel(self) -> W {
        self.panel
    }
}
