//! Modal lifecycle: visibility, first-open centering and dismissal.

use std::rc::Rc;

use cardboard_config::{outside_click_closes, DimensionPair};
use tracing::{debug, warn};

use super::floating::FloatingWindow;
use super::{CardRegions, ConfigError, Marker, Options, Panel, Region};
use crate::utils::{Point, Size};

/// Modal visibility state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalState {
    Closed,
    Open,
}

/// What a click landed on, as resolved by the host's hit testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// The element that opens the modal.
    Opener,
    /// The close button inside the window's header.
    CloseButton,
    /// The handler overlay itself, outside the window body.
    Handler,
}

/// A modal handler with its floating window body.
///
/// The handler is a full-viewport overlay panel that catches outside clicks;
/// the body is the card subtree inside it, floated by a
/// [`FloatingWindow`]. The body starts hidden and centers itself on the
/// first open only; any later user move or resize survives reopening.
#[derive(Debug)]
pub struct Modal<W: Panel> {
    pub(super) handler: W,
    pub(super) window: FloatingWindow<W>,
    pub(super) regions: CardRegions,
    pub(super) state: ModalState,
    /// One-way latch: set on the first open, never reset.
    pub(super) positioned: bool,
    /// Whether a click on the handler closes the modal. Re-read from the
    /// declarative flag on every open.
    pub(super) outside_click: bool,
}

impl<W: Panel> Modal<W> {
    /// Wraps a handler panel and its card-wrap body.
    ///
    /// Fails when the handler lacks the card-wrap subtree or the body is not
    /// a card. The body is hidden and the handler collapsed to zero size, so
    /// the page stays interactive until the first open.
    pub fn new(handler: W, mut body: W, options: Rc<Options>) -> Result<Self, ConfigError> {
        if !handler.has_region(Region::CardWrap) {
            return Err(ConfigError::MissingCardWrap);
        }
        let regions = CardRegions::scan(&body)?;

        body.set_visible(false);
        let mut handler = handler;
        handler.set_size(Size::default());

        Ok(Self {
            handler,
            window: FloatingWindow::new(body, options),
            regions,
            state: ModalState::Closed,
            positioned: false,
            outside_click: true,
        })
    }

    pub fn state(&self) -> ModalState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == ModalState::Open
    }

    pub fn window(&self) -> &FloatingWindow<W> {
        &self.window
    }

    pub fn handler(&self) -> &W {
        &self.handler
    }

    /// Opens the modal.
    ///
    /// Re-reads the outside-click-close flag, shows the body, and on the
    /// first open only applies the initial-size marker and centers the
    /// window. With outside-click-close on, the handler expands to the full
    /// viewport so any click beside the window lands on it; otherwise it
    /// stays collapsed and background content remains interactive.
    pub fn open(&mut self) {
        let flag = self.window.panel().marker_text(Marker::OutsideClickClose);
        self.outside_click = outside_click_closes(flag.as_deref());

        self.window.panel_mut().set_visible(true);

        if !self.positioned {
            self.apply_initial_size();
            self.window.center();
            self.positioned = true;
        }

        if self.outside_click {
            let viewport = self.handler.viewport();
            self.handler.set_size(viewport);
        } else {
            self.handler.set_size(Size::default());
        }

        self.state = ModalState::Open;
        debug!(outside_click = self.outside_click, "modal opened");
    }

    /// Closes the modal: collapses the handler and hides the body. Strict
    /// no-op when already closed.
    pub fn close(&mut self) {
        if self.state == ModalState::Closed {
            return;
        }

        self.window.pointer_up();
        self.handler.set_size(Size::default());
        self.window.panel_mut().set_visible(false);
        self.state = ModalState::Closed;
        debug!("modal closed");
    }

    /// Applies the initial-size marker, if present and well-formed.
    ///
    /// Both components are required here; a lone value or unparseable text
    /// skips the whole marker rather than applying half of it.
    fn apply_initial_size(&mut self) {
        let Some(text) = self.window.panel().marker_text(Marker::SizeInit) else {
            return;
        };
        match DimensionPair::parse_strict(&text) {
            Ok(pair) => {
                let size = self.window.panel().resolve_pair(pair);
                self.window.panel_mut().set_size(size);
            }
            Err(err) => warn!(%err, "ignoring malformed initial-size marker"),
        }
    }

    /// Routes a click to the lifecycle.
    pub fn handle_click(&mut self, target: ClickTarget) {
        match target {
            ClickTarget::Opener => self.open(),
            ClickTarget::CloseButton => {
                if self.regions.close_button {
                    self.close();
                }
            }
            ClickTarget::Handler => {
                if self.is_open() && self.outside_click {
                    self.close();
                }
            }
        }
    }

    /// Starts a move or resize session when the pointer went down on the
    /// corresponding handle. Absent handles disable the interaction.
    pub fn pointer_down(&mut self, pointer: Point, region: Region) -> bool {
        if !self.is_open() {
            return false;
        }
        match region {
            Region::DragHandle if self.regions.drag_handle => self.window.move_begin(pointer),
            Region::ResizeHandle if self.regions.resize_handle => self.window.resize_begin(pointer),
            _ => false,
        }
    }

    /// Feeds a pointer position to whichever session is active.
    pub fn pointer_move(&mut self, pointer: Point) -> bool {
        self.window.move_update(pointer) || self.window.resize_update(pointer)
    }

    /// Ends any active move or resize session.
    pub fn pointer_up(&mut self) {
        self.window.pointer_up();
    }

    #[cfg(test)]
    pub(crate) fn verify_invariants(&self) {
        self.window.verify_invariants();
        if self.state == ModalState::Closed {
            assert!(
                !self.window.is_moving() && !self.window.is_resizing(),
                "a closed modal has no active sessions"
            );
        }
    }
}

/// Closes every open modal. Escape is a global key, so all open modals
/// receive the close; ordering between them is unspecified.
pub fn close_open_modals<W: Panel>(modals: &mut [Modal<W>]) {
    for modal in modals {
        if modal.is_open() {
            modal.close();
        }
    }
}
