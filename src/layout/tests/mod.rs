//! Synthetic flow-layout host for exercising the engine without a real
//! rendering engine.
//!
//! [`TestPanel`] is a panel backed by shared mutable state; clones alias the
//! same element, so fixtures can keep observing a panel after handing it to
//! the engine. [`BoardFixture`] lays cards out in left-to-right wrapping flow
//! inside a container, mirroring the engine's flow sequence back into panel
//! positions after every operation.


use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use cardboard_config::Dimension;

use super::{
    Axis, Board, Card, GeometryProbe, Hit, Marker, Modal, Options, Overlay, Panel, Region,
    ScaledProbe,
};
use crate::layout::board::FlowEntry;
use crate::utils::{Point, Rect, Size};

#[derive(Debug, Default)]
struct PanelState {
    natural: Size,
    /// Position assigned by the fixture's flow layout.
    flow_pos: Point,
    viewport: Size,
    overlay: Option<Overlay>,
    pos: Option<Point>,
    size: Option<Size>,
    visible: bool,
    centered: bool,
    regions: HashSet<Region>,
    markers: HashMap<Marker, String>,
    size_writes: usize,
}

/// A host element with browser-like box resolution.
///
/// `bounds()` follows the same precedence a real document would: the drag
/// overlay wins, then the centering transform, then an absolute position,
/// then the flow position; the set size wins over the natural size.
#[derive(Debug, Clone)]
pub struct TestPanel {
    id: String,
    em: f64,
    state: Rc<RefCell<PanelState>>,
}

impl TestPanel {
    pub fn new(id: &str, viewport: Size) -> Self {
        Self {
            id: id.to_owned(),
            em: 16.,
            state: Rc::new(RefCell::new(PanelState {
                viewport,
                visible: true,
                ..Default::default()
            })),
        }
    }

    pub fn with_natural(self, natural: Size) -> Self {
        self.state.borrow_mut().natural = natural;
        self
    }

    pub fn with_regions(self, regions: &[Region]) -> Self {
        self.state.borrow_mut().regions.extend(regions);
        self
    }

    pub fn with_marker(self, marker: Marker, text: &str) -> Self {
        self.state.borrow_mut().markers.insert(marker, text.to_owned());
        self
    }

    pub fn set_marker(&self, marker: Marker, text: &str) {
        self.state.borrow_mut().markers.insert(marker, text.to_owned());
    }

    fn natural_size(&self) -> Size {
        self.state.borrow().natural
    }

    fn set_flow_pos(&self, pos: Point) {
        self.state.borrow_mut().flow_pos = pos;
    }

    pub fn is_visible(&self) -> bool {
        self.state.borrow().visible
    }

    pub fn size_writes(&self) -> usize {
        self.state.borrow().size_writes
    }
}

impl GeometryProbe for TestPanel {
    fn resolve(&self, dim: Dimension, axis: Axis) -> f64 {
        let probe = ScaledProbe {
            em: self.em,
            viewport: self.state.borrow().viewport,
        };
        probe.resolve(dim, axis)
    }
}

impl Panel for TestPanel {
    type Id = String;

    fn id(&self) -> &String {
        &self.id
    }

    fn bounds(&self) -> Rect {
        let s = self.state.borrow();
        if let Some(overlay) = s.overlay {
            return Rect::new(overlay.pos, overlay.size);
        }
        let size = s.size.unwrap_or(s.natural);
        if s.centered {
            let loc = Point::new(
                (s.viewport.w - size.w) / 2.,
                (s.viewport.h - size.h) / 2.,
            );
            return Rect::new(loc, size);
        }
        Rect::new(s.pos.unwrap_or(s.flow_pos), size)
    }

    fn viewport(&self) -> Size {
        self.state.borrow().viewport
    }

    fn has_region(&self, region: Region) -> bool {
        self.state.borrow().regions.contains(&region)
    }

    fn marker_text(&self, marker: Marker) -> Option<String> {
        self.state.borrow().markers.get(&marker).cloned()
    }

    fn set_overlay(&mut self, overlay: Option<Overlay>) {
        self.state.borrow_mut().overlay = overlay;
    }

    fn set_pos(&mut self, pos: Point) {
        self.state.borrow_mut().pos = Some(pos);
    }

    fn set_size(&mut self, size: Size) {
        let mut s = self.state.borrow_mut();
        s.size = Some(size);
        s.size_writes += 1;
    }

    fn set_visible(&mut self, visible: bool) {
        self.state.borrow_mut().visible = visible;
    }

    fn set_centered(&mut self, centered: bool) {
        self.state.borrow_mut().centered = centered;
    }
}

/// A board interaction step.
#[derive(Debug, Clone, Copy)]
pub enum Op {
    DragBegin { card: usize },
    DragMove { x: f64, y: f64 },
    DragEnd,
}

/// A card board in a wrapping flow container.
pub struct BoardFixture {
    pub board: Board<TestPanel>,
    origin: Point,
    width: f64,
}

impl BoardFixture {
    pub fn new(origin: Point, width: f64, viewport: Size, cards: &[(&str, Size)]) -> Self {
        let cards = cards
            .iter()
            .map(|(id, size)| {
                let panel = TestPanel::new(id, viewport)
                    .with_natural(*size)
                    .with_regions(&[Region::CardMarker, Region::Header, Region::DragHandle]);
                Card::new(panel).unwrap()
            })
            .collect();
        let fixture = Self {
            board: Board::new(cards, Rc::new(Options::default())),
            origin,
            width,
        };
        fixture.reflow();
        fixture
    }

    /// Lays the flow sequence out left to right, wrapping at the container's
    /// right edge. The placeholder takes part exactly like a card.
    pub fn reflow(&self) {
        let mut x = self.origin.x;
        let mut y = self.origin.y;
        let mut row_h = 0.;
        for entry in self.board.flow_entries() {
            let size = match &entry {
                FlowEntry::Card(card) => card.panel().natural_size(),
                FlowEntry::Placeholder(size) => *size,
            };
            if x > self.origin.x && x + size.w > self.origin.x + self.width {
                x = self.origin.x;
                y += row_h;
                row_h = 0.;
            }
            if let FlowEntry::Card(card) = entry {
                card.panel().set_flow_pos(Point::new(x, y));
            }
            x += size.w;
            row_h = f64::max(row_h, size.h);
        }
    }

    pub fn order(&self) -> Vec<&str> {
        self.board.order().map(String::as_str).collect()
    }

    pub fn card_bounds(&self, id: &str) -> Rect {
        self.board
            .cards()
            .find(|card| card.panel().id() == id)
            .unwrap()
            .panel()
            .bounds()
    }

    /// Grabs `id` by its drag handle, 5px inside its top-left corner.
    pub fn begin(&mut self, id: &str) -> bool {
        let pointer = self.card_bounds(id).loc + Point::new(5., 5.);
        let hit = Hit {
            card: id.to_owned(),
            region: Region::DragHandle,
        };
        let started = self.board.drag_begin(pointer, &hit);
        self.reflow();
        started
    }

    pub fn apply(&mut self, op: Op) {
        match op {
            Op::DragBegin { card } => {
                if self.board.is_empty() {
                    return;
                }
                let id = {
                    let idx = card % self.board.len();
                    self.board.order().nth(idx).unwrap().clone()
                };
                self.begin(&id);
            }
            Op::DragMove { x, y } => {
                self.board.drag_update(Point::new(x, y));
                self.reflow();
            }
            Op::DragEnd => {
                self.board.drag_end();
                self.reflow();
            }
        }
    }
}

/// Applies each op, reflowing and checking invariants in between.
pub fn check_ops(fixture: &mut BoardFixture, ops: &[Op]) {
    for op in ops {
        fixture.apply(*op);
        fixture.board.verify_invariants();
    }
}

/// A modal handler with a standard card body.
pub struct ModalFixture {
    pub modal: Modal<TestPanel>,
    /// Aliases of the panels owned by the modal.
    pub handler: TestPanel,
    pub body: TestPanel,
}

impl ModalFixture {
    pub fn new(viewport: Size, markers: &[(Marker, &str)]) -> Self {
        let handler = TestPanel::new("handler", viewport).with_regions(&[Region::CardWrap]);
        let mut body = TestPanel::new("body", viewport)
            .with_natural(Size::new(300., 200.))
            .with_regions(&[
                Region::CardMarker,
                Region::Header,
                Region::Main,
                Region::DragHandle,
                Region::ResizeHandle,
                Region::CloseButton,
            ]);
        for (marker, text) in markers {
            body = body.with_marker(*marker, text);
        }

        let modal = Modal::new(handler.clone(), body.clone(), Rc::new(Options::default())).unwrap();
        Self {
            modal,
            handler,
            body,
        }
    }
}
