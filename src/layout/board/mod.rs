//! Card board: an ordered container of cards with drag reordering.

mod drag;

pub use drag::{DragSession, FlowEntry, Placeholder};

use std::rc::Rc;

use super::{Card, Options, Panel};

/// An ordered container of card panels.
///
/// The board's card order is the container's child order and the single
/// source of truth for the committed card order; no separate index list is
/// kept. Cards are created when the container is scanned at construction and
/// live until the board is torn down; reordering only relocates them.
#[derive(Debug)]
pub struct Board<W: Panel> {
    pub(super) cards: Vec<Card<W>>,
    /// Ongoing reorder, at most one per board.
    pub(super) drag: Option<DragSession<W::Id>>,
    pub(super) options: Rc<Options>,
}

impl<W: Panel> Board<W> {
    pub fn new(cards: Vec<Card<W>>, options: Rc<Options>) -> Self {
        Self {
            cards,
            drag: None,
            options,
        }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> impl Iterator<Item = &Card<W>> + '_ {
        self.cards.iter()
    }

    /// Committed card order.
    pub fn order(&self) -> impl Iterator<Item = &W::Id> + '_ {
        self.cards.iter().map(|card| card.panel().id())
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub(super) fn idx_of(&self, id: &W::Id) -> Option<usize> {
        self.cards.iter().position(|card| card.panel().id() == id)
    }

    #[cfg(test)]
    pub(crate) fn verify_invariants(&self) {
        if let Some(drag) = &self.drag {
            assert!(
                self.idx_of(&drag.dragged).is_some(),
                "dragged card must be present on the board"
            );
            assert!(
                drag.placeholder.slot <= self.cards.len() - 1,
                "placeholder slot must index the flow without the dragged card"
            );
        }
    }
}
