//! Drag-reorder sessions.

use tracing::trace;

use super::Board;
use crate::layout::rows::cluster_rows;
use crate::layout::{Card, Hit, Overlay, Panel, Region};
use crate::utils::{Point, Rect, Size};

/// State of one in-progress reorder.
///
/// Created on pointer-down over a drag handle, destroyed on pointer-up. While
/// it exists, exactly one placeholder and one detached card exist for the
/// board.
#[derive(Debug)]
pub struct DragSession<Id> {
    pub(in crate::layout) dragged: Id,
    /// Pointer offset from the dragged card's top-left at grab time.
    pub(in crate::layout) grab_offset: Point,
    pub(in crate::layout) placeholder: Placeholder,
}

/// Transient marker occupying the prospective drop slot.
///
/// Sized to the dragged card's box at grab time so the flow keeps its shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placeholder {
    pub size: Size,
    /// Insertion index among the non-dragged cards.
    pub slot: usize,
}

/// One entry of the container's current flow sequence.
///
/// Hosts mirror this sequence into their document: during a drag the detached
/// card leaves the flow and the placeholder takes part in reflow instead.
#[derive(Debug)]
pub enum FlowEntry<'a, W: Panel> {
    Card(&'a Card<W>),
    Placeholder(Size),
}

impl<W: Panel> Board<W> {
    /// Starts a reorder session.
    ///
    /// Only begins when the pointer went down on a card's drag handle and no
    /// session is active. The dragged card detaches into the overlay at the
    /// pointer; the placeholder takes over its slot.
    pub fn drag_begin(&mut self, pointer: Point, hit: &Hit<W::Id>) -> bool {
        if self.drag.is_some() {
            return false;
        }
        if hit.region != Region::DragHandle {
            return false;
        }
        let Some(idx) = self.idx_of(&hit.card) else {
            return false;
        };
        if !self.cards[idx].regions().drag_handle {
            return false;
        }

        let rect = self.cards[idx].panel().bounds();
        let grab_offset = pointer - rect.loc;

        self.drag = Some(DragSession {
            dragged: hit.card.clone(),
            grab_offset,
            placeholder: Placeholder {
                size: rect.size,
                slot: idx,
            },
        });

        let overlay = Overlay {
            pos: pointer - grab_offset,
            size: rect.size,
            alpha: self.options.drag_alpha,
            z_index: self.options.raised_z_index,
        };
        self.cards[idx].panel_mut().set_overlay(Some(overlay));

        trace!(card = ?hit.card, "drag started");
        true
    }

    /// Tracks the pointer: moves the overlay and relocates the placeholder.
    ///
    /// Re-measures every non-dragged card, clusters the boxes into rows, and
    /// puts the placeholder where a drop at this pointer position would land.
    pub fn drag_update(&mut self, pointer: Point) -> bool {
        let Some(drag) = &self.drag else {
            return false;
        };
        let grab_offset = drag.grab_offset;
        let size = drag.placeholder.size;
        let Some(dragged_idx) = self.idx_of(&drag.dragged) else {
            return false;
        };

        // Measurement pass.
        let boxes: Vec<Rect> = self
            .cards
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != dragged_idx)
            .map(|(_, card)| card.panel().bounds())
            .collect();

        let slot = insert_slot(&boxes, pointer, self.options.row_tolerance);

        // Mutation pass.
        if let Some(drag) = &mut self.drag {
            drag.placeholder.slot = slot;
        }
        let overlay = Overlay {
            pos: pointer - grab_offset,
            size,
            alpha: self.options.drag_alpha,
            z_index: self.options.raised_z_index,
        };
        self.cards[dragged_idx].panel_mut().set_overlay(Some(overlay));

        true
    }

    /// Commits the placeholder position as the new order and ends the
    /// session.
    ///
    /// Restores the dragged card's flow styling and moves it to the
    /// placeholder's slot; this is the only point where the committed order
    /// changes. No-op without an active session.
    pub fn drag_end(&mut self) {
        let Some(drag) = self.drag.take() else {
            return;
        };
        let Some(idx) = self.idx_of(&drag.dragged) else {
            return;
        };

        let mut card = self.cards.remove(idx);
        card.panel_mut().set_overlay(None);

        // The slot indexes the flow without the dragged card, which is
        // exactly `cards` after the removal above.
        let slot = drag.placeholder.slot.min(self.cards.len());
        self.cards.insert(slot, card);

        trace!(slot, "drag committed");
    }

    /// Current flow sequence of the container.
    pub fn flow_entries(&self) -> Vec<FlowEntry<'_, W>> {
        let Some(drag) = &self.drag else {
            return self.cards.iter().map(FlowEntry::Card).collect();
        };

        let mut entries: Vec<FlowEntry<'_, W>> = self
            .cards
            .iter()
            .filter(|card| *card.panel().id() != drag.dragged)
            .map(FlowEntry::Card)
            .collect();
        let slot = drag.placeholder.slot.min(entries.len());
        entries.insert(slot, FlowEntry::Placeholder(drag.placeholder.size));
        entries
    }
}

/// Picks the placeholder slot for a pointer position over the given boxes.
///
/// The target row is the first row whose bottom edge exceeds the pointer's
/// vertical coordinate; below every row, the slot is the very end (the last
/// row, after its last box). Within the target row the slot lands before the
/// first box whose left edge exceeds the pointer's horizontal coordinate, or
/// after the row's last box. A pointer in the dead zone between two rows
/// resolves to the nearest row below it; this mirrors the committed behavior
/// of the sequential bottom-edge scan.
fn insert_slot(boxes: &[Rect], pointer: Point, tolerance: f64) -> usize {
    let rows = cluster_rows(boxes, tolerance);

    for row in &rows {
        if pointer.y < row.bottom {
            for i in row.indices() {
                if pointer.x < boxes[i].left() {
                    return i;
                }
            }
            return row.end;
        }
    }

    boxes.len()
}
