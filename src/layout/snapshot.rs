//! Serializable views of engine state.
//!
//! Snapshots capture what the engine believes at a point in time, without
//! host handles. The test harness compares them value-for-value; embedders
//! can use them for debugging output.

use serde::Serialize;

use super::board::Board;
use super::floating::FloatingWindow;
use super::modal::{Modal, ModalState};
use super::Panel;
use crate::utils::{Rect, Size};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoardSnapshot {
    /// Committed card order, by debug-formatted id.
    pub order: Vec<String>,
    pub drag: Option<DragSnapshot>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DragSnapshot {
    pub dragged: String,
    pub slot: usize,
    pub placeholder_size: Size,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WindowSnapshot {
    pub bounds: Rect,
    pub centered: bool,
    pub moving: bool,
    pub resizing: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModalSnapshot {
    pub open: bool,
    pub positioned: bool,
    pub outside_click: bool,
    pub window: WindowSnapshot,
}

impl<W: Panel> Board<W> {
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            order: self
                .cards
                .iter()
                .map(|card| format!("{:?}", card.panel().id()))
                .collect(),
            drag: self.drag.as_ref().map(|drag| DragSnapshot {
                dragged: format!("{:?}", drag.dragged),
                slot: drag.placeholder.slot,
                placeholder_size: drag.placeholder.size,
            }),
        }
    }
}

impl<W: Panel> FloatingWindow<W> {
    pub fn snapshot(&self) -> WindowSnapshot {
        WindowSnapshot {
            bounds: self.panel.bounds(),
            centered: self.centered,
            moving: self.move_session.is_some(),
            resizing: self.resize_session.is_some(),
        }
    }
}

impl<W: Panel> Modal<W> {
    pub fn snapshot(&self) -> ModalSnapshot {
        ModalSnapshot {
            open: self.state == ModalState::Open,
            positioned: self.positioned,
            outside_click: self.outside_click,
            window: self.window.snapshot(),
        }
    }
}
