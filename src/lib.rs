//! An interactive geometry engine for card panels and floating windows.
//!
//! Two controllers make up the engine. A [`layout::Board`] reorders card
//! panels by dragging them across a reflowing row-based grid: every pointer
//! move re-derives the row structure from fresh measurements and relocates a
//! placeholder marking the drop slot. A [`layout::Modal`] wraps a
//! [`layout::FloatingWindow`], which moves and resizes a floating rectangle
//! within viewport bounds.
//!
//! The engine never touches a real document. Hosts hand it
//! [`layout::Panel`] handles that can measure and style their underlying
//! elements, and drive the controllers from their own event loop. This keeps
//! the clustering and clamping logic testable against synthetic geometry.

pub mod layout;
pub mod utils;

pub use layout::{
    Board, Card, ConfigError, FloatingWindow, GeometryProbe, Hit, Marker, Modal, Options, Panel,
    Region,
};
