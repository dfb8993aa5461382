//! Declarative configuration embedded in marker text.
//!
//! Cards and modals carry their tunables as the text content of marker
//! elements nested in the window body: an initial-size marker like
//! `"64em, 64em"`, min/max-size markers, and an outside-click-close flag.
//! This crate defines the typed grammar for that text (a unit-bearing
//! dimension pair and a boolean token), decoupled from any document
//! traversal.
//!
//! Parsing is total and side-effect free. Callers decide how to treat
//! failures; the engine treats any failure as "not specified" and falls back
//! to its defaults.

mod size;

pub use size::{Dimension, DimensionPair, Unit};

use thiserror::Error;

/// Why a marker's text failed to parse.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("empty dimension")]
    Empty,
    #[error("invalid number in {0:?}")]
    InvalidNumber(String),
    #[error("unknown unit {0:?}")]
    UnknownUnit(String),
    #[error("expected two comma-separated dimensions, found {0}")]
    WrongArity(usize),
}

/// Interprets the outside-click-close flag.
///
/// Only the exact token `false` (case-insensitive, surrounding whitespace
/// ignored) disables closing. Anything else, including a missing marker,
/// enables it.
pub fn outside_click_closes(text: Option<&str>) -> bool {
    !text.is_some_and(|t| t.trim().eq_ignore_ascii_case("false"))
}
