//! The dimension-pair grammar.
//!
//! ```text
//! pair := dim [ ',' dim ]
//! dim  := number [ unit ]
//! unit := 'px' | 'em' | 'rem' | '%' | 'vw' | 'vh'
//! ```

use std::str::FromStr;

use crate::ParseError;

/// Length unit the grammar accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    /// Logical pixels.
    Px,
    /// Multiples of the base font size.
    Em,
    /// Percent of the containing axis.
    Percent,
    /// Percent of the viewport width.
    Vw,
    /// Percent of the viewport height.
    Vh,
}

/// One unit-bearing length, e.g. `64em` or `200`.
///
/// A bare number is taken as pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dimension {
    pub value: f64,
    pub unit: Unit,
}

impl FromStr for Dimension {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, ParseError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseError::Empty);
        }

        let unit_start = s
            .find(|c: char| !(c.is_ascii_digit() || matches!(c, '.' | '-' | '+')))
            .unwrap_or(s.len());
        let (number, unit) = s.split_at(unit_start);

        let value: f64 = number
            .parse()
            .map_err(|_| ParseError::InvalidNumber(s.to_owned()))?;
        let unit = match unit.trim() {
            "" | "px" => Unit::Px,
            "em" | "rem" => Unit::Em,
            "%" => Unit::Percent,
            "vw" => Unit::Vw,
            "vh" => Unit::Vh,
            other => return Err(ParseError::UnknownUnit(other.to_owned())),
        };

        Ok(Self { value, unit })
    }
}

/// A comma-separated width/height pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DimensionPair {
    pub width: Dimension,
    pub height: Dimension,
}

impl DimensionPair {
    /// Parses `"W, H"`, or a lone `"W"` applying to both axes.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        let mut parts = text.splitn(2, ',');
        let width: Dimension = parts.next().unwrap_or("").parse()?;
        let height = match parts.next() {
            Some(h) if !h.trim().is_empty() => h.parse()?,
            _ => width,
        };
        Ok(Self { width, height })
    }

    /// Parses `"W, H"`, requiring both components to be present and valid.
    pub fn parse_strict(text: &str) -> Result<Self, ParseError> {
        let parts: Vec<&str> = text.split(',').collect();
        if parts.len() != 2 {
            return Err(ParseError::WrongArity(parts.len()));
        }
        Ok(Self {
            width: parts[0].parse()?,
            height: parts[1].parse()?,
        })
    }
}
