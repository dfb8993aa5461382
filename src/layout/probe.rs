//! Declarative size resolution.

use cardboard_config::{Dimension, DimensionPair, Unit};

use crate::utils::Size;

/// Axis a dimension applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// Resolves declarative dimensions to logical pixels in a concrete context.
///
/// Hosts backed by a live rendering engine implement this by instantiating an
/// invisible measurement element in the base context and reading its resolved
/// box size. [`ScaledProbe`] is the arithmetic resolver for synthetic hosts.
pub trait GeometryProbe {
    /// Pixel length of `dim` along `axis`.
    fn resolve(&self, dim: Dimension, axis: Axis) -> f64;

    /// Resolves a dimension pair into a pixel size.
    fn resolve_pair(&self, pair: DimensionPair) -> Size {
        Size {
            w: self.resolve(pair.width, Axis::Horizontal),
            h: self.resolve(pair.height, Axis::Vertical),
        }
    }
}

/// Arithmetic probe: pixels pass through, em scales by a base font size, and
/// viewport-relative units scale by the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaledProbe {
    /// Pixels per em in the base context.
    pub em: f64,
    /// Viewport size for percentage-like units.
    pub viewport: Size,
}

impl GeometryProbe for ScaledProbe {
    fn resolve(&self, dim: Dimension, axis: Axis) -> f64 {
        let axis_len = match axis {
            Axis::Horizontal => self.viewport.w,
            Axis::Vertical => self.viewport.h,
        };
        match dim.unit {
            Unit::Px => dim.value,
            Unit::Em => dim.value * self.em,
            Unit::Percent => dim.value / 100. * axis_len,
            Unit::Vw => dim.value / 100. * self.viewport.w,
            Unit::Vh => dim.value / 100. * self.viewport.h,
        }
    }
}
