//! Cross-section properties of a hollow circular tube.

use std::f64::consts::PI;

use uom::si::f64::Length;

use crate::support::units::{MassPerLength, SecondMomentOfArea};

use super::{TubeGeometry, TubeMaterial};

/// Bending properties of the tube cross-section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionProperties {
    /// Second moment of area, `(π/64)(D⁴ - d⁴)`.
    pub second_moment_of_area: SecondMomentOfArea,

    /// Bore diameter, `d = D - 2t`.
    pub inner_diameter: Length,
}

/// Computes the second moment of area and inner diameter of the tube wall.
///
/// Assumes a geometry that passes [`validate`](super::validate).
#[must_use]
pub fn compute_section_properties(geometry: &TubeGeometry) -> SectionProperties {
    let outer = geometry.outer_diameter();
    let inner = geometry.inner_diameter();

    let outer_4 = outer * outer * outer * outer;
    let inner_4 = inner * inner * inner * inner;

    SectionProperties {
        second_moment_of_area: (outer_4 - inner_4) * (PI / 64.0),
        inner_diameter: inner,
    }
}

/// Computes the tube mass per unit length, metal area times density.
///
/// The tube contents are not included.
#[must_use]
pub fn compute_mass_per_length(geometry: &TubeGeometry, material: &TubeMaterial) -> MassPerLength {
    let outer = geometry.outer_diameter();
    let inner = geometry.inner_diameter();

    material.density() * (outer * outer - inner * inner) * (PI / 4.0)
}
