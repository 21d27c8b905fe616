use uom::si::{
    f64::{Length, MassDensity, Pressure},
    length::meter,
    mass_density::kilogram_per_cubic_meter,
    pressure::pascal,
};

use super::{TubeGeometry, TubeMaterial};

/// Natural frequency of the reference tube over a 1 m span.
///
/// Both span conventions agree here because `1ᵖ = 1`.
pub(super) const REFERENCE_FREQUENCY_HZ: f64 = 6.429_870_741_480_591;

/// 25 mm OD, 2.5 mm wall, 1 m span.
pub(super) fn reference_geometry() -> TubeGeometry {
    TubeGeometry::new(
        Length::new::<meter>(0.025),
        Length::new::<meter>(0.0025),
        Length::new::<meter>(1.0),
    )
    .expect("reference geometry should be valid")
}

/// Steel at 7850 kg/m³ and 200 GPa.
pub(super) fn reference_material() -> TubeMaterial {
    TubeMaterial::new(
        MassDensity::new::<kilogram_per_cubic_meter>(7850.0),
        Pressure::new::<pascal>(2.0e11),
    )
    .expect("reference material should be valid")
}
