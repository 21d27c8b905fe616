use uom::{
    si::{ISQ, Quantity, SI},
    typenum::{N1, P1, P4, Z0},
};

/// Second moment of area, m⁴ in SI.
pub type SecondMomentOfArea = Quantity<ISQ<P4, Z0, Z0, Z0, Z0, Z0, Z0>, SI<f64>, f64>;

/// Mass per unit length, kg/m in SI.
pub type MassPerLength = Quantity<ISQ<N1, P1, Z0, Z0, Z0, Z0, Z0>, SI<f64>, f64>;
