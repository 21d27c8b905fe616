mod flow;
mod geometry;
mod material;

pub use flow::FlowContext;
pub use geometry::{TubeGeometry, validate};
pub use material::TubeMaterial;

/// Complete input for a single vibration evaluation.
///
/// Collect every field first, then build this once and hand it to the model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VibrationInput {
    pub geometry: TubeGeometry,
    pub material: TubeMaterial,

    /// Flow conditions, required only for the stability check.
    pub flow: Option<FlowContext>,
}

impl VibrationInput {
    /// Creates an input without flow conditions.
    #[must_use]
    pub fn new(geometry: TubeGeometry, material: TubeMaterial) -> Self {
        Self {
            geometry,
            material,
            flow: None,
        }
    }

    /// Returns a copy of this input with the given flow conditions.
    #[must_use]
    pub fn with_flow(self, flow: FlowContext) -> Self {
        Self {
            flow: Some(flow),
            ..self
        }
    }
}
