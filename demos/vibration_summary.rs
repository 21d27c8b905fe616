//! Screens a single heat exchanger tube and prints the report.
//!
//! Run with `cargo run --example vibration_summary`.

use tube_vibration_models::{
    models::structural::tube_vibration::{
        FlowContext, LengthExponent, TubeGeometry, TubeMaterial, TubeVibration, ValidationError,
        VibrationConfig, VibrationInput, max_stable_span,
    },
    support::bundle::{LayoutKind, PitchPattern, TubeArrangement, TubeLayout},
};
use twine_core::Model;
use uom::si::{
    f64::{Length, MassDensity, Pressure, Velocity},
    length::{meter, millimeter},
    mass_density::kilogram_per_cubic_meter,
    pressure::pascal,
    velocity::meter_per_second,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let outer_diameter = Length::new::<meter>(0.025);
    let pitch = Length::new::<meter>(0.0325);

    let geometry = TubeGeometry::new(
        outer_diameter,
        Length::new::<meter>(0.0025),
        Length::new::<meter>(1.0),
    )?;
    let material = TubeMaterial::new(
        MassDensity::new::<kilogram_per_cubic_meter>(7850.0),
        Pressure::new::<pascal>(2.0e11),
    )?;
    let arrangement = TubeArrangement::from_pitch(PitchPattern::Square, pitch, outer_diameter)?;
    let flow = FlowContext::new(arrangement, Velocity::new::<meter_per_second>(3.0))?;
    let input = VibrationInput::new(geometry, material).with_flow(flow);

    for exponent in [LengthExponent::Squared, LengthExponent::Fourth] {
        let model = TubeVibration::new(VibrationConfig::with_length_exponent(exponent));
        let result = model.call(&input)?;

        println!("Span exponent: {}", exponent.power());
        println!("{}", result.summary(&input));

        match max_stable_span(&geometry, &material, &flow, exponent)? {
            Some(span) => println!(
                "Maximum stable span:        {:.1} mm\n",
                span.get::<millimeter>()
            ),
            None => println!("Maximum stable span:        unlimited\n"),
        }
    }

    let layout = TubeLayout::new(LayoutKind::Square, pitch)?;
    println!(
        "{:?} layout: {} tubes at {:.1} mm pitch",
        layout.kind(),
        layout.tube_count(),
        layout.pitch().get::<millimeter>()
    );

    if let Err(err) = "hexagonal".parse::<TubeArrangement>().map_err(ValidationError::from) {
        println!("Rejected arrangement: {err}");
    }

    Ok(())
}
