/// sweep of the inlet temperature for the highest conversion under the catalyst
/// temperature limit
/// # Examples
/// ```
/// use AmmoniaSynth::Optimization::inlet_temperature::{InletTemperatureSweep, SweepRange};
/// use AmmoniaSynth::ReactorsIVP::PackedBedIVP::ReactorConfig;
/// let range = SweepRange { start: 660.0, end: 690.0, increment: 5.0, ..Default::default() };
/// let sweep = InletTemperatureSweep::new(ReactorConfig::bed_1(), range);
/// let result = sweep.run().unwrap();
/// let best = result.best_below_limit().unwrap();
/// assert!(best.outlet_temperature <= 803.15);
/// ```
pub mod inlet_temperature;
/// conversion and temperature profiles at several pressures
pub mod pressure_sweep;
mod optimization_tests;
