#[cfg(test)]
#[allow(non_snake_case)]
mod tests {
    use crate::Kinetics::mole_balance::MoleFractions;
    use crate::Optimization::inlet_temperature::*;
    use crate::Optimization::pressure_sweep::*;
    use crate::ReactorsIVP::PackedBedIVP::{
        CATALYST_TEMPERATURE_LIMIT, ReactorConfig, ReactorError,
    };
    use approx::assert_relative_eq;

    fn point(T_in: f64, X: f64, T_out: f64) -> SweepPoint {
        SweepPoint {
            inlet_temperature: T_in,
            outlet_temperature: T_out,
            conversion: X,
            mole_fractions: MoleFractions::new(0.7, 0.2, 0.05, 0.05),
            equilibrium_constant: 0.0,
            rate_constant: 0.0,
            equilibrium_conversion: 0.0,
        }
    }

    #[test]
    fn test_sampled_temperatures_exclude_end() {
        let range = SweepRange {
            start: 550.0,
            end: 740.0,
            increment: 1.0,
            catalyst_limit: CATALYST_TEMPERATURE_LIMIT,
        };
        let temperatures = range.temperatures();
        assert_eq!(temperatures.len(), 190);
        assert_eq!(temperatures[0], 550.0);
        assert_eq!(*temperatures.last().unwrap(), 739.0);

        let coarse = SweepRange {
            start: 500.0,
            end: 740.0,
            increment: 5.0,
            ..range
        };
        assert_eq!(coarse.temperatures().len(), 48);
        let empty = SweepRange { end: 550.0, ..range };
        assert!(empty.temperatures().is_empty());
    }

    #[test]
    fn test_ties_keep_the_first_sample() {
        let result = SweepResult {
            points: vec![
                point(600.0, 0.10, 700.0),
                point(610.0, 0.12, 780.0),
                point(620.0, 0.12, 790.0),
                point(630.0, 0.13, 820.0),
            ],
            catalyst_limit: 803.15,
        };
        assert_eq!(result.best_below_limit().unwrap().inlet_temperature, 610.0);
        assert_eq!(result.best_overall().unwrap().inlet_temperature, 630.0);
    }

    #[test]
    fn test_no_sample_below_limit() {
        let result = SweepResult {
            points: vec![point(700.0, 0.15, 830.0), point(710.0, 0.14, 840.0)],
            catalyst_limit: 803.15,
        };
        assert!(result.best_below_limit().is_none());
        assert_eq!(result.best_overall().unwrap().inlet_temperature, 700.0);
        let empty = SweepResult {
            points: Vec::new(),
            catalyst_limit: 803.15,
        };
        assert!(empty.best_overall().is_none());
        // header plus one row per optimum
        assert_eq!(empty.summary_table().len(), 3);
    }

    #[test]
    fn test_bed_1_inlet_temperature_optimum() {
        let sweep = InletTemperatureSweep::new(ReactorConfig::bed_1(), SweepRange::default());
        let result = sweep.run().unwrap();
        assert_eq!(result.points.len(), 190);

        let constrained = result.best_below_limit().unwrap();
        assert_eq!(constrained.inlet_temperature, 674.0);
        assert_relative_eq!(constrained.conversion, 0.14334930020543107, epsilon = 1e-6);
        assert_relative_eq!(constrained.outlet_temperature, 802.1364266380037, epsilon = 1e-4);
        assert!(constrained.outlet_temperature <= CATALYST_TEMPERATURE_LIMIT);

        let unconstrained = result.best_overall().unwrap();
        assert_eq!(unconstrained.inlet_temperature, 697.0);
        assert_relative_eq!(unconstrained.conversion, 0.15370294279308988, epsilon = 1e-6);
        assert_relative_eq!(unconstrained.outlet_temperature, 835.5652215904345, epsilon = 1e-4);
        assert!(unconstrained.conversion >= constrained.conversion);
    }

    #[test]
    fn test_bed_2_inlet_temperature_optimum() {
        let range = SweepRange {
            start: 500.0,
            end: 740.0,
            increment: 5.0,
            catalyst_limit: CATALYST_TEMPERATURE_LIMIT,
        };
        let result = InletTemperatureSweep::new(ReactorConfig::bed_2(), range)
            .run()
            .unwrap();
        let best = result.best_below_limit().unwrap();
        assert_eq!(best.inlet_temperature, 690.0);
        assert_relative_eq!(best.conversion, 0.10768322264691259, epsilon = 1e-6);
        assert_relative_eq!(best.outlet_temperature, 779.7862841914116, epsilon = 1e-4);
        assert_eq!(result.best_overall(), Some(best));
    }

    #[test]
    fn test_sweep_points_carry_outlet_constants() {
        let range = SweepRange {
            start: 673.15,
            end: 673.2,
            increment: 1.0,
            catalyst_limit: CATALYST_TEMPERATURE_LIMIT,
        };
        let result = InletTemperatureSweep::new(ReactorConfig::bed_1(), range)
            .run()
            .unwrap();
        assert_eq!(result.points.len(), 1);
        let p = result.points[0];
        assert_relative_eq!(p.conversion, 0.14253070481444177, epsilon = 1e-6);
        assert!(p.rate_constant > 0.0);
        assert!(p.equilibrium_constant > 0.0);
        assert!(p.equilibrium_conversion > p.conversion);
    }

    #[test]
    fn test_invalid_increment_is_rejected() {
        let range = SweepRange {
            increment: 0.0,
            ..SweepRange::default()
        };
        match InletTemperatureSweep::new(ReactorConfig::bed_1(), range).run() {
            Err(ReactorError::InvalidConfiguration(_)) => {}
            other => panic!("Expected InvalidConfiguration, got {:?}", other),
        }
    }

    #[test]
    fn test_unbounded_ranges_are_rejected() {
        let base = SweepRange::default();
        let bad_ranges = vec![
            SweepRange { start: f64::NAN, ..base },
            SweepRange { end: f64::INFINITY, ..base },
            SweepRange { end: 1e12, ..base },
            SweepRange { start: -1e308, end: 1e308, ..base },
            SweepRange { increment: f64::NAN, ..base },
            SweepRange { increment: -1.0, ..base },
        ];
        for range in bad_ranges {
            assert!(range.temperatures().is_empty());
            match InletTemperatureSweep::new(ReactorConfig::bed_1(), range).run() {
                Err(ReactorError::InvalidConfiguration(_)) => {}
                other => panic!("Expected InvalidConfiguration for {:?}, got {:?}", range, other),
            }
        }
        let widest = SweepRange {
            start: 0.0,
            end: MAX_SWEEP_SAMPLES as f64,
            increment: 1.0,
            ..base
        };
        assert!(widest.validate().is_ok());
        assert_eq!(widest.temperatures().len(), MAX_SWEEP_SAMPLES);
        let reversed = SweepRange { start: 740.0, end: 550.0, ..base };
        assert!(reversed.validate().is_ok());
        assert!(reversed.temperatures().is_empty());
    }

    #[test]
    fn test_failing_sample_aborts_sweep() {
        let base = ReactorConfig {
            inlet_composition: MoleFractions::new(0.75, 0.25, 0.0, 0.0),
            ..ReactorConfig::bed_1()
        };
        let range = SweepRange {
            start: 660.0,
            end: 680.0,
            increment: 10.0,
            catalyst_limit: CATALYST_TEMPERATURE_LIMIT,
        };
        match InletTemperatureSweep::new(base, range).run() {
            Err(ReactorError::InvalidKineticState { step, .. }) => assert_eq!(step, 1),
            other => panic!("Expected InvalidKineticState, got {:?}", other),
        }
    }

    #[test]
    fn test_pressure_sweep_of_long_bed_1() {
        let base = ReactorConfig::bed_1().with_bed_length(5.0);
        let profiles =
            pressure_sweep(&base, &REFERENCE_PRESSURES, CATALYST_TEMPERATURE_LIMIT).unwrap();
        assert_eq!(profiles.len(), 5);

        let expected = [
            (0.1456221997650515, 801.8556654834471, None),
            (0.16332208458942368, 818.7309587768976, Some(3.558)),
            (0.17387096457092904, 829.1412808213669, Some(2.702)),
            (0.18272343490162643, 838.0537324222493, Some(2.140)),
            (0.1908237711817935, 846.3276449398307, Some(1.740)),
        ];
        for (profile, (X, T_out, z)) in profiles.iter().zip(expected) {
            assert_relative_eq!(profile.outlet_conversion(), X, epsilon = 1e-6);
            assert_relative_eq!(profile.outlet_temperature(), T_out, epsilon = 1e-4);
            match (profile.limit_position, z) {
                (Some(actual), Some(z)) => assert_relative_eq!(actual, z, epsilon = 1e-9),
                (None, None) => {}
                other => panic!("limit position mismatch at {} atm: {:?}", profile.pressure, other),
            }
        }
        // higher pressure reaches the limit earlier
        for pair in profiles[1..].windows(2) {
            assert!(pair[1].limit_position < pair[0].limit_position);
        }
        assert_eq!(pressure_table(&profiles).len(), 6);
    }
}
