#[cfg(test)]
#[allow(non_snake_case)]
mod tests {
    use crate::Kinetics::mole_balance::{FeedRates, MoleFractions};
    use crate::ReactorsIVP::PackedBedIVP::{BED_1_CONVERSION, ReactorConfig, ReactorError, ReactorState};
    use crate::ReactorsIVP::bed_series::Carryover;
    use crate::Utils::save_to_csv::{HISTORY_HEADER, save_history_csv};
    use crate::Utils::task_file::{ReactorTask, create_template};
    use approx::assert_relative_eq;
    use std::fs;
    use tempfile::tempdir;

    fn short_config() -> ReactorConfig {
        let y0 = MoleFractions::new(0.72, 0.24, 0.02, 0.02);
        ReactorConfig {
            step_size: 0.001,
            inlet_temperature: 680.0,
            pressure: 225.0,
            bed_length: 0.005,
            inlet_composition: y0,
            feed: FeedRates::new(1000.0, y0.n2 * 1000.0),
        }
    }

    fn assert_config_close(a: &ReactorConfig, b: &ReactorConfig) {
        assert_relative_eq!(a.step_size, b.step_size, epsilon = 1e-12);
        assert_relative_eq!(a.inlet_temperature, b.inlet_temperature, epsilon = 1e-9);
        assert_relative_eq!(a.pressure, b.pressure, epsilon = 1e-9);
        assert_relative_eq!(a.bed_length, b.bed_length, epsilon = 1e-12);
        assert_relative_eq!(a.inlet_composition.h2, b.inlet_composition.h2, epsilon = 1e-12);
        assert_relative_eq!(a.inlet_composition.n2, b.inlet_composition.n2, epsilon = 1e-12);
        assert_relative_eq!(a.inlet_composition.nh3, b.inlet_composition.nh3, epsilon = 1e-12);
        assert_relative_eq!(a.inlet_composition.ar, b.inlet_composition.ar, epsilon = 1e-12);
        assert_relative_eq!(a.feed.f, b.feed.f, epsilon = 1e-9);
        assert_relative_eq!(a.feed.fn2, b.feed.fn2, epsilon = 1e-9);
    }

    #[test]
    fn test_template_loads_back_as_reference_design() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("task.json");
        create_template(&path).unwrap();
        let task = ReactorTask::load(&path).unwrap();
        assert_config_close(&task.bed_1, &ReactorConfig::bed_1());
        assert_config_close(task.bed_2.as_ref().unwrap(), &ReactorConfig::bed_2());
        assert_eq!(task.carryover_mode(), Carryover::Fixed(BED_1_CONVERSION));
        assert_eq!(task.pressures, vec![150.0, 175.0, 200.0, 225.0, 250.0]);
        assert!(task.bed_series().is_some());
    }

    #[test]
    fn test_optional_fields_take_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bed_1_only.json");
        let bed_1 = serde_json::to_string(&ReactorConfig::bed_1()).unwrap();
        fs::write(&path, format!("{{\"bed_1\": {}}}", bed_1)).unwrap();
        let task = ReactorTask::load(&path).unwrap();
        assert!(task.bed_2.is_none());
        assert!(task.bed_series().is_none());
        assert_eq!(task.carryover_mode(), Carryover::Simulated);
        assert_eq!(task.pressures, vec![150.0, 175.0, 200.0, 225.0, 250.0]);
        assert_eq!(task.sweep.start, 550.0);
        assert_eq!(task.sweep.end, 740.0);
        assert_relative_eq!(task.sweep.catalyst_limit, 803.15);
    }

    #[test]
    fn test_invalid_task_files() {
        let dir = tempdir().unwrap();
        match ReactorTask::load(&dir.path().join("missing.json")) {
            Err(ReactorError::Io(_)) => {}
            other => panic!("Expected Io error, got {:?}", other),
        }

        let garbage = dir.path().join("garbage.json");
        fs::write(&garbage, "{ bed_1: ").unwrap();
        match ReactorTask::load(&garbage) {
            Err(ReactorError::Serde(_)) => {}
            other => panic!("Expected Serde error, got {:?}", other),
        }

        let negative = dir.path().join("negative.json");
        let task = ReactorTask {
            bed_1: ReactorConfig::bed_1().with_pressure(-1.0),
            ..ReactorTask::default()
        };
        task.save(&negative).unwrap();
        match ReactorTask::load(&negative) {
            Err(ReactorError::InvalidConfiguration(_)) => {}
            other => panic!("Expected InvalidConfiguration, got {:?}", other),
        }

        let endless = dir.path().join("endless_sweep.json");
        let mut task = ReactorTask::default();
        task.sweep.end = 1e12;
        task.save(&endless).unwrap();
        match ReactorTask::load(&endless) {
            Err(ReactorError::InvalidConfiguration(_)) => {}
            other => panic!("Expected InvalidConfiguration, got {:?}", other),
        }
    }

    #[test]
    fn test_history_csv() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("history.csv");
        let state = ReactorState::simulate(short_config()).unwrap();
        save_history_csv(&state, &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), state.records().len() + 1);
        assert_eq!(lines[0], HISTORY_HEADER.join(","));
        for line in &lines[1..] {
            assert_eq!(line.split(',').count(), HISTORY_HEADER.len());
        }
        // inlet node has no derived quantities
        assert!(lines[1].ends_with(",,,,,"));
        assert!(lines[1].starts_with("0,680,0,"));

        let last: Vec<f64> = lines[lines.len() - 1]
            .split(',')
            .map(|v| v.parse().unwrap())
            .collect();
        let outlet = state.last();
        assert_eq!(last[1], outlet.temperature);
        assert_eq!(last[2], outlet.conversion);
        assert_eq!(last[5], outlet.mole_fractions.nh3);
    }
}
