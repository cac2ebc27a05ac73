//! # Reactor task file
//!
//! A JSON document describing everything the console menu can run: the two beds, the
//! conversion carried from bed 1 to bed 2, the inlet temperature sweep and the
//! pressures of the pressure study.
//!
//! ```json
//! {
//!   "bed_1": { "step_size": 0.001, "inlet_temperature": 673.15, ... },
//!   "bed_2": { ... },
//!   "carryover": 0.14296,
//!   "sweep": { "start": 550.0, "end": 740.0, "increment": 1.0, "catalyst_limit": 803.15 },
//!   "pressures": [150.0, 175.0, 200.0, 225.0, 250.0]
//! }
//! ```
//! `bed_2` and `carryover` may be omitted: without `bed_2` only bed 1 is simulated,
//! without `carryover` the simulated bed-1 outlet conversion sizes the bed-2 feed.
use crate::Optimization::inlet_temperature::{InletTemperatureSweep, SweepRange};
use crate::Optimization::pressure_sweep::REFERENCE_PRESSURES;
use crate::ReactorsIVP::PackedBedIVP::{BED_1_CONVERSION, ReactorConfig, ReactorError};
use crate::ReactorsIVP::bed_series::{BedSeries, Carryover};
use log::info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// file name used by the console menu when the user gives none
pub const DEFAULT_TASK_FILE: &str = "ammonia_task.json";

fn default_pressures() -> Vec<f64> {
    REFERENCE_PRESSURES.to_vec()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReactorTask {
    pub bed_1: ReactorConfig,
    #[serde(default)]
    pub bed_2: Option<ReactorConfig>,
    #[serde(default)]
    pub carryover: Option<f64>,
    #[serde(default)]
    pub sweep: SweepRange,
    #[serde(default = "default_pressures")]
    pub pressures: Vec<f64>,
}

impl Default for ReactorTask {
    fn default() -> Self {
        Self {
            bed_1: ReactorConfig::bed_1(),
            bed_2: Some(ReactorConfig::bed_2()),
            carryover: Some(BED_1_CONVERSION),
            sweep: SweepRange::default(),
            pressures: default_pressures(),
        }
    }
}

impl ReactorTask {
    pub fn load(path: &Path) -> Result<Self, ReactorError> {
        let content = fs::read_to_string(path)?;
        let task: ReactorTask = serde_json::from_str(&content)?;
        task.bed_1.validate()?;
        if let Some(bed_2) = &task.bed_2 {
            bed_2.validate()?;
        }
        task.sweep.validate()?;
        info!("loaded reactor task from {}", path.display());
        Ok(task)
    }

    pub fn save(&self, path: &Path) -> Result<(), ReactorError> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn carryover_mode(&self) -> Carryover {
        match self.carryover {
            Some(X) => Carryover::Fixed(X),
            None => Carryover::Simulated,
        }
    }

    /// `None` when the task describes a single bed
    pub fn bed_series(&self) -> Option<BedSeries> {
        self.bed_2.clone().map(|bed_2| {
            BedSeries::new(self.bed_1.clone(), bed_2, self.carryover_mode())
        })
    }

    /// inlet temperature sweep of bed 1
    pub fn inlet_sweep(&self) -> InletTemperatureSweep {
        InletTemperatureSweep::new(self.bed_1.clone(), self.sweep)
    }
}

/// Writes the reference two-bed design as a task file to fill in.
pub fn create_template(path: &Path) -> Result<(), ReactorError> {
    ReactorTask::default().save(path)?;
    info!("template task written to {}", path.display());
    Ok(())
}
