//! # Adiabatic packed-bed reactor for ammonia synthesis
//!
//! One catalyst bed is an initial value problem along the bed axis `z` for the
//! temperature `T` and the nitrogen conversion `X`:
//!
//! ```text
//! dT/dz = η·(−ΔH)·A·r_NH3 / (F·Cp)
//! dX/dz = η·r_NH3·A / (2·Fn2)
//! ```
//! where `η` is the catalyst effectiveness factor, `A` the cross-sectional area of the
//! bed and `r_NH3` the Temkin-Pyzhev rate. The system is marched with fixed-step
//! forward Euler; the number of steps is `floor(L/h)`.
//!
//! ## Main Structures
//!
//! - **`ReactorConfig`**: inlet conditions and bed geometry of one run (serde-ready)
//! - **`StepRecord`**: everything known at one axial node; node 0 is the inlet
//! - **`StepProperties`**: quantities evaluated during the step that produced a node
//! - **`ReactorState`**: arena of step records, advanced by [`ReactorState::step`]
//! - **`ReactorError`**: configuration, kinetic-state and I/O failures
//!
//! ## Step order
//! Every step evaluates, from the last node only: effectiveness factor, fugacity
//! coefficients, heat of reaction, specific heat (with the composition of the last
//! node), composition at the current conversion, activation coefficients, k, Keq,
//! equilibrium conversion, rate; then the Euler update of `T` and `X`.
//!
//! ## Example
//! ```
//! use AmmoniaSynth::ReactorsIVP::PackedBedIVP::{ReactorConfig, ReactorState};
//! let state = ReactorState::simulate(ReactorConfig::bed_1()).unwrap();
//! assert_eq!(state.steps(), 2100);
//! assert!(state.last().temperature > 673.15);
//! ```
#![allow(non_snake_case)]

use crate::Kinetics::mole_balance::{FeedRates, MoleFractions, mole_fractions};
use crate::Kinetics::rate_law::{
    ActivationCoefficients, effectiveness_factor, equilibrium_constant, equilibrium_conversion,
    rate_constant, rate_of_formation,
};
use crate::Thermodynamics::fugacity::FugacityCoefficients;
use crate::Thermodynamics::heat::{heat_of_reaction, specific_heat};
use log::{debug, info, trace, warn};
use nalgebra::Vector2;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use thiserror::Error;

/// Internal diameter of both catalyst beds, m
pub const BED_DIAMETER: f64 = 0.55;
/// Cross-sectional area of the beds, m²
pub const CROSS_SECTIONAL_AREA: f64 = PI * (BED_DIAMETER / 2.0) * (BED_DIAMETER / 2.0);
/// Outlet conversion of bed 1 in the reference design, carried into bed 2
pub const BED_1_CONVERSION: f64 = 0.14296;
/// Maximum catalyst temperature, K
pub const CATALYST_TEMPERATURE_LIMIT: f64 = 803.15;
/// absorbs representation error of L/h before truncation (5.35/0.001 = 5349.999...)
const STEP_COUNT_TOLERANCE: f64 = 1e-9;
/// Largest number of Euler steps a single bed may take
pub const MAX_STEPS: usize = 1_000_000;

#[derive(Debug, Error)]
pub enum ReactorError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
    #[error("Invalid kinetic state at step {step}: {reason}")]
    InvalidKineticState { step: usize, reason: String },
    #[error(
        "Singular mole balance at conversion {conversion}: remaining molar flow is {denominator}"
    )]
    SingularMoleBalance { conversion: f64, denominator: f64 },
    #[error("Bed length exhausted after {steps} steps")]
    BedExhausted { steps: usize },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Inlet conditions and geometry of one bed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReactorConfig {
    /// axial step, m
    pub step_size: f64,
    /// inlet temperature, K
    pub inlet_temperature: f64,
    /// pressure, atm (no pressure drop along the bed)
    pub pressure: f64,
    /// bed length, m
    pub bed_length: f64,
    /// inlet mole fractions, expected to sum to 1
    pub inlet_composition: MoleFractions,
    /// total and nitrogen molar feed, kmol/hr
    pub feed: FeedRates,
}

impl ReactorConfig {
    /// First bed (R-601) of the reference design
    pub fn bed_1() -> Self {
        Self {
            step_size: 0.001,
            inlet_temperature: 673.15,
            pressure: 225.0,
            bed_length: 2.1,
            inlet_composition: MoleFractions::new(0.714089, 0.238253, 0.0213228, 0.0262431),
            feed: FeedRates::new(1041.55, 248.153),
        }
    }

    /// Second bed (R-602): cooled bed-1 effluent, feed reduced by the bed-1 conversion
    pub fn bed_2() -> Self {
        Self {
            step_size: 0.001,
            inlet_temperature: 692.0,
            pressure: 225.0,
            bed_length: 5.35,
            inlet_composition: MoleFractions::new(0.656696, 0.219138, 0.0959075, 0.0281596),
            feed: Self::bed_1().feed.downstream(BED_1_CONVERSION),
        }
    }

    pub fn with_inlet_temperature(mut self, T: f64) -> Self {
        self.inlet_temperature = T;
        self
    }

    pub fn with_pressure(mut self, P: f64) -> Self {
        self.pressure = P;
        self
    }

    pub fn with_bed_length(mut self, L: f64) -> Self {
        self.bed_length = L;
        self
    }

    /// Rejects settings that make the integration meaningless. The temperature is not
    /// checked: leaving the range of the correlations is the caller's business.
    pub fn validate(&self) -> Result<(), ReactorError> {
        let positive = [
            ("step size", self.step_size),
            ("bed length", self.bed_length),
            ("pressure", self.pressure),
            ("total feed F", self.feed.f),
            ("nitrogen feed Fn2", self.feed.fn2),
            ("inlet temperature", self.inlet_temperature),
        ];
        for (name, value) in positive {
            if !(value > 0.0) || !value.is_finite() {
                return Err(ReactorError::InvalidConfiguration(format!(
                    "{} must be positive and finite, got {}",
                    name, value
                )));
            }
        }
        let steps = self.bed_length / self.step_size;
        if !(steps <= MAX_STEPS as f64) {
            return Err(ReactorError::InvalidConfiguration(format!(
                "bed length {} m with step {} m needs more than {} steps",
                self.bed_length, self.step_size, MAX_STEPS
            )));
        }
        let y = &self.inlet_composition;
        if !y.is_physical() {
            return Err(ReactorError::InvalidConfiguration(format!(
                "inlet mole fractions must lie in [0, 1], got {:?}",
                y
            )));
        }
        if (y.sum() - 1.0).abs() > 1e-3 {
            warn!("inlet mole fractions sum to {} instead of 1", y.sum());
        }
        Ok(())
    }

    /// Number of Euler steps, `floor(bed_length / step_size)`. The remainder of the bed
    /// shorter than one step is dropped.
    pub fn n_steps(&self) -> usize {
        (self.bed_length / self.step_size + STEP_COUNT_TOLERANCE).floor() as usize
    }
}

/// Quantities evaluated while producing a node from its predecessor
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StepProperties {
    pub effectiveness_factor: f64,
    /// J/mol NH3
    pub heat_of_reaction: f64,
    pub specific_heat: f64,
    pub fugacity: FugacityCoefficients,
    pub activation: ActivationCoefficients,
    pub rate_constant: f64,
    pub equilibrium_constant: f64,
    pub equilibrium_conversion: f64,
    pub rate_nh3: f64,
    pub dT_dz: f64,
    pub dX_dz: f64,
}

/// One axial node of the bed
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepRecord {
    /// step index × step size, m
    pub position: f64,
    /// K
    pub temperature: f64,
    /// nitrogen conversion
    pub conversion: f64,
    /// composition evaluated during the step that produced this node
    pub mole_fractions: MoleFractions,
    /// `None` for the inlet node
    pub properties: Option<StepProperties>,
}

/// Running state of one bed: the immutable config and the growing arena of nodes
#[derive(Debug, Clone)]
pub struct ReactorState {
    config: ReactorConfig,
    n_steps: usize,
    records: Vec<StepRecord>,
}

impl ReactorState {
    /// Validates the config and creates the inlet node (step 0)
    pub fn new(config: ReactorConfig) -> Result<Self, ReactorError> {
        config.validate()?;
        let n_steps = config.n_steps();
        let mut records = Vec::with_capacity(n_steps.min(MAX_STEPS) + 1);
        records.push(StepRecord {
            position: 0.0,
            temperature: config.inlet_temperature,
            conversion: 0.0,
            mole_fractions: config.inlet_composition,
            properties: None,
        });
        Ok(Self {
            config,
            n_steps,
            records,
        })
    }

    /// Builds a fresh state and marches it through the whole bed
    pub fn simulate(config: ReactorConfig) -> Result<Self, ReactorError> {
        let mut state = Self::new(config)?;
        state.solve()?;
        Ok(state)
    }

    /// Runs the remaining `floor(L/h)` steps
    pub fn solve(&mut self) -> Result<(), ReactorError> {
        let remaining = self.n_steps - self.steps();
        info!(
            "packed bed: {} steps of {} m, T_in = {} K, P = {} atm",
            remaining, self.config.step_size, self.config.inlet_temperature, self.config.pressure
        );
        self.run(remaining)?;
        let last = self.last();
        info!(
            "packed bed finished: X = {:.6}, T_out = {:.3} K",
            last.conversion, last.temperature
        );
        Ok(())
    }

    /// Advances the bed by `iterations` steps, stopping at the first failure
    pub fn run(&mut self, iterations: usize) -> Result<(), ReactorError> {
        for _ in 0..iterations {
            self.step()?;
        }
        Ok(())
    }

    /// One forward-Euler step; appends and returns the new node
    pub fn step(&mut self) -> Result<&StepRecord, ReactorError> {
        let i = self.steps();
        if i >= self.n_steps {
            return Err(ReactorError::BedExhausted { steps: i });
        }
        let current = *self.last();
        let P = self.config.pressure;
        let h = self.config.step_size;
        let feed = self.config.feed;
        let T = current.temperature;
        let X = current.conversion;
        let step = i + 1;

        let eff = effectiveness_factor(T, X);
        let fugacity = FugacityCoefficients::at(T, P);
        let dH = heat_of_reaction(T, P);
        let Cp = specific_heat(T, P, &current.mole_fractions);

        let y = mole_fractions(X, &self.config.inlet_composition, &feed)?;
        let activation = ActivationCoefficients::new(&fugacity, &y, P);
        let k = rate_constant(T);
        let Keq = equilibrium_constant(T);
        let X_eq = equilibrium_conversion(Keq);
        let rate = rate_of_formation(k, Keq, &activation, step)?;

        let dT_dz = (eff * (-dH) * CROSS_SECTIONAL_AREA * rate) / (feed.f * Cp);
        let dX_dz = (eff * rate * CROSS_SECTIONAL_AREA) / (feed.fn2 * 2.0);
        let y_new = Vector2::new(T, X) + Vector2::new(dT_dz, dX_dz) * h;
        let (T_new, X_new) = (y_new[0], y_new[1]);

        if !T_new.is_finite() {
            return Err(ReactorError::InvalidKineticState {
                step,
                reason: format!("temperature became {}", T_new),
            });
        }
        if !(0.0..1.0).contains(&X_new) {
            return Err(ReactorError::InvalidKineticState {
                step,
                reason: format!("conversion left [0, 1): {}", X_new),
            });
        }
        trace!("step {}: T = {}, X = {}, r = {}", step, T_new, X_new, rate);

        self.records.push(StepRecord {
            position: step as f64 * h,
            temperature: T_new,
            conversion: X_new,
            mole_fractions: y,
            properties: Some(StepProperties {
                effectiveness_factor: eff,
                heat_of_reaction: dH,
                specific_heat: Cp,
                fugacity,
                activation,
                rate_constant: k,
                equilibrium_constant: Keq,
                equilibrium_conversion: X_eq,
                rate_nh3: rate,
                dT_dz,
                dX_dz,
            }),
        });
        if step == self.n_steps {
            debug!("bed length {} m exhausted", self.config.bed_length);
        }
        Ok(self.last())
    }

    pub fn config(&self) -> &ReactorConfig {
        &self.config
    }

    /// number of completed steps
    pub fn steps(&self) -> usize {
        self.records.len() - 1
    }

    /// number of steps a full run takes
    pub fn total_steps(&self) -> usize {
        self.n_steps
    }

    pub fn is_finished(&self) -> bool {
        self.steps() == self.n_steps
    }

    /// all nodes, index 0 is the inlet
    pub fn records(&self) -> &[StepRecord] {
        &self.records
    }

    pub fn record(&self, i: usize) -> Option<&StepRecord> {
        self.records.get(i)
    }

    /// most recent node (the outlet once the run is finished)
    pub fn last(&self) -> &StepRecord {
        // the inlet node is pushed in `new`, so the arena is never empty
        &self.records[self.records.len() - 1]
    }

    /// properties of the last completed step, `None` before the first step
    pub fn last_properties(&self) -> Option<&StepProperties> {
        self.records.iter().rev().find_map(|r| r.properties.as_ref())
    }

    pub fn positions(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.position).collect()
    }

    pub fn temperatures(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.temperature).collect()
    }

    pub fn conversions(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.conversion).collect()
    }

    /// Axial position of the first node whose temperature reaches `limit`
    pub fn position_reaching(&self, limit: f64) -> Option<f64> {
        self.records
            .iter()
            .find(|r| r.temperature >= limit)
            .map(|r| r.position)
    }
}
