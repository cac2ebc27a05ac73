//! # Optimum inlet temperature of a bed
//!
//! A hotter inlet speeds up the kinetics but lowers the equilibrium conversion and
//! pushes the outlet towards the catalyst temperature limit. The sweep runs one
//! independent simulation per sampled inlet temperature and picks the sample with the
//! highest outlet conversion, with and without the outlet temperature constraint.
//!
//! ```text
//! T_in = start, start + increment, ...  (< end)
//! best_below_limit = argmax X_out  subject to  T_out <= catalyst_limit
//! ```
#![allow(non_snake_case)]

use crate::Kinetics::mole_balance::MoleFractions;
use crate::ReactorsIVP::PackedBedIVP::{
    CATALYST_TEMPERATURE_LIMIT, ReactorConfig, ReactorError, ReactorState,
};
use log::info;
use prettytable::{Table, row};
use serde::{Deserialize, Serialize};

/// Outlet of one simulated inlet temperature
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepPoint {
    pub inlet_temperature: f64,
    pub outlet_temperature: f64,
    pub conversion: f64,
    pub mole_fractions: MoleFractions,
    pub equilibrium_constant: f64,
    pub rate_constant: f64,
    pub equilibrium_conversion: f64,
}

impl SweepPoint {
    fn from_state(state: &ReactorState) -> Self {
        let outlet = state.last();
        let (Keq, k, X_eq) = state
            .last_properties()
            .map(|p| (p.equilibrium_constant, p.rate_constant, p.equilibrium_conversion))
            .unwrap_or((0.0, 0.0, 0.0));
        Self {
            inlet_temperature: state.config().inlet_temperature,
            outlet_temperature: outlet.temperature,
            conversion: outlet.conversion,
            mole_fractions: outlet.mole_fractions,
            equilibrium_constant: Keq,
            rate_constant: k,
            equilibrium_conversion: X_eq,
        }
    }
}

/// Sweep settings: inlet temperatures `start..end` (end excluded) with `increment`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweepRange {
    pub start: f64,
    pub end: f64,
    pub increment: f64,
    /// maximum outlet temperature allowed by the catalyst, K
    pub catalyst_limit: f64,
}

impl Default for SweepRange {
    fn default() -> Self {
        Self {
            start: 550.0,
            end: 740.0,
            increment: 1.0,
            catalyst_limit: CATALYST_TEMPERATURE_LIMIT,
        }
    }
}

/// Largest number of inlet temperatures one sweep may sample
pub const MAX_SWEEP_SAMPLES: usize = 100_000;

impl SweepRange {
    /// Finite bounds, positive increment and a bounded number of samples
    pub fn validate(&self) -> Result<(), ReactorError> {
        let bounds = [
            ("start", self.start),
            ("end", self.end),
            ("increment", self.increment),
        ];
        for (name, value) in bounds {
            if !value.is_finite() {
                return Err(ReactorError::InvalidConfiguration(format!(
                    "sweep {} must be finite, got {}",
                    name, value
                )));
            }
        }
        if !(self.increment > 0.0) {
            return Err(ReactorError::InvalidConfiguration(format!(
                "sweep increment must be positive, got {}",
                self.increment
            )));
        }
        let samples = ((self.end - self.start) / self.increment).ceil();
        if !(samples <= MAX_SWEEP_SAMPLES as f64) {
            return Err(ReactorError::InvalidConfiguration(format!(
                "sweep from {} K to {} K by {} K exceeds {} samples",
                self.start, self.end, self.increment, MAX_SWEEP_SAMPLES
            )));
        }
        Ok(())
    }

    /// sampled inlet temperatures, empty for an invalid range
    pub fn temperatures(&self) -> Vec<f64> {
        if self.validate().is_err() {
            return Vec::new();
        }
        let samples = ((self.end - self.start) / self.increment).ceil().max(0.0) as usize;
        (0..samples)
            .map(|k| self.start + k as f64 * self.increment)
            .take_while(|&T| T < self.end)
            .collect()
    }
}

#[derive(Debug, Clone)]
pub struct InletTemperatureSweep {
    /// every sample is this bed with its inlet temperature replaced
    pub base: ReactorConfig,
    pub range: SweepRange,
}

#[derive(Debug, Clone)]
pub struct SweepResult {
    pub points: Vec<SweepPoint>,
    pub catalyst_limit: f64,
}

impl InletTemperatureSweep {
    pub fn new(base: ReactorConfig, range: SweepRange) -> Self {
        Self { base, range }
    }

    /// Simulates every sample; the first failing run aborts the sweep
    pub fn run(&self) -> Result<SweepResult, ReactorError> {
        self.range.validate()?;
        let temperatures = self.range.temperatures();
        info!(
            "inlet temperature sweep: {} samples from {} K to {} K",
            temperatures.len(),
            self.range.start,
            self.range.end
        );
        let mut points = Vec::with_capacity(temperatures.len());
        for T in temperatures {
            let state = ReactorState::simulate(self.base.clone().with_inlet_temperature(T))?;
            points.push(SweepPoint::from_state(&state));
        }
        let result = SweepResult {
            points,
            catalyst_limit: self.range.catalyst_limit,
        };
        if let Some(best) = result.best_below_limit() {
            info!(
                "optimum below {} K: T_in = {} K, X = {:.5}, T_out = {:.2} K",
                result.catalyst_limit, best.inlet_temperature, best.conversion, best.outlet_temperature
            );
        }
        Ok(result)
    }
}

/// first point with the highest conversion among `points`
fn best_of<'a>(points: impl Iterator<Item = &'a SweepPoint>) -> Option<&'a SweepPoint> {
    points.fold(None, |best: Option<&SweepPoint>, p| match best {
        Some(b) if b.conversion >= p.conversion => Some(b),
        _ => Some(p),
    })
}

impl SweepResult {
    /// highest conversion regardless of the outlet temperature
    pub fn best_overall(&self) -> Option<&SweepPoint> {
        best_of(self.points.iter())
    }

    /// highest conversion whose outlet stays at or below the catalyst limit
    pub fn best_below_limit(&self) -> Option<&SweepPoint> {
        best_of(
            self.points
                .iter()
                .filter(|p| p.outlet_temperature <= self.catalyst_limit),
        )
    }

    pub fn summary_table(&self) -> Table {
        let mut table = Table::new();
        table.add_row(row!["", "Inlet T (K)", "Conversion", "Outlet T (K)", "y NH3"]);
        let rows = [
            ("Max conversion", self.best_overall()),
            ("Max conversion below T limit", self.best_below_limit()),
        ];
        for (name, point) in rows {
            match point {
                Some(p) => table.add_row(row![
                    name,
                    format!("{:.2}", p.inlet_temperature),
                    format!("{:.5}", p.conversion),
                    format!("{:.2}", p.outlet_temperature),
                    format!("{:.5}", p.mole_fractions.nh3)
                ]),
                None => table.add_row(row![name, "-", "-", "-", "-"]),
            };
        }
        table
    }

    pub fn pretty_print(&self) {
        println!("\n=== Inlet temperature optimisation ===");
        self.summary_table().printstd();
    }
}
