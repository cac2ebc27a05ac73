//! Temperature and conversion profiles of one bed at several operating pressures.
#![allow(non_snake_case)]

use crate::ReactorsIVP::PackedBedIVP::{ReactorConfig, ReactorError, ReactorState};
use log::info;
use prettytable::{Table, row};

/// pressures of the reference study, atm
pub const REFERENCE_PRESSURES: [f64; 5] = [150.0, 175.0, 200.0, 225.0, 250.0];

#[derive(Debug, Clone)]
pub struct PressureProfile {
    pub pressure: f64,
    pub state: ReactorState,
    /// position where the temperature first reaches the catalyst limit
    pub limit_position: Option<f64>,
}

impl PressureProfile {
    pub fn outlet_conversion(&self) -> f64 {
        self.state.last().conversion
    }

    pub fn outlet_temperature(&self) -> f64 {
        self.state.last().temperature
    }
}

/// Runs `base` once per pressure
pub fn pressure_sweep(
    base: &ReactorConfig,
    pressures: &[f64],
    catalyst_limit: f64,
) -> Result<Vec<PressureProfile>, ReactorError> {
    let mut profiles = Vec::with_capacity(pressures.len());
    for &P in pressures {
        let state = ReactorState::simulate(base.clone().with_pressure(P))?;
        let limit_position = state.position_reaching(catalyst_limit);
        info!(
            "P = {} atm: X = {:.5}, T_out = {:.2} K, limit reached at {:?} m",
            P,
            state.last().conversion,
            state.last().temperature,
            limit_position
        );
        profiles.push(PressureProfile {
            pressure: P,
            state,
            limit_position,
        });
    }
    Ok(profiles)
}

pub fn pressure_table(profiles: &[PressureProfile]) -> Table {
    let mut table = Table::new();
    table.add_row(row!["P (atm)", "Conversion", "Outlet T (K)", "T limit at (m)"]);
    for p in profiles {
        let limit = p
            .limit_position
            .map(|z| format!("{:.3}", z))
            .unwrap_or_else(|| "-".to_string());
        table.add_row(row![
            format!("{:.0}", p.pressure),
            format!("{:.5}", p.outlet_conversion()),
            format!("{:.2}", p.outlet_temperature()),
            limit
        ]);
    }
    table
}
