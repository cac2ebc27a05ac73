//! Two catalyst beds in series with inter-bed cooling.
//!
//! The cooler between the beds is not modelled: the inlet temperature and composition
//! of bed 2 are given. Only the feed rates are carried over from bed 1, reduced by the
//! bed-1 conversion.
#![allow(non_snake_case)]

use super::PackedBedIVP::{ReactorConfig, ReactorError, ReactorState};
use log::info;
use serde::{Deserialize, Serialize};

/// Which bed-1 conversion sizes the bed-2 feed
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Carryover {
    /// use the outlet conversion of the simulated bed 1
    Simulated,
    /// use a fixed value (e.g. the converged flowsheet value)
    Fixed(f64),
}

#[derive(Debug, Clone)]
pub struct BedSeries {
    pub bed_1: ReactorConfig,
    /// bed 2 inlet; its feed rates are overwritten from bed 1
    pub bed_2: ReactorConfig,
    pub carryover: Carryover,
}

#[derive(Debug, Clone)]
pub struct BedSeriesResult {
    pub bed_1: ReactorState,
    pub bed_2: ReactorState,
    /// conversion used to size the bed-2 feed
    pub carryover: f64,
}

impl BedSeries {
    pub fn new(bed_1: ReactorConfig, bed_2: ReactorConfig, carryover: Carryover) -> Self {
        Self {
            bed_1,
            bed_2,
            carryover,
        }
    }

    /// reference design: R-601 followed by R-602 with the fixed 0.14296 carryover
    pub fn reference_design() -> Self {
        Self::new(
            ReactorConfig::bed_1(),
            ReactorConfig::bed_2(),
            Carryover::Fixed(super::PackedBedIVP::BED_1_CONVERSION),
        )
    }

    pub fn run(&self) -> Result<BedSeriesResult, ReactorError> {
        let bed_1 = ReactorState::simulate(self.bed_1.clone())?;
        let carryover = match self.carryover {
            Carryover::Simulated => bed_1.last().conversion,
            Carryover::Fixed(X) => X,
        };
        let mut bed_2_config = self.bed_2.clone();
        bed_2_config.feed = self.bed_1.feed.downstream(carryover);
        info!(
            "bed 2 feed from carryover X = {}: F = {:.3}, Fn2 = {:.3} kmol/hr",
            carryover, bed_2_config.feed.f, bed_2_config.feed.fn2
        );
        let bed_2 = ReactorState::simulate(bed_2_config)?;
        Ok(BedSeriesResult {
            bed_1,
            bed_2,
            carryover,
        })
    }
}

impl BedSeriesResult {
    /// Nitrogen conversion over both beds, 1 − (1 − X1)·(1 − X2)
    pub fn overall_conversion(&self) -> f64 {
        overall_conversion(self.carryover, self.bed_2.last().conversion)
    }
}

/// Combined conversion of two beds where `X2` is relative to the bed-2 nitrogen feed
pub fn overall_conversion(X1: f64, X2: f64) -> f64 {
    1.0 - (1.0 - X1) * (1.0 - X2)
}
