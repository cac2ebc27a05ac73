//! # Mole balance of N2 + 3 H2 = 2 NH3
//!
//! Composition of the gas as a function of the nitrogen conversion `X`. Every mole of
//! N2 converted removes two moles of gas, so the total molar flow falls from `F` to
//! `F - 2·X·Fn2`. Argon is inert and only gets diluted/concentrated.
#![allow(non_snake_case)]

use crate::ReactorsIVP::PackedBedIVP::ReactorError;
use serde::{Deserialize, Serialize};

/// Mole fractions of the four species of the synthesis gas
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MoleFractions {
    pub h2: f64,
    pub n2: f64,
    pub nh3: f64,
    pub ar: f64,
}

impl MoleFractions {
    pub fn new(h2: f64, n2: f64, nh3: f64, ar: f64) -> Self {
        Self { h2, n2, nh3, ar }
    }

    pub fn sum(&self) -> f64 {
        self.h2 + self.n2 + self.nh3 + self.ar
    }

    /// true when every fraction lies in [0, 1]
    pub fn is_physical(&self) -> bool {
        [self.h2, self.n2, self.nh3, self.ar]
            .iter()
            .all(|y| (0.0..=1.0).contains(y))
    }
}

/// Total (`f`) and nitrogen (`fn2`) molar feed rates, kmol/hr
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeedRates {
    pub f: f64,
    pub fn2: f64,
}

impl FeedRates {
    pub fn new(f: f64, fn2: f64) -> Self {
        Self { f, fn2 }
    }

    /// Total molar flow left after converting the fraction `X` of the nitrogen
    pub fn remaining_moles(&self, X: f64) -> f64 {
        self.f - 2.0 * X * self.fn2
    }

    /// Feed of the next bed when this feed leaves its bed at conversion `X`:
    /// `Fn2·(1 − X)` nitrogen and `F − 2·Fn2·X` in total
    pub fn downstream(&self, X: f64) -> Self {
        Self {
            f: self.remaining_moles(X),
            fn2: self.fn2 * (1.0 - X),
        }
    }
}

/// Mole fractions at conversion `X` for inlet composition `y0` and feed rates `feed`.
///
/// ```text
/// yN2  = (yN2⁰·F − Fn2·X)        / (F − 2·X·Fn2)
/// yH2  = (yH2⁰·F − 3·X·yN2⁰·F)   / (F − 2·X·Fn2)
/// yNH3 = (yNH3⁰·F + 2·X·Fn2)     / (F − 2·X·Fn2)
/// yAr  =  yAr⁰·F                 / (F − 2·X·Fn2)
/// ```
/// Fails with [`ReactorError::SingularMoleBalance`] when the remaining molar flow is
/// not positive.
pub fn mole_fractions(
    X: f64,
    y0: &MoleFractions,
    feed: &FeedRates,
) -> Result<MoleFractions, ReactorError> {
    let F = feed.f;
    let Fn2 = feed.fn2;
    let denominator = feed.remaining_moles(X);
    if !(denominator > 0.0) || !denominator.is_finite() {
        return Err(ReactorError::SingularMoleBalance {
            conversion: X,
            denominator,
        });
    }
    Ok(MoleFractions {
        n2: (y0.n2 * F - Fn2 * X) / denominator,
        h2: (y0.h2 * F - 3.0 * X * y0.n2 * F) / denominator,
        nh3: (y0.nh3 * F + 2.0 * X * Fn2) / denominator,
        ar: (F * y0.ar) / denominator,
    })
}
