//! # Temkin-Pyzhev kinetics of ammonia synthesis
//!
//! Rate constant, equilibrium constant, catalyst effectiveness factor and the rate of
//! NH3 formation. The activities entering the rate law are "activation coefficients":
//! fugacity coefficient × mole fraction × pressure, i.e. partial fugacities in atm.
//!
//! ```text
//! r_NH3 = 2·k·( Keq²·a_N2·(a_H2³/a_NH3²)^α − (a_NH3²/a_H2³)^(1−α) )
//! k     = k0·exp(−E/(R·T))
//! ```
#![allow(non_snake_case)]

use crate::Kinetics::mole_balance::MoleFractions;
use crate::ReactorsIVP::PackedBedIVP::ReactorError;
use crate::Thermodynamics::fugacity::FugacityCoefficients;

/// Arrhenius pre-exponential factor
pub const K0: f64 = 8.85e14;
/// Activation energy of ammonia synthesis on the iron catalyst, J/mol
pub const E_ACT: f64 = 1.7056e5;
/// Universal gas constant in J/(mol·K)
pub const R_G: f64 = 8.314;
/// Temkin parameter, usually 0.5..0.75
pub const ALPHA: f64 = 0.5;

/// coefficients of the effectiveness factor fit η(T, X)
const EFF_FACTOR_COEFFS: [f64; 7] = [
    -8.2125534,
    0.03774149,
    6.190112,
    -5.354571e-5,
    -20.86963,
    2.379142e-8,
    27.88403,
];

/// Partial fugacities (atm) of the reacting species
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ActivationCoefficients {
    pub n2: f64,
    pub h2: f64,
    pub nh3: f64,
}

impl ActivationCoefficients {
    /// a_i = φ_i · y_i · P
    pub fn new(phi: &FugacityCoefficients, y: &MoleFractions, P: f64) -> Self {
        Self {
            n2: phi.n2 * y.n2 * P,
            h2: phi.h2 * y.h2 * P,
            nh3: phi.nh3 * y.nh3 * P,
        }
    }
}

/// Catalyst effectiveness factor, cubic in temperature and conversion
pub fn effectiveness_factor(T: f64, X: f64) -> f64 {
    let c = EFF_FACTOR_COEFFS;
    c[0] + c[1] * T + c[2] * X + c[3] * T.powi(2) + c[4] * X.powi(2) + c[5] * T.powi(3)
        + c[6] * X.powi(3)
}

/// Rate constant of the forward reaction, k0·exp(−E/(R·T))
pub fn rate_constant(T: f64) -> f64 {
    K0 * (-E_ACT / (R_G * T)).exp()
}

/// Equilibrium constant:
/// ```text
/// log10(Keq) = −2.691122·log10(T) − 5.519265e-5·T + 1.848863e-7·T² + 2001.6/T + 2.689
/// ```
pub fn equilibrium_constant(T: f64) -> f64 {
    let exponent = -2.691122 * T.log10() - 5.519265e-5 * T + 1.848863e-7 * T.powi(2)
        + 2001.6 / T
        + 2.689;
    10f64.powf(exponent)
}

/// Approximate equilibrium conversion, 100·Keq/(100·Keq + 1). Used for reporting only.
pub fn equilibrium_conversion(Keq: f64) -> f64 {
    (Keq * 100.0) / (Keq * 100.0 + 1.0)
}

/// Rate of NH3 formation from the Temkin-Pyzhev law.
///
/// Every activation coefficient must be strictly positive: the law raises ratios of
/// them to the fractional power α. Otherwise the kinetic state is invalid and
/// [`ReactorError::InvalidKineticState`] is returned, tagged with `step`.
pub fn rate_of_formation(
    k: f64,
    Keq: f64,
    a: &ActivationCoefficients,
    step: usize,
) -> Result<f64, ReactorError> {
    for (name, value) in [("N2", a.n2), ("H2", a.h2), ("NH3", a.nh3)] {
        if !(value > 0.0) || !value.is_finite() {
            return Err(ReactorError::InvalidKineticState {
                step,
                reason: format!("activation coefficient of {} is {}", name, value),
            });
        }
    }
    let forward = Keq.powi(2) * a.n2 * (a.h2.powi(3) / a.nh3.powi(2)).powf(ALPHA);
    let backward = (a.nh3.powi(2) / a.h2.powi(3)).powf(1.0 - ALPHA);
    let rate = 2.0 * k * (forward - backward);
    if !rate.is_finite() {
        return Err(ReactorError::InvalidKineticState {
            step,
            reason: format!("rate of NH3 formation is {}", rate),
        });
    }
    Ok(rate)
}
