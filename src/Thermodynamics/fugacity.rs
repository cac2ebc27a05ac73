//! # Fugacity coefficients of N2, H2 and NH3
//!
//! Empirical fits of the fugacity coefficient as a function of temperature `T` (K)
//! and total pressure `P` (atm) for the three reacting species of the ammonia
//! synthesis loop. Argon is treated as ideal and has no coefficient.
//!
//! The fits are valid for the synthesis window (roughly 600-800 K, 150-300 atm).
//! Outside that window they still return numbers, but those numbers mean nothing
//! physically; no range check is done here.
#![allow(non_snake_case)]

/// Fugacity coefficients of the three reacting species at one (T, P) point
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FugacityCoefficients {
    pub n2: f64,
    pub h2: f64,
    pub nh3: f64,
}

impl FugacityCoefficients {
    /// evaluates all three fits at temperature T (K) and pressure P (atm)
    pub fn at(T: f64, P: f64) -> Self {
        Self {
            n2: fugacity_n2(T, P),
            h2: fugacity_h2(T, P),
            nh3: fugacity_nh3(T, P),
        }
    }
}

/// φ_N2 = 0.93431737 + 0.2028538e-3·T + 0.295896e-3·P − 0.270727e-6·T² + 0.4775207e-6·P²
pub fn fugacity_n2(T: f64, P: f64) -> f64 {
    0.93431737 + 0.2028538e-3 * T + 0.295896e-3 * P - 0.270727e-6 * T.powi(2)
        + 0.4775207e-6 * P.powi(2)
}

/// Doubly exponential fit for hydrogen:
/// ```text
/// φ_H2 = exp( exp(−3.8402·T^0.125 + 0.541)·P
///           − exp(−0.1263·T^0.5 − 15.98)·P²
///           + 300·exp(−0.011901·T − 5.941)·exp(−P/300) )
/// ```
pub fn fugacity_h2(T: f64, P: f64) -> f64 {
    let linear = (-3.8402 * T.powf(0.125) + 0.541).exp() * P;
    let quadratic = (-0.1263 * T.powf(0.5) - 15.98).exp() * P.powi(2);
    let correction = 300.0 * (-0.011901 * T - 5.941).exp() * (-P / 300.0).exp();
    (linear - quadratic + correction).exp()
}

/// φ_NH3 = 0.1438996 + 0.002028538·T − 0.4487672e-3·P − 0.1142945e-5·T² + 0.2761216e-6·P²
pub fn fugacity_nh3(T: f64, P: f64) -> f64 {
    0.1438996 + 0.002028538 * T - 0.4487672e-3 * P - 0.1142945e-5 * T.powi(2)
        + 0.2761216e-6 * P.powi(2)
}
