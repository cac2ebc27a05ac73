//! # Heat effects of the synthesis mixture
//!
//! Mixture specific heat (mole-fraction weighted sum of per-species polynomials),
//! heat of the ammonia synthesis reaction and mean molar mass of the gas.
//! The factor 4.184 converts the calorie based fits to joules.
#![allow(non_snake_case)]

use crate::Kinetics::mole_balance::MoleFractions;

/// cal -> J
pub const CAL_TO_J: f64 = 4.184;

/// Molar masses, g/mol
pub const MW_H2: f64 = 2.016;
pub const MW_N2: f64 = 28.0134;
pub const MW_NH3: f64 = 17.0305;
pub const MW_AR: f64 = 39.948;

/// Cp of hydrogen, cal/mol/K
fn cp_h2(T: f64) -> f64 {
    6.952 - 4.576e-4 * T + 9.563e-7 * T.powi(2) - 2.079e-10 * T.powi(3)
}

/// Cp of nitrogen, cal/mol/K
fn cp_n2(T: f64) -> f64 {
    6.903 - 3.753e-4 * T + 1.93e-6 * T.powi(2) - 6.861e-10 * T.powi(3)
}

/// Cp of argon (monatomic, constant), cal/mol/K
const CP_AR: f64 = 4.9675;

/// Cp of ammonia with its pressure correction, cal/mol/K
fn cp_nh3(T: f64, P: f64) -> f64 {
    let ideal = 6.5846 - 6.1251e-3 * T + 2.3663e-6 * T.powi(2) - 1.5981e-9 * T.powi(3);
    let pressure_correction = 96.1678 - 0.067571 * P
        + (-0.2225 + 1.6847e-4 * P) * T
        + (1.289e-4 - 1.0095e-7 * P) * T.powi(2);
    ideal + pressure_correction
}

/// Specific heat of the mixture at temperature T (K), pressure P (atm) and composition `y`.
///
/// Units follow the energy balance of the bed (kcal/kmol/K scaled by 4.184).
pub fn specific_heat(T: f64, P: f64, y: &MoleFractions) -> f64 {
    CAL_TO_J * cp_h2(T) * y.h2
        + CAL_TO_J * cp_n2(T) * y.n2
        + CP_AR * y.ar * CAL_TO_J
        + CAL_TO_J * cp_nh3(T, P) * y.nh3
}

/// Heat of reaction, J/mol NH3 (negative: the synthesis is exothermic)
/// ```text
/// ΔH = 4.184·( −P·(0.54526 + 340.609/T + 459.734e6/T³)
///              − 5.34685·T − 0.0002525·T² + 1.69167e-6·T³ − 9157.09 )
/// ```
pub fn heat_of_reaction(T: f64, P: f64) -> f64 {
    CAL_TO_J
        * (-P * (0.54526 + 340.609 / T + 459.734e6 / T.powi(3)) - 5.34685 * T
            - 0.0002525 * T.powi(2)
            + 0.00000169167 * T.powi(3)
            - 9157.09)
}

/// mean molar mass of the mixture, g/mol
pub fn mean_molar_mass(y: &MoleFractions) -> f64 {
    y.ar * MW_AR + y.h2 * MW_H2 + y.n2 * MW_N2 + y.nh3 * MW_NH3
}
