/// fugacity coefficients of the reacting gases as functions of temperature and pressure
pub mod fugacity;
/// specific heat of the mixture, heat of reaction, molar masses
/// # Examples
/// ```
/// use AmmoniaSynth::Kinetics::mole_balance::MoleFractions;
/// use AmmoniaSynth::Thermodynamics::heat::{heat_of_reaction, specific_heat};
/// let y = MoleFractions::new(0.714089, 0.238253, 0.0213228, 0.0262431);
/// let cp = specific_heat(673.15, 225.0, &y);
/// let dH = heat_of_reaction(673.15, 225.0);
/// assert!(cp > 0.0);
/// assert!(dH < 0.0);
/// ```
pub mod heat;
