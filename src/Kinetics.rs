/// composition of the synthesis gas as a function of nitrogen conversion, feed rates
/// # Examples
/// ```
/// use AmmoniaSynth::Kinetics::mole_balance::{mole_fractions, FeedRates, MoleFractions};
/// let y0 = MoleFractions::new(0.75, 0.25, 0.0, 0.0);
/// let feed = FeedRates::new(1000.0, 250.0);
/// let y = mole_fractions(0.2, &y0, &feed).unwrap();
/// assert!((y.sum() - 1.0).abs() < 1e-12);
/// assert!(y.nh3 > 0.0);
/// ```
pub mod mole_balance;
/// Temkin-Pyzhev rate law: rate constant, equilibrium constant, effectiveness factor,
/// activation coefficients and the rate of ammonia formation.
/// All functions are pure; only the rate law itself can fail (non-positive activation
/// coefficients make the fractional powers undefined).
pub mod rate_law;
