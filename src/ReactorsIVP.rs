//! # Reactor Initial Value Problem (IVP) Module
//!
//! Axial models of adiabatic catalyst beds for ammonia synthesis, marched from the
//! inlet to the outlet with fixed-step forward Euler.
//!
//! ## Mathematical Model
//!
//! ### Nomenclature
//!
//! | Symbol | Description | Units |
//! |--------|-------------|-------|
//! | `z` | axial coordinate | m |
//! | `h` | step size | m |
//! | `T` | temperature | K |
//! | `X` | nitrogen conversion | - |
//! | `P` | pressure | atm |
//! | `F`, `Fn2` | total and nitrogen molar feed | kmol/hr |
//! | `A` | cross-sectional area of the bed | m² |
//! | `η` | catalyst effectiveness factor | - |
//!
//! ### Governing Equations
//!
//! ```text
//! dT/dz = η(T,X)·(−ΔH(T,P))·A·r(T,X) / (F·Cp(T,P,y))
//! dX/dz = η(T,X)·r(T,X)·A / (2·Fn2)
//! ```
//!
//! ### Model Assumptions
//!
//! - no pressure drop along the bed
//! - no heat exchange with the surroundings
//! - both beds share the same diameter, only length and feed differ

#[allow(non_snake_case)]
pub mod PackedBedIVP;
pub mod bed_series;
pub mod packed_bed_output;
