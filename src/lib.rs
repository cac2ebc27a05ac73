#[allow(non_snake_case)]
pub mod Kinetics;
#[allow(non_snake_case)]
pub mod Optimization;
#[allow(non_snake_case)]
pub mod ReactorsIVP;
#[allow(non_snake_case)]
pub mod Thermodynamics;
#[allow(non_snake_case)]
pub mod Utils;
pub mod cli;
