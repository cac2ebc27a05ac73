//! # Pretty Printing and export of a finished bed
//!
//! Tabular summary of inlet/outlet values (prettytable) and conversion of the node
//! arena into a solution matrix (variables × nodes) for plotting collaborators.

use super::PackedBedIVP::ReactorState;
use crate::Thermodynamics::heat::mean_molar_mass;
use nalgebra::{DMatrix, DVector};
use prettytable::{Table, row};

/// row names of [`ReactorState::solution_matrix`]
pub const SOLUTION_ROWS: [&str; 6] = ["T", "X", "yH2", "yN2", "yNH3", "yAr"];

impl ReactorState {
    /// Solution matrix with rows `SOLUTION_ROWS` and one column per node
    pub fn solution_matrix(&self) -> DMatrix<f64> {
        let mut flat = Vec::with_capacity(SOLUTION_ROWS.len() * self.records().len());
        for r in self.records() {
            let y = &r.mole_fractions;
            flat.extend_from_slice(&[r.temperature, r.conversion, y.h2, y.n2, y.nh3, y.ar]);
        }
        DMatrix::from_vec(SOLUTION_ROWS.len(), self.records().len(), flat)
    }

    /// axial positions of the nodes
    pub fn x_mesh(&self) -> DVector<f64> {
        DVector::from_vec(self.positions())
    }

    /// Summary of the run: inlet/outlet state and the properties of the last step
    pub fn summary_table(&self) -> Table {
        let config = self.config();
        let inlet = &self.records()[0];
        let outlet = self.last();
        let mut table = Table::new();
        table.add_row(row!["Parameter", "Inlet", "Outlet", "Units"]);
        table.add_row(row![
            "Temperature",
            format!("{:.3}", inlet.temperature),
            format!("{:.3}", outlet.temperature),
            "K"
        ]);
        table.add_row(row![
            "Conversion N2",
            format!("{:.5}", inlet.conversion),
            format!("{:.5}", outlet.conversion),
            "-"
        ]);
        let species = [
            ("Mole fraction H2", inlet.mole_fractions.h2, outlet.mole_fractions.h2),
            ("Mole fraction N2", inlet.mole_fractions.n2, outlet.mole_fractions.n2),
            ("Mole fraction NH3", inlet.mole_fractions.nh3, outlet.mole_fractions.nh3),
            ("Mole fraction Ar", inlet.mole_fractions.ar, outlet.mole_fractions.ar),
        ];
        for (name, y_in, y_out) in species {
            table.add_row(row![name, format!("{:.5}", y_in), format!("{:.5}", y_out), "-"]);
        }
        table.add_row(row![
            "Mean molar mass",
            format!("{:.3}", mean_molar_mass(&inlet.mole_fractions)),
            format!("{:.3}", mean_molar_mass(&outlet.mole_fractions)),
            "g/mol"
        ]);
        table.add_row(row!["Pressure", format!("{:.1}", config.pressure), "", "atm"]);
        table.add_row(row![
            "Bed length",
            "",
            format!("{:.3}", outlet.position),
            "m"
        ]);

        if let Some(p) = self.last_properties() {
            let last_step = [
                ("Equilibrium constant", p.equilibrium_constant, "-"),
                ("Equilibrium conversion", p.equilibrium_conversion, "-"),
                ("Reaction rate constant", p.rate_constant, "-"),
                ("Rate of NH3 formation", p.rate_nh3, "kmol/m3/hr"),
                ("Effectiveness factor", p.effectiveness_factor, "-"),
                ("Fugacity coefficient H2", p.fugacity.h2, "-"),
                ("Fugacity coefficient N2", p.fugacity.n2, "-"),
                ("Fugacity coefficient NH3", p.fugacity.nh3, "-"),
                ("Activation coefficient H2", p.activation.h2, "atm"),
                ("Activation coefficient N2", p.activation.n2, "atm"),
                ("Activation coefficient NH3", p.activation.nh3, "atm"),
                ("Heat of reaction", p.heat_of_reaction, "J/mol NH3"),
                ("Specific heat", p.specific_heat, "kJ/kmol/K"),
            ];
            for (name, value, units) in last_step {
                table.add_row(row![name, "", format!("{:.4}", value), units]);
            }
        }
        table
    }

    pub fn pretty_print(&self, title: &str) {
        println!("\n=== {} ===", title);
        self.summary_table().printstd();
    }
}
