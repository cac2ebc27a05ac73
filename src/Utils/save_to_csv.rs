//! Per-step history of a bed as comma separated values, one row per record.
use crate::ReactorsIVP::PackedBedIVP::{ReactorError, ReactorState};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

pub const HISTORY_HEADER: [&str; 12] = [
    "z (m)",
    "T (K)",
    "X",
    "yH2",
    "yN2",
    "yNH3",
    "yAr",
    "eta",
    "Keq",
    "rNH3 (kmol/m3 hr)",
    "dT/dz (K/m)",
    "dX/dz (1/m)",
];

/// Writes every record of `state`. Derived columns of the inlet node are left empty.
pub fn save_history_csv(state: &ReactorState, path: &Path) -> Result<(), ReactorError> {
    let mut writer = BufWriter::new(File::create(path)?);
    writeln!(writer, "{}", HISTORY_HEADER.join(","))?;
    for record in state.records() {
        let y = &record.mole_fractions;
        write!(
            writer,
            "{},{},{},{},{},{},{}",
            record.position, record.temperature, record.conversion, y.h2, y.n2, y.nh3, y.ar
        )?;
        match &record.properties {
            Some(p) => writeln!(
                writer,
                ",{},{},{},{},{}",
                p.effectiveness_factor, p.equilibrium_constant, p.rate_nh3, p.dT_dz, p.dX_dz
            )?,
            None => writeln!(writer, ",,,,,")?,
        }
    }
    writer.flush()?;
    Ok(())
}
