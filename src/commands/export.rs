//! CSV export command

use crate::{storage::StatsDatabase, Result};
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Handle `export`: CSV to `output` if given, otherwise to `out`
pub fn handle_export(
    db: &StatsDatabase,
    output: Option<&Path>,
    out: &mut impl Write,
) -> Result<()> {
    let csv = db.export_csv()?;

    match output {
        Some(path) => {
            std::fs::write(path, &csv)?;
            info!(path = %path.display(), bytes = csv.len(), "exported stats");
            writeln!(out, "✓ Stats exported to {}", path.display())?;
        }
        None => write!(out, "{}", csv)?,
    }
    Ok(())
}
