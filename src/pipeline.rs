use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use crate::error::{Result, ToolError};
use crate::io::{csv_read, csv_write};
use crate::model::{Dataset, NEW_HIRE, Record};
use crate::reconcile::{add_missing_columns, add_new_hire_column, combine, remove_duplicates};

/// Paths of the three exports being reconciled.
#[derive(Debug, Clone)]
pub struct RosterInputs {
    pub all_employees: PathBuf,
    pub new_hires: PathBuf,
    pub terminated: PathBuf,
}

impl RosterInputs {
    /// Fails with [`ToolError::MissingInput`] for the first path that does
    /// not exist.
    pub fn ensure_exist(&self) -> Result<()> {
        for path in [&self.all_employees, &self.new_hires, &self.terminated] {
            if !path.exists() {
                return Err(ToolError::MissingInput(path.clone()));
            }
        }
        Ok(())
    }
}

/// Reads the three exports, reconciles them, and writes the roster to
/// `output`. Returns the number of roster rows written.
#[instrument(
    level = "info",
    skip_all,
    fields(
        all_employees = %inputs.all_employees.display(),
        new_hires = %inputs.new_hires.display(),
        terminated = %inputs.terminated.display()
    )
)]
pub fn reconcile_files<W: Write>(inputs: &RosterInputs, output: W) -> Result<usize> {
    info!("Reading CSV files...");
    let active = read(&inputs.all_employees)?;
    let new_hires = read(&inputs.new_hires)?;
    let departures = read(&inputs.terminated)?;
    info!(
        active = active.len(),
        new_hires = new_hires.len(),
        departures = departures.len(),
        "loaded exports"
    );

    let roster = reconcile(active, &new_hires, departures)?;

    info!("Outputting the final data set...");
    csv_write::write_records(output, &roster)?;
    info!(row_count = roster.len(), "All done.");
    Ok(roster.len())
}

/// Runs the reconciliation stages over in-memory datasets.
pub fn reconcile(active: Dataset, new_hires: &[Record], departures: Dataset) -> Result<Dataset> {
    info!("Adding missing columns to active employees...");
    let active = add_new_hire_column(active, new_hires)?;
    let hires = active
        .iter()
        .filter(|record| record.get(NEW_HIRE) == Some("Y"))
        .count();
    debug!(hires, "flagged new hires");

    info!("Adding missing columns to departed employees...");
    let departures = add_missing_columns(departures);

    info!("Collating all data into a single data set...");
    let combined = combine(active, departures.clone());
    let combined_len = combined.len();

    info!("Removing duplicates and finalising the data set...");
    let roster = remove_duplicates(combined, &departures)?;
    debug!(removed = combined_len - roster.len(), "dropped stale records");
    Ok(roster)
}

#[instrument(level = "debug", skip_all, fields(path = %path.display()))]
fn read(path: &Path) -> Result<Dataset> {
    csv_read::read_records(path)
}
