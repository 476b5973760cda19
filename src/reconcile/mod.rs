//! Set reconciliation between the active, new-hire, and departure exports.
//!
//! Each stage takes its dataset by value and hands it back annotated, so no
//! record is shared between two lists while it is being changed.

use std::collections::HashSet;

use crate::error::Result;
use crate::model::{ARCHIVE, ARCHIVE_MARKER, Dataset, NEW_HIRE, Record};

/// Flags every active record with `New Hire`: `"Y"` when its email address
/// appears in `new_hires`, `"N"` otherwise.
///
/// Any previous value of the column is overwritten, so running this twice
/// yields the same flags as running it once.
pub fn add_new_hire_column(mut active: Dataset, new_hires: &[Record]) -> Result<Dataset> {
    if active.is_empty() {
        return Ok(active);
    }

    let hired: HashSet<&str> = new_hires
        .iter()
        .map(Record::email)
        .collect::<Result<_>>()?;

    for record in &mut active {
        let flag = if hired.contains(record.email()?) { "Y" } else { "N" };
        record.set(NEW_HIRE, flag);
    }
    Ok(active)
}

/// Marks every departure as `New Hire = "N"` and `Archive = "ARCHIVE"`.
pub fn add_missing_columns(mut departures: Dataset) -> Dataset {
    for record in &mut departures {
        record.set(NEW_HIRE, "N");
        record.set(ARCHIVE, ARCHIVE_MARKER);
    }
    departures
}

/// Appends the departures after the active records.
pub fn combine(mut active: Dataset, departures: Dataset) -> Dataset {
    active.extend(departures);
    active
}

/// Drops combined records that duplicate a departure by email address.
///
/// For every record, each departure is visited in order:
///
/// * a record carrying `Archive` is dropped when the departure shares its
///   email address and its own `Archive` is blank;
/// * a record without `Archive` gets a blank one, which later departures in
///   the same pass then see.
///
/// A record already marked `ARCHIVE` is never dropped. Removal is tracked by
/// position, so a record matching several departures is dropped once and
/// identical neighbours are left alone.
pub fn remove_duplicates(mut combined: Dataset, departures: &[Record]) -> Result<Dataset> {
    let mut stale = vec![false; combined.len()];

    for (record, is_stale) in combined.iter_mut().zip(stale.iter_mut()) {
        for departed in departures {
            if record.contains(ARCHIVE) {
                let same_person = record.email()? == departed.email()?;
                if same_person && record.get(ARCHIVE) == Some("") {
                    *is_stale = true;
                }
            } else {
                record.set(ARCHIVE, "");
            }
        }
    }

    Ok(combined
        .into_iter()
        .zip(stale)
        .filter_map(|(record, is_stale)| (!is_stale).then_some(record))
        .collect())
}
