use std::io::Write;

use crate::error::Result;
use crate::model::{OUTPUT_COLUMNS, Record};

/// Writes the roster with the fixed output header, one row per record.
///
/// Missing columns are written blank and columns outside
/// [`OUTPUT_COLUMNS`] are dropped. Rows end in CRLF and fields are quoted only
/// when they need it.
pub fn write_records<W: Write>(output: W, records: &[Record]) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::CRLF)
        .quote_style(csv::QuoteStyle::Necessary)
        .from_writer(output);

    writer.write_record(OUTPUT_COLUMNS)?;
    for record in records {
        writer.write_record(record.output_row())?;
    }

    writer.flush()?;
    Ok(())
}
