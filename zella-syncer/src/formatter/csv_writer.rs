use serde::Serialize;

use crate::error::SyncerError;

/// Renders records as CSV with a header row taken from the field names.
///
/// Fields holding a comma, quote or line break are quoted with inner quotes
/// doubled. No records means an empty string, not a lone header.
pub fn records_to_csv<Record>(records: &[Record]) -> Result<String, SyncerError>
where
    Record: Serialize,
{
    if records.is_empty() {
        return Ok(String::new());
    }

    let mut writer = csv::WriterBuilder::new()
        .has_headers(true)
        .terminator(csv::Terminator::Any(b'\n'))
        .quote_style(csv::QuoteStyle::Necessary)
        .from_writer(Vec::new());

    for record in records {
        writer.serialize(record)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|error| csv::Error::from(error.into_error()))?;

    Ok(String::from_utf8(bytes)?)
}

/*----- */
// Tests
/*----- */
