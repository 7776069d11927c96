use std::fmt::Display;

use chrono::{DateTime, Local, TimeZone, Utc};
use chrono_tz::{America::New_York, Tz};
use tracing::warn;

pub const JOURNAL_TIMEZONE: Tz = New_York;

// M/D/YY and 24h HH:MM:SS
const DATE_FORMAT: &str = "%-m/%-d/%y";
const TIME_FORMAT: &str = "%H:%M:%S";

/*----- */
// Journal Date Time
/*----- */
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JournalDateTime {
    pub date: String,
    pub time: String,
}

impl JournalDateTime {
    fn render<Zone>(datetime: DateTime<Zone>) -> Self
    where
        Zone: TimeZone,
        Zone::Offset: Display,
    {
        Self {
            date: datetime.format(DATE_FORMAT).to_string(),
            time: datetime.format(TIME_FORMAT).to_string(),
        }
    }
}

/// Civil date and time of an epoch-millisecond instant in America/New_York.
///
/// Falls back to the process local zone if the zone conversion fails, and to
/// the Unix epoch if that fails too, so a trade always gets a row.
pub fn journal_date_time(epoch_ms: u64) -> JournalDateTime {
    if let Some(datetime) = in_zone(epoch_ms, &JOURNAL_TIMEZONE) {
        return JournalDateTime::render(datetime);
    }

    warn!(epoch_ms, "failed to convert trade time to America/New_York, using local time");

    match in_zone(epoch_ms, &Local) {
        Some(datetime) => JournalDateTime::render(datetime),
        None => {
            warn!(epoch_ms, "trade time out of range, rendering unix epoch");
            JournalDateTime::render(DateTime::<Utc>::default())
        }
    }
}

fn in_zone<Zone>(epoch_ms: u64, zone: &Zone) -> Option<DateTime<Zone>>
where
    Zone: TimeZone,
{
    let epoch_ms = i64::try_from(epoch_ms).ok()?;
    DateTime::<Utc>::from_timestamp_millis(epoch_ms).map(|utc| utc.with_timezone(zone))
}

/*----- */
// Tests
/*----- */
