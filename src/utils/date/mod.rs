// Date utility functions

use chrono::NaiveDateTime;

/// Last whole second of the calendar day containing `date` (23:59:59)
pub fn end_of_day(date: NaiveDateTime) -> NaiveDateTime {
    date.date()
        .and_hms_opt(23, 59, 59)
        .expect("23:59:59 is a valid time of day")
}

/// Keep the time-of-day of `time_source` but move it onto the calendar date of `date_source`
pub fn with_date_of(time_source: NaiveDateTime, date_source: NaiveDateTime) -> NaiveDateTime {
    date_source.date().and_time(time_source.time())
}
