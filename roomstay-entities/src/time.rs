use time::OffsetDateTime;

pub use time::Date;

/// The current date in UTC, used for stamping newly created records.
pub fn today_utc() -> Date {
    OffsetDateTime::now_utc().date()
}
