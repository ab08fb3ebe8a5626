/// All stream identifiers are 64-bit integers assigned by the table store.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
