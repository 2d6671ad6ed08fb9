/// All database primary keys are SQLite `INTEGER PRIMARY KEY` (rowid) columns.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
