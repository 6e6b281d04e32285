/// Identifies one analysis request for the lifetime of the process.
pub type RequestId = u64;

/// Identifies one file selection still being read and encoded.
pub type SelectionTicket = u64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
