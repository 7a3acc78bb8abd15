/// Document identifiers are opaque strings assigned by the store on creation.
pub type DocId = String;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
