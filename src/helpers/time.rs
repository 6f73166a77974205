use chrono::{SecondsFormat, Utc};

/// Current UTC time as an RFC 3339 string with whole seconds, e.g.
/// `2024-05-01T08:30:00Z`. Used for every sync and inspection stamp.
pub fn now_iso() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}
