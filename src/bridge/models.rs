use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Mapping of client tag to its opaque record, in insertion order.
pub type ClientMap = Map<String, Value>;

/// Typed view over the RAIL Data Server configuration.
///
/// Every recognized key is optional and defaults to an empty value; other
/// keys are ignored. A recognized key of the wrong JSON type also falls back
/// to its default (with a warning) so a single odd value never rejects the
/// whole config.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    #[serde(deserialize_with = "lenient::string_list")]
    pub locations: Vec<String>,
    #[serde(deserialize_with = "lenient::string_map")]
    pub location_names: HashMap<String, String>,
    /// location id -> client tag -> client record, in file order.
    #[serde(deserialize_with = "lenient::object")]
    pub clients: Map<String, Value>,
    #[serde(deserialize_with = "lenient::string")]
    pub admin_username: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub admin_password: Option<String>,
    #[serde(skip)]
    key_count: usize,
}

impl SourceConfig {
    /// Builds the config from a JSON object. Anything other than an object
    /// is rejected.
    pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        let Value::Object(map) = &value else {
            return Err(serde::de::Error::custom("top-level value is not an object"));
        };
        let key_count = map.len();
        let mut config: SourceConfig = serde_json::from_value(value)?;
        config.key_count = key_count;
        Ok(config)
    }

    /// True when the source object had no keys at all.
    pub fn is_empty(&self) -> bool {
        self.key_count == 0
    }
}

// Field deserializers that accept any JSON value and keep only what has the
// expected shape.
mod lenient {
    use std::collections::HashMap;

    use serde::{Deserialize, Deserializer};
    use serde_json::{Map, Value};

    pub fn string_list<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<String>, D::Error> {
        Ok(match Value::deserialize(d)? {
            Value::Array(items) => items
                .into_iter()
                .filter_map(|item| match item {
                    Value::String(s) => Some(s),
                    other => {
                        log::warn!("Skipping location id {other}: not a string");
                        None
                    }
                })
                .collect(),
            Value::Null => Vec::new(),
            other => {
                log::warn!("Ignoring locations {other}: not an array");
                Vec::new()
            }
        })
    }

    pub fn string_map<'de, D: Deserializer<'de>>(
        d: D,
    ) -> Result<HashMap<String, String>, D::Error> {
        Ok(match Value::deserialize(d)? {
            Value::Object(map) => map
                .into_iter()
                .filter_map(|(key, value)| match value {
                    Value::String(s) => Some((key, s)),
                    other => {
                        log::warn!("Ignoring name {other} of location '{key}': not a string");
                        None
                    }
                })
                .collect(),
            Value::Null => HashMap::new(),
            other => {
                log::warn!("Ignoring location_names {other}: not an object");
                HashMap::new()
            }
        })
    }

    pub fn object<'de, D: Deserializer<'de>>(d: D) -> Result<Map<String, Value>, D::Error> {
        Ok(match Value::deserialize(d)? {
            Value::Object(map) => map,
            Value::Null => Map::new(),
            other => {
                log::warn!("Ignoring clients {other}: not an object");
                Map::new()
            }
        })
    }

    pub fn string<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
        Ok(match Value::deserialize(d)? {
            Value::String(s) => Some(s),
            Value::Null => None,
            // The value itself is not logged; it may be a password.
            _ => {
                log::warn!("Ignoring non-string credential value; using the default");
                None
            }
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientType {
    U,
    S,
    Other,
}

impl ClientType {
    pub fn of(record: &Value) -> Self {
        match record.get("type").and_then(Value::as_str) {
            Some("U") => ClientType::U,
            Some("S") => ClientType::S,
            _ => ClientType::Other,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub id: String,
    pub name: String,
    // TODO: attach the partitioned clients of this location once Master
    // Station defines a per-location client format. Always empty for now.
    pub clients: Vec<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    pub last_synced: String,
    pub source: String,
    pub version: String,
}

/// The `pointconfig.json` document read by Master Station.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointConfig {
    pub locations: Vec<Location>,
    pub u_type_clients: ClientMap,
    pub s_type_clients: ClientMap,
    pub metadata: Metadata,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Credentials {
    #[serde(rename = "admin")]
    pub password: String,
    pub username: String,
    pub synced: String,
}

impl Credentials {
    pub fn masked_password(&self) -> String {
        "*".repeat(self.password.chars().count())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DbStats {
    pub db_file: String,
    pub tables: i64,
    pub last_checked: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bucket {
    UType,
    SType,
}

/// A client tag that appeared under more than one location in the same bucket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagCollision {
    pub bucket: Bucket,
    pub tag: String,
    pub kept_location: String,
    pub replaced_location: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClientBuckets {
    pub u_type: ClientMap,
    pub s_type: ClientMap,
    pub collisions: Vec<TagCollision>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_keys_default_to_empty() {
        let config = SourceConfig::from_value(json!({"unrelated": 1})).unwrap();
        assert!(config.locations.is_empty());
        assert!(config.location_names.is_empty());
        assert!(config.clients.is_empty());
        assert_eq!(config.admin_username, None);
        assert!(!config.is_empty());
    }

    #[test]
    fn empty_object_is_empty() {
        assert!(SourceConfig::from_value(json!({})).unwrap().is_empty());
        assert!(SourceConfig::default().is_empty());
    }

    #[test]
    fn non_object_is_rejected() {
        assert!(SourceConfig::from_value(json!(["A"])).is_err());
        assert!(SourceConfig::from_value(json!("config")).is_err());
    }

    #[test]
    fn wrong_shapes_fall_back_to_defaults() {
        let config = SourceConfig::from_value(json!({
            "locations": "A",
            "location_names": ["Alpha"],
            "clients": 7,
            "admin_username": false,
            "admin_password": 1234
        }))
        .unwrap();

        assert!(config.locations.is_empty());
        assert!(config.location_names.is_empty());
        assert!(config.clients.is_empty());
        assert_eq!(config.admin_username, None);
        assert_eq!(config.admin_password, None);
        assert!(!config.is_empty());
    }

    #[test]
    fn bad_entries_are_skipped_individually() {
        let config = SourceConfig::from_value(json!({
            "locations": ["A", 2, null, "B"],
            "location_names": {"A": null, "B": "Bravo", "C": {"full": "Charlie"}}
        }))
        .unwrap();

        assert_eq!(config.locations, ["A", "B"]);
        assert_eq!(config.location_names.len(), 1);
        assert_eq!(config.location_names["B"], "Bravo");
    }

    #[test]
    fn client_type_classification() {
        assert_eq!(ClientType::of(&json!({"type": "U"})), ClientType::U);
        assert_eq!(ClientType::of(&json!({"type": "S", "ip": "10.0.0.2"})), ClientType::S);
        assert_eq!(ClientType::of(&json!({"type": "u"})), ClientType::Other);
        assert_eq!(ClientType::of(&json!({"ip": "10.0.0.3"})), ClientType::Other);
        assert_eq!(ClientType::of(&json!("U")), ClientType::Other);
    }

    #[test]
    fn credentials_serialize_password_as_admin() {
        let creds = Credentials {
            password: "pässword".into(),
            username: "operator".into(),
            synced: "2024-01-01T00:00:00+00:00".into(),
        };
        let value = serde_json::to_value(&creds).unwrap();
        assert_eq!(value["admin"], "pässword");
        assert_eq!(creds.masked_password(), "********");
    }
}
