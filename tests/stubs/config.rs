#![allow(dead_code)]

pub const SAMPLE_CONFIG: &str = r#"
{
    "locations": ["A"],
    "location_names": {"A": "Alpha"},
    "clients": {
        "A": {
            "c1": {"type": "U"},
            "c2": {"type": "S"},
            "c3": {"type": "X"}
        }
    }
}
"#;

pub const MULTI_LOCATION_CONFIG: &str = r#"
{
    "locations": ["NDLS", "CNB", "ALD"],
    "location_names": {"NDLS": "New Delhi", "CNB": "Kanpur Central"},
    "clients": {
        "NDLS": {
            "UT-01": {"type": "U", "ip": "192.168.1.10", "port": 502},
            "ST-01": {"type": "S", "ip": "192.168.1.20", "port": 502}
        },
        "CNB": {
            "UT-01": {"type": "U", "ip": "192.168.2.10", "port": 502},
            "UT-02": {"type": "U", "ip": "192.168.2.11", "port": 502},
            "XX-01": {"type": "unknown"}
        }
    },
    "admin_username": "stationmaster",
    "admin_password": "rail2024"
}
"#;

pub const MALFORMED_CONFIG: &str = r#"{"locations": ["A", }"#;

pub const MISTYPED_CONFIG: &str = r#"
{
    "locations": ["A", 42],
    "location_names": {"A": null},
    "clients": {"A": {"c1": {"type": "U"}}},
    "admin_password": 1234
}
"#;
