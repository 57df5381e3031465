//! Types shared by the device endpoints.

use serde_json::{Map, Value};

/// Device fields returned by the server on create/update.
pub type DeviceData = Map<String, Value>;

// ─────────────────────────────────────────────────────────────────────────────
// Wire field names
// ─────────────────────────────────────────────────────────────────────────────

pub(crate) const IDENTIFIER_FIELD: &str = "identifier";
pub(crate) const NAME_FIELD: &str = "name";
pub(crate) const NOTIFICATION_TOKEN_FIELD: &str = "notification_token";

/// Generate a device identifier for a new enrollment (a random UUID v4).
pub fn new_device_identifier() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Build a device body, inserting only the fields that are set.
///
/// Unset fields are omitted rather than sent as `null` so the server leaves
/// them unchanged.
pub(crate) fn device_body(
    identifier: Option<&str>,
    name: Option<&str>,
    notification_token: Option<&str>,
) -> Map<String, Value> {
    let mut body = Map::new();
    let fields = [
        (IDENTIFIER_FIELD, identifier),
        (NAME_FIELD, name),
        (NOTIFICATION_TOKEN_FIELD, notification_token),
    ];
    for (key, value) in fields {
        if let Some(value) = value {
            body.insert(key.to_string(), Value::String(value.to_string()));
        }
    }
    body
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_device_identifier_is_uuid() {
        let id = new_device_identifier();
        assert!(uuid::Uuid::parse_str(&id).is_ok());
        assert_ne!(id, new_device_identifier());
    }

    #[test]
    fn test_full_body() {
        let body = device_body(Some("dev-1"), Some("phone"), Some("apns-token"));
        assert_eq!(
            Value::Object(body),
            json!({
                "identifier": "dev-1",
                "name": "phone",
                "notification_token": "apns-token"
            })
        );
    }

    #[test]
    fn test_unset_fields_are_omitted() {
        let body = device_body(None, Some("phone"), None);
        assert_eq!(Value::Object(body), json!({ "name": "phone" }));

        let body = device_body(None, None, None);
        assert!(body.is_empty());
    }

    #[test]
    fn test_every_subset_of_fields() {
        let values = [Some("dev-1"), Some("phone"), Some("apns-token")];
        let keys = [IDENTIFIER_FIELD, NAME_FIELD, NOTIFICATION_TOKEN_FIELD];

        for mask in 0u8..8 {
            let pick = |i: usize| if mask & (1 << i) != 0 { values[i] } else { None };
            let body = device_body(pick(0), pick(1), pick(2));

            for (i, key) in keys.iter().enumerate() {
                let expected_present = mask & (1 << i) != 0;
                assert_eq!(body.contains_key(*key), expected_present, "mask {mask}, key {key}");
                if expected_present {
                    assert_eq!(body[*key], json!(values[i].unwrap()));
                }
            }
            assert!(body.values().all(|v| !v.is_null()));
        }
    }
}
