//! Reservation record models.
//!
//! A record carries three system-assigned fields (`id`, `status`, `date`)
//! and an open set of caller fields, flattened into the same JSON object.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

/// Field names owned by the store. Callers cannot set these on `add`, and
/// `id` cannot be changed by `update`.
pub const SYSTEM_FIELDS: [&str; 3] = ["id", "status", "date"];

/// Reservation status.
///
/// Unknown strings are kept verbatim so stored collections written by other
/// tools stay readable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ReservationStatus {
    #[default]
    Confirmed,
    Pending,
    CheckedIn,
    CheckedOut,
    Cancelled,
    Other(String),
}

impl ReservationStatus {
    pub fn as_str(&self) -> &str {
        match self {
            ReservationStatus::Confirmed => "Confirmed",
            ReservationStatus::Pending => "Pending",
            ReservationStatus::CheckedIn => "Checked In",
            ReservationStatus::CheckedOut => "Checked Out",
            ReservationStatus::Cancelled => "Cancelled",
            ReservationStatus::Other(s) => s,
        }
    }
}

impl From<String> for ReservationStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Confirmed" => ReservationStatus::Confirmed,
            "Pending" => ReservationStatus::Pending,
            "Checked In" => ReservationStatus::CheckedIn,
            "Checked Out" => ReservationStatus::CheckedOut,
            "Cancelled" => ReservationStatus::Cancelled,
            _ => ReservationStatus::Other(value),
        }
    }
}

impl From<ReservationStatus> for String {
    fn from(status: ReservationStatus) -> Self {
        match status {
            ReservationStatus::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One persisted reservation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reservation {
    pub id: String,
    #[serde(default)]
    pub status: ReservationStatus,
    /// Creation date, e.g. `Jan 5, 2025`
    #[serde(default)]
    pub date: String,
    /// Caller-supplied booking fields (room, guest, cost, ...)
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

impl Reservation {
    /// Build a fresh `Confirmed` record with a new id.
    ///
    /// System fields present in `details` are dropped.
    pub fn new(mut details: Map<String, Value>, created: NaiveDate) -> Self {
        for field in SYSTEM_FIELDS {
            details.remove(field);
        }

        Self {
            id: Uuid::new_v4().to_string(),
            status: ReservationStatus::Confirmed,
            date: created_date_stamp(created),
            details,
        }
    }

    /// Shallow-merge `fields` over this record.
    ///
    /// Same-named fields are replaced, all others kept. `status` and `date`
    /// may be replaced; `id` never is.
    pub fn merged(&self, fields: Map<String, Value>) -> Result<Reservation, serde_json::Error> {
        let mut object = match serde_json::to_value(self)? {
            Value::Object(object) => object,
            _ => Map::new(),
        };

        for (key, value) in fields {
            if key != "id" {
                object.insert(key, value);
            }
        }

        serde_json::from_value(Value::Object(object))
    }

    /// A caller field as text, if present and a string.
    pub fn detail_str(&self, key: &str) -> Option<&str> {
        self.details.get(key).and_then(Value::as_str)
    }
}

/// Human-readable creation stamp: short month, day, year.
pub fn created_date_stamp(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn details(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    fn jan_5() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 5).unwrap()
    }

    #[test]
    fn test_created_date_stamp_format() {
        assert_eq!(created_date_stamp(jan_5()), "Jan 5, 2025");
        assert_eq!(
            created_date_stamp(NaiveDate::from_ymd_opt(2024, 11, 23).unwrap()),
            "Nov 23, 2024"
        );
    }

    #[test]
    fn test_status_round_trip_strings() {
        for text in ["Confirmed", "Pending", "Checked In", "Checked Out", "Cancelled"] {
            let status = ReservationStatus::from(text.to_string());
            assert!(!matches!(status, ReservationStatus::Other(_)));
            assert_eq!(String::from(status), text);
        }

        let other = ReservationStatus::from("No Show".to_string());
        assert_eq!(other, ReservationStatus::Other("No Show".to_string()));
        assert_eq!(other.to_string(), "No Show");
    }

    #[test]
    fn test_new_assigns_system_fields() {
        let rsvp = Reservation::new(
            details(json!({ "room": "Normal", "id": "mine", "status": "Cancelled" })),
            jan_5(),
        );

        assert!(!rsvp.id.is_empty());
        assert_ne!(rsvp.id, "mine");
        assert_eq!(rsvp.status, ReservationStatus::Confirmed);
        assert_eq!(rsvp.date, "Jan 5, 2025");
        assert_eq!(rsvp.detail_str("room"), Some("Normal"));
        assert!(!rsvp.details.contains_key("id"));
        assert!(!rsvp.details.contains_key("status"));
    }

    #[test]
    fn test_serializes_flat_object() {
        let rsvp = Reservation::new(details(json!({ "guestName": "Ana", "totalCost": 6000 })), jan_5());
        let json = serde_json::to_value(&rsvp).unwrap();

        assert_eq!(json["id"], rsvp.id.as_str());
        assert_eq!(json["status"], "Confirmed");
        assert_eq!(json["date"], "Jan 5, 2025");
        assert_eq!(json["guestName"], "Ana");
        assert_eq!(json["totalCost"], 6000);

        let back: Reservation = serde_json::from_value(json).unwrap();
        assert_eq!(back, rsvp);
    }

    #[test]
    fn test_merged_is_shallow_and_keeps_id() {
        let rsvp = Reservation::new(
            details(json!({ "room": "Normal", "guest": { "name": "Ana", "phone": "123" } })),
            jan_5(),
        );
        let merged = rsvp
            .merged(details(json!({
                "id": "hijack",
                "status": "Cancelled",
                "guest": { "name": "Bo" }
            })))
            .unwrap();

        assert_eq!(merged.id, rsvp.id);
        assert_eq!(merged.status, ReservationStatus::Cancelled);
        assert_eq!(merged.date, rsvp.date);
        assert_eq!(merged.detail_str("room"), Some("Normal"));
        // nested objects are replaced wholesale
        assert_eq!(merged.details["guest"], json!({ "name": "Bo" }));
    }

    #[test]
    fn test_merged_rejects_non_string_status() {
        let rsvp = Reservation::new(Map::new(), jan_5());
        assert!(rsvp.merged(details(json!({ "status": 7 }))).is_err());
    }

    #[test]
    fn test_missing_status_and_date_default() {
        let rsvp: Reservation = serde_json::from_value(json!({ "id": "abc", "room": "Luxury" })).unwrap();
        assert_eq!(rsvp.status, ReservationStatus::Confirmed);
        assert_eq!(rsvp.date, "");
        assert_eq!(rsvp.detail_str("room"), Some("Luxury"));
    }
}
