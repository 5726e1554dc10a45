//! Entity records returned inside response envelopes.
//!
//! These are plain data carriers mirroring the wire shapes. Cross-references
//! between entities are bare ID strings resolved through
//! [`crate::ReferenceTable`], never embedded objects. Every struct decodes
//! leniently: fields missing from a partial payload fall back to empty/absent
//! values instead of failing the whole envelope.

use serde::Deserialize;

/// A transit agency.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Agency {
    pub id: String,
    pub name: String,
    pub url: String,
    pub timezone: String,
    pub lang: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub disclaimer: Option<String>,
}

/// A transit route operated by an [`Agency`].
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Route {
    pub id: String,
    pub agency_id: String,
    pub short_name: Option<String>,
    pub long_name: Option<String>,
    pub description: Option<String>,
    /// GTFS route type (3 = bus, 0 = tram, ...).
    #[serde(rename = "type")]
    pub route_type: i64,
    pub url: Option<String>,
    pub color: Option<String>,
    pub text_color: Option<String>,
}

/// A stop served by one or more routes.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Stop {
    pub id: String,
    pub name: String,
    pub code: Option<String>,
    pub lat: f64,
    pub lon: f64,
    pub direction: Option<String>,
    pub location_type: i64,
    pub wheelchair_boarding: Option<String>,
    pub route_ids: Vec<String>,
}

/// A single scheduled trip along a route.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Trip {
    pub id: String,
    pub route_id: String,
    pub service_id: String,
    pub trip_headsign: Option<String>,
    pub trip_short_name: Option<String>,
    pub route_short_name: Option<String>,
    pub direction_id: Option<String>,
    pub block_id: Option<String>,
    pub shape_id: Option<String>,
    pub time_zone: Option<String>,
}

/// Localized text carried by a [`Situation`].
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct SituationText {
    pub value: Option<String>,
    pub lang: Option<String>,
}

/// A service alert affecting stops, routes, or trips.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Situation {
    pub id: String,
    /// Milliseconds since the Unix epoch.
    pub creation_time: i64,
    pub reason: Option<String>,
    pub severity: Option<String>,
    pub summary: Option<SituationText>,
    pub description: Option<SituationText>,
}

/// The per-stop schedule of a trip.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct TripSchedule {
    pub time_zone: Option<String>,
    pub stop_times: Vec<TripStopTime>,
    pub previous_trip_id: Option<String>,
    pub next_trip_id: Option<String>,
}

/// One scheduled stop event within a [`TripSchedule`].
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct TripStopTime {
    /// Seconds since the start of the service date. May exceed 24 hours for
    /// trips running past midnight.
    pub arrival_time: i64,
    pub departure_time: i64,
    pub stop_id: String,
    pub stop_headsign: Option<String>,
    pub distance_along_trip: Option<f64>,
}

/// A vehicle position.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Position {
    pub lat: f64,
    pub lon: f64,
}

/// Real-time status of a trip's vehicle.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct TripStatus {
    /// Midnight of the trip's service date, milliseconds since the Unix epoch.
    pub service_date: i64,
    /// Whether real-time data was available; when `false` the remaining
    /// fields reflect the schedule.
    pub predicted: bool,
    /// Seconds the vehicle is ahead (negative) or behind (positive) schedule.
    pub schedule_deviation: i64,
    pub vehicle_id: Option<String>,
    pub last_update_time: i64,
    pub position: Option<Position>,
    pub orientation: Option<f64>,
    pub active_trip_id: Option<String>,
    pub closest_stop: Option<String>,
    pub closest_stop_time_offset: Option<i64>,
    pub phase: Option<String>,
    pub status: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::{Route, TripStatus};

    #[test]
    fn route_type_maps_the_reserved_word_field() {
        let route: Route = serde_json::from_str(
            r#"{"id": "1_100479", "agencyId": "1", "shortName": "48", "type": 3}"#,
        )
        .expect("route decodes");
        assert_eq!(route.route_type, 3);
        assert_eq!(route.short_name.as_deref(), Some("48"));
        assert_eq!(route.long_name, None);
    }

    #[test]
    fn partial_status_decodes_with_absent_fields() {
        let status: TripStatus =
            serde_json::from_str(r#"{"serviceDate": 1609459200000, "predicted": false}"#)
                .expect("status decodes");
        assert_eq!(status.service_date, 1_609_459_200_000);
        assert!(!status.predicted);
        assert_eq!(status.position, None);
        assert_eq!(status.vehicle_id, None);
    }
}
