//! The `trip-details` endpoint: full details for a single trip, including
//! its per-stop schedule and real-time vehicle status.

use serde::Deserialize;
use serde_json::Value;

use crate::builder::encode_path_segment;
use crate::elements::{Agency, Route, Stop, Trip, TripSchedule, TripStatus};
use crate::response::{Payload, entry};
use crate::{ClientError, Envelope, ObaContext, ReferenceTable, Request, UriBuilder};

/// The `data.entry` payload of a trip-details response.
///
/// Also the element type of the trips-for-location list payload.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct TripDetails {
    #[serde(alias = "tripId")]
    pub id: String,
    /// Midnight of the service date, milliseconds since the Unix epoch.
    pub service_date: i64,
    /// Absent when the request set `includeSchedule=false`.
    pub schedule: Option<TripSchedule>,
    /// Absent when the request set `includeStatus=false`.
    pub status: Option<TripStatus>,
    pub situation_ids: Vec<String>,
}

impl Payload for TripDetails {
    fn from_data(data: &Value) -> Option<Self> {
        entry(data)
    }
}

/// Builds a [`TripDetailsRequest`] for one trip ID.
///
/// Inclusion flags follow the default-omit policy: an unset flag is not sent,
/// leaving the server default in effect.
#[derive(Clone, Debug)]
pub struct TripDetailsRequestBuilder {
    builder: UriBuilder,
}

impl TripDetailsRequestBuilder {
    pub fn new(trip_id: &str) -> Self {
        Self {
            builder: UriBuilder::new(format!(
                "api/where/trip-details/{}.json",
                encode_path_segment(trip_id)
            )),
        }
    }

    /// Service date to query, milliseconds since the Unix epoch. Defaults to
    /// the current date.
    #[must_use]
    pub fn service_date(mut self, millis: i64) -> Self {
        self.builder = self.builder.param_i64("serviceDate", millis);
        self
    }

    /// Time the request is evaluated at, milliseconds since the Unix epoch.
    /// Defaults to now.
    #[must_use]
    pub fn time(mut self, millis: i64) -> Self {
        self.builder = self.builder.param_i64("time", millis);
        self
    }

    /// Whether the full trip element appears in the references.
    /// Server default: `true`.
    #[must_use]
    pub fn include_trip(mut self, include: bool) -> Self {
        self.builder = self.builder.param_bool("includeTrip", include);
        self
    }

    /// Whether the per-stop schedule appears in the entry.
    /// Server default: `true`.
    #[must_use]
    pub fn include_schedule(mut self, include: bool) -> Self {
        self.builder = self.builder.param_bool("includeSchedule", include);
        self
    }

    /// Whether the real-time status appears in the entry.
    /// Server default: `true`.
    #[must_use]
    pub fn include_status(mut self, include: bool) -> Self {
        self.builder = self.builder.param_bool("includeStatus", include);
        self
    }

    pub fn build(self, context: &ObaContext) -> Result<TripDetailsRequest, ClientError> {
        Ok(TripDetailsRequest {
            inner: self.builder.build(context)?,
        })
    }
}

/// An immutable, reusable trip-details request.
#[derive(Clone, Debug)]
pub struct TripDetailsRequest {
    inner: Request,
}

impl TripDetailsRequest {
    /// Builds a request with no optional parameters set.
    pub fn new(context: &ObaContext, trip_id: &str) -> Result<Self, ClientError> {
        TripDetailsRequestBuilder::new(trip_id).build(context)
    }

    pub fn url(&self) -> &url::Url {
        self.inner.url()
    }

    /// Invokes the endpoint and decodes the response.
    ///
    /// Transport failures error; API errors and undecodable bodies surface
    /// through [`TripDetailsResponse::is_ok`].
    pub fn call(&self) -> Result<TripDetailsResponse, ClientError> {
        let bytes = self.inner.invoke()?;
        Ok(TripDetailsResponse::decode(&bytes))
    }
}

/// Decoded trip-details response.
#[derive(Debug, Default)]
pub struct TripDetailsResponse {
    envelope: Envelope<TripDetails>,
}

impl TripDetailsResponse {
    pub fn decode(bytes: &[u8]) -> Self {
        Self {
            envelope: Envelope::decode(bytes),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.envelope.is_ok()
    }

    pub fn code(&self) -> i64 {
        self.envelope.code()
    }

    pub fn error_text(&self) -> Option<&str> {
        self.envelope.error_text()
    }

    pub fn references(&self) -> &ReferenceTable {
        self.envelope.references()
    }

    /// The trip ID of the entry.
    pub fn id(&self) -> Option<&str> {
        self.entry().map(|entry| entry.id.as_str())
    }

    pub fn service_date(&self) -> Option<i64> {
        self.entry().map(|entry| entry.service_date)
    }

    /// Absent when the server omitted the schedule, which is the normal shape
    /// for requests built with `include_schedule(false)`.
    pub fn schedule(&self) -> Option<&TripSchedule> {
        self.entry().and_then(|entry| entry.schedule.as_ref())
    }

    /// Absent when the server omitted the status.
    pub fn status(&self) -> Option<&TripStatus> {
        self.entry().and_then(|entry| entry.status.as_ref())
    }

    pub fn situation_ids(&self) -> &[String] {
        self.entry().map_or(&[], |entry| entry.situation_ids.as_slice())
    }

    /// Resolves a trip mentioned by ID, typically [`Self::id`].
    pub fn trip(&self, id: &str) -> Option<&Trip> {
        self.references().trip(id)
    }

    pub fn route(&self, id: &str) -> Option<&Route> {
        self.references().route(id)
    }

    pub fn stop(&self, id: &str) -> Option<&Stop> {
        self.references().stop(id)
    }

    pub fn agency(&self, id: &str) -> Option<&Agency> {
        self.references().agency(id)
    }

    fn entry(&self) -> Option<&TripDetails> {
        self.envelope.payload()
    }
}
