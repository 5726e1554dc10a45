//! The `trips-for-location` endpoint: active trips near a point, searched
//! within a radius or an explicit bounding box.

use serde_json::Value;

use crate::elements::{Route, Stop, Trip};
use crate::response::{Payload, list};
use crate::trip_details::TripDetails;
use crate::{ClientError, Envelope, ObaContext, ReferenceTable, Request, UriBuilder};

/// The `data` payload of a trips-for-location response: the matched trips
/// plus the server's truncation flags.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TripsForLocation {
    pub trips: Vec<TripDetails>,
    /// True when more trips matched than the server was willing to return.
    pub limit_exceeded: bool,
    /// True when the searched area falls outside the region's coverage.
    pub out_of_range: bool,
}

impl Payload for TripsForLocation {
    fn from_data(data: &Value) -> Option<Self> {
        Some(Self {
            trips: list(data)?,
            limit_exceeded: flag(data, "limitExceeded"),
            out_of_range: flag(data, "outOfRange"),
        })
    }
}

fn flag(data: &Value, key: &str) -> bool {
    data.get(key).and_then(Value::as_bool).unwrap_or(false)
}

/// Builds a [`TripsForLocationRequest`] centered on a coordinate.
#[derive(Clone, Debug)]
pub struct TripsForLocationRequestBuilder {
    builder: UriBuilder,
}

impl TripsForLocationRequestBuilder {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self {
            builder: UriBuilder::new("api/where/trips-for-location.json")
                .param_f64("lat", lat)
                .param_f64("lon", lon),
        }
    }

    /// Sets an explicit bounding box instead of the server's default search
    /// radius.
    #[must_use]
    pub fn span(mut self, lat_span: f64, lon_span: f64) -> Self {
        self.builder = self
            .builder
            .param_f64("latSpan", lat_span)
            .param_f64("lonSpan", lon_span);
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
    /// Server default: `false`.
    #[must_use]
    pub fn include_trip(mut self, include: bool) -> Self {
        self.builder = self.builder.param_bool("includeTrip", include);
        self
    }

    /// Whether each result carries its per-stop schedule.
    /// Server default: `false`.
    #[must_use]
    pub fn include_schedule(mut self, include: bool) -> Self {
        self.builder = self.builder.param_bool("includeSchedule", include);
        self
    }

    /// Whether each result carries its real-time status.
    /// Server default: `true`.
    #[must_use]
    pub fn include_status(mut self, include: bool) -> Self {
        self.builder = self.builder.param_bool("includeStatus", include);
        self
    }

    pub fn build(self, context: &ObaContext) -> Result<TripsForLocationRequest, ClientError> {
        Ok(TripsForLocationRequest {
            inner: self.builder.build(context)?,
        })
    }
}

/// An immutable, reusable trips-for-location request.
#[derive(Clone, Debug)]
pub struct TripsForLocationRequest {
    inner: Request,
}

impl TripsForLocationRequest {
    pub fn url(&self) -> &url::Url {
        self.inner.url()
    }

    /// Invokes the endpoint and decodes the response.
    pub fn call(&self) -> Result<TripsForLocationResponse, ClientError> {
        let bytes = self.inner.invoke()?;
        Ok(TripsForLocationResponse::decode(&bytes))
    }
}

/// Decoded trips-for-location response.
#[derive(Debug, Default)]
pub struct TripsForLocationResponse {
    envelope: Envelope<TripsForLocation>,
}

impl TripsForLocationResponse {
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

    /// The matched trips; empty on error responses and decode failures.
    pub fn trips(&self) -> &[TripDetails] {
        self.envelope
            .payload()
            .map_or(&[], |payload| payload.trips.as_slice())
    }

    pub fn limit_exceeded(&self) -> bool {
        self.envelope
            .payload()
            .is_some_and(|payload| payload.limit_exceeded)
    }

    pub fn out_of_range(&self) -> bool {
        self.envelope
            .payload()
            .is_some_and(|payload| payload.out_of_range)
    }

    pub fn trip(&self, id: &str) -> Option<&Trip> {
        self.references().trip(id)
    }

    pub fn route(&self, id: &str) -> Option<&Route> {
        self.references().route(id)
    }

    pub fn stop(&self, id: &str) -> Option<&Stop> {
        self.references().stop(id)
    }
}
