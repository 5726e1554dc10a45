//! Rust client library for the OneBusAway transit-information REST API.
//!
//! Layers, leaf-first:
//! - [`ObaContext`]: region base URL, API key, and injected HTTP transport.
//! - [`UriBuilder`]/[`Request`]: query-parameter accumulation and the single
//!   blocking GET per invocation.
//! - [`Envelope`]/[`ReferenceTable`]: the generic response envelope and the
//!   ID-indexed entity store its payloads resolve against.
//! - Endpoint modules ([`trip_details`], [`trips_for_location`]): one
//!   builder/request/response triple per API operation, composed from the
//!   layers above.
//!
//! API errors and undecodable responses are envelope state, not `Err` values:
//! check [`Envelope::is_ok`] (or the endpoint response's `is_ok`) before
//! reading payload accessors. Only builder misuse and transport failures
//! produce a [`ClientError`].

mod builder;
mod context;
pub mod elements;
mod error;
mod references;
mod request;
pub mod response;
pub mod trip_details;
pub mod trips_for_location;

/// Query builder for endpoint URIs.
pub use builder::UriBuilder;
/// Region configuration and shared transport.
pub use context::{API_VERSION, ObaContext};
/// Error type returned by builders and request invocation.
pub use error::ClientError;
/// Entity store resolving ID references from payloads.
pub use references::{Element, ReferenceKind, ReferenceTable};
/// Finalized, immutable API request.
pub use request::Request;
/// Generic response envelope and payload extraction helpers.
pub use response::{Envelope, Payload};
