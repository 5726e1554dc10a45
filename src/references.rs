use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::elements::{Agency, Route, Situation, Stop, Trip};

/// Entity kinds carried in a response's `references` section.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ReferenceKind {
    Agency,
    Route,
    Stop,
    Trip,
    Situation,
}

/// A reference resolved through [`ReferenceTable::resolve`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Element<'a> {
    Agency(&'a Agency),
    Route(&'a Route),
    Stop(&'a Stop),
    Trip(&'a Trip),
    Situation(&'a Situation),
}

/// Deduplicated store of entities referenced by ID from a response payload.
///
/// The server sends each referenced entity once, in the envelope's
/// `data.references` section, and the payload mentions it by bare ID string.
/// Lookups return `None` for unknown IDs rather than an empty entity, so
/// callers can tell "absent" from "present but sparse".
#[derive(Debug, Default)]
pub struct ReferenceTable {
    agencies: HashMap<String, Agency>,
    routes: HashMap<String, Route>,
    stops: HashMap<String, Stop>,
    trips: HashMap<String, Trip>,
    situations: HashMap<String, Situation>,
}

impl ReferenceTable {
    /// Builds a table from the raw `references` JSON object.
    ///
    /// Missing sections mean empty, not an error. Elements that fail to
    /// decode or carry no ID are skipped; a duplicated ID keeps the last
    /// occurrence.
    pub(crate) fn from_value(references: &Value) -> Self {
        Self {
            agencies: index_section(references, "agencies", |a: &Agency| &a.id),
            routes: index_section(references, "routes", |r: &Route| &r.id),
            stops: index_section(references, "stops", |s: &Stop| &s.id),
            trips: index_section(references, "trips", |t: &Trip| &t.id),
            situations: index_section(references, "situations", |s: &Situation| &s.id),
        }
    }

    /// Looks up an entity by kind and ID.
    pub fn resolve(&self, kind: ReferenceKind, id: &str) -> Option<Element<'_>> {
        match kind {
            ReferenceKind::Agency => self.agency(id).map(Element::Agency),
            ReferenceKind::Route => self.route(id).map(Element::Route),
            ReferenceKind::Stop => self.stop(id).map(Element::Stop),
            ReferenceKind::Trip => self.trip(id).map(Element::Trip),
            ReferenceKind::Situation => self.situation(id).map(Element::Situation),
        }
    }

    pub fn agency(&self, id: &str) -> Option<&Agency> {
        self.agencies.get(id)
    }

    pub fn route(&self, id: &str) -> Option<&Route> {
        self.routes.get(id)
    }

    pub fn stop(&self, id: &str) -> Option<&Stop> {
        self.stops.get(id)
    }

    pub fn trip(&self, id: &str) -> Option<&Trip> {
        self.trips.get(id)
    }

    pub fn situation(&self, id: &str) -> Option<&Situation> {
        self.situations.get(id)
    }

    /// True when no section contributed any entity.
    pub fn is_empty(&self) -> bool {
        self.agencies.is_empty()
            && self.routes.is_empty()
            && self.stops.is_empty()
            && self.trips.is_empty()
            && self.situations.is_empty()
    }
}

fn index_section<T, F>(references: &Value, key: &str, id_of: F) -> HashMap<String, T>
where
    T: DeserializeOwned,
    F: Fn(&T) -> &str,
{
    let Some(items) = references.get(key).and_then(Value::as_array) else {
        return HashMap::new();
    };

    let mut indexed = HashMap::with_capacity(items.len());
    for item in items {
        if let Ok(entity) = serde_json::from_value::<T>(item.clone()) {
            let id = id_of(&entity);
            if !id.is_empty() {
                indexed.insert(id.to_owned(), entity);
            }
        }
    }
    indexed
}

#[cfg(test)]
mod tests {
    use super::{Element, ReferenceKind, ReferenceTable};

    fn sample_table() -> ReferenceTable {
        let references = serde_json::json!({
            "agencies": [
                {"id": "1", "name": "Metro Transit", "url": "https://kingcounty.gov/metro", "timezone": "America/Los_Angeles"}
            ],
            "routes": [
                {"id": "1_100479", "agencyId": "1", "shortName": "48", "type": 3},
                {"id": "1_100479", "agencyId": "1", "shortName": "48X", "type": 3}
            ],
            "trips": [
                {"id": "1_18196913", "routeId": "1_100479", "serviceId": "1_WEEKDAY", "tripHeadsign": "University District"}
            ]
        });
        ReferenceTable::from_value(&references)
    }

    #[test]
    fn resolves_entities_present_in_the_section() {
        let table = sample_table();
        let trip = table.trip("1_18196913").expect("trip present");
        assert_eq!(trip.route_id, "1_100479");
        assert_eq!(table.agency("1").expect("agency present").name, "Metro Transit");
    }

    #[test]
    fn unknown_id_resolves_to_none_not_an_empty_entity() {
        let table = sample_table();
        assert!(table.trip("1_does_not_exist").is_none());
        assert!(table.resolve(ReferenceKind::Stop, "1_75403").is_none());
    }

    #[test]
    fn missing_sections_are_treated_as_empty() {
        let table = sample_table();
        assert!(table.stop("1_75403").is_none());
        assert!(table.situation("1_alert").is_none());

        let empty = ReferenceTable::from_value(&serde_json::json!({}));
        assert!(empty.is_empty());
    }

    #[test]
    fn duplicate_ids_keep_the_last_occurrence() {
        let table = sample_table();
        let route = table.route("1_100479").expect("route present");
        assert_eq!(route.short_name.as_deref(), Some("48X"));
    }

    #[test]
    fn resolve_dispatches_on_kind() {
        let table = sample_table();
        match table.resolve(ReferenceKind::Route, "1_100479") {
            Some(Element::Route(route)) => assert_eq!(route.route_type, 3),
            other => panic!("unexpected resolution: {other:?}"),
        }
    }

    #[test]
    fn malformed_elements_are_skipped_without_dropping_the_section() {
        let references = serde_json::json!({
            "routes": [
                "not-an-object",
                {"id": "1_100479", "agencyId": "1", "type": 3},
                {"agencyId": "1", "type": 3}
            ]
        });
        let table = ReferenceTable::from_value(&references);
        assert!(table.route("1_100479").is_some());
        assert!(table.route("").is_none());
    }
}
