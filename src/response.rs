use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::ReferenceTable;

/// Envelope `code` value indicating success.
const CODE_OK: i64 = 200;

/// An endpoint-specific payload extracted from the envelope's `data` object.
///
/// Entry-shaped endpoints read `data.entry` (see [`entry`]); list-shaped
/// endpoints read `data.list` plus any sibling flags (see [`list`]).
pub trait Payload: Sized {
    /// Extracts the payload from `data`, returning `None` when the section is
    /// missing or malformed.
    fn from_data(data: &Value) -> Option<Self>;
}

/// Reads an entry-shaped payload from `data.entry`.
pub fn entry<T: DeserializeOwned>(data: &Value) -> Option<T> {
    data.get("entry")
        .and_then(|entry| serde_json::from_value(entry.clone()).ok())
}

/// Reads a list-shaped payload from `data.list`, skipping malformed elements.
pub fn list<T: DeserializeOwned>(data: &Value) -> Option<Vec<T>> {
    let items = data.get("list")?.as_array()?;
    Some(
        items
            .iter()
            .filter_map(|item| serde_json::from_value(item.clone()).ok())
            .collect(),
    )
}

/// Generic response envelope: status code, optional error text, the shared
/// references table, and an endpoint-specific payload.
///
/// Decoding never fails. Malformed bytes or an unexpected top-level shape
/// produce the empty envelope, whose `is_ok()` is `false` and whose accessors
/// all return absent values, so callers handle API errors and decode failures
/// through the same `is_ok()` check. A decoded envelope is immutable.
#[derive(Debug)]
pub struct Envelope<P> {
    code: i64,
    text: Option<String>,
    references: ReferenceTable,
    payload: Option<P>,
}

impl<P> Default for Envelope<P> {
    fn default() -> Self {
        Self {
            code: 0,
            text: None,
            references: ReferenceTable::default(),
            payload: None,
        }
    }
}

impl<P: Payload> Envelope<P> {
    /// Decodes raw response bytes.
    ///
    /// Expected shape: `{code, text?, data: {references?, entry|list}}`.
    /// Every section is optional; whatever is missing decodes to its empty
    /// form.
    pub fn decode(bytes: &[u8]) -> Self {
        let Ok(value) = serde_json::from_slice::<Value>(bytes) else {
            return Self::default();
        };

        let code = value.get("code").and_then(Value::as_i64).unwrap_or(0);
        let text = value
            .get("text")
            .and_then(Value::as_str)
            .map(str::to_owned);
        let data = value.get("data");
        let references = data
            .and_then(|data| data.get("references"))
            .map(ReferenceTable::from_value)
            .unwrap_or_default();
        let payload = data.and_then(P::from_data);

        Self {
            code,
            text,
            references,
            payload,
        }
    }

    /// True iff the envelope carries the success code (200).
    pub fn is_ok(&self) -> bool {
        self.code == CODE_OK
    }

    /// The raw envelope code; 0 when decoding failed entirely.
    pub fn code(&self) -> i64 {
        self.code
    }

    /// Human-readable error text supplied by the server, if any.
    pub fn error_text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Entities referenced by ID from the payload.
    pub fn references(&self) -> &ReferenceTable {
        &self.references
    }

    /// The endpoint-specific payload; `None` on error responses and decode
    /// failures.
    pub fn payload(&self) -> Option<&P> {
        self.payload.as_ref()
    }
}
