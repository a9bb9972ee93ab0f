//! Envelope decoding
//!
//! Turns a GraphQL response body into a recognised [`Envelope`], rejecting
//! every shape it does not know.

use super::types::{
    Envelope, EnvelopeAlias, GraphQlResponse, ItemsCollection, NewsCollection,
};
use crate::article::RawArticle;
use crate::error::{Error, Result};
use crate::types::JsonObject;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;

/// Decoder for responses to a query with a known alias
#[derive(Debug, Clone, Copy)]
pub struct EnvelopeDecoder {
    expected: EnvelopeAlias,
}

impl EnvelopeDecoder {
    /// Create a decoder expecting the given alias
    pub fn new(expected: EnvelopeAlias) -> Self {
        Self { expected }
    }

    /// Alias this decoder accepts
    pub fn expected(&self) -> EnvelopeAlias {
        self.expected
    }

    /// Decode a response body string into raw items
    pub fn decode(&self, body: &str) -> Result<Vec<RawArticle>> {
        let value: Value = serde_json::from_str(body)
            .map_err(|e| Error::decode(format!("Failed to parse JSON: {e}")))?;
        self.decode_value(value)
    }

    /// Decode an already parsed response body into raw items
    pub fn decode_value(&self, body: Value) -> Result<Vec<RawArticle>> {
        let envelope = decode_envelope(body)?;
        if envelope.alias() != self.expected {
            return Err(Error::envelope(format!(
                "expected '{}' but response answered '{}'",
                self.expected,
                envelope.alias()
            )));
        }
        Ok(envelope.into_items())
    }
}

/// Decode a GraphQL response body into an envelope
///
/// `errors` without `data` is a [`Error::GraphQl`]. `errors` alongside
/// `data` is logged and the data is used.
pub fn decode_envelope(body: Value) -> Result<Envelope> {
    let response: GraphQlResponse = serde_json::from_value(body)
        .map_err(|e| Error::decode(format!("Not a GraphQL response: {e}")))?;

    let messages: Vec<String> = response
        .errors
        .unwrap_or_default()
        .into_iter()
        .map(|e| e.message)
        .collect();

    let data = match response.data {
        Some(Value::Object(data)) => data,
        Some(Value::Null) | None if !messages.is_empty() => {
            return Err(Error::GraphQl { messages });
        }
        Some(Value::Null) | None => return Err(Error::envelope("response has no data")),
        Some(other) => {
            return Err(Error::envelope(format!(
                "data must be an object, got {}",
                json_kind(&other)
            )))
        }
    };

    if !messages.is_empty() {
        warn!(errors = %messages.join("; "), "GraphQL response carried partial errors");
    }

    envelope_from_data(data)
}

fn envelope_from_data(mut data: JsonObject) -> Result<Envelope> {
    if data.len() != 1 {
        let keys: Vec<&str> = data.keys().map(String::as_str).collect();
        return Err(Error::envelope(format!(
            "expected exactly one root field, got [{}]",
            keys.join(", ")
        )));
    }

    let key = data.keys().next().cloned().unwrap_or_default();
    let alias = EnvelopeAlias::from_key(&key)
        .ok_or_else(|| Error::envelope(format!("unknown root field '{key}'")))?;
    let collection = data.remove(&key).unwrap_or(Value::Null);

    if !collection.is_object() {
        return Err(Error::envelope(format!(
            "'{key}' must be an object, got {}",
            json_kind(&collection)
        )));
    }

    Ok(match alias {
        EnvelopeAlias::News => Envelope::News {
            posts: resolved(&key, collection_items::<NewsCollection>(&key, collection)?.posts),
        },
        EnvelopeAlias::Post => Envelope::Post {
            items: resolved(&key, collection_items::<ItemsCollection>(&key, collection)?.items),
        },
        EnvelopeAlias::Posts => Envelope::Posts {
            items: resolved(&key, collection_items::<ItemsCollection>(&key, collection)?.items),
        },
    })
}

fn collection_items<T: DeserializeOwned>(key: &str, collection: Value) -> Result<T> {
    serde_json::from_value(collection)
        .map_err(|e| Error::envelope(format!("'{key}' has an unexpected shape: {e}")))
}

/// Drop unresolved (`null`) entries, keeping the rest in order
fn resolved(key: &str, items: Vec<Option<RawArticle>>) -> Vec<RawArticle> {
    items
        .into_iter()
        .enumerate()
        .filter_map(|(index, item)| {
            if item.is_none() {
                warn!(collection = key, index, "Dropping unresolved entry");
            }
            item
        })
        .collect()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
