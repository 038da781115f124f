//! HTTP response types.

use std::collections::HashMap;

use serde::de::DeserializeOwned;

/// An HTTP response from the Help Center API.
#[derive(Clone, Debug, PartialEq)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers, lowercased (headers may have multiple values).
    pub headers: HashMap<String, Vec<String>>,
    /// The parsed response body.
    pub body: serde_json::Value,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`.
    #[must_use]
    pub fn new(code: u16, headers: HashMap<String, Vec<String>>, body: serde_json::Value) -> Self {
        Self {
            code,
            headers,
            body,
        }
    }

    /// Creates a `200 OK` response with the given body and no headers.
    #[must_use]
    pub fn ok(body: serde_json::Value) -> Self {
        Self::new(200, HashMap::new(), body)
    }

    /// Returns `true` if the response has a 2xx status code.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the request id the server assigned to this call.
    ///
    /// Checks `X-Request-Id` first, then `X-Zendesk-Request-Id`.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        ["x-request-id", "x-zendesk-request-id"]
            .iter()
            .find_map(|name| self.headers.get(*name).and_then(|v| v.first()))
            .map(String::as_str)
    }

    /// Extracts the id of the object wrapped under `object_name`.
    ///
    /// A create response such as `{"category": {"id": 7, ...}}` yields
    /// `Some(7)` for `id_of("category")`.
    #[must_use]
    pub fn id_of(&self, object_name: &str) -> Option<u64> {
        self.body.get(object_name)?.get("id")?.as_u64()
    }

    /// Decodes the object wrapped under `key`.
    ///
    /// Returns `None` if the key is absent or does not match `T`.
    #[must_use]
    pub fn resource<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let value = self.body.get(key)?;
        serde_json::from_value(value.clone()).ok()
    }

    /// Decodes the list wrapped under `key`.
    ///
    /// Returns `None` if the key is absent or does not match `Vec<T>`.
    #[must_use]
    pub fn resources<T: DeserializeOwned>(&self, key: &str) -> Option<Vec<T>> {
        let value = self.body.get(key)?;
        serde_json::from_value(value.clone()).ok()
    }
}
