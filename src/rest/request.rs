//! Request composition for resource operations.
//!
//! [`RequestBuilder`] turns a [`ResolvedRoute`] plus the operation's fields
//! into a transport-ready [`HttpRequest`]. Create and update bodies are
//! wrapped in an envelope (`{"article": {...}}`); source-locale updates use a
//! flat body; uploads become a single multipart part named `file`.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::Value;

use crate::clients::{DataType, FileSource, HttpRequest, HttpRequestBuilder, MultipartPart};
use crate::rest::{ResolvedRoute, ResourceError};

/// Builds the [`HttpRequest`] for one resource operation.
///
/// # Example
///
/// ```rust
/// use help_center::rest::{RequestBuilder, ResolvedRoute, ResourceOperation};
/// use help_center::HttpMethod;
/// use serde_json::json;
///
/// let route = ResolvedRoute {
///     operation: ResourceOperation::Create,
///     http_method: HttpMethod::Post,
///     path: "help_center/categories.json".to_string(),
/// };
///
/// let request = RequestBuilder::new(&route)
///     .envelope("category", &json!({"name": "FAQ"}))
///     .unwrap()
///     .build()
///     .unwrap();
///
/// assert_eq!(request.body, Some(json!({"category": {"name": "FAQ"}})));
/// ```
#[derive(Debug)]
pub struct RequestBuilder {
    inner: HttpRequestBuilder,
}

impl RequestBuilder {
    /// Starts a request for `route`.
    #[must_use]
    pub fn new(route: &ResolvedRoute) -> Self {
        Self {
            inner: HttpRequest::builder(route.http_method, route.path.clone()),
        }
    }

    /// Checks that every required key is present.
    ///
    /// `checks` pairs each key with whether it was supplied.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingParameters`] naming exactly the absent
    /// keys, in the order given.
    pub fn ensure_present(operation: &str, checks: &[(&str, bool)]) -> Result<(), ResourceError> {
        let missing: Vec<String> = checks
            .iter()
            .filter(|(_, present)| !present)
            .map(|(key, _)| (*key).to_string())
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(ResourceError::MissingParameters {
                operation: operation.to_string(),
                missing,
            })
        }
    }

    /// Sets a JSON body of the form `{ name: fields }`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Serialization`] if `fields` cannot be
    /// serialized.
    pub fn envelope<T: Serialize + ?Sized>(
        self,
        name: &str,
        fields: &T,
    ) -> Result<Self, ResourceError> {
        let mut body = serde_json::Map::new();
        body.insert(name.to_string(), serde_json::to_value(fields)?);
        Ok(self.flat_body(Value::Object(body)))
    }

    /// Sets a JSON body as-is, without an envelope.
    #[must_use]
    pub fn flat_body(self, body: Value) -> Self {
        Self {
            inner: self.inner.body(body).body_type(DataType::Json),
        }
    }

    /// Adds the fields of `params` as query parameters.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Serialization`] if `params` cannot be
    /// serialized.
    pub fn query<T: Serialize>(mut self, params: &T) -> Result<Self, ResourceError> {
        for (key, value) in serialize_to_query(params)? {
            self.inner = self.inner.query_param(key, value);
        }
        Ok(self)
    }

    /// Attaches `upload` as a multipart part named `file`.
    ///
    /// The file is checked for existence now but only opened by the transport
    /// when the request is sent. The `inline` query parameter is always set.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::FileNotFound`] if the file does not exist.
    pub fn file_upload(self, operation: &str, upload: &FileUpload) -> Result<Self, ResourceError> {
        if !upload.file.is_file() {
            return Err(ResourceError::FileNotFound {
                operation: operation.to_string(),
                path: upload.file.clone(),
            });
        }

        let part = MultipartPart {
            name: "file".to_string(),
            file_name: upload.resolved_file_name(),
            source: FileSource::new(upload.file.clone()),
        };

        Ok(Self {
            inner: self
                .inner
                .query_param("inline", if upload.inline { "true" } else { "false" })
                .part(part),
        })
    }

    /// Finishes the request.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::InvalidRequest`] if the request is malformed,
    /// for example a POST without a body.
    pub fn build(self) -> Result<HttpRequest, ResourceError> {
        Ok(self.inner.build()?)
    }
}

/// A local file to upload as an article attachment.
///
/// # Example
///
/// ```rust
/// use help_center::rest::FileUpload;
///
/// let upload = FileUpload::new("/tmp/diagram.png").inline(true).article_id(42);
/// assert_eq!(upload.resolved_file_name(), "diagram.png");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileUpload {
    /// Path of the file on disk.
    pub file: PathBuf,
    /// File name reported to the server; defaults to the path's base name.
    pub file_name: Option<String>,
    /// Whether the attachment is shown inline. Defaults to `false`.
    pub inline: bool,
    /// The article to attach to; taken from the chain when absent.
    pub article_id: Option<u64>,
}

impl FileUpload {
    /// Creates an upload for the file at `file`.
    #[must_use]
    pub fn new(file: impl Into<PathBuf>) -> Self {
        Self {
            file: file.into(),
            file_name: None,
            inline: false,
            article_id: None,
        }
    }

    /// Sets the file name reported to the server.
    #[must_use]
    pub fn file_name(mut self, name: impl Into<String>) -> Self {
        self.file_name = Some(name.into());
        self
    }

    /// Sets the inline flag.
    #[must_use]
    pub const fn inline(mut self, inline: bool) -> Self {
        self.inline = inline;
        self
    }

    /// Sets the article to attach to.
    #[must_use]
    pub const fn article_id(mut self, article_id: u64) -> Self {
        self.article_id = Some(article_id);
        self
    }

    /// Returns `true` if a file path was given.
    #[must_use]
    pub fn has_file(&self) -> bool {
        !self.file.as_os_str().is_empty()
    }

    /// Returns the explicit file name, or the path's base name.
    #[must_use]
    pub fn resolved_file_name(&self) -> String {
        self.file_name
            .clone()
            .filter(|name| !name.is_empty())
            .or_else(|| base_name(&self.file))
            .unwrap_or_else(|| "file".to_string())
    }
}

fn base_name(path: &Path) -> Option<String> {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
}

/// Serializes a params struct to a query parameter map.
fn serialize_to_query<T: Serialize>(params: &T) -> Result<HashMap<String, String>, ResourceError> {
    let value = serde_json::to_value(params)?;

    let mut query = HashMap::new();

    if let Value::Object(map) = value {
        for (key, val) in map {
            match val {
                Value::Null => {}
                Value::String(s) => {
                    query.insert(key, s);
                }
                Value::Number(n) => {
                    query.insert(key, n.to_string());
                }
                Value::Bool(b) => {
                    query.insert(key, b.to_string());
                }
                Value::Array(arr) => {
                    let values: Vec<String> = arr
                        .iter()
                        .filter_map(|v| match v {
                            Value::String(s) => Some(s.clone()),
                            Value::Number(n) => Some(n.to_string()),
                            _ => None,
                        })
                        .collect();
                    if !values.is_empty() {
                        query.insert(key, values.join(","));
                    }
                }
                Value::Object(_) => {
                    query.insert(key, val.to_string());
                }
            }
        }
    }

    Ok(query)
}
