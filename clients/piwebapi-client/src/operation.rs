// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Operation descriptors and their dispatch
//!
//! An endpoint is described once as a static [`Operation`] (name, verb and
//! path template). A resource method validates its arguments, fills a
//! [`RequestParts`] and hands back a [`Call`]; the call's projections decide
//! whether the request is sent blocking or suspending, and whether the
//! caller gets the payload alone or the whole [`ApiResponse`].

use std::fmt;
use std::marker::PhantomData;

use serde::de::{DeserializeOwned, IgnoredAny};
use serde::{Deserialize, Deserializer};
use tokio_util::sync::CancellationToken;

use crate::api_client::ApiClient;
use crate::error::ApiError;
use crate::parameter::ToParameter;
use crate::response::ApiResponse;

/// HTTP verbs used by the service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Patch,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_method(self) -> http::Method {
        match self {
            Self::Get => http::Method::GET,
            Self::Post => http::Method::POST,
            Self::Patch => http::Method::PATCH,
            Self::Put => http::Method::PUT,
            Self::Delete => http::Method::DELETE,
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Patch => "PATCH",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        };
        write!(f, "{}", s)
    }
}

/// Static description of one endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operation {
    /// Name handed to error mappers, e.g. `Element.Get`
    pub name: &'static str,
    pub method: HttpMethod,
    /// Path relative to the base path, with `{name}` placeholders
    pub path: &'static str,
}

impl Operation {
    pub const fn new(name: &'static str, method: HttpMethod, path: &'static str) -> Self {
        Self { name, method, path }
    }
}

/// Fail with [`ApiError::MissingParameter`] if a required value is blank
pub fn require<'v>(
    operation: &Operation,
    parameter: &'static str,
    value: &'v str,
) -> Result<&'v str, ApiError> {
    if value.trim().is_empty() {
        return Err(ApiError::MissingParameter {
            operation: operation.name,
            parameter,
        });
    }
    Ok(value)
}

/// Fail with [`ApiError::MissingParameter`] if a required list is empty or
/// has a blank entry
pub fn require_all<'v, T: AsRef<str>>(
    operation: &Operation,
    parameter: &'static str,
    values: &'v [T],
) -> Result<&'v [T], ApiError> {
    if values.is_empty() || values.iter().any(|v| v.as_ref().trim().is_empty()) {
        return Err(ApiError::MissingParameter {
            operation: operation.name,
            parameter,
        });
    }
    Ok(values)
}

/// Ordered query-string multi-map
///
/// Unset values are never recorded, and list values become one pair per
/// element so the same key repeats in the query string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(&'static str, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `key=value` if `value` is set
    pub fn push<T: ToParameter + ?Sized>(&mut self, key: &'static str, value: Option<&T>) {
        if let Some(value) = value {
            self.pairs.push((key, value.to_parameter()));
        }
    }

    /// Add one `key=value` pair per element, in order
    pub fn push_all<T: ToParameter>(&mut self, key: &'static str, values: &[T]) {
        for value in values {
            self.pairs.push((key, value.to_parameter()));
        }
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.pairs.iter().map(|(k, v)| (*k, v.as_str()))
    }

    /// Every value recorded for `key`, in insertion order
    pub fn get_all(&self, key: &str) -> Vec<&str> {
        self.pairs
            .iter()
            .filter(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.pairs.iter().any(|(k, _)| *k == key)
    }
}

/// Everything needed to send one request, short of the transport
#[derive(Debug, Clone)]
pub struct RequestParts {
    pub operation: Operation,
    path_params: Vec<(&'static str, String)>,
    query: QueryParams,
    body: Option<Vec<u8>>,
}

impl RequestParts {
    pub fn new(operation: Operation) -> Self {
        Self {
            operation,
            path_params: Vec::new(),
            query: QueryParams::new(),
            body: None,
        }
    }

    pub fn path_param(mut self, name: &'static str, value: String) -> Self {
        self.path_params.push((name, value));
        self
    }

    pub fn query(mut self, query: QueryParams) -> Self {
        self.query = query;
        self
    }

    pub fn body(mut self, body: Vec<u8>) -> Self {
        self.body = Some(body);
        self
    }

    pub fn query_params(&self) -> &QueryParams {
        &self.query
    }

    pub fn body_bytes(&self) -> Option<&[u8]> {
        self.body.as_deref()
    }

    /// Substitute path placeholders with percent-encoded values
    pub fn render_path(&self) -> Result<String, ApiError> {
        let mut path = self.operation.path.to_string();
        for (name, value) in &self.path_params {
            path = path.replace(&format!("{{{}}}", name), &urlencoding::encode(value));
        }

        if path.contains('{') || path.contains('}') {
            return Err(ApiError::UnboundPathParameter {
                operation: self.operation.name,
                path,
            });
        }

        Ok(path)
    }
}

/// Result type of operations whose response body carries nothing useful
///
/// Decodes from any body, including an empty one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoContent;

impl<'de> Deserialize<'de> for NoContent {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        IgnoredAny::deserialize(deserializer)?;
        Ok(NoContent)
    }
}

/// A validated request bound to a client and a result type
#[must_use = "a Call does nothing until one of its projections is invoked"]
pub struct Call<'a, T> {
    client: &'a ApiClient,
    request: RequestParts,
    _result: PhantomData<fn() -> T>,
}

impl<'a, T: DeserializeOwned> Call<'a, T> {
    pub fn new(client: &'a ApiClient, request: RequestParts) -> Self {
        Self {
            client,
            request,
            _result: PhantomData,
        }
    }

    pub fn request(&self) -> &RequestParts {
        &self.request
    }

    /// Send blocking and return the payload
    pub fn execute(self) -> Result<T, ApiError> {
        self.execute_with_http_info().map(ApiResponse::into_data)
    }

    /// Send blocking and return the payload with status code and headers
    pub fn execute_with_http_info(self) -> Result<ApiResponse<T>, ApiError> {
        let raw = self.client.call_api(&self.request)?;
        self.client.complete(&self.request.operation, raw)
    }

    /// Send and return the payload
    pub async fn send(self, cancel: &CancellationToken) -> Result<T, ApiError> {
        self.send_with_http_info(cancel)
            .await
            .map(ApiResponse::into_data)
    }

    /// Send and return the payload with status code and headers
    pub async fn send_with_http_info(
        self,
        cancel: &CancellationToken,
    ) -> Result<ApiResponse<T>, ApiError> {
        let raw = self.client.call_api_async(&self.request, cancel).await?;
        self.client.complete(&self.request.operation, raw)
    }
}

impl<T> fmt::Debug for Call<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Call")
            .field("request", &self.request)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GET: Operation = Operation::new("Element.Get", HttpMethod::Get, "elements/{webId}");
    const GET_ENTRY: Operation = Operation::new(
        "Element.GetSecurityEntryByName",
        HttpMethod::Get,
        "elements/{webId}/securityentries/{name}",
    );

    #[test]
    fn test_render_path_substitutes_every_placeholder() {
        let request = RequestParts::new(GET_ENTRY)
            .path_param("webId", "F1EmAbC".to_string())
            .path_param("name", "Domain Users".to_string());
        let path = request.render_path().expect("render path");
        assert_eq!(path, "elements/F1EmAbC/securityentries/Domain%20Users");
        assert!(!path.contains('{') && !path.contains('}'));
    }

    #[test]
    fn test_render_path_encodes_braces_in_values() {
        let request = RequestParts::new(GET).path_param("webId", "{weird}".to_string());
        let path = request.render_path().expect("render path");
        assert_eq!(path, "elements/%7Bweird%7D");
    }

    #[test]
    fn test_render_path_rejects_unbound_placeholder() {
        let err = RequestParts::new(GET_ENTRY)
            .path_param("webId", "F1EmAbC".to_string())
            .render_path()
            .expect_err("name is unbound");
        assert!(matches!(err, ApiError::UnboundPathParameter { .. }));
    }

    #[test]
    fn test_require_rejects_blank_values() {
        let err = require(&GET, "webId", "  ").expect_err("blank must fail");
        assert_eq!(err.status(), Some(400));
        assert!(err.to_string().contains("webId"));
        assert_eq!(require(&GET, "webId", "F1Em").expect("present"), "F1Em");
    }

    #[test]
    fn test_require_all_rejects_empty_lists() {
        let empty: [String; 0] = [];
        assert!(require_all(&GET, "userIdentity", &empty).is_err());
        assert!(require_all(&GET, "userIdentity", &["ok", ""]).is_err());
        assert!(require_all(&GET, "userIdentity", &["PISRV\\operator"]).is_ok());
    }

    #[test]
    fn test_query_params_omit_unset_values() {
        let mut query = QueryParams::new();
        query.push::<str>("selectedFields", None);
        query.push("maxCount", Some(&10));
        query.push_all::<String>("trait", &[]);

        assert!(!query.contains("selectedFields"));
        assert!(!query.contains("trait"));
        assert_eq!(query.get_all("maxCount"), vec!["10"]);
        assert_eq!(query.len(), 1);
    }

    #[test]
    fn test_query_params_repeat_list_keys_in_order() {
        let mut query = QueryParams::new();
        query.push_all("webId", &["B", "A", "C"]);
        query.push("webIdType", Some(&piwebapi_api::WebIdType::IdOnly));

        assert_eq!(query.get_all("webId"), vec!["B", "A", "C"]);
        let pairs: Vec<_> = query.iter().collect();
        assert_eq!(
            pairs,
            vec![
                ("webId", "B"),
                ("webId", "A"),
                ("webId", "C"),
                ("webIdType", "IDOnly"),
            ]
        );
    }

    #[test]
    fn test_no_content_accepts_any_body() {
        let _: NoContent = serde_json::from_str("null").expect("null");
        let _: NoContent = serde_json::from_str(r#"{"Anything": [1, 2]}"#).expect("object");
    }
}
