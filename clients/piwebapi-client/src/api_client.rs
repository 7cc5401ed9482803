// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Shared HTTP dispatch
//!
//! [`ApiClient`] turns [`RequestParts`] into HTTP requests, sends them on
//! either the async or the blocking transport, and runs the response through
//! the configured error mapper and codec. Resource clients hold a clone and
//! never touch the transport directly.

use std::sync::{Arc, Mutex, Once};

use http::HeaderValue;
use http::header::{ACCEPT, CONTENT_TYPE, HeaderMap};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};
use url::Url;

use crate::configuration::Configuration;
use crate::error::ApiError;
use crate::operation::{Operation, RequestParts};
use crate::parameter::ToParameter;
use crate::response::{ApiResponse, RawResponse};

static CRYPTO_PROVIDER: Once = Once::new();

/// reqwest is built without a rustls provider; install `ring` once per
/// process before the first client is built.
fn install_crypto_provider() {
    CRYPTO_PROVIDER.call_once(|| {
        // Err means another provider is already installed, which is fine
        let _ = rustls::crypto::ring::default_provider().install_default();
    });
}

struct ClientInner {
    configuration: Arc<Configuration>,
    http: reqwest::Client,
    /// Built on first blocking call so async-only users never start its
    /// internal runtime.
    blocking: Mutex<Option<reqwest::blocking::Client>>,
}

/// Transport shared by all resource clients
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<ClientInner>,
}

impl ApiClient {
    pub fn new(configuration: Configuration) -> Result<Self, ApiError> {
        Self::from_shared(Arc::new(configuration))
    }

    pub fn from_shared(configuration: Arc<Configuration>) -> Result<Self, ApiError> {
        install_crypto_provider();

        let http = reqwest::Client::builder()
            .timeout(configuration.timeout())
            .danger_accept_invalid_certs(configuration.accept_invalid_certs())
            .build()?;

        Ok(Self {
            inner: Arc::new(ClientInner {
                configuration,
                http,
                blocking: Mutex::new(None),
            }),
        })
    }

    pub fn configuration(&self) -> &Configuration {
        &self.inner.configuration
    }

    /// Wire text of a path or query argument
    pub fn parameter_to_string<T: ToParameter + ?Sized>(&self, value: &T) -> String {
        value.to_parameter()
    }

    /// Encode a request body with the configured codec
    pub fn serialize<T: Serialize>(
        &self,
        operation: &Operation,
        value: &T,
    ) -> Result<Vec<u8>, ApiError> {
        let serialize_error = |reason: String| ApiError::Serialize {
            operation: operation.name,
            reason,
        };
        let tree = serde_json::to_value(value).map_err(|e| serialize_error(e.to_string()))?;
        self.configuration()
            .codec()
            .encode(&tree)
            .map_err(|e| serialize_error(e.to_string()))
    }

    /// Decode a response body into `T`
    ///
    /// An empty body decodes as JSON `null`.
    pub fn deserialize<T: DeserializeOwned>(
        &self,
        operation: &Operation,
        response: &RawResponse,
    ) -> Result<T, ApiError> {
        let deserialize_error = |reason: String| ApiError::Deserialize {
            operation: operation.name,
            status: response.status_code(),
            reason,
        };

        let tree = if response.body.iter().all(u8::is_ascii_whitespace) {
            serde_json::Value::Null
        } else {
            self.configuration()
                .codec()
                .decode(&response.body)
                .map_err(|e| deserialize_error(e.to_string()))?
        };

        serde_json::from_value(tree).map_err(|e| deserialize_error(e.to_string()))
    }

    /// Absolute URL for a request: base path, rendered path, then query
    pub fn build_url(&self, request: &RequestParts) -> Result<Url, ApiError> {
        let path = request.render_path()?;
        let mut url = self.configuration().base_path().join(&path)?;

        let query = request.query_params();
        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query.iter() {
                pairs.append_pair(key, value);
            }
        }

        Ok(url)
    }

    fn headers(&self, request: &RequestParts) -> Result<HeaderMap, ApiError> {
        let configuration = self.configuration();
        let mut headers = configuration.request_headers()?;
        let media_type = configuration.codec().content_type();
        let content_type =
            HeaderValue::from_str(media_type).map_err(|e| ApiError::InvalidHeader {
                name: CONTENT_TYPE.to_string(),
                reason: e.to_string(),
            })?;
        headers.insert(ACCEPT, content_type.clone());
        if request.body_bytes().is_some() {
            headers.insert(CONTENT_TYPE, content_type);
        }
        Ok(headers)
    }

    fn blocking_client(&self) -> Result<reqwest::blocking::Client, ApiError> {
        let mut slot = self
            .inner
            .blocking
            .lock()
            .map_err(|_| ApiError::Configuration("blocking client lock poisoned".to_string()))?;

        if let Some(client) = slot.as_ref() {
            return Ok(client.clone());
        }

        let configuration = self.configuration();
        let client = reqwest::blocking::Client::builder()
            .timeout(configuration.timeout())
            .danger_accept_invalid_certs(configuration.accept_invalid_certs())
            .build()?;
        *slot = Some(client.clone());
        Ok(client)
    }

    /// Send a request on the blocking transport
    ///
    /// Must not be called from within an async runtime.
    pub fn call_api(&self, request: &RequestParts) -> Result<RawResponse, ApiError> {
        let operation = request.operation;
        let url = self.build_url(request)?;
        let headers = self.headers(request)?;

        debug!(
            operation = operation.name,
            method = %operation.method,
            url = %url,
            "Sending request"
        );

        let mut builder = self
            .blocking_client()?
            .request(operation.method.as_method(), url)
            .headers(headers);
        if let Some(body) = request.body_bytes() {
            builder = builder.body(body.to_vec());
        }

        let response = builder.send()?;
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes()?;

        Ok(RawResponse {
            status,
            headers,
            body,
        })
    }

    /// Send a request on the async transport
    ///
    /// Returns [`ApiError::Cancelled`] if `cancel` fires first; a token that
    /// is already cancelled stops the request before it is sent.
    pub async fn call_api_async(
        &self,
        request: &RequestParts,
        cancel: &CancellationToken,
    ) -> Result<RawResponse, ApiError> {
        let operation = request.operation;
        if cancel.is_cancelled() {
            return Err(ApiError::Cancelled {
                operation: operation.name,
            });
        }

        let url = self.build_url(request)?;
        let headers = self.headers(request)?;

        debug!(
            operation = operation.name,
            method = %operation.method,
            url = %url,
            "Sending request"
        );

        let mut builder = self
            .inner
            .http
            .request(operation.method.as_method(), url)
            .headers(headers);
        if let Some(body) = request.body_bytes() {
            builder = builder.body(body.to_vec());
        }

        let exchange = async {
            let response = builder.send().await?;
            let status = response.status();
            let headers = response.headers().clone();
            let body = response.bytes().await?;
            Ok::<_, ApiError>(RawResponse {
                status,
                headers,
                body,
            })
        };

        tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                debug!(operation = operation.name, "Request cancelled");
                Err(ApiError::Cancelled { operation: operation.name })
            }
            result = exchange => result,
        }
    }

    /// Map and decode a raw response into the operation's result type
    pub(crate) fn complete<T: DeserializeOwned>(
        &self,
        operation: &Operation,
        response: RawResponse,
    ) -> Result<ApiResponse<T>, ApiError> {
        debug!(
            operation = operation.name,
            status = response.status_code(),
            bytes = response.body.len(),
            "Received response"
        );

        if let Err(e) = self
            .configuration()
            .error_mapper()
            .check(operation.name, &response)
        {
            warn!(
                operation = operation.name,
                status = response.status_code(),
                error = %e,
                "Response rejected"
            );
            return Err(e);
        }

        let data = self.deserialize(operation, &response)?;
        Ok(ApiResponse::new(response.status_code(), response.headers, data))
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("configuration", &self.inner.configuration)
            .finish_non_exhaustive()
    }
}
