// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Client configuration
//!
//! A [`Configuration`] is assembled once with the `with_*` builders and is
//! read-only afterwards; resource clients share it behind an [`Arc`].

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use http::header::{AUTHORIZATION, HeaderMap, HeaderName, HeaderValue, USER_AGENT};
use piwebapi_api::WebIdType;
use secrecy::{ExposeSecret, SecretString};
use url::Url;

use crate::codec::{Codec, JsonCodec};
use crate::error::ApiError;
use crate::error_mapper::{ErrorMapper, PassThrough};

/// User agent sent unless overridden
pub const DEFAULT_USER_AGENT: &str = concat!("piwebapi-client/", env!("CARGO_PKG_VERSION"));

/// Per-request timeout unless overridden
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(100);

/// Environment variable names read by [`Configuration::from_env`]
pub mod env {
    pub const URL: &str = "PIWEBAPI_URL";
    pub const USERNAME: &str = "PIWEBAPI_USERNAME";
    pub const PASSWORD: &str = "PIWEBAPI_PASSWORD";
    pub const TOKEN: &str = "PIWEBAPI_TOKEN";
    pub const INSECURE: &str = "PIWEBAPI_INSECURE";
    pub const TIMEOUT_SECS: &str = "PIWEBAPI_TIMEOUT_SECS";
    pub const WEBID_TYPE: &str = "PIWEBAPI_WEBID_TYPE";
}

/// Credentials sent in the `Authorization` header
pub enum Credentials {
    Basic {
        username: String,
        password: SecretString,
    },
    Bearer(SecretString),
}

impl Credentials {
    fn header_value(&self) -> Result<HeaderValue, ApiError> {
        let raw = match self {
            Self::Basic { username, password } => {
                let pair = format!("{}:{}", username, password.expose_secret());
                format!("Basic {}", STANDARD.encode(pair))
            }
            Self::Bearer(token) => format!("Bearer {}", token.expose_secret()),
        };
        let mut value = HeaderValue::from_str(&raw).map_err(|e| ApiError::InvalidHeader {
            name: AUTHORIZATION.to_string(),
            reason: e.to_string(),
        })?;
        value.set_sensitive(true);
        Ok(value)
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Basic { username, .. } => f
                .debug_struct("Basic")
                .field("username", username)
                .field("password", &"[REDACTED]")
                .finish(),
            Self::Bearer(_) => f.debug_tuple("Bearer").field(&"[REDACTED]").finish(),
        }
    }
}

/// Settings shared by every resource client
pub struct Configuration {
    base_path: Url,
    default_headers: HeaderMap,
    user_agent: String,
    timeout: Duration,
    credentials: Option<Credentials>,
    accept_invalid_certs: bool,
    web_id_type: Option<WebIdType>,
    error_mapper: Arc<dyn ErrorMapper>,
    codec: Arc<dyn Codec>,
}

impl Configuration {
    /// Create a configuration for the service rooted at `base_path`
    ///
    /// The base path must be an absolute `http` or `https` URL, e.g.
    /// `https://pisrv/piwebapi`.
    pub fn new(base_path: &str) -> Result<Self, ApiError> {
        let mut base_path = Url::parse(base_path)?;
        match base_path.scheme() {
            "http" | "https" => {}
            other => {
                return Err(ApiError::Configuration(format!(
                    "unsupported URL scheme '{}' in base path",
                    other
                )));
            }
        }
        // Relative joins replace the last segment unless the path ends in '/'
        if !base_path.path().ends_with('/') {
            let path = format!("{}/", base_path.path());
            base_path.set_path(&path);
        }

        let mut default_headers = HeaderMap::new();
        default_headers.insert(
            HeaderName::from_static("x-requested-with"),
            HeaderValue::from_static("XMLHttpRequest"),
        );

        Ok(Self {
            base_path,
            default_headers,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: DEFAULT_TIMEOUT,
            credentials: None,
            accept_invalid_certs: false,
            web_id_type: None,
            error_mapper: Arc::new(PassThrough),
            codec: Arc::new(JsonCodec),
        })
    }

    /// Build a configuration from `PIWEBAPI_*` environment variables
    pub fn from_env() -> Result<Self, ApiError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a configuration from an arbitrary variable source
    ///
    /// `PIWEBAPI_URL` is required. A bearer token wins over a username.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ApiError> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let url = get(env::URL).ok_or_else(|| {
            ApiError::Configuration(format!("{} environment variable is not set", env::URL))
        })?;
        let mut config = Self::new(&url)?;

        if let Some(token) = get(env::TOKEN) {
            config = config.with_bearer_token(token);
        } else if let Some(username) = get(env::USERNAME) {
            let password = get(env::PASSWORD).unwrap_or_default();
            config = config.with_basic_auth(username, password);
        }

        if let Some(insecure) = get(env::INSECURE) {
            config = config.with_accept_invalid_certs(parse_flag(&insecure));
        }

        if let Some(secs) = get(env::TIMEOUT_SECS) {
            let secs: u64 = secs.trim().parse().map_err(|_| {
                ApiError::Configuration(format!(
                    "{} must be a whole number of seconds, got '{}'",
                    env::TIMEOUT_SECS,
                    secs
                ))
            })?;
            config = config.with_timeout(Duration::from_secs(secs));
        }

        if let Some(kind) = get(env::WEBID_TYPE) {
            let kind: WebIdType = kind.trim().parse().map_err(|_| {
                ApiError::Configuration(format!(
                    "{} has unknown WebID type '{}'",
                    env::WEBID_TYPE,
                    kind
                ))
            })?;
            config = config.with_web_id_type(kind);
        }

        Ok(config)
    }

    /// Add a header sent with every request
    pub fn with_header(mut self, name: &str, value: &str) -> Result<Self, ApiError> {
        let header_name =
            HeaderName::from_bytes(name.as_bytes()).map_err(|e| ApiError::InvalidHeader {
                name: name.to_string(),
                reason: e.to_string(),
            })?;
        let header_value = HeaderValue::from_str(value).map_err(|e| ApiError::InvalidHeader {
            name: name.to_string(),
            reason: e.to_string(),
        })?;
        self.default_headers.insert(header_name, header_value);
        Ok(self)
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_basic_auth(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.credentials = Some(Credentials::Basic {
            username: username.into(),
            password: SecretString::from(password.into()),
        });
        self
    }

    pub fn with_bearer_token(mut self, token: impl Into<String>) -> Self {
        self.credentials = Some(Credentials::Bearer(SecretString::from(token.into())));
        self
    }

    /// Skip TLS certificate verification (self-signed lab servers)
    pub fn with_accept_invalid_certs(mut self, accept: bool) -> Self {
        self.accept_invalid_certs = accept;
        self
    }

    /// WebID type requested when a call leaves `webIdType` unset
    pub fn with_web_id_type(mut self, web_id_type: WebIdType) -> Self {
        self.web_id_type = Some(web_id_type);
        self
    }

    pub fn with_error_mapper(mut self, mapper: impl ErrorMapper + 'static) -> Self {
        self.error_mapper = Arc::new(mapper);
        self
    }

    pub fn with_codec(mut self, codec: impl Codec + 'static) -> Self {
        self.codec = Arc::new(codec);
        self
    }

    pub fn base_path(&self) -> &Url {
        &self.base_path
    }

    pub fn default_headers(&self) -> &HeaderMap {
        &self.default_headers
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn credentials(&self) -> Option<&Credentials> {
        self.credentials.as_ref()
    }

    pub fn accept_invalid_certs(&self) -> bool {
        self.accept_invalid_certs
    }

    pub fn web_id_type(&self) -> Option<WebIdType> {
        self.web_id_type
    }

    pub fn error_mapper(&self) -> &dyn ErrorMapper {
        self.error_mapper.as_ref()
    }

    pub fn codec(&self) -> &dyn Codec {
        self.codec.as_ref()
    }

    /// Headers attached to every request: defaults, user agent and
    /// credentials
    pub fn request_headers(&self) -> Result<HeaderMap, ApiError> {
        let mut headers = self.default_headers.clone();
        let agent =
            HeaderValue::from_str(&self.user_agent).map_err(|e| ApiError::InvalidHeader {
                name: USER_AGENT.to_string(),
                reason: e.to_string(),
            })?;
        headers.insert(USER_AGENT, agent);
        if let Some(credentials) = &self.credentials {
            headers.insert(AUTHORIZATION, credentials.header_value()?);
        }
        Ok(headers)
    }
}

impl fmt::Debug for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Configuration")
            .field("base_path", &self.base_path.as_str())
            .field("default_headers", &self.default_headers)
            .field("user_agent", &self.user_agent)
            .field("timeout", &self.timeout)
            .field("credentials", &self.credentials)
            .field("accept_invalid_certs", &self.accept_invalid_certs)
            .field("web_id_type", &self.web_id_type)
            .field("codec", &self.codec.content_type())
            .finish_non_exhaustive()
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
