// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Response error mapping
//!
//! Every response, successful or not, passes through the configured
//! [`ErrorMapper`] before its body is decoded. The mapper sees the operation
//! name and the undecoded response and either lets it through or returns the
//! error the call should fail with.

use crate::error::ApiError;
use crate::response::RawResponse;
use piwebapi_api::Errors;

/// Strategy deciding whether a raw response becomes an error
pub trait ErrorMapper: Send + Sync {
    fn check(&self, operation: &'static str, response: &RawResponse) -> Result<(), ApiError>;
}

/// Never raises; non-2xx bodies go on to deserialization as-is
///
/// This is the default. A failing call then surfaces only if its body does
/// not decode into the result type.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassThrough;

impl ErrorMapper for PassThrough {
    fn check(&self, _operation: &'static str, _response: &RawResponse) -> Result<(), ApiError> {
        Ok(())
    }
}

/// Turns every non-2xx response into [`ApiError::Status`]
///
/// The service's `{"Errors": [...]}` body is parsed when present.
#[derive(Debug, Clone, Copy, Default)]
pub struct StatusErrorMapper;

impl ErrorMapper for StatusErrorMapper {
    fn check(&self, operation: &'static str, response: &RawResponse) -> Result<(), ApiError> {
        if response.is_success() {
            return Ok(());
        }

        let errors = serde_json::from_slice::<Errors>(&response.body)
            .map(|e| e.errors)
            .unwrap_or_default();

        Err(ApiError::Status {
            operation,
            status: response.status_code(),
            errors,
            body: response.text().into_owned(),
        })
    }
}

/// Adapter for closures returning an optional error
///
/// ```ignore
/// let mapper = FnErrorMapper::new(|operation, response| {
///     (operation == "Element.Delete" && response.status_code() == 409)
///         .then(|| ApiError::Configuration("element is checked out".into()))
/// });
/// ```
pub struct FnErrorMapper<F>(F);

impl<F> FnErrorMapper<F>
where
    F: Fn(&'static str, &RawResponse) -> Option<ApiError> + Send + Sync,
{
    pub fn new(f: F) -> Self {
        Self(f)
    }
}

impl<F> ErrorMapper for FnErrorMapper<F>
where
    F: Fn(&'static str, &RawResponse) -> Option<ApiError> + Send + Sync,
{
    fn check(&self, operation: &'static str, response: &RawResponse) -> Result<(), ApiError> {
        match (self.0)(operation, response) {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;
    use http::{HeaderMap, StatusCode};

    fn response(status: u16, body: &'static str) -> RawResponse {
        RawResponse {
            status: StatusCode::from_u16(status).expect("valid status"),
            headers: HeaderMap::new(),
            body: Bytes::from_static(body.as_bytes()),
        }
    }

    #[test]
    fn test_pass_through_never_fails() {
        let mapper = PassThrough;
        assert!(mapper.check("Element.Get", &response(500, "boom")).is_ok());
        assert!(mapper.check("Element.Get", &response(200, "{}")).is_ok());
    }

    #[test]
    fn test_status_mapper_parses_service_errors() {
        let mapper = StatusErrorMapper;
        let err = mapper
            .check(
                "Element.Get",
                &response(400, r#"{"Errors":["Unknown or invalid WebID format."]}"#),
            )
            .expect_err("400 must fail");

        match err {
            ApiError::Status {
                operation,
                status,
                errors,
                ..
            } => {
                assert_eq!(operation, "Element.Get");
                assert_eq!(status, 400);
                assert_eq!(errors, vec!["Unknown or invalid WebID format."]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_status_mapper_tolerates_non_json_body() {
        let err = StatusErrorMapper
            .check("Element.Get", &response(502, "<html>Bad Gateway</html>"))
            .expect_err("502 must fail");
        match err {
            ApiError::Status { errors, body, .. } => {
                assert!(errors.is_empty());
                assert!(body.contains("Bad Gateway"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_status_mapper_accepts_success() {
        assert!(StatusErrorMapper.check("Element.Get", &response(204, "")).is_ok());
    }

    #[test]
    fn test_fn_mapper_is_keyed_by_operation() {
        let mapper = FnErrorMapper::new(|operation, response| {
            (operation == "Element.Delete" && response.status_code() == 409)
                .then(|| ApiError::Configuration("checked out".to_string()))
        });

        assert!(mapper.check("Element.Delete", &response(409, "")).is_err());
        assert!(mapper.check("Element.Get", &response(409, "")).is_ok());
        assert!(mapper.check("Element.Delete", &response(204, "")).is_ok());
    }
}
