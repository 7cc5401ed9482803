// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! PI Web API Client Library
//!
//! This client provides typed access to the PI Web API asset (AF) hierarchy.
//! Each resource client maps its methods one-to-one onto REST endpoints;
//! the shared [`ApiClient`] owns transport, body encoding and parameter
//! formatting.
//!
//! ## Usage
//!
//! Every operation first validates its required arguments and returns a
//! [`Call`]. The call is then run through one of four projections:
//!
//! | projection                      | blocking | returns            |
//! |---------------------------------|----------|--------------------|
//! | [`Call::execute`]               | yes      | payload            |
//! | [`Call::execute_with_http_info`]| yes      | [`ApiResponse<T>`] |
//! | [`Call::send`]                  | no       | payload            |
//! | [`Call::send_with_http_info`]   | no       | [`ApiResponse<T>`] |
//!
//! ```ignore
//! use piwebapi_client::{CancellationToken, Configuration, ElementApi, SelectQuery};
//!
//! let config = Configuration::new("https://pisrv/piwebapi")?
//!     .with_basic_auth("operator", "secret");
//! let elements = ElementApi::from_configuration(config)?;
//!
//! // Async, payload only
//! let cancel = CancellationToken::new();
//! let boiler = elements
//!     .get("F1EmDqD5loBNH0erqeqJodtALAhi3Vj", &SelectQuery::default())?
//!     .send(&cancel)
//!     .await?;
//!
//! // Blocking, with status code and headers
//! let response = elements
//!     .get_by_path("\\\\PISRV\\Plant\\Boiler", &SelectQuery::default())?
//!     .execute_with_http_info()?;
//! println!("{} {:?}", response.status_code, response.data.name);
//! ```
//!
//! ## Errors
//!
//! Missing required arguments fail locally with
//! [`ApiError::MissingParameter`] (status 400) before any request is sent.
//! Non-2xx responses are handed to the configured [`ErrorMapper`]; the
//! default [`PassThrough`] mapper lets them through to deserialization,
//! while [`StatusErrorMapper`] turns them into [`ApiError::Status`].

pub mod api_client;
pub mod apis;
pub mod codec;
pub mod configuration;
pub mod error;
pub mod error_mapper;
pub mod operation;
pub mod parameter;
pub mod response;

pub use api_client::ApiClient;
pub use apis::element::{
    AnalysesQuery, AttributesQuery, ChildElementsQuery, ElementApi, ElementAttributesQuery,
    ElementSearchQuery, EventFramesQuery, MultipleQuery, NotificationRulesQuery,
    ReferencedElementsQuery, SearchResultsQuery, SecurityEntriesQuery, SecurityQuery,
    SelectQuery,
};
pub use codec::{Codec, CodecError, JsonCodec};
pub use configuration::{Configuration, Credentials};
pub use error::ApiError;
pub use error_mapper::{ErrorMapper, FnErrorMapper, PassThrough, StatusErrorMapper};
pub use operation::{Call, HttpMethod, NoContent, Operation, QueryParams, RequestParts};
pub use parameter::ToParameter;
pub use response::{ApiResponse, RawResponse};

pub use tokio_util::sync::CancellationToken;

// Re-export the record types so callers need only this crate
pub use piwebapi_api as types;
pub use piwebapi_api::{
    Analysis, Attribute, Element, ElementCategory, Errors, EventFrame, ItemResult, Items,
    NotificationRule, SearchByAttribute, SearchMode, SearchOperator, SecurityEntry,
    SecurityRights, SortOrder, ValueQuery, WebIdType,
};
