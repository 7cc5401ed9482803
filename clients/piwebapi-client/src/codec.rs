// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Request and response body encoding
//!
//! Records are converted to and from [`serde_json::Value`] by the client;
//! a [`Codec`] only moves that tree to and from bytes. The service speaks
//! JSON, so [`JsonCodec`] is the default.

/// Error type returned by codecs
pub type CodecError = Box<dyn std::error::Error + Send + Sync>;

/// Wire format of request and response bodies
pub trait Codec: Send + Sync {
    /// Value sent in `Content-Type` and `Accept`
    fn content_type(&self) -> &'static str;

    fn encode(&self, value: &serde_json::Value) -> Result<Vec<u8>, CodecError>;

    fn decode(&self, body: &[u8]) -> Result<serde_json::Value, CodecError>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

impl Codec for JsonCodec {
    fn content_type(&self) -> &'static str {
        "application/json"
    }

    fn encode(&self, value: &serde_json::Value) -> Result<Vec<u8>, CodecError> {
        Ok(serde_json::to_vec(value)?)
    }

    fn decode(&self, body: &[u8]) -> Result<serde_json::Value, CodecError> {
        Ok(serde_json::from_slice(body)?)
    }
}
