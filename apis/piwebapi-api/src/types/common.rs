// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Common types used across the PI Web API

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use strum::{Display, EnumIter, EnumString, VariantNames};

/// Opaque service identifier for a resource instance
pub type WebId = String;

/// Hypermedia links keyed by relation name (`Self`, `Parent`, `Next`, ...)
pub type Links = BTreeMap<String, String>;

/// Free-form extended properties attached to AF objects
pub type ExtendedProperties = BTreeMap<String, serde_json::Value>;

/// Shape of the WebIDs the service should return
///
/// `Full` carries the object's ID and path; the other variants trade
/// robustness for shorter identifiers.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    JsonSchema,
    Display,
    EnumString,
    VariantNames,
    EnumIter,
)]
pub enum WebIdType {
    #[default]
    Full,
    #[serde(rename = "IDOnly")]
    #[strum(serialize = "IDOnly")]
    IdOnly,
    PathOnly,
    #[serde(rename = "LocalIDOnly")]
    #[strum(serialize = "LocalIDOnly")]
    LocalIdOnly,
    #[serde(rename = "DefaultIDOnly")]
    #[strum(serialize = "DefaultIDOnly")]
    DefaultIdOnly,
}

/// Sort direction for collection queries
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    JsonSchema,
    Display,
    EnumString,
    VariantNames,
)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

/// How an event frame search interprets its time range
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    JsonSchema,
    Display,
    EnumString,
    VariantNames,
)]
pub enum SearchMode {
    None,
    StartInclusive,
    EndInclusive,
    Inclusive,
    #[default]
    Overlapped,
    ForwardFromStartTime,
    BackwardFromStartTime,
    ForwardFromEndTime,
    BackwardFromEndTime,
    ForwardInProgress,
    BackwardInProgress,
}

/// Collection envelope returned by every list endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase", bound(deserialize = "T: Deserialize<'de>"))]
pub struct Items<T> {
    /// The returned objects, in server order
    #[serde(default)]
    pub items: Vec<T>,
    /// Paging links (`First`, `Previous`, `Next`, `Last`)
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub links: Links,
}

impl<T> Default for Items<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            links: Links::new(),
        }
    }
}

impl<T> Items<T> {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// URL of the next page, if the server reported one
    pub fn next_page(&self) -> Option<&str> {
        self.links.get("Next").map(String::as_str)
    }
}

impl<'a, T> IntoIterator for &'a Items<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T> IntoIterator for Items<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

/// One entry of a multi-object lookup
///
/// Each requested identifier produces an entry, successful or not; failed
/// lookups carry `exception` instead of `object`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase", bound(deserialize = "T: Deserialize<'de>"))]
pub struct ItemResult<T> {
    /// The WebID or path that was requested
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
    /// Whether `identifier` is a `WebId` or a `Path`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identifier_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub object: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exception: Option<Errors>,
}

/// Error body returned by the service on failed requests
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct Errors {
    #[serde(default)]
    pub errors: Vec<String>,
}
