// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Attribute-value search types

use super::common::WebId;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Comparison applied by a [`ValueQuery`]
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema, Display, EnumString,
)]
pub enum SearchOperator {
    Equal,
    NotEqual,
    LessThan,
    LessThanOrEqual,
    GreaterThan,
    GreaterThanOrEqual,
    In,
    IsNull,
    IsNotNull,
}

/// One attribute-value condition of an element search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct ValueQuery {
    pub attribute_name: String,
    #[serde(
        default,
        rename = "AttributeUOM",
        skip_serializing_if = "Option::is_none"
    )]
    pub attribute_uom: Option<String>,
    pub attribute_value: serde_json::Value,
    pub operator: SearchOperator,
}

impl ValueQuery {
    pub fn new(
        attribute_name: impl Into<String>,
        operator: SearchOperator,
        attribute_value: impl Into<serde_json::Value>,
    ) -> Self {
        Self {
            attribute_name: attribute_name.into(),
            attribute_uom: None,
            attribute_value: attribute_value.into(),
            operator,
        }
    }
}

/// Body of `POST elements/searchbyattribute`
///
/// The service answers with `201 Created` and a `Location` header naming
/// the search; the search id is then passed to
/// `GET elements/searchbyattribute/{searchId}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct SearchByAttribute {
    /// WebID of the element or database to search under
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_root: Option<WebId>,
    /// WebID of the element template the matches must derive from
    pub element_template: WebId,
    #[serde(default)]
    pub value_queries: Vec<ValueQuery>,
}
