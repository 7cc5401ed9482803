// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Attribute types

use super::common::{Links, WebId};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// An AF attribute owned by an element or event frame
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct Attribute {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub web_id: Option<WebId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Value type name (`Double`, `Int32`, `String`, `EnumerationValue`, ...)
    #[serde(default, rename = "Type", skip_serializing_if = "Option::is_none")]
    pub value_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_qualifier: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_units_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_units_name_abbreviation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_digits: Option<i32>,
    /// Data reference plug-in (`PI Point`, `Formula`, `Table Lookup`, ...)
    #[serde(
        default,
        rename = "DataReferencePlugIn",
        skip_serializing_if = "Option::is_none"
    )]
    pub data_reference_plug_in: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config_string: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_configuration_item: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_excluded: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_hidden: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_manual_data_entry: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_children: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_names: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step: Option<bool>,
    /// Attribute trait (`LimitHi`, `Minimum`, `Target`, ...), if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trait_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub span: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zero: Option<f64>,
    #[serde(default, skip_serializing_if = "Links::is_empty")]
    pub links: Links,
}

impl Attribute {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    pub fn with_type(mut self, value_type: impl Into<String>) -> Self {
        self.value_type = Some(value_type.into());
        self
    }

    /// Bind the attribute to a data reference plug-in and its config string
    pub fn with_data_reference(
        mut self,
        plug_in: impl Into<String>,
        config_string: impl Into<String>,
    ) -> Self {
        self.data_reference_plug_in = Some(plug_in.into());
        self.config_string = Some(config_string.into());
        self
    }
}
