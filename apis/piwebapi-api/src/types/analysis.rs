// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Analysis types

use super::common::{Links, WebId};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// An AF analysis targeting an element
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct Analysis {
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
    #[serde(
        default,
        rename = "AnalysisRulePlugInName",
        skip_serializing_if = "Option::is_none"
    )]
    pub analysis_rule_plug_in_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_created: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_names: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_notification: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_target: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_template: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_configured: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_time_rule_defined_by_template: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maximum_queue_size: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_time: Option<String>,
    /// `High` or `Low`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publish_results: Option<bool>,
    /// `Enabled`, `Disabled` or `Error`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_web_id: Option<WebId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_name: Option<String>,
    #[serde(
        default,
        rename = "TimeRulePlugInName",
        skip_serializing_if = "Option::is_none"
    )]
    pub time_rule_plug_in_name: Option<String>,
    #[serde(default, skip_serializing_if = "Links::is_empty")]
    pub links: Links,
}

impl Analysis {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }
}
