// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Security entry and effective-rights types

use super::common::{Links, WebId};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// An access control entry mapping a security identity to rights
///
/// Rights are the service's names: `Read`, `Write`, `ReadData`,
/// `WriteData`, `Delete`, `Execute`, `Admin`, `Annotate`, `Subscribe`,
/// `SubscribeOthers`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct SecurityEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub security_identity_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_rights: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deny_rights: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Links::is_empty")]
    pub links: Links,
}

impl SecurityEntry {
    /// Create an entry for `identity` with the given allow rights
    pub fn allow<I, S>(identity: impl Into<String>, rights: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let identity = identity.into();
        Self {
            name: Some(identity.clone()),
            security_identity_name: Some(identity),
            allow_rights: Some(rights.into_iter().map(Into::into).collect()),
            ..Default::default()
        }
    }
}

/// Effective rights of one user identity on a secured object
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct SecurityRights {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_web_id: Option<WebId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub security_item: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_identity: Option<String>,
    #[serde(default)]
    pub can_annotate: bool,
    #[serde(default)]
    pub can_delete: bool,
    #[serde(default)]
    pub can_execute: bool,
    #[serde(default)]
    pub can_read: bool,
    #[serde(default)]
    pub can_read_data: bool,
    #[serde(default)]
    pub can_subscribe: bool,
    #[serde(default)]
    pub can_subscribe_others: bool,
    #[serde(default)]
    pub can_write: bool,
    #[serde(default)]
    pub can_write_data: bool,
    #[serde(default)]
    pub has_admin: bool,
    #[serde(default)]
    pub rights: Vec<String>,
    #[serde(default, skip_serializing_if = "Links::is_empty")]
    pub links: Links,
}
