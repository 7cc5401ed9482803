// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Optional query parameters of the element operations
//!
//! Every struct derives `Default`, so callers set only what they need:
//!
//! ```ignore
//! let query = ChildElementsQuery {
//!     name_filter: Some("Pump*".into()),
//!     max_count: Some(50),
//!     ..Default::default()
//! };
//! ```
//!
//! Unset fields never appear in the query string. `Vec` fields become one
//! pair per element. `web_id_type` falls back to the configuration default.

use piwebapi_api::{SearchMode, SortOrder, WebIdType};

use crate::operation::QueryParams;

fn push_web_id_type(
    query: &mut QueryParams,
    requested: Option<WebIdType>,
    default: Option<WebIdType>,
) {
    query.push("webIdType", requested.or(default).as_ref());
}

/// Field selection only, used by single-object reads
#[derive(Debug, Clone, Default)]
pub struct SelectQuery {
    pub selected_fields: Option<String>,
    pub web_id_type: Option<WebIdType>,
}

impl SelectQuery {
    pub fn query_params(&self, default_web_id_type: Option<WebIdType>) -> QueryParams {
        let mut q = QueryParams::new();
        q.push("selectedFields", self.selected_fields.as_deref());
        push_web_id_type(&mut q, self.web_id_type, default_web_id_type);
        q
    }
}

/// `GET elements/{webId}/elementattributes`
#[derive(Debug, Clone, Default)]
pub struct ElementAttributesQuery {
    pub attribute_category: Option<String>,
    pub attribute_description_filter: Option<String>,
    pub attribute_name_filter: Option<String>,
    pub attribute_type: Option<String>,
    pub element_category: Option<String>,
    pub element_description_filter: Option<String>,
    pub element_name_filter: Option<String>,
    pub element_template: Option<String>,
    pub element_type: Option<String>,
    pub max_count: Option<i32>,
    pub search_full_hierarchy: Option<bool>,
    pub selected_fields: Option<String>,
    pub sort_field: Option<String>,
    pub sort_order: Option<SortOrder>,
    pub start_index: Option<i32>,
    pub web_id_type: Option<WebIdType>,
    pub associations: Option<String>,
}

impl ElementAttributesQuery {
    pub fn query_params(&self, default_web_id_type: Option<WebIdType>) -> QueryParams {
        let mut q = QueryParams::new();
        q.push("attributeCategory", self.attribute_category.as_deref());
        q.push(
            "attributeDescriptionFilter",
            self.attribute_description_filter.as_deref(),
        );
        q.push("attributeNameFilter", self.attribute_name_filter.as_deref());
        q.push("attributeType", self.attribute_type.as_deref());
        q.push("elementCategory", self.element_category.as_deref());
        q.push(
            "elementDescriptionFilter",
            self.element_description_filter.as_deref(),
        );
        q.push("elementNameFilter", self.element_name_filter.as_deref());
        q.push("elementTemplate", self.element_template.as_deref());
        q.push("elementType", self.element_type.as_deref());
        q.push("maxCount", self.max_count.as_ref());
        q.push("searchFullHierarchy", self.search_full_hierarchy.as_ref());
        q.push("selectedFields", self.selected_fields.as_deref());
        q.push("sortField", self.sort_field.as_deref());
        q.push("sortOrder", self.sort_order.as_ref());
        q.push("startIndex", self.start_index.as_ref());
        push_web_id_type(&mut q, self.web_id_type, default_web_id_type);
        q.push("associations", self.associations.as_deref());
        q
    }
}

/// `GET elements/{webId}/analyses`
#[derive(Debug, Clone, Default)]
pub struct AnalysesQuery {
    pub max_count: Option<i32>,
    pub selected_fields: Option<String>,
    pub sort_field: Option<String>,
    pub sort_order: Option<SortOrder>,
    pub start_index: Option<i32>,
    pub web_id_type: Option<WebIdType>,
}

impl AnalysesQuery {
    pub fn query_params(&self, default_web_id_type: Option<WebIdType>) -> QueryParams {
        let mut q = QueryParams::new();
        q.push("maxCount", self.max_count.as_ref());
        q.push("selectedFields", self.selected_fields.as_deref());
        q.push("sortField", self.sort_field.as_deref());
        q.push("sortOrder", self.sort_order.as_ref());
        q.push("startIndex", self.start_index.as_ref());
        push_web_id_type(&mut q, self.web_id_type, default_web_id_type);
        q
    }
}

/// `GET elements/{webId}/attributes`
#[derive(Debug, Clone, Default)]
pub struct AttributesQuery {
    pub category_name: Option<String>,
    pub max_count: Option<i32>,
    pub name_filter: Option<String>,
    pub search_full_hierarchy: Option<bool>,
    pub selected_fields: Option<String>,
    pub show_excluded: Option<bool>,
    pub show_hidden: Option<bool>,
    pub sort_field: Option<String>,
    pub sort_order: Option<SortOrder>,
    pub start_index: Option<i32>,
    pub template_name: Option<String>,
    pub value_type: Option<String>,
    pub web_id_type: Option<WebIdType>,
    pub associations: Option<String>,
    /// Attribute traits to include, sent as repeated `trait` keys
    pub r#trait: Vec<String>,
    pub trait_category: Vec<String>,
}

impl AttributesQuery {
    pub fn query_params(&self, default_web_id_type: Option<WebIdType>) -> QueryParams {
        let mut q = QueryParams::new();
        q.push("categoryName", self.category_name.as_deref());
        q.push("maxCount", self.max_count.as_ref());
        q.push("nameFilter", self.name_filter.as_deref());
        q.push("searchFullHierarchy", self.search_full_hierarchy.as_ref());
        q.push("selectedFields", self.selected_fields.as_deref());
        q.push("showExcluded", self.show_excluded.as_ref());
        q.push("showHidden", self.show_hidden.as_ref());
        q.push("sortField", self.sort_field.as_deref());
        q.push("sortOrder", self.sort_order.as_ref());
        q.push("startIndex", self.start_index.as_ref());
        q.push("templateName", self.template_name.as_deref());
        q.push("valueType", self.value_type.as_deref());
        push_web_id_type(&mut q, self.web_id_type, default_web_id_type);
        q.push("associations", self.associations.as_deref());
        q.push_all("trait", &self.r#trait);
        q.push_all("traitCategory", &self.trait_category);
        q
    }
}

/// `GET elements/{webId}/elements`
#[derive(Debug, Clone, Default)]
pub struct ChildElementsQuery {
    pub category_name: Option<String>,
    pub description_filter: Option<String>,
    pub element_type: Option<String>,
    pub max_count: Option<i32>,
    pub name_filter: Option<String>,
    pub search_full_hierarchy: Option<bool>,
    pub selected_fields: Option<String>,
    pub sort_field: Option<String>,
    pub sort_order: Option<SortOrder>,
    pub start_index: Option<i32>,
    pub template_name: Option<String>,
    pub web_id_type: Option<WebIdType>,
    pub associations: Option<String>,
}

impl ChildElementsQuery {
    pub fn query_params(&self, default_web_id_type: Option<WebIdType>) -> QueryParams {
        let mut q = QueryParams::new();
        q.push("categoryName", self.category_name.as_deref());
        q.push("descriptionFilter", self.description_filter.as_deref());
        q.push("elementType", self.element_type.as_deref());
        q.push("maxCount", self.max_count.as_ref());
        q.push("nameFilter", self.name_filter.as_deref());
        q.push("searchFullHierarchy", self.search_full_hierarchy.as_ref());
        q.push("selectedFields", self.selected_fields.as_deref());
        q.push("sortField", self.sort_field.as_deref());
        q.push("sortOrder", self.sort_order.as_ref());
        q.push("startIndex", self.start_index.as_ref());
        q.push("templateName", self.template_name.as_deref());
        push_web_id_type(&mut q, self.web_id_type, default_web_id_type);
        q.push("associations", self.associations.as_deref());
        q
    }
}

/// `GET elements/{webId}/elementsquery`
#[derive(Debug, Clone, Default)]
pub struct ElementSearchQuery {
    pub max_count: Option<i32>,
    /// Search expression, e.g. `name:=Pump* template:=Pump`
    pub query: Option<String>,
    pub selected_fields: Option<String>,
    pub start_index: Option<i32>,
    pub web_id_type: Option<WebIdType>,
}

impl ElementSearchQuery {
    pub fn query_params(&self, default_web_id_type: Option<WebIdType>) -> QueryParams {
        let mut q = QueryParams::new();
        q.push("maxCount", self.max_count.as_ref());
        q.push("query", self.query.as_deref());
        q.push("selectedFields", self.selected_fields.as_deref());
        q.push("startIndex", self.start_index.as_ref());
        push_web_id_type(&mut q, self.web_id_type, default_web_id_type);
        q
    }
}

/// `GET elements/searchbyattribute/{searchId}`
#[derive(Debug, Clone, Default)]
pub struct SearchResultsQuery {
    pub category_name: Option<String>,
    pub description_filter: Option<String>,
    pub element_type: Option<String>,
    pub max_count: Option<i32>,
    pub name_filter: Option<String>,
    pub search_full_hierarchy: Option<bool>,
    pub selected_fields: Option<String>,
    pub sort_field: Option<String>,
    pub sort_order: Option<SortOrder>,
    pub start_index: Option<i32>,
    pub web_id_type: Option<WebIdType>,
    pub associations: Option<String>,
}

impl SearchResultsQuery {
    pub fn query_params(&self, default_web_id_type: Option<WebIdType>) -> QueryParams {
        let mut q = QueryParams::new();
        q.push("categoryName", self.category_name.as_deref());
        q.push("descriptionFilter", self.description_filter.as_deref());
        q.push("elementType", self.element_type.as_deref());
        q.push("maxCount", self.max_count.as_ref());
        q.push("nameFilter", self.name_filter.as_deref());
        q.push("searchFullHierarchy", self.search_full_hierarchy.as_ref());
        q.push("selectedFields", self.selected_fields.as_deref());
        q.push("sortField", self.sort_field.as_deref());
        q.push("sortOrder", self.sort_order.as_ref());
        q.push("startIndex", self.start_index.as_ref());
        push_web_id_type(&mut q, self.web_id_type, default_web_id_type);
        q.push("associations", self.associations.as_deref());
        q
    }
}

/// `GET elements/{webId}/eventframes`
#[derive(Debug, Clone, Default)]
pub struct EventFramesQuery {
    pub can_be_acknowledged: Option<bool>,
    pub category_name: Option<String>,
    /// PI time expression, e.g. `*` or `2026-01-01T00:00:00Z`
    pub end_time: Option<String>,
    pub is_acknowledged: Option<bool>,
    pub max_count: Option<i32>,
    pub name_filter: Option<String>,
    pub referenced_element_name_filter: Option<String>,
    pub search_full_hierarchy: Option<bool>,
    pub search_mode: Option<SearchMode>,
    pub selected_fields: Option<String>,
    pub severity: Vec<String>,
    pub sort_field: Option<String>,
    pub sort_order: Option<SortOrder>,
    pub start_index: Option<i32>,
    pub start_time: Option<String>,
    pub template_name: Option<String>,
    pub web_id_type: Option<WebIdType>,
}

impl EventFramesQuery {
    pub fn query_params(&self, default_web_id_type: Option<WebIdType>) -> QueryParams {
        let mut q = QueryParams::new();
        q.push("canBeAcknowledged", self.can_be_acknowledged.as_ref());
        q.push("categoryName", self.category_name.as_deref());
        q.push("endTime", self.end_time.as_deref());
        q.push("isAcknowledged", self.is_acknowledged.as_ref());
        q.push("maxCount", self.max_count.as_ref());
        q.push("nameFilter", self.name_filter.as_deref());
        q.push(
            "referencedElementNameFilter",
            self.referenced_element_name_filter.as_deref(),
        );
        q.push("searchFullHierarchy", self.search_full_hierarchy.as_ref());
        q.push("searchMode", self.search_mode.as_ref());
        q.push("selectedFields", self.selected_fields.as_deref());
        q.push_all("severity", &self.severity);
        q.push("sortField", self.sort_field.as_deref());
        q.push("sortOrder", self.sort_order.as_ref());
        q.push("startIndex", self.start_index.as_ref());
        q.push("startTime", self.start_time.as_deref());
        q.push("templateName", self.template_name.as_deref());
        push_web_id_type(&mut q, self.web_id_type, default_web_id_type);
        q
    }
}

/// `GET elements/multiple`
///
/// Elements are addressed by WebID, by path, or both; each becomes one
/// repeated query key.
#[derive(Debug, Clone, Default)]
pub struct MultipleQuery {
    pub as_parallel: Option<bool>,
    pub include_mode: Option<String>,
    pub path: Vec<String>,
    pub selected_fields: Option<String>,
    pub web_id: Vec<String>,
    pub web_id_type: Option<WebIdType>,
}

impl MultipleQuery {
    pub fn query_params(&self, default_web_id_type: Option<WebIdType>) -> QueryParams {
        let mut q = QueryParams::new();
        q.push("asParallel", self.as_parallel.as_ref());
        q.push("includeMode", self.include_mode.as_deref());
        q.push_all("path", &self.path);
        q.push("selectedFields", self.selected_fields.as_deref());
        q.push_all("webId", &self.web_id);
        push_web_id_type(&mut q, self.web_id_type, default_web_id_type);
        q
    }
}

/// `GET elements/{webId}/notificationrules`
#[derive(Debug, Clone, Default)]
pub struct NotificationRulesQuery {
    pub max_count: Option<i32>,
    pub name_filter: Option<String>,
    pub search_full_hierarchy: Option<bool>,
    pub selected_fields: Option<String>,
    pub sort_field: Option<String>,
    pub sort_order: Option<SortOrder>,
    pub start_index: Option<i32>,
    pub web_id_type: Option<WebIdType>,
}

impl NotificationRulesQuery {
    pub fn query_params(&self, default_web_id_type: Option<WebIdType>) -> QueryParams {
        let mut q = QueryParams::new();
        q.push("maxCount", self.max_count.as_ref());
        q.push("nameFilter", self.name_filter.as_deref());
        q.push("searchFullHierarchy", self.search_full_hierarchy.as_ref());
        q.push("selectedFields", self.selected_fields.as_deref());
        q.push("sortField", self.sort_field.as_deref());
        q.push("sortOrder", self.sort_order.as_ref());
        q.push("startIndex", self.start_index.as_ref());
        push_web_id_type(&mut q, self.web_id_type, default_web_id_type);
        q
    }
}

/// `GET elements/{webId}/referencedelements`
#[derive(Debug, Clone, Default)]
pub struct ReferencedElementsQuery {
    pub category_name: Option<String>,
    pub description_filter: Option<String>,
    pub element_type: Option<String>,
    pub max_count: Option<i32>,
    pub name_filter: Option<String>,
    pub selected_fields: Option<String>,
    pub sort_field: Option<String>,
    pub sort_order: Option<SortOrder>,
    pub start_index: Option<i32>,
    pub template_name: Option<String>,
    pub web_id_type: Option<WebIdType>,
    pub associations: Option<String>,
}

impl ReferencedElementsQuery {
    pub fn query_params(&self, default_web_id_type: Option<WebIdType>) -> QueryParams {
        let mut q = QueryParams::new();
        q.push("categoryName", self.category_name.as_deref());
        q.push("descriptionFilter", self.description_filter.as_deref());
        q.push("elementType", self.element_type.as_deref());
        q.push("maxCount", self.max_count.as_ref());
        q.push("nameFilter", self.name_filter.as_deref());
        q.push("selectedFields", self.selected_fields.as_deref());
        q.push("sortField", self.sort_field.as_deref());
        q.push("sortOrder", self.sort_order.as_ref());
        q.push("startIndex", self.start_index.as_ref());
        q.push("templateName", self.template_name.as_deref());
        push_web_id_type(&mut q, self.web_id_type, default_web_id_type);
        q.push("associations", self.associations.as_deref());
        q
    }
}

/// `GET elements/{webId}/security`; `userIdentity` is a required argument
/// of the operation itself
#[derive(Debug, Clone, Default)]
pub struct SecurityQuery {
    pub force_refresh: Option<bool>,
    pub selected_fields: Option<String>,
    pub web_id_type: Option<WebIdType>,
}

impl SecurityQuery {
    pub fn query_params(&self, default_web_id_type: Option<WebIdType>) -> QueryParams {
        let mut q = QueryParams::new();
        q.push("forceRefresh", self.force_refresh.as_ref());
        q.push("selectedFields", self.selected_fields.as_deref());
        push_web_id_type(&mut q, self.web_id_type, default_web_id_type);
        q
    }
}

/// `GET elements/{webId}/securityentries`
#[derive(Debug, Clone, Default)]
pub struct SecurityEntriesQuery {
    pub name_filter: Option<String>,
    pub selected_fields: Option<String>,
    pub web_id_type: Option<WebIdType>,
}

impl SecurityEntriesQuery {
    pub fn query_params(&self, default_web_id_type: Option<WebIdType>) -> QueryParams {
        let mut q = QueryParams::new();
        q.push("nameFilter", self.name_filter.as_deref());
        q.push("selectedFields", self.selected_fields.as_deref());
        push_web_id_type(&mut q, self.web_id_type, default_web_id_type);
        q
    }
}
