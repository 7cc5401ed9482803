// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Element resource client
//!
//! Wraps the `elements` controller: element CRUD, child collections
//! (attributes, analyses, child elements, event frames, notification rules),
//! referenced elements, attribute search and security.

mod query;

use std::collections::BTreeMap;

use piwebapi_api::{
    Analysis, Attribute, Element, ElementCategory, EventFrame, ItemResult, Items,
    NotificationRule, SearchByAttribute, SecurityEntry, SecurityRights, WebIdType,
};

use crate::api_client::ApiClient;
use crate::configuration::Configuration;
use crate::error::ApiError;
use crate::operation::{Call, NoContent, QueryParams, RequestParts, require, require_all};

pub use query::{
    AnalysesQuery, AttributesQuery, ChildElementsQuery, ElementAttributesQuery,
    ElementSearchQuery, EventFramesQuery, MultipleQuery, NotificationRulesQuery,
    ReferencedElementsQuery, SearchResultsQuery, SecurityEntriesQuery, SecurityQuery,
    SelectQuery,
};

/// Endpoint descriptors of the element controller
///
/// The `name` of each is what an [`crate::ErrorMapper`] receives.
pub mod operations {
    use crate::operation::{HttpMethod, Operation};

    pub const GET_BY_PATH: Operation =
        Operation::new("Element.GetByPath", HttpMethod::Get, "elements");
    pub const GET: Operation = Operation::new("Element.Get", HttpMethod::Get, "elements/{webId}");
    pub const UPDATE: Operation =
        Operation::new("Element.Update", HttpMethod::Patch, "elements/{webId}");
    pub const DELETE: Operation =
        Operation::new("Element.Delete", HttpMethod::Delete, "elements/{webId}");
    pub const CREATE_CONFIG: Operation = Operation::new(
        "Element.CreateConfig",
        HttpMethod::Post,
        "elements/{webId}/config",
    );
    pub const DELETE_CONFIG: Operation = Operation::new(
        "Element.DeleteConfig",
        HttpMethod::Delete,
        "elements/{webId}/config",
    );
    pub const FIND_ELEMENT_ATTRIBUTES: Operation = Operation::new(
        "Element.FindElementAttributes",
        HttpMethod::Get,
        "elements/{webId}/elementattributes",
    );
    pub const GET_ANALYSES: Operation = Operation::new(
        "Element.GetAnalyses",
        HttpMethod::Get,
        "elements/{webId}/analyses",
    );
    pub const CREATE_ANALYSIS: Operation = Operation::new(
        "Element.CreateAnalysis",
        HttpMethod::Post,
        "elements/{webId}/analyses",
    );
    pub const GET_ATTRIBUTES: Operation = Operation::new(
        "Element.GetAttributes",
        HttpMethod::Get,
        "elements/{webId}/attributes",
    );
    pub const CREATE_ATTRIBUTE: Operation = Operation::new(
        "Element.CreateAttribute",
        HttpMethod::Post,
        "elements/{webId}/attributes",
    );
    pub const GET_CATEGORIES: Operation = Operation::new(
        "Element.GetCategories",
        HttpMethod::Get,
        "elements/{webId}/categories",
    );
    pub const GET_ELEMENTS: Operation = Operation::new(
        "Element.GetElements",
        HttpMethod::Get,
        "elements/{webId}/elements",
    );
    pub const CREATE_ELEMENT: Operation = Operation::new(
        "Element.CreateElement",
        HttpMethod::Post,
        "elements/{webId}/elements",
    );
    pub const GET_ELEMENTS_QUERY: Operation = Operation::new(
        "Element.GetElementsQuery",
        HttpMethod::Get,
        "elements/{webId}/elementsquery",
    );
    pub const CREATE_SEARCH_BY_ATTRIBUTE: Operation = Operation::new(
        "Element.CreateSearchByAttribute",
        HttpMethod::Post,
        "elements/searchbyattribute",
    );
    pub const EXECUTE_SEARCH_BY_ATTRIBUTE: Operation = Operation::new(
        "Element.ExecuteSearchByAttribute",
        HttpMethod::Get,
        "elements/searchbyattribute/{searchId}",
    );
    pub const GET_EVENT_FRAMES: Operation = Operation::new(
        "Element.GetEventFrames",
        HttpMethod::Get,
        "elements/{webId}/eventframes",
    );
    pub const GET_MULTIPLE: Operation =
        Operation::new("Element.GetMultiple", HttpMethod::Get, "elements/multiple");
    pub const GET_NOTIFICATION_RULES: Operation = Operation::new(
        "Element.GetNotificationRules",
        HttpMethod::Get,
        "elements/{webId}/notificationrules",
    );
    pub const GET_REFERENCED_ELEMENTS: Operation = Operation::new(
        "Element.GetReferencedElements",
        HttpMethod::Get,
        "elements/{webId}/referencedelements",
    );
    pub const ADD_REFERENCED_ELEMENT: Operation = Operation::new(
        "Element.AddReferencedElement",
        HttpMethod::Post,
        "elements/{webId}/referencedelements",
    );
    pub const REMOVE_REFERENCED_ELEMENT: Operation = Operation::new(
        "Element.RemoveReferencedElement",
        HttpMethod::Delete,
        "elements/{webId}/referencedelements",
    );
    pub const GET_SECURITY: Operation = Operation::new(
        "Element.GetSecurity",
        HttpMethod::Get,
        "elements/{webId}/security",
    );
    pub const GET_SECURITY_ENTRIES: Operation = Operation::new(
        "Element.GetSecurityEntries",
        HttpMethod::Get,
        "elements/{webId}/securityentries",
    );
    pub const CREATE_SECURITY_ENTRY: Operation = Operation::new(
        "Element.CreateSecurityEntry",
        HttpMethod::Post,
        "elements/{webId}/securityentries",
    );
    pub const GET_SECURITY_ENTRY_BY_NAME: Operation = Operation::new(
        "Element.GetSecurityEntryByName",
        HttpMethod::Get,
        "elements/{webId}/securityentries/{name}",
    );
    pub const UPDATE_SECURITY_ENTRY: Operation = Operation::new(
        "Element.UpdateSecurityEntry",
        HttpMethod::Put,
        "elements/{webId}/securityentries/{name}",
    );
    pub const DELETE_SECURITY_ENTRY: Operation = Operation::new(
        "Element.DeleteSecurityEntry",
        HttpMethod::Delete,
        "elements/{webId}/securityentries/{name}",
    );
}

use operations::*;

/// Client for the `elements` controller
///
/// Each method checks its required arguments and returns a [`Call`]; nothing
/// is sent until one of the call's projections runs.
#[derive(Debug, Clone)]
pub struct ElementApi {
    client: ApiClient,
}

impl ElementApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub fn from_configuration(configuration: Configuration) -> Result<Self, ApiError> {
        Ok(Self::new(ApiClient::new(configuration)?))
    }

    pub fn api_client(&self) -> &ApiClient {
        &self.client
    }

    fn default_web_id_type(&self) -> Option<WebIdType> {
        self.client.configuration().web_id_type()
    }

    fn web_id_request(
        &self,
        operation: crate::operation::Operation,
        web_id: &str,
    ) -> Result<RequestParts, ApiError> {
        let web_id = require(&operation, "webId", web_id)?;
        let web_id = self.client.parameter_to_string(web_id);
        Ok(RequestParts::new(operation).path_param("webId", web_id))
    }

    fn call<T: serde::de::DeserializeOwned>(&self, request: RequestParts) -> Call<'_, T> {
        Call::new(&self.client, request)
    }

    /// Retrieve an element by its AF path, e.g. `\\PISRV\Plant\Boiler`
    pub fn get_by_path(
        &self,
        path: &str,
        query: &SelectQuery,
    ) -> Result<Call<'_, Element>, ApiError> {
        let path = require(&GET_BY_PATH, "path", path)?;
        let mut q = QueryParams::new();
        q.push("path", Some(path));
        let rest = query.query_params(self.default_web_id_type());
        for (key, value) in rest.iter() {
            q.push(key, Some(value));
        }
        Ok(self.call(RequestParts::new(GET_BY_PATH).query(q)))
    }

    /// Retrieve an element
    pub fn get(&self, web_id: &str, query: &SelectQuery) -> Result<Call<'_, Element>, ApiError> {
        let request = self
            .web_id_request(GET, web_id)?
            .query(query.query_params(self.default_web_id_type()));
        Ok(self.call(request))
    }

    /// Update an element; only the fields set in `element` are changed
    pub fn update(
        &self,
        web_id: &str,
        element: &Element,
    ) -> Result<Call<'_, NoContent>, ApiError> {
        let body = self.client.serialize(&UPDATE, element)?;
        Ok(self.call(self.web_id_request(UPDATE, web_id)?.body(body)))
    }

    /// Delete an element and its children
    pub fn delete(&self, web_id: &str) -> Result<Call<'_, NoContent>, ApiError> {
        Ok(self.call(self.web_id_request(DELETE, web_id)?))
    }

    /// Create or update the element's data reference configuration
    pub fn create_config(
        &self,
        web_id: &str,
        include_child_elements: Option<bool>,
    ) -> Result<Call<'_, BTreeMap<String, serde_json::Value>>, ApiError> {
        let mut q = QueryParams::new();
        q.push("includeChildElements", include_child_elements.as_ref());
        Ok(self.call(self.web_id_request(CREATE_CONFIG, web_id)?.query(q)))
    }

    /// Delete the element's data reference configuration
    pub fn delete_config(
        &self,
        web_id: &str,
        include_child_elements: Option<bool>,
    ) -> Result<Call<'_, NoContent>, ApiError> {
        let mut q = QueryParams::new();
        q.push("includeChildElements", include_child_elements.as_ref());
        Ok(self.call(self.web_id_request(DELETE_CONFIG, web_id)?.query(q)))
    }

    /// Search attributes of this element and, optionally, its descendants
    pub fn find_element_attributes(
        &self,
        web_id: &str,
        query: &ElementAttributesQuery,
    ) -> Result<Call<'_, Items<Attribute>>, ApiError> {
        let request = self
            .web_id_request(FIND_ELEMENT_ATTRIBUTES, web_id)?
            .query(query.query_params(self.default_web_id_type()));
        Ok(self.call(request))
    }

    pub fn get_analyses(
        &self,
        web_id: &str,
        query: &AnalysesQuery,
    ) -> Result<Call<'_, Items<Analysis>>, ApiError> {
        let request = self
            .web_id_request(GET_ANALYSES, web_id)?
            .query(query.query_params(self.default_web_id_type()));
        Ok(self.call(request))
    }

    /// Create an analysis owned by this element
    pub fn create_analysis(
        &self,
        web_id: &str,
        analysis: &Analysis,
        web_id_type: Option<WebIdType>,
    ) -> Result<Call<'_, NoContent>, ApiError> {
        let body = self.client.serialize(&CREATE_ANALYSIS, analysis)?;
        let request = self
            .web_id_request(CREATE_ANALYSIS, web_id)?
            .query(self.web_id_type_query(web_id_type))
            .body(body);
        Ok(self.call(request))
    }

    pub fn get_attributes(
        &self,
        web_id: &str,
        query: &AttributesQuery,
    ) -> Result<Call<'_, Items<Attribute>>, ApiError> {
        let request = self
            .web_id_request(GET_ATTRIBUTES, web_id)?
            .query(query.query_params(self.default_web_id_type()));
        Ok(self.call(request))
    }

    pub fn create_attribute(
        &self,
        web_id: &str,
        attribute: &Attribute,
        web_id_type: Option<WebIdType>,
    ) -> Result<Call<'_, NoContent>, ApiError> {
        let body = self.client.serialize(&CREATE_ATTRIBUTE, attribute)?;
        let request = self
            .web_id_request(CREATE_ATTRIBUTE, web_id)?
            .query(self.web_id_type_query(web_id_type))
            .body(body);
        Ok(self.call(request))
    }

    pub fn get_categories(
        &self,
        web_id: &str,
        query: &SelectQuery,
    ) -> Result<Call<'_, Items<ElementCategory>>, ApiError> {
        let request = self
            .web_id_request(GET_CATEGORIES, web_id)?
            .query(query.query_params(self.default_web_id_type()));
        Ok(self.call(request))
    }

    /// Direct children, or all descendants with `search_full_hierarchy`
    pub fn get_elements(
        &self,
        web_id: &str,
        query: &ChildElementsQuery,
    ) -> Result<Call<'_, Items<Element>>, ApiError> {
        let request = self
            .web_id_request(GET_ELEMENTS, web_id)?
            .query(query.query_params(self.default_web_id_type()));
        Ok(self.call(request))
    }

    /// Create a child element; its location is in the response's `Location`
    pub fn create_element(
        &self,
        web_id: &str,
        element: &Element,
        web_id_type: Option<WebIdType>,
    ) -> Result<Call<'_, NoContent>, ApiError> {
        let body = self.client.serialize(&CREATE_ELEMENT, element)?;
        let request = self
            .web_id_request(CREATE_ELEMENT, web_id)?
            .query(self.web_id_type_query(web_id_type))
            .body(body);
        Ok(self.call(request))
    }

    /// Search descendants with a query expression
    pub fn get_elements_query(
        &self,
        web_id: &str,
        query: &ElementSearchQuery,
    ) -> Result<Call<'_, Items<Element>>, ApiError> {
        let request = self
            .web_id_request(GET_ELEMENTS_QUERY, web_id)?
            .query(query.query_params(self.default_web_id_type()));
        Ok(self.call(request))
    }

    /// Register an attribute-value search
    ///
    /// The search ID to pass to [`Self::execute_search_by_attribute`] is the
    /// last segment of the response's `Location` header.
    pub fn create_search_by_attribute(
        &self,
        search: &SearchByAttribute,
        no_results: Option<bool>,
        web_id_type: Option<WebIdType>,
    ) -> Result<Call<'_, NoContent>, ApiError> {
        let body = self.client.serialize(&CREATE_SEARCH_BY_ATTRIBUTE, search)?;
        let mut q = QueryParams::new();
        q.push("noResults", no_results.as_ref());
        q.push("webIdType", web_id_type.or(self.default_web_id_type()).as_ref());
        let request = RequestParts::new(CREATE_SEARCH_BY_ATTRIBUTE)
            .query(q)
            .body(body);
        Ok(self.call(request))
    }

    pub fn execute_search_by_attribute(
        &self,
        search_id: &str,
        query: &SearchResultsQuery,
    ) -> Result<Call<'_, Items<Element>>, ApiError> {
        let search_id = require(&EXECUTE_SEARCH_BY_ATTRIBUTE, "searchId", search_id)?;
        let request = RequestParts::new(EXECUTE_SEARCH_BY_ATTRIBUTE)
            .path_param("searchId", self.client.parameter_to_string(search_id))
            .query(query.query_params(self.default_web_id_type()));
        Ok(self.call(request))
    }

    pub fn get_event_frames(
        &self,
        web_id: &str,
        query: &EventFramesQuery,
    ) -> Result<Call<'_, Items<EventFrame>>, ApiError> {
        let request = self
            .web_id_request(GET_EVENT_FRAMES, web_id)?
            .query(query.query_params(self.default_web_id_type()));
        Ok(self.call(request))
    }

    /// Retrieve several elements in one request; each item reports its own
    /// success or failure
    pub fn get_multiple(
        &self,
        query: &MultipleQuery,
    ) -> Result<Call<'_, Items<ItemResult<Element>>>, ApiError> {
        let request = RequestParts::new(GET_MULTIPLE)
            .query(query.query_params(self.default_web_id_type()));
        Ok(self.call(request))
    }

    pub fn get_notification_rules(
        &self,
        web_id: &str,
        query: &NotificationRulesQuery,
    ) -> Result<Call<'_, Items<NotificationRule>>, ApiError> {
        let request = self
            .web_id_request(GET_NOTIFICATION_RULES, web_id)?
            .query(query.query_params(self.default_web_id_type()));
        Ok(self.call(request))
    }

    pub fn get_referenced_elements(
        &self,
        web_id: &str,
        query: &ReferencedElementsQuery,
    ) -> Result<Call<'_, Items<Element>>, ApiError> {
        let request = self
            .web_id_request(GET_REFERENCED_ELEMENTS, web_id)?
            .query(query.query_params(self.default_web_id_type()));
        Ok(self.call(request))
    }

    /// Add one or more elements as references of this element
    pub fn add_referenced_element(
        &self,
        web_id: &str,
        referenced_element_web_id: &[String],
        reference_type: Option<&str>,
    ) -> Result<Call<'_, NoContent>, ApiError> {
        let request = self.web_id_request(ADD_REFERENCED_ELEMENT, web_id)?;
        let referenced = require_all(
            &ADD_REFERENCED_ELEMENT,
            "referencedElementWebId",
            referenced_element_web_id,
        )?;
        let mut q = QueryParams::new();
        q.push_all("referencedElementWebId", referenced);
        q.push("referenceType", reference_type);
        Ok(self.call(request.query(q)))
    }

    pub fn remove_referenced_element(
        &self,
        web_id: &str,
        referenced_element_web_id: &[String],
    ) -> Result<Call<'_, NoContent>, ApiError> {
        let request = self.web_id_request(REMOVE_REFERENCED_ELEMENT, web_id)?;
        let referenced = require_all(
            &REMOVE_REFERENCED_ELEMENT,
            "referencedElementWebId",
            referenced_element_web_id,
        )?;
        let mut q = QueryParams::new();
        q.push_all("referencedElementWebId", referenced);
        Ok(self.call(request.query(q)))
    }

    /// Effective rights of each listed identity on this element
    pub fn get_security(
        &self,
        web_id: &str,
        user_identity: &[String],
        query: &SecurityQuery,
    ) -> Result<Call<'_, Items<SecurityRights>>, ApiError> {
        let request = self.web_id_request(GET_SECURITY, web_id)?;
        let identities = require_all(&GET_SECURITY, "userIdentity", user_identity)?;
        let mut q = query.query_params(self.default_web_id_type());
        q.push_all("userIdentity", identities);
        Ok(self.call(request.query(q)))
    }

    pub fn get_security_entries(
        &self,
        web_id: &str,
        query: &SecurityEntriesQuery,
    ) -> Result<Call<'_, Items<SecurityEntry>>, ApiError> {
        let request = self
            .web_id_request(GET_SECURITY_ENTRIES, web_id)?
            .query(query.query_params(self.default_web_id_type()));
        Ok(self.call(request))
    }

    pub fn create_security_entry(
        &self,
        web_id: &str,
        entry: &SecurityEntry,
        apply_to_children: Option<bool>,
        web_id_type: Option<WebIdType>,
    ) -> Result<Call<'_, NoContent>, ApiError> {
        let body = self.client.serialize(&CREATE_SECURITY_ENTRY, entry)?;
        let mut q = QueryParams::new();
        q.push("applyToChildren", apply_to_children.as_ref());
        q.push("webIdType", web_id_type.or(self.default_web_id_type()).as_ref());
        let request = self
            .web_id_request(CREATE_SECURITY_ENTRY, web_id)?
            .query(q)
            .body(body);
        Ok(self.call(request))
    }

    pub fn get_security_entry_by_name(
        &self,
        name: &str,
        web_id: &str,
        query: &SelectQuery,
    ) -> Result<Call<'_, SecurityEntry>, ApiError> {
        let name = require(&GET_SECURITY_ENTRY_BY_NAME, "name", name)?;
        let request = self
            .web_id_request(GET_SECURITY_ENTRY_BY_NAME, web_id)?
            .path_param("name", self.client.parameter_to_string(name))
            .query(query.query_params(self.default_web_id_type()));
        Ok(self.call(request))
    }

    pub fn update_security_entry(
        &self,
        name: &str,
        web_id: &str,
        entry: &SecurityEntry,
        apply_to_children: Option<bool>,
    ) -> Result<Call<'_, NoContent>, ApiError> {
        let name = require(&UPDATE_SECURITY_ENTRY, "name", name)?;
        let body = self.client.serialize(&UPDATE_SECURITY_ENTRY, entry)?;
        let mut q = QueryParams::new();
        q.push("applyToChildren", apply_to_children.as_ref());
        let request = self
            .web_id_request(UPDATE_SECURITY_ENTRY, web_id)?
            .path_param("name", self.client.parameter_to_string(name))
            .query(q)
            .body(body);
        Ok(self.call(request))
    }

    pub fn delete_security_entry(
        &self,
        name: &str,
        web_id: &str,
        apply_to_children: Option<bool>,
    ) -> Result<Call<'_, NoContent>, ApiError> {
        let name = require(&DELETE_SECURITY_ENTRY, "name", name)?;
        let mut q = QueryParams::new();
        q.push("applyToChildren", apply_to_children.as_ref());
        let request = self
            .web_id_request(DELETE_SECURITY_ENTRY, web_id)?
            .path_param("name", self.client.parameter_to_string(name))
            .query(q);
        Ok(self.call(request))
    }

    fn web_id_type_query(&self, web_id_type: Option<WebIdType>) -> QueryParams {
        let mut q = QueryParams::new();
        q.push("webIdType", web_id_type.or(self.default_web_id_type()).as_ref());
        q
    }
}
