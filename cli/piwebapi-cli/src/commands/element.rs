// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! AF element commands

use anyhow::Result;
use clap::{Args, Subcommand};
use piwebapi_client::{
    AttributesQuery, CancellationToken, ChildElementsQuery, Element, ElementApi,
    SecurityEntriesQuery, SelectQuery,
};

use crate::output::json;
use crate::output::table::{create_table, joined, or_dash, print_table};

#[derive(Subcommand, Clone)]
pub enum ElementCommand {
    /// Show an element by WebID
    Get(ElementGetArgs),
    /// Show an element by AF path
    GetByPath(ElementGetByPathArgs),
    /// List child elements
    #[command(alias = "ls")]
    Children(ElementChildrenArgs),
    /// List an element's attributes
    Attributes(ElementAttributesArgs),
    /// List an element's security entries
    SecurityEntries(ElementWebIdArgs),
    /// Delete an element and its children
    #[command(alias = "rm")]
    Delete(ElementWebIdArgs),
}

#[derive(Args, Clone)]
pub struct ElementWebIdArgs {
    /// Element WebID
    pub web_id: String,
}

#[derive(Args, Clone)]
pub struct ElementGetArgs {
    /// Element WebID
    pub web_id: String,

    /// Semicolon-separated fields to return (e.g. "Name;Path")
    #[arg(long)]
    pub selected_fields: Option<String>,
}

#[derive(Args, Clone)]
pub struct ElementGetByPathArgs {
    /// AF path, e.g. '\\PISRV\Database\Plant'
    pub path: String,
}

#[derive(Args, Clone)]
pub struct ElementChildrenArgs {
    /// Parent element WebID
    pub web_id: String,

    /// Name filter, '*' and '?' wildcards allowed
    #[arg(long, short = 'n')]
    pub name_filter: Option<String>,

    /// Maximum number of elements to return
    #[arg(long, short = 'm')]
    pub max_count: Option<i32>,

    /// Include all descendants, not only direct children
    #[arg(long)]
    pub full_hierarchy: bool,
}

#[derive(Args, Clone)]
pub struct ElementAttributesArgs {
    /// Element WebID
    pub web_id: String,

    /// Name filter, '*' and '?' wildcards allowed
    #[arg(long, short = 'n')]
    pub name_filter: Option<String>,
}

impl ElementCommand {
    pub async fn run(
        self,
        api: &ElementApi,
        cancel: &CancellationToken,
        use_json: bool,
    ) -> Result<()> {
        match self {
            Self::Get(args) => get_element(args, api, cancel, use_json).await,
            Self::GetByPath(args) => get_element_by_path(args, api, cancel, use_json).await,
            Self::Children(args) => list_children(args, api, cancel, use_json).await,
            Self::Attributes(args) => list_attributes(args, api, cancel, use_json).await,
            Self::SecurityEntries(args) => list_security_entries(args, api, cancel, use_json).await,
            Self::Delete(args) => delete_element(args, api, cancel).await,
        }
    }
}

async fn get_element(
    args: ElementGetArgs,
    api: &ElementApi,
    cancel: &CancellationToken,
    use_json: bool,
) -> Result<()> {
    let query = SelectQuery {
        selected_fields: args.selected_fields,
        ..Default::default()
    };
    let element = api.get(&args.web_id, &query)?.send(cancel).await?;
    show_element(&element, use_json)
}

async fn get_element_by_path(
    args: ElementGetByPathArgs,
    api: &ElementApi,
    cancel: &CancellationToken,
    use_json: bool,
) -> Result<()> {
    let element = api
        .get_by_path(&args.path, &SelectQuery::default())?
        .send(cancel)
        .await?;
    show_element(&element, use_json)
}

fn show_element(element: &Element, use_json: bool) -> Result<()> {
    if use_json {
        return json::print_json(element);
    }

    println!("Name:        {}", or_dash(element.name.as_deref()));
    println!("Path:        {}", or_dash(element.path.as_deref()));
    println!("Description: {}", or_dash(element.description.as_deref()));
    println!("Template:    {}", or_dash(element.template_name.as_deref()));
    println!("Categories:  {}", joined(element.category_names.as_deref()));
    println!(
        "Children:    {}",
        element.has_children.map_or("-", |c| if c { "yes" } else { "no" })
    );
    println!("WebId:       {}", or_dash(element.web_id.as_deref()));
    Ok(())
}

async fn list_children(
    args: ElementChildrenArgs,
    api: &ElementApi,
    cancel: &CancellationToken,
    use_json: bool,
) -> Result<()> {
    let query = ChildElementsQuery {
        name_filter: args.name_filter,
        max_count: args.max_count,
        search_full_hierarchy: args.full_hierarchy.then_some(true),
        ..Default::default()
    };
    let children = api.get_elements(&args.web_id, &query)?.send(cancel).await?;

    if use_json {
        return json::print_json(&children.items);
    }

    let mut table = create_table(&["NAME", "TEMPLATE", "CHILDREN", "WEBID"]);
    for element in &children {
        table.add_row(vec![
            or_dash(element.name.as_deref()).to_string(),
            or_dash(element.template_name.as_deref()).to_string(),
            element
                .has_children
                .map_or("-".to_string(), |c| c.to_string()),
            or_dash(element.web_id.as_deref()).to_string(),
        ]);
    }
    print_table(table);
    Ok(())
}

async fn list_attributes(
    args: ElementAttributesArgs,
    api: &ElementApi,
    cancel: &CancellationToken,
    use_json: bool,
) -> Result<()> {
    let query = AttributesQuery {
        name_filter: args.name_filter,
        ..Default::default()
    };
    let attributes = api.get_attributes(&args.web_id, &query)?.send(cancel).await?;

    if use_json {
        return json::print_json(&attributes.items);
    }

    let mut table = create_table(&["NAME", "TYPE", "DATA REFERENCE", "WEBID"]);
    for attribute in &attributes {
        table.add_row(vec![
            or_dash(attribute.name.as_deref()),
            or_dash(attribute.value_type.as_deref()),
            or_dash(attribute.data_reference_plug_in.as_deref()),
            or_dash(attribute.web_id.as_deref()),
        ]);
    }
    print_table(table);
    Ok(())
}

async fn list_security_entries(
    args: ElementWebIdArgs,
    api: &ElementApi,
    cancel: &CancellationToken,
    use_json: bool,
) -> Result<()> {
    let entries = api
        .get_security_entries(&args.web_id, &SecurityEntriesQuery::default())?
        .send(cancel)
        .await?;

    if use_json {
        return json::print_json(&entries.items);
    }

    let mut table = create_table(&["NAME", "IDENTITY", "ALLOW", "DENY"]);
    for entry in &entries {
        table.add_row(vec![
            or_dash(entry.name.as_deref()).to_string(),
            or_dash(entry.security_identity_name.as_deref()).to_string(),
            joined(entry.allow_rights.as_deref()),
            joined(entry.deny_rights.as_deref()),
        ]);
    }
    print_table(table);
    Ok(())
}

async fn delete_element(
    args: ElementWebIdArgs,
    api: &ElementApi,
    cancel: &CancellationToken,
) -> Result<()> {
    api.delete(&args.web_id)?.send(cancel).await?;
    println!("Deleted element {}", args.web_id);
    Ok(())
}
