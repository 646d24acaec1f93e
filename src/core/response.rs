//! Response envelopes mirroring the real API's wire contracts
//!
//! The shapes here are a compatibility surface: field names, casing and the
//! (unusual) `count` semantics are all preserved from the API being mocked.

use crate::core::error::MockResult;
use crate::core::page::Page;
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Navigation link in a REST response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResourceLink {
    pub rel: String,
    pub href: String,
    pub name: String,
    pub kind: String,
}

impl ResourceLink {
    fn new(rel: &str, href: String, name: &str, kind: &str) -> Self {
        ResourceLink {
            rel: rel.to_string(),
            href,
            name: name.to_string(),
            kind: kind.to_string(),
        }
    }
}

/// `self` link for a collection view (`/{resource}`)
pub fn collection_links(resource: &str) -> Vec<ResourceLink> {
    vec![ResourceLink::new(
        "self",
        format!("/{resource}"),
        resource,
        "collection",
    )]
}

/// `self` and `canonical` links for a single-item view (`/{resource}/{id}`)
pub fn item_links(resource: &str, id: impl std::fmt::Display) -> Vec<ResourceLink> {
    let href = format!("/{resource}/{id}");
    vec![
        ResourceLink::new("self", href.clone(), resource, "item"),
        ResourceLink::new("canonical", href, resource, "item"),
    ]
}

/// Generic collection envelope.
///
/// `count` is the number of items in this page, not the grand total — that
/// mirrors the upstream API's literal field semantics. Total size is only
/// recoverable through `has_more`/`offset`/`limit` arithmetic.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionResponse<T> {
    pub items: Vec<T>,
    pub count: usize,
    pub has_more: bool,
    pub limit: i64,
    pub offset: i64,
    #[serde(default)]
    pub links: Vec<ResourceLink>,
}

/// Shape a raw page into a typed collection envelope.
///
/// Each record is deserialized with an extra-fields-ignored policy (serde's
/// default for structs without `deny_unknown_fields`).
pub fn to_collection<T: DeserializeOwned>(page: Page, resource: &str) -> MockResult<CollectionResponse<T>> {
    let items = page
        .items
        .into_iter()
        .map(serde_json::from_value)
        .collect::<Result<Vec<T>, _>>()?;

    Ok(CollectionResponse {
        count: items.len(),
        items,
        has_more: page.has_more,
        limit: page.limit,
        offset: page.offset,
        links: collection_links(resource),
    })
}

/// Outcome of a simulated action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActionResult {
    Success,
    Failure,
}

/// Envelope returned by simulated action endpoints (cancel, submit, ...)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionResponse {
    pub result: ActionResult,
    pub message: String,
    pub action: String,
    pub timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<BTreeMap<String, Value>>,
}

/// Build an action envelope, synthesizing the default message when the
/// caller provides none.
pub fn to_action_result(
    action: &str,
    result: ActionResult,
    message: Option<String>,
    details: Option<BTreeMap<String, Value>>,
) -> ActionResponse {
    let message = message.unwrap_or_else(|| match result {
        ActionResult::Success => format!("Action '{action}' completed successfully."),
        ActionResult::Failure => format!("Action '{action}' failed."),
    });

    ActionResponse {
        result,
        message,
        action: action.to_string(),
        timestamp: Utc::now(),
        details,
    }
}
