//! Purchase order service: listing, keyed lookup, derived lookups and the
//! simulated document actions (cancel, close, communicate, acknowledge).

use crate::core::error::{MockError, MockResult};
use crate::core::response::{ActionResponse, ActionResult, CollectionResponse, to_action_result};
use crate::entities::{PoLine, PurchaseOrder, Resource};
use crate::services::{EntityService, ListParams, fetch_by_key, list_pipeline};
use crate::storage::DataStore;
use async_trait::async_trait;
use serde_json::json;
use std::collections::BTreeMap;

/// Facade over the `purchaseOrders` entity type
#[derive(Clone)]
pub struct PurchaseOrderService {
    store: DataStore,
}

/// Extract the numeric header id from a purchase order id string.
///
/// Callers sometimes hand over ids with a non-numeric envelope prefix
/// around the real header id, so any non-digit characters are stripped
/// before parsing.
fn parse_po_id(id: &str) -> MockResult<i64> {
    let digits: String = id.chars().filter(|c| c.is_ascii_digit()).collect();
    digits.parse().map_err(|_| MockError::InvalidArgument {
        message: format!("purchase order id '{id}' contains no numeric header id"),
    })
}

impl PurchaseOrderService {
    pub fn new(store: DataStore) -> Self {
        PurchaseOrderService { store }
    }

    /// Fetch one purchase order by header id.
    pub async fn get_by_id(&self, po_id: &str) -> MockResult<PurchaseOrder> {
        let header_id = parse_po_id(po_id)?;
        fetch_by_key(&self.store, header_id.into())
    }

    /// Lines of one purchase order.
    pub async fn get_lines(&self, po_id: &str) -> MockResult<Vec<PoLine>> {
        Ok(self.get_by_id(po_id).await?.lines)
    }

    /// Lookup by the human-facing order number, e.g. `"PO-2024-0001"`.
    pub async fn get_by_order_number(&self, order_number: &str) -> MockResult<PurchaseOrder> {
        let params = ListParams::default()
            .with_query(format!("OrderNumber='{order_number}'"))
            .with_limit(1);
        self.list(params)
            .await?
            .items
            .into_iter()
            .next()
            .ok_or_else(|| MockError::not_found(PurchaseOrder::RESOURCE, order_number))
    }

    /// All orders placed with one supplier.
    pub async fn get_by_supplier(
        &self,
        supplier_id: i64,
        params: ListParams,
    ) -> MockResult<CollectionResponse<PurchaseOrder>> {
        self.list(params.with_query(format!("SupplierId={supplier_id}"))).await
    }

    /// Orders still open for receiving or billing.
    pub async fn get_open_orders(
        &self,
        params: ListParams,
    ) -> MockResult<CollectionResponse<PurchaseOrder>> {
        self.list(params.with_query("StatusCode='OPEN'")).await
    }

    /// Simulate the cancel document action.
    pub async fn cancel(&self, po_id: &str, reason: Option<&str>) -> MockResult<ActionResponse> {
        self.terminal_action("cancel", "canceled", po_id, reason, &["CANCELED", "CLOSED"])
            .await
    }

    /// Simulate the close document action.
    pub async fn close(&self, po_id: &str, reason: Option<&str>) -> MockResult<ActionResponse> {
        self.terminal_action("close", "closed", po_id, reason, &["CLOSED"]).await
    }

    /// Simulate communicating the order to the supplier.
    pub async fn communicate(&self, po_id: &str) -> MockResult<ActionResponse> {
        let po = self.get_by_id(po_id).await?;
        let message = format!(
            "Purchase order {} communicated to supplier {}.",
            po.order_number, po.supplier
        );
        Ok(to_action_result(
            "communicate",
            ActionResult::Success,
            Some(message),
            Some(action_details(&po)),
        ))
    }

    /// Simulate recording an acknowledgment against the order.
    pub async fn acknowledge(&self, po_id: &str, response: &str) -> MockResult<ActionResponse> {
        let po = self.get_by_id(po_id).await?;
        let mut details = action_details(&po);
        details.insert("AcknowledgmentResponse".to_string(), json!(response));
        let message = format!(
            "Acknowledgment '{}' recorded for purchase order {}.",
            response, po.order_number
        );
        Ok(to_action_result(
            "acknowledge",
            ActionResult::Success,
            Some(message),
            Some(details),
        ))
    }

    /// Shared shape of cancel/close: fails when the document is already in
    /// one of the listed terminal states, succeeds otherwise.
    async fn terminal_action(
        &self,
        action: &str,
        past_tense: &str,
        po_id: &str,
        reason: Option<&str>,
        blocked_states: &[&str],
    ) -> MockResult<ActionResponse> {
        let po = self.get_by_id(po_id).await?;
        let mut details = action_details(&po);
        if let Some(reason) = reason {
            details.insert("Reason".to_string(), json!(reason));
        }

        if blocked_states.contains(&po.status_code.as_str()) {
            let message = format!(
                "Purchase order {} is already {} and cannot be {}.",
                po.order_number,
                po.status_code.to_lowercase(),
                past_tense
            );
            return Ok(to_action_result(
                action,
                ActionResult::Failure,
                Some(message),
                Some(details),
            ));
        }

        let message = format!(
            "Purchase order {} {} successfully.",
            po.order_number, past_tense
        );
        Ok(to_action_result(
            action,
            ActionResult::Success,
            Some(message),
            Some(details),
        ))
    }
}

fn action_details(po: &PurchaseOrder) -> BTreeMap<String, serde_json::Value> {
    BTreeMap::from([
        ("POHeaderId".to_string(), json!(po.po_header_id)),
        ("OrderNumber".to_string(), json!(po.order_number)),
    ])
}

#[async_trait]
impl EntityService for PurchaseOrderService {
    type Entity = PurchaseOrder;

    async fn list(&self, params: ListParams) -> MockResult<CollectionResponse<PurchaseOrder>> {
        list_pipeline(&self.store, &params)
    }
}
