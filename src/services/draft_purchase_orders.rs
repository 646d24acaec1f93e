//! Draft purchase order service: listing, keyed lookup and the simulated
//! authoring actions (submit, calculate tax, check funds).

use crate::core::error::MockResult;
use crate::core::response::{ActionResponse, ActionResult, CollectionResponse, to_action_result};
use crate::entities::DraftPurchaseOrder;
use crate::services::{EntityService, ListParams, fetch_by_key, list_pipeline};
use crate::storage::DataStore;
use async_trait::async_trait;
use serde_json::json;
use std::collections::BTreeMap;

/// Flat rate applied by the simulated tax calculation
const TAX_RATE: f64 = 0.08;

/// Facade over the `draftPurchaseOrders` entity type
#[derive(Clone)]
pub struct DraftPurchaseOrderService {
    store: DataStore,
}

impl DraftPurchaseOrderService {
    pub fn new(store: DataStore) -> Self {
        DraftPurchaseOrderService { store }
    }

    /// Fetch one draft by header id.
    pub async fn get_by_id(&self, po_header_id: i64) -> MockResult<DraftPurchaseOrder> {
        fetch_by_key(&self.store, po_header_id.into())
    }

    /// Simulate submitting the draft for approval.
    pub async fn submit(&self, po_header_id: i64) -> MockResult<ActionResponse> {
        let draft = self.get_by_id(po_header_id).await?;
        let label = draft_label(&draft);
        let mut details = draft_details(&draft);
        details.insert("NewStatus".to_string(), json!("PENDING_APPROVAL"));
        Ok(to_action_result(
            "submit",
            ActionResult::Success,
            Some(format!("Draft purchase order {label} submitted for approval.")),
            Some(details),
        ))
    }

    /// Simulate tax calculation over the draft's total amount.
    ///
    /// The amount is the header total when present, otherwise the sum of
    /// line amounts (falling back to quantity times unit price per line).
    pub async fn calculate_tax(&self, po_header_id: i64) -> MockResult<ActionResponse> {
        let draft = self.get_by_id(po_header_id).await?;
        let base = draft.total_amount.unwrap_or_else(|| {
            draft
                .lines
                .iter()
                .map(|line| line.amount.unwrap_or(line.quantity * line.unit_price))
                .sum()
        });
        let tax = (base * TAX_RATE * 100.0).round() / 100.0;

        let mut details = draft_details(&draft);
        details.insert("TaxableAmount".to_string(), json!(base));
        details.insert("TaxAmount".to_string(), json!(tax));
        details.insert("TotalWithTax".to_string(), json!(base + tax));
        if let Some(currency) = &draft.currency {
            details.insert("Currency".to_string(), json!(currency));
        }

        Ok(to_action_result(
            "calculateTax",
            ActionResult::Success,
            Some(format!("Tax calculated for draft purchase order {}.", draft_label(&draft))),
            Some(details),
        ))
    }

    /// Simulate a budgetary funds check. Always passes in the mock.
    pub async fn check_funds(&self, po_header_id: i64) -> MockResult<ActionResponse> {
        let draft = self.get_by_id(po_header_id).await?;
        let mut details = draft_details(&draft);
        details.insert("FundsStatus".to_string(), json!("PASSED"));
        Ok(to_action_result(
            "checkFunds",
            ActionResult::Success,
            Some(format!(
                "Funds check passed for draft purchase order {}.",
                draft_label(&draft)
            )),
            Some(details),
        ))
    }
}

fn draft_label(draft: &DraftPurchaseOrder) -> String {
    draft
        .order_number
        .clone()
        .or_else(|| draft.po_header_id.map(|id| id.to_string()))
        .unwrap_or_else(|| "(unnumbered)".to_string())
}

fn draft_details(draft: &DraftPurchaseOrder) -> BTreeMap<String, serde_json::Value> {
    let mut details = BTreeMap::new();
    if let Some(id) = draft.po_header_id {
        details.insert("POHeaderId".to_string(), json!(id));
    }
    if let Some(number) = &draft.order_number {
        details.insert("OrderNumber".to_string(), json!(number));
    }
    details
}

#[async_trait]
impl EntityService for DraftPurchaseOrderService {
    type Entity = DraftPurchaseOrder;

    async fn list(&self, params: ListParams) -> MockResult<CollectionResponse<DraftPurchaseOrder>> {
        list_pipeline(&self.store, &params)
    }
}
