//! Purchase requisition service: listing, keyed lookup, status-derived
//! views and the simulated line actions (return, reassign, split).

use crate::core::error::{MockError, MockResult};
use crate::core::response::{ActionResponse, ActionResult, CollectionResponse, to_action_result};
use crate::entities::PurchaseRequisition;
use crate::services::{EntityService, ListParams, fetch_by_key, list_pipeline};
use crate::storage::DataStore;
use async_trait::async_trait;
use serde_json::json;
use std::collections::BTreeMap;

/// Facade over the `purchaseRequisitions` entity type
#[derive(Clone)]
pub struct RequisitionService {
    store: DataStore,
}

impl RequisitionService {
    pub fn new(store: DataStore) -> Self {
        RequisitionService { store }
    }

    /// Fetch one requisition by header id.
    pub async fn get_by_id(&self, requisition_header_id: i64) -> MockResult<PurchaseRequisition> {
        fetch_by_key(&self.store, requisition_header_id.into())
    }

    /// Requisitions in a given status code.
    pub async fn list_by_status(
        &self,
        status_code: &str,
        params: ListParams,
    ) -> MockResult<CollectionResponse<PurchaseRequisition>> {
        self.list(params.with_query(format!("StatusCode='{status_code}'"))).await
    }

    /// Approved requisitions.
    pub async fn get_approved(
        &self,
        params: ListParams,
    ) -> MockResult<CollectionResponse<PurchaseRequisition>> {
        self.list_by_status("APPROVED", params).await
    }

    /// Requisitions awaiting approval.
    pub async fn get_pending(
        &self,
        params: ListParams,
    ) -> MockResult<CollectionResponse<PurchaseRequisition>> {
        self.list_by_status("PENDING_APPROVAL", params).await
    }

    /// Simulate returning requisition lines to the preparer.
    pub async fn return_lines(
        &self,
        requisition_header_id: i64,
        line_numbers: &[i64],
        reason: &str,
    ) -> MockResult<ActionResponse> {
        let requisition = self.get_by_id(requisition_header_id).await?;
        let missing: Vec<i64> = line_numbers
            .iter()
            .copied()
            .filter(|n| !requisition.lines.iter().any(|line| line.line_number == *n))
            .collect();
        if !missing.is_empty() {
            return Err(MockError::InvalidArgument {
                message: format!(
                    "requisition {} has no lines {:?}",
                    requisition.requisition, missing
                ),
            });
        }

        let mut details = requisition_details(&requisition);
        details.insert("ReturnedLines".to_string(), json!(line_numbers));
        details.insert("Reason".to_string(), json!(reason));
        Ok(to_action_result(
            "returnLines",
            ActionResult::Success,
            Some(format!(
                "{} line(s) of requisition {} returned to preparer.",
                line_numbers.len(),
                requisition.requisition
            )),
            Some(details),
        ))
    }

    /// Simulate reassigning the requisition to another buyer.
    pub async fn reassign_buyer(
        &self,
        requisition_header_id: i64,
        new_buyer: &str,
    ) -> MockResult<ActionResponse> {
        let requisition = self.get_by_id(requisition_header_id).await?;
        let mut details = requisition_details(&requisition);
        details.insert("NewBuyer".to_string(), json!(new_buyer));
        Ok(to_action_result(
            "reassignBuyer",
            ActionResult::Success,
            Some(format!(
                "Requisition {} reassigned to buyer {}.",
                requisition.requisition, new_buyer
            )),
            Some(details),
        ))
    }

    /// Simulate splitting one requisition line into two by quantity.
    ///
    /// The split quantity must be positive and strictly smaller than the
    /// line's current quantity.
    pub async fn split_line(
        &self,
        requisition_header_id: i64,
        line_number: i64,
        split_quantity: f64,
    ) -> MockResult<ActionResponse> {
        let requisition = self.get_by_id(requisition_header_id).await?;
        let line = requisition
            .lines
            .iter()
            .find(|line| line.line_number == line_number)
            .ok_or_else(|| MockError::InvalidArgument {
                message: format!(
                    "requisition {} has no line {}",
                    requisition.requisition, line_number
                ),
            })?;

        if split_quantity <= 0.0 || split_quantity >= line.quantity {
            return Err(MockError::InvalidArgument {
                message: format!(
                    "split quantity {} must be between 0 and the line quantity {}",
                    split_quantity, line.quantity
                ),
            });
        }

        let mut details = requisition_details(&requisition);
        details.insert("LineNumber".to_string(), json!(line_number));
        details.insert("RemainingQuantity".to_string(), json!(line.quantity - split_quantity));
        details.insert("SplitQuantity".to_string(), json!(split_quantity));
        Ok(to_action_result(
            "splitLine",
            ActionResult::Success,
            Some(format!(
                "Line {} of requisition {} split at quantity {}.",
                line_number, requisition.requisition, split_quantity
            )),
            Some(details),
        ))
    }
}

fn requisition_details(requisition: &PurchaseRequisition) -> BTreeMap<String, serde_json::Value> {
    BTreeMap::from([
        (
            "RequisitionHeaderId".to_string(),
            json!(requisition.requisition_header_id),
        ),
        ("Requisition".to_string(), json!(requisition.requisition)),
    ])
}

#[async_trait]
impl EntityService for RequisitionService {
    type Entity = PurchaseRequisition;

    async fn list(
        &self,
        params: ListParams,
    ) -> MockResult<CollectionResponse<PurchaseRequisition>> {
        list_pipeline(&self.store, &params)
    }
}
