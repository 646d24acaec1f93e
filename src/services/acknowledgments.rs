//! Purchase order acknowledgment service: listing, PO-keyed lookup and the
//! simulated supplier responses (accept, reject, accept with changes).

use crate::core::error::{MockError, MockResult};
use crate::core::record::field;
use crate::core::response::{ActionResponse, ActionResult, CollectionResponse, to_action_result};
use crate::entities::{AcknowledgmentSchedule, PurchaseOrderAcknowledgment};
use crate::services::{EntityService, ListParams, fetch_by_key, list_pipeline, list_pipeline_where};
use crate::storage::DataStore;
use async_trait::async_trait;
use serde_json::{Value, json};
use std::collections::BTreeMap;

/// Facade over the `purchaseOrderAcknowledgments` entity type
#[derive(Clone)]
pub struct AcknowledgmentService {
    store: DataStore,
}

impl AcknowledgmentService {
    pub fn new(store: DataStore) -> Self {
        AcknowledgmentService { store }
    }

    /// Fetch the acknowledgment keyed by its purchase order header id.
    pub async fn get_by_po_id(&self, po_header_id: i64) -> MockResult<PurchaseOrderAcknowledgment> {
        fetch_by_key(&self.store, po_header_id.into())
    }

    /// Schedule-level responses of one acknowledgment.
    pub async fn get_schedules(&self, po_header_id: i64) -> MockResult<Vec<AcknowledgmentSchedule>> {
        Ok(self.get_by_po_id(po_header_id).await?.schedules)
    }

    /// Acknowledgments the supplier has not responded to yet.
    ///
    /// Pending records are selected before pagination, so `count` and
    /// `has_more` describe the pending population, not the full list.
    pub async fn get_pending_acknowledgments(
        &self,
        params: ListParams,
    ) -> MockResult<CollectionResponse<PurchaseOrderAcknowledgment>> {
        list_pipeline_where(&self.store, &params, |record| {
            field(record, "AcknowledgmentResponse").is_none_or(Value::is_null)
        })
    }

    /// Simulate accepting the purchase order as communicated.
    pub async fn accept(&self, po_header_id: i64, note: Option<&str>) -> MockResult<ActionResponse> {
        self.respond("accept", "ACCEPTED", po_header_id, note, None).await
    }

    /// Simulate rejecting the purchase order.
    pub async fn reject(&self, po_header_id: i64, reason: &str) -> MockResult<ActionResponse> {
        self.respond("reject", "REJECTED", po_header_id, Some(reason), None).await
    }

    /// Simulate accepting with schedule-level changes.
    ///
    /// Every changed schedule number must exist on the acknowledgment.
    pub async fn accept_with_changes(
        &self,
        po_header_id: i64,
        changed_schedules: &[i64],
        note: Option<&str>,
    ) -> MockResult<ActionResponse> {
        let ack = self.get_by_po_id(po_header_id).await?;
        let missing: Vec<i64> = changed_schedules
            .iter()
            .copied()
            .filter(|n| !ack.schedules.iter().any(|s| s.schedule_number == *n))
            .collect();
        if !missing.is_empty() {
            return Err(MockError::InvalidArgument {
                message: format!(
                    "acknowledgment for order {} has no schedules {:?}",
                    ack.order_number, missing
                ),
            });
        }
        self.respond(
            "acceptWithChanges",
            "ACCEPTED_WITH_CHANGES",
            po_header_id,
            note,
            Some(changed_schedules),
        )
        .await
    }

    async fn respond(
        &self,
        action: &str,
        response_code: &str,
        po_header_id: i64,
        note: Option<&str>,
        changed_schedules: Option<&[i64]>,
    ) -> MockResult<ActionResponse> {
        let ack = self.get_by_po_id(po_header_id).await?;

        let mut details = BTreeMap::from([
            ("POHeaderId".to_string(), json!(ack.po_header_id)),
            ("OrderNumber".to_string(), json!(ack.order_number)),
            ("AcknowledgmentResponse".to_string(), json!(response_code)),
        ]);
        if let Some(note) = note {
            details.insert("Note".to_string(), json!(note));
        }
        if let Some(schedules) = changed_schedules {
            details.insert("ChangedSchedules".to_string(), json!(schedules));
        }

        if ack.acknowledgment_response.is_some() {
            let message = format!(
                "Purchase order {} has already been acknowledged.",
                ack.order_number
            );
            return Ok(to_action_result(
                action,
                ActionResult::Failure,
                Some(message),
                Some(details),
            ));
        }

        let message = format!(
            "Acknowledgment '{}' recorded for purchase order {}.",
            response_code, ack.order_number
        );
        Ok(to_action_result(
            action,
            ActionResult::Success,
            Some(message),
            Some(details),
        ))
    }
}

#[async_trait]
impl EntityService for AcknowledgmentService {
    type Entity = PurchaseOrderAcknowledgment;

    async fn list(
        &self,
        params: ListParams,
    ) -> MockResult<CollectionResponse<PurchaseOrderAcknowledgment>> {
        list_pipeline(&self.store, &params)
    }
}
