//! Purchase agreement service: listing, keyed lookup and derived views.

use crate::core::error::{MockError, MockResult};
use crate::core::response::CollectionResponse;
use crate::entities::{PurchaseAgreement, Resource};
use crate::services::{EntityService, ListParams, fetch_by_key, list_pipeline};
use crate::storage::DataStore;
use async_trait::async_trait;

/// Facade over the `purchaseAgreements` entity type
#[derive(Clone)]
pub struct AgreementService {
    store: DataStore,
}

impl AgreementService {
    pub fn new(store: DataStore) -> Self {
        AgreementService { store }
    }

    /// Fetch one agreement by header id.
    pub async fn get_by_id(&self, agreement_header_id: i64) -> MockResult<PurchaseAgreement> {
        fetch_by_key(&self.store, agreement_header_id.into())
    }

    /// Lookup by the human-facing agreement number.
    pub async fn get_by_agreement_number(
        &self,
        agreement_number: &str,
    ) -> MockResult<PurchaseAgreement> {
        let params = ListParams::default()
            .with_query(format!("Agreement='{agreement_number}'"))
            .with_limit(1);
        self.list(params)
            .await?
            .items
            .into_iter()
            .next()
            .ok_or_else(|| MockError::not_found(PurchaseAgreement::RESOURCE, agreement_number))
    }

    /// Agreements negotiated with one supplier.
    pub async fn get_by_supplier(
        &self,
        supplier_id: i64,
        params: ListParams,
    ) -> MockResult<CollectionResponse<PurchaseAgreement>> {
        self.list(params.with_query(format!("SupplierId={supplier_id}"))).await
    }

    /// Agreements currently open for releases.
    pub async fn get_active_agreements(
        &self,
        params: ListParams,
    ) -> MockResult<CollectionResponse<PurchaseAgreement>> {
        self.list(params.with_query("StatusCode='OPEN'")).await
    }
}

#[async_trait]
impl EntityService for AgreementService {
    type Entity = PurchaseAgreement;

    async fn list(&self, params: ListParams) -> MockResult<CollectionResponse<PurchaseAgreement>> {
        list_pipeline(&self.store, &params)
    }
}
