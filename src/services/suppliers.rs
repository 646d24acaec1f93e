//! Supplier service: listing, keyed lookup and the derived site/contact and
//! search operations.

use crate::core::error::{MockError, MockResult};
use crate::core::response::CollectionResponse;
use crate::entities::{Resource, Supplier, SupplierContact, SupplierSite};
use crate::services::{EntityService, ListParams, fetch_by_key, list_pipeline};
use crate::storage::DataStore;
use async_trait::async_trait;

/// Facade over the `suppliers` entity type
#[derive(Clone)]
pub struct SupplierService {
    store: DataStore,
}

impl SupplierService {
    pub fn new(store: DataStore) -> Self {
        SupplierService { store }
    }

    /// Fetch one supplier by id.
    pub async fn get_by_id(&self, supplier_id: i64) -> MockResult<Supplier> {
        fetch_by_key(&self.store, supplier_id.into())
    }

    /// Sites of one supplier.
    pub async fn get_sites(&self, supplier_id: i64) -> MockResult<Vec<SupplierSite>> {
        Ok(self.get_by_id(supplier_id).await?.sites)
    }

    /// Contacts of one supplier.
    pub async fn get_contacts(&self, supplier_id: i64) -> MockResult<Vec<SupplierContact>> {
        Ok(self.get_by_id(supplier_id).await?.contacts)
    }

    /// Prefix search on the supplier name, case-insensitive.
    pub async fn search_by_name(
        &self,
        name: &str,
        params: ListParams,
    ) -> MockResult<CollectionResponse<Supplier>> {
        self.list(params.with_query(format!("Supplier like '{name}*'"))).await
    }

    /// Exact lookup by supplier number.
    pub async fn search_by_number(&self, supplier_number: &str) -> MockResult<Supplier> {
        let params = ListParams::default()
            .with_query(format!("SupplierNumber='{supplier_number}'"))
            .with_limit(1);
        self.list(params)
            .await?
            .items
            .into_iter()
            .next()
            .ok_or_else(|| MockError::not_found(Supplier::RESOURCE, supplier_number))
    }

    /// Suppliers whose status is ACTIVE.
    pub async fn get_active_suppliers(
        &self,
        params: ListParams,
    ) -> MockResult<CollectionResponse<Supplier>> {
        self.list(params.with_query("StatusCode='ACTIVE'")).await
    }

    /// Find the supplier owning a given site id.
    pub async fn get_supplier_by_site(&self, supplier_site_id: i64) -> MockResult<Supplier> {
        let all = self.list(ListParams::default().with_limit(i64::MAX)).await?;
        all.items
            .into_iter()
            .find(|supplier| {
                supplier
                    .sites
                    .iter()
                    .any(|site| site.supplier_site_id == supplier_site_id)
            })
            .ok_or_else(|| MockError::not_found("supplierSites", supplier_site_id))
    }
}

#[async_trait]
impl EntityService for SupplierService {
    type Entity = Supplier;

    async fn list(&self, params: ListParams) -> MockResult<CollectionResponse<Supplier>> {
        list_pipeline(&self.store, &params)
    }
}
