//! Top-level client facade
//!
//! A [`MockClient`] owns one shared [`DataStore`] and hands out entity
//! services constructed over it. Clients and services are all cheap to
//! clone and every clone observes the same dataset snapshot.

use crate::config::{ClientConfig, DEFAULT_PAGE_SIZE};
use crate::core::error::MockResult;
use crate::services::{
    AcknowledgmentService, AgreementService, DraftPurchaseOrderService, ListParams,
    PurchaseOrderService, RequisitionService, SalesOrderService, SupplierService,
};
use crate::storage::DataStore;
use std::path::{Path, PathBuf};

/// Entry point mirroring the surface of the real API client.
///
/// # Example
/// ```rust,ignore
/// let client = MockClient::open("testdata/db.json")?;
/// let supplier = client.suppliers().get_by_id(1001).await?;
/// ```
#[derive(Clone, Debug)]
pub struct MockClient {
    store: DataStore,
    default_page_size: i64,
}

impl MockClient {
    /// Open a client over a dataset document.
    pub fn open(path: impl Into<PathBuf>) -> MockResult<MockClient> {
        Ok(MockClient {
            store: DataStore::open(path)?,
            default_page_size: DEFAULT_PAGE_SIZE,
        })
    }

    /// Open a client from a loaded configuration.
    pub fn from_config(config: &ClientConfig) -> MockResult<MockClient> {
        Ok(MockClient {
            store: DataStore::open(&config.data_path)?,
            default_page_size: config.default_page_size,
        })
    }

    /// List parameters seeded with this client's configured page size.
    pub fn list_params(&self) -> ListParams {
        ListParams::default().with_limit(self.default_page_size)
    }

    pub fn purchase_orders(&self) -> PurchaseOrderService {
        PurchaseOrderService::new(self.store.clone())
    }

    pub fn draft_purchase_orders(&self) -> DraftPurchaseOrderService {
        DraftPurchaseOrderService::new(self.store.clone())
    }

    pub fn suppliers(&self) -> SupplierService {
        SupplierService::new(self.store.clone())
    }

    pub fn requisitions(&self) -> RequisitionService {
        RequisitionService::new(self.store.clone())
    }

    pub fn agreements(&self) -> AgreementService {
        AgreementService::new(self.store.clone())
    }

    pub fn acknowledgments(&self) -> AcknowledgmentService {
        AcknowledgmentService::new(self.store.clone())
    }

    pub fn sales_orders(&self) -> SalesOrderService {
        SalesOrderService::new(self.store.clone())
    }

    /// The shared store backing every service of this client.
    pub fn store(&self) -> &DataStore {
        &self.store
    }

    /// Discard the loaded dataset; the next call reloads from the source.
    pub fn reset(&self) -> MockResult<()> {
        self.store.reset()
    }

    /// Replace the dataset with the content of a different document.
    pub fn swap_source(&self, path: impl AsRef<Path>) -> MockResult<()> {
        self.store.swap_source(path.as_ref())
    }
}
