//! Entity service facades
//!
//! One service per entity type, each a thin composition of the shared
//! store, the filter interpreter, and the pagination/shaping pipeline.
//! Service methods are `async` purely to keep signatures compatible with
//! the real network client this mock replaces; nothing in here suspends.

pub mod acknowledgments;
pub mod agreements;
pub mod draft_purchase_orders;
pub mod purchase_orders;
pub mod requisitions;
pub mod sales_orders;
pub mod suppliers;

use crate::core::error::{MockError, MockResult};
use crate::core::page::{apply_order_by, paginate};
use crate::core::query::apply_filter;
use crate::core::record::{Record, RecordKey, field};
use crate::core::response::{CollectionResponse, to_collection};
use crate::entities::Resource;
use crate::storage::DataStore;
use async_trait::async_trait;
use serde::Deserialize;

pub use acknowledgments::AcknowledgmentService;
pub use agreements::AgreementService;
pub use draft_purchase_orders::DraftPurchaseOrderService;
pub use purchase_orders::PurchaseOrderService;
pub use requisitions::RequisitionService;
pub use sales_orders::{OrderSearchCriteria, SalesOrderService, SalesOrderUpdate};
pub use suppliers::SupplierService;

/// Parameters accepted by every `list` operation.
///
/// Defaults mirror the real API: 25 records per page starting at offset 0.
///
/// # Example
/// ```rust,ignore
/// let params = ListParams::default()
///     .with_query("StatusCode='OPEN'")
///     .with_limit(10);
/// let open = client.purchase_orders().list(params).await?;
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ListParams {
    /// Maximum number of records to return
    pub limit: i64,
    /// Number of records to skip
    pub offset: i64,
    /// Filter expression, e.g. `"StatusCode='OPEN'"`
    pub query: Option<String>,
    /// Sort expression, e.g. `"CreationDate:desc"`
    pub order_by: Option<String>,
}

impl Default for ListParams {
    fn default() -> Self {
        ListParams {
            limit: crate::config::DEFAULT_PAGE_SIZE,
            offset: 0,
            query: None,
            order_by: None,
        }
    }
}

impl ListParams {
    pub fn with_limit(mut self, limit: i64) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_offset(mut self, offset: i64) -> Self {
        self.offset = offset;
        self
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    pub fn with_order_by(mut self, order_by: impl Into<String>) -> Self {
        self.order_by = Some(order_by.into());
        self
    }
}

/// Common surface shared by every entity service
#[async_trait]
pub trait EntityService: Send + Sync {
    type Entity: Resource;

    /// List entities of this type: filter, sort, paginate, shape.
    async fn list(&self, params: ListParams) -> MockResult<CollectionResponse<Self::Entity>>;
}

/// The full list → filter → sort → paginate → shape pipeline for one
/// entity type. Records missing the declared key field are skipped up
/// front, matching the upstream behavior for partially-populated fixtures.
pub(crate) fn list_pipeline<T: Resource>(
    store: &DataStore,
    params: &ListParams,
) -> MockResult<CollectionResponse<T>> {
    list_pipeline_where(store, params, |_| true)
}

/// [`list_pipeline`] with an extra record predicate applied before the
/// paginate step, so `count`/`has_more` describe the restricted population.
/// For restrictions the filter grammar cannot express (e.g. field absence).
pub(crate) fn list_pipeline_where<T: Resource>(
    store: &DataStore,
    params: &ListParams,
    pred: impl Fn(&Record) -> bool,
) -> MockResult<CollectionResponse<T>> {
    let records: Vec<_> = store
        .list(T::RESOURCE)?
        .into_iter()
        .filter(|record| field(record, T::KEY_FIELD).is_some())
        .filter(|record| pred(record))
        .collect();

    let filtered = apply_filter(records, params.query.as_deref());
    let sorted = apply_order_by(filtered, params.order_by.as_deref());
    let page = paginate(sorted, params.limit, params.offset)?;
    to_collection(page, T::RESOURCE)
}

/// Keyed lookup returning a typed entity, converting the store's signal
/// value into [`MockError::EntityNotFound`] naming the requested id.
pub(crate) fn fetch_by_key<T: Resource>(store: &DataStore, key: RecordKey) -> MockResult<T> {
    match store.get(T::RESOURCE, key.clone())? {
        Some(record) => Ok(serde_json::from_value(record)?),
        None => Err(MockError::not_found(T::RESOURCE, key)),
    }
}
