//! Typed entity models mirroring the real API's wire schemas
//!
//! Wire field names are PascalCase (with the original acronym casing kept,
//! e.g. `POHeaderId`, `UOMCode`); extra fields in the dataset are ignored
//! on deserialization. The filter/sort/paginate pipeline never sees these
//! types — it operates on raw records — so the models stay a pure shaping
//! concern at the response boundary.

pub mod procurement;
pub mod sales;

use serde::Serialize;
use serde::de::DeserializeOwned;

pub use procurement::{
    AcknowledgmentSchedule, DraftPoLine, DraftPurchaseOrder, PoLine, PoSchedule,
    PurchaseAgreement, PurchaseOrder, PurchaseOrderAcknowledgment, PurchaseRequisition,
    RequisitionLine, Supplier, SupplierContact, SupplierSite,
};
pub use sales::{
    Customer, CustomerOrderHistory, OrderLine, Product, ProductOrderHistory, SalesOrder,
};

/// A typed view of one dataset entity type.
///
/// Binds an entity model to its resource name (used in the dataset
/// document and in navigation links) and its declared primary-key field.
pub trait Resource: DeserializeOwned + Serialize + Clone + Send + Sync + 'static {
    /// Entity-type name, e.g. `"purchaseOrders"`
    const RESOURCE: &'static str;

    /// Declared primary-key field, e.g. `"POHeaderId"`
    const KEY_FIELD: &'static str;
}
