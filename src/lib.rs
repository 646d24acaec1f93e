//! # Fusion Mock
//!
//! An in-process mock of an Oracle Fusion-style procurement and sales-order
//! REST API, backed by a JSON dataset document instead of a network.
//!
//! ## Features
//!
//! - **Typed Entity Services**: purchase orders, drafts, suppliers,
//!   requisitions, agreements, acknowledgments, sales orders
//! - **Query Filters**: the real API's finder grammar (`Field=value`,
//!   `Field>=value`, `Field like 'pattern*'`, `;`-separated conjunctions)
//! - **Pagination**: `limit`/`offset` with `hasMore` semantics preserved
//! - **Shared Session Store**: load-once dataset with primary-key indexes,
//!   shared by every service via cheap clones
//! - **Simulated Actions**: cancel, close, submit, acknowledge and friends
//!   return the real API's action envelopes without mutating the dataset
//! - **Wire-Faithful Shapes**: response field names, casing and quirks match
//!   the service being mocked
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use fusion_mock::prelude::*;
//!
//! let client = MockClient::open("testdata/db.json")?;
//!
//! let open_orders = client
//!     .purchase_orders()
//!     .list(ListParams::default().with_query("StatusCode='OPEN'"))
//!     .await?;
//!
//! let supplier = client.suppliers().get_by_id(1001).await?;
//! let history = client
//!     .sales_orders()
//!     .get_customer_order_history("CUST-1001")
//!     .await?;
//! ```

pub mod client;
pub mod config;
pub mod core;
pub mod entities;
pub mod services;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Client ===
    pub use crate::client::MockClient;

    // === Core ===
    pub use crate::core::{
        error::{MockError, MockResult},
        query::FilterExpression,
        record::{Record, RecordKey},
        response::{ActionResponse, ActionResult, CollectionResponse, ResourceLink},
    };

    // === Entities ===
    pub use crate::entities::{
        Customer, CustomerOrderHistory, DraftPurchaseOrder, Product, ProductOrderHistory,
        PurchaseAgreement, PurchaseOrder, PurchaseOrderAcknowledgment, PurchaseRequisition,
        Resource, SalesOrder, Supplier,
    };

    // === Services ===
    pub use crate::services::{
        AcknowledgmentService, AgreementService, DraftPurchaseOrderService, EntityService,
        ListParams, OrderSearchCriteria, PurchaseOrderService, RequisitionService,
        SalesOrderService, SalesOrderUpdate, SupplierService,
    };

    // === Storage ===
    pub use crate::storage::DataStore;

    // === Config ===
    pub use crate::config::ClientConfig;

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
    pub use chrono::{DateTime, Utc};
    pub use serde::{Deserialize, Serialize};
}
