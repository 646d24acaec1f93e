//! Core building blocks: errors, records, the filter interpreter, and the
//! pagination/response-shaping pipeline.
//!
//! Everything in this module is a pure function of its inputs; the only
//! stateful component of the crate is [`crate::storage::DataStore`].

pub mod error;
pub mod page;
pub mod query;
pub mod record;
pub mod response;

pub use error::{MockError, MockResult};
pub use page::{Page, apply_order_by, paginate, sort_records};
pub use query::{FilterClause, FilterExpression, FilterOp, apply_filter};
pub use record::{Record, RecordKey};
pub use response::{
    ActionResponse, ActionResult, CollectionResponse, ResourceLink, collection_links, item_links,
    to_action_result, to_collection,
};
