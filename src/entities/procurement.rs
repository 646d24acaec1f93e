//! Procurement entity models: purchase orders, drafts, suppliers,
//! requisitions, agreements and acknowledgments.

use crate::entities::Resource;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// =============================================================================
// Purchase Orders
// =============================================================================

/// Purchase order schedule (shipment)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PoSchedule {
    #[serde(rename = "LineLocationId")]
    pub line_location_id: i64,
    #[serde(rename = "ScheduleNumber")]
    pub schedule_number: i64,
    #[serde(rename = "Quantity")]
    pub quantity: f64,
    #[serde(rename = "QuantityReceived", default)]
    pub quantity_received: Option<f64>,
    #[serde(rename = "QuantityBilled", default)]
    pub quantity_billed: Option<f64>,
    #[serde(rename = "ShipToOrganization", default)]
    pub ship_to_organization: Option<String>,
    #[serde(rename = "ShipToLocation", default)]
    pub ship_to_location: Option<String>,
    #[serde(rename = "NeedByDate", default)]
    pub need_by_date: Option<DateTime<Utc>>,
    #[serde(rename = "PromisedDate", default)]
    pub promised_date: Option<DateTime<Utc>>,
}

/// Purchase order line
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PoLine {
    #[serde(rename = "POLineId")]
    pub po_line_id: i64,
    #[serde(rename = "LineNumber")]
    pub line_number: i64,
    #[serde(rename = "LineStatus", default)]
    pub line_status: Option<String>,
    #[serde(rename = "LineStatusCode", default)]
    pub line_status_code: Option<String>,
    #[serde(rename = "ItemDescription", default)]
    pub item_description: Option<String>,
    #[serde(rename = "ItemNumber", default)]
    pub item_number: Option<String>,
    #[serde(rename = "CategoryName", default)]
    pub category_name: Option<String>,
    #[serde(rename = "Quantity")]
    pub quantity: f64,
    #[serde(rename = "UOM", default)]
    pub uom: Option<String>,
    #[serde(rename = "UnitPrice")]
    pub unit_price: f64,
    #[serde(rename = "Amount", default)]
    pub amount: Option<f64>,
    #[serde(rename = "NeedByDate", default)]
    pub need_by_date: Option<DateTime<Utc>>,
    #[serde(rename = "PromisedDate", default)]
    pub promised_date: Option<DateTime<Utc>>,
    #[serde(rename = "SourceAgreement", default)]
    pub source_agreement: Option<String>,
    #[serde(rename = "SourceAgreementId", default)]
    pub source_agreement_id: Option<i64>,
    #[serde(rename = "schedules", default)]
    pub schedules: Vec<PoSchedule>,
}

/// Purchase order header
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PurchaseOrder {
    #[serde(rename = "POHeaderId")]
    pub po_header_id: i64,
    #[serde(rename = "OrderNumber")]
    pub order_number: String,
    #[serde(rename = "Status")]
    pub status: String,
    #[serde(rename = "StatusCode")]
    pub status_code: String,
    #[serde(rename = "Supplier")]
    pub supplier: String,
    #[serde(rename = "SupplierId")]
    pub supplier_id: i64,
    #[serde(rename = "SupplierSite", default)]
    pub supplier_site: Option<String>,
    #[serde(rename = "SupplierSiteId", default)]
    pub supplier_site_id: Option<i64>,
    #[serde(rename = "ProcurementBU")]
    pub procurement_bu: String,
    #[serde(rename = "ProcurementBUId")]
    pub procurement_bu_id: i64,
    #[serde(rename = "RequisitioningBU", default)]
    pub requisitioning_bu: Option<String>,
    #[serde(rename = "SoldToLegalEntity", default)]
    pub sold_to_legal_entity: Option<String>,
    #[serde(rename = "BillToLocation", default)]
    pub bill_to_location: Option<String>,
    #[serde(rename = "Buyer", default)]
    pub buyer: Option<String>,
    #[serde(rename = "BuyerId", default)]
    pub buyer_id: Option<i64>,
    #[serde(rename = "Currency")]
    pub currency: String,
    #[serde(rename = "TotalAmount", default)]
    pub total_amount: Option<f64>,
    #[serde(rename = "CreationDate", default)]
    pub creation_date: Option<DateTime<Utc>>,
    #[serde(rename = "LastUpdateDate", default)]
    pub last_update_date: Option<DateTime<Utc>>,
    #[serde(rename = "OrderDate", default)]
    pub order_date: Option<DateTime<Utc>>,
    #[serde(rename = "Description", default)]
    pub description: Option<String>,
    #[serde(rename = "PaymentTerms", default)]
    pub payment_terms: Option<String>,
    #[serde(rename = "FOBPoint", default)]
    pub fob_point: Option<String>,
    #[serde(rename = "FreightTerms", default)]
    pub freight_terms: Option<String>,
    #[serde(rename = "ShippingMethod", default)]
    pub shipping_method: Option<String>,
    #[serde(rename = "AcknowledgmentStatus", default)]
    pub acknowledgment_status: Option<String>,
    #[serde(rename = "RequiredAcknowledgment", default)]
    pub required_acknowledgment: Option<String>,
    #[serde(rename = "AcknowledgmentDueDate", default)]
    pub acknowledgment_due_date: Option<DateTime<Utc>>,
    #[serde(rename = "CommunicatedDate", default)]
    pub communicated_date: Option<DateTime<Utc>>,
    #[serde(rename = "ClosedDate", default)]
    pub closed_date: Option<DateTime<Utc>>,
    #[serde(rename = "lines", default)]
    pub lines: Vec<PoLine>,
}

impl Resource for PurchaseOrder {
    const RESOURCE: &'static str = "purchaseOrders";
    const KEY_FIELD: &'static str = "POHeaderId";
}

// =============================================================================
// Draft Purchase Orders
// =============================================================================

/// Draft purchase order line
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DraftPoLine {
    #[serde(rename = "POLineId", default)]
    pub po_line_id: Option<i64>,
    #[serde(rename = "LineNumber")]
    pub line_number: i64,
    #[serde(rename = "ItemDescription", default)]
    pub item_description: Option<String>,
    #[serde(rename = "ItemNumber", default)]
    pub item_number: Option<String>,
    #[serde(rename = "CategoryName", default)]
    pub category_name: Option<String>,
    #[serde(rename = "Quantity")]
    pub quantity: f64,
    #[serde(rename = "UOM", default)]
    pub uom: Option<String>,
    #[serde(rename = "UnitPrice")]
    pub unit_price: f64,
    #[serde(rename = "Amount", default)]
    pub amount: Option<f64>,
    #[serde(rename = "NeedByDate", default)]
    pub need_by_date: Option<DateTime<Utc>>,
}

/// Draft purchase order header. Almost everything is optional while the
/// document is still being authored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DraftPurchaseOrder {
    #[serde(rename = "POHeaderId", default)]
    pub po_header_id: Option<i64>,
    #[serde(rename = "OrderNumber", default)]
    pub order_number: Option<String>,
    #[serde(rename = "Status", default)]
    pub status: Option<String>,
    #[serde(rename = "StatusCode", default)]
    pub status_code: Option<String>,
    #[serde(rename = "Supplier", default)]
    pub supplier: Option<String>,
    #[serde(rename = "SupplierId", default)]
    pub supplier_id: Option<i64>,
    #[serde(rename = "SupplierSite", default)]
    pub supplier_site: Option<String>,
    #[serde(rename = "ProcurementBU", default)]
    pub procurement_bu: Option<String>,
    #[serde(rename = "Buyer", default)]
    pub buyer: Option<String>,
    #[serde(rename = "Currency", default)]
    pub currency: Option<String>,
    #[serde(rename = "TotalAmount", default)]
    pub total_amount: Option<f64>,
    #[serde(rename = "CreationDate", default)]
    pub creation_date: Option<DateTime<Utc>>,
    #[serde(rename = "Description", default)]
    pub description: Option<String>,
    #[serde(rename = "lines", default)]
    pub lines: Vec<DraftPoLine>,
}

impl Resource for DraftPurchaseOrder {
    const RESOURCE: &'static str = "draftPurchaseOrders";
    const KEY_FIELD: &'static str = "POHeaderId";
}

// =============================================================================
// Suppliers
// =============================================================================

/// Supplier contact
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupplierContact {
    #[serde(rename = "ContactId")]
    pub contact_id: i64,
    #[serde(rename = "ContactName", default)]
    pub contact_name: Option<String>,
    #[serde(rename = "FirstName", default)]
    pub first_name: Option<String>,
    #[serde(rename = "LastName", default)]
    pub last_name: Option<String>,
    #[serde(rename = "Email", default)]
    pub email: Option<String>,
    #[serde(rename = "Phone", default)]
    pub phone: Option<String>,
    #[serde(rename = "Role", default)]
    pub role: Option<String>,
    #[serde(rename = "PrimaryContactFlag", default)]
    pub primary_contact_flag: bool,
    #[serde(rename = "Status", default)]
    pub status: Option<String>,
}

/// Supplier site
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupplierSite {
    #[serde(rename = "SupplierSiteId")]
    pub supplier_site_id: i64,
    #[serde(rename = "SupplierSite")]
    pub supplier_site: String,
    #[serde(rename = "Address", default)]
    pub address: Option<String>,
    #[serde(rename = "City", default)]
    pub city: Option<String>,
    #[serde(rename = "State", default)]
    pub state: Option<String>,
    #[serde(rename = "PostalCode", default)]
    pub postal_code: Option<String>,
    #[serde(rename = "Country", default)]
    pub country: Option<String>,
    #[serde(rename = "Status", default)]
    pub status: Option<String>,
    #[serde(rename = "PaymentTerms", default)]
    pub payment_terms: Option<String>,
    #[serde(rename = "PaySiteFlag", default)]
    pub pay_site_flag: bool,
    #[serde(rename = "PurchasingSiteFlag", default)]
    pub purchasing_site_flag: bool,
    #[serde(rename = "Email", default)]
    pub email: Option<String>,
    #[serde(rename = "Phone", default)]
    pub phone: Option<String>,
}

/// Supplier header
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Supplier {
    #[serde(rename = "SupplierId")]
    pub supplier_id: i64,
    #[serde(rename = "Supplier")]
    pub supplier: String,
    #[serde(rename = "SupplierNumber", default)]
    pub supplier_number: Option<String>,
    #[serde(rename = "Status", default)]
    pub status: Option<String>,
    #[serde(rename = "StatusCode", default)]
    pub status_code: Option<String>,
    #[serde(rename = "TaxRegistrationNumber", default)]
    pub tax_registration_number: Option<String>,
    #[serde(rename = "DUNSNumber", default)]
    pub duns_number: Option<String>,
    #[serde(rename = "SupplierType", default)]
    pub supplier_type: Option<String>,
    #[serde(rename = "BusinessRelationship", default)]
    pub business_relationship: Option<String>,
    #[serde(rename = "OneTimeSupplierFlag", default)]
    pub one_time_supplier_flag: bool,
    #[serde(rename = "CreationDate", default)]
    pub creation_date: Option<DateTime<Utc>>,
    #[serde(rename = "sites", default)]
    pub sites: Vec<SupplierSite>,
    #[serde(rename = "contacts", default)]
    pub contacts: Vec<SupplierContact>,
}

impl Resource for Supplier {
    const RESOURCE: &'static str = "suppliers";
    const KEY_FIELD: &'static str = "SupplierId";
}

// =============================================================================
// Requisitions
// =============================================================================

/// Requisition line
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequisitionLine {
    #[serde(rename = "RequisitionLineId")]
    pub requisition_line_id: i64,
    #[serde(rename = "LineNumber")]
    pub line_number: i64,
    #[serde(rename = "LineStatus", default)]
    pub line_status: Option<String>,
    #[serde(rename = "ItemDescription", default)]
    pub item_description: Option<String>,
    #[serde(rename = "ItemNumber", default)]
    pub item_number: Option<String>,
    #[serde(rename = "CategoryName", default)]
    pub category_name: Option<String>,
    #[serde(rename = "Quantity")]
    pub quantity: f64,
    #[serde(rename = "UOM", default)]
    pub uom: Option<String>,
    #[serde(rename = "UnitPrice", default)]
    pub unit_price: Option<f64>,
    #[serde(rename = "Amount", default)]
    pub amount: Option<f64>,
    #[serde(rename = "NeedByDate", default)]
    pub need_by_date: Option<DateTime<Utc>>,
    #[serde(rename = "SuggestedSupplier", default)]
    pub suggested_supplier: Option<String>,
    #[serde(rename = "SuggestedSupplierId", default)]
    pub suggested_supplier_id: Option<i64>,
    #[serde(rename = "UrgentFlag", default)]
    pub urgent_flag: bool,
}

/// Purchase requisition header
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PurchaseRequisition {
    #[serde(rename = "RequisitionHeaderId")]
    pub requisition_header_id: i64,
    #[serde(rename = "Requisition")]
    pub requisition: String,
    #[serde(rename = "Description", default)]
    pub description: Option<String>,
    #[serde(rename = "Status")]
    pub status: String,
    #[serde(rename = "StatusCode")]
    pub status_code: String,
    #[serde(rename = "PreparerName", default)]
    pub preparer_name: Option<String>,
    #[serde(rename = "PreparerId", default)]
    pub preparer_id: Option<i64>,
    #[serde(rename = "RequisitioningBU")]
    pub requisitioning_bu: String,
    #[serde(rename = "Currency")]
    pub currency: String,
    #[serde(rename = "TotalAmount", default)]
    pub total_amount: Option<f64>,
    #[serde(rename = "CreationDate", default)]
    pub creation_date: Option<DateTime<Utc>>,
    #[serde(rename = "SubmittedDate", default)]
    pub submitted_date: Option<DateTime<Utc>>,
    #[serde(rename = "ApprovalDate", default)]
    pub approval_date: Option<DateTime<Utc>>,
    #[serde(rename = "lines", default)]
    pub lines: Vec<RequisitionLine>,
}

impl Resource for PurchaseRequisition {
    const RESOURCE: &'static str = "purchaseRequisitions";
    const KEY_FIELD: &'static str = "RequisitionHeaderId";
}

// =============================================================================
// Agreements
// =============================================================================

/// Purchase agreement (blanket or contract)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PurchaseAgreement {
    #[serde(rename = "AgreementHeaderId")]
    pub agreement_header_id: i64,
    #[serde(rename = "Agreement")]
    pub agreement: String,
    #[serde(rename = "Description", default)]
    pub description: Option<String>,
    #[serde(rename = "Type", default)]
    pub agreement_type: Option<String>,
    #[serde(rename = "TypeCode", default)]
    pub type_code: Option<String>,
    #[serde(rename = "Status")]
    pub status: String,
    #[serde(rename = "StatusCode")]
    pub status_code: String,
    #[serde(rename = "Supplier")]
    pub supplier: String,
    #[serde(rename = "SupplierId")]
    pub supplier_id: i64,
    #[serde(rename = "SupplierSite", default)]
    pub supplier_site: Option<String>,
    #[serde(rename = "ProcurementBU")]
    pub procurement_bu: String,
    #[serde(rename = "Currency")]
    pub currency: String,
    #[serde(rename = "AgreedAmount", default)]
    pub agreed_amount: Option<f64>,
    #[serde(rename = "AmountReleased", default)]
    pub amount_released: Option<f64>,
    #[serde(rename = "AmountRemaining", default)]
    pub amount_remaining: Option<f64>,
    #[serde(rename = "EffectiveDate", default)]
    pub effective_date: Option<DateTime<Utc>>,
    #[serde(rename = "ExpirationDate", default)]
    pub expiration_date: Option<DateTime<Utc>>,
    #[serde(rename = "Buyer", default)]
    pub buyer: Option<String>,
    #[serde(rename = "PaymentTerms", default)]
    pub payment_terms: Option<String>,
    #[serde(rename = "AutomaticallyGenerateOrdersFlag", default)]
    pub automatically_generate_orders_flag: bool,
    #[serde(rename = "CreationDate", default)]
    pub creation_date: Option<DateTime<Utc>>,
}

impl Resource for PurchaseAgreement {
    const RESOURCE: &'static str = "purchaseAgreements";
    const KEY_FIELD: &'static str = "AgreementHeaderId";
}

// =============================================================================
// Acknowledgments
// =============================================================================

/// Acknowledgment schedule response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AcknowledgmentSchedule {
    #[serde(rename = "LineLocationId")]
    pub line_location_id: i64,
    #[serde(rename = "POHeaderId")]
    pub po_header_id: i64,
    #[serde(rename = "POLineId")]
    pub po_line_id: i64,
    #[serde(rename = "LineNumber")]
    pub line_number: i64,
    #[serde(rename = "ScheduleNumber")]
    pub schedule_number: i64,
    #[serde(rename = "Response", default)]
    pub response: Option<String>,
    #[serde(rename = "RejectionReason", default)]
    pub rejection_reason: Option<String>,
    #[serde(rename = "SupplierOrderLineNumber", default)]
    pub supplier_order_line_number: Option<String>,
}

/// Purchase order acknowledgment, keyed by the PO it acknowledges
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PurchaseOrderAcknowledgment {
    #[serde(rename = "POHeaderId")]
    pub po_header_id: i64,
    #[serde(rename = "OrderNumber")]
    pub order_number: String,
    #[serde(rename = "SoldToLegalEntity", default)]
    pub sold_to_legal_entity: Option<String>,
    #[serde(rename = "RequiredAcknowledgment", default)]
    pub required_acknowledgment: Option<String>,
    #[serde(rename = "RequiredAcknowledgmentCode", default)]
    pub required_acknowledgment_code: Option<String>,
    #[serde(rename = "AcknowledgmentDueDate", default)]
    pub acknowledgment_due_date: Option<DateTime<Utc>>,
    #[serde(rename = "AcknowledgmentWithinDays", default)]
    pub acknowledgment_within_days: Option<i64>,
    #[serde(rename = "AcknowledgmentResponse", default)]
    pub acknowledgment_response: Option<String>,
    #[serde(rename = "AcknowledgmentNote", default)]
    pub acknowledgment_note: Option<String>,
    #[serde(rename = "SupplierOrder", default)]
    pub supplier_order: Option<String>,
    #[serde(rename = "schedules", default)]
    pub schedules: Vec<AcknowledgmentSchedule>,
}

impl Resource for PurchaseOrderAcknowledgment {
    const RESOURCE: &'static str = "purchaseOrderAcknowledgments";
    const KEY_FIELD: &'static str = "POHeaderId";
}
