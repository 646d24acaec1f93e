//! Sales-order entity models: orders, customers, products, and the derived
//! order-history aggregates used by downstream anomaly screening.

use crate::entities::Resource;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Product / inventory item
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "InventoryItemId")]
    pub product_id: String,
    #[serde(rename = "ProductNumber")]
    pub product_number: String,
    #[serde(rename = "ProductDescription", default)]
    pub product_description: Option<String>,
    #[serde(rename = "UOMCode", default)]
    pub uom: Option<String>,
    #[serde(rename = "UnitSellingPrice", default)]
    pub unit_price: Option<f64>,
}

impl Resource for Product {
    const RESOURCE: &'static str = "products";
    const KEY_FIELD: &'static str = "InventoryItemId";
}

/// Customer account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    #[serde(rename = "CustomerId")]
    pub customer_id: String,
    #[serde(rename = "CustomerNumber", default)]
    pub customer_number: Option<String>,
    #[serde(rename = "CustomerName")]
    pub customer_name: String,
    #[serde(rename = "AccountNumber", default)]
    pub account_number: Option<String>,
    #[serde(rename = "BillToSiteId", default)]
    pub site_id: Option<String>,
}

impl Resource for Customer {
    const RESOURCE: &'static str = "customers";
    const KEY_FIELD: &'static str = "CustomerId";
}

/// Sales order line
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderLine {
    #[serde(rename = "OrderLineId")]
    pub line_id: String,
    #[serde(rename = "LineNumber")]
    pub line_number: i64,
    #[serde(rename = "InventoryItemId")]
    pub product_id: String,
    #[serde(rename = "ProductNumber", default)]
    pub product_number: Option<String>,
    #[serde(rename = "ProductDescription", default)]
    pub product_description: Option<String>,
    #[serde(rename = "OrderedQuantity")]
    pub ordered_quantity: f64,
    #[serde(rename = "OrderedUOMCode", default)]
    pub ordered_uom: Option<String>,
    #[serde(rename = "UnitSellingPrice", default)]
    pub unit_selling_price: Option<f64>,
    #[serde(rename = "ExtendedAmount", default)]
    pub extended_amount: Option<f64>,
    #[serde(rename = "StatusCode", default)]
    pub status: Option<String>,
}

/// Sales order header
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalesOrder {
    #[serde(rename = "HeaderId")]
    pub order_id: String,
    #[serde(rename = "OrderNumber")]
    pub order_number: String,
    #[serde(rename = "OrderTypeCode", default)]
    pub order_type: Option<String>,
    #[serde(rename = "StatusCode")]
    pub status: String,
    #[serde(rename = "CustomerId")]
    pub customer_id: String,
    #[serde(rename = "CustomerName", default)]
    pub customer_name: Option<String>,
    #[serde(rename = "CustomerNumber", default)]
    pub customer_number: Option<String>,
    #[serde(rename = "TotalAmount")]
    pub total_amount: f64,
    #[serde(rename = "CurrencyCode", default = "default_currency")]
    pub currency_code: String,
    #[serde(rename = "OrderedDate")]
    pub order_date: DateTime<Utc>,
    #[serde(rename = "RequestedShipDate", default)]
    pub requested_ship_date: Option<DateTime<Utc>>,
    #[serde(rename = "CreationDate", default)]
    pub creation_date: Option<DateTime<Utc>>,
    #[serde(rename = "SalespersonName", default)]
    pub salesperson_name: Option<String>,
    #[serde(rename = "BusinessUnitName", default)]
    pub business_unit: Option<String>,
    #[serde(rename = "lines", default)]
    pub lines: Vec<OrderLine>,
}

fn default_currency() -> String {
    "USD".to_string()
}

impl Resource for SalesOrder {
    const RESOURCE: &'static str = "salesOrders";
    const KEY_FIELD: &'static str = "HeaderId";
}

impl SalesOrder {
    /// Sum of line quantities
    pub fn total_quantity(&self) -> f64 {
        self.lines.iter().map(|line| line.ordered_quantity).sum()
    }

    /// Find the line ordering a given product, if any
    pub fn line_for_product(&self, product_id: &str) -> Option<&OrderLine> {
        self.lines.iter().find(|line| line.product_id == product_id)
    }
}

/// Historical order statistics for one customer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerOrderHistory {
    pub customer_id: String,
    pub customer_name: String,
    pub total_orders: usize,
    pub total_amount: f64,
    pub average_order_amount: f64,
    pub max_order_amount: f64,
    pub min_order_amount: f64,
    pub std_dev_amount: f64,
    pub average_quantity: f64,
    pub first_order_date: Option<DateTime<Utc>>,
    pub last_order_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub orders: Vec<SalesOrder>,
}

/// Historical order statistics for one product
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductOrderHistory {
    pub product_id: String,
    pub product_number: String,
    pub product_description: Option<String>,
    pub total_orders: usize,
    pub total_quantity: f64,
    pub average_quantity: f64,
    pub max_quantity: f64,
    pub min_quantity: f64,
    pub std_dev_quantity: f64,
    pub average_price: f64,
    #[serde(default)]
    pub order_lines: Vec<OrderLine>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn order() -> SalesOrder {
        serde_json::from_value(json!({
            "HeaderId": "100100574829001",
            "OrderNumber": "SO-2024-0001",
            "StatusCode": "Booked",
            "CustomerId": "CUST-1001",
            "TotalAmount": 1250.0,
            "OrderedDate": "2024-01-15T10:30:00Z",
            "lines": [
                {"OrderLineId": "L1", "LineNumber": 1, "InventoryItemId": "ITEM-100",
                 "OrderedQuantity": 10.0, "UnitSellingPrice": 25.0},
                {"OrderLineId": "L2", "LineNumber": 2, "InventoryItemId": "ITEM-200",
                 "OrderedQuantity": 4.0}
            ]
        }))
        .unwrap()
    }

    #[test]
    fn test_order_totals_and_line_lookup() {
        let order = order();
        assert_eq!(order.total_quantity(), 14.0);
        assert_eq!(order.currency_code, "USD"); // defaulted
        assert!(order.line_for_product("ITEM-200").is_some());
        assert!(order.line_for_product("ITEM-999").is_none());
    }
}
