//! Integration tests for the sales order service: filtering, customers,
//! products and the derived order-history statistics.

use chrono::{TimeZone, Utc};
use fusion_mock::prelude::*;

fn client() -> MockClient {
    MockClient::open(format!("{}/testdata/db.json", env!("CARGO_MANIFEST_DIR"))).unwrap()
}

#[tokio::test]
async fn test_filter_booked_orders_preserves_source_order() {
    let booked = client()
        .sales_orders()
        .list(ListParams::default().with_query("StatusCode=Booked"))
        .await
        .unwrap();
    assert_eq!(booked.count, 3);
    let numbers: Vec<&str> = booked.items.iter().map(|o| o.order_number.as_str()).collect();
    assert_eq!(numbers, ["SO-2024-0001", "SO-2024-0003", "SO-2024-0005"]);
}

#[tokio::test]
async fn test_quoted_and_unquoted_literals_match_alike() {
    let client = client();
    let quoted = client
        .sales_orders()
        .list(ListParams::default().with_query("StatusCode='Booked'"))
        .await
        .unwrap();
    let bare = client
        .sales_orders()
        .list(ListParams::default().with_query("StatusCode=Booked"))
        .await
        .unwrap();
    assert_eq!(quoted.count, bare.count);
}

#[tokio::test]
async fn test_get_by_id_is_string_keyed() {
    let order = client().sales_orders().get_by_id("100100574829001").await.unwrap();
    assert_eq!(order.order_number, "SO-2024-0001");
    assert_eq!(order.lines.len(), 2);
    assert_eq!(order.total_quantity(), 55.0);
}

#[tokio::test]
async fn test_get_by_customer() {
    let orders = client()
        .sales_orders()
        .get_by_customer("CUST-1001", ListParams::default())
        .await
        .unwrap();
    assert_eq!(orders.count, 3);
    assert!(orders.items.iter().all(|o| o.customer_id == "CUST-1001"));
}

#[tokio::test]
async fn test_get_by_order_number() {
    let client = client();

    let order = client
        .sales_orders()
        .get_by_order_number("SO-2024-0003")
        .await
        .unwrap()
        .expect("order exists");
    assert_eq!(order.order_id, "100100574829003");

    let missing = client
        .sales_orders()
        .get_by_order_number("SO-9999-0000")
        .await
        .unwrap();
    assert!(missing.is_none());
}

#[tokio::test]
async fn test_search_orders_combines_criteria() {
    let client = client();

    let booked_over_1000 = client
        .sales_orders()
        .search_orders(
            OrderSearchCriteria::default()
                .with_status_code("Booked")
                .with_min_amount(1000.0),
        )
        .await
        .unwrap();
    assert!(!booked_over_1000.is_empty());
    assert!(booked_over_1000
        .iter()
        .all(|o| o.status == "Booked" && o.total_amount >= 1000.0));

    let windowed = client
        .sales_orders()
        .search_orders(
            OrderSearchCriteria::default()
                .with_from_date("2024-02-01T00:00:00Z".parse().unwrap())
                .with_to_date("2024-03-01T00:00:00Z".parse().unwrap()),
        )
        .await
        .unwrap();
    let numbers: Vec<&str> = windowed.iter().map(|o| o.order_number.as_str()).collect();
    assert_eq!(numbers, ["SO-2024-0002", "SO-2024-0003"]);
}

#[tokio::test]
async fn test_recent_orders_window() {
    let client = client();

    // The fixture's orders are all dated 2023-2024, far in the past.
    let yesterday = client.sales_orders().get_recent_orders(1, 100).await.unwrap();
    assert!(yesterday.is_empty());

    // A window wide enough to reach back to the fixture catches them all.
    let wide = client.sales_orders().get_recent_orders(10_000, 100).await.unwrap();
    assert_eq!(wide.len(), 6);
}

#[tokio::test]
async fn test_updates_are_simulated_and_leave_the_order_unchanged() {
    let client = client();

    let updated = client
        .sales_orders()
        .update_order(
            "100100574829001",
            SalesOrderUpdate::default().with_status_code("Shipped"),
        )
        .await
        .unwrap();
    assert_eq!(updated.status, "Booked");

    let updated = client
        .sales_orders()
        .update_order_field(
            "100100574829001",
            "SalespersonName",
            serde_json::json!("Jordan Blake"),
            Some("territory change"),
        )
        .await
        .unwrap();
    assert_eq!(updated.salesperson_name.as_deref(), Some("Morgan Ellis"));

    let updated = client
        .sales_orders()
        .update_order_line_quantity("100100574829001", "100200574829002", 40.0, None)
        .await
        .unwrap();
    assert_eq!(updated.lines[1].ordered_quantity, 25.0);
}

#[tokio::test]
async fn test_line_quantity_update_validates_the_line() {
    let err = client()
        .sales_orders()
        .update_order_line_quantity("100100574829001", "no-such-line", 40.0, None)
        .await
        .unwrap_err();
    assert!(matches!(err, MockError::InvalidArgument { .. }));
}

#[tokio::test]
async fn test_customers_and_products() {
    let client = client();

    let customers = client.sales_orders().list_customers(ListParams::default()).await.unwrap();
    assert_eq!(customers.count, 3);

    let customer = client.sales_orders().get_customer("CUST-1002").await.unwrap();
    assert_eq!(customer.customer_name, "Northwind Clinics");

    let product = client.sales_orders().get_product("ITEM-300").await.unwrap();
    assert_eq!(product.product_number, "PSU-HS");

    let err = client.sales_orders().get_customer("CUST-9999").await.unwrap_err();
    assert!(matches!(err, MockError::EntityNotFound { .. }));
}

#[tokio::test]
async fn test_customer_order_history_statistics() {
    let history = client()
        .sales_orders()
        .get_customer_order_history("CUST-1001")
        .await
        .unwrap();

    assert_eq!(history.customer_name, "Acme Retail Group");
    assert_eq!(history.total_orders, 3);
    assert!((history.total_amount - 5430.0).abs() < 1e-9);
    assert!((history.average_order_amount - 1810.0).abs() < 1e-9);
    assert_eq!(history.min_order_amount, 780.0);
    assert_eq!(history.max_order_amount, 3400.0);

    // Sample standard deviation of [1250, 3400, 780].
    let expected = (3902600.0f64 / 2.0).sqrt();
    assert!((history.std_dev_amount - expected).abs() < 1e-9);

    assert_eq!(
        history.first_order_date,
        Some(Utc.with_ymd_and_hms(2023, 12, 2, 8, 20, 0).unwrap())
    );
    assert_eq!(
        history.last_order_date,
        Some(Utc.with_ymd_and_hms(2024, 2, 4, 9, 0, 0).unwrap())
    );
    assert_eq!(history.orders.len(), 3);
}

#[tokio::test]
async fn test_product_order_history_statistics() {
    let history = client()
        .sales_orders()
        .get_product_order_history("ITEM-100")
        .await
        .unwrap();

    assert_eq!(history.product_number, "STPL-HD");
    assert_eq!(history.total_orders, 3);
    assert_eq!(history.total_quantity, 60.0);
    assert_eq!(history.average_quantity, 20.0);
    assert_eq!(history.max_quantity, 30.0);
    assert_eq!(history.min_quantity, 14.0);
    assert_eq!(history.average_price, 25.0);

    // Sample standard deviation of [30, 14, 16].
    let expected = (152.0f64 / 2.0).sqrt();
    assert!((history.std_dev_quantity - expected).abs() < 1e-9);
}

#[tokio::test]
async fn test_history_for_unknown_customer_is_entity_not_found() {
    let err = client()
        .sales_orders()
        .get_customer_order_history("CUST-0000")
        .await
        .unwrap_err();
    assert!(matches!(err, MockError::EntityNotFound { .. }));
}

#[tokio::test]
async fn test_filter_on_absent_field_matches_nothing() {
    let client = client();
    let orders = client
        .sales_orders()
        .list(ListParams::default().with_query("InventoryItemId='ITEM-100'"))
        .await
        .unwrap();
    // Top-level sales orders have no InventoryItemId field, so the clause
    // matches nothing.
    assert_eq!(orders.count, 0);
}
