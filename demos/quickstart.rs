//! Walkthrough of the mock client surface against the bundled dataset.
//!
//! Run with: `cargo run --example quickstart`

use fusion_mock::prelude::*;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let client = MockClient::open("testdata/db.json")?;

    // Filtered, sorted, paginated listing.
    let open_orders = client
        .purchase_orders()
        .list(
            ListParams::default()
                .with_query("StatusCode='OPEN'")
                .with_order_by("CreationDate:desc")
                .with_limit(10),
        )
        .await?;
    println!(
        "{} open purchase orders (hasMore: {})",
        open_orders.count, open_orders.has_more
    );
    for po in &open_orders.items {
        println!("  {} — {} ({})", po.order_number, po.supplier, po.status);
    }

    // Keyed lookups.
    let supplier = client.suppliers().get_by_id(1001).await?;
    println!(
        "supplier {}: {} site(s), {} contact(s)",
        supplier.supplier,
        supplier.sites.len(),
        supplier.contacts.len()
    );

    // A simulated document action.
    let outcome = client
        .purchase_orders()
        .cancel("300100574829561", Some("ordered in error"))
        .await?;
    println!("cancel: {:?} — {}", outcome.result, outcome.message);

    // Derived sales statistics.
    let history = client
        .sales_orders()
        .get_customer_order_history("CUST-1001")
        .await?;
    println!(
        "{}: {} orders, avg {:.2}, stddev {:.2}",
        history.customer_name,
        history.total_orders,
        history.average_order_amount,
        history.std_dev_amount
    );

    // Errors carry the offending id.
    match client.suppliers().get_by_id(999999999).await {
        Err(MockError::EntityNotFound { entity_type, id }) => {
            println!("as expected, no {entity_type} with id {id}");
        }
        other => println!("unexpected: {other:?}"),
    }

    Ok(())
}
