//! Cross-cutting consistency checks over the bundled dataset: every keyed
//! record is retrievable, repeated reads agree, and list/get views never
//! diverge.

use fusion_mock::core::record::key_of;
use fusion_mock::prelude::*;
use fusion_mock::storage::ENTITY_KEYS;

fn store() -> DataStore {
    DataStore::open(format!("{}/testdata/db.json", env!("CARGO_MANIFEST_DIR"))).unwrap()
}

#[test]
fn test_every_keyed_record_is_retrievable() {
    let store = store();
    for &(entity_type, key_field) in ENTITY_KEYS {
        for record in store.list(entity_type).unwrap() {
            let key = key_of(&record, key_field)
                .unwrap_or_else(|| panic!("{entity_type} record missing {key_field}"));
            let fetched = store.get(entity_type, key).unwrap().unwrap();
            assert_eq!(fetched, record, "get/list disagree for {entity_type}");
        }
    }
}

#[test]
fn test_repeated_reads_are_identical() {
    let store = store();
    for &(entity_type, _) in ENTITY_KEYS {
        assert_eq!(
            store.list(entity_type).unwrap(),
            store.list(entity_type).unwrap()
        );
    }
}

#[tokio::test]
async fn test_nested_children_survive_typed_shaping() {
    let client = MockClient::open(format!("{}/testdata/db.json", env!("CARGO_MANIFEST_DIR"))).unwrap();

    // Raw records carry nested arrays; the typed views must keep them.
    let po = client.purchase_orders().get_by_id("300100574829561").await.unwrap();
    assert_eq!(po.lines.len(), 2);
    assert_eq!(po.lines[0].schedules.len(), 2);

    let supplier = client.suppliers().get_by_id(1001).await.unwrap();
    assert_eq!(supplier.sites.len(), 2);
    assert_eq!(supplier.contacts.len(), 2);
}

#[tokio::test]
async fn test_dataset_cross_references_hold() {
    let client = MockClient::open(format!("{}/testdata/db.json", env!("CARGO_MANIFEST_DIR"))).unwrap();

    // Every purchase order references a supplier that exists.
    let orders = client.purchase_orders().list(ListParams::default()).await.unwrap();
    for po in &orders.items {
        let supplier = client.suppliers().get_by_id(po.supplier_id).await.unwrap();
        assert_eq!(supplier.supplier, po.supplier);
    }

    // Every sales order references a customer that exists.
    let sales = client.sales_orders().list(ListParams::default()).await.unwrap();
    for order in &sales.items {
        let customer = client.sales_orders().get_customer(&order.customer_id).await.unwrap();
        assert_eq!(Some(customer.customer_name), order.customer_name.clone());
    }
}
